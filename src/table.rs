use crate::hashing::compute_hash;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Lookup table from hash value to the export name that produced it. Built
/// once for a given library name and read-only while scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    pub names: FxHashMap<u32, String>,
}

impl NameTable {
    /// Hashes each candidate in order against `lib_name`. Candidates that
    /// collide keep the later entry, the same way the loaders being matched
    /// would resolve whichever export the table scan reaches with that hash.
    pub fn build<I, S>(lib_name: &str, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for name in candidates {
            table.add_api_name(lib_name, name.into());
        }
        debug!("hashed {} names for {}", table.len(), lib_name);
        table
    }

    /// Inserts one name, overwriting any previous holder of the same hash.
    pub fn add_api_name(&mut self, lib_name: &str, name: String) {
        let hash = compute_hash(lib_name, &name);
        self.names.insert(hash, name);
    }

    pub fn get(&self, hash: u32) -> Option<&String> {
        self.names.get(&hash)
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.names.contains_key(&hash)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u32, &String)> {
        self.names.iter()
    }
}
