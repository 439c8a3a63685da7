use crate::matcher::MatchRecord;
use std::fmt;

/// Ordered result of a scan. The matcher produces the data, how it gets
/// applied (disassembly comments, log lines) is up to the host, so the
/// report just carries the records and knows how to render them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub matches: Vec<MatchRecord>,
}

impl MatchReport {
    pub fn new(matches: Vec<MatchRecord>) -> Self {
        Self { matches }
    }

    pub fn num_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Address to name pairs in scan order, ready to apply as annotations.
    pub fn annotations(&self) -> impl Iterator<Item = (u64, &str)> {
        self.matches.iter().map(|m| (m.address, m.name.as_str()))
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.matches {
            writeln!(f, "[{:X}] Found API hash for {}", m.address, m.name)?;
        }
        write!(f, "Matches found: {}", self.matches.len())
    }
}
