use crate::table::NameTable;
use tracing::debug;

/// One decoded instruction as the host hands it over: its address and the
/// immediate operand values it carries, in operand order. The number of
/// slots is up to the host, different architectures have different bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct OperandRecord {
    pub address: u64,
    pub values: Vec<u64>,
}

impl OperandRecord {
    pub fn new(address: u64, values: Vec<u64>) -> Self {
        Self { address, values }
    }
}

/// An instruction whose immediate matched a hashed export name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct MatchRecord {
    pub address: u64,
    pub name: String,
}

/// Walks the records in order looking their immediates up in `table`.
///
/// Immediates wider than 32 bits are truncated to their low word first, and
/// a zero word is never looked up since zero immediates are everywhere in
/// real code. At most one match is reported per record: the slot walk stops
/// at the first hit.
pub fn scan_records(table: &NameTable, records: &[OperandRecord]) -> Vec<MatchRecord> {
    let mut matches = Vec::new();
    for record in records {
        for value in &record.values {
            let value = *value as u32;
            if value == 0 {
                continue;
            }
            if let Some(name) = table.get(value) {
                debug!("[{:X}] {:#010X} is {}", record.address, value, name);
                matches.push(MatchRecord {
                    address: record.address,
                    name: name.clone(),
                });
                break;
            }
        }
    }
    matches
}

/// Hashes `candidates` against `lib_name` and scans the flat
/// `(address, value)` pairs, each pair standing for a single operand slot.
pub fn match_operands<I, S>(
    lib_name: &str,
    candidates: I,
    operands: &[(u64, u32)],
) -> Vec<MatchRecord>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let table = NameTable::build(lib_name, candidates);
    let records = operands
        .iter()
        .map(|(address, value)| OperandRecord::new(*address, vec![*value as u64]))
        .collect::<Vec<_>>();
    scan_records(&table, &records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_pairs_match() {
        let matches = match_operands(
            "KERNEL32.DLL",
            vec!["GetProcAddress", "LoadLibraryA"],
            &[(0x1000, 0x7802_F749), (0x1010, 0), (0x1020, 0xDEAD_BEEF)],
        );
        assert_eq!(
            matches,
            vec![MatchRecord {
                address: 0x1000,
                name: "GetProcAddress".to_string()
            }]
        );
    }

    #[test]
    fn zero_immediates_never_looked_up() {
        // "" hashes to 0 under an empty library name, a zero operand must
        // still not resolve to it
        let matches = match_operands("", vec![""], &[(0x1000, 0)]);
        assert!(matches.is_empty());
    }

    #[test]
    fn wide_immediates_truncate_to_low_word() {
        let table = NameTable::build("KERNEL32.DLL", vec!["LoadLibraryA"]);
        let records = vec![
            OperandRecord::new(0x2000, vec![0xFFFF_FFFF_0726_774C]),
            // low word zero, skipped even though the full value is nonzero
            OperandRecord::new(0x2010, vec![0x1_0000_0000]),
        ];
        let matches = scan_records(&table, &records);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].address, 0x2000);
        assert_eq!(matches[0].name, "LoadLibraryA");
    }

    #[test]
    fn one_match_per_instruction() {
        let table = NameTable::build("KERNEL32.DLL", vec!["GetProcAddress", "LoadLibraryA"]);
        let records = vec![OperandRecord::new(
            0x3000,
            vec![0, 0x0726_774C, 0x7802_F749],
        )];
        let matches = scan_records(&table, &records);
        // the walk stops on the LoadLibraryA hit, the later slot is ignored
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "LoadLibraryA");
    }

    #[test]
    fn output_preserves_record_order() {
        let table = NameTable::build("KERNEL32.DLL", vec!["GetProcAddress", "LoadLibraryA"]);
        let records = vec![
            OperandRecord::new(0x4020, vec![0x0726_774C]),
            OperandRecord::new(0x4000, vec![0xAAAA_AAAA]),
            OperandRecord::new(0x4010, vec![0x7802_F749]),
        ];
        let matches = scan_records(&table, &records);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].address, 0x4020);
        assert_eq!(matches[1].address, 0x4010);
    }

    #[test]
    fn collision_reports_later_candidate() {
        let hash = crate::hashing::compute_hash("KERNEL32.DLL", "wpwFoF660c");
        let matches = match_operands(
            "KERNEL32.DLL",
            vec!["wpwFoF660c", "Qz2TsY0YiA"],
            &[(0x5000, hash)],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Qz2TsY0YiA");
    }

    #[test]
    fn empty_inputs_give_empty_output() {
        assert!(match_operands("KERNEL32.DLL", Vec::<String>::new(), &[(0x1000, 1)]).is_empty());
        assert!(match_operands("KERNEL32.DLL", vec!["GetProcAddress"], &[]).is_empty());
    }
}
