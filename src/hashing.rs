//! The rotate-and-add hash applied to `(library, export)` pairs. Position
//! independent loaders resolve imports by comparing precomputed values of
//! this hash against hashes of the export tables of loaded modules, so the
//! computation here has to stay bit-for-bit identical to what those loaders
//! embed in their code.

/// Hashes a library name and an export name into the combined 32-bit value a
/// loader stub would carry as an immediate.
///
/// The library pass folds bytes above `0x60` to uppercase by subtracting
/// `0x20`. The fold is deliberately unbounded at the top: bytes in
/// `0x7B..=0xFF` shift as well, matching the loaders this reproduces. Each
/// library byte is followed by an extra bare rotation standing in for the
/// zero high byte of the UTF-16 code unit, and the loop is closed out with
/// two more for the UTF-16 terminator. The export name pass is plain bytes,
/// case sensitive, no terminator.
pub fn compute_hash(lib_name: impl AsRef<[u8]>, api_name: impl AsRef<[u8]>) -> u32 {
    let mut result: u32 = 0;
    for &c in lib_name.as_ref() {
        let c = if c > 0x60 { c - 0x20 } else { c };
        result = result.rotate_right(13).wrapping_add(c as u32);
        result = result.rotate_right(13);
    }
    result = result.rotate_right(13);
    result = result.rotate_right(13);

    let mut hash2: u32 = 0;
    for &c in api_name.as_ref() {
        hash2 = hash2.rotate_right(13).wrapping_add(c as u32);
    }
    result.wrapping_add(hash2.rotate_right(13))
}
