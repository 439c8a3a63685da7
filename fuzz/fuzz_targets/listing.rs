#![no_main]
use apihash_resolver::parse_listing_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = parse_listing_bytes(data);
});
