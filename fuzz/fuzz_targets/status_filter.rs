#![no_main]

use libfuzzer_sys::fuzz_target;
use vigil::incidents::parse_status_filter;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let _ = parse_status_filter(Some(&input));
});
