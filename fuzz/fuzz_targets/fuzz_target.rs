#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], &[u8])| {
    differ_rs::fuzz::fuzz(data.0, data.1).unwrap();
});
