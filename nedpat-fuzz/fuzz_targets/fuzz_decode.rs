#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(pattern) = nedpat::decode(data) {
        let encoded = nedpat::encode(&pattern);
        assert_eq!(nedpat::decode(&encoded), Ok(pattern.clone()));

        let _ = nedpat::render(&pattern, false);
    }
});
