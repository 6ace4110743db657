#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(protein) = ribosome_seq::translate_sequence(data) {
        assert!(protein.len() <= data.len() / 3);
    }
});
