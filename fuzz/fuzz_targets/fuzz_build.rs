#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Texts containing the terminator must be rejected, never panic
    let tree = match sfx::SuffixTree::build(data) {
        Ok(tree) => tree,
        Err(_) => {
            assert!(data.contains(&0));
            return;
        }
    };

    // Every leaf is a suffix, so every suffix must be found
    for start in (0..data.len()).step_by(data.len() / 16 + 1) {
        assert!(tree.contains(&data[start..]).unwrap());
    }
    let _ = tree.longest_repeated_substring();
});
