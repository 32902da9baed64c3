#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
}

fuzz_target!(|input: Input| {
    let Ok(tree) = sfx::SuffixTree::build(input.text) else {
        return;
    };
    let Ok(positions) = tree.find_all_occurrences(input.pattern) else {
        return;
    };

    assert_eq!(tree.count_occurrences(input.pattern).unwrap(), positions.len());
    for p in positions {
        assert_eq!(&input.text[p..p + input.pattern.len()], input.pattern);
    }

    let common = tree.longest_common_substring(input.pattern).unwrap();
    if tree.contains(input.pattern).unwrap() {
        assert_eq!(common.len(), input.pattern.len());
    }
});
