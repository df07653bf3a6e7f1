#![no_main]
use libfuzzer_sys::fuzz_target;
use taboo::{Censor, Replace, WordSet};

fuzz_target!(|data: &[u8]| {
    if !data.is_empty() {
        let flags = data[0];
        let input = &data[1..];

        if let Ok(text) = std::str::from_utf8(input) {
            // Forbid every token of the input itself, so that censoring actually happens.
            let words: WordSet = text
                .split_whitespace()
                .step_by(if flag(flags, 0) { 1 } else { 2 })
                .collect();

            let censored = Censor::new(&words)
                .with_censor_replacement(if flag(flags, 1) { '#' } else { '*' })
                .with_replace(if flag(flags, 2) {
                    Replace::WholeWords
                } else {
                    Replace::All
                })
                .censor_sentence(text);

            assert_eq!(censored.chars().count(), text.chars().count());
        }
    }
});

fn flag(flags: u8, index: u8) -> bool {
    ((flags >> index) & 1) == 1
}
