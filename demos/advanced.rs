use taboo::{Censor, Punctuation, Replace, WordSet};

fn main() {
    let words = WordSet::from_lines(["Crap", "sword"]);
    let mut punctuation = Punctuation::default();
    punctuation.insert('!');

    let censored = Censor::new(&words)
        .with_censor_replacement('?')
        .with_punctuation(punctuation)
        .with_replace(Replace::WholeWords)
        .censor_sentence("Crap! 123 crap, swordfish and sword.");

    assert_eq!(censored, "????! 123 ????, swordfish and ?????.");
}
