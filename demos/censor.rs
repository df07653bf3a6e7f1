use taboo::{CensorStr, WordSet};

fn main() {
    let words = WordSet::from_lines(["fool", "darn", "sword"]);

    // Clean sentences are unaffected.
    show_censor("Hello, world.", &words);

    // Forbidden words are censored in any case, punctuation is kept.
    show_censor("You are a fool and a FOOL; darn it.", &words);

    // Words containing a forbidden word are hit too.
    show_censor("He ate swordfish with a sword.", &words);
}

fn show_censor(text: &str, words: &WordSet) {
    println!("{} -> {}", text, text.censor(words));
}
