use itertools::Itertools;
use std::env::args;
use std::process::exit;
use taboo::{Censor, WordSet};

pub fn main() {
    let mut args = args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: trace <word list> <sentence...>");
        exit(2);
    };
    let words = match WordSet::from_path(&path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };
    let input = args.join(" ");
    let censor = Censor::new(&words);

    println!("Tokens: [{}]", censor.tokens(&input).iter().format(", "));
    let censored = censor.censor_sentence(&input);
    println!("\"{}\" -> \"{}\" (clean={})", input, censored, censor.is_clean(&input));
}
