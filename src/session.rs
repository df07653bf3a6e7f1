//! The interactive filter: read a word list filename, then echo every input line censored until
//! `exit` or the end of input.

use crate::lines::read_line;
use crate::{Censor, Result, WordSet};
use std::io::{self, BufRead, Write};

/// Line that ends the session. Compared as is, without trimming or case folding.
pub const EXIT: &str = "exit";
/// Printed once the session ends.
pub const FAREWELL: &str = "Bye!";

/// One line of session input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Sentence(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        if line == EXIT {
            Self::Exit
        } else {
            Self::Sentence(line)
        }
    }
}

/// Reads the word list filename: the first whitespace-delimited token, skipping blank lines. The
/// remainder of its line is discarded.
pub fn read_filename<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    while let Some(line) = read_line(input)? {
        if let Some(filename) = line.split_whitespace().next() {
            return Ok(Some(filename.to_owned()));
        }
    }
    Ok(None)
}

/// Loads the word list, falling back to an empty one (nothing is censored) if it can't be read.
pub fn load_words(filename: Option<&str>) -> WordSet {
    let Some(filename) = filename else {
        eprintln!("warning: no word list given, nothing will be censored");
        return WordSet::new();
    };
    match WordSet::from_path(filename) {
        Ok(words) => {
            #[cfg(feature = "trace")]
            println!("Loaded {} words from {}", words.len(), filename);

            words
        }
        Err(e) => {
            eprintln!("warning: {}, nothing will be censored", e);
            WordSet::new()
        }
    }
}

/// Echoes each input line censored, until `exit` or the end of input, then says goodbye.
pub fn censor_lines<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    censor: &Censor<'_>,
) -> Result<()> {
    while let Some(line) = read_line(input)? {
        match Command::parse(&line) {
            Command::Exit => break,
            Command::Sentence(sentence) => {
                writeln!(output, "{}", censor.censor_sentence(sentence))?;
            }
        }
    }
    writeln!(output, "{}", FAREWELL)?;
    output.flush()?;
    Ok(())
}

/// Runs a whole session with default censoring options.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let filename = read_filename(&mut input)?;
    let words = load_words(filename.as_deref());
    let censor = Censor::new(&words);
    censor_lines(&mut input, &mut output, &censor)
}
