//! `taboo` censors a user-supplied list of forbidden words.
//!
//! Words are matched case-insensitively against the whitespace-delimited tokens of a sentence,
//! after a small set of punctuation characters has been deleted. Each match is replaced by a run
//! of `'*'` with the same number of characters as the original token.

mod censor;
mod error;
mod lines;
mod punctuation;
mod replace;
mod sanitize;
pub mod session;
mod tokenize;
mod words;

pub use censor::{censor_sentence, censor_word, Censor, CensorStr};
pub use error::{Error, Result};
pub use punctuation::Punctuation;
pub use replace::Replace;
pub use sanitize::sanitize;
pub use tokenize::{tokenize, Tokens};
pub use words::WordSet;

pub(crate) type Set<T> = rustc_hash::FxHashSet<T>;

use doc_comment::doctest;
doctest!("../README.md");
