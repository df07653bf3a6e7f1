use crate::Punctuation;
use std::borrow::Cow;
use std::str::SplitWhitespace;

/// The tokens of one sentence, with punctuation already deleted.
///
/// Iterating does not consume `Tokens`, so the sequence can be restarted with another call to
/// [`Tokens::iter`].
#[derive(Clone, Debug, PartialEq)]
pub struct Tokens<'a> {
    stripped: Cow<'a, str>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(sentence: &'a str, punctuation: &Punctuation) -> Self {
        Self {
            stripped: punctuation.strip(sentence),
        }
    }

    /// The sentence as the tokenizer sees it, without punctuation.
    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    /// Yields tokens left to right. Runs of whitespace are a single delimiter, and leading or
    /// trailing whitespace yields no empty tokens.
    pub fn iter(&self) -> SplitWhitespace<'_> {
        self.stripped.split_whitespace()
    }
}

impl<'a, 'b> IntoIterator for &'b Tokens<'a> {
    type Item = &'b str;
    type IntoIter = SplitWhitespace<'b>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tokenizes a sentence with the default punctuation (`,`, `.` and `;`).
pub fn tokenize(sentence: &str) -> Tokens<'_> {
    Tokens::new(sentence, &Punctuation::default())
}
