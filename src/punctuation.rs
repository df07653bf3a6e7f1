use crate::Set;
use lazy_static::lazy_static;
use std::borrow::Cow;
use std::iter::FromIterator;

lazy_static! {
    pub(crate) static ref PUNCTUATION: Punctuation = Punctuation::from_iter([',', '.', ';']);
}

/// Set of characters to delete from a sentence before splitting it into tokens.
///
/// The default is `,`, `.` and `;`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Punctuation(Set<char>);

impl Default for Punctuation {
    fn default() -> Self {
        PUNCTUATION.clone()
    }
}

impl Punctuation {
    /// Empty.
    pub fn new() -> Self {
        Self(Set::default())
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Adds a character to delete.
    pub fn insert(&mut self, c: char) {
        self.0.insert(c);
    }

    /// Stops deleting a character.
    pub fn remove(&mut self, c: char) {
        self.0.remove(&c);
    }

    /// Deletes every occurrence of these characters. Nothing is inserted in their place, so
    /// `"end.End"` becomes `"endEnd"`.
    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().any(|c| self.contains(c)) {
            Cow::Owned(text.chars().filter(|&c| !self.contains(c)).collect())
        } else {
            Cow::Borrowed(text)
        }
    }
}

impl FromIterator<char> for Punctuation {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
