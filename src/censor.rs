use crate::{Punctuation, Replace, Tokens, WordSet};
use std::borrow::Cow;

/// Censor replaces the forbidden words of a [`WordSet`] in arbitrary sentences.
///
/// A sentence is split into tokens (see [`Tokens`]). Every token whose sanitized form is
/// forbidden is replaced, wherever its text occurs in the sentence, by a run of the censor
/// replacement character with as many characters as the token.
///
/// You can also make use of `Censor` via the [`CensorStr`] trait, which allows inline censoring
/// of `&str` with the default options.
#[derive(Clone, Debug)]
pub struct Censor<'a> {
    words: &'a WordSet,
    /// Options
    censor_replacement: char,
    punctuation: Punctuation,
    replace: Replace,
}

impl<'a> Censor<'a> {
    /// Creates a `Censor` for the given forbidden words, with default options.
    pub fn new(words: &'a WordSet) -> Self {
        Self {
            words,
            censor_replacement: '*',
            punctuation: Punctuation::default(),
            replace: Replace::default(),
        }
    }

    /// Sets the character used to censor forbidden words.
    ///
    /// The default is `'*'`.
    pub fn with_censor_replacement(&mut self, censor_replacement: char) -> &mut Self {
        self.censor_replacement = censor_replacement;
        self
    }

    /// Sets the characters deleted from a sentence before it is split into tokens. They are
    /// only deleted for the purpose of matching, and remain in the censored output.
    ///
    /// The default is `,`, `.` and `;`.
    pub fn with_punctuation(&mut self, punctuation: Punctuation) -> &mut Self {
        self.punctuation = punctuation;
        self
    }

    /// Selects how censored tokens are substituted into the sentence.
    ///
    /// The default is [`Replace::All`], which also hits forbidden words embedded in longer ones.
    pub fn with_replace(&mut self, replace: Replace) -> &mut Self {
        self.replace = replace;
        self
    }

    /// Splits a sentence into the tokens that are checked against the forbidden words.
    pub fn tokens<'s>(&self, sentence: &'s str) -> Tokens<'s> {
        Tokens::new(sentence, &self.punctuation)
    }

    /// Returns the token unchanged if it isn't forbidden. Otherwise, returns one censor
    /// replacement character per character of the original (not sanitized) token.
    pub fn censor_word<'t>(&self, token: &'t str) -> Cow<'t, str> {
        let forbidden = self.words.contains(token);

        #[cfg(feature = "trace")]
        println!("Token {:?}, forbidden={}", token, forbidden);

        if forbidden {
            Cow::Owned(
                std::iter::repeat(self.censor_replacement)
                    .take(token.chars().count())
                    .collect(),
            )
        } else {
            Cow::Borrowed(token)
        }
    }

    /// Produces a censored copy of the sentence.
    ///
    /// Tokens are visited left to right, and each replaces all of its occurrences in the sentence
    /// as censored so far. Repeated tokens are visited again, since an earlier replacement may
    /// have produced a new occurrence.
    pub fn censor_sentence(&self, sentence: &str) -> String {
        self.tokens(sentence)
            .iter()
            .fold(sentence.to_owned(), |censored, token| {
                match self.censor_word(token) {
                    Cow::Borrowed(_) => censored,
                    Cow::Owned(replacement) => {
                        #[cfg(feature = "trace")]
                        println!(" - Replace {:?} with {:?} in {:?}", token, replacement, censored);

                        self.replace.apply(&censored, token, &replacement)
                    }
                }
            })
    }

    /// Returns `true` if no token of the sentence is forbidden.
    pub fn is_clean(&self, sentence: &str) -> bool {
        self.tokens(sentence)
            .iter()
            .all(|token| !self.words.contains(token))
    }
}

/// Censors a single token with the default options.
pub fn censor_word(token: &str, words: &WordSet) -> String {
    Censor::new(words).censor_word(token).into_owned()
}

/// Censors a sentence with the default options.
pub fn censor_sentence(sentence: &str, words: &WordSet) -> String {
    Censor::new(words).censor_sentence(sentence)
}

/// CensorStr makes it easy to censor a `&str` by calling `.censor(&words)`.
pub trait CensorStr: Sized {
    /// The output is a newly allocated, censored string.
    fn censor(self, words: &WordSet) -> String;

    /// Returns `true` if the text contains no forbidden token.
    fn is_clean(self, words: &WordSet) -> bool;

    /// Logical opposite of `Self::is_clean`.
    fn is_taboo(self, words: &WordSet) -> bool {
        !self.is_clean(words)
    }
}

impl CensorStr for &str {
    fn censor(self, words: &WordSet) -> String {
        censor_sentence(self, words)
    }

    fn is_clean(self, words: &WordSet) -> bool {
        Censor::new(words).is_clean(self)
    }
}
