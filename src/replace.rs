/// How a token's censored form is substituted back into the sentence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replace {
    /// Every literal occurrence of the token, anywhere in the sentence.
    ///
    /// Occurrences inside longer words are replaced too: with `"sword"` forbidden,
    /// `"sword swordfish"` becomes `"***** *****fish"`.
    #[default]
    All,
    /// Only occurrences not touching an alphanumeric character on either side.
    WholeWords,
}

impl Replace {
    /// Replaces occurrences of `token` in `sentence` with `censored`.
    pub fn apply(self, sentence: &str, token: &str, censored: &str) -> String {
        if token.is_empty() || token == censored {
            return sentence.to_owned();
        }
        match self {
            Self::All => sentence.replace(token, censored),
            Self::WholeWords => replace_whole_words(sentence, token, censored),
        }
    }
}

fn replace_whole_words(sentence: &str, token: &str, censored: &str) -> String {
    let mut ret = String::with_capacity(sentence.len());
    let mut last = 0;
    for (start, _) in sentence.match_indices(token) {
        let end = start + token.len();
        let before = sentence[..start].chars().next_back();
        let after = sentence[end..].chars().next();
        let bounded = !before.map_or(false, char::is_alphanumeric)
            && !after.map_or(false, char::is_alphanumeric);
        if bounded {
            ret.push_str(&sentence[last..start]);
            ret.push_str(censored);
            last = end;
        }
    }
    ret.push_str(&sentence[last..]);
    ret
}
