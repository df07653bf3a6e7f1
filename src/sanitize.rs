/// Lowercases a word and removes its leading and trailing whitespace.
///
/// Both the forbidden word list and every candidate token go through this function, so matching
/// is insensitive to case and to incidental padding on either side.
pub fn sanitize(word: &str) -> String {
    word.to_lowercase().trim().to_owned()
}
