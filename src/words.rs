use crate::lines::read_line;
use crate::{sanitize, Error, Result, Set};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FromIterator;
use std::path::Path;

/// Set of forbidden words, each stored in its sanitized (trimmed, lowercase) form.
///
/// Blank lines in the source are kept as the empty word. Since tokens are never empty, the empty
/// word can only match when [`WordSet::contains`] is asked about a blank string directly.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordSet(Set<String>);

impl WordSet {
    /// Empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw lines, one word per line, in any case and with any padding.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines.into_iter().collect()
    }

    /// Drains a reader line by line. Line terminators (`\n` or `\r\n`) are not part of the word.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`; only a failed read is an error.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut words = Self::new();
        while let Some(line) = read_line(&mut reader)? {
            words.insert(&line);
        }
        Ok(words)
    }

    /// Reads a word list file. The file is fully read and closed before this returns.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let io_error = |source| Error::Io {
            path: path.to_owned(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        Self::from_reader(BufReader::new(file)).map_err(io_error)
    }

    /// Adds a word after sanitizing it.
    pub fn insert(&mut self, word: &str) {
        #[cfg(feature = "trace")]
        println!("Load word {:?} as {:?}", word, sanitize(word));

        self.0.insert(sanitize(word));
    }

    /// Removes a word, matched after sanitizing it.
    pub fn remove(&mut self, word: &str) {
        self.0.remove(&sanitize(word));
    }

    /// Returns `true` if the sanitized form of `word` is forbidden.
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(&sanitize(word))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sanitized words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

impl<S: AsRef<str>> Extend<S> for WordSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, WordSet};
    use serial_test::serial;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("taboo-{}-{}", std::process::id(), name))
    }

    #[test]
    fn normalized() {
        let words = WordSet::from_lines(["  Fool ", "IDIOT", "fool"]);
        assert_eq!(words.len(), 2);
        assert!(words.contains("fool"));
        assert!(words.contains("FOOL"));
        assert!(words.contains(" idiot\t"));
        assert!(!words.contains("foo"));
    }

    #[test]
    fn empty_line_is_kept() {
        let words = WordSet::from_lines(["fool", "", "   "]);
        assert_eq!(words.len(), 2);
        assert!(words.contains(""));
        assert!(words.contains("  "));
    }

    #[test]
    fn reader() {
        let words = WordSet::from_reader(Cursor::new("Fool\r\nidiot\n\nDunce")).unwrap();
        let mut sorted: Vec<_> = words.iter().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["", "dunce", "fool", "idiot"]);
    }

    #[test]
    fn customize() {
        let mut words = WordSet::new();
        assert!(words.is_empty());
        words.insert("Darn");
        assert!(words.contains("darn"));
        words.remove("DARN ");
        assert!(!words.contains("darn"));
        words.extend(vec![String::from("heck"), String::from("Drat")]);
        assert_eq!(words, WordSet::from_lines(["drat", "HECK"]));
    }

    #[test]
    #[serial]
    fn path() {
        let path = temp_path("words.txt");
        fs::write(&path, "world\n  SHOOT \n").unwrap();
        let words = WordSet::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, WordSet::from_lines(["world", "shoot"]));
    }

    #[test]
    #[serial]
    fn latin1_line() {
        let path = temp_path("latin1.txt");
        fs::write(&path, b"fool\ncaf\xe9\nworld\n").unwrap();
        let words = WordSet::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("fool"));
        assert!(words.contains("world"));
        assert!(words.contains("caf\u{FFFD}"));
    }

    #[test]
    #[serial]
    fn missing_path() {
        let path = temp_path("does-not-exist.txt");
        match WordSet::from_path(&path) {
            Err(Error::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let words = WordSet::from_lines(["Fool"]);
        let json = serde_json::to_string(&words).unwrap();
        assert_eq!(json, r#"["fool"]"#);
        let back: WordSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, words);
    }
}
