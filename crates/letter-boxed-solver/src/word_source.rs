//! Line-oriented dictionary input.
//!
//! A dictionary is read completely before a solver is built, so an
//! unreadable word list is reported up front and never mid-search.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Yields one trimmed word per non-blank line of the underlying reader
pub struct WordSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> WordSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Read every remaining word
    pub fn read_all(self) -> Result<Vec<String>, Error> {
        self.collect()
    }
}

impl WordSource<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open words file {:?}", path), e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for WordSource<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    let word = self.line.trim();
                    if !word.is_empty() {
                        return Some(Ok(word.to_string()));
                    }
                }
                Err(e) => return Some(Err(Error::io("failed to read words", e))),
            }
        }
    }
}

/// Read a whole dictionary file into memory
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let words = WordSource::from_path(path.as_ref())?.read_all()?;
    log::info!("read {} words from {:?}", words.len(), path.as_ref());
    Ok(words)
}
