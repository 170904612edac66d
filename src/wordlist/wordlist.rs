use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use delegate::delegate;
use metrics::{counter, histogram};
use serde::Serialize;
use tracing::{debug, info, instrument, trace};
use typed_builder::TypedBuilder;

use crate::alphabet::Normalization;
use crate::wordlist::error::WordlistError;
use crate::wordlist::trie::Trie;

/// A dictionary loaded into a trie, ready to answer completion queries.
#[derive(Debug, Default, Clone)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a dictionary file: one entry per line, optionally split into columns.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
    #[builder(default)]
    normalization: Normalization,
    #[builder(default = true)]
    skip_comments: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Lines that produced a word (duplicates included).
    pub words_read: usize,
    pub lines_skipped: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl FileFormat {
    /// Returns the raw word on `line`, or `None` when the line carries no word.
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<Option<&'a str>, WordlistError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || (self.skip_comments && trimmed.starts_with('#')) {
            return Ok(None);
        }
        match self.delimiter {
            None => Ok(Some(trimmed)),
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column)
                .map(|x| Some(x.trim()))
                .ok_or(WordlistError::MissingColumn { line: line_no, column: self.word_column }),
        }
    }
}

/// Completion result in the shape the CLI prints as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub prefix: String,
    pub completions: Vec<String>,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<(Wordlist, LoadStats), WordlistError> {
        let file = File::open(path.as_ref()).map_err(|source| WordlistError::Open {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Wordlist::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<(Wordlist, LoadStats), WordlistError> {
        let mut wordlist = Wordlist::new();
        let stats = wordlist.load(reader, format)?;
        Ok((wordlist, stats))
    }

    /// Adds every word in `reader` to this list.
    pub fn load<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<LoadStats, WordlistError> {
        let start = Instant::now();
        let mut words_read: usize = 0;
        let mut lines_skipped: usize = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| WordlistError::Read { line: line_no, source })?;

            let word = format.parse_line(&line, line_no)?
                .map(|x| format.normalization.apply(x))
                .filter(|x| !x.trim().is_empty());
            match word {
                Some(word) => {
                    self.trie.add(word.trim());
                    words_read += 1;
                    if words_read % 100000 == 0 {
                        debug!(words_read, word = %word, "loading");
                    }
                }
                None => {
                    trace!(line_no, "skipped line");
                    lines_skipped += 1;
                }
            }
        }

        let elapsed = start.elapsed();
        counter!("wordlist.words_read", words_read as u64);
        counter!("wordlist.lines_skipped", lines_skipped as u64);
        histogram!("wordlist.load_seconds", elapsed.as_secs_f64());
        info!(words_read, lines_skipped, distinct = self.trie.len(),
              seconds = elapsed.as_secs_f64(), "loaded word list");

        Ok(LoadStats { words_read, lines_skipped, elapsed })
    }

    delegate! {
        to self.trie {
            pub fn add(&mut self, word: &str);
            pub fn contains(&self, word: &str) -> bool;
            pub fn has_prefix(&self, prefix: &str) -> bool;
            pub fn words_with_prefix(&self, prefix: &str) -> Vec<String>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    /// Completions for `prefix` in lexicographic order, at most `limit` of them.
    pub fn complete(&self, prefix: &str, limit: Option<usize>) -> Completion {
        let mut completions = self.trie.words_with_prefix(prefix);
        completions.sort_unstable();
        if let Some(limit) = limit {
            completions.truncate(limit);
        }
        Completion { prefix: prefix.to_string(), completions }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl From<Trie> for Wordlist {
    fn from(trie: Trie) -> Self {
        Wordlist { trie }
    }
}
