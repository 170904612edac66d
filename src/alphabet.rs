use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Puzzle alphabet kept by [`Normalization::Letters`].
pub const ALPHABET: &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ".as_bytes();

/// How the loader rewrites dictionary words before they reach the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[default]
    Verbatim,
    Lowercase,
    /// Uppercase ASCII letters and spaces only; everything else is dropped.
    Letters,
}

impl Normalization {
    pub fn apply<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self {
            Normalization::Verbatim => Cow::Borrowed(word),
            Normalization::Lowercase => Cow::Owned(word.to_lowercase()),
            Normalization::Letters => Cow::Owned(letters(word)),
        }
    }
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbatim" => Ok(Normalization::Verbatim),
            "lowercase" => Ok(Normalization::Lowercase),
            "letters" => Ok(Normalization::Letters),
            other => Err(format!("unknown normalization {:?} (expected verbatim, lowercase or letters)", other)),
        }
    }
}

fn letters(s: &str) -> String {
    s.to_ascii_uppercase().chars().filter(|&x| x.is_ascii() && ALPHABET.contains(&(x as u8))).collect()
}
