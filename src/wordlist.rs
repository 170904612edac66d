pub mod trie;
pub mod index;
pub mod error;
pub mod wordlist;

pub use error::WordlistError;
pub use wordlist::{Completion, FileFormat, LoadStats, Wordlist};
