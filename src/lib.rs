//! Prefix tree (trie) for autocompletion, plus a loader that fills one from a
//! dictionary file.
//!
//! ```
//! use autocomplete::wordlist::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add_all(["cat", "car", "care", "dog"]);
//!
//! assert!(trie.contains("car"));
//! assert!(!trie.contains("ca"));
//!
//! let mut found = trie.words_with_prefix("ca");
//! found.sort();
//! assert_eq!(found, vec!["car", "care", "cat"]);
//! ```

pub mod alphabet;
pub mod wordlist;

pub use wordlist::trie::Trie;
