pub mod trie;
pub mod iterators;

mod node;

pub use iterators::Completions;
pub use trie::Trie;
