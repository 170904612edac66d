use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::trie::iterators::Completions;
use crate::wordlist::trie::node::{NodeArena, ROOT};

/// Prefix tree over arbitrary `char` sequences.
///
/// The empty word is a valid word: adding `""` marks the root terminal, and
/// the empty prefix matches every stored word.
#[derive(Clone, PartialEq, Eq)]
pub struct Trie {
    arena: NodeArena,
    size: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            arena: NodeArena::new(),
            size: 0,
        }
    }

    /// Stores `word`. Adding a word that is already present changes nothing.
    pub fn add(&mut self, word: &str) {
        let mut current = ROOT;
        for c in word.chars() {
            current = self.arena.get_or_create_child(current, c);
        }

        let end = self.arena.get_mut(current);
        if !end.is_terminal {
            end.is_terminal = true;
            self.size += 1;
        }
    }

    pub fn add_all<'f, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| self.add(x));
    }

    /// True only if `word` itself was added, not merely a longer word sharing it as a prefix.
    pub fn contains(&self, word: &str) -> bool {
        self.arena.descend(ROOT, word)
            .map(|x| self.arena.get(x).is_terminal)
            .unwrap_or(false)
    }

    /// True if some stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match self.arena.descend(ROOT, prefix) {
            None => false,
            Some(node) => node != ROOT || self.size > 0,
        }
    }

    /// Every stored word starting with `prefix`, `prefix` included when it is
    /// itself stored. The order of the result is unspecified.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix).collect()
    }

    /// Lazy form of [`Trie::words_with_prefix`].
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        match self.arena.descend(ROOT, prefix) {
            None => Completions::empty(&self.arena),
            Some(node) => Completions::new(&self.arena, node, prefix),
        }
    }

    pub fn words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        Trie::add(self, word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

impl<'f> Extend<&'f str> for Trie {
    fn extend<I: IntoIterator<Item=&'f str>>(&mut self, iter: I) {
        self.add_all(iter)
    }
}

impl<'f> FromIterator<&'f str> for Trie {
    fn from_iter<I: IntoIterator<Item=&'f str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.add_all(iter);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut words = self.words();
        words.sort();
        f.debug_struct("Trie")
            .field("size", &self.size)
            .field("nodes", &self.arena.len())
            .field("words", &words)
            .finish()
    }
}
