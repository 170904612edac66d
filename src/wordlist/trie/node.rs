use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// Position of a node inside the trie's arena.
pub(crate) type NodeId = usize;

pub(crate) const ROOT: NodeId = 0;

#[derive(Default, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) children: HashMap<char, NodeId>,
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut letters = self.children.keys().collect::<Vec<_>>();
        letters.sort();
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &letters)
            .finish()
    }
}

/// Flat node storage. Every node except the root is referenced by exactly one
/// parent edge, so the table is a strict ownership tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    pub(crate) fn new() -> NodeArena {
        NodeArena { nodes: vec![TrieNode::default()] }
    }

    pub(crate) fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id]
    }

    pub(crate) fn get_or_create_child(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(child) = self.nodes[parent].get_child(c) {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[parent].children.insert(c, child);
        child
    }

    /// Follows `word` edge by edge from `start`.
    pub(crate) fn descend(&self, start: NodeId, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(start, |node, c| self.nodes[node].get_child(c))
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeArena, ROOT};

    #[test]
    fn creates_children_lazily() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.len(), 1);

        let a = arena.get_or_create_child(ROOT, 'a');
        let again = arena.get_or_create_child(ROOT, 'a');
        assert_eq!(a, again);
        assert_eq!(arena.len(), 2);

        let b = arena.get_or_create_child(a, 'b');
        assert_eq!(arena.descend(ROOT, "ab"), Some(b));
        assert_eq!(arena.descend(ROOT, "ba"), None);
        assert!(arena.get(b).children.is_empty());
        assert_eq!(arena.get(a).get_child('b'), Some(b));
    }

    #[test]
    fn descend_empty_word_stays_put() {
        let arena = NodeArena::new();
        assert_eq!(arena.descend(ROOT, ""), Some(ROOT));
    }
}
