use crate::wordlist::trie::node::{NodeArena, NodeId};

/// Lazy depth-first walk over every terminal node below a starting node,
/// yielding the spelled word for each. Order is unspecified.
///
/// Uses an explicit stack instead of recursion, so long words never grow the
/// call stack. All entries share one path buffer: each entry remembers how
/// long the path was at its parent, and the buffer is cut back to that length
/// before the entry's own letter is appended.
#[derive(Debug)]
pub struct Completions<'a> {
    arena: &'a NodeArena,
    path: String,
    stack: Vec<Frame>,
}

#[derive(Debug)]
struct Frame {
    node: NodeId,
    parent_len: usize,
    letter: Option<char>,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(arena: &'a NodeArena, start: NodeId, prefix: &str) -> Completions<'a> {
        Completions {
            arena,
            path: prefix.to_string(),
            stack: vec![Frame { node: start, parent_len: prefix.len(), letter: None }],
        }
    }

    pub(crate) fn empty(arena: &'a NodeArena) -> Completions<'a> {
        Completions {
            arena,
            path: String::new(),
            stack: vec![],
        }
    }
}

impl<'a> Iterator for Completions<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frame { node, parent_len, letter }) = self.stack.pop() {
            self.path.truncate(parent_len);
            if let Some(c) = letter {
                self.path.push(c);
            }

            let node = self.arena.get(node);
            let len = self.path.len();
            self.stack.extend(node.children.iter().map(|(&c, &child)| Frame {
                node: child,
                parent_len: len,
                letter: Some(c),
            }));

            if node.is_terminal {
                return Some(self.path.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::iterators::Completions;
    use crate::wordlist::trie::node::{NodeArena, ROOT};

    #[test]
    fn walks_only_below_start() {
        let mut arena = NodeArena::new();
        let a = arena.get_or_create_child(ROOT, 'a');
        let ab = arena.get_or_create_child(a, 'b');
        let b = arena.get_or_create_child(ROOT, 'b');
        arena.get_mut(ab).is_terminal = true;
        arena.get_mut(b).is_terminal = true;

        let mut below_a = Completions::new(&arena, a, "a").collect::<Vec<_>>();
        below_a.sort();
        assert_eq!(below_a, vec!["ab"]);

        let mut all = Completions::new(&arena, ROOT, "").collect::<Vec<_>>();
        all.sort();
        assert_eq!(all, vec!["ab", "b"]);

        assert_eq!(Completions::empty(&arena).next(), None);
    }
}
