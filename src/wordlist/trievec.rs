use crate::labelset::Label;

/// Naive trie supporting dynamic insertion.
///
/// Children are kept sorted by label, so that a breadth-first walk visits
/// them in alphabetical order. Used only while building a [`WordTrie`](crate::WordTrie).
#[derive(Debug, Default)]
pub struct TrieVec {
    children: Vec<(Label, Box<TrieVec>)>,
    terminal: bool,
}

impl TrieVec {
    pub fn new() -> TrieVec {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &[(Label, Box<Self>)] {
        &self.children
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }

    /// Insert `key`. Returns true if `key` was not present yet.
    pub fn insert<K: AsRef<[Label]>>(&mut self, key: K) -> bool {
        let mut t = self;
        for &c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c, Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        let added = !t.terminal;
        t.terminal = true;
        added
    }

    /// Returns `true` if the trie contains `key`.
    #[cfg(test)]
    pub fn has<K: AsRef<[Label]>>(&self, key: K) -> bool {
        let mut t = self;
        for c in key.as_ref() {
            match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => t = &t.children[pos].1,
                Err(_) => return false,
            }
        }
        t.terminal
    }
}
