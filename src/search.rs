use crate::board::Board;
use crate::grid::{Adjacency, NCELLS};
use crate::labelset::label_of;
use crate::score::MIN_WORD_LEN;
use crate::wordlist::{WordTrie, ROOT};
use log::trace;
use std::collections::HashMap;
use tinyvec::ArrayVec;

/// Cells of a path, in the order they are visited.
pub type Path = ArrayVec<[u8; NCELLS]>;

/// State of one depth-first search over a board.
///
/// Every cell of the board is the root of a walk that only continues while the
/// spelled letters are a prefix in the trie. A cell is used at most once per walk,
/// which is tracked in a 16 bit mask.
pub(crate) struct Search<'a> {
    board: &'a Board,
    trie: &'a WordTrie,
    adjacency: &'a Adjacency,
    path: Path,
    found: HashMap<String, Path>,
}

impl<'a> Search<'a> {
    pub fn new(board: &'a Board, trie: &'a WordTrie, adjacency: &'a Adjacency) -> Search<'a> {
        Search {
            board,
            trie,
            adjacency,
            path: Path::new(),
            found: HashMap::new(),
        }
    }

    /// Walk from every cell. Returns each found word with the first path that spells it.
    pub fn run(mut self) -> HashMap<String, Path> {
        for cell in 0..NCELLS {
            self.visit(cell, 0, ROOT);
        }
        self.found
    }

    fn visit(&mut self, cell: usize, visited: u16, node: usize) {
        let label = match label_of(self.board[cell]) {
            Some(label) => label,
            None => return,
        };
        let (child, terminal) = match self.trie.child(node, label) {
            Some(next) => next,
            None => return,
        };
        let visited = visited | 1 << cell;
        self.path.push(cell as u8);

        if terminal && self.path.len() >= MIN_WORD_LEN {
            let word: String = self
                .path
                .iter()
                .map(|&c| self.board[c as usize] as char)
                .collect();
            if !self.found.contains_key(&word) {
                trace!("found word: {}", word);
                self.found.insert(word, self.path);
            }
        }

        let adjacency = self.adjacency;
        for &next in adjacency.neighbors(cell) {
            if visited & (1 << next) == 0 {
                self.visit(next as usize, visited, child);
            }
        }
        self.path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(words: &[&str], board: &str) -> HashMap<String, Path> {
        let trie = WordTrie::from_words(words);
        let board: Board = board.parse().unwrap();
        let adjacency = Adjacency::new();
        Search::new(&board, &trie, &adjacency).run()
    }

    #[test]
    fn test_row_word() {
        let found = search(&["cat", "cats", "sat", "tac"], "catsxxxxxxxxxxxx");
        let mut words: Vec<&str> = found.keys().map(String::as_str).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["cat", "cats", "tac"]);
        assert_eq!(found["cats"].as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_no_cell_reuse() {
        // only two a's on the board
        let found = search(&["aaa"], "abxxaxxxxxxxxxxx");
        assert!(found.is_empty());
        let found = search(&["aaa"], "aaxxaxxxxxxxxxxx");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_diagonal() {
        // d . . .
        // . o . .
        // . . g .
        let found = search(&["dog", "god"], "dxxxxoxxxxgxxxxx");
        assert_eq!(found.len(), 2);
        assert_eq!(found["god"].as_slice(), &[10, 5, 0]);
    }

    #[test]
    fn test_not_adjacent() {
        // wrap around from the end of row 0 to the start of row 1 is not allowed
        let found = search(&["abc"], "xxabcxxxxxxxxxxx");
        assert!(found.is_empty());
    }

    #[test]
    fn test_path_restored_between_roots() {
        let found = search(&["tea", "eat", "ate", "tee"], "texxaxxxxxxxxxxx");
        let mut words: Vec<&str> = found.keys().map(String::as_str).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["ate", "eat", "tea"]);
    }
}
