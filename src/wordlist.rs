mod trievec;

use self::trievec::TrieVec;
use crate::labelset::{label_of, Label, LetterSet};
use crate::score::MIN_WORD_LEN;
use crate::Error;
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};

/// Index of the root node in a [`WordTrie`].
pub const ROOT: usize = 0;

/// Apply the dictionary filter to a raw token.
///
/// A token is accepted if every byte is an ascii letter, and it has at least
/// 3 letters. The accepted token is returned as lowercase labels.
///
/// ## Examples
/// ```
/// # use wordhunt_solver::accept_token;
/// assert_eq!(accept_token("Cat"), Some(vec![2, 0, 19]));
/// assert_eq!(accept_token("it"), None);
/// assert_eq!(accept_token("don't"), None);
/// assert_eq!(accept_token(b"caf\xe9"), None);
/// ```
pub fn accept_token<T: AsRef<[u8]> + ?Sized>(token: &T) -> Option<Vec<Label>> {
    let token = token.as_ref();
    if token.len() < MIN_WORD_LEN {
        return None;
    }
    token
        .iter()
        .map(|b| label_of(b.to_ascii_lowercase()))
        .collect()
}

/// Collects words for a [`WordTrie`].
///
/// This is the only place where words are inserted. Once all words are added,
/// [`build`](TrieBuilder::build) turns it into an immutable `WordTrie`.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    trie: TrieVec,
    skipped: usize,
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        TrieBuilder::default()
    }

    /// Insert a raw token. Returns true if the token passed the filter
    /// of [`accept_token`]; other tokens are silently skipped.
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, token: &T) -> bool {
        match accept_token(token) {
            Some(labels) => {
                self.trie.insert(&labels);
                true
            }
            None => {
                self.skipped += 1;
                false
            }
        }
    }

    /// Number of tokens rejected so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Freeze the collected words.
    pub fn build(self) -> WordTrie {
        if self.skipped > 0 {
            debug!("skipped {} tokens while building wordlist", self.skipped);
        }
        WordTrie::from(self.trie)
    }
}

impl<'a> Extend<&'a str> for TrieBuilder {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie that holds all the dictionary words, immutable after construction.
///
/// Nodes are stored in breadth-first order with the root at index 0.
/// Each node stores the index of its first child and the set of letters of its
/// children. The children of a node are stored next to each other in order of
/// their letter, so the child for a letter is found at
/// `first_child + rank(letter)`.
pub struct WordTrie {
    nodes: Vec<(u32, LetterSet)>,
    terminal: Vec<bool>,
    wordfile: String,
    word_count: usize,
}

impl fmt::Display for WordTrie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<WordTrie: {} words, {} nodes from '{}'>",
            self.word_count,
            self.node_count(),
            self.wordfile
        )
    }
}

impl From<TrieVec> for WordTrie {
    fn from(trie: TrieVec) -> Self {
        let mut nodes: Vec<(u32, LetterSet)> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        // index that the next enqueued child will get
        let mut next = 1u32;
        let mut queue = VecDeque::new();
        queue.push_back(&trie);
        while let Some(node) = queue.pop_front() {
            let mut letters = LetterSet::new();
            for (label, child) in node.children() {
                letters.insert(*label);
                queue.push_back(child);
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((next, letters));
            terminal.push(node.terminal());
            next += letters.len() as u32;
        }
        WordTrie {
            nodes,
            terminal,
            wordfile: String::new(),
            word_count,
        }
    }
}

impl WordTrie {
    /// Read the wordlist from a file with whitespace separated words.
    /// Tokens that are not a word of at least 3 letters are skipped.
    /// ## Errors
    /// Fails if the wordfile can not be opened or read.
    pub fn from_file(wordfile: &str) -> Result<WordTrie, Error> {
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut trie = Self::read_tokens(BufReader::new(file), wordfile)?;
        trie.wordfile = String::from(wordfile);
        info!("loaded {}", trie);
        Ok(trie)
    }

    /// Read the wordlist from any reader with whitespace separated words.
    /// The content need not be utf-8, tokens with other bytes than ascii letters are skipped.
    /// ## Errors
    /// Fails if reading fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<WordTrie, Error> {
        Self::read_tokens(reader, "<reader>")
    }

    fn read_tokens<R: Read>(mut reader: R, path: &str) -> Result<WordTrie, Error> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|source| Error::ReadError {
                path: String::from(path),
                source,
            })?;
        let mut builder = TrieBuilder::new();
        for token in content
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
        {
            builder.insert(token);
        }
        Ok(builder.build())
    }

    /// Build a wordlist from a list of words. Words that do not pass the
    /// filter are skipped.
    /// ## Example
    /// ```
    /// # use wordhunt_solver::WordTrie;
    /// let trie = WordTrie::from_words(&["cat", "cats", "at", "c4t"]);
    /// assert_eq!(trie.word_count(), 2);
    /// assert!(trie.contains("cats"));
    /// ```
    pub fn from_words(words: &[&str]) -> WordTrie {
        let mut builder = TrieBuilder::new();
        builder.extend(words.iter().copied());
        builder.build()
    }

    #[cfg(all(feature = "bincode", feature = "serde"))]
    /// Deserialize the wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordfile can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<WordTrie, Error> {
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut trie: WordTrie = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        trie.wordfile = String::from(wordfile);
        Ok(trie)
    }

    /// Get the child of `node` for `label`, and whether that child ends a word.
    /// Returns `None` if no word continues with `label`.
    #[inline]
    pub fn child(&self, node: usize, label: Label) -> Option<(usize, bool)> {
        let (start, letters) = &self.nodes[node];
        letters.index_of(label).map(|pos| {
            let child = *start as usize + pos;
            (child, self.terminal[child])
        })
    }

    /// Follow `word` from the root, returns the last node if all letters match.
    fn find(&self, word: &str) -> Option<usize> {
        let mut node = ROOT;
        for b in word.bytes() {
            let (child, _) = self.child(node, label_of(b)?)?;
            node = child;
        }
        Some(node)
    }

    /// Returns true if `word` is in the wordlist.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).map_or(false, |node| self.terminal[node])
    }

    /// Returns true if some word in the wordlist starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// The number of words in the wordlist
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the wordlist.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }
}
