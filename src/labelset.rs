#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// Index of a letter in the alphabet: `a` is 0, `z` is 25.
pub type Label = u8;

/// Number of letters in the alphabet.
pub const NLETTERS: usize = 26;

/// Map a lowercase ascii letter to its label.
/// Returns `None` for anything outside `a..=z`.
#[inline]
pub fn label_of(letter: u8) -> Option<Label> {
    if letter.is_ascii_lowercase() {
        Some(letter - b'a')
    } else {
        None
    }
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A bitset with the letters that continue a trie node.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        (label as usize) < NLETTERS && self.0 & (1 << label) != 0
    }

    /// Add `label`, returns true if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!((label as usize) < NLETTERS);
        let present = self.contains(label);
        self.0 |= 1 << label;
        present
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }

    /// Return the rank of `label` among the present letters, if present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, label as u32)) as usize)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(|label| (b'a' + label) as char).collect();
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLetterSet {
    value: u32,
}

impl IteratorLetterSet {
    pub fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        if self.value == 0 {
            return None;
        }
        let label = self.value.trailing_zeros() as Label;
        // clear lowest set bit
        self.value &= self.value - 1;
        Some(label)
    }
}

impl FromIterator<Label> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}
