use std::collections::HashSet;

/// Words shorter than this are never indexed, found or scored.
pub const MIN_WORD_LEN: usize = 3;

/// Points for a word of `len` letters.
///
/// | length | points |
/// |---|---|
/// | < 3 | 0 |
/// | 3 | 100 |
/// | 4 | 400 |
/// | 5 | 800 |
/// | 6 | 1400 |
/// | 7 | 1800 |
/// | >= 8 | 2200 + 400 per letter above 8 |
///
/// ## Examples
/// ```
/// # use wordhunt_solver::word_score;
/// assert_eq!(word_score(2), 0);
/// assert_eq!(word_score(4), 400);
/// assert_eq!(word_score(10), 3000);
/// ```
pub fn word_score(len: usize) -> u64 {
    match len {
        0..=2 => 0,
        3 => 100,
        4 => 400,
        5 => 800,
        6 => 1400,
        7 => 1800,
        n => 400u64.saturating_mul(n as u64 - 8).saturating_add(2200),
    }
}

/// Lowercase `word` and strip everything but ascii letters.
pub(crate) fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Total points for a list of submitted words.
///
/// Each word is lowercased and stripped of non-letters. Words with less than 3
/// letters left are ignored, and a word that occurs more than once is only counted once.
/// The words are not checked against a dictionary.
/// ## Examples
/// ```
/// # use wordhunt_solver::score_words;
/// assert_eq!(score_words(&["cat", "Cat!", "cats", "at"]), 500);
/// ```
pub fn score_words<I, S>(words: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|word| normalize_word(word.as_ref()))
        .filter(|word| word.len() >= MIN_WORD_LEN && seen.insert(word.clone()))
        .map(|word| word_score(word.len()))
        .sum()
}
