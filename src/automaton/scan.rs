//! Streaming scans over compiled automatons.
//!
//! Scanning never mutates the automaton. All per-scan state lives in a
//! [`Cursor`] value owned by the caller, so one automaton can serve any
//! number of scans at once, and a scan can be suspended between input
//! chunks and resumed later.

use std::slice;
use std::str::Chars;

use crate::automaton::{Automaton, PatternId, ROOT_STATE_ID, StateId};

/// Resumable position of one scan.
///
/// A fresh cursor sits at the root with nothing consumed. Feeding symbols
/// through [`Automaton::step`] or [`Automaton::scan_chunk`] advances it.
/// Positions are counted from the start of the scan, so a cursor carried
/// across chunk boundaries keeps counting and matches that span chunks are
/// still reported.
///
/// A cursor is only meaningful with the automaton that advanced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    state: StateId,
    consumed: usize,
}

impl Cursor {
    /// Create a cursor at the root state with zero symbols consumed.
    pub fn new() -> Self {
        Cursor {
            state: ROOT_STATE_ID,
            consumed: 0,
        }
    }

    /// Get the state the scan currently sits in.
    pub fn state_id(&self) -> StateId {
        self.state
    }

    /// Get the number of symbols consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

/// One reported keyword occurrence.
///
/// The end position is 1-based and counts symbols from the start of the
/// scan; a keyword ending on the n-th symbol has `end() == n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pattern: PatternId,
    end: usize,
    keyword: &'a str,
}

impl<'a> Match<'a> {
    /// Get the id of the matched keyword.
    pub fn pattern(&self) -> PatternId {
        self.pattern
    }

    /// Get the 1-based position of the last symbol of the occurrence.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the 1-based position of the first symbol of the occurrence.
    pub fn start(&self) -> usize {
        self.end + 1 - self.keyword.chars().count()
    }

    /// Get the matched keyword text.
    pub fn keyword(&self) -> &'a str {
        self.keyword
    }
}

/// Iterator over the occurrences found in one text.
///
/// Created by [`Automaton::scan_iter`]. Yields every occurrence, including
/// overlapping ones, ordered by end position; occurrences sharing an end
/// position come out in keyword insertion order.
pub struct Scan<'a, 't> {
    automaton: &'a Automaton,
    symbols: Chars<'t>,
    cursor: Cursor,
    pending: slice::Iter<'a, PatternId>,
}

impl<'a> Iterator for Scan<'a, '_> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Match<'a>> {
        loop {
            if let Some(&pattern) = self.pending.next() {
                return Some(Match {
                    pattern,
                    end: self.cursor.consumed,
                    keyword: &self.automaton.keywords[pattern as usize],
                });
            }
            let symbol = self.symbols.next()?;
            self.pending = self.automaton.step(&mut self.cursor, symbol).iter();
        }
    }
}

impl Automaton {
    /// Advance a cursor by one symbol.
    ///
    /// Follows the forward transition when the current state has one, and
    /// otherwise falls back along failure links until a transition is found
    /// or the root is reached; the root swallows unmatched symbols. Returns
    /// the keywords ending at the landed state, which is empty for a
    /// non-terminal landing.
    pub fn step(&self, cursor: &mut Cursor, symbol: char) -> &[PatternId] {
        let next = self.next_state(cursor.state, symbol);
        cursor.state = next;
        cursor.consumed += 1;
        self.states[next as usize].pattern_ids()
    }

    /// Scan a whole text and collect every occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use xiphos::Automaton;
    ///
    /// let automaton = Automaton::compile(["a", "ab", "bc"]).unwrap();
    ///
    /// let found: Vec<_> = automaton
    ///     .scan("xabcy")
    ///     .iter()
    ///     .map(|m| (m.end(), m.keyword()))
    ///     .collect();
    /// assert_eq!(found, vec![(2, "a"), (3, "ab"), (4, "bc")]);
    /// ```
    pub fn scan(&self, text: &str) -> Vec<Match<'_>> {
        let mut cursor = Cursor::new();
        self.scan_chunk(&mut cursor, text)
    }

    /// Get an iterator over the occurrences in a text.
    ///
    /// Yields the same occurrences as [`scan`](Self::scan) without
    /// collecting them, so a caller that only needs the first hit can stop
    /// early.
    pub fn scan_iter<'a, 't>(&'a self, text: &'t str) -> Scan<'a, 't> {
        Scan {
            automaton: self,
            symbols: text.chars(),
            cursor: Cursor::new(),
            pending: [].iter(),
        }
    }

    /// Scan one chunk of a longer input, resuming from a cursor.
    ///
    /// Feeding consecutive chunks through the same cursor reports exactly
    /// the occurrences a single scan of the concatenated input would,
    /// including keywords that straddle a chunk boundary. End positions
    /// count from the start of the first chunk.
    pub fn scan_chunk<'a>(&'a self, cursor: &mut Cursor, chunk: &str) -> Vec<Match<'a>> {
        let mut matches = Vec::new();
        for symbol in chunk.chars() {
            for &pattern in self.step(cursor, symbol) {
                matches.push(Match {
                    pattern,
                    end: cursor.consumed,
                    keyword: &self.keywords[pattern as usize],
                });
            }
        }
        matches
    }

    fn next_state(&self, mut current: StateId, symbol: char) -> StateId {
        loop {
            if let Some(next) = self.states[current as usize].transition(symbol) {
                return next;
            }
            if current == ROOT_STATE_ID {
                return ROOT_STATE_ID;
            }
            current = self.states[current as usize].fail;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends_and_keywords<'a>(matches: &[Match<'a>]) -> Vec<(usize, &'a str)> {
        matches.iter().map(|m| (m.end(), m.keyword())).collect()
    }

    #[test]
    fn test_scan_reports_only_keywords_ending_at_landed_state() {
        let automaton = Automaton::compile(["he", "she", "his", "hers"]).unwrap();

        let matches = automaton.scan("ushers");
        assert_eq!(ends_and_keywords(&matches), vec![(4, "she"), (6, "hers")]);
        assert_eq!(matches[0].pattern(), 1);
        assert_eq!(matches[1].pattern(), 3);
    }

    #[test]
    fn test_scan_reports_overlapping_occurrences() {
        let automaton = Automaton::compile(["a", "ab", "bc"]).unwrap();

        let matches = automaton.scan("xabcy");
        assert_eq!(
            ends_and_keywords(&matches),
            vec![(2, "a"), (3, "ab"), (4, "bc")]
        );
    }

    #[test]
    fn test_scan_reports_self_overlapping_occurrences() {
        let automaton = Automaton::compile(["aa"]).unwrap();

        let matches = automaton.scan("aaa");
        assert_eq!(ends_and_keywords(&matches), vec![(2, "aa"), (3, "aa")]);
    }

    #[test]
    fn test_scan_swallows_unknown_symbols_at_root() {
        let automaton = Automaton::compile(["he"]).unwrap();

        let matches = automaton.scan("h!he");
        assert_eq!(ends_and_keywords(&matches), vec![(4, "he")]);
    }

    #[test]
    fn test_scan_empty_text_finds_nothing() {
        let automaton = Automaton::compile(["he"]).unwrap();
        assert!(automaton.scan("").is_empty());
    }

    #[test]
    fn test_scan_with_empty_automaton_finds_nothing() {
        let automaton = Automaton::compile(Vec::<String>::new()).unwrap();
        assert!(automaton.scan("anything at all").is_empty());
    }

    #[test]
    fn test_scan_reports_duplicate_keywords_separately() {
        let automaton = Automaton::compile(["he", "he"]).unwrap();

        let matches = automaton.scan("the");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].pattern(), 0);
        assert_eq!(matches[1].pattern(), 1);
        assert_eq!(matches[0].end(), 3);
        assert_eq!(matches[1].end(), 3);
    }

    #[test]
    fn test_scan_iter_yields_same_occurrences_as_scan() {
        let automaton = Automaton::compile(["he", "she", "his", "hers"]).unwrap();
        let text = "she sells his sushi to ushers";

        let collected: Vec<_> = automaton.scan_iter(text).collect();
        assert_eq!(collected, automaton.scan(text));
    }

    #[test]
    fn test_scan_iter_can_stop_at_first_occurrence() {
        let automaton = Automaton::compile(["she"]).unwrap();

        let mut iter = automaton.scan_iter("ushers ushers ushers");
        let first = iter.next().unwrap();
        assert_eq!(first.end(), 4);
    }

    #[test]
    fn test_step_advances_cursor_and_reports_landings() {
        let automaton = Automaton::compile(["he", "she"]).unwrap();
        let mut cursor = Cursor::new();

        assert!(automaton.step(&mut cursor, 'u').is_empty());
        assert_eq!(cursor.state_id(), ROOT_STATE_ID);
        assert_eq!(cursor.consumed(), 1);

        assert!(automaton.step(&mut cursor, 's').is_empty());
        assert!(automaton.step(&mut cursor, 'h').is_empty());
        assert_ne!(cursor.state_id(), ROOT_STATE_ID);

        let landed = automaton.step(&mut cursor, 'e');
        assert_eq!(landed, &[1]);
        assert_eq!(cursor.consumed(), 4);
    }

    #[test]
    fn test_scan_chunk_resumes_across_boundaries() {
        let automaton = Automaton::compile(["he", "she", "his", "hers"]).unwrap();

        // "she" straddles the boundary between the two chunks.
        let mut cursor = Cursor::new();
        let mut matches = automaton.scan_chunk(&mut cursor, "ush");
        matches.extend(automaton.scan_chunk(&mut cursor, "ers"));

        assert_eq!(matches, automaton.scan("ushers"));
        assert_eq!(cursor.consumed(), 6);
    }

    #[test]
    fn test_scan_chunk_split_anywhere_is_equivalent() {
        let automaton = Automaton::compile(["he", "she", "his", "hers"]).unwrap();
        let text = "she sells his sushi to ushers";
        let expected = automaton.scan(text);

        for split in 0..=text.len() {
            let mut cursor = Cursor::new();
            let mut matches = automaton.scan_chunk(&mut cursor, &text[..split]);
            matches.extend(automaton.scan_chunk(&mut cursor, &text[split..]));
            assert_eq!(matches, expected, "split at byte {}", split);
        }
    }

    #[test]
    fn test_match_start_accounts_for_keyword_length() {
        let automaton = Automaton::compile(["she"]).unwrap();

        let matches = automaton.scan("ushers");
        assert_eq!(matches[0].start(), 2);
        assert_eq!(matches[0].end(), 4);
    }

    #[test]
    fn test_match_positions_count_characters_not_bytes() {
        let automaton = Automaton::compile(["本語"]).unwrap();

        let matches = automaton.scan("日本語");
        assert_eq!(matches[0].end(), 3);
        assert_eq!(matches[0].start(), 2);
    }

    #[test]
    fn test_cursor_starts_at_root() {
        let cursor = Cursor::new();
        assert_eq!(cursor.state_id(), ROOT_STATE_ID);
        assert_eq!(cursor.consumed(), 0);
        assert_eq!(cursor, Cursor::default());
    }
}
