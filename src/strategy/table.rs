//! Mixed-strategy table: loader, lookup, and the table-driven resolver.
//!
//! An externally trained policy is stored as a line-oriented text file, one
//! information string per line followed by its action probabilities:
//!
//! ```text
//! # key    P(raise) P(call) P(fold)
//! Q:/:     0.1      0.8     0.1
//! QK:/cr/: 0.2      0.5     0.3
//! ```
//!
//! The information string encodes everything a player can observe: one rank
//! letter per *known* card in [private, public] order (unrevealed cards
//! contribute nothing), a `:`, the action history with `/` for round
//! boundaries and `c`/`r` for calls and raises, and a closing `:`. Folds end
//! the hand and never appear in a key.
//!
//! The table is populated before play and read-only afterward, so it can be
//! shared across players — and across parallel simulations — behind an
//! [`Arc`] without locking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::game::round::History;
use crate::game::tree::{Action, TreeNode};
use crate::game::Card;
use crate::strategy::Strategy;

/// Probabilities for (raise, call, fold), summing to at most 1.
pub type ActionProbs = (f64, f64, f64);

/// Tolerance for the sum-of-probabilities check, absorbing the rounding in
/// decimal policy files.
const PROB_SUM_EPS: f64 = 1e-9;

/// Build the information-string key for a decision point.
///
/// Unrevealed cards contribute no letter, so round-1 keys carry one card
/// letter and round-2 keys carry two; the table treats them as distinct
/// opaque strings.
pub fn info_key(own: Card, board: Card, history: &History) -> String {
    let mut key = String::with_capacity(16);
    for card in [own, board] {
        if let Some(letter) = card.rank_char() {
            key.push(letter);
        }
    }
    key.push(':');
    for action in history.actions() {
        match action {
            Action::None => key.push('/'),
            Action::Call => key.push('c'),
            Action::Raise => key.push('r'),
            Action::Fold => {}
        }
    }
    key.push(':');
    key
}

/// Errors from loading a strategy table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// The file could not be read.
    Io(String),
    /// A non-comment line failed validation; the whole load is aborted.
    Malformed {
        /// 1-based line number within the offending source.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "failed to read strategy table: {}", err),
            TableError::Malformed { line, reason } => {
                write!(f, "malformed strategy table line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Lookup table from information string to action probabilities.
///
/// Multiple files may be loaded into one table; later entries overwrite
/// earlier ones with the same key. A failed load leaves the table exactly as
/// it was.
#[derive(Debug, Clone, Default)]
pub struct StrategyTable {
    entries: FxHashMap<String, ActionProbs>,
}

impl StrategyTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and merge a policy file. Returns the number of entries read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, TableError> {
        let text = fs::read_to_string(path).map_err(|e| TableError::Io(e.to_string()))?;
        self.load_str(&text)
    }

    /// Load and merge policy text. Returns the number of entries read.
    ///
    /// Lines starting with `#` are comments. Every other line must hold
    /// exactly four whitespace-separated tokens: key, P(raise), P(call),
    /// P(fold), each probability in [0, 1] and the triple summing to at
    /// most 1. The first bad line aborts the load with no entries applied.
    pub fn load_str(&mut self, text: &str) -> Result<usize, TableError> {
        // Validate everything before touching the table so a bad file
        // cannot leave a half-merged load behind.
        let mut parsed = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.starts_with('#') {
                continue;
            }
            parsed.push(parse_line(index + 1, line)?);
        }

        let count = parsed.len();
        for (key, probs) in parsed {
            self.entries.insert(key, probs);
        }
        Ok(count)
    }

    /// Probabilities for `key`, if present.
    pub fn get(&self, key: &str) -> Option<ActionProbs> {
        self.entries.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<(String, ActionProbs), TableError> {
    let malformed = |reason: String| TableError::Malformed {
        line: line_no,
        reason,
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(malformed(format!(
            "expected 4 fields (key + 3 probabilities), found {}",
            tokens.len()
        )));
    }

    let mut probs = [0.0f64; 3];
    for (slot, token) in probs.iter_mut().zip(&tokens[1..]) {
        let value: f64 = token
            .parse()
            .map_err(|_| malformed(format!("not a number: {:?}", token)))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(malformed(format!("probability {} outside [0, 1]", value)));
        }
        *slot = value;
    }
    let sum: f64 = probs.iter().sum();
    if sum > 1.0 + PROB_SUM_EPS {
        return Err(malformed(format!("probabilities sum to {} > 1", sum)));
    }

    Ok((tokens[0].to_string(), (probs[0], probs[1], probs[2])))
}

/// Samples actions from a trained mixed strategy.
///
/// Looks up the information string for the current decision point and draws
/// from the stored (raise, call, fold) distribution. The trained policy is
/// expected to cover every reachable information string and to put
/// probability only on actions the matching node offers; a missing key is a
/// training-data hole and panics.
pub struct TableStrategy {
    table: Arc<StrategyTable>,
    rng: StdRng,
}

impl TableStrategy {
    /// Entropy-seeded resolver over a shared table.
    pub fn new(table: Arc<StrategyTable>) -> Self {
        Self {
            table,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed resolver for reproducible play.
    pub fn seeded(table: Arc<StrategyTable>, seed: u64) -> Self {
        Self {
            table,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for TableStrategy {
    fn name(&self) -> &'static str {
        "table"
    }

    fn select(&mut self, own: Card, board: Card, _node: &TreeNode, history: &History) -> Action {
        let key = info_key(own, board, history);
        let (raise, call, _fold) = self.table.get(&key).unwrap_or_else(|| {
            panic!("strategy table has no entry for information string {:?}", key)
        });

        let draw: f64 = self.rng.gen();
        if draw < raise {
            Action::Raise
        } else if draw < raise + call {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

impl fmt::Debug for TableStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableStrategy")
            .field("entries", &self.table.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BettingTree;

    #[test]
    fn test_load_and_query_exact_triple() {
        let mut table = StrategyTable::new();
        assert_eq!(table.load_str("QK:cr: 0.2 0.5 0.3").unwrap(), 1);
        assert_eq!(table.get("QK:cr:"), Some((0.2, 0.5, 0.3)));
    }

    #[test]
    fn test_comments_are_skipped() {
        let mut table = StrategyTable::new();
        let text = "# trained policy\nQ:/: 0.1 0.8 0.1\n# trailing note\n";
        assert_eq!(table.load_str(text).unwrap(), 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_wrong_field_count_aborts_load() {
        let mut table = StrategyTable::new();
        table.load_str("A:/: 0.5 0.5 0.0").unwrap();
        let err = table
            .load_str("B:/: 0.3 0.3 0.3 0.1\nC:/: 1.0 0.0 0.0")
            .unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 1, .. }));
        // Nothing from the failed load is applied
        assert_eq!(table.len(), 1);
        assert!(table.get("C:/:").is_none());
    }

    #[test]
    fn test_unparsable_number_aborts_load() {
        let mut table = StrategyTable::new();
        let err = table.load_str("Q:/: 0.2 oops 0.3").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let mut table = StrategyTable::new();
        let err = table.load_str("Q:/: 0.2 0.5 0.3\n\n").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_probabilities_must_be_valid() {
        let mut table = StrategyTable::new();
        assert!(table.load_str("Q:/: 1.2 0.0 0.0").is_err());
        assert!(table.load_str("Q:/: -0.1 0.5 0.3").is_err());
        assert!(table.load_str("Q:/: 0.6 0.6 0.0").is_err());
    }

    #[test]
    fn test_later_entries_overwrite() {
        let mut table = StrategyTable::new();
        table.load_str("Q:/: 0.1 0.8 0.1\nQ:/: 0.4 0.4 0.2").unwrap();
        assert_eq!(table.get("Q:/:"), Some((0.4, 0.4, 0.2)));
    }

    #[test]
    fn test_multiple_loads_merge() {
        let mut table = StrategyTable::new();
        table.load_str("J:/: 0.0 0.5 0.5").unwrap();
        table.load_str("K:/: 0.9 0.1 0.0").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("J:/:"), Some((0.0, 0.5, 0.5)));
        assert_eq!(table.get("K:/:"), Some((0.9, 0.1, 0.0)));
    }

    #[test]
    fn test_info_key_first_round_omits_board() {
        let mut history = History::new();
        history.start_round();
        assert_eq!(info_key(Card::RedQ, Card::Unknown, &history), "Q:/:");
    }

    #[test]
    fn test_info_key_second_round_appends_board_and_history() {
        let mut history = History::new();
        history.start_round();
        history.push(Action::Call);
        history.push(Action::Raise);
        history.push(Action::Call);
        history.start_round();
        history.push(Action::Raise);
        assert_eq!(info_key(Card::RedQ, Card::BlackK, &history), "QK:/crc/r:");
    }

    #[test]
    fn test_info_key_omits_folds() {
        let mut history = History::new();
        history.start_round();
        history.push(Action::Raise);
        history.push(Action::Fold);
        assert_eq!(info_key(Card::BlackJ, Card::Unknown, &history), "J:/r:");
    }

    #[test]
    fn test_table_strategy_follows_certain_probabilities() {
        let mut table = StrategyTable::new();
        table.load_str("K:/: 1.0 0.0 0.0\nJ:/: 0.0 1.0 0.0").unwrap();
        let table = Arc::new(table);
        let tree = BettingTree::new(0, 1, 2);
        let mut history = History::new();
        history.start_round();

        let mut strategy = TableStrategy::seeded(Arc::clone(&table), 3);
        for _ in 0..20 {
            assert_eq!(
                strategy.select(Card::RedK, Card::Unknown, tree.root(), &history),
                Action::Raise
            );
            assert_eq!(
                strategy.select(Card::RedJ, Card::Unknown, tree.root(), &history),
                Action::Call
            );
        }
    }

    #[test]
    fn test_table_strategy_mixes_by_probability() {
        let mut table = StrategyTable::new();
        table.load_str("Q:/: 0.3 0.5 0.2").unwrap();
        let tree = BettingTree::new(0, 1, 2);
        let mut history = History::new();
        history.start_round();

        let mut strategy = TableStrategy::seeded(Arc::new(table), 11);
        let trials = 10_000;
        let mut counts = [0u32; 3];
        for _ in 0..trials {
            match strategy.select(Card::RedQ, Card::Unknown, tree.root(), &history) {
                Action::Raise => counts[0] += 1,
                Action::Call => counts[1] += 1,
                Action::Fold => counts[2] += 1,
                Action::None => unreachable!(),
            }
        }
        let freq = |count: u32| count as f64 / trials as f64;
        assert!((freq(counts[0]) - 0.3).abs() < 0.03, "raise {:?}", counts);
        assert!((freq(counts[1]) - 0.5).abs() < 0.03, "call {:?}", counts);
        assert!((freq(counts[2]) - 0.2).abs() < 0.03, "fold {:?}", counts);
    }

    #[test]
    #[should_panic(expected = "no entry for information string")]
    fn test_missing_key_is_fatal() {
        let tree = BettingTree::new(0, 1, 2);
        let mut history = History::new();
        history.start_round();
        let mut strategy = TableStrategy::seeded(Arc::new(StrategyTable::new()), 1);
        strategy.select(Card::RedQ, Card::Unknown, tree.root(), &history);
    }
}
