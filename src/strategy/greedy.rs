//! Heuristic "greedy" strategy.
//!
//! Before the public card is revealed the decision runs on rank alone; after
//! the reveal it runs on [`hand_value`]. In both phases the first qualifying
//! action that the node actually offers wins, falling back to call (always
//! offered at a decision node).

use crate::game::card::hand_value;
use crate::game::round::History;
use crate::game::tree::{Action, TreeNode};
use crate::game::Card;
use crate::strategy::Strategy;

/// Deterministic rank/valuation heuristic.
///
/// - Public card unknown: a king raises when it can, a king or queen calls
///   when it can, anything left folds when it can (else calls).
/// - Public card known: value above 10 (a pair) raises when it can, else
///   calls; value 4..=10 calls; below 4 folds when it can, else calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select(&mut self, own: Card, board: Card, node: &TreeNode, _history: &History) -> Action {
        if !board.is_known() {
            let tier = own.tier();
            if tier == 3 && node.raise().is_some() {
                return Action::Raise;
            }
            if tier >= 2 && node.call().is_some() {
                return Action::Call;
            }
            if node.fold().is_some() {
                Action::Fold
            } else {
                Action::Call
            }
        } else {
            let value = hand_value(own, board);
            if value > 10 {
                if node.raise().is_some() {
                    Action::Raise
                } else {
                    Action::Call
                }
            } else if value >= 4 {
                Action::Call
            } else if node.fold().is_some() {
                Action::Fold
            } else {
                Action::Call
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BettingTree;

    fn pick(own: Card, board: Card, node: &TreeNode) -> Action {
        GreedyStrategy.select(own, board, node, &History::new())
    }

    #[test]
    fn test_preflop_king_raises() {
        let tree = BettingTree::new(0, 1, 2);
        assert_eq!(pick(Card::RedK, Card::Unknown, tree.root()), Action::Raise);
        assert_eq!(pick(Card::BlackK, Card::Unknown, tree.root()), Action::Raise);
    }

    #[test]
    fn test_preflop_king_calls_when_raise_capped() {
        let tree = BettingTree::new(0, 1, 2);
        // Two raises in: raise is no longer offered
        let capped = tree.root().raise().unwrap().raise().unwrap();
        assert!(capped.raise().is_none());
        assert_eq!(pick(Card::RedK, Card::Unknown, capped), Action::Call);
    }

    #[test]
    fn test_preflop_queen_calls() {
        let tree = BettingTree::new(0, 1, 2);
        assert_eq!(pick(Card::RedQ, Card::Unknown, tree.root()), Action::Call);
        let raised = tree.root().raise().unwrap();
        assert_eq!(pick(Card::BlackQ, Card::Unknown, raised), Action::Call);
    }

    #[test]
    fn test_preflop_jack_folds_to_a_raise_else_calls() {
        let tree = BettingTree::new(0, 1, 2);
        // No fold child at the root
        assert_eq!(pick(Card::RedJ, Card::Unknown, tree.root()), Action::Call);
        let raised = tree.root().raise().unwrap();
        assert_eq!(pick(Card::RedJ, Card::Unknown, raised), Action::Fold);
    }

    #[test]
    fn test_postflop_pair_raises() {
        let tree = BettingTree::new(0, 1, 2);
        assert_eq!(pick(Card::RedJ, Card::BlackJ, tree.root()), Action::Raise);
        let capped = tree.root().raise().unwrap().raise().unwrap();
        assert_eq!(pick(Card::RedJ, Card::BlackJ, capped), Action::Call);
    }

    #[test]
    fn test_postflop_medium_value_calls() {
        let tree = BettingTree::new(0, 1, 2);
        // K + J = 4, Q + K = 5: medium strength
        assert_eq!(pick(Card::RedK, Card::BlackJ, tree.root()), Action::Call);
        let raised = tree.root().raise().unwrap();
        assert_eq!(pick(Card::RedQ, Card::BlackK, raised), Action::Call);
    }

    #[test]
    fn test_postflop_weak_hand_folds_to_a_raise_else_calls() {
        let tree = BettingTree::new(0, 1, 2);
        // Q + J = 3: weak
        assert_eq!(pick(Card::RedQ, Card::BlackJ, tree.root()), Action::Call);
        let raised = tree.root().raise().unwrap();
        assert_eq!(pick(Card::RedQ, Card::BlackJ, raised), Action::Fold);
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let tree = BettingTree::new(0, 1, 2);
        let node = tree.root().raise().unwrap();
        let first = pick(Card::BlackQ, Card::RedK, node);
        for _ in 0..20 {
            assert_eq!(pick(Card::BlackQ, Card::RedK, node), first);
        }
    }
}
