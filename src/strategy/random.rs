//! Uniform-random strategy.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::round::History;
use crate::game::tree::{Action, TreeNode};
use crate::game::Card;
use crate::strategy::Strategy;

/// Picks uniformly among the actions the current node offers.
///
/// Owns its generator; seed it for reproducible matches.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Entropy-seeded instance.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed instance for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&mut self, _own: Card, _board: Card, node: &TreeNode, _history: &History) -> Action {
        let options = node.available_actions();
        *options
            .choose(&mut self.rng)
            .expect("select called on a terminal node")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BettingTree;

    #[test]
    fn test_only_available_actions_are_chosen() {
        let tree = BettingTree::new(0, 1, 2);
        let mut strategy = RandomStrategy::seeded(1);
        let history = History::new();
        for _ in 0..100 {
            let action = strategy.select(Card::RedJ, Card::Unknown, tree.root(), &history);
            assert!(tree.root().child(action).is_some());
        }
    }

    #[test]
    fn test_roughly_uniform_over_three_options() {
        // Node after a raise offers call, raise, and fold
        let tree = BettingTree::new(0, 1, 2);
        let node = tree.root().raise().unwrap();
        assert_eq!(node.available_actions().len(), 3);

        let mut strategy = RandomStrategy::seeded(42);
        let history = History::new();
        let trials = 9000;
        let mut counts = [0u32; 3];
        for _ in 0..trials {
            match strategy.select(Card::RedJ, Card::Unknown, node, &history) {
                Action::Call => counts[0] += 1,
                Action::Raise => counts[1] += 1,
                Action::Fold => counts[2] += 1,
                Action::None => unreachable!(),
            }
        }
        for count in counts {
            // Expected 3000 each; 10 sigma is about +-470
            assert!(
                (2500..=3500).contains(&count),
                "counts far from uniform: {:?}",
                counts
            );
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let tree = BettingTree::new(0, 1, 2);
        let history = History::new();
        let mut a = RandomStrategy::seeded(9);
        let mut b = RandomStrategy::seeded(9);
        for _ in 0..50 {
            assert_eq!(
                a.select(Card::RedQ, Card::Unknown, tree.root(), &history),
                b.select(Card::RedQ, Card::Unknown, tree.root(), &history)
            );
        }
    }
}
