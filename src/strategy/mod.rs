//! Pluggable decision strategies.
//!
//! A [`Strategy`] answers one question: given what a player can see (their
//! private card, the public card, the current decision node, and the full
//! action history), which action do they take? Three implementations ship
//! with the crate:
//!
//! - [`RandomStrategy`]: uniform over the actions offered at the node
//! - [`GreedyStrategy`]: deterministic rank/valuation heuristic
//! - [`TableStrategy`]: samples from an externally trained mixed strategy,
//!   looked up by information string in a shared [`StrategyTable`]
//!
//! Strategies that need randomness own their own seeded generator, so
//! concurrent simulations never share a random source.

pub mod greedy;
pub mod random;
pub mod table;

pub use greedy::GreedyStrategy;
pub use random::RandomStrategy;
pub use table::{info_key, ActionProbs, StrategyTable, TableError, TableStrategy};

use crate::game::round::History;
use crate::game::tree::{Action, TreeNode};
use crate::game::Card;

/// A decision policy for one player.
///
/// ## Contract
///
/// `select` must return an action for which `node.child(action)` is
/// non-null. The traversal engine treats a violation as fatal — it indicates
/// a broken strategy (or, for [`TableStrategy`], a policy file that puts
/// probability on an action the node does not offer).
///
/// `select` takes `&mut self` so implementations can advance an internal
/// random generator; the game state itself is never mutated here.
pub trait Strategy: Send {
    /// Short display name ("random", "greedy", "table").
    fn name(&self) -> &'static str;

    /// Choose an action at `node`.
    ///
    /// # Arguments
    /// * `own` - the player's private card
    /// * `board` - the public card, `Card::Unknown` before the reveal
    /// * `node` - the current decision point
    /// * `history` - every action this hand, including round boundaries
    fn select(&mut self, own: Card, board: Card, node: &TreeNode, history: &History) -> Action;
}
