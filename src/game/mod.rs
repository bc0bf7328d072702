//! Game mechanics: cards, the betting tree, players, and round resolution.
//!
//! Everything in this module is strategy-agnostic. The betting tree
//! ([`tree`]) enumerates one round's legal action sequences; the traversal
//! engine ([`round`]) walks it, asking each player's bound
//! [`Strategy`](crate::strategy::Strategy) for decisions; [`card`] supplies
//! the deck and the valuation function the showdown uses.

pub mod card;
pub mod player;
pub mod round;
pub mod tree;

pub use card::{hand_value, Card, Deck};
pub use player::Player;
pub use round::{play_round, showdown, History};
pub use tree::{Action, BettingTree, TreeNode, MAX_RAISES};
