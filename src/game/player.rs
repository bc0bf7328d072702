//! Player state: chips, private card, fold flag, and a bound strategy.

use crate::game::round::History;
use crate::game::tree::{Action, TreeNode};
use crate::game::Card;
use crate::strategy::Strategy;

/// One of the two players at the table.
///
/// Chips, the private card, and the fold flag change from hand to hand; the
/// strategy is bound once when the player sits down.
pub struct Player {
    name: String,
    chips: i32,
    card: Card,
    folded: bool,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Seat a player with a starting stack and a decision strategy.
    pub fn new(name: impl Into<String>, chips: i32, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            chips,
            card: Card::Unknown,
            folded: false,
            strategy,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current chip stack. Can go negative; enforcing bankroll limits is the
    /// caller's concern.
    pub fn chips(&self) -> i32 {
        self.chips
    }

    /// The player's private card for the current hand.
    pub fn card(&self) -> Card {
        self.card
    }

    /// Deal the player a new private card.
    pub fn set_card(&mut self, card: Card) {
        self.card = card;
    }

    /// Whether the player has folded this hand.
    pub fn folded(&self) -> bool {
        self.folded
    }

    /// Mark the player as folded for the rest of the hand.
    pub fn fold_hand(&mut self) {
        self.folded = true;
    }

    /// Ask the bound strategy for an action at `node`.
    ///
    /// A folded player has no decisions left; calling this on one is a
    /// traversal bug.
    pub fn decide(&mut self, board: Card, node: &TreeNode, history: &History) -> Action {
        debug_assert!(!self.folded, "folded player asked to act");
        self.strategy.select(self.card, board, node, history)
    }

    /// Commit `amount` chips from the stack into the pot.
    pub fn bet(&mut self, amount: i32, pot: &mut i32) {
        self.chips -= amount;
        *pot += amount;
    }

    /// Add chips directly to the stack (pot splits, refunds).
    pub fn credit(&mut self, amount: i32) {
        self.chips += amount;
    }

    /// Take the entire pot, leaving it empty. Returns the new stack size.
    pub fn collect(&mut self, pot: &mut i32) -> i32 {
        self.chips += *pot;
        *pot = 0;
        self.chips
    }

    /// Clear per-hand state: private card back to unknown, fold flag reset.
    /// Chips and strategy carry over.
    pub fn reset(&mut self) {
        self.card = Card::Unknown;
        self.folded = false;
    }

    /// Name of the bound strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("chips", &self.chips)
            .field("card", &self.card)
            .field("folded", &self.folded)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
