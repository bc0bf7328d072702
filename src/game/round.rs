//! Round traversal and showdown resolution.
//!
//! [`play_round`] walks a [`BettingTree`] from the root to a terminal node,
//! alternating the active player and applying each chosen action's effect on
//! chips, pot, and history. [`showdown`] then decides who takes the pot at
//! the terminal node. The tree itself is read-only throughout; all mutation
//! happens on players, pot, running bet, and the [`History`].

use crate::game::card::hand_value;
use crate::game::player::Player;
use crate::game::tree::{Action, BettingTree, TreeNode};
use crate::game::Card;
use std::fmt;

/// Append-only log of every action in a hand.
///
/// Round boundaries are recorded as [`Action::None`] sentinels: one before
/// the first betting round and one after each public-card reveal. The log
/// feeds the information-string keys used by the table-driven strategy, so
/// it is never truncated or rewritten within a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    actions: Vec<Action>,
}

impl History {
    /// Empty log. Call [`start_round`](Self::start_round) before the first
    /// betting round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a round boundary.
    pub fn start_round(&mut self) {
        self.actions.push(Action::None);
    }

    /// Append a player action.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// All recorded actions in order, boundaries included.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of entries, boundaries included.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

/// Run one betting round to completion and return the terminal node.
///
/// Starting with the root's acting player, each step asks the active
/// player's strategy for an action, records it, descends to the matching
/// child, and applies the effect:
///
/// - **call**: the player commits the current `betting` amount to the pot
/// - **raise**: `betting` grows by the tree's raise increment, then the
///   player commits the new amount
/// - **fold**: the player's fold flag is set
///
/// # Panics
/// Panics if a strategy returns an action the current node does not offer.
/// That breaks the [`Strategy`](crate::strategy::Strategy) contract and is
/// not recoverable mid-round.
pub fn play_round<'a>(
    tree: &'a BettingTree,
    players: &mut [Player; 2],
    board: Card,
    history: &mut History,
    betting: &mut i32,
    pot: &mut i32,
) -> &'a TreeNode {
    let mut node = tree.root();
    let mut actor = node.player;

    while !node.is_terminal() {
        let action = players[actor].decide(board, node, history);
        history.push(action);
        node = node.child(action).unwrap_or_else(|| {
            panic!(
                "strategy contract violation: {} ({}) chose {} at a node offering {:?}",
                players[actor].name(),
                players[actor].strategy_name(),
                action,
                node.available_actions()
            )
        });
        match action {
            Action::Call => players[actor].bet(*betting, pot),
            Action::Raise => {
                *betting += tree.raise_amount();
                players[actor].bet(*betting, pot);
            }
            Action::Fold => players[actor].fold_hand(),
            // child() returned None for the sentinel, so we panicked above
            Action::None => unreachable!(),
        }
        actor = 1 - actor;
    }
    node
}

/// Decide the chip winner at a terminal node.
///
/// If the round ended in a fold, the node's recorded player — the one who
/// did *not* fold — collects the whole pot. Otherwise both private cards are
/// scored against the public card with [`hand_value`]; a strictly higher
/// score collects. An exact tie returns `None` and leaves the pot untouched:
/// the split policy is the caller's to apply (the match runner splits evenly
/// and carries any odd chip forward).
pub fn showdown(
    players: &mut [Player; 2],
    terminal: &TreeNode,
    board: Card,
    pot: &mut i32,
) -> Option<usize> {
    if terminal.last_action == Action::Fold {
        let winner = terminal.player;
        players[winner].collect(pot);
        return Some(winner);
    }

    let score0 = hand_value(players[0].card(), board);
    let score1 = hand_value(players[1].card(), board);
    match score0.cmp(&score1) {
        std::cmp::Ordering::Greater => {
            players[0].collect(pot);
            Some(0)
        }
        std::cmp::Ordering::Less => {
            players[1].collect(pot);
            Some(1)
        }
        std::cmp::Ordering::Equal => None,
    }
}
