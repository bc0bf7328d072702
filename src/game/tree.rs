//! Betting-round decision tree.
//!
//! One betting round is a small finite game tree: the acting player may call
//! or raise, a fold becomes available only once a raise is on the table, and
//! at most [`MAX_RAISES`] raises are allowed per round. The tree enumerates
//! every legal action sequence up front; the traversal engine
//! ([`crate::game::round::play_round`]) then walks it without ever mutating
//! it.
//!
//! ## Shape
//!
//! ```text
//! root (bet b)
//! ├── call            opponent to act, no raise yet
//! │   ├── call        terminal (check-check)
//! │   └── raise       (bet b+inc)
//! │       ├── call    terminal
//! │       ├── fold    terminal
//! │       └── raise   (bet b+2*inc)
//! │           ├── call terminal
//! │           └── fold terminal
//! └── raise           (bet b+inc)
//!     ├── call        terminal
//!     ├── fold        terminal
//!     └── raise       (bet b+2*inc)
//!         ├── call    terminal
//!         └── fold    terminal
//! ```
//!
//! Depth is at most 5 nodes on any root-to-leaf path, every non-terminal
//! node has a call child, and the accumulated bet is non-decreasing along
//! every path.

use std::fmt;

/// Maximum raises permitted within one betting round.
pub const MAX_RAISES: u32 = 2;

/// A betting action.
///
/// `None` is a sentinel: it labels the tree root and marks round boundaries
/// in action histories. Players never select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Root / round-boundary sentinel, never chosen by a player.
    None,
    /// Match the current bet (a check when nothing has been raised).
    Call,
    /// Increase the bet by the tree's raise increment.
    Raise,
    /// Give up the hand. Only available once a raise is on the table.
    Fold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::None => "none",
            Action::Call => "call",
            Action::Raise => "raise",
            Action::Fold => "fold",
        };
        write!(f, "{}", s)
    }
}

/// A decision point in the betting round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// The action that led to this node (`Action::None` at the root).
    pub last_action: Action,
    /// The player (0 or 1) who acts at this node. At a terminal node this is
    /// the player who would have acted next — for a fold leaf, the winner.
    pub player: usize,
    /// Accumulated per-player bet on the path to this node.
    pub betting: i32,
    call: Option<Box<TreeNode>>,
    raise: Option<Box<TreeNode>>,
    fold: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Child reached by calling, if any.
    #[inline]
    pub fn call(&self) -> Option<&TreeNode> {
        self.call.as_deref()
    }

    /// Child reached by raising, if any.
    #[inline]
    pub fn raise(&self) -> Option<&TreeNode> {
        self.raise.as_deref()
    }

    /// Child reached by folding, if any.
    #[inline]
    pub fn fold(&self) -> Option<&TreeNode> {
        self.fold.as_deref()
    }

    /// Child reached by `action`. `Action::None` never has a child.
    pub fn child(&self, action: Action) -> Option<&TreeNode> {
        match action {
            Action::Call => self.call(),
            Action::Raise => self.raise(),
            Action::Fold => self.fold(),
            Action::None => None,
        }
    }

    /// Whether this node ends the betting round. Terminal nodes have no
    /// children.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.call.is_none() && self.raise.is_none() && self.fold.is_none()
    }

    /// The actions a player may take at this node, in call/raise/fold order.
    ///
    /// Empty exactly when the node is terminal.
    pub fn available_actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(3);
        if self.call.is_some() {
            actions.push(Action::Call);
        }
        if self.raise.is_some() {
            actions.push(Action::Raise);
        }
        if self.fold.is_some() {
            actions.push(Action::Fold);
        }
        actions
    }
}

/// A complete betting-round tree capped at [`MAX_RAISES`] raises.
///
/// The tree exclusively owns every node; dropping it frees the whole
/// subtree. Construction is deterministic for fixed inputs, and the tree is
/// immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingTree {
    root: TreeNode,
    raise_amount: i32,
}

impl BettingTree {
    /// Build the round tree.
    ///
    /// # Arguments
    /// * `first_player` - the player (0 or 1) acting at the root
    /// * `betting` - the per-player bet carried into this round
    /// * `raise_amount` - the fixed increment added by each raise
    ///
    /// At the root only call and raise are offered; a fold child appears
    /// only below a raise.
    ///
    /// # Panics
    /// Panics if `first_player` is not 0 or 1, or if `betting` or
    /// `raise_amount` is negative.
    pub fn new(first_player: usize, betting: i32, raise_amount: i32) -> Self {
        assert!(first_player < 2, "first_player must be 0 or 1");
        assert!(betting >= 0, "betting must be non-negative");
        assert!(raise_amount >= 0, "raise_amount must be non-negative");

        let opponent = 1 - first_player;
        let root = TreeNode {
            last_action: Action::None,
            player: first_player,
            betting,
            // A call at the root passes the action to the opponent with no
            // raise yet on the table; there is nothing to fold to.
            call: Some(Box::new(build_node(
                betting,
                opponent,
                false,
                0,
                Action::Call,
                raise_amount,
            ))),
            raise: Some(Box::new(build_node(
                betting + raise_amount,
                opponent,
                false,
                1,
                Action::Raise,
                raise_amount,
            ))),
            fold: None,
        };
        Self { root, raise_amount }
    }

    /// The root decision point.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// The fixed raise increment used throughout the round.
    #[inline]
    pub fn raise_amount(&self) -> i32 {
        self.raise_amount
    }
}

/// Recursively build the subtree below one action.
///
/// `raises` counts the raises on the path so far: a call answers the current
/// bet and ends the exchange (terminal), a fold is offered only when there
/// is a raise to fold to, and a raise is offered only below the cap.
fn build_node(
    betting: i32,
    player: usize,
    terminal: bool,
    raises: u32,
    last_action: Action,
    raise_amount: i32,
) -> TreeNode {
    let mut node = TreeNode {
        last_action,
        player,
        betting,
        call: None,
        raise: None,
        fold: None,
    };
    if !terminal {
        let opponent = 1 - player;
        node.call = Some(Box::new(build_node(
            betting,
            opponent,
            true,
            raises,
            Action::Call,
            raise_amount,
        )));
        if raises > 0 {
            node.fold = Some(Box::new(build_node(
                betting,
                opponent,
                true,
                raises,
                Action::Fold,
                raise_amount,
            )));
        }
        if raises < MAX_RAISES {
            node.raise = Some(Box::new(build_node(
                betting + raise_amount,
                opponent,
                false,
                raises + 1,
                Action::Raise,
                raise_amount,
            )));
        }
    }
    node
}
