//! # Leduc Sim
//!
//! A two-player Leduc-style poker simulator built around a compact
//! betting-round decision tree and pluggable decision strategies.
//!
//! ## Features
//!
//! - **Betting tree**: enumerates one round's legal action sequences under a
//!   two-raise cap (fold only becomes available after a raise)
//! - **Traversal engine**: walks the tree with alternating players, fully
//!   decoupled from how decisions are made
//! - **Three strategies**: uniform random, a greedy valuation heuristic, and
//!   mixed-strategy lookup from an externally trained policy table
//! - **Match runner**: antes, two betting rounds per hand with a public-card
//!   reveal, showdowns, and rayon-parallel independent matches
//!
//! ## Quick Start
//!
//! ```ignore
//! use leduc_sim::sim::{run_match, MatchConfig};
//! use leduc_sim::strategy::{GreedyStrategy, RandomStrategy};
//!
//! let config = MatchConfig { hands: 1000, seed: Some(42), ..Default::default() };
//! let outcome = run_match(
//!     Box::new(GreedyStrategy),
//!     Box::new(RandomStrategy::seeded(1)),
//!     &config,
//! );
//! println!("{} finished with {} chips", outcome.players[0].name, outcome.players[0].chips);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   sim: match runner                     │
//! │  antes · dealing · round loop · showdown · bookkeeping  │
//! └─────────────────────────────────────────────────────────┘
//!                │                            │
//!                ▼                            ▼
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │   game: mechanics        │   │  strategy: decisions     │
//! │  cards · betting tree    │◀──│  random · greedy · table │
//! │  traversal · showdown    │   │  (policy file loader)    │
//! └──────────────────────────┘   └──────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`game`]: cards, the betting tree, players, round traversal, showdown
//! - [`strategy`]: the `Strategy` trait and its three implementations
//! - [`sim`]: multi-hand match orchestration and outcome export

#![warn(missing_docs)]

pub mod game;
pub mod strategy;
pub mod sim;

// Re-export commonly used types at crate root for convenience
pub use game::{hand_value, Action, BettingTree, Card, Deck, History, Player, TreeNode};
pub use strategy::{GreedyStrategy, RandomStrategy, Strategy, StrategyTable, TableStrategy};
