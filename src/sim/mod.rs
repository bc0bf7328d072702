//! Multi-hand match orchestration.
//!
//! The core modules resolve a single betting round; this module drives whole
//! matches on top of them: antes, dealing, up to two betting rounds per hand
//! with a public-card reveal in between, showdown, chip bookkeeping, and
//! seat alternation. It also offers a rayon-parallel runner for independent
//! matches — each match owns its players, deck, pot, and history, and
//! derives its own RNG seed, so the only shared state is a read-only
//! [`StrategyTable`](crate::strategy::StrategyTable) behind an `Arc`.
//!
//! ## Tie policy
//!
//! A showdown tie leaves the pot unresolved at the core level. The runner
//! splits it evenly between the players and leaves any odd chip in the pot,
//! where it carries into the next hand.

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::game::round::{play_round, showdown, History};
use crate::game::tree::{Action, BettingTree};
use crate::game::{Card, Deck, Player};
use crate::strategy::Strategy;

/// Settings for one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of hands to play.
    pub hands: u64,
    /// Chip stack each player starts with.
    pub starting_chips: i32,
    /// Ante each player posts at the start of a hand; also the opening bet
    /// level of the first round.
    pub ante: i32,
    /// RNG seed for the deck. `None` uses entropy; fixed seeds make whole
    /// matches reproducible when the strategies are seeded too.
    pub seed: Option<u64>,
    /// Show a progress bar over the hand loop.
    #[serde(default)]
    pub progress: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            hands: 1000,
            starting_chips: 3000,
            ante: 1,
            seed: None,
            progress: false,
        }
    }
}

/// Final standing of one player after a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Display name (strategy name, suffixed `1`/`2` in mirror matches).
    pub name: String,
    /// Name of the strategy the player was bound to.
    pub strategy: String,
    /// Final chip stack.
    pub chips: i32,
    /// Chip stack after each hand.
    pub chip_history: Vec<i32>,
}

/// Result of a completed match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Hands played.
    pub hands: u64,
    /// Hands that ended in an unresolved showdown tie.
    pub ties: u64,
    /// Chips still sitting in the pot at the end (odd-chip carry from ties).
    pub pot_carry: i32,
    /// Per-player standings, index 0 and 1.
    pub players: [PlayerSummary; 2],
}

impl MatchOutcome {
    /// Index of the player with the larger final stack, `None` on a dead
    /// heat.
    pub fn leader(&self) -> Option<usize> {
        match self.players[0].chips.cmp(&self.players[1].chips) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Write the outcome as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

/// Play a full match between two strategies.
///
/// Each hand: both players post the ante, receive a private card, and play
/// round one; unless it ended in a fold, the public card is revealed and
/// round two follows with a doubled raise increment. The showdown settles
/// the pot (ties split evenly, odd chip carries). Players alternate who acts
/// first from hand to hand.
pub fn run_match(
    strategy0: Box<dyn Strategy>,
    strategy1: Box<dyn Strategy>,
    config: &MatchConfig,
) -> MatchOutcome {
    let mut names = [
        strategy0.name().to_string(),
        strategy1.name().to_string(),
    ];
    if names[0] == names[1] {
        names[0].push('1');
        names[1].push('2');
    }

    let mut players = [
        Player::new(names[0].clone(), config.starting_chips, strategy0),
        Player::new(names[1].clone(), config.starting_chips, strategy1),
    ];
    let mut deck = match config.seed {
        Some(seed) => Deck::seeded(seed),
        None => Deck::new(),
    };

    let bar = config.progress.then(|| ProgressBar::new(config.hands));
    let mut pot = 0;
    let mut ties = 0;
    let mut chip_history: [Vec<i32>; 2] = [
        Vec::with_capacity(config.hands as usize),
        Vec::with_capacity(config.hands as usize),
    ];

    for hand in 0..config.hands {
        let first = (hand % 2) as usize;
        if play_hand(&mut players, &mut deck, &mut pot, config.ante, first).is_none() {
            ties += 1;
        }
        chip_history[0].push(players[0].chips());
        chip_history[1].push(players[1].chips());
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let [history0, history1] = chip_history;
    MatchOutcome {
        hands: config.hands,
        ties,
        pot_carry: pot,
        players: [
            PlayerSummary {
                name: players[0].name().to_string(),
                strategy: players[0].strategy_name().to_string(),
                chips: players[0].chips(),
                chip_history: history0,
            },
            PlayerSummary {
                name: players[1].name().to_string(),
                strategy: players[1].strategy_name().to_string(),
                chips: players[1].chips(),
                chip_history: history1,
            },
        ],
    }
}

/// Run several independent matches in parallel.
///
/// `make_strategies` builds a fresh strategy pair for match `i`; it must
/// hand out independent random sources (fresh seeds) per call. Seeded
/// configs derive a distinct deck seed per match.
pub fn run_matches<F>(make_strategies: F, config: &MatchConfig, matches: usize) -> Vec<MatchOutcome>
where
    F: Fn(u64) -> (Box<dyn Strategy>, Box<dyn Strategy>) + Sync,
{
    (0..matches as u64)
        .into_par_iter()
        .map(|i| {
            let (s0, s1) = make_strategies(i);
            let mut match_config = config.clone();
            match_config.seed = config.seed.map(|seed| seed.wrapping_add(i));
            match_config.progress = false;
            run_match(s0, s1, &match_config)
        })
        .collect()
}

/// Play one hand to completion. Returns the winner, or `None` for a tie
/// (split applied, odd chip left in the pot).
fn play_hand(
    players: &mut [Player; 2],
    deck: &mut Deck,
    pot: &mut i32,
    ante: i32,
    first: usize,
) -> Option<usize> {
    let mut betting = ante;
    let mut board = Card::Unknown;
    let mut history = History::new();
    history.start_round();

    players[0].bet(ante, pot);
    players[1].bet(ante, pot);
    players[0].set_card(deck.deal());
    players[1].set_card(deck.deal());

    let mut winner = None;
    for round in 1..=2 {
        let raise_amount = 2 * round;
        let tree = BettingTree::new(first, betting, raise_amount);
        let node = play_round(&tree, players, board, &mut history, &mut betting, pot);

        if node.last_action == Action::Fold || round == 2 {
            winner = showdown(players, node, board, pot);
            if winner.is_none() {
                let share = *pot / 2;
                *pot -= 2 * share;
                players[0].credit(share);
                players[1].credit(share);
            }
            break;
        }

        board = deck.deal();
        history.start_round();
    }

    players[0].reset();
    players[1].reset();
    deck.reset();
    winner
}
