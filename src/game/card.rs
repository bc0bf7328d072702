//! Card types for Leduc poker.
//!
//! This module provides the card fundamentals used throughout the simulator:
//! - `Card`: one of the six Leduc cards ({J, Q, K} x {Red, Black}), plus an
//!   `Unknown` placeholder for cards not yet revealed
//! - `hand_value`: the valuation function shared by the greedy strategy and
//!   the showdown resolver
//! - `Deck`: the six-card supply with shuffle/deal/reset
//!
//! ## Valuation
//!
//! Ranks map to coarse strength tiers (J=1, Q=2, K=3). A private card that
//! pairs the public card scores `tier * tier * 10`; unpaired hands score the
//! sum of the two tiers. Pairs therefore always beat non-pairs (minimum pair
//! scores 10, maximum non-pair sum is 5).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// A single Leduc card.
///
/// The deck holds two suits of each rank. Suits never affect valuation; they
/// only exist so that the deck contains six distinct cards and a pair of the
/// same rank can be formed across suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// Placeholder for a card that has not been revealed.
    Unknown,
    /// Red jack.
    RedJ,
    /// Red queen.
    RedQ,
    /// Red king.
    RedK,
    /// Black jack.
    BlackJ,
    /// Black queen.
    BlackQ,
    /// Black king.
    BlackK,
}

impl Card {
    /// The six dealable cards, in a fixed pre-shuffle order.
    pub const DECK: [Card; 6] = [
        Card::RedJ,
        Card::RedQ,
        Card::RedK,
        Card::BlackJ,
        Card::BlackQ,
        Card::BlackK,
    ];

    /// Strength tier of the card's rank: J=1, Q=2, K=3.
    ///
    /// `Unknown` maps to tier 0, which keeps [`hand_value`] total and can
    /// never pair with a real card.
    #[inline]
    pub fn tier(self) -> u32 {
        match self {
            Card::Unknown => 0,
            Card::RedJ | Card::BlackJ => 1,
            Card::RedQ | Card::BlackQ => 2,
            Card::RedK | Card::BlackK => 3,
        }
    }

    /// Rank letter for information-string keys, `None` for `Unknown`.
    #[inline]
    pub fn rank_char(self) -> Option<char> {
        match self {
            Card::Unknown => None,
            Card::RedJ | Card::BlackJ => Some('J'),
            Card::RedQ | Card::BlackQ => Some('Q'),
            Card::RedK | Card::BlackK => Some('K'),
        }
    }

    /// Whether this card has been revealed.
    #[inline]
    pub fn is_known(self) -> bool {
        self != Card::Unknown
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Card::Unknown => "??",
            Card::RedJ => "RJ",
            Card::RedQ => "RQ",
            Card::RedK => "RK",
            Card::BlackJ => "BJ",
            Card::BlackQ => "BQ",
            Card::BlackK => "BK",
        };
        write!(f, "{}", s)
    }
}

/// Score a private card against the public card.
///
/// Equal tiers form a pair worth `tier^2 * 10`; otherwise the score is the
/// sum of the two tiers. Pure, total, and symmetric in its arguments.
#[inline]
pub fn hand_value(card: Card, board: Card) -> u32 {
    let (a, b) = (card.tier(), board.tier());
    if a == b {
        a * b * 10
    } else {
        a + b
    }
}

/// The six-card supply for one table.
///
/// `deal` hands out cards front-to-back from the last shuffle; `reset`
/// reshuffles and rewinds between hands. Dealing past the end of the pool is
/// a sequencing bug in the caller and panics.
#[derive(Debug)]
pub struct Deck {
    cards: [Card; 6],
    next: usize,
    rng: StdRng,
}

impl Deck {
    /// Create a shuffled deck with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a shuffled deck from a fixed seed, for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut deck = Self {
            cards: Card::DECK,
            next: 0,
            rng,
        };
        deck.reset();
        deck
    }

    /// Reshuffle all six cards and rewind to the top of the pool.
    pub fn reset(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.next = 0;
    }

    /// Deal the next card.
    ///
    /// # Panics
    /// Panics if all six cards have already been dealt since the last
    /// `reset` — a hand never needs more than four cards, so running dry
    /// indicates a sequencing error.
    pub fn deal(&mut self) -> Card {
        assert!(
            self.next < self.cards.len(),
            "deck exhausted: deal() called after all {} cards were dealt",
            self.cards.len()
        );
        let card = self.cards[self.next];
        self.next += 1;
        card
    }

    /// Number of cards left in the pool.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
