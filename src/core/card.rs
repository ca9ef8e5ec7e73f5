//! Playing cards: rank, suit, color and the face-up flag.
//!
//! A card's identity (rank + suit) never changes. The only mutable part is
//! whether it is face-up, which piles flip as cards are dealt, drawn and
//! recycled.

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit (Ace through King).
pub const RANKS_PER_SUIT: usize = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// The color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-letter symbol used when displaying cards.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, Ace low.
///
/// Stored as 1..=13 so that foundation arithmetic reads naturally
/// (a foundation holding `n` cards accepts rank `n + 1` next).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank from its numeric value (1 = Ace, 13 = King).
    ///
    /// Returns `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all ranks, Ace to King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// The rank directly above this one, if any.
    #[must_use]
    pub const fn succ(self) -> Option<Rank> {
        Rank::new(self.0 + 1)
    }

    /// True if `self` is exactly one rank below `other`.
    #[must_use]
    pub const fn is_just_below(self, other: Rank) -> bool {
        self.0 + 1 == other.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// A playing card.
///
/// Equality and hashing only consider identity; see [`Card::same_face`] to
/// also compare orientation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Builder-style: return this card turned face-up.
    #[must_use]
    pub const fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Set the face-up flag.
    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// True if the two cards are of opposite colors.
    #[must_use]
    pub fn contrasts(self, other: Card) -> bool {
        self.color() != other.color()
    }

    /// True if identity and orientation both match.
    #[must_use]
    pub fn same_face(self, other: Card) -> bool {
        self == other && self.face_up == other.face_up
    }

    /// Card name regardless of orientation, e.g. `10H`.
    #[must_use]
    pub fn name(self) -> String {
        format!("{}{}", self.rank, self.suit.letter())
    }

    /// Build the 52 cards of a standard deck, face-down, suit by suit.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(rank, suit)))
            .collect()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank, self.suit.letter())
        } else {
            write!(f, "??")
        }
    }
}

impl std::str::FromStr for Card {
    type Err = String;

    /// Parse a card name such as `AH`, `10c` or `qs`. The result is face-up.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        let mut chars = s.chars();
        let suit = match chars.next_back() {
            Some('C') => Suit::Clubs,
            Some('D') => Suit::Diamonds,
            Some('H') => Suit::Hearts,
            Some('S') => Suit::Spades,
            _ => return Err(format!("bad suit in card '{}'", s)),
        };
        let rank = match chars.as_str() {
            "A" => Rank::ACE,
            "J" => Rank::JACK,
            "Q" => Rank::QUEEN,
            "K" => Rank::KING,
            n => n
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .and_then(Rank::new)
                .ok_or_else(|| format!("bad rank in card '{}'", s))?,
        };
        Ok(Card::new(rank, suit).face_up())
    }
}
