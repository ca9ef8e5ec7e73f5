//! Destination-acceptance rule table and run validation.
//!
//! | Destination | Empty          | Non-empty top `t`                        |
//! |-------------|----------------|------------------------------------------|
//! | Foundation  | Ace only       | same suit as `t`, rank = rank(`t`) + 1   |
//! | Tableau     | King only      | opposite color, rank = rank(`t`) - 1     |
//! | Stock/Waste | never          | never                                    |
//!
//! `card` is always the bottom card of the unit being moved.

use crate::core::card::{Card, Rank};
use crate::core::error::{FoundationTop, IllegalMove, TableauTop};
use crate::piles::{PileId, PileKind};

/// Does a pile of `kind` topped by `top` accept `card`?
#[must_use]
pub fn accepts(kind: PileKind, top: Option<Card>, card: Card) -> bool {
    match (kind, top) {
        (PileKind::Foundation, None) => card.rank() == Rank::ACE,
        (PileKind::Foundation, Some(top)) => {
            top.suit() == card.suit() && top.rank().is_just_below(card.rank())
        }
        (PileKind::Tableau, None) => card.rank() == Rank::KING,
        (PileKind::Tableau, Some(top)) => {
            top.is_face_up() && top.contrasts(card) && card.rank().is_just_below(top.rank())
        }
        (PileKind::Stock | PileKind::Waste, _) => false,
    }
}

/// Like [`accepts`], but explains a rejection.
pub fn check_placement(dest: PileId, top: Option<Card>, card: Card) -> Result<(), IllegalMove> {
    let ok = accepts(dest.kind(), top, card);
    log::trace!("placement of {} on {} (top {:?}): {}", card.name(), dest, top.map(Card::name), ok);
    if ok {
        return Ok(());
    }
    Err(match dest.kind() {
        PileKind::Foundation => IllegalMove::FoundationRejects {
            card,
            onto: top.map_or(FoundationTop::Empty, FoundationTop::Card),
        },
        PileKind::Tableau => IllegalMove::TableauRejects {
            card,
            onto: top.map_or(TableauTop::Empty, TableauTop::Card),
        },
        PileKind::Stock | PileKind::Waste => IllegalMove::InvalidDestination(dest),
    })
}

/// True if `cards` (bottom to top) are face-up and form a descending,
/// alternating-color run. A single face-up card is a run.
pub fn is_run<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut below: Option<Card> = None;
    for &card in cards {
        if !card.is_face_up() {
            return false;
        }
        if let Some(b) = below {
            if !(b.contrasts(card) && card.rank().is_just_below(b.rank())) {
                return false;
            }
        }
        below = Some(card);
    }
    below.is_some()
}
