//! Command vocabulary for the interaction loop.
//!
//! Commands are case-insensitive words; the first letter is enough. Piles
//! are written `w` (waste), `t0`..`t6` or `s0`..`s6` (tableau) and
//! `f0`..`f3` or `v0`..`v3` (foundations).

use thiserror::Error;

use crate::piles::PileId;

/// A parsed player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Draw,
    Move { from: PileId, to: PileId, count: usize },
    /// Move the top waste card.
    Play { to: PileId },
    Save,
    Restore,
    Hint,
    Auto,
    Help,
    Quit,
}

/// Why a line of input could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("enter a command (? for help)")]
    Empty,

    #[error("'{0}' is not a valid choice (? for help)")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a pile; use w, t0-t6 or f0-f3")]
    BadPile(String),

    #[error("'{0}' is out of range; tableau is t0-t6, foundations f0-f3")]
    PileOutOfRange(String),

    #[error("'{0}' is not a card count")]
    BadCount(String),

    #[error("unexpected '{0}'")]
    Unexpected(String),
}

/// Text shown for `help`.
pub const HELP: &str = "\
Commands:
  d, draw                 draw from the stock
  m, move FROM TO [N]     move N cards (default 1), e.g. `m t3 t5 2`
  p, play TO              play the top waste card, e.g. `p f0`
  s, save                 save the board
  r, restore              restore the saved board
  h, hint                 suggest a move
  a, auto                 finish the game once every card is face-up
  ?, help                 show this list
  q, quit                 leave the game
Piles: w = waste, t0-t6 = tableau, f0-f3 = foundations";

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match verb.as_str() {
            "d" | "draw" => Command::Draw,
            "m" | "move" => {
                let from = parse_pile(words.next().ok_or(CommandError::MissingArgument("source pile"))?)?;
                let to = parse_pile(words.next().ok_or(CommandError::MissingArgument("destination pile"))?)?;
                let count = match words.next() {
                    Some(n) => n.parse().map_err(|_| CommandError::BadCount(n.to_string()))?,
                    None => 1,
                };
                Command::Move { from, to, count }
            }
            "p" | "play" => {
                let to = parse_pile(words.next().ok_or(CommandError::MissingArgument("destination pile"))?)?;
                Command::Play { to }
            }
            "s" | "save" => Command::Save,
            "r" | "t" | "restore" => Command::Restore,
            "h" | "hint" => Command::Hint,
            "a" | "auto" => Command::Auto,
            "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Unexpected(extra.to_string())),
            None => Ok(command),
        }
    }
}

/// Parse a pile name such as `w`, `t3`, `S3`, `f0` or `v2`.
pub fn parse_pile(word: &str) -> Result<PileId, CommandError> {
    let lower = word.to_ascii_lowercase();
    if lower == "w" || lower == "waste" {
        return Ok(PileId::Waste);
    }

    let mut chars = lower.chars();
    let make: fn(u8) -> PileId = match chars.next() {
        Some('t' | 's') => PileId::Tableau,
        Some('f' | 'v') => PileId::Foundation,
        _ => return Err(CommandError::BadPile(word.to_string())),
    };
    let index: u8 = chars
        .as_str()
        .parse()
        .map_err(|_| CommandError::BadPile(word.to_string()))?;

    let pile = make(index);
    if pile.is_valid() {
        Ok(pile)
    } else {
        Err(CommandError::PileOutOfRange(word.to_string()))
    }
}
