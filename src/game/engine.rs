//! The game engine: board, pass counter, and the validated operations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, BoardView};
use crate::core::card::Card;
use crate::core::config::GameConfig;
use crate::core::error::{ConfigError, IllegalMove};
use crate::core::rng::GameRng;
use crate::piles::{PileId, PileKind};
use crate::rules::{check_transfer, legal_transfers, Move};

/// Overall state of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// All 52 cards are on the foundations.
    Won,
    /// No legal move is left and the stock cannot be cycled again.
    Stuck,
}

/// Result of a successful [`Game::draw`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Cards turned from the stock onto the waste, in draw order.
    Drew(SmallVec<[Card; 3]>),
    /// The waste was turned over into the stock.
    Recycled { cards: usize, pass: u32 },
    /// The stock is empty and the pass limit is reached; nothing changed.
    Exhausted,
}

/// Result of a successful [`Game::move_cards`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Number of cards moved.
    pub moved: usize,
    /// Tableau card turned face-up by the move, if any.
    pub revealed: Option<Card>,
}

/// Saved board plus pass counter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub passes: u32,
}

/// A game of Klondike.
///
/// ## Usage
///
/// ```
/// use klondike_engine::core::GameConfig;
/// use klondike_engine::game::{DrawOutcome, Game, GameStatus};
///
/// let mut game = Game::new(GameConfig::new().with_seed(7)).unwrap();
/// assert_eq!(game.status(), GameStatus::InProgress);
///
/// match game.draw().unwrap() {
///     DrawOutcome::Drew(cards) => assert_eq!(cards.len(), 3),
///     other => panic!("unexpected {:?}", other),
/// }
/// assert_eq!(game.board().card_count(), 52);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    seed: Option<u64>,
    board: Board,
    passes: u32,
    saved: Snapshot,
}

impl Game {
    /// Shuffle and deal a new game.
    ///
    /// Uses `config.seed` when set, otherwise a random seed (see [`Game::seed`]).
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();
        let board = Board::shuffled(&mut rng);
        log::debug!("dealt game with seed {} (draw {}, max loops {:?})", seed, config.draw_size, config.max_loops);
        Ok(Self::assemble(config, Some(seed), board))
    }

    /// Start a game from a prepared board.
    ///
    /// The game has no seed: the position cannot be replayed by dealing.
    pub fn from_board(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, None, board))
    }

    fn assemble(config: GameConfig, seed: Option<u64>, board: Board) -> Self {
        let saved = Snapshot {
            board: board.clone(),
            passes: 0,
        };
        Self {
            config,
            seed,
            board,
            passes: 0,
            saved,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed the deck was shuffled with, `None` for a prepared board.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of times the waste has been recycled into the stock.
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Rendering data for the current position.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::capture(&self.board, self.passes, self.config.max_loops)
    }

    // === Operations ===

    /// Draw from the stock.
    ///
    /// Turns up to `draw_size` cards onto the waste. With an empty stock the
    /// waste is recycled instead, using up one pass; once the pass limit is
    /// reached this reports [`DrawOutcome::Exhausted`] and changes nothing.
    pub fn draw(&mut self) -> Result<DrawOutcome, IllegalMove> {
        if !self.board.stock().is_empty() {
            let drawn = self.board.turn_stock(self.config.draw_size);
            log::debug!(
                "drew {}",
                drawn.iter().map(|c| c.name()).collect::<Vec<_>>().join(" ")
            );
            return Ok(DrawOutcome::Drew(drawn));
        }
        if self.board.waste().is_empty() {
            return Err(IllegalMove::EmptyStock);
        }
        if !self.config.allows_pass(self.passes) {
            log::debug!("pass limit {:?} reached", self.config.max_loops);
            return Ok(DrawOutcome::Exhausted);
        }

        let cards = self.board.recycle_waste();
        self.passes += 1;
        log::debug!("recycled {} cards, pass {}", cards, self.passes);
        Ok(DrawOutcome::Recycled {
            cards,
            pass: self.passes,
        })
    }

    /// Move the top `count` cards of `from` onto `to`.
    ///
    /// Nothing changes unless the whole move is legal. A tableau card left
    /// face-down on top of the source is turned up.
    pub fn move_cards(&mut self, from: PileId, to: PileId, count: usize) -> Result<MoveReport, IllegalMove> {
        if let Err(err) = check_transfer(&self.board, from, to, count) {
            log::debug!("rejected {} -> {} x{}: {}", from, to, count, err);
            return Err(err);
        }

        self.board.transfer(from, to, count);
        let revealed = self.board.reveal(from);
        log::debug!("moved {} card(s) {} -> {}", count, from, to);
        if let Some(card) = revealed {
            log::debug!("revealed {} on {}", card.name(), from);
        }

        Ok(MoveReport {
            moved: count,
            revealed,
        })
    }

    /// Apply any [`Move`].
    pub fn apply(&mut self, mv: Move) -> Result<(), IllegalMove> {
        match mv {
            Move::Draw => self.draw().map(|_| ()),
            Move::Transfer { from, to, count } => self.move_cards(from, to, count).map(|_| ()),
        }
    }

    // === Queries ===

    /// True iff all four foundations hold 13 cards each.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// True if drawing would change the board.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.board.stock().is_empty()
            || (!self.board.waste().is_empty() && self.config.allows_pass(self.passes))
    }

    /// True iff the game is not won, the stock cannot be cycled any more, and
    /// no legal card move remains.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        !self.is_won() && !self.can_draw() && legal_transfers(&self.board).is_empty()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_stuck() {
            GameStatus::Stuck
        } else {
            GameStatus::InProgress
        }
    }

    /// Every legal move: card transfers (foundation moves first), then
    /// `Draw` if drawing would change the board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = legal_transfers(&self.board);
        if self.can_draw() {
            moves.push(Move::Draw);
        }
        moves
    }

    /// Suggest a move.
    ///
    /// Prefers a productive transfer (see [`Move::is_productive`]), then
    /// `Draw`, then any legal transfer at all. `None` only when stuck or won.
    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        let transfers = legal_transfers(&self.board);
        transfers
            .iter()
            .copied()
            .find(|mv| mv.is_productive(&self.board))
            .or_else(|| self.can_draw().then_some(Move::Draw))
            .or_else(|| transfers.first().copied())
    }

    // === Auto-complete ===

    /// True when the stock and waste are empty and no tableau card is
    /// face-down: every remaining card can then go straight up.
    #[must_use]
    pub fn can_auto_complete(&self) -> bool {
        self.board.stock().is_empty()
            && self.board.waste().is_empty()
            && self
                .board
                .tableau()
                .iter()
                .all(|column| column.face_up_count() == column.len())
    }

    /// Play every remaining card to the foundations.
    ///
    /// Returns the number of cards moved.
    pub fn auto_complete(&mut self) -> Result<usize, IllegalMove> {
        if !self.can_auto_complete() {
            return Err(IllegalMove::CannotAutoComplete);
        }

        let mut moved = 0;
        while !self.is_won() {
            let next = legal_transfers(&self.board).into_iter().find(|mv| {
                mv.is_to_foundation()
                    && matches!(mv, Move::Transfer { from, .. } if from.kind() == PileKind::Tableau)
            });
            let Some(mv) = next else { break };
            self.apply(mv)?;
            moved += 1;
        }
        log::debug!("auto-completed {} card(s)", moved);
        Ok(moved)
    }

    // === Save / restore ===

    /// Remember the current position, replacing any earlier save.
    pub fn save(&mut self) {
        self.saved = self.snapshot();
        log::debug!("saved board");
    }

    /// Return to the last saved position (the deal, if never saved).
    pub fn restore(&mut self) {
        self.board = self.saved.board.clone();
        self.passes = self.saved.passes;
        log::debug!("restored board");
    }

    /// The current position as a standalone snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            passes: self.passes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::DECK_SIZE;

    fn game(config: GameConfig) -> Game {
        Game::new(config.with_seed(42)).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = game(GameConfig::new());
        assert_eq!(game.seed(), Some(42));
        assert_eq!(game.passes(), 0);
        assert_eq!(game.board().card_count(), DECK_SIZE);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.can_draw());
        assert!(game.legal_moves().contains(&Move::Draw));
    }

    #[test]
    fn test_invalid_config() {
        let err = Game::new(GameConfig::new().with_draw_size(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDrawSize);
    }

    #[test]
    fn test_random_seed_is_replayable() {
        let a = Game::new(GameConfig::new()).unwrap();
        let b = Game::new(GameConfig::new().with_seed(a.seed().unwrap())).unwrap();
        assert_eq!(a.view(), b.view());
    }

    #[test]
    fn test_draw_three_then_remainder() {
        let mut game = game(GameConfig::new());

        // 24 cards in stock: 8 full draws.
        for _ in 0..8 {
            match game.draw().unwrap() {
                DrawOutcome::Drew(cards) => assert_eq!(cards.len(), 3),
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!(game.board().stock().is_empty());
        assert_eq!(game.board().waste().len(), 24);

        let outcome = game.draw().unwrap();
        assert_eq!(outcome, DrawOutcome::Recycled { cards: 24, pass: 1 });
        assert_eq!(game.passes(), 1);
    }

    #[test]
    fn test_pass_limit_exhausts() {
        let mut game = game(GameConfig::new().with_draw_size(24).with_max_loops(1));

        assert!(matches!(game.draw().unwrap(), DrawOutcome::Drew(_)));
        assert!(matches!(game.draw().unwrap(), DrawOutcome::Recycled { pass: 1, .. }));
        assert!(matches!(game.draw().unwrap(), DrawOutcome::Drew(_)));
        assert!(!game.can_draw());

        let waste_before = game.board().waste().len();
        assert_eq!(game.draw().unwrap(), DrawOutcome::Exhausted);
        assert_eq!(game.board().waste().len(), waste_before);
        assert_eq!(game.passes(), 1);
        assert!(!game.legal_moves().contains(&Move::Draw));
    }

    #[test]
    fn test_failed_move_changes_nothing() {
        let mut game = game(GameConfig::new());
        let before = game.view();

        let err = game.move_cards(PileId::Stock, PileId::Tableau(0), 1).unwrap_err();
        assert_eq!(err, IllegalMove::InvalidSource(PileId::Stock));
        let err = game.move_cards(PileId::Tableau(6), PileId::Tableau(0), 7).unwrap_err();
        assert!(matches!(err, IllegalMove::NotEnoughCards { .. }));

        assert_eq!(game.view(), before);
    }

    #[test]
    fn test_legal_moves_apply_cleanly() {
        let mut game = game(GameConfig::new());
        for mv in game.legal_moves() {
            let mut copy = game.clone();
            assert_eq!(copy.apply(mv), Ok(()), "{} should apply", mv);
            assert_eq!(copy.board().validate(), Ok(()));
        }
        assert!(game.apply(Move::Draw).is_ok());
    }

    #[test]
    fn test_save_restore() {
        let mut game = game(GameConfig::new());
        let dealt = game.view();

        game.draw().unwrap();
        let after_draw = game.view();
        game.save();

        game.draw().unwrap();
        game.draw().unwrap();
        assert_ne!(game.view(), after_draw);

        game.restore();
        assert_eq!(game.view(), after_draw);

        let mut fresh = Game::new(GameConfig::new().with_seed(42)).unwrap();
        fresh.draw().unwrap();
        fresh.restore();
        assert_eq!(fresh.view(), dealt);
    }

    #[test]
    fn test_cannot_auto_complete_fresh_deal() {
        let mut game = game(GameConfig::new());
        assert!(!game.can_auto_complete());
        assert_eq!(game.auto_complete(), Err(IllegalMove::CannotAutoComplete));
    }

    #[test]
    fn test_prepared_board_has_no_seed() {
        let board = Board::shuffled(&mut GameRng::new(3));
        let game = Game::from_board(GameConfig::new().with_seed(3), board).unwrap();
        assert_eq!(game.seed(), None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = game(GameConfig::new());
        let json = serde_json::to_string(&game.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.passes, 0);
        assert_eq!(back.board.validate(), Ok(()));
    }
}
