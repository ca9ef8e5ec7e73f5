//! The read-eval-print loop.

use std::io::{self, BufRead, Write};

use super::command::{Command, HELP};
use super::render::Renderer;
use crate::game::{DrawOutcome, Game, GameStatus};
use crate::piles::PileId;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Stuck,
    /// The player quit or input ran out.
    Quit,
}

/// An interactive game over any reader/writer pair.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W, renderer: Renderer) -> Self {
        Self {
            game,
            input,
            output,
            renderer,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the game is won or stuck, the player quits, or input ends.
    ///
    /// Bad commands and illegal moves are reported and play continues; only
    /// I/O failures are returned as errors.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        let config = self.game.config();
        writeln!(
            self.output,
            "Klondike: {}, draw {}, {}. Type ? for help.",
            match self.game.seed() {
                Some(seed) => format!("seed {seed}"),
                None => "prepared board".to_string(),
            },
            config.draw_size,
            match config.max_loops {
                Some(n) => format!("{n} pass(es) through the stock"),
                None => "unlimited passes".to_string(),
            }
        )?;

        loop {
            writeln!(self.output, "\n{}\n", self.renderer.render(&self.game.view()))?;

            match self.game.status() {
                GameStatus::Won => {
                    writeln!(self.output, "YOU WIN!")?;
                    return Ok(SessionEnd::Won);
                }
                GameStatus::Stuck => {
                    writeln!(self.output, "No moves left: the game is stuck.")?;
                    return Ok(SessionEnd::Stuck);
                }
                GameStatus::InProgress => {}
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(SessionEnd::Quit);
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    writeln!(self.output, "Bye.")?;
                    return Ok(SessionEnd::Quit);
                }
                Ok(command) => {
                    let message = self.execute(command);
                    writeln!(self.output, "{message}")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Carry out one command and describe what happened.
    pub fn execute(&mut self, command: Command) -> String {
        log::debug!("command {:?}", command);
        match command {
            Command::Draw => match self.game.draw() {
                Ok(DrawOutcome::Drew(cards)) => {
                    let names: Vec<String> = cards.iter().map(ToString::to_string).collect();
                    format!("Drew {}.", names.join(" "))
                }
                Ok(DrawOutcome::Recycled { cards, pass }) => {
                    format!("Turned {cards} card(s) back into the stock (pass {pass}).")
                }
                Ok(DrawOutcome::Exhausted) => "No passes through the stock remain.".to_string(),
                Err(err) => err.to_string(),
            },
            Command::Move { from, to, count } => self.transfer(from, to, count),
            Command::Play { to } => self.transfer(PileId::Waste, to, 1),
            Command::Save => {
                self.game.save();
                "Board saved.".to_string()
            }
            Command::Restore => {
                self.game.restore();
                "Board restored.".to_string()
            }
            Command::Hint => match self.game.hint() {
                Some(mv) => format!("Try: {mv}."),
                None => "No moves available.".to_string(),
            },
            Command::Auto => match self.game.auto_complete() {
                Ok(moved) => format!("Played {moved} card(s) to the foundations."),
                Err(err) => err.to_string(),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => "Bye.".to_string(),
        }
    }

    fn transfer(&mut self, from: PileId, to: PileId, count: usize) -> String {
        match self.game.move_cards(from, to, count) {
            Ok(report) => match report.revealed {
                Some(card) => format!("Moved {} card(s); turned up {card}.", report.moved),
                None => format!("Moved {} card(s).", report.moved),
            },
            Err(err) => format!("Illegal move: {err}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::core::config::GameConfig;

    fn play(script: &str) -> (SessionEnd, String) {
        let game = Game::new(GameConfig::new().with_seed(42)).unwrap();
        let mut session = Session::new(game, Cursor::new(script.to_string()), Vec::new(), Renderer::plain());
        let end = session.run().unwrap();
        (end, String::from_utf8(session.into_output()).unwrap())
    }

    #[test]
    fn test_quit_and_eof() {
        let (end, out) = play("q\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(out.starts_with("Klondike: seed 42, draw 3, unlimited passes."));
        assert!(out.contains("Bye."));

        let (end, _) = play("");
        assert_eq!(end, SessionEnd::Quit);
    }

    #[test]
    fn test_prepared_board_banner() {
        let board = crate::board::Board::shuffled(&mut crate::core::rng::GameRng::new(1));
        let game = Game::from_board(GameConfig::new(), board).unwrap();
        let mut session = Session::new(game, Cursor::new("q\n".to_string()), Vec::new(), Renderer::plain());
        session.run().unwrap();
        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.starts_with("Klondike: prepared board, draw 3, unlimited passes."));
        assert!(!out.contains("seed"));
    }

    #[test]
    fn test_draw_reports_cards() {
        let (_, out) = play("d\nq\n");
        assert!(out.contains("Drew "));
        assert!(out.contains("Stock: 21  Waste (3)"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (end, out) = play("x\nm t0 t0\nm t1 f9\nd\nq\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(out.contains("'x' is not a valid choice"));
        assert!(out.contains("Illegal move: source and destination are the same pile (T0)."));
        assert!(out.contains("'f9' is out of range"));
        assert!(out.contains("Drew "));
    }

    #[test]
    fn test_save_restore_and_help() {
        let (_, out) = play("?\ns\nd\nr\nq\n");
        assert!(out.contains("Commands:"));
        assert!(out.contains("Board saved."));
        assert!(out.contains("Board restored."));
        // The final board is back to the full stock.
        let last_board = out.rsplit("Board restored.").next().unwrap();
        assert!(last_board.contains("Stock: 24  Waste (0)"));
    }

    #[test]
    fn test_hint_suggests_something() {
        let (_, out) = play("h\nq\n");
        assert!(out.contains("Try: "));
    }
}
