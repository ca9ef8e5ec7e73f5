//! Terminal front end: flags, command parsing, rendering and the play loop.

pub mod args;
pub mod command;
pub mod render;
pub mod session;

pub use args::Args;
pub use command::{parse_pile, Command, CommandError, HELP};
pub use render::Renderer;
pub use session::{Session, SessionEnd};
