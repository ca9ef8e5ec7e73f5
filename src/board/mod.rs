//! Board state: the dealt layout and its rendering snapshot.

pub mod layout;
pub mod view;

pub use layout::Board;
pub use view::BoardView;
