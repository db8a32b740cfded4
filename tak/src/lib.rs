
pub mod board;
pub mod error;
pub mod game;
pub mod key;
pub mod outcome;
pub mod player;
pub mod road;
pub mod stone;

pub use board::Board;
pub use error::Error;
pub use game::{Game, Move, Placement};
pub use key::StateKey;
pub use outcome::Outcome;
pub use player::Player;
pub use road::{has_road, Lane};
pub use stone::{Stone, StoneKind};
