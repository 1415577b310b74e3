//! Rules engine for an eight-deck Spider solitaire board.
//!
//! The crate owns the ten tableau piles, the floating drag selection and
//! the retired completed runs. A presentation adapter feeds it pointer
//! coordinates in the fixed logical canvas and redraws by handing
//! [`Board::draw`] anything that implements [`BlitTarget`]; nothing here
//! touches a window, a renderer or the file system.
//!
//! - [`game`]: `Suit`, `Card`, `Pile` and `Board` state transitions
//! - [`layout`]: logical-canvas constants and column geometry
//! - [`render`]: sprite-sheet rectangles and the blit capability

pub mod game;
pub mod layout;
pub mod render;

pub use crate::game::{rank_label, Board, Card, Pile, Suit, RUN_LENGTH};
pub use crate::render::{BlitTarget, SpriteRect};
