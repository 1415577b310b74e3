//! Sprite-sheet rectangles and the blit capability.
//!
//! The engine never talks to a renderer; during [`crate::game::Board::draw`]
//! it hands (source, destination) rectangle pairs to whatever implements
//! [`BlitTarget`]. The sheet is laid out card-sized cell by cell: one row
//! per suit, one column per rank, with the card back on a fifth row.

use crate::game::{Card, Suit};
use crate::layout::{CARD_HEIGHT, CARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl SpriteRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Anything that can copy a sprite-sheet region onto the screen.
pub trait BlitTarget {
    fn blit(&mut self, source: SpriteRect, dest: SpriteRect);
}

impl<F: FnMut(SpriteRect, SpriteRect)> BlitTarget for F {
    fn blit(&mut self, source: SpriteRect, dest: SpriteRect) {
        self(source, dest)
    }
}

pub fn card_sprite(card: Card) -> SpriteRect {
    if !card.face_up {
        return back_sprite();
    }
    let row = match card.suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    };
    let col = i32::from(card.rank.saturating_sub(1).min(12));
    sheet_cell(row, col)
}

pub fn back_sprite() -> SpriteRect {
    sheet_cell(4, 0)
}

fn sheet_cell(row: i32, col: i32) -> SpriteRect {
    SpriteRect::new(CARD_WIDTH * col, CARD_HEIGHT * row, CARD_WIDTH, CARD_HEIGHT)
}
