//! Logical-canvas geometry shared by the engine and presentation adapters.
//!
//! Everything is expressed in the fixed 1000x670 logical canvas; adapters
//! scale to the physical window themselves. Hit-testing and drawing read
//! the same constants, so the two can never disagree about where a card
//! sits.

pub const CANVAS_WIDTH: i32 = 1000;
pub const CANVAS_HEIGHT: i32 = 670;

pub const CARD_WIDTH: i32 = 71;
pub const CARD_HEIGHT: i32 = 96;

/// Vertical exposure of each buried card in a cascaded pile.
pub const CASCADE_STEP: i32 = CARD_HEIGHT / 5;

pub const TABLEAU_PILES: usize = 10;
pub const TOTAL_DECKS: usize = 8;

pub const COLUMN_LEFT_MARGIN: i32 = 10;
pub const COLUMN_OFFSET: i32 = 100;
pub const TABLEAU_TOP_Y: i32 = 20;

pub const COMPLETED_ROW_X: i32 = 50;
pub const COMPLETED_ROW_Y: i32 = 600;
pub const COMPLETED_FAN_STEP: i32 = CARD_WIDTH / 3;

// Columns must not overlap or `column_at` would misattribute pointer x.
const _: () = assert!(COLUMN_OFFSET >= CARD_WIDTH);
// The rightmost column has to fit on the canvas.
const _: () = assert!(
    COLUMN_LEFT_MARGIN + COLUMN_OFFSET * (TABLEAU_PILES as i32 - 1) + CARD_WIDTH <= CANVAS_WIDTH
);

/// Inclusive horizontal bounds of a tableau column.
pub fn column_bounds(column: usize) -> (i32, i32) {
    let left = COLUMN_LEFT_MARGIN + COLUMN_OFFSET * column as i32;
    (left, left + CARD_WIDTH)
}

/// Maps a pointer x to the tableau column under it, if any.
pub fn column_at(x: i32) -> Option<usize> {
    (0..TABLEAU_PILES).find(|&column| {
        let (left, right) = column_bounds(column);
        left <= x && x <= right
    })
}

/// On-canvas height of a rendered pile, for adapters sizing surfaces.
pub fn pile_stack_height(cards: usize, compacted: bool) -> i32 {
    if cards == 0 || compacted {
        return CARD_HEIGHT;
    }
    CASCADE_STEP * (cards as i32 - 1) + CARD_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_bounds_are_inclusive_and_disjoint() {
        assert_eq!(column_at(COLUMN_LEFT_MARGIN), Some(0));
        assert_eq!(column_at(COLUMN_LEFT_MARGIN + CARD_WIDTH), Some(0));
        // The gap between two columns belongs to neither.
        assert_eq!(column_at(COLUMN_LEFT_MARGIN + CARD_WIDTH + 1), None);
        assert_eq!(column_at(COLUMN_LEFT_MARGIN + COLUMN_OFFSET - 1), None);
        assert_eq!(column_at(COLUMN_LEFT_MARGIN + COLUMN_OFFSET), Some(1));

        let (left, right) = column_bounds(9);
        assert_eq!(column_at(left), Some(9));
        assert_eq!(column_at(right), Some(9));
        assert_eq!(column_at(right + 1), None);
        assert_eq!(column_at(-1), None);
    }

    #[test]
    fn stack_height_tracks_the_cascade() {
        assert_eq!(pile_stack_height(0, false), CARD_HEIGHT);
        assert_eq!(pile_stack_height(1, false), CARD_HEIGHT);
        assert_eq!(pile_stack_height(4, false), CASCADE_STEP * 3 + CARD_HEIGHT);
        assert_eq!(pile_stack_height(13, true), CARD_HEIGHT);
    }
}
