use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::layout::{
    CARD_HEIGHT, CARD_WIDTH, CASCADE_STEP, COLUMN_LEFT_MARGIN, COLUMN_OFFSET, COMPLETED_FAN_STEP,
    COMPLETED_ROW_X, COMPLETED_ROW_Y, TABLEAU_PILES, TABLEAU_TOP_Y, TOTAL_DECKS,
};
use crate::render::{self, BlitTarget, SpriteRect};

pub const RUN_LENGTH: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }

    pub fn sprite_rect(self) -> SpriteRect {
        render::card_sprite(self)
    }
}

/// An ordered stack of cards, bottom first. Tableau columns, the floating
/// drag selection and retired completed runs are all piles; a retired pile
/// is `compacted` so it renders and hit-tests as a single card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
    compacted: bool,
}

impl Pile {
    pub fn add_card(&mut self, suit: Suit, rank: u8) {
        self.cards.push(Card::new(suit, rank));
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_compacted(&self) -> bool {
        self.compacted
    }

    pub fn compact_pile(&mut self) {
        self.compacted = true;
    }

    pub fn make_last_card_visible(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.face_up = true;
        }
    }

    /// Splices `cards[skip..]` onto `dest`, either appended or prepended.
    /// The suffix moves as a unit; relative order is preserved.
    pub fn move_suffix(&mut self, skip: usize, dest: &mut Pile, at_end: bool) {
        let skip = skip.min(self.cards.len());
        let moved = self.cards.split_off(skip);
        if at_end {
            dest.cards.extend(moved);
        } else {
            dest.cards.splice(0..0, moved);
        }
    }

    /// Accepts `other`'s entire contents onto this pile's end, or rejects
    /// the move leaving both piles untouched.
    ///
    /// The only rejection is a face-up top card whose rank does not continue
    /// down by one onto `other`'s bottom card. A hidden or absent top
    /// accepts anything; tightening that would change game legality.
    pub fn merge_pile(&mut self, other: &mut Pile) -> bool {
        let Some(incoming) = other.cards.first() else {
            return true;
        };
        if let Some(top) = self.cards.last() {
            if top.face_up && top.rank != incoming.rank + 1 {
                return false;
            }
        }
        other.move_suffix(0, self, true);
        true
    }

    /// Scans for a contiguous same-suit run of ranks 13 down to 1 anywhere
    /// in the pile. On a hit the thirteen run cards are excised by position
    /// (cards after the run stay, order kept) and returned as a fresh pile.
    /// At most one run is extracted per call.
    pub fn check_for_completion(&mut self) -> Option<Pile> {
        if self.cards.len() < RUN_LENGTH {
            return None;
        }
        let mut anchor = 0;
        while let Some(found) = self.cards[anchor..].iter().position(|card| card.rank == 13) {
            let start = anchor + found;
            if self.cards.len() - start < RUN_LENGTH {
                return None;
            }
            let candidate = &self.cards[start..start + RUN_LENGTH];
            let suit = candidate[0].suit;
            let complete = candidate
                .iter()
                .enumerate()
                .all(|(step, card)| card.suit == suit && card.rank == 13 - step as u8);
            if complete {
                let cards: Vec<Card> = self.cards.drain(start..start + RUN_LENGTH).collect();
                return Some(Pile {
                    cards,
                    compacted: false,
                });
            }
            // A failed anchor cannot hide another 13 inside its matched
            // prefix, so resuming just past it re-anchors correctly.
            anchor = start + 1;
        }
        None
    }

    /// Resolves `pointer_y` to a card band, scanning from the top card
    /// downward, and lifts that card plus everything above it onto `dest`.
    /// Fails without mutating when the band misses, the card is face down,
    /// or the suffix is not a descending same-suit run.
    pub fn hit_test_and_splice(&mut self, pointer_y: i32, dest: &mut Pile) -> bool {
        if self.cards.is_empty() {
            return false;
        }
        let (step, skip) = self.cascade();
        let mut band_top = TABLEAU_TOP_Y + step * (self.cards.len() - skip - 1) as i32;
        for index in (skip..self.cards.len()).rev() {
            if band_top <= pointer_y && pointer_y <= band_top + CARD_HEIGHT {
                if !self.cards[index].face_up {
                    return false;
                }
                if !is_descending_run(&self.cards[index..]) {
                    return false;
                }
                self.move_suffix(index, dest, false);
                return true;
            }
            band_top -= step;
        }
        false
    }

    pub fn draw_at<T: BlitTarget + ?Sized>(&self, x: i32, start_y: i32, target: &mut T) {
        let (step, skip) = self.cascade();
        let mut y = start_y;
        for card in self.cards.iter().skip(skip) {
            target.blit(
                card.sprite_rect(),
                SpriteRect::new(x, y, CARD_WIDTH, CARD_HEIGHT),
            );
            y += step;
        }
    }

    // A compacted pile collapses to its top card only.
    fn cascade(&self) -> (i32, usize) {
        let skip = if self.compacted {
            self.cards.len().saturating_sub(1)
        } else {
            0
        };
        (CASCADE_STEP, skip)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    piles: [Pile; TABLEAU_PILES],
    floating_pile: Pile,
    previous_pile: Option<usize>,
    completed_piles: Vec<Pile>,
}

impl Board {
    pub fn new_shuffled() -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_seed(rng.gen())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut shoe = eight_deck_shoe();
        let mut rng = StdRng::seed_from_u64(seed);
        shoe.shuffle(&mut rng);

        let mut board = Self {
            piles: std::array::from_fn(|_| Pile::default()),
            floating_pile: Pile::default(),
            previous_pile: None,
            completed_piles: Vec::new(),
        };
        for (index, card) in shoe.into_iter().enumerate() {
            board.piles[index % TABLEAU_PILES].cards.push(card);
        }
        for pile in &mut board.piles {
            pile.make_last_card_visible();
        }
        board
    }

    pub fn tableau(&self) -> &[Pile; TABLEAU_PILES] {
        &self.piles
    }

    pub fn floating_pile(&self) -> &Pile {
        &self.floating_pile
    }

    pub fn completed_piles(&self) -> &[Pile] {
        &self.completed_piles
    }

    pub fn is_dragging(&self) -> bool {
        self.previous_pile.is_some()
    }

    /// Lifts a run from the column under the pointer onto the floating
    /// pile. Returns whether a grab occurred; a grab while a drag is
    /// already in progress is refused.
    pub fn try_grab_from_pile(&mut self, pointer_x: i32, pointer_y: i32) -> bool {
        if !self.floating_pile.is_empty() {
            return false;
        }
        let Some(column) = crate::layout::column_at(pointer_x) else {
            return false;
        };
        let grabbed = self.piles[column].hit_test_and_splice(pointer_y, &mut self.floating_pile);
        if grabbed {
            self.previous_pile = Some(column);
        }
        grabbed
    }

    /// Settles an in-progress drag: commit onto the column under the
    /// pointer if it accepts the merge, otherwise roll the selection back
    /// onto its source pile. Returns `false` only when nothing was
    /// floating; any settled drag reports `true` so the caller redraws.
    pub fn drop_to_pile_or_roll_back(&mut self, pointer_x: i32, _pointer_y: i32) -> bool {
        if self.floating_pile.is_empty() {
            return false;
        }
        if !self.try_drop(pointer_x) {
            self.roll_back();
        }
        true
    }

    pub fn draw<T: BlitTarget + ?Sized>(&self, pointer_x: i32, pointer_y: i32, target: &mut T) {
        let mut x = COLUMN_LEFT_MARGIN;
        for pile in &self.piles {
            pile.draw_at(x, TABLEAU_TOP_Y, target);
            x += COLUMN_OFFSET;
        }
        // A single floating card centers under the pointer; a longer
        // selection hangs from it.
        let y_offset = if self.floating_pile.len() > 1 {
            0
        } else {
            CARD_HEIGHT / 2
        };
        self.floating_pile
            .draw_at(pointer_x - CARD_WIDTH / 2, pointer_y - y_offset, target);
        let mut fan_x = COMPLETED_ROW_X;
        for pile in &self.completed_piles {
            pile.draw_at(fan_x, COMPLETED_ROW_Y, target);
            fan_x += COMPLETED_FAN_STEP;
        }
    }

    fn try_drop(&mut self, pointer_x: i32) -> bool {
        let Some(column) = crate::layout::column_at(pointer_x) else {
            return false;
        };
        if !self.piles[column].merge_pile(&mut self.floating_pile) {
            return false;
        }
        if let Some(source) = self.previous_pile.take() {
            self.piles[source].make_last_card_visible();
        }
        if let Some(mut run) = self.piles[column].check_for_completion() {
            run.compact_pile();
            self.completed_piles.push(run);
            self.piles[column].make_last_card_visible();
        }
        true
    }

    // Rollback splices the selection straight back onto the pile it was
    // lifted from, bypassing the merge legality check: the move cannot
    // fail and restores the pre-grab state exactly.
    fn roll_back(&mut self) {
        if let Some(source) = self.previous_pile.take() {
            self.floating_pile
                .move_suffix(0, &mut self.piles[source], true);
        }
    }
}

fn is_descending_run(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[0].suit == pair[1].suit && pair[0].rank == pair[1].rank + 1)
}

// Two full rank sets per suit: decks 0-1 are clubs, 2-3 diamonds, and so
// on, for 104 cards total.
fn eight_deck_shoe() -> Vec<Card> {
    let mut shoe = Vec::with_capacity(TOTAL_DECKS * 13);
    for deck in 0..TOTAL_DECKS {
        let suit = Suit::ALL[(deck / 2) % Suit::ALL.len()];
        for rank in 1..=13 {
            shoe.push(Card::new(suit, rank));
        }
    }
    shoe
}

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}
