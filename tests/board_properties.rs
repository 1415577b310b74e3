use std::collections::HashMap;

use proptest::prelude::*;

use arachne::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, TOTAL_DECKS};
use arachne::{Board, Suit, RUN_LENGTH};

fn card_count(board: &Board) -> usize {
    let tableau: usize = board.tableau().iter().map(|pile| pile.len()).sum();
    let retired: usize = board.completed_piles().iter().map(|pile| pile.len()).sum();
    tableau + board.floating_pile().len() + retired
}

proptest! {
    #[test]
    fn every_deal_is_a_full_eight_deck_shoe(seed in any::<u64>()) {
        let board = Board::new_with_seed(seed);

        let mut counts: HashMap<(Suit, u8), usize> = HashMap::new();
        for pile in board.tableau() {
            prop_assert!(!pile.is_empty());
            let top = pile.len() - 1;
            for (index, card) in pile.cards().iter().enumerate() {
                prop_assert_eq!(card.face_up, index == top);
                *counts.entry((card.suit, card.rank)).or_insert(0) += 1;
            }
        }
        prop_assert_eq!(card_count(&board), TOTAL_DECKS * 13);
        for suit in Suit::ALL {
            for rank in 1..=13u8 {
                prop_assert_eq!(counts.get(&(suit, rank)), Some(&8));
            }
        }
    }

    #[test]
    fn a_grab_rolled_back_off_board_restores_the_deal(
        seed in any::<u64>(),
        x in -50..CANVAS_WIDTH + 50,
        y in -50..CANVAS_HEIGHT + 50,
    ) {
        let mut board = Board::new_with_seed(seed);
        let before = board.clone();

        if board.try_grab_from_pile(x, y) {
            prop_assert!(board.is_dragging());
            prop_assert!(!board.floating_pile().is_empty());
            prop_assert!(board.drop_to_pile_or_roll_back(-100, -100));
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn pointer_interactions_conserve_the_shoe(
        seed in any::<u64>(),
        moves in prop::collection::vec(
            (0..CANVAS_WIDTH, 0..CANVAS_HEIGHT, 0..CANVAS_WIDTH, 0..CANVAS_HEIGHT),
            1..25,
        ),
    ) {
        let mut board = Board::new_with_seed(seed);

        for (grab_x, grab_y, drop_x, drop_y) in moves {
            let grabbed = board.try_grab_from_pile(grab_x, grab_y);
            prop_assert_eq!(board.is_dragging(), grabbed);
            let settled = board.drop_to_pile_or_roll_back(drop_x, drop_y);
            prop_assert_eq!(settled, grabbed);

            // Between interactions the drag is always settled and every
            // card is accounted for.
            prop_assert!(!board.is_dragging());
            prop_assert!(board.floating_pile().is_empty());
            prop_assert_eq!(card_count(&board), TOTAL_DECKS * 13);
            for retired in board.completed_piles() {
                prop_assert_eq!(retired.len(), RUN_LENGTH);
                prop_assert!(retired.is_compacted());
            }
        }
    }
}
