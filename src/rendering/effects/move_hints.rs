//! Move hints
//!
//! Marks the destinations of the selected piece on the board's tiles:
//! empty destinations as [`Highlight::Move`], captures as
//! [`Highlight::Attack`]. The hovered tile is tracked by the separate
//! [`Tile::hovered`](crate::game::components::Tile::hovered) flag, so hover
//! and hints never overwrite each other.

use tracing::debug;

use crate::game::components::Highlight;
use crate::game::rules::{Board, MoveSet};
use crate::game::types::Square;

/// Remove all move and attack marks, leaving any hover mark in place
pub fn clear_move_hints(board: &mut Board) {
    for tile in board.tiles_mut() {
        tile.highlight = Highlight::None;
    }
}

/// Replace the current hints with the destinations in `set`
pub fn apply_move_hints(board: &mut Board, set: &MoveSet) {
    clear_move_hints(board);
    for &square in &set.moves {
        board.tile_mut(square).highlight = Highlight::Move;
    }
    for &square in &set.attacks {
        board.tile_mut(square).highlight = Highlight::Attack;
    }
    debug!(
        "[MOVE_HINTS] Highlighted {} moves and {} attacks",
        set.moves.len(),
        set.attacks.len()
    );
}

/// Show hints for the current selection when hints are enabled
///
/// Existing hints are always removed first, so deselecting or disabling hints
/// leaves a clean board.
pub fn update_move_hints(board: &mut Board, show_hints: bool, selection: Option<&MoveSet>) {
    match selection {
        Some(set) if show_hints => apply_move_hints(board, set),
        _ => clear_move_hints(board),
    }
}

/// Move the hover mark to `square`, or remove it with `None`
pub fn set_hover(board: &mut Board, square: Option<Square>) {
    for tile in board.tiles_mut() {
        tile.hovered = Some(tile.square()) == square;
    }
}

/// The hovered square, if any
pub fn hovered_square(board: &Board) -> Option<Square> {
    board
        .tiles()
        .find(|tile| tile.hovered)
        .map(|tile| tile.square())
}

/// Squares currently carrying `highlight`, in board order
pub fn highlighted(board: &Board, highlight: Highlight) -> Vec<Square> {
    board
        .tiles()
        .filter(|tile| tile.highlight == highlight)
        .map(|tile| tile.square())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{PieceColor, PieceType};

    fn sq(x: i32, y: i32) -> Square {
        Square::new(x, y).unwrap()
    }

    fn selected_pawn_board() -> (Board, MoveSet) {
        let board = Board::with_pieces(&[
            (PieceType::Pawn, PieceColor::White, (3, 1)),
            (PieceType::Pawn, PieceColor::Black, (4, 2)),
        ])
        .unwrap();
        let set = board.valid_moves_at(3, 1).unwrap();
        (board, set)
    }

    #[test]
    fn test_apply_marks_moves_and_attacks() {
        let (mut board, set) = selected_pawn_board();
        apply_move_hints(&mut board, &set);

        assert_eq!(highlighted(&board, Highlight::Move), vec![sq(3, 2), sq(3, 3)]);
        assert_eq!(highlighted(&board, Highlight::Attack), vec![sq(4, 2)]);
    }

    #[test]
    fn test_apply_replaces_previous_hints() {
        let (mut board, set) = selected_pawn_board();
        apply_move_hints(&mut board, &set);
        apply_move_hints(&mut board, &MoveSet::default());

        assert!(highlighted(&board, Highlight::Move).is_empty());
        assert!(highlighted(&board, Highlight::Attack).is_empty());
    }

    #[test]
    fn test_update_respects_show_hints() {
        let (mut board, set) = selected_pawn_board();
        update_move_hints(&mut board, false, Some(&set));
        assert!(highlighted(&board, Highlight::Move).is_empty());

        update_move_hints(&mut board, true, Some(&set));
        assert_eq!(highlighted(&board, Highlight::Move).len(), 2);

        update_move_hints(&mut board, true, None);
        assert!(highlighted(&board, Highlight::Move).is_empty());
    }

    #[test]
    fn test_hover_moves_and_clears() {
        let (mut board, _) = selected_pawn_board();
        set_hover(&mut board, Some(sq(0, 0)));
        set_hover(&mut board, Some(sq(7, 7)));
        assert_eq!(hovered_square(&board), Some(sq(7, 7)));
        assert_eq!(board.tiles().filter(|tile| tile.hovered).count(), 1);

        set_hover(&mut board, None);
        assert_eq!(hovered_square(&board), None);
    }

    #[test]
    fn test_hover_on_destination_survives_hint_clearing() {
        //! Hovering a square before it becomes a move destination keeps the
        //! hover through applying and clearing the hints

        let (mut board, set) = selected_pawn_board();
        set_hover(&mut board, Some(sq(3, 2)));

        apply_move_hints(&mut board, &set);
        assert_eq!(board.tile(sq(3, 2)).highlight, Highlight::Move);
        assert_eq!(hovered_square(&board), Some(sq(3, 2)));

        clear_move_hints(&mut board);
        assert_eq!(board.tile(sq(3, 2)).highlight, Highlight::None);
        assert_eq!(hovered_square(&board), Some(sq(3, 2)));
    }

    #[test]
    fn test_hover_onto_marked_tile_keeps_both() {
        let (mut board, set) = selected_pawn_board();
        apply_move_hints(&mut board, &set);
        set_hover(&mut board, Some(sq(4, 2)));

        assert_eq!(board.tile(sq(4, 2)).highlight, Highlight::Attack);
        assert_eq!(hovered_square(&board), Some(sq(4, 2)));
    }
}
