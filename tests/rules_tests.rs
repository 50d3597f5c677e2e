//! Integration tests for the rules core through the public API
//!
//! Walks the host-facing flow: place pieces, query destinations on a hover,
//! hand the result to the highlighting layer.

use std::collections::BTreeSet;

use tilechess::game::{Highlight, Offset};
use tilechess::rendering::{
    apply_move_hints, clear_move_hints, highlighted, hovered_square, set_hover,
};
use tilechess::{valid_moves, Board, GameError, Piece, PieceColor, PieceType, Square};

fn squares(coords: &[(i32, i32)]) -> BTreeSet<Square> {
    coords
        .iter()
        .map(|&(x, y)| Square::new(x, y).unwrap())
        .collect()
}

#[test]
fn test_placement_round_trip() {
    //! The placed piece points at its tile and the tile holds the piece

    let mut board = Board::new();
    board.place(Piece::pawn(PieceColor::Black), 6, 6).unwrap();

    let tile = board.get(6, 6).unwrap();
    let piece = tile.piece().unwrap();
    assert!(tile.is_occupied());
    assert_eq!(piece.current_tile(), Some(tile.square()));
}

#[test]
fn test_white_pawn_scenarios() {
    let board = Board::with_pieces(&[(PieceType::Pawn, PieceColor::White, (3, 1))]).unwrap();
    let pawn = board.get(3, 1).unwrap().piece().unwrap();
    let set = valid_moves(pawn, &board).unwrap();
    assert_eq!(set.moves, squares(&[(3, 2), (3, 3)]));
    assert!(set.attacks.is_empty());

    let mut board = Board::new();
    board.place(Piece::pawn(PieceColor::White).moved(), 3, 1).unwrap();
    let pawn = board.get(3, 1).unwrap().piece().unwrap();
    assert_eq!(valid_moves(pawn, &board).unwrap().moves, squares(&[(3, 2)]));
}

#[test]
fn test_white_pawn_attacks_regardless_of_blocker() {
    for blocked in [false, true] {
        let mut board = Board::with_pieces(&[
            (PieceType::Pawn, PieceColor::White, (3, 1)),
            (PieceType::Knight, PieceColor::Black, (2, 2)),
            (PieceType::Bishop, PieceColor::Black, (4, 2)),
        ])
        .unwrap();
        if blocked {
            board.place(Piece::pawn(PieceColor::Black), 3, 2).unwrap();
        }
        let set = board.valid_moves_at(3, 1).unwrap();
        assert_eq!(set.attacks, squares(&[(2, 2), (4, 2)]), "blocked: {blocked}");
    }
}

#[test]
fn test_black_pawn_first_move() {
    let board = Board::with_pieces(&[(PieceType::Pawn, PieceColor::Black, (3, 6))]).unwrap();
    let set = board.valid_moves_at(3, 6).unwrap();
    assert_eq!(set.moves, squares(&[(3, 5), (3, 4)]));
}

#[test]
fn test_edge_pawns_never_leave_the_board() {
    //! Pawns on files 0 and 7 with enemies everywhere in reach

    for color in [PieceColor::White, PieceColor::Black] {
        for x in [0, 7] {
            for y in 0..8 {
                let mut board = Board::new();
                board.place(Piece::pawn(color), x, y).unwrap();
                for dx in [-1, 1] {
                    let _ = board.place(Piece::pawn(color.opponent()), x + dx, y + color.forward() as i32);
                }
                let set = board.valid_moves_at(x, y).unwrap();
                for square in set.moves.iter().chain(set.attacks.iter()) {
                    assert!(Square::in_bounds(square.x() as i32, square.y() as i32));
                    assert!((square.x() as i32 - x).abs() <= 1);
                }
                if y + (color.forward() as i32) >= 0 && y + (color.forward() as i32) < 8 {
                    assert_eq!(set.attacks.len(), 1, "{color} pawn at ({x}, {y})");
                }
            }
        }
    }
}

#[test]
fn test_unplaced_piece_errors() {
    let board = Board::new();
    assert_eq!(
        valid_moves(&Piece::pawn(PieceColor::White), &board).unwrap_err(),
        GameError::MissingCurrentTile
    );
}

#[test]
fn test_offsets_are_board_independent() {
    let pawn = Piece::pawn(PieceColor::Black);
    assert_eq!(pawn.attack_offsets(), vec![Offset::new(-1, -1), Offset::new(1, -1)]);
}

#[test]
fn test_hover_query_feeds_highlights() {
    let mut board = Board::standard();
    board.place(Piece::pawn(PieceColor::Black), 5, 2).unwrap();

    set_hover(&mut board, Some(Square::new(4, 2).unwrap()));
    let set = board.valid_moves_at(4, 1).unwrap();
    apply_move_hints(&mut board, &set);

    assert_eq!(highlighted(&board, Highlight::Move), vec![
        Square::new(4, 2).unwrap(),
        Square::new(4, 3).unwrap(),
    ]);
    assert_eq!(highlighted(&board, Highlight::Attack), vec![Square::new(5, 2).unwrap()]);

    clear_move_hints(&mut board);
    assert!(highlighted(&board, Highlight::Move).is_empty());
    assert_eq!(hovered_square(&board), Some(Square::new(4, 2).unwrap()));
}
