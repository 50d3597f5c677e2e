//! Move and attack destination generation
//!
//! Turns a piece's offset lists into concrete destinations on a board. The
//! two lists are kept strictly apart:
//!
//! - **Move offsets** land only on empty squares
//! - **Attack offsets** land only on squares held by the other colour
//!
//! A pawn therefore never captures straight ahead and never steps diagonally
//! onto an empty square. Destinations that fall off the board are dropped
//! silently; the result never contains an out-of-range square.
//!
//! Generation is a read-only query. Nothing on the board or the piece is
//! mutated, so the host can call it on every hover event.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::board::Board;
use crate::game::components::Piece;
use crate::game::error::{GameError, GameResult};
use crate::game::types::{Offset, Square};

/// Whether a multi-square move needs the squares it passes over to be empty
///
/// Only the pawn double step is affected today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoubleStepPolicy {
    /// Every square between origin and destination must be empty
    #[default]
    RequireClearPath,
    /// Only the destination is checked; the piece jumps over blockers
    IgnoreIntermediate,
}

/// Destinations for one piece, split by kind
///
/// Sets are ordered for deterministic output only; the order carries no
/// meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    /// Empty squares the piece may move to
    pub moves: BTreeSet<Square>,
    /// Enemy-occupied squares the piece may capture on
    pub attacks: BTreeSet<Square>,
}

impl MoveSet {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.attacks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len() + self.attacks.len()
    }

    /// Returns true if `square` is either a move or an attack destination
    pub fn contains(&self, square: Square) -> bool {
        self.moves.contains(&square) || self.attacks.contains(&square)
    }

    /// Move destinations as `(x, y)` tuples
    pub fn move_coords(&self) -> Vec<(u8, u8)> {
        self.moves.iter().map(|s| s.coords()).collect()
    }

    /// Attack destinations as `(x, y)` tuples
    pub fn attack_coords(&self) -> Vec<(u8, u8)> {
        self.attacks.iter().map(|s| s.coords()).collect()
    }
}

/// Valid destinations for `piece` under the default [`DoubleStepPolicy`]
///
/// Fails with [`GameError::MissingCurrentTile`] if the piece was never placed
/// and with [`GameError::StalePiece`] if `piece` is an outdated copy of the
/// occupant of its square (e.g. taken before the occupant was marked moved).
pub fn valid_moves(piece: &Piece, board: &Board) -> GameResult<MoveSet> {
    valid_moves_with(piece, board, DoubleStepPolicy::default())
}

pub fn valid_moves_with(
    piece: &Piece,
    board: &Board,
    policy: DoubleStepPolicy,
) -> GameResult<MoveSet> {
    let from = piece.current_tile().ok_or(GameError::MissingCurrentTile)?;
    if board.piece_at(from) != Some(piece) {
        return Err(GameError::StalePiece {
            x: from.x(),
            y: from.y(),
        });
    }
    let mut set = MoveSet::default();

    for offset in piece.move_offsets() {
        let Some(to) = from.offset(offset) else {
            continue;
        };
        if board.is_occupied(to) {
            continue;
        }
        if policy == DoubleStepPolicy::RequireClearPath && !is_path_clear(board, from, offset) {
            continue;
        }
        set.moves.insert(to);
    }

    for offset in piece.attack_offsets() {
        let Some(to) = from.offset(offset) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if target.color != piece.color {
                set.attacks.insert(to);
            }
        }
    }

    trace!(
        "[MOVES] {} {:?} at {}: {} moves, {} attacks",
        piece.color,
        piece.piece_type,
        from,
        set.moves.len(),
        set.attacks.len()
    );

    Ok(set)
}

/// Check the squares strictly between `from` and `from + offset`
///
/// Offsets that are not straight lines (knight-style jumps) have no path.
fn is_path_clear(board: &Board, from: Square, offset: Offset) -> bool {
    let Some(length) = offset.line_length() else {
        return true;
    };
    let step = offset.unit();
    (1..length as i8).all(|i| {
        from.offset(step.scaled(i))
            .is_some_and(|square| !board.is_occupied(square))
    })
}
