use log::trace;

use crate::board::Board;
use crate::piece::same_color;
use crate::square::Square;

/// Reports whether a bishop standing on `origin` could reach `target`
/// given the current occupancy.
///
/// Answers the line-of-sight question only: it does not check that a
/// bishop (or anything at all) actually stands on `origin`, and it never
/// errors. Callers confirm the occupant before trusting the verdict.
pub fn bishop_can_move(board: &Board, origin: Square, target: Square) -> bool {
    if !origin.on_same_diagonal(target) {
        trace!("{} and {} share no diagonal", origin, target);
        return false;
    }

    if same_color(
        board.piece_at(origin).copied(),
        board.piece_at(target).copied(),
    ) {
        trace!("{} and {} hold same-colored occupants", origin, target);
        return false;
    }

    // Walk all four diagonals outward from the origin. Any occupied
    // square short of the target blocks the move, even on a diagonal
    // that cannot contain the target.
    // TODO: walk only the diagonal that actually points at the target.
    let directions: [fn(Square) -> Option<Square>; 4] = [
        Square::up_right,
        Square::down_right,
        Square::down_left,
        Square::up_left,
    ];

    for step in directions {
        let mut current = step(origin);
        while let Some(square) = current {
            if !board.is_empty(square) && square != target {
                trace!("{} -> {} blocked at {}", origin, target, square);
                return false;
            }
            current = step(square);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, Piece, PieceType};

    fn square(notation: &str) -> Square {
        Square::from_algebraic(notation).unwrap()
    }

    fn board_with(occupants: &[(&str, PieceType, Color)]) -> Board {
        let mut board = Board::new();
        for &(notation, piece_type, color) in occupants {
            board
                .place(Piece::new(piece_type, color), square(notation))
                .unwrap();
        }
        board
    }

    #[test]
    fn capture_along_a_clear_diagonal_is_legal() {
        let board = board_with(&[
            ("d4", PieceType::Bishop, Color::White),
            ("g7", PieceType::Rook, Color::Black),
        ]);

        assert!(bishop_can_move(&board, square("d4"), square("g7")));
    }

    #[test]
    fn move_onto_an_empty_square_is_legal() {
        let board = board_with(&[("d4", PieceType::Bishop, Color::White)]);

        assert!(bishop_can_move(&board, square("d4"), square("g7")));
        assert!(bishop_can_move(&board, square("d4"), square("a1")));
    }

    #[test]
    fn same_colored_target_is_rejected() {
        let board = board_with(&[
            ("d4", PieceType::Bishop, Color::White),
            ("g7", PieceType::Rook, Color::White),
        ]);

        assert!(!bishop_can_move(&board, square("d4"), square("g7")));
    }

    #[test]
    fn blocked_diagonal_is_rejected() {
        let board = board_with(&[
            ("d4", PieceType::Bishop, Color::White),
            ("f6", PieceType::Knight, Color::White),
            ("g7", PieceType::Rook, Color::Black),
        ]);

        assert!(!bishop_can_move(&board, square("d4"), square("g7")));
    }

    #[test]
    fn off_diagonal_target_is_rejected() {
        let board = board_with(&[
            ("d4", PieceType::Bishop, Color::White),
            ("d7", PieceType::Rook, Color::Black),
        ]);

        assert!(!bishop_can_move(&board, square("d4"), square("d7")));
    }

    // The scan walks every diagonal, so a blocker on a diagonal that
    // cannot contain the target still rejects the move.
    #[test]
    fn blocker_on_another_diagonal_rejects() {
        let board = board_with(&[
            ("d4", PieceType::Bishop, Color::White),
            ("b2", PieceType::Pawn, Color::White),
            ("g7", PieceType::Rook, Color::Black),
        ]);

        assert!(!bishop_can_move(&board, square("d4"), square("g7")));
    }

    // origin == target compares the occupant with itself, which the
    // color gate always rejects.
    #[test]
    fn staying_put_is_rejected() {
        let board = board_with(&[("d4", PieceType::Bishop, Color::White)]);

        assert!(!bishop_can_move(&board, square("d4"), square("d4")));
    }

    #[test]
    fn query_between_two_empty_squares_is_rejected() {
        let board = Board::new();

        assert!(!bishop_can_move(&board, square("d4"), square("g7")));
    }

    #[test]
    fn capture_is_legal_from_either_side() {
        let board = board_with(&[
            ("d4", PieceType::Bishop, Color::Black),
            ("g7", PieceType::Rook, Color::White),
        ]);

        assert!(bishop_can_move(&board, square("d4"), square("g7")));
        assert!(bishop_can_move(&board, square("g7"), square("d4")));
    }
}
