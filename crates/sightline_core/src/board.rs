use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::Error;
use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;

/// A board as a sparse map from occupied squares to pieces.
///
/// Empty squares are absent keys, never a stored "no piece" marker. Every
/// key the map holds is a valid square; the mutators validate their inputs
/// before touching it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pieces: HashMap<Square, Piece>,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            pieces: HashMap::new(),
        }
    }

    /// A fresh board with the standard starting arrangement.
    pub fn starting_position() -> Self {
        let mut board = Self::new();

        for file in 1..=8 {
            board.pieces.insert(
                Square { file, rank: 2 },
                Piece::new(PieceType::Pawn, Color::White),
            );
            board.pieces.insert(
                Square { file, rank: 7 },
                Piece::new(PieceType::Pawn, Color::Black),
            );
        }

        let piece_order = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for (file, &piece_type) in (1..=8).zip(piece_order.iter()) {
            board.pieces.insert(
                Square { file, rank: 1 },
                Piece::new(piece_type, Color::White),
            );
            board.pieces.insert(
                Square { file, rank: 8 },
                Piece::new(piece_type, Color::Black),
            );
        }

        board
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    /// Whether no piece stands on `square`. Out-of-range squares hold no
    /// piece and so also report empty.
    pub fn is_empty(&self, square: Square) -> bool {
        !self.pieces.contains_key(&square)
    }

    /// Puts `piece` on `square`, overwriting any previous occupant.
    pub fn place(&mut self, piece: Piece, square: Square) -> Result<(), Error> {
        if !square.is_valid() {
            return Err(Error::InvalidSquare(square));
        }

        debug!("placing {} on {}", piece.glyph(), square);
        self.pieces.insert(square, piece);
        Ok(())
    }

    /// Removes the piece on `square`. Clearing an empty square is a no-op.
    pub fn clear(&mut self, square: Square) -> Result<(), Error> {
        if !square.is_valid() {
            return Err(Error::InvalidSquare(square));
        }

        self.pieces.remove(&square);
        Ok(())
    }

    /// Relocates the occupant of `origin` to `target`.
    ///
    /// A raw relocation primitive: no movement, capture, or check rules
    /// apply, and whatever stands on `target` is overwritten.
    pub fn move_piece(&mut self, origin: Square, target: Square) -> Result<(), Error> {
        if !origin.is_valid() {
            return Err(Error::InvalidOrigin(origin));
        }
        if !target.is_valid() {
            return Err(Error::InvalidTarget(target));
        }

        let piece = self
            .pieces
            .remove(&origin)
            .ok_or(Error::EmptyOrigin(origin))?;

        debug!("moving {} from {} to {}", piece.glyph(), origin, target);
        self.pieces.insert(target, piece);
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ╔═══╤═══╤═══╤═══╤═══╤═══╤═══╤═══╗")?;

        for rank in (1..=8).rev() {
            write!(f, "{} ║", rank)?;
            for file in 1..=8 {
                let glyph = self
                    .piece_at(Square { file, rank })
                    .map_or(' ', |piece| piece.glyph());
                write!(f, " {} ", glyph)?;
                if file < 8 {
                    write!(f, "│")?;
                }
            }
            writeln!(f, "║")?;

            if rank > 1 {
                writeln!(f, "  ╟───┼───┼───┼───┼───┼───┼───┼───╢")?;
            }
        }

        writeln!(f, "  ╚═══╧═══╧═══╧═══╧═══╧═══╧═══╧═══╝")?;
        writeln!(f, "    a   b   c   d   e   f   g   h  ")
    }
}
