use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    /// Single-letter display glyph: uppercase for white, lowercase for black.
    pub fn glyph(self) -> char {
        let glyph = match self.piece_type {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        };

        match self.color {
            Color::White => glyph.to_ascii_uppercase(),
            Color::Black => glyph,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        let piece_type = match glyph.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'p' => PieceType::Pawn,
            _ => return None,
        };

        let color = if glyph.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Some(Self { piece_type, color })
    }
}

// Linear piece identifiers: white king = 1 through black pawn = 12.
impl TryFrom<u8> for Piece {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        let color = match value {
            1..=6 => Color::White,
            7..=12 => Color::Black,
            _ => return Err(Error::InvalidPiece(value)),
        };

        let piece_type = match (value - 1) % 6 {
            0 => PieceType::King,
            1 => PieceType::Queen,
            2 => PieceType::Rook,
            3 => PieceType::Bishop,
            4 => PieceType::Knight,
            _ => PieceType::Pawn,
        };

        Ok(Self { piece_type, color })
    }
}

/// Whether two occupants share a color. Two empty squares count as
/// sharing one, so a query between two empty squares reports a match.
pub fn same_color(a: Option<Piece>, b: Option<Piece>) -> bool {
    a.map(|piece| piece.color) == b.map(|piece| piece.color)
}
