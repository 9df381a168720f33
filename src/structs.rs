use crate::error::ParseKindError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    #[default]
    I,
    O,
    T,
    L,
}

impl PieceKind {
    pub fn all() -> &'static [PieceKind] {
        use PieceKind::*;
        &[I, O, T, L]
    }

    pub fn glyph(self) -> char {
        use PieceKind::*;
        match self {
            I => 'I',
            O => 'O',
            T => 'T',
            L => 'L',
        }
    }

    /// Inverse of `glyph()`. Lowercase glyphs are not accepted.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        use PieceKind::*;
        match glyph {
            'I' => Some(I),
            'O' => Some(O),
            'T' => Some(T),
            'L' => Some(L),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for PieceKind {
    type Err = ParseKindError;

    /// Accepts exactly one glyph, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_glyph(c),
            _ => None,
        };
        kind.ok_or_else(|| ParseKindError {
            input: trimmed.to_string(),
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32, // Unique within a run, assigned by IdCounter.
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind: {}, ID: {}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_roundtrip_for_every_kind() {
        for &kind in PieceKind::all() {
            assert_eq!(PieceKind::from_glyph(kind.glyph()), Some(kind));
        }
    }

    #[test]
    fn parse_accepts_single_uppercase_glyph() {
        assert_eq!("T".parse::<PieceKind>(), Ok(PieceKind::T));
        assert_eq!("  L \n".parse::<PieceKind>(), Ok(PieceKind::L));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for input in ["", " ", "i", "S", "IO", "1", "Z\n"] {
            let err = input.parse::<PieceKind>().unwrap_err();
            assert_eq!(err.input, input.trim());
        }
    }

    #[test]
    fn pieces_compare_by_value() {
        assert_eq!(Piece::new(PieceKind::O, 2), Piece::new(PieceKind::O, 2));
        assert_ne!(Piece::new(PieceKind::O, 2), Piece::new(PieceKind::O, 3));
        assert_ne!(Piece::new(PieceKind::O, 2), Piece::new(PieceKind::I, 2));
    }

    #[test]
    fn piece_display() {
        assert_eq!(Piece::new(PieceKind::I, 7).to_string(), "Kind: I, ID: 7");
    }
}
