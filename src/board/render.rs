use std::fmt;

use super::{Board, Color, PieceKind};

impl Board {
    /// Eight lines of eight characters, rank 8 on top, `.` for empty squares
    /// and a Unicode chess glyph for each piece.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(PieceKind::glyph)
    }

    /// Same grid as [`render`](Self::render) using FEN letters.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        self.render_with(PieceKind::to_fen_char)
    }

    fn render_with(&self, glyph: impl Fn(PieceKind, Color) -> char) -> String {
        let mut cells = ['.'; 64];
        for set in self.piece_sets() {
            for sq in self.occupied_squares(set) {
                cells[sq.display_position()] = glyph(set.kind, set.color);
            }
        }
        cells
            .chunks(8)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_start_ascii() {
        let expected = "rnbqkbnr\n\
                        pppppppp\n\
                        ........\n\
                        ........\n\
                        ........\n\
                        ........\n\
                        PPPPPPPP\n\
                        RNBQKBNR";
        assert_eq!(Board::new().render_ascii(), expected);
    }

    #[test]
    fn test_render_start_glyphs() {
        let rendered = Board::new().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.chars().count() == 8));
        assert_eq!(lines[0], "♖♘♗♕♔♗♘♖");
        assert_eq!(lines[1], "♙♙♙♙♙♙♙♙");
        assert_eq!(lines[6], "♟♟♟♟♟♟♟♟");
        assert_eq!(lines[7], "♜♞♝♛♚♝♞♜");
    }

    #[test]
    fn test_display_matches_render() {
        let board = Board::new();
        assert_eq!(board.to_string(), board.render());
    }

    #[test]
    fn test_render_empty_board() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(board.render(), ["........"; 8].join("\n"));
    }
}
