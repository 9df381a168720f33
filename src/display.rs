use crate::queue::PieceQueue;

const BOX_TOP: &str = "╔════════════════════════════════════╗";
const BOX_MID: &str = "╠════════════════════════════════════╣";
const BOX_BOTTOM: &str = "╚════════════════════════════════════╝";
const ROW_SEPARATOR: &str = "|------------------------------------|";
const INNER_WIDTH: usize = 36;

fn banner_line(text: &str) -> String {
    format!("║{text:<INNER_WIDTH$}║\n")
}

fn row_line(text: &str) -> String {
    format!("|{text:<INNER_WIDTH$}|\n")
}

fn banner(title: &str) -> String {
    let mut out = String::new();
    out.push_str(BOX_TOP);
    out.push('\n');
    out.push_str(&banner_line(title));
    out.push_str(BOX_BOTTOM);
    out.push('\n');
    out
}

pub fn render_welcome() -> String {
    banner("   WELCOME TO TETRIS STACK!")
}

pub fn render_goodbye() -> String {
    banner("    Thanks for playing! Bye!")
}

pub fn render_queue(queue: &PieceQueue) -> String {
    let mut out = String::from("\n");
    out.push_str(&banner("     TETRIS STACK PIECE QUEUE"));

    if queue.is_empty() {
        out.push_str(&row_line(" Queue is empty! No pieces."));
    } else {
        out.push_str(&row_line(&format!(
            " Total pieces: {}/{}",
            queue.len(),
            queue.capacity()
        )));
        out.push_str(ROW_SEPARATOR);
        out.push('\n');
        for (i, piece) in queue.snapshot().enumerate() {
            let mut row = format!(" [{}] Kind: {} | ID: {:>2}", i + 1, piece.kind, piece.id);
            if i == 0 {
                row.push_str("  <- NEXT UP");
            }
            out.push_str(&row_line(&row));
        }
    }
    out.push_str(BOX_BOTTOM);
    out.push('\n');
    out
}

pub fn render_menu() -> String {
    let mut out = String::from("\n");
    out.push_str(BOX_TOP);
    out.push('\n');
    out.push_str(&banner_line("        MENU - TETRIS QUEUE"));
    out.push_str(BOX_MID);
    out.push('\n');
    for option in [
        " 1. View queue",
        " 2. Play a piece (remove)",
        " 3. Add random piece",
        " 4. Add piece manually",
        " 5. Exit",
    ] {
        out.push_str(&banner_line(option));
    }
    out.push_str(BOX_BOTTOM);
    out.push('\n');
    out.push_str("Choose an option: ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::{Piece, PieceKind};

    #[test]
    fn empty_queue_box() {
        let text = render_queue(&PieceQueue::new());
        assert!(text.contains("TETRIS STACK PIECE QUEUE"));
        assert!(text.contains("| Queue is empty! No pieces."));
        assert!(!text.contains("Total pieces"));
    }

    #[test]
    fn lists_pieces_oldest_first_and_marks_the_front() {
        let mut q = PieceQueue::new();
        q.enqueue(Piece::new(PieceKind::O, 2)).unwrap();
        q.enqueue(Piece::new(PieceKind::L, 14)).unwrap();
        let text = render_queue(&q);

        assert!(text.contains(" Total pieces: 2/10"));
        let first = text.find("[1] Kind: O | ID:  2  <- NEXT UP").unwrap();
        let second = text.find("[2] Kind: L | ID: 14").unwrap();
        assert!(first < second);
        assert_eq!(text.matches("NEXT UP").count(), 1);
    }

    #[test]
    fn rows_share_one_width() {
        let mut q = PieceQueue::new();
        q.enqueue(Piece::new(PieceKind::T, 3)).unwrap();
        q.enqueue(Piece::new(PieceKind::I, 4)).unwrap();
        let text = render_queue(&q);
        let widths: Vec<usize> = text
            .lines()
            .filter(|l| l.starts_with('|'))
            .map(|l| l.chars().count())
            .collect();
        assert_eq!(widths.len(), 4);
        assert!(widths.iter().all(|w| *w == INNER_WIDTH + 2));
    }

    #[test]
    fn menu_lists_five_options_and_prompts() {
        let text = render_menu();
        for n in 1..=5 {
            assert!(text.contains(&format!(" {n}. ")));
        }
        assert!(text.ends_with("Choose an option: "));
    }
}
