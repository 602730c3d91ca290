use minado_core::{Board, Tile};

pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

/// Renders the grid in the classic text format: mod-10 column and row index
/// headers, one character per tile, space-separated.
pub fn board(board: &Board) -> String {
    let width = board.width();
    let height = board.height();
    let mut out = String::with_capacity((width as usize * 2 + 4) * (height as usize + 2));

    out.push_str("   ");
    for x in 1..=width {
        out.push(digit_char(x % 10));
        out.push(' ');
    }
    out.push('\n');
    out.push('\n');

    for y in 1..=height {
        out.push(digit_char(y % 10));
        out.push_str("  ");
        for x in 1..=width {
            out.push(tile_char(board.tile((x, y))));
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

fn digit_char(digit: u8) -> char {
    (b'0' + digit) as char
}

/// Cell alphabet: `M` flagged, `X` hidden, `!` revealed mine, the adjacency
/// digit when nonzero, `-` for a revealed zero tile.
fn tile_char(tile: Tile) -> char {
    if tile.is_flagged() {
        'M'
    } else if tile.is_hidden() {
        'X'
    } else if tile.has_mine() {
        '!'
    } else if tile.adjacent_mines() > 0 {
        digit_char(tile.adjacent_mines())
    } else {
        '-'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minado_core::{BoardEngine, GameConfig};

    fn engine() -> BoardEngine {
        let config = GameConfig::new(2, 2, 1).unwrap();
        BoardEngine::with_mines(config, &[(2, 2)]).unwrap()
    }

    #[test]
    fn renders_hidden_flagged_and_numbered_tiles() {
        let mut engine = engine();
        engine.toggle_flag((1, 2)).unwrap();
        engine.reveal((1, 1)).unwrap();

        let expected = "   1 2 \n\n1  1 X \n2  M X \n";
        assert_eq!(board(engine.board()), expected);
    }

    #[test]
    fn renders_mines_and_zero_tiles_after_reveal_all() {
        let config = GameConfig::new(3, 2, 1).unwrap();
        let mut engine = BoardEngine::with_mines(config, &[(1, 1)]).unwrap();
        engine.reveal_all();

        let expected = "   1 2 3 \n\n1  ! 1 - \n2  1 1 - \n";
        assert_eq!(board(engine.board()), expected);
    }

    #[test]
    fn headers_wrap_past_ten() {
        let config = GameConfig::new(12, 2, 1).unwrap();
        let engine = BoardEngine::with_mines(config, &[(1, 1)]).unwrap();

        let rendered = board(engine.board());
        let header = rendered.lines().next().unwrap();
        assert_eq!(header, "   1 2 3 4 5 6 7 8 9 0 1 2 ");
    }
}
