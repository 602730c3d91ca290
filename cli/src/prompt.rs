use std::io::{self, BufRead};

use anyhow::{Context, bail};
use minado_core::{Coord, Coord2, GameConfig, MAX_HEIGHT, MAX_WIDTH, MIN_SIDE, TileCount};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Show,
    Mark,
    Restart,
    Quit,
}

fn read_trimmed() -> anyhow::Result<String> {
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading player input")?;
    if read == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

/// Parses a line of decimal digits. Anything else, including an empty line
/// or a sign, is `None` and makes the caller re-prompt.
fn parse_number(input: &str) -> Option<u32> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

fn number_in_range(label: &str, min: u32, max: u32) -> anyhow::Result<u32> {
    loop {
        println!("{label} ({min}-{max})");
        if let Some(number) = parse_number(&read_trimmed()?) {
            if (min..=max).contains(&number) {
                return Ok(number);
            }
        }
    }
}

/// Startup sequence: prompts for width, height, and mine count, skipping
/// whatever the command line already provided.
pub fn game_config(
    width: Option<Coord>,
    height: Option<Coord>,
    mines: Option<TileCount>,
) -> anyhow::Result<GameConfig> {
    println!("Welcome to Minesweeper!");
    println!();
    println!("Choose board dimensions");

    let width = match width {
        Some(width) => width,
        None => number_in_range("Width", MIN_SIDE.into(), MAX_WIDTH.into())? as Coord,
    };
    let height = match height {
        Some(height) => height,
        None => number_in_range("Height", MIN_SIDE.into(), MAX_HEIGHT.into())? as Coord,
    };
    let max_mines = u32::from(width) * u32::from(height) - 1;
    let mines = match mines {
        Some(mines) => mines,
        None => number_in_range("Number of mines", 1, max_mines)? as TileCount,
    };

    Ok(GameConfig::new(width, height, mines)?)
}

/// Reads the per-turn action; unknown input returns `None` so the caller can
/// re-render and ask again.
pub fn action() -> anyhow::Result<Option<Action>> {
    let input = read_trimmed()?.to_lowercase();
    Ok(match input.chars().next() {
        Some('s') => Some(Action::Show),
        Some('m') => Some(Action::Mark),
        Some('r') => Some(Action::Restart),
        Some('q') => Some(Action::Quit),
        _ => None,
    })
}

/// Prompts for 1-based x and y, re-prompting until both are in range.
pub fn coords(width: Coord, height: Coord) -> anyhow::Result<Coord2> {
    let x = number_in_range("X Location", 1, width.into())?;
    let y = number_in_range("Y Location", 1, height.into())?;
    Ok((x as Coord, y as Coord))
}

pub fn play_again() -> anyhow::Result<bool> {
    println!();
    println!("Play again? Y/N");
    loop {
        match read_trimmed()?.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal_numbers() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("007"), Some(7));
        assert_eq!(parse_number("0"), Some(0));
    }

    #[test]
    fn rejects_anything_that_is_not_all_digits() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number("+3"), None);
        assert_eq!(parse_number("12a"), None);
        assert_eq!(parse_number("4.5"), None);
        assert_eq!(parse_number("ten"), None);
    }
}
