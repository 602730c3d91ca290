use anyhow::Result;
use clap::Parser;
use minado_core::{BoardEngine, Coord, RevealOutcome, TileCount};
use rand::RngExt;

use prompt::Action;

mod prompt;
mod render;

/// Text-based minesweeper for the terminal.
#[derive(Debug, Parser)]
#[command(name = "minado", version, about)]
struct Cli {
    /// Board width, skipping the startup prompt
    #[arg(long)]
    width: Option<Coord>,

    /// Board height, skipping the startup prompt
    #[arg(long)]
    height: Option<Coord>,

    /// Mine count, skipping the startup prompt
    #[arg(long)]
    mines: Option<TileCount>,

    /// Mine placement seed, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

enum SessionEnd {
    Finished { won: bool },
    Restart,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    loop {
        render::clear_screen();
        let config = prompt::game_config(cli.width, cli.height, cli.mines)?;
        let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("starting session with seed {seed}");
        let mut engine = BoardEngine::new(config, seed);

        match run_session(&mut engine)? {
            SessionEnd::Restart => continue,
            SessionEnd::Quit => break,
            SessionEnd::Finished { won } => {
                render::clear_screen();
                engine.reveal_all();
                print!("{}", render::board(engine.board()));
                println!();
                println!("{}", if won { "You won!" } else { "You lost!" });
                if !prompt::play_again()? {
                    break;
                }
            }
        }
    }

    render::clear_screen();
    Ok(())
}

fn run_session(engine: &mut BoardEngine) -> Result<SessionEnd> {
    loop {
        render::clear_screen();
        print!("{}", render::board(engine.board()));
        println!();
        println!("[S]how, [M]ark, [R]estart, [Q]uit");

        let Some(action) = prompt::action()? else {
            continue;
        };
        match action {
            Action::Show => {
                let coords = prompt::coords(engine.board().width(), engine.board().height())?;
                match engine.reveal(coords)? {
                    RevealOutcome::Won => return Ok(SessionEnd::Finished { won: true }),
                    RevealOutcome::Lost => return Ok(SessionEnd::Finished { won: false }),
                    RevealOutcome::Continue | RevealOutcome::NoOp => {}
                }
            }
            Action::Mark => {
                let coords = prompt::coords(engine.board().width(), engine.board().height())?;
                engine.toggle_flag(coords)?;
            }
            Action::Restart => return Ok(SessionEnd::Restart),
            Action::Quit => return Ok(SessionEnd::Quit),
        }
    }
}
