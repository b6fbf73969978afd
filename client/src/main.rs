mod command;
mod config;
mod renderer;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{
    MoveApplier, OutcomeNotifier, PlayerSlot, TicTacToeSession, validate_player_name,
};
use common::{log, logger};

use command::{Command, HELP, parse_command};
use config::{Config, get_config_manager};
use renderer::TerminalRenderer;

#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe", about = "Tic-tac-toe in the terminal, optionally against the computer")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the binary
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    player_one: Option<String>,
    #[arg(long)]
    player_two: Option<String>,
    /// Two humans share the keyboard; no computer opponent
    #[arg(long)]
    two_players: bool,
    /// Minimax depth for the computer; 0 plays randomly
    #[arg(long)]
    depth: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    log_prefix: Option<String>,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(name) = &args.player_one {
        config.players.player_one = name.clone();
    }
    if let Some(name) = &args.player_two {
        config.players.player_two = name.clone();
    }
    if args.two_players {
        config.opponent.automated = false;
    }
    if let Some(depth) = args.depth {
        config.opponent.search_depth = depth;
    }
    if args.verbose {
        config.logging.verbose = true;
    }
    if let Some(prefix) = &args.log_prefix {
        config.logging.prefix = Some(prefix.clone());
    }
}

fn print_prompt<N: OutcomeNotifier>(session: &TicTacToeSession<N>) -> io::Result<()> {
    let state = session.game_state();
    let mut stdout = io::stdout();
    if state.status().is_over() {
        write!(stdout, "Type 'new' to play again or 'quit' to leave > ")?;
    } else {
        let player = state.current_player();
        write!(stdout, "{} ({}) > ", player.name(), player.mark())?;
    }
    stdout.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config()?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    if config.logging.verbose {
        logger::init_logger(config.logging.prefix.clone());
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings");
    }

    let settings = config.session_settings();
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let mut session = TicTacToeSession::new(&settings, rng, TerminalRenderer::new(io::stdout()));

    println!("{}", HELP);
    let snapshot = session.snapshot();
    session.notifier_mut().show(&snapshot);
    print_prompt(&session)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Place(index)) => {
                if let Err(e) = session.apply_player_move(index) {
                    println!("{}", e);
                }
            }
            Ok(Command::NewGame) => {
                let state = session.game_state();
                let player_one = state.player(PlayerSlot::One).name().to_string();
                let player_two = state.player(PlayerSlot::Two).name().to_string();
                session.new_game(player_one, player_two, settings.automated_opponent);
                let snapshot = session.snapshot();
                session.notifier_mut().show(&snapshot);
            }
            Ok(Command::Rename(slot, name)) => match validate_player_name(&name) {
                Ok(()) => {
                    println!("{} is now {}", slot.mark(), name.trim());
                    session.rename_player(slot, name.trim());
                }
                Err(e) => println!("{}", e),
            },
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
        print_prompt(&session)?;
    }

    log!("Session ended");
    Ok(())
}
