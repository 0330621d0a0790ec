mod command_sender;
mod config;
mod constants;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::games::snake::Difficulty;
use common::logger::{self, LogLevel};
use common::{log, log_warn};
use eframe::egui;
use tokio::sync::mpsc;

pub use command_sender::CommandSender;
use config::{get_config_manager, Config};
use constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use offline::game_session_task;
use state::SharedState;
use ui::MenuApp;

#[derive(Parser)]
#[command(name = "extreme_snake")]
struct Args {
    /// Config file, defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Overrides the difficulty stored in the config.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Fixed seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// High score file, overrides the config.
    #[arg(long)]
    scores: Option<String>,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(Some("Client".to_string()), args.log_level);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };
    if let Some(scores) = args.scores {
        config.high_score_file = scores;
    }
    let difficulty = args.difficulty.unwrap_or(config.difficulty);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let config_clone = config.clone();
    let seed = args.seed;

    let game_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log_warn!("Failed to start game runtime: {}", e);
                shared_state_clone.set_error(format!("Failed to start game runtime: {}", e));
                return;
            }
        };
        rt.block_on(game_session_task(shared_state_clone, command_rx, config_clone, seed));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_title("Extreme Snake"),
        ..Default::default()
    };

    log!("Starting Extreme Snake");
    let command_sender = CommandSender::new(command_tx);
    eframe::run_native(
        "Extreme Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MenuApp::new(
                shared_state,
                command_sender,
                config_manager,
                config,
                difficulty,
            )))
        }),
    )?;

    if game_thread.join().is_err() {
        log_warn!("Game thread panicked");
    }
    log!("Extreme Snake shut down");
    Ok(())
}
