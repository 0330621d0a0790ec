use std::time::Duration;

use chrono::Local;
use common::games::snake::{Difficulty, GameEvent, SnakeGame};
use common::{log, log_debug, log_warn, FileHighScoreStore, SessionRng};
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::config::Config;
use crate::state::{AppState, ClientCommand, SharedState};

enum SessionEnd {
    Leave,
    Shutdown,
}

/// Owns every game started from the menu. Runs until a `Shutdown` command
/// arrives or the UI drops its sender.
pub async fn game_session_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    config: Config,
    seed: Option<u64>,
) {
    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        match command {
            ClientCommand::StartGame { difficulty } => {
                let game = match new_game(&config, difficulty, seed) {
                    Ok(game) => game,
                    Err(e) => {
                        log_warn!("Failed to start game: {}", e);
                        shared_state.set_error(format!("Failed to start game: {}", e));
                        continue;
                    }
                };

                shared_state.clear_error();
                shared_state.clear_events();
                log!("Starting {} game with seed {}", difficulty.label(), game.seed());

                let end = run_game(&shared_state, &mut command_rx, game, difficulty).await;
                shared_state.set_state(AppState::Menu);
                if matches!(end, SessionEnd::Shutdown) {
                    break;
                }
            }
            ClientCommand::Shutdown => break,
            other => {
                log_debug!("Ignoring {:?} outside of a game", other);
            }
        }
    }

    log!("Game session task finished");
}

fn new_game(config: &Config, difficulty: Difficulty, seed: Option<u64>) -> Result<SnakeGame, common::GameError> {
    let settings = config.game_settings(difficulty);
    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let high_scores = FileHighScoreStore::from_file(&config.high_score_file);
    SnakeGame::new(settings, rng, Box::new(high_scores))
}

fn ticker(delay: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + delay, delay);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn run_game(
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    mut game: SnakeGame,
    difficulty: Difficulty,
) -> SessionEnd {
    let mut delay = game.current_delay();
    let mut interval = ticker(delay);
    publish(shared_state, &game, difficulty);

    loop {
        tokio::select! {
            _ = interval.tick(), if !game.is_terminated() => {
                let events = game.advance();
                for event in &events {
                    shared_state.add_event(timestamped(&describe_event(event)));
                }
                publish(shared_state, &game, difficulty);

                if game.current_delay() != delay {
                    delay = game.current_delay();
                    interval = ticker(delay);
                }
            }
            command = command_rx.recv() => {
                match command {
                    Some(ClientCommand::Turn { direction }) => {
                        game.set_direction(direction);
                    }
                    Some(ClientCommand::Restart) => {
                        match game.restart() {
                            Ok(()) => {
                                shared_state.clear_events();
                                delay = game.current_delay();
                                interval = ticker(delay);
                                publish(shared_state, &game, difficulty);
                            }
                            Err(e) => {
                                log_warn!("Restart failed: {}", e);
                                shared_state.set_error(format!("Restart failed: {}", e));
                            }
                        }
                    }
                    Some(ClientCommand::LeaveGame) => {
                        log!("Left game at score {}", game.score());
                        return SessionEnd::Leave;
                    }
                    Some(ClientCommand::StartGame { .. }) => {
                        log_debug!("Already in a game, ignoring start request");
                    }
                    Some(ClientCommand::Shutdown) | None => return SessionEnd::Shutdown,
                }
            }
        }
    }
}

fn publish(shared_state: &SharedState, game: &SnakeGame, difficulty: Difficulty) {
    let snapshot = game.snapshot();
    let state = match game.summary() {
        Some(summary) => AppState::GameOver {
            difficulty,
            snapshot,
            summary: summary.clone(),
        },
        None => AppState::InGame { difficulty, snapshot },
    };
    shared_state.set_state(state);
}

fn timestamped(text: &str) -> String {
    format!("[{}] {}", Local::now().format("%H:%M:%S"), text)
}

fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::FoodEaten { kind, score, .. } => {
            format!("Ate {:?} food, score {}", kind, score)
        }
        GameEvent::PoisonCleared { count } => format!("Golden food cleared {} poison", count),
        GameEvent::PoisonSpawned { position } => {
            format!("Poison appeared at ({}, {})", position.x, position.y)
        }
        GameEvent::SpeedIncreased { delay_ms } => format!("Speed up! Tick is now {}ms", delay_ms),
        GameEvent::GameOver(summary) => format!("Game over: {}", summary.reason.description()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{Direction, FoodKind, GameSettings, Point};

    fn test_config() -> Config {
        let random_number: u32 = rand::random();
        let scores = std::env::temp_dir().join(format!("temp_extreme_snake_scores_{}.yaml", random_number));
        Config {
            high_score_file: scores.to_string_lossy().into_owned(),
            custom_settings: Some(GameSettings {
                initial_delay_ms: 20,
                min_delay_ms: 10,
                ..GameSettings::default()
            }),
            ..Config::default()
        }
    }

    async fn wait_for(shared_state: &SharedState, predicate: impl Fn(&AppState) -> bool) -> AppState {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let state = shared_state.get_state();
            if predicate(&state) {
                return state;
            }
            assert!(Instant::now() < deadline, "timed out waiting for state");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[test]
    fn test_describe_event_texts() {
        let eaten = GameEvent::FoodEaten {
            kind: FoodKind::Golden,
            position: Point::new(40, 40),
            score: 20,
        };
        assert_eq!(describe_event(&eaten), "Ate Golden food, score 20");
        assert_eq!(
            describe_event(&GameEvent::SpeedIncreased { delay_ms: 90 }),
            "Speed up! Tick is now 90ms"
        );
        assert_eq!(
            describe_event(&GameEvent::PoisonCleared { count: 3 }),
            "Golden food cleared 3 poison"
        );
    }

    #[tokio::test]
    async fn test_game_ticks_until_left_and_task_shuts_down() {
        let config = test_config();
        let scores_path = config.high_score_file.clone();
        let shared_state = SharedState::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(game_session_task(shared_state.clone(), rx, config, Some(42)));

        tx.send(ClientCommand::StartGame { difficulty: Difficulty::Easy }).unwrap();
        let state = wait_for(&shared_state, |state| match state {
            AppState::InGame { snapshot, .. } => snapshot.tick >= 2,
            AppState::GameOver { .. } => true,
            AppState::Menu => false,
        })
        .await;
        assert!(!matches!(state, AppState::Menu));

        tx.send(ClientCommand::Turn { direction: Direction::Up }).unwrap();
        tx.send(ClientCommand::LeaveGame).unwrap();
        wait_for(&shared_state, |state| matches!(state, AppState::Menu)).await;

        tx.send(ClientCommand::Shutdown).unwrap();
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();
        let _ = std::fs::remove_file(scores_path);
    }

    #[tokio::test]
    async fn test_invalid_settings_report_error_and_stay_in_menu() {
        let mut config = test_config();
        config.custom_settings = Some(GameSettings {
            cell_size: 0,
            ..GameSettings::default()
        });
        let shared_state = SharedState::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(game_session_task(shared_state.clone(), rx, config, Some(1)));

        tx.send(ClientCommand::StartGame { difficulty: Difficulty::Insane }).unwrap();
        drop(tx);
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();

        assert!(matches!(shared_state.get_state(), AppState::Menu));
        assert!(shared_state.get_error().is_some());
    }

    #[tokio::test]
    async fn test_game_runs_to_wall_and_reports_game_over() {
        let config = test_config();
        let scores_path = config.high_score_file.clone();
        let shared_state = SharedState::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(game_session_task(shared_state.clone(), rx, config, Some(7)));

        tx.send(ClientCommand::StartGame { difficulty: Difficulty::Easy }).unwrap();
        let state = wait_for(&shared_state, |state| matches!(state, AppState::GameOver { .. })).await;
        if let AppState::GameOver { summary, snapshot, .. } = state {
            assert_eq!(summary.score, snapshot.score);
            assert!(!shared_state.events().is_empty());
        }

        tx.send(ClientCommand::Restart).unwrap();
        wait_for(&shared_state, |state| matches!(state, AppState::InGame { .. })).await;

        tx.send(ClientCommand::Shutdown).unwrap();
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();
        let _ = std::fs::remove_file(scores_path);
    }
}
