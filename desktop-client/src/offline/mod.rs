mod runner;

pub use runner::game_session_task;
