use common::games::snake::{Difficulty, Direction, GameOverSummary, GameSnapshot};
use ringbuffer::{AllocRingBuffer, RingBuffer};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::EVENT_LOG_SIZE;

#[derive(Debug, Clone)]
pub enum ClientCommand {
    StartGame { difficulty: Difficulty },
    Turn { direction: Direction },
    Restart,
    LeaveGame,
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum AppState {
    Menu,
    InGame {
        difficulty: Difficulty,
        snapshot: GameSnapshot,
    },
    GameOver {
        difficulty: Difficulty,
        snapshot: GameSnapshot,
        summary: GameOverSummary,
    },
}

struct Inner {
    state: AppState,
    event_log: AllocRingBuffer<String>,
    error: Option<String>,
    context: Option<egui::Context>,
}

#[derive(Clone)]
pub struct SharedState {
    inner: Arc<Mutex<Inner>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: AppState::Menu,
                event_log: AllocRingBuffer::new(EVENT_LOG_SIZE),
                error: None,
                context: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn request_repaint(inner: &Inner) {
        if let Some(ctx) = &inner.context {
            ctx.request_repaint();
        }
    }

    pub fn set_context(&self, ctx: egui::Context) {
        self.lock().context = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        self.lock().context.is_some()
    }

    pub fn set_state(&self, state: AppState) {
        let mut inner = self.lock();
        inner.state = state;
        Self::request_repaint(&inner);
    }

    pub fn get_state(&self) -> AppState {
        self.lock().state.clone()
    }

    pub fn add_event(&self, event: String) {
        let mut inner = self.lock();
        inner.event_log.enqueue(event);
        Self::request_repaint(&inner);
    }

    pub fn clear_events(&self) {
        self.lock().event_log.clear();
    }

    /// Oldest first.
    pub fn events(&self) -> Vec<String> {
        self.lock().event_log.iter().cloned().collect()
    }

    pub fn set_error(&self, error: String) {
        let mut inner = self.lock();
        inner.error = Some(error);
        Self::request_repaint(&inner);
    }

    pub fn get_error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn clear_error(&self) {
        self.lock().error = None;
    }
}
