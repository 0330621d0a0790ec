pub const EVENT_LOG_SIZE: usize = 16;

pub const WINDOW_WIDTH: f32 = 640.0;
pub const WINDOW_HEIGHT: f32 = 760.0;
