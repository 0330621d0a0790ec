mod session_rng;

pub mod snake;

pub use session_rng::SessionRng;
