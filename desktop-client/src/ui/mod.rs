mod colors;
mod game;
mod menu;

pub use menu::MenuApp;
