pub mod app;
mod board;
mod button;
mod confetti;
mod game;
mod tile;
