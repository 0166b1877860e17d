pub mod core;
pub mod deck;
pub mod gui;
pub mod persistence;
pub mod speech;
