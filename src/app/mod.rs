//! Terminal front-end: input, drawing and best-score storage around the engine.

pub mod anim;
pub mod colors;
pub mod config;
pub mod data;
pub mod entry;
pub mod screens;
