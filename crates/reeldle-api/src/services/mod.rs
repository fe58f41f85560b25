//! Service layer.

pub mod game;

pub use game::GameService;
