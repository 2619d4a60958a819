pub mod game;

pub use game::{Game, GameConfig, RenderContext};
