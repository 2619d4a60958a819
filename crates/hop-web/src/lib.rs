pub mod app;
pub mod canvas;
pub mod keyboard;
pub mod loader;
pub mod runner;
pub mod scheduler;

pub use app::{start, App};
pub use canvas::Canvas2dRenderer;
pub use runner::GameRunner;

/// Generate the `#[wasm_bindgen]` entry point for a game.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// hop_web::export_game!(MyGame, "my-game", include_str!("../assets/manifest.json"));
/// ```
///
/// JS then calls `game_start()` once the module is initialised.
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `hop_engine::Game`
/// - `$game_name`: A string literal used in log messages
/// - `$manifest`: The asset manifest JSON (`&str`)
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal, $manifest:expr) => {
        #[wasm_bindgen]
        pub fn game_start() -> Result<(), JsValue> {
            $crate::start::<$game_type>($game_name, $manifest)
        }
    };
}
