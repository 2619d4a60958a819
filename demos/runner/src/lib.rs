use wasm_bindgen::prelude::*;

mod config;
mod game;
mod player;

pub use game::RunnerGame;

hop_web::export_game!(RunnerGame, "runner", include_str!("../assets/manifest.json"));
