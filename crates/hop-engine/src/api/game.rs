use crate::assets::registry::AssetStore;
use crate::assets::AssetError;
use crate::input::keys::KeyStatus;
use crate::renderer::buffer::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Surface width in logical pixels (default: 1050).
    pub surface_width: u32,
    /// Surface height in logical pixels (default: 350).
    pub surface_height: u32,
    /// Tick rate used when the host has no vsync-aligned frame callback (default: 60).
    pub fallback_fps: u32,
    /// Draw into an existing canvas with this element id instead of creating one.
    pub canvas_id: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: 1050,
            surface_height: 350,
            fallback_fps: 60,
            canvas_id: None,
        }
    }
}

impl GameConfig {
    /// Delay between ticks for the timer fallback, in milliseconds.
    pub fn fallback_frame_ms(&self) -> i32 {
        (1000 / self.fallback_fps.max(1)) as i32
    }
}

/// The core contract every game must fulfill.
pub trait Game: Sized {
    /// Build the game from fully loaded assets. Called once, before the first tick.
    fn load(assets: &AssetStore) -> Result<Self, AssetError>;

    /// Return engine configuration. Called once after `load`.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// The game loop tick. Reads input state, advances the simulation.
    fn update(&mut self, keys: &KeyStatus);

    /// Queue this tick's draw commands.
    fn render(&self, ctx: &mut RenderContext);
}

/// Render context passed to `Game::render`.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
    pub surface_width: u32,
    pub surface_height: u32,
}
