use hop_engine::{
    DrawCommand, Game, GameConfig, InputEvent, KeyStatus, RenderBuffer, RenderContext,
};

/// Generic game runner: owns the game, the key state and the frame's
/// render buffer. Platform-free, so it can be driven from tests.
///
/// One `tick()` is one logical update paired with one frame of draw commands.
pub struct GameRunner<G: Game> {
    game: G,
    keys: KeyStatus,
    render_buffer: RenderBuffer,
    config: GameConfig,
    frames: u64,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            keys: KeyStatus::new(),
            render_buffer: RenderBuffer::new(),
            config,
            frames: 0,
        }
    }

    /// Apply a key event. Returns true if the game recognises the key.
    pub fn push_input(&mut self, event: InputEvent) -> bool {
        let handled = self.keys.apply(event);
        if handled {
            log::trace!("input: {:?}", event);
        }
        handled
    }

    /// Run one frame: clear, update, queue draw commands.
    pub fn tick(&mut self) {
        self.render_buffer.clear();
        self.render_buffer.push(DrawCommand::Clear {
            width: self.config.surface_width,
            height: self.config.surface_height,
        });

        self.game.update(&self.keys);

        let mut render_ctx = RenderContext {
            render_buffer: &mut self.render_buffer,
            surface_width: self.config.surface_width,
            surface_height: self.config.surface_height,
        };
        self.game.render(&mut render_ctx);

        self.frames += 1;
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn keys(&self) -> &KeyStatus {
        &self.keys
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Number of ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
