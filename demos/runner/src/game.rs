use hop_engine::{
    AssetError, AssetStore, Game, GameConfig, KeyStatus, RenderContext, ScrollingBackground,
};
use crate::config::RunnerConfig;
use crate::player::Player;

const WORLD_W: u32 = 1050;
const WORLD_H: u32 = 350;

/// One player running over scrolling terrain.
pub struct RunnerGame {
    player: Player,
    terrain: Option<ScrollingBackground>,
}

impl RunnerGame {
    pub fn with_config(assets: &AssetStore, config: &RunnerConfig) -> Result<Self, AssetError> {
        let player = Player::load(assets, &config.player)?;
        let terrain = assets
            .background()?
            .map(|image| ScrollingBackground::new(image, config.scroll_speed));
        log::info!(
            "RunnerGame: player at ({}, {}), terrain scroll {}px/tick",
            player.body.pos.x,
            player.body.pos.y,
            config.scroll_speed
        );
        Ok(Self { player, terrain })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
}

impl Game for RunnerGame {
    fn load(assets: &AssetStore) -> Result<Self, AssetError> {
        let config = RunnerConfig::from_json(include_str!("../assets/runner.json"))?;
        Self::with_config(assets, &config)
    }

    fn config(&self) -> GameConfig {
        GameConfig {
            surface_width: WORLD_W,
            surface_height: WORLD_H,
            ..GameConfig::default()
        }
    }

    fn update(&mut self, keys: &KeyStatus) {
        if let Some(terrain) = &mut self.terrain {
            terrain.update();
        }
        self.player.update(keys);
    }

    fn render(&self, ctx: &mut RenderContext) {
        if let Some(terrain) = &self.terrain {
            terrain.draw(ctx.render_buffer, ctx.surface_width, ctx.surface_height);
        }
        self.player.draw(ctx.render_buffer);
    }
}
