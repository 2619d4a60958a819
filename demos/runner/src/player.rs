use glam::IVec2;
use hop_engine::{Animation, AssetError, AssetStore, Key, KeyStatus, RenderBuffer, Vector};
use crate::config::PlayerTuning;

/// Which of the player's animations is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveAnimation {
    Walking,
    Jumping,
    Falling,
}

impl ActiveAnimation {
    /// Pick the animation from the sign of the vertical velocity.
    pub fn from_dy(dy: i32) -> Self {
        match dy {
            d if d > 0 => ActiveAnimation::Falling,
            d if d < 0 => ActiveAnimation::Jumping,
            _ => ActiveAnimation::Walking,
        }
    }
}

/// The runner: one body, three animations, one jump button.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Vector,
    walk: Animation,
    jump: Animation,
    fall: Animation,
    active: ActiveAnimation,
    /// Set on launch and never cleared, so the launch gate opens once.
    is_jumping: bool,
    /// Never set; only `is_jumping` turns gravity on.
    is_falling: bool,
    jump_dy: i32,
    gravity: i32,
    jump_hold_ticks: u32,
    /// Ticks left in which holding jump re-applies `jump_dy`.
    jump_counter: u32,
}

impl Player {
    pub fn new(tuning: &PlayerTuning, walk: Animation, jump: Animation, fall: Animation) -> Self {
        Self {
            body: Vector::at(IVec2::new(tuning.start_x, tuning.start_y)),
            walk,
            jump,
            fall,
            active: ActiveAnimation::Walking,
            is_jumping: false,
            is_falling: false,
            jump_dy: tuning.jump_dy,
            gravity: tuning.gravity,
            jump_hold_ticks: tuning.jump_hold_ticks,
            jump_counter: 0,
        }
    }

    /// Build the player with the animations named in `tuning`.
    pub fn load(assets: &AssetStore, tuning: &PlayerTuning) -> Result<Self, AssetError> {
        Ok(Self::new(
            tuning,
            assets.animation(&tuning.run_animation)?,
            assets.animation(&tuning.jump_animation)?,
            assets.animation(&tuning.fall_animation)?,
        ))
    }

    pub fn update(&mut self, keys: &KeyStatus) {
        let jump_held = keys.is_held(Key::Space);

        if jump_held && self.body.vel.y == 0 && !self.is_jumping {
            self.is_jumping = true;
            self.body.vel.y = self.jump_dy;
            self.jump_counter = self.jump_hold_ticks;
            log::debug!("player: jump from y={}", self.body.pos.y);
        }

        // Holding the button sustains the ascent until the counter runs out.
        if jump_held && self.jump_counter > 0 {
            self.body.vel.y = self.jump_dy;
        }

        self.jump_counter = self.jump_counter.saturating_sub(1);

        self.body.advance();

        if self.is_falling || self.is_jumping {
            self.body.vel.y = self.body.vel.y.saturating_add(self.gravity);
        }

        self.active = ActiveAnimation::from_dy(self.body.vel.y);
        self.animation_mut().update();
    }

    pub fn draw(&self, buffer: &mut RenderBuffer) {
        self.animation().draw(buffer, self.body.pos);
    }

    pub fn active(&self) -> ActiveAnimation {
        self.active
    }

    pub fn animation(&self) -> &Animation {
        match self.active {
            ActiveAnimation::Walking => &self.walk,
            ActiveAnimation::Jumping => &self.jump,
            ActiveAnimation::Falling => &self.fall,
        }
    }

    fn animation_mut(&mut self) -> &mut Animation {
        match self.active {
            ActiveAnimation::Walking => &mut self.walk,
            ActiveAnimation::Jumping => &mut self.jump,
            ActiveAnimation::Falling => &mut self.fall,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn jump_counter(&self) -> u32 {
        self.jump_counter
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use hop_engine::{AssetManifest, DrawCommand, ImageId, Rect};

    const MANIFEST: &str = include_str!("../assets/manifest.json");

    /// Store with every runner image loaded: 6 running/jumping frames, 9 falling.
    pub(crate) fn loaded_store() -> AssetStore {
        let mut store = AssetStore::new(AssetManifest::from_json(MANIFEST).unwrap());
        for (path, width) in [
            ("./images/falling.png", 144 * 9),
            ("./images/terrain.png", 64),
            ("./images/jumping.png", 144 * 6),
            ("./images/running.png", 144 * 6),
        ] {
            let id = store.id(path).unwrap();
            let height = if width == 64 { 64 } else { 190 };
            store.mark_loaded(id, width, height).unwrap();
        }
        store
    }

    fn player() -> Player {
        Player::load(&loaded_store(), &PlayerTuning::default()).unwrap()
    }

    fn held() -> KeyStatus {
        let mut keys = KeyStatus::new();
        keys.set(Key::Space, true);
        keys
    }

    #[test]
    fn at_rest_without_input() {
        let mut p = player();
        for _ in 0..30 {
            p.update(&KeyStatus::new());
        }
        assert_eq!(p.body.pos, IVec2::new(60, 15));
        assert_eq!(p.body.vel, IVec2::ZERO);
        assert_eq!(p.active(), ActiveAnimation::Walking);
        assert!(!p.is_jumping());
    }

    #[test]
    fn first_held_tick_launches() {
        let mut p = player();
        p.update(&held());
        assert!(p.is_jumping());
        assert_eq!(p.jump_counter(), 11);
        assert_eq!(p.body.pos.y, 5);
        // jump_dy plus one tick of gravity
        assert_eq!(p.body.vel.y, -9);
        assert_eq!(p.active(), ActiveAnimation::Jumping);
    }

    #[test]
    fn holding_sustains_ascent_until_counter_expires() {
        let mut p = player();
        let keys = held();
        for tick in 1..=12 {
            p.update(&keys);
            assert_eq!(p.body.pos.y, 15 - 10 * tick, "tick {tick}");
        }
        assert_eq!(p.jump_counter(), 0);
        assert_eq!(p.body.pos.y, -105);

        // Counter spent: gravity now accumulates even though jump is held.
        p.update(&keys);
        assert_eq!(p.body.pos.y, -114);
        assert_eq!(p.body.vel.y, -8);
        p.update(&keys);
        assert_eq!(p.body.vel.y, -7);
    }

    #[test]
    fn tap_jump_goes_up_through_apex_then_falls() {
        let mut p = player();
        p.update(&held());
        let mut states = vec![p.active()];
        for _ in 0..12 {
            p.update(&KeyStatus::new());
            states.push(p.active());
        }
        let mut expected = vec![ActiveAnimation::Jumping; 9];
        expected.push(ActiveAnimation::Walking);
        expected.extend([ActiveAnimation::Falling; 3]);
        assert_eq!(states, expected);
        assert_eq!(p.body.vel.y, 3);
    }

    #[test]
    fn repress_within_hold_window_reapplies_impulse() {
        let mut p = player();
        p.update(&held());
        p.update(&KeyStatus::new());
        assert_eq!(p.body.vel.y, -8);
        p.update(&held());
        assert_eq!(p.jump_counter(), 9);
        assert_eq!(p.body.vel.y, -9);
    }

    #[test]
    fn endless_fall_after_jump_keeps_descending() {
        let mut p = player();
        p.update(&held());
        let idle = KeyStatus::new();
        let mut last_y = p.body.pos.y;
        for _ in 0..100_000 {
            p.update(&idle);
            if p.body.vel.y > 0 {
                assert!(p.body.pos.y >= last_y, "y went from {} to {}", last_y, p.body.pos.y);
            }
            last_y = p.body.pos.y;
        }
        assert_eq!(p.body.pos.y, i32::MAX);
        assert_eq!(p.active(), ActiveAnimation::Falling);
    }

    #[test]
    fn launch_gate_never_reopens() {
        let tuning = PlayerTuning {
            jump_hold_ticks: 1,
            ..PlayerTuning::default()
        };
        let mut p = Player::load(&loaded_store(), &tuning).unwrap();
        p.update(&held());
        assert_eq!(p.jump_counter(), 0);
        for _ in 0..9 {
            p.update(&KeyStatus::new());
        }
        // Apex: dy is exactly zero, but the player has already jumped.
        assert_eq!(p.body.vel.y, 0);
        p.update(&held());
        assert_eq!(p.body.vel.y, 1);
        assert_eq!(p.active(), ActiveAnimation::Falling);
    }

    #[test]
    fn only_the_active_animation_advances() {
        let mut p = player();
        // Walk animation holds each frame for 10 ticks.
        for _ in 0..10 {
            p.update(&KeyStatus::new());
        }
        assert_eq!(p.animation().current_frame(), 1);

        // Jump animation starts from its own first frame.
        p.update(&held());
        assert_eq!(p.active(), ActiveAnimation::Jumping);
        assert_eq!(p.animation().current_frame(), 0);
        assert_eq!(p.animation().counter(), 1);
    }

    #[test]
    fn draw_uses_active_sheet_and_position() {
        let store = loaded_store();
        let mut p = Player::load(&store, &PlayerTuning::default()).unwrap();
        let mut buffer = RenderBuffer::new();
        p.draw(&mut buffer);
        assert_eq!(
            buffer.commands(),
            &[DrawCommand::Blit {
                image: store.id("./images/running.png").unwrap(),
                src: Rect::new(0, 0, 144, 190),
                dst: IVec2::new(60, 15),
            }]
        );

        p.update(&held());
        buffer.clear();
        p.draw(&mut buffer);
        match buffer.commands()[0] {
            DrawCommand::Blit { image, dst, .. } => {
                assert_eq!(image, ImageId(2));
                assert_eq!(dst, IVec2::new(60, 5));
            }
            other => panic!("expected Blit, got {:?}", other),
        }
    }

    #[test]
    fn missing_animation_is_an_error() {
        let tuning = PlayerTuning {
            fall_animation: "tumble".into(),
            ..PlayerTuning::default()
        };
        assert!(matches!(
            Player::load(&loaded_store(), &tuning),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn active_animation_from_dy_sign() {
        assert_eq!(ActiveAnimation::from_dy(4), ActiveAnimation::Falling);
        assert_eq!(ActiveAnimation::from_dy(-1), ActiveAnimation::Jumping);
        assert_eq!(ActiveAnimation::from_dy(0), ActiveAnimation::Walking);
    }
}
