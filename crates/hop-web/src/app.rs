use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use hop_engine::{AssetError, AssetManifest, Game, Renderer};
use crate::canvas::Canvas2dRenderer;
use crate::loader::{self, LoadedImages};
use crate::runner::GameRunner;
use crate::{keyboard, scheduler};

/// Everything one running game needs, built once after assets load.
pub struct App<G: Game, R: Renderer> {
    pub runner: GameRunner<G>,
    pub renderer: R,
}

impl<G: Game, R: Renderer> App<G, R> {
    pub fn new(runner: GameRunner<G>, renderer: R) -> Self {
        Self { runner, renderer }
    }

    /// One frame: tick the game, then replay its commands on the surface.
    pub fn frame(&mut self) {
        self.runner.tick();
        self.renderer.draw(self.runner.render_buffer());
    }
}

/// Set up logging, load the manifest's images, then run `G` forever.
///
/// Manifest errors are returned to the caller. Image load errors arrive
/// asynchronously; they are logged and the loop never starts.
pub fn start<G: Game + 'static>(name: &'static str, manifest_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let manifest = AssetManifest::from_json(manifest_json).map_err(to_js)?;
    log::info!("{}: loading {} images", name, manifest.images.len());

    loader::load_images(manifest, move |result| {
        if let Err(err) = launch::<G>(name, result) {
            log::error!("{}: failed to start: {:?}", name, err);
        }
    })
}

fn launch<G: Game + 'static>(
    name: &'static str,
    result: Result<LoadedImages, AssetError>,
) -> Result<(), JsValue> {
    let LoadedImages { store, elements } = result.map_err(to_js)?;
    let game = G::load(&store).map_err(to_js)?;
    let runner = GameRunner::new(game);

    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("window has no document")?;
    let renderer = Canvas2dRenderer::new(&document, runner.config(), elements)?;
    let (width, height) = renderer.size();
    log::info!("{}: {} renderer, {}x{}", name, renderer.backend(), width, height);
    let fallback_ms = runner.config().fallback_frame_ms();

    let app = Rc::new(RefCell::new(App::new(runner, renderer)));

    let input_app = app.clone();
    keyboard::listen(&document, move |event| input_app.borrow_mut().runner.push_input(event))?;

    scheduler::run_forever(window, fallback_ms, move || app.borrow_mut().frame())?;
    log::info!("{}: running", name);
    Ok(())
}

fn to_js(err: AssetError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hop_engine::{
        AssetStore, DrawCommand, InputEvent, Key, KeyStatus, RenderBuffer, RenderContext,
    };

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<DrawCommand>>,
    }

    impl Renderer for Recorder {
        fn backend(&self) -> &'static str {
            "recorder"
        }

        fn size(&self) -> (u32, u32) {
            (1050, 350)
        }

        fn draw(&mut self, buffer: &RenderBuffer) {
            self.frames.push(buffer.commands().to_vec());
        }
    }

    struct Jumps(u32);

    impl Game for Jumps {
        fn load(_assets: &AssetStore) -> Result<Self, AssetError> {
            Ok(Self(0))
        }

        fn update(&mut self, keys: &KeyStatus) {
            if keys.is_held(Key::Space) {
                self.0 += 1;
            }
        }

        fn render(&self, ctx: &mut RenderContext) {
            ctx.render_buffer.push(DrawCommand::Clear { width: self.0, height: 0 });
        }
    }

    #[test]
    fn every_frame_reaches_the_renderer() {
        let game = Jumps::load(&AssetStore::new(AssetManifest::default())).unwrap();
        let mut app = App::new(GameRunner::new(game), Recorder::default());

        app.frame();
        app.runner.push_input(InputEvent::KeyDown { key_code: 32 });
        app.frame();

        assert_eq!(app.renderer.frames.len(), 2);
        assert_eq!(
            app.renderer.frames[1],
            vec![
                DrawCommand::Clear { width: 1050, height: 350 },
                DrawCommand::Clear { width: 1, height: 0 },
            ]
        );
    }
}
