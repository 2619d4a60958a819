use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasPattern, CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};
use hop_engine::{DrawCommand, GameConfig, ImageId, Rect, RenderBuffer, Renderer};

/// Replays render buffers on a Canvas 2D context.
pub struct Canvas2dRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Loaded images indexed by `ImageId`.
    images: Vec<HtmlImageElement>,
    /// Repeat patterns, created on first use per image.
    patterns: HashMap<ImageId, CanvasPattern>,
}

impl Canvas2dRenderer {
    /// Find the configured canvas (or create one appended to `<body>`) and size it.
    pub fn new(
        document: &Document,
        config: &GameConfig,
        images: Vec<HtmlImageElement>,
    ) -> Result<Self, JsValue> {
        let canvas = match &config.canvas_id {
            Some(id) => document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
                .dyn_into::<HtmlCanvasElement>()?,
            None => {
                let canvas = document
                    .create_element("canvas")?
                    .dyn_into::<HtmlCanvasElement>()?;
                document
                    .body()
                    .ok_or_else(|| JsValue::from_str("document has no body"))?
                    .append_child(&canvas)?;
                canvas
            }
        };
        canvas.set_width(config.surface_width);
        canvas.set_height(config.surface_height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        log::info!(
            "canvas2d: {}x{} surface, {} images",
            config.surface_width,
            config.surface_height,
            images.len()
        );

        Ok(Self {
            canvas,
            ctx,
            images,
            patterns: HashMap::new(),
        })
    }

    fn image(&self, id: ImageId) -> Result<&HtmlImageElement, JsValue> {
        self.images
            .get(id.0 as usize)
            .ok_or_else(|| JsValue::from_str(&format!("unknown image #{}", id.0)))
    }

    fn pattern(&mut self, id: ImageId) -> Result<CanvasPattern, JsValue> {
        if let Some(pattern) = self.patterns.get(&id) {
            return Ok(pattern.clone());
        }
        let pattern = self
            .ctx
            .create_pattern_with_html_image_element(self.image(id)?, "repeat")?
            .ok_or_else(|| JsValue::from_str("image not ready for pattern"))?;
        self.patterns.insert(id, pattern.clone());
        Ok(pattern)
    }

    fn execute(&mut self, command: &DrawCommand) -> Result<(), JsValue> {
        match *command {
            DrawCommand::Clear { width, height } => {
                self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
            }
            DrawCommand::FillPattern { image, offset_x, width, height } => {
                let pattern = self.pattern(image)?;
                self.ctx.save();
                self.ctx.set_fill_style_canvas_pattern(&pattern);
                // Shift the pattern origin, then fill the visible area back in place.
                self.ctx.translate(-(offset_x as f64), 0.0)?;
                self.ctx
                    .fill_rect(offset_x as f64, 0.0, width as f64, height as f64);
                self.ctx.restore();
            }
            DrawCommand::Blit { image, src, dst } => {
                let Rect { x, y, w, h } = src;
                self.ctx
                    .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                        self.image(image)?,
                        x as f64,
                        y as f64,
                        w as f64,
                        h as f64,
                        dst.x as f64,
                        dst.y as f64,
                        w as f64,
                        h as f64,
                    )?;
            }
        }
        Ok(())
    }
}

impl Renderer for Canvas2dRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn draw(&mut self, buffer: &RenderBuffer) {
        for command in buffer.iter() {
            if let Err(err) = self.execute(command) {
                log::warn!("canvas2d: {:?} failed: {:?}", command, err);
            }
        }
    }
}
