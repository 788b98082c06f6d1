//! Draws a `GameState` onto a 2D canvas

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::SHOOTER_SPRITE_SIZE;
use crate::error::WebError;
use crate::sim::{GamePhase, GameState};

/// Fallback colors when an image is missing
const FALLBACK_BACKGROUND: &str = "#10202a";
const FALLBACK_SHOOTER: &str = "#3c9a3c";

/// Raster images used by the renderer
#[derive(Default)]
pub struct Sprites {
    pub shooter: Option<HtmlImageElement>,
    pub background: Option<HtmlImageElement>,
}

impl Sprites {
    /// Load both images and wait until they are decoded.
    ///
    /// A failed image is logged and left as `None`; the renderer draws a
    /// plain shape in its place.
    pub async fn load(shooter_src: &str, background_src: &str) -> Self {
        Self {
            shooter: load_image(shooter_src).await,
            background: load_image(background_src).await,
        }
    }
}

async fn load_image(src: &str) -> Option<HtmlImageElement> {
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(e) => {
            log::error!("Cannot create image for {}: {:?}", src, e);
            return None;
        }
    };
    image.set_src(src);

    match JsFuture::from(image.decode()).await {
        Ok(_) => {
            log::info!("Loaded {} ({}x{})", src, image.natural_width(), image.natural_height());
            Some(image)
        }
        Err(e) => {
            log::warn!("Failed to load {}: {:?}", src, e);
            None
        }
    }
}

/// Canvas 2D renderer
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, sprites: Sprites) -> Result<Self, WebError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(WebError::NoCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::NoCanvasContext)?;

        Ok(Self {
            ctx,
            sprites,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Render one frame. Only a running session draws the playfield.
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        if state.phase != GamePhase::Playing {
            return Ok(());
        }

        self.draw_background()?;
        self.draw_shooter(state)?;

        let radius = state.tuning.target_radius;
        for target in &state.cluster.targets {
            self.fill_circle(target.pos, radius, target.color.css())?;
        }

        if let Some(shot) = &state.shooter.projectile {
            self.fill_circle(shot.pos, radius, shot.color.css())?;
        }
        Ok(())
    }

    fn draw_background(&self) -> Result<(), JsValue> {
        match &self.sprites.background {
            Some(image) => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, self.width, self.height),
            None => {
                self.ctx.set_fill_style_str(FALLBACK_BACKGROUND);
                self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
                Ok(())
            }
        }
    }

    fn draw_shooter(&self, state: &GameState) -> Result<(), JsValue> {
        let shooter = &state.shooter;
        let size = SHOOTER_SPRITE_SIZE as f64;

        match &self.sprites.shooter {
            Some(image) => {
                self.ctx.save();
                let drawn = self
                    .ctx
                    .translate(shooter.pos.x as f64, shooter.pos.y as f64)
                    .and_then(|_| self.ctx.rotate(shooter.angle as f64))
                    .and_then(|_| {
                        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                            image,
                            -size / 2.0,
                            -size / 2.0,
                            size,
                            size,
                        )
                    });
                // Always undo the transform, even on error
                self.ctx.restore();
                drawn?;
            }
            None => self.fill_circle(shooter.pos, SHOOTER_SPRITE_SIZE / 2.0, FALLBACK_SHOOTER)?,
        }

        // Next-shot preview only while nothing is in flight
        if shooter.projectile.is_none() {
            self.fill_circle(
                shooter.preview_pos(),
                state.tuning.target_radius,
                shooter.next_color.css(),
            )?;
        }
        Ok(())
    }

    fn fill_circle(&self, center: Vec2, radius: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }
}
