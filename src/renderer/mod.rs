//! Canvas 2D rendering module
//!
//! Filled circles for balls, two raster images (frog sprite and background),
//! and DOM text for the HUD and overlays.

pub mod canvas;
pub mod hud;

pub use canvas::{CanvasRenderer, Sprites};
pub use hud::Hud;
