//! Rendering module
//!
//! Icons are produced in three steps: plan a small list of paint commands
//! from the configuration, rasterize the commands into an RGB canvas, and
//! encode the canvas as PNG bytes.

pub mod paint;
pub mod raster;

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::IconConfig;

/// A fully rendered icon with encoded PNG bytes
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl RenderedIcon {
    /// Hex-encoded SHA-256 digest of the PNG bytes.
    ///
    /// Rendering is deterministic, so the digest content-addresses the icon
    /// and is what the golden tests compare against.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Render the icon described by `config`
pub fn render(config: &IconConfig) -> Result<RenderedIcon> {
    config.validate()?;
    let commands = paint::plan(config);
    log::debug!("planned {} paint commands", commands.len());
    let canvas = raster::rasterize(config.size, config.size, &commands);
    let png_data = canvas.encode_png()?;
    Ok(RenderedIcon {
        width: config.size,
        height: config.size,
        png_data,
    })
}
