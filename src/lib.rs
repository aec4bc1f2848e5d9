//! IconForge
//!
//! A small procedural icon generator: a colored square canvas with a circle
//! outline inscribed between its margins and a centered letter glyph, encoded
//! as a PNG and written to disk.
//!
//! # Features
//!
//! - **Embedded face**: glyphs come from a builtin bitmap font, so output
//!   never depends on system fonts and is byte-for-byte deterministic
//! - **Shape fallback**: characters the face does not cover degrade to a
//!   centered square outline instead of failing
//! - **Presets**: configurations serialize to and from JSON
//!
//! # Example
//!
//! ```no_run
//! use iconforge::IconConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig {
//!     size: 128,
//!     glyph: 'A',
//!     ..Default::default()
//! };
//!
//! let icon = iconforge::generate(&config)?;
//! println!("wrote {} bytes to {}", icon.png_data.len(), config.out.display());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub use color::Rgb;

// Builtin bitmap face used for the centered glyph
pub mod font;

// Paint planning and rasterization
pub mod rendering;
pub use rendering::{render, RenderedIcon};

/// Configuration for icon generation
///
/// The defaults reproduce the stock timer icon: a 256px canvas with a blue
/// background, a white circle outline 20px in from the edges, and a white
/// `T` at the center, written to `assets/icon.png`.
///
/// # Examples
///
/// ```
/// let config = iconforge::IconConfig::default();
/// assert_eq!(config.size, 256);
/// assert_eq!(config.glyph, 'T');
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Canvas edge in pixels; icons are square
    pub size: u32,
    /// Gap between the canvas edge and the circle outline, in pixels
    pub margin: u32,
    /// Stroke width of the circle outline, in pixels
    pub stroke: u32,
    /// Stroke width of the fallback square outline, in pixels
    pub fallback_stroke: u32,
    /// Background fill color
    pub background: Rgb,
    /// Color of the outline and glyph
    pub foreground: Rgb,
    /// Character drawn at the center of the icon
    pub glyph: char,
    /// Destination path for the encoded PNG
    pub out: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 256,
            margin: 20,
            stroke: 4,
            fallback_stroke: 3,
            background: color::BLUE,
            foreground: color::WHITE,
            glyph: 'T',
            out: PathBuf::from("assets/icon.png"),
        }
    }
}

impl IconConfig {
    /// Check the geometry before any drawing happens
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ConfigError("size must be nonzero".into()));
        }
        if self.size as u64 <= self.margin as u64 * 2 {
            return Err(Error::ConfigError(format!(
                "margin {} leaves no room for the circle on a {}px canvas",
                self.margin, self.size
            )));
        }
        if self.stroke == 0 || self.fallback_stroke == 0 {
            return Err(Error::ConfigError("stroke widths must be nonzero".into()));
        }
        Ok(())
    }
}

/// Render the configured icon and write it to its output path.
///
/// Missing parent directories of the output path are created. Returns the
/// rendered icon so callers can inspect the encoded bytes.
pub fn generate(config: &IconConfig) -> Result<RenderedIcon> {
    let icon = rendering::render(config)?;
    write_to_disk(&icon, &config.out)?;
    Ok(icon)
}

/// Write encoded PNG bytes to `path`, creating missing parent directories
pub fn write_to_disk(icon: &RenderedIcon, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::OutputError(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
    }
    fs::write(path, &icon.png_data)
        .map_err(|e| Error::OutputError(format!("cannot write {}: {}", path.display(), e)))
}
