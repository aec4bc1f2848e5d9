use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use iconforge::{Error, IconConfig, Result, Rgb};

/// Generate a procedural icon PNG
///
/// Run with no arguments this reproduces the stock timer icon at
/// assets/icon.png. Flags override individual settings; --preset loads a
/// JSON configuration first and flags take precedence over it.
#[derive(Parser, Debug)]
#[command(name = "iconforge", version, about = "Generate a procedural icon PNG")]
struct Cli {
    /// Canvas edge in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Gap between the canvas edge and the circle outline
    #[arg(long)]
    margin: Option<u32>,

    /// Character drawn at the center of the icon
    #[arg(long)]
    glyph: Option<char>,

    /// Background color as #rrggbb or #rgb
    #[arg(long)]
    background: Option<Rgb>,

    /// Outline and glyph color as #rrggbb or #rgb
    #[arg(long)]
    foreground: Option<Rgb>,

    /// Destination PNG path
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON preset file with an icon configuration
    #[arg(long)]
    preset: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<IconConfig> {
        let mut config = match &self.preset {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| {
                    Error::ConfigError(format!("cannot read preset {}: {}", path.display(), e))
                })?;
                serde_json::from_str(&text).map_err(|e| {
                    Error::ConfigError(format!("invalid preset {}: {}", path.display(), e))
                })?
            }
            None => IconConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if let Some(glyph) = self.glyph {
            config.glyph = glyph;
        }
        if let Some(background) = self.background {
            config.background = background;
        }
        if let Some(foreground) = self.foreground {
            config.foreground = foreground;
        }
        if let Some(out) = self.out {
            config.out = out;
        }
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    iconforge::generate(&config)?;
    println!("Created {}", config.out.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("iconforge failed: {}", e);
        process::exit(1);
    }
}
