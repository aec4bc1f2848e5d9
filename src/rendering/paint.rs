/// Paint command set and icon composition

use log::warn;

use crate::color::Rgb;
use crate::font::Font;
use crate::IconConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Fill {
        rgb: Rgb,
    },
    CircleOutline {
        cx: i32,
        cy: i32,
        radius: u32,
        stroke: u32,
        rgb: Rgb,
    },
    RectOutline {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        stroke: u32,
        rgb: Rgb,
    },
    Glyph {
        ch: char,
        x: i32,
        y: i32,
        scale: u32,
        rgb: Rgb,
    },
}

/// Compose the paint command list for an icon.
///
/// The circle is inscribed between the margins. The glyph is centered at an
/// integer scale derived from the canvas size; when the builtin face does not
/// cover the configured character, a centered square outline spanning the
/// middle third of the canvas is planned instead.
pub fn plan(config: &IconConfig) -> Vec<PaintCommand> {
    let size = config.size;
    let mut commands = vec![PaintCommand::Fill {
        rgb: config.background,
    }];

    let center = (size / 2) as i32;
    let radius = (size - 2 * config.margin) / 2;
    commands.push(PaintCommand::CircleOutline {
        cx: center,
        cy: center,
        radius,
        stroke: config.stroke,
        rgb: config.foreground,
    });

    if Font::builtin().glyph(config.glyph).is_some() {
        let scale = (size / 64).max(1);
        let glyph_w = Font::GLYPH_WIDTH * scale;
        let glyph_h = Font::GLYPH_HEIGHT * scale;
        commands.push(PaintCommand::Glyph {
            ch: config.glyph,
            x: (size.saturating_sub(glyph_w) / 2) as i32,
            y: (size.saturating_sub(glyph_h) / 2) as i32,
            scale,
            rgb: config.foreground,
        });
    } else {
        warn!(
            "builtin face has no glyph for {:?}, using square fallback",
            config.glyph
        );
        let third = size / 3;
        commands.push(PaintCommand::RectOutline {
            x: third as i32,
            y: third as i32,
            width: third,
            height: third,
            stroke: config.fallback_stroke,
            rgb: config.foreground,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_fills_then_outlines() {
        let commands = plan(&IconConfig::default());
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], PaintCommand::Fill { .. }));
        match commands[1] {
            PaintCommand::CircleOutline { cx, cy, radius, stroke, .. } => {
                assert_eq!((cx, cy), (128, 128));
                assert_eq!(radius, 108);
                assert_eq!(stroke, 4);
            }
            _ => panic!("expected circle outline"),
        }
    }

    #[test]
    fn plan_centers_glyph() {
        let commands = plan(&IconConfig::default());
        match commands[2] {
            PaintCommand::Glyph { ch, x, y, scale, .. } => {
                assert_eq!(ch, 'T');
                assert_eq!(scale, 4);
                // 5x7 cell at scale 4 centered on a 256px canvas
                assert_eq!(x, (256 - 5 * 4) / 2);
                assert_eq!(y, (256 - 7 * 4) / 2);
            }
            _ => panic!("expected glyph"),
        }
    }

    #[test]
    fn plan_falls_back_to_square() {
        let config = IconConfig {
            glyph: '@',
            ..Default::default()
        };
        let commands = plan(&config);
        match commands[2] {
            PaintCommand::RectOutline { x, y, width, height, stroke, .. } => {
                assert_eq!((x, y), (85, 85));
                assert_eq!((width, height), (85, 85));
                assert_eq!(stroke, 3);
            }
            _ => panic!("expected square fallback"),
        }
    }
}
