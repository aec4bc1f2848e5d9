//! Letter badges example - renders one icon per letter into a build directory

use iconforge::IconConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("IconForge - Letter Badges Example\n");

    let palette = vec![
        ('A', "#2563eb"),
        ('B', "#16a34a"),
        ('C', "#dc2626"),
    ];

    for (letter, background) in palette {
        let config = IconConfig {
            size: 128,
            glyph: letter,
            background: background.parse()?,
            out: format!("target/badges/{}.png", letter.to_lowercase()).into(),
            ..Default::default()
        };

        let icon = iconforge::generate(&config)?;
        println!(
            "{} -> {} ({} bytes, sha256 {})",
            letter,
            config.out.display(),
            icon.png_data.len(),
            icon.sha256_hex()
        );
    }

    println!("Done!");
    Ok(())
}
