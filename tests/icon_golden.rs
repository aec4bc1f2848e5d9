use std::fs;
use std::path::PathBuf;

use iconforge::{render, IconConfig};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_default_icon_matches_fixture() {
    let icon = render(&IconConfig::default()).expect("render default icon");

    let expected_path = golden_path("default_icon.img");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        // write hex of the PNG bytes
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, hex::encode(&icon.png_data)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    let exp_bytes = hex::decode(exp.trim()).expect("invalid hex in golden");
    assert_eq!(icon.png_data, exp_bytes);
}

#[test]
fn rendering_is_deterministic() {
    let a = render(&IconConfig::default()).expect("first render");
    let b = render(&IconConfig::default()).expect("second render");
    assert_eq!(a.png_data, b.png_data);
    assert_eq!(a.sha256_hex(), b.sha256_hex());
}

#[test]
fn fallback_render_is_deterministic() {
    let config = IconConfig {
        glyph: '@',
        ..Default::default()
    };
    let a = render(&config).expect("first render");
    let b = render(&config).expect("second render");
    assert_eq!(a.sha256_hex(), b.sha256_hex());
}
