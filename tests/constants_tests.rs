// Host-side tests for tuning constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MAX_ROTATION_DEG > 0.0 && MAX_ROTATION_DEG < 90.0);
    assert!(PERSPECTIVE_PX > 0.0);
    assert!(SCALE_ON_HOVER >= 1.0);
    assert!(GLARE_OPACITY_HOVER > GLARE_OPACITY_REST);
    assert_eq!(GLARE_OPACITY_REST, 0.0);
    assert!((0.0..=100.0).contains(&GLARE_REST_X));
    assert!((0.0..=100.0).contains(&GLARE_REST_Y));
}

#[test]
fn serial_alphabet_is_base36() {
    assert_eq!(SERIAL_ALPHABET.len(), 36);
    assert!(SERIAL_LEN > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn card_box_is_portrait() {
    assert!(CARD_HEIGHT_PX > CARD_WIDTH_PX);
    assert!(IMAGE_SIZE.1 > IMAGE_SIZE.0);
}

#[test]
fn included_sources_have_no_inner_doc_comments() {
    // these files are pulled into test modules with include!
    let sources = [
        include_str!("../src/constants.rs"),
        include_str!("../src/tilt.rs"),
        include_str!("../src/state.rs"),
        include_str!("../src/data.rs"),
        include_str!("../src/view.rs"),
    ];
    for src in sources {
        assert!(!src.lines().any(|l| l.trim_start().starts_with("//!")));
        assert!(!src.lines().any(|l| l.trim_start().starts_with("#![")));
    }
}
