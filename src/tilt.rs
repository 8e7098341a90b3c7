// Pointer-to-transform mapping for a single card.
//
// Everything here is a pure function of its inputs so it can be exercised on
// the host without a browser. The DOM layer samples the pointer and the
// card's bounding rect, then feeds them through `normalize_pointer` and
// `map_pointer`.

use crate::constants::{MAX_ROTATION_DEG, PERSPECTIVE_PX, SCALE_ON_HOVER};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_rotation_deg: f32,
    pub perspective_px: f32,
    pub scale_on_hover: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rotation_deg: MAX_ROTATION_DEG,
            perspective_px: PERSPECTIVE_PX,
            scale_on_hover: SCALE_ON_HOVER,
        }
    }
}

/// Bounding box of the tilt container in client (CSS px) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Pointer position normalized to the card box; both axes in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub u: f32,
    pub v: f32,
}

impl PointerSample {
    pub const CENTER: PointerSample = PointerSample { u: 0.5, v: 0.5 };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformParams {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub glare_x: f32,
    pub glare_y: f32,
}

/// Samples outside the box are clamped so the rotation cap always holds.
#[inline]
pub fn normalize_pointer(client: Vec2, rect: &CardRect) -> PointerSample {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return PointerSample::CENTER;
    }
    let u = (client.x - rect.left) / rect.width;
    let v = (client.y - rect.top) / rect.height;
    if !u.is_finite() || !v.is_finite() {
        return PointerSample::CENTER;
    }
    PointerSample {
        u: u.clamp(0.0, 1.0),
        v: v.clamp(0.0, 1.0),
    }
}

#[inline]
pub fn map_pointer(sample: PointerSample, config: &TiltConfig) -> TransformParams {
    let max = config.max_rotation_deg;
    TransformParams {
        // vertical axis is inverted: the top edge tips away when the pointer is above center
        rotate_x: -(sample.v - 0.5) * 2.0 * max,
        rotate_y: (sample.u - 0.5) * 2.0 * max,
        glare_x: sample.u * 100.0,
        glare_y: sample.v * 100.0,
    }
}

// ---------------- CSS formatting ----------------

pub fn tilt_transform_css(rotate_x: f32, rotate_y: f32, scale: f32) -> String {
    format!(
        "rotateX({:.3}deg) rotateY({:.3}deg) scale3d({}, {}, 1)",
        rotate_x, rotate_y, scale, scale
    )
}

pub fn perspective_css(config: &TiltConfig) -> String {
    format!("{}px", config.perspective_px)
}

#[inline]
pub fn flip_transform_css(flipped: bool) -> &'static str {
    if flipped {
        "rotateY(180deg)"
    } else {
        "rotateY(0deg)"
    }
}

pub fn glare_gradient_css(glare_x: f32, glare_y: f32) -> String {
    format!(
        "radial-gradient(circle at {:.2}% {:.2}%, rgba(255, 255, 255, 0.8) 0%, rgba(255, 255, 255, 0.1) 30%, rgba(255, 255, 255, 0) 60%)",
        glare_x, glare_y
    )
}

pub fn sheen_position_css(glare_x: f32, glare_y: f32) -> String {
    format!("{:.2}% {:.2}%", glare_x, glare_y)
}
