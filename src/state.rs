// Per-card and page-level UI state.
//
// These types hold no DOM handles. The card view reads them after every
// transition and writes the derived values back as inline styles.

use crate::constants::{GLARE_OPACITY_HOVER, GLARE_OPACITY_REST, GLARE_REST_X, GLARE_REST_Y};
use crate::tilt::{map_pointer, PointerSample, TiltConfig};

/// Rotation angles in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltState {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlareState {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl Default for GlareState {
    fn default() -> Self {
        Self {
            x: GLARE_REST_X,
            y: GLARE_REST_Y,
            opacity: GLARE_OPACITY_REST,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// What the front face must do with its overlay nodes after a holo change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoloChange {
    Mount,
    Unmount,
    Keep,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardUiState {
    pub hovering: bool,
    pub flipped: bool,
    pub holo_enabled: bool,
    pub tilt: TiltState,
    pub glare: GlareState,
}

impl Default for CardUiState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CardUiState {
    pub fn new(holo_enabled: bool) -> Self {
        Self {
            hovering: false,
            flipped: false,
            holo_enabled,
            tilt: TiltState::default(),
            glare: GlareState::default(),
        }
    }

    /// Holo only touches the overlay; hover, flip and tilt carry over.
    pub fn set_holo(&mut self, enabled: bool) -> HoloChange {
        let change = match (self.holo_enabled, enabled) {
            (false, true) => HoloChange::Mount,
            (true, false) => HoloChange::Unmount,
            _ => HoloChange::Keep,
        };
        self.holo_enabled = enabled;
        change
    }

    pub fn pointer_enter(&mut self) {
        self.hovering = true;
    }

    /// Returns false when the sample was dropped because the card is idle.
    pub fn pointer_move(&mut self, sample: PointerSample, config: &TiltConfig) -> bool {
        if !self.hovering {
            return false;
        }
        let t = map_pointer(sample, config);
        self.tilt = TiltState {
            x: t.rotate_x,
            y: t.rotate_y,
        };
        self.glare = GlareState {
            x: t.glare_x,
            y: t.glare_y,
            opacity: GLARE_OPACITY_HOVER,
        };
        true
    }

    /// Snap back: tilt to zero and glare hidden. The glare position is kept
    /// so the fade-out happens in place.
    pub fn pointer_leave(&mut self) {
        self.hovering = false;
        self.tilt = TiltState::default();
        self.glare.opacity = GLARE_OPACITY_REST;
    }

    pub fn toggle_flip(&mut self) -> Face {
        self.flipped = !self.flipped;
        self.face()
    }

    #[inline]
    pub fn face(&self) -> Face {
        if self.flipped {
            Face::Back
        } else {
            Face::Front
        }
    }

    #[inline]
    pub fn scale(&self, config: &TiltConfig) -> f32 {
        if self.hovering {
            config.scale_on_hover
        } else {
            1.0
        }
    }

    #[inline]
    pub fn glare_opacity(&self) -> f32 {
        if self.hovering && self.holo_enabled {
            self.glare.opacity
        } else {
            GLARE_OPACITY_REST
        }
    }
}

/// Page-owned state shared read-only with every card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub holo_enabled: bool,
    pub active_id: Option<u32>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            holo_enabled: true,
            active_id: None,
        }
    }
}

impl PageState {
    pub fn toggle_holo(&mut self) -> bool {
        self.holo_enabled = !self.holo_enabled;
        self.holo_enabled
    }

    pub fn set_active(&mut self, id: Option<u32>) {
        self.active_id = id;
    }
}
