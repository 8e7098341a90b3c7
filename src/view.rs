// Declarative description of what each card face contains.
//
// The DOM builders in `card` and `overlay` create exactly the nodes listed
// here, which keeps "which layers exist" testable on the host.

use crate::constants::{SPEED_READOUT, SYNC_READOUT};
use crate::data::{power_readout, shield_readout, Stats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontLayer {
    Image,
    Shade,
    Content,
    FlipButton,
    // holographic overlays
    Glare,
    Sheen,
    Noise,
}

impl FrontLayer {
    pub const HOLO: [FrontLayer; 3] = [FrontLayer::Glare, FrontLayer::Sheen, FrontLayer::Noise];

    #[inline]
    pub fn is_holo(self) -> bool {
        matches!(self, FrontLayer::Glare | FrontLayer::Sheen | FrontLayer::Noise)
    }

    pub fn class_name(self) -> &'static str {
        match self {
            FrontLayer::Image => "card-image",
            FrontLayer::Shade => "card-shade",
            FrontLayer::Content => "card-content",
            FrontLayer::FlipButton => "flip-btn",
            FrontLayer::Glare => "holo-glare",
            FrontLayer::Sheen => "holo-sheen",
            FrontLayer::Noise => "holo-noise",
        }
    }
}

/// Front-face layers bottom to top.
pub fn front_layers(holo_enabled: bool) -> Vec<FrontLayer> {
    let mut layers = vec![
        FrontLayer::Image,
        FrontLayer::Shade,
        FrontLayer::Content,
        FrontLayer::FlipButton,
    ];
    if holo_enabled {
        layers.extend_from_slice(&FrontLayer::HOLO);
    }
    layers
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    pub label: &'static str,
    pub value: String,
    pub accent: bool,
}

pub fn back_readouts(stats: Option<Stats>) -> [Readout; 4] {
    [
        Readout {
            label: "POWER",
            value: power_readout(stats),
            accent: false,
        },
        Readout {
            label: "SHIELD",
            value: shield_readout(stats),
            accent: false,
        },
        Readout {
            label: "SPEED",
            value: SPEED_READOUT.to_string(),
            accent: false,
        },
        Readout {
            label: "SYNC",
            value: SYNC_READOUT.to_string(),
            accent: true,
        },
    ]
}

pub const LORE: &str = "Warning: Entity exhibits high-level kinetic potential. \
Recommended containment protocols apply. Origin detected from Sector 7. \
Memory core fragments suggest ancient combat algorithms.";

#[inline]
pub fn holo_toggle_label(holo_enabled: bool) -> &'static str {
    if holo_enabled {
        "Holographic ON"
    } else {
        "Holographic OFF"
    }
}
