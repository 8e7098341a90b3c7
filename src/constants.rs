// Feel of the card: tilt limits, glare rest pose, back-face readouts.
// Everything is compile-time; there is no runtime config.

// Tilt
pub const MAX_ROTATION_DEG: f32 = 18.0; // per-axis rotation cap
pub const PERSPECTIVE_PX: f32 = 1000.0;
pub const SCALE_ON_HOVER: f32 = 1.05;

// Glare rest state (percent, percent, opacity)
pub const GLARE_REST_X: f32 = 50.0;
pub const GLARE_REST_Y: f32 = 50.0;
pub const GLARE_OPACITY_HOVER: f32 = 1.0;
pub const GLARE_OPACITY_REST: f32 = 0.0;

// Card box (CSS px)
pub const CARD_WIDTH_PX: u32 = 300;
pub const CARD_HEIGHT_PX: u32 = 420;

// Back-face readouts
pub const POWER_PER_ATK: u32 = 12;
pub const SHIELD_PER_DEF: u32 = 8;
pub const STAT_PLACEHOLDER: &str = "---";
pub const SPEED_READOUT: &str = "820ms";
pub const SYNC_READOUT: &str = "98.4%";

// Back-face serial id
pub const SERIAL_LEN: usize = 9;
pub const SERIAL_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Page
pub const MOUNT_ID: &str = "app";
pub const IMAGE_SIZE: (u32, u32) = (600, 800);
