use crate::constants::{
    IMAGE_SIZE, POWER_PER_ATK, SERIAL_ALPHABET, SERIAL_LEN, SHIELD_PER_DEF, STAT_PLACEHOLDER,
};
use rand::Rng;

// Static card fixtures and the text derived from them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    BluePurple,
    EmeraldCyan,
    RoseOrange,
}

impl Palette {
    /// Border gradient behind both faces.
    pub fn css_gradient(self) -> &'static str {
        match self {
            Palette::BluePurple => "linear-gradient(to bottom right, #3b82f6, #9333ea)",
            Palette::EmeraldCyan => "linear-gradient(to bottom right, #34d399, #0891b2)",
            Palette::RoseOrange => "linear-gradient(to bottom right, #f43f5e, #ea580c)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub atk: u32,
    pub def: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardRecord {
    pub id: u32,
    pub title: &'static str,
    pub rarity: &'static str,
    pub image: &'static str,
    pub palette: Palette,
    pub stats: Option<Stats>,
}

pub const CARDS: [CardRecord; 3] = [
    CardRecord {
        id: 1,
        title: "Cyber Samurai",
        rarity: "Ultra Rare",
        image: "https://picsum.photos/id/237/600/800",
        palette: Palette::BluePurple,
        stats: Some(Stats { atk: 85, def: 60 }),
    },
    CardRecord {
        id: 2,
        title: "Neon City",
        rarity: "Legendary",
        image: "https://picsum.photos/id/122/600/800",
        palette: Palette::EmeraldCyan,
        stats: Some(Stats { atk: 40, def: 95 }),
    },
    CardRecord {
        id: 3,
        title: "Void Walker",
        rarity: "Secret",
        image: "https://picsum.photos/id/250/600/800",
        palette: Palette::RoseOrange,
        stats: Some(Stats { atk: 99, def: 20 }),
    },
];

impl CardRecord {
    /// Seeded placeholder art; only the first space of the title is dropped.
    pub fn image_src(&self) -> String {
        let seed = self.title.replacen(' ', "", 1);
        format!(
            "https://picsum.photos/seed/{}/{}/{}",
            seed, IMAGE_SIZE.0, IMAGE_SIZE.1
        )
    }
}

pub fn power_readout(stats: Option<Stats>) -> String {
    match stats {
        Some(s) => (u64::from(s.atk) * u64::from(POWER_PER_ATK)).to_string(),
        None => STAT_PLACEHOLDER.to_string(),
    }
}

pub fn shield_readout(stats: Option<Stats>) -> String {
    match stats {
        Some(s) => (u64::from(s.def) * u64::from(SHIELD_PER_DEF)).to_string(),
        None => STAT_PLACEHOLDER.to_string(),
    }
}

pub fn serial_id<R: Rng>(rng: &mut R) -> String {
    (0..SERIAL_LEN)
        .map(|_| SERIAL_ALPHABET[rng.gen_range(0..SERIAL_ALPHABET.len())] as char)
        .collect()
}
