/// Opaque display colour. Physics never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

/// Colours of the three bodies placed at start-up.
pub const SEED_COLORS: [Rgb; 3] = [
    Rgb::new(116, 148, 196),
    Rgb::new(106, 77, 97),
    Rgb::new(195, 212, 7),
];

/// Colours handed out to bodies spawned after start-up.
pub const SPAWN_COLORS: [Rgb; 7] = [
    Rgb::new(217, 237, 146),
    Rgb::new(93, 115, 126),
    Rgb::new(30, 96, 145),
    Rgb::new(62, 63, 63),
    Rgb::new(143, 45, 86),
    Rgb::new(116, 0, 184),
    Rgb::new(56, 4, 14),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub seed: Vec<Rgb>,
    pub spawn: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            seed: SEED_COLORS.to_vec(),
            spawn: SPAWN_COLORS.to_vec(),
        }
    }
}

impl Palette {
    /// Colour for the body that will become number `body_count` (zero based).
    ///
    /// The first `seed.len()` bodies take the seed colours in order. Later
    /// bodies index the spawn colours with `body_count - seed.len()`, wrapping
    /// around once the spawn list is exhausted.
    pub fn color_for(&self, body_count: usize) -> Rgb {
        if body_count < self.seed.len() {
            return self.seed[body_count];
        }
        if self.spawn.is_empty() {
            return self.seed.last().copied().unwrap_or(Rgb::new(255, 255, 255));
        }
        self.spawn[(body_count - self.seed.len()) % self.spawn.len()]
    }
}
