use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::shape::Rgb;

/// How placements are colored within a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Every shape name keeps one color for the whole run.
    Unique,
    /// Fresh uniform draw per placement.
    Random,
    /// One color drawn at run start, shared by all placements.
    Same,
}

impl ColorPolicy {
    pub const ALL: [ColorPolicy; 3] = [ColorPolicy::Unique, ColorPolicy::Random, ColorPolicy::Same];

    pub fn label(self) -> &'static str {
        match self {
            ColorPolicy::Unique => "unique",
            ColorPolicy::Random => "random",
            ColorPolicy::Same => "same",
        }
    }

    pub fn from_token(token: &str) -> Option<ColorPolicy> {
        match token.trim().to_lowercase().as_str() {
            "u" | "unique" => Some(ColorPolicy::Unique),
            "r" | "random" => Some(ColorPolicy::Random),
            "s" | "same" => Some(ColorPolicy::Same),
            _ => None,
        }
    }
}

/// Per-run color state. Built fresh for each run, so unique assignments
/// from an earlier run never carry over.
pub struct ColorPicker {
    policy: ColorPolicy,
    palette: Vec<Rgb>,
    pool: Vec<Rgb>,
    by_name: HashMap<&'static str, Rgb>,
    shared: Rgb,
}

impl ColorPicker {
    pub fn new(policy: ColorPolicy, palette: &[Rgb], rng: &mut impl Rng) -> Self {
        let mut pool = Vec::new();
        if policy == ColorPolicy::Unique {
            pool = palette.to_vec();
            pool.shuffle(rng);
        }
        let shared = match policy {
            ColorPolicy::Same => palette.choose(rng).copied().unwrap_or_default(),
            _ => Rgb::default(),
        };
        Self {
            policy,
            palette: palette.to_vec(),
            pool,
            by_name: HashMap::new(),
            shared,
        }
    }

    pub fn pick(&mut self, name: &'static str, rng: &mut impl Rng) -> Rgb {
        match self.policy {
            ColorPolicy::Unique => {
                if let Some(&color) = self.by_name.get(name) {
                    return color;
                }
                if self.pool.is_empty() {
                    // More distinct names than palette entries: reshuffle and reuse.
                    self.pool = self.palette.clone();
                    self.pool.shuffle(rng);
                }
                let color = self.pool.pop().unwrap_or_default();
                self.by_name.insert(name, color);
                color
            }
            ColorPolicy::Random => self.palette.choose(rng).copied().unwrap_or_default(),
            ColorPolicy::Same => self.shared,
        }
    }
}
