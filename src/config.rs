// Shared board/menu constants and the fill palette.
use crate::engine::Rgb;

pub const BOARD_MIN: usize = 6;
pub const BOARD_MAX: usize = 24;
pub const DEFAULT_BOARD: usize = 20;

// Coverage fractions offered by the menu, densest first.
pub const DENSITY_STEPS: &[f64] = &[0.35, 0.30, 0.25, 0.20, 0.15, 0.10];
pub const DEFAULT_DENSITY_IDX: usize = 2; // 25%

pub const MAX_ATTEMPTS: u32 = 8000; // outer budget: shape draws per run
pub const INNER_ATTEMPTS: u32 = 200; // anchor tries per drawn shape

pub const CELL_W: usize = 2; // render each board square as two characters wide

// Fixing this env var to an integer makes runs reproducible.
pub const SEED_ENV: &str = "POLYPACK_SEED";

// Checkerboard backdrop for empty squares.
pub const LIGHT_SQUARE: Rgb = Rgb(255, 255, 240);
pub const DARK_SQUARE: Rgb = Rgb(232, 200, 150);

pub const PALETTE: &[Rgb] = &[
    Rgb(0, 0, 128),
    Rgb(0, 0, 255),
    Rgb(0, 64, 64),
    Rgb(0, 64, 192),
    Rgb(0, 128, 0),
    Rgb(0, 128, 128),
    Rgb(0, 128, 192),
    Rgb(0, 128, 255),
    Rgb(0, 192, 0),
    Rgb(0, 192, 192),
    Rgb(0, 192, 255),
    Rgb(0, 255, 0),
    Rgb(0, 255, 128),
    Rgb(0, 255, 255),
    Rgb(128, 0, 0),
    Rgb(128, 0, 128),
    Rgb(128, 0, 192),
    Rgb(128, 0, 255),
    Rgb(128, 64, 192),
    Rgb(128, 192, 64),
    Rgb(128, 192, 192),
    Rgb(128, 128, 0),
    Rgb(128, 128, 255),
    Rgb(128, 255, 0),
    Rgb(128, 255, 192),
    Rgb(128, 255, 255),
    Rgb(255, 0, 0),
    Rgb(255, 0, 128),
    Rgb(255, 0, 255),
    Rgb(255, 64, 64),
    Rgb(255, 64, 192),
    Rgb(255, 128, 0),
    Rgb(255, 128, 128),
    Rgb(255, 128, 255),
    Rgb(255, 255, 0),
];
