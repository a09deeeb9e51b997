pub mod app;
pub mod config;
pub mod engine;
pub mod ui;

pub use config::{
    BOARD_MAX, BOARD_MIN, CELL_W, DEFAULT_BOARD, DEFAULT_DENSITY_IDX, DENSITY_STEPS,
    INNER_ATTEMPTS, MAX_ATTEMPTS, PALETTE, SEED_ENV,
};
pub use engine::{
    shape_named, shapes_for_class, Board, Cell, ColorPicker, ColorPolicy, FillConfig, Placement,
    Placer, Rgb, RunStatus, SelectionMode, Shape, ShapeClass, ShapeDef, ShapePicker, CATALOG,
};
