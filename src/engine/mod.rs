pub mod board;
pub mod catalog;
pub mod colors;
pub mod place;
pub mod select;
pub mod shape;

pub use board::{Board, Cell};
pub use catalog::{shape_named, shapes_for_class, ShapeClass, ShapeDef, CATALOG};
pub use colors::{ColorPicker, ColorPolicy};
pub use place::{FillConfig, Placement, Placer, RunStatus};
pub use select::{SelectionMode, ShapePicker};
pub use shape::{flip_horizontal, normalize, random_orientation, rotate90, Rgb, Shape};
