/// One catalog entry: a named polyomino as raw cell offsets.
#[derive(Clone, Copy, Debug)]
pub struct ShapeDef {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

/// Family filter over the catalog, keyed by name prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeClass {
    Tri,
    Tet,
    Pen,
    Hex,
    Mixed,
}

impl ShapeClass {
    pub const ALL: [ShapeClass; 5] = [
        ShapeClass::Tri,
        ShapeClass::Tet,
        ShapeClass::Pen,
        ShapeClass::Hex,
        ShapeClass::Mixed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeClass::Tri => "triomino",
            ShapeClass::Tet => "tetromino",
            ShapeClass::Pen => "pentomino",
            ShapeClass::Hex => "hexomino",
            ShapeClass::Mixed => "mixed",
        }
    }

    fn prefix(self) -> Option<&'static str> {
        match self {
            ShapeClass::Tri => Some("tri-"),
            ShapeClass::Tet => Some("tet-"),
            ShapeClass::Pen => Some("pen-"),
            ShapeClass::Hex => Some("hex-"),
            ShapeClass::Mixed => None,
        }
    }

    pub fn from_token(token: &str) -> Option<ShapeClass> {
        match token.trim().to_lowercase().as_str() {
            "tri" | "triomino" | "3" => Some(ShapeClass::Tri),
            "tet" | "tetromino" | "4" => Some(ShapeClass::Tet),
            "pen" | "pentomino" | "5" => Some(ShapeClass::Pen),
            "hex" | "hexomino" | "6" => Some(ShapeClass::Hex),
            "mix" | "mixed" | "all" => Some(ShapeClass::Mixed),
            _ => None,
        }
    }
}

/// Entries matching the class, in catalog order. `Mixed` returns everything.
pub fn shapes_for_class(class: ShapeClass) -> Vec<ShapeDef> {
    match class.prefix() {
        Some(prefix) => CATALOG
            .iter()
            .copied()
            .filter(|def| def.name.starts_with(prefix))
            .collect(),
        None => CATALOG.to_vec(),
    }
}

pub fn shape_named(name: &str) -> Option<ShapeDef> {
    CATALOG.iter().copied().find(|def| def.name == name)
}

pub const CATALOG: &[ShapeDef] = &[
    ShapeDef { name: "tri-I", cells: &[(0, 0), (1, 0), (2, 0)] },
    ShapeDef { name: "tri-L", cells: &[(0, 0), (0, 1), (1, 1)] },
    ShapeDef { name: "tet-I", cells: &[(0, 0), (0, 1), (0, 2), (0, 3)] },
    ShapeDef { name: "tet-L", cells: &[(0, 0), (0, 1), (0, 2), (1, 2)] },
    ShapeDef { name: "tet-O", cells: &[(0, 0), (1, 0), (0, 1), (1, 1)] },
    ShapeDef { name: "tet-S", cells: &[(1, 0), (2, 0), (0, 1), (1, 1)] },
    ShapeDef { name: "tet-T", cells: &[(0, 1), (1, 1), (2, 1), (1, 0)] },
    ShapeDef { name: "pen-F", cells: &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 2)] },
    ShapeDef { name: "pen-I", cells: &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)] },
    ShapeDef { name: "pen-L", cells: &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 0)] },
    ShapeDef { name: "pen-N", cells: &[(0, 0), (0, 1), (1, 1), (1, 2), (1, 3)] },
    ShapeDef { name: "pen-P", cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] },
    ShapeDef { name: "pen-T", cells: &[(0, 2), (1, 2), (2, 2), (1, 0), (1, 1)] },
    ShapeDef { name: "pen-U", cells: &[(0, 0), (0, 1), (1, 0), (2, 0), (2, 1)] },
    ShapeDef { name: "pen-V", cells: &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)] },
    ShapeDef { name: "pen-W", cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 0)] },
    ShapeDef { name: "pen-X", cells: &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)] },
    ShapeDef { name: "pen-Y", cells: &[(0, 2), (1, 0), (1, 1), (1, 2), (1, 3)] },
    ShapeDef { name: "pen-Z", cells: &[(0, 2), (1, 0), (1, 1), (1, 2), (2, 0)] },
    ShapeDef { name: "hex-01", cells: &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)] },
    ShapeDef { name: "hex-02", cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)] },
    ShapeDef { name: "hex-03", cells: &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1)] },
    ShapeDef { name: "hex-04", cells: &[(0, 0), (1, 0), (2, 0), (2, 1), (3, 0), (4, 0)] },
    ShapeDef { name: "hex-05", cells: &[(0, 1), (1, 1), (2, 1), (3, 0), (3, 1), (4, 0)] },
    ShapeDef { name: "hex-06", cells: &[(0, 1), (1, 1), (2, 0), (2, 1), (3, 0), (4, 0)] },
    ShapeDef { name: "hex-07", cells: &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (4, 0)] },
    ShapeDef { name: "hex-08", cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 1), (3, 1)] },
    ShapeDef { name: "hex-09", cells: &[(0, 0), (0, 1), (1, 0), (2, 0), (3, 0), (3, 1)] },
    ShapeDef { name: "hex-10", cells: &[(0, 1), (1, 0), (1, 1), (2, 0), (3, 0), (3, 1)] },
    ShapeDef { name: "hex-11", cells: &[(0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0)] },
    ShapeDef { name: "hex-12", cells: &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0)] },
    ShapeDef { name: "hex-13", cells: &[(0, 0), (0, 1), (1, 0), (2, 0), (2, 1), (3, 0)] },
    ShapeDef { name: "hex-14", cells: &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (3, 1)] },
    ShapeDef { name: "hex-15", cells: &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 1), (2, 2)] },
    ShapeDef { name: "hex-16", cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1), (2, 2)] },
    ShapeDef { name: "hex-17", cells: &[(0, 0), (0, 1), (1, 0), (2, 0), (2, 1), (2, 2)] },
    ShapeDef { name: "hex-18", cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 2)] },
    ShapeDef { name: "hex-19", cells: &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)] },
    ShapeDef { name: "hex-20", cells: &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1), (2, 2)] },
    ShapeDef { name: "hex-21", cells: &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)] },
    ShapeDef { name: "hex-22", cells: &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 1)] },
    ShapeDef { name: "hex-23", cells: &[(0, 1), (1, 1), (1, 2), (2, 0), (2, 1), (3, 1)] },
    ShapeDef { name: "hex-24", cells: &[(0, 1), (0, 2), (1, 1), (2, 1), (3, 0), (3, 1)] },
    ShapeDef { name: "hex-25", cells: &[(0, 1), (1, 1), (2, 0), (2, 1), (2, 2), (3, 2)] },
    ShapeDef { name: "hex-26", cells: &[(0, 2), (1, 2), (2, 1), (2, 2), (3, 0), (3, 1)] },
    ShapeDef { name: "hex-27", cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1), (3, 0)] },
    ShapeDef { name: "hex-28", cells: &[(0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (3, 0)] },
    ShapeDef { name: "hex-29", cells: &[(0, 2), (1, 2), (2, 0), (2, 1), (2, 2), (3, 2)] },
    ShapeDef { name: "hex-30", cells: &[(0, 1), (0, 2), (1, 1), (2, 0), (2, 1), (3, 0)] },
    ShapeDef { name: "hex-31", cells: &[(0, 1), (0, 2), (1, 1), (2, 0), (2, 1), (3, 1)] },
    ShapeDef { name: "hex-32", cells: &[(0, 1), (1, 1), (2, 0), (2, 1), (2, 2), (3, 1)] },
    ShapeDef { name: "hex-33", cells: &[(0, 1), (1, 1), (2, 0), (2, 1), (3, 1), (3, 2)] },
    ShapeDef { name: "hex-34", cells: &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0), (3, 0)] },
    ShapeDef { name: "hex-35", cells: &[(0, 1), (1, 1), (2, 1), (3, 0), (3, 1), (3, 2)] },
];
