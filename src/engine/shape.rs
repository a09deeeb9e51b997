use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A polyomino with its assigned fill color. Cells are kept normalized:
/// minimum x and y are both zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub color: Rgb,
    pub cells: Vec<(i32, i32)>,
}

impl Shape {
    pub fn new(name: &'static str, cells: &[(i32, i32)], color: Rgb) -> Self {
        Self {
            name,
            color,
            cells: normalize(cells),
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            name: self.name,
            color: self.color,
            cells: rotate90(&self.cells),
        }
    }

    pub fn flipped(&self) -> Self {
        Self {
            name: self.name,
            color: self.color,
            cells: flip_horizontal(&self.cells),
        }
    }

    /// Bounding box as (width, height) in cells.
    pub fn bounding(&self) -> (i32, i32) {
        let max_x = self.cells.iter().map(|c| c.0).max();
        let max_y = self.cells.iter().map(|c| c.1).max();
        match (max_x, max_y) {
            (Some(x), Some(y)) => (x + 1, y + 1),
            _ => (0, 0),
        }
    }
}

/// Translate cells so the minimum x and y are both zero. Cell order is
/// preserved; an empty list stays empty.
pub fn normalize(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let Some(min_x) = cells.iter().map(|c| c.0).min() else {
        return Vec::new();
    };
    let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
    cells.iter().map(|&(x, y)| (x - min_x, y - min_y)).collect()
}

/// Quarter turn: (x, y) -> (y, -x), then re-normalized.
pub fn rotate90(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let rotated: Vec<(i32, i32)> = cells.iter().map(|&(x, y)| (y, -x)).collect();
    normalize(&rotated)
}

/// Mirror across the vertical axis: (x, y) -> (-x, y), then re-normalized.
pub fn flip_horizontal(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let flipped: Vec<(i32, i32)> = cells.iter().map(|&(x, y)| (-x, y)).collect();
    normalize(&flipped)
}

/// Apply 0-3 quarter turns, then a mirror with probability one half. The
/// mirror draw happens on every call, independent of the turn count.
pub fn random_orientation(shape: &Shape, rng: &mut impl Rng) -> Shape {
    let mut oriented = shape.clone();
    for _ in 0..rng.gen_range(0..4) {
        oriented = oriented.rotated();
    }
    if rng.gen_bool(0.5) {
        oriented = oriented.flipped();
    }
    oriented
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::engine::catalog::CATALOG;

    fn sorted(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
        let mut out = cells.to_vec();
        out.sort_unstable();
        out
    }

    #[test]
    fn test_normalize_shifts_to_origin() {
        let cells = normalize(&[(2, 3), (3, 3), (3, 4)]);
        assert_eq!(cells, vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_normalize_is_idempotent_over_catalog() {
        for def in CATALOG {
            let once = normalize(def.cells);
            assert_eq!(normalize(&once), once, "{}", def.name);
            assert_eq!(once.iter().map(|c| c.0).min(), Some(0), "{}", def.name);
            assert_eq!(once.iter().map(|c| c.1).min(), Some(0), "{}", def.name);
        }
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_rotate90_turns_row_into_column() {
        let row = [(0, 0), (1, 0), (2, 0)];
        let turned = rotate90(&row);
        assert_eq!(sorted(&turned), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn test_four_rotations_restore_every_shape() {
        for def in CATALOG {
            let mut cells = normalize(def.cells);
            for _ in 0..4 {
                cells = rotate90(&cells);
            }
            assert_eq!(sorted(&cells), sorted(&normalize(def.cells)), "{}", def.name);
        }
    }

    #[test]
    fn test_double_flip_restores_every_shape() {
        for def in CATALOG {
            let cells = flip_horizontal(&flip_horizontal(def.cells));
            assert_eq!(sorted(&cells), sorted(&normalize(def.cells)), "{}", def.name);
        }
    }

    #[test]
    fn test_bounding_box() {
        let shape = Shape::new("t", &[(0, 0), (0, 1), (0, 2), (1, 2)], Rgb(1, 2, 3));
        assert_eq!(shape.bounding(), (2, 3));
        let empty = Shape::new("e", &[], Rgb(0, 0, 0));
        assert_eq!(empty.bounding(), (0, 0));
    }

    #[test]
    fn test_random_orientation_is_seed_stable() {
        let shape = Shape::new("s", &[(1, 0), (2, 0), (0, 1), (1, 1)], Rgb(9, 9, 9));
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                random_orientation(&shape, &mut a),
                random_orientation(&shape, &mut b)
            );
        }
    }

    #[test]
    fn test_random_orientation_keeps_cells_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        for def in CATALOG {
            let shape = Shape::new(def.name, def.cells, Rgb(0, 0, 0));
            let oriented = random_orientation(&shape, &mut rng);
            assert_eq!(oriented.cells.len(), shape.cells.len(), "{}", def.name);
            assert_eq!(oriented.name, shape.name);
            assert_eq!(oriented.color, shape.color);
            assert_eq!(oriented.cells.iter().map(|c| c.0).min(), Some(0));
            assert_eq!(oriented.cells.iter().map(|c| c.1).min(), Some(0));
        }
    }
}
