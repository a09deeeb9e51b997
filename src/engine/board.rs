use super::shape::{Rgb, Shape};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled(Rgb),
}

#[derive(Clone, Debug)]
pub struct Board {
    pub cols: usize,
    pub rows: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Empty; cols * rows],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    /// True when every cell of the shape, anchored at (gx, gy), lands inside
    /// the board on an empty square. Read-only.
    pub fn can_place(&self, shape: &Shape, gx: i32, gy: i32) -> bool {
        for &(x, y) in &shape.cells {
            let tx = gx + x;
            let ty = gy + y;
            if tx < 0 || ty < 0 {
                return false;
            }
            let (xu, yu) = (tx as usize, ty as usize);
            if xu >= self.cols || yu >= self.rows {
                return false;
            }
            if self.get(xu, yu) != Cell::Empty {
                return false;
            }
        }
        true
    }

    /// Write the shape's color into every covered square. Callers check
    /// `can_place` first; there is no per-cell re-check here.
    pub fn place(&mut self, shape: &Shape, gx: i32, gy: i32) {
        debug_assert!(self.can_place(shape, gx, gy));
        for &(x, y) in &shape.cells {
            self.set((gx + x) as usize, (gy + y) as usize, Cell::Filled(shape.color));
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Filled squares as (x, y, color), row-major.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| match cell {
            Cell::Filled(color) => Some((i % self.cols, i / self.cols, *color)),
            Cell::Empty => None,
        })
    }
}
