use rand::Rng;

use super::board::Board;
use super::catalog::ShapeDef;
use super::colors::{ColorPicker, ColorPolicy};
use super::select::{SelectionMode, ShapePicker};
use super::shape::{random_orientation, Rgb, Shape};

/// Inputs for one fill run.
#[derive(Clone, Debug)]
pub struct FillConfig {
    pub cols: usize,
    pub rows: usize,
    /// Fraction of board squares to cover, in (0, 1).
    pub density: f64,
    pub selection: SelectionMode,
    pub colors: ColorPolicy,
    /// Outer budget: one attempt per shape draw.
    pub max_attempts: u32,
    /// Anchor tries per drawn shape.
    pub inner_attempts: u32,
}

/// One committed placement, recorded in placement order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub shape: Shape,
    pub anchor: (i32, i32),
    /// Absolute board squares the shape covers.
    pub cells: Vec<(i32, i32)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Ready,
    Running,
    TargetReached,
    AttemptsExhausted,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::TargetReached | RunStatus::AttemptsExhausted)
    }

    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Ready => "ready",
            RunStatus::Running => "running",
            RunStatus::TargetReached => "target reached",
            RunStatus::AttemptsExhausted => "attempts exhausted",
        }
    }
}

/// Bounded randomized filler. Each attempt draws a shape, colors and orients
/// it, then tries random anchors until one fits or the inner budget runs out.
/// Committed placements stay; there is no backtracking.
pub struct Placer {
    board: Board,
    shapes: Vec<ShapeDef>,
    picker: ShapePicker,
    colors: ColorPicker,
    target: usize,
    max_attempts: u32,
    inner_attempts: u32,
    attempts: u32,
    placed_count: usize,
    occupied_cells: usize,
    placements: Vec<Placement>,
    status: RunStatus,
}

impl Placer {
    pub fn new(
        cfg: &FillConfig,
        shapes: Vec<ShapeDef>,
        palette: &[Rgb],
        rng: &mut impl Rng,
    ) -> Self {
        let target = (cfg.cols as f64 * cfg.rows as f64 * cfg.density).ceil() as usize;
        Self {
            board: Board::new(cfg.cols, cfg.rows),
            shapes,
            picker: ShapePicker::new(cfg.selection),
            colors: ColorPicker::new(cfg.colors, palette, rng),
            target,
            max_attempts: cfg.max_attempts,
            inner_attempts: cfg.inner_attempts,
            attempts: 0,
            placed_count: 0,
            occupied_cells: 0,
            placements: Vec::new(),
            status: RunStatus::Ready,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    pub fn occupied_cells(&self) -> usize {
        self.occupied_cells
    }

    /// One outer attempt. Returns false once the run has reached a terminal
    /// status; counters are consistent between calls.
    pub fn step(&mut self, rng: &mut impl Rng) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        if self.shapes.is_empty() {
            self.status = RunStatus::AttemptsExhausted;
            return false;
        }
        if self.occupied_cells >= self.target {
            self.status = RunStatus::TargetReached;
            return false;
        }
        if self.attempts >= self.max_attempts {
            self.status = RunStatus::AttemptsExhausted;
            return false;
        }
        self.status = RunStatus::Running;
        self.attempts += 1;

        let idx = self.picker.next(self.shapes.len(), rng).unwrap_or(0);
        let def = self.shapes[idx];
        let color = self.colors.pick(def.name, rng);
        let shape = random_orientation(&Shape::new(def.name, def.cells, color), rng);

        let (w, h) = shape.bounding();
        let max_gx = self.board.cols as i32 - w;
        let max_gy = self.board.rows as i32 - h;
        if max_gx < 0 || max_gy < 0 {
            // Oriented shape does not fit the board at all; the attempt is spent.
            return true;
        }

        for _ in 0..self.inner_attempts {
            let gx = rng.gen_range(0..=max_gx);
            let gy = rng.gen_range(0..=max_gy);
            if self.board.can_place(&shape, gx, gy) {
                self.board.place(&shape, gx, gy);
                self.placed_count += 1;
                self.occupied_cells += shape.cells.len();
                let cells = shape.cells.iter().map(|&(x, y)| (gx + x, gy + y)).collect();
                self.placements.push(Placement {
                    shape,
                    anchor: (gx, gy),
                    cells,
                });
                break;
            }
        }
        true
    }

    /// Drive the run to a terminal status.
    pub fn run(&mut self, rng: &mut impl Rng) -> RunStatus {
        while self.step(rng) {}
        self.status
    }
}
