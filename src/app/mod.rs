use std::env;
use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::{
    BOARD_MAX, BOARD_MIN, DEFAULT_BOARD, DEFAULT_DENSITY_IDX, DENSITY_STEPS, INNER_ATTEMPTS,
    MAX_ATTEMPTS, PALETTE, SEED_ENV,
};
use crate::engine::{
    shapes_for_class, Board, ColorPolicy, FillConfig, Placer, SelectionMode, ShapeClass,
};
use crate::ui::draw_app;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut app = App::new();

    loop {
        terminal.draw(|frame| draw_app(frame, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

pub const MENU_ROWS: usize = 5;

pub struct Menu {
    pub row: usize,
    pub board_size: usize,
    pub shapes: ShapeClass,
    pub density_idx: usize,
    pub colors: ColorPolicy,
    pub selection: SelectionMode,
}

impl Menu {
    fn new() -> Self {
        Self {
            row: 0,
            board_size: DEFAULT_BOARD,
            shapes: ShapeClass::Pen,
            density_idx: DEFAULT_DENSITY_IDX,
            colors: ColorPolicy::Random,
            selection: SelectionMode::Random,
        }
    }

    pub fn density(&self) -> f64 {
        DENSITY_STEPS[self.density_idx]
    }

    pub fn row_label(row: usize) -> &'static str {
        match row {
            0 => "board",
            1 => "shapes",
            2 => "density",
            3 => "colors",
            _ => "select",
        }
    }

    pub fn value_label(&self, row: usize) -> String {
        match row {
            0 => format!("{0} x {0}", self.board_size),
            1 => self.shapes.label().to_string(),
            2 => format!("{}%", (self.density() * 100.0).round() as u32),
            3 => self.colors.label().to_string(),
            _ => self.selection.label().to_string(),
        }
    }

    fn select_prev(&mut self) {
        self.row = (self.row + MENU_ROWS - 1) % MENU_ROWS;
    }

    fn select_next(&mut self) {
        self.row = (self.row + 1) % MENU_ROWS;
    }

    // Left/right wrap around in both directions, like the minus/plus pair.
    fn cycle(&mut self, delta: i32) {
        match self.row {
            0 => {
                let span = (BOARD_MAX - BOARD_MIN + 1) as i32;
                let idx = (self.board_size - BOARD_MIN) as i32;
                self.board_size = BOARD_MIN + (idx + delta).rem_euclid(span) as usize;
            }
            1 => self.shapes = cycled(&ShapeClass::ALL, self.shapes, delta),
            2 => {
                let span = DENSITY_STEPS.len() as i32;
                self.density_idx = (self.density_idx as i32 + delta).rem_euclid(span) as usize;
            }
            3 => self.colors = cycled(&ColorPolicy::ALL, self.colors, delta),
            _ => self.selection = cycled(&SelectionMode::ALL, self.selection, delta),
        }
    }
}

fn cycled<T: Copy + PartialEq>(all: &[T], current: T, delta: i32) -> T {
    let len = all.len() as i32;
    let idx = all.iter().position(|v| *v == current).unwrap_or(0) as i32;
    all[(idx + delta).rem_euclid(len) as usize]
}

pub struct App {
    pub menu: Menu,
    board: Board,
    last_run: Option<Placer>,
    rng: StdRng,
}

impl App {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(),
            board: Board::new(DEFAULT_BOARD, DEFAULT_BOARD),
            last_run: None,
            rng: seeded_rng(),
        }
    }

    /// Board currently on display: the finished layout, or the empty preview
    /// at the selected size.
    pub fn shown_board(&self) -> &Board {
        match &self.last_run {
            Some(placer) => placer.board(),
            None => &self.board,
        }
    }

    pub fn last_run(&self) -> Option<&Placer> {
        self.last_run.as_ref()
    }

    pub fn layout_shown(&self) -> bool {
        self.last_run.is_some()
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.last_run.is_some() {
            // Menu is frozen while a layout is up; only "repeat" works.
            if matches!(code, KeyCode::Enter | KeyCode::Char('r')) {
                self.back_to_menu();
            }
            return;
        }
        match code {
            KeyCode::Up => self.menu.select_prev(),
            KeyCode::Down => self.menu.select_next(),
            KeyCode::Left => {
                self.menu.cycle(-1);
                self.sync_board();
            }
            KeyCode::Right => {
                self.menu.cycle(1);
                self.sync_board();
            }
            KeyCode::Enter => self.start_run(),
            _ => {}
        }
    }

    fn back_to_menu(&mut self) {
        self.last_run = None;
        self.sync_board();
    }

    // Keep the empty preview board at the selected size.
    fn sync_board(&mut self) {
        let size = self.menu.board_size;
        if self.board.cols == size && self.board.rows == size {
            self.board.clear();
        } else {
            self.board = Board::new(size, size);
        }
    }

    fn start_run(&mut self) {
        self.sync_board();
        let cfg = FillConfig {
            cols: self.menu.board_size,
            rows: self.menu.board_size,
            density: self.menu.density(),
            selection: self.menu.selection,
            colors: self.menu.colors,
            max_attempts: MAX_ATTEMPTS,
            inner_attempts: INNER_ATTEMPTS,
        };
        let shapes = shapes_for_class(self.menu.shapes);
        let mut placer = Placer::new(&cfg, shapes, PALETTE, &mut self.rng);
        placer.run(&mut self.rng);
        self.last_run = Some(placer);
    }
}

fn seeded_rng() -> StdRng {
    match env::var(SEED_ENV).ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_defaults() {
        let menu = Menu::new();
        assert_eq!(menu.board_size, 20);
        assert_eq!(menu.shapes, ShapeClass::Pen);
        assert!((menu.density() - 0.25).abs() < 1e-9);
        assert_eq!(menu.colors, ColorPolicy::Random);
        assert_eq!(menu.selection, SelectionMode::Random);
    }

    #[test]
    fn test_menu_board_row_wraps() {
        let mut menu = Menu::new();
        menu.row = 0;
        menu.board_size = BOARD_MAX;
        menu.cycle(1);
        assert_eq!(menu.board_size, BOARD_MIN);
        menu.cycle(-1);
        assert_eq!(menu.board_size, BOARD_MAX);
    }

    #[test]
    fn test_menu_value_cycles_cover_all_variants() {
        let mut menu = Menu::new();
        menu.row = 1;
        let start = menu.shapes;
        for _ in 0..ShapeClass::ALL.len() {
            menu.cycle(1);
        }
        assert_eq!(menu.shapes, start);
        menu.row = 3;
        let start = menu.colors;
        for _ in 0..ColorPolicy::ALL.len() {
            menu.cycle(-1);
        }
        assert_eq!(menu.colors, start);
    }

    #[test]
    fn test_enter_runs_and_repeat_returns_to_menu() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter);
        assert!(app.layout_shown());
        let placer = app.last_run().unwrap();
        assert!(placer.status().is_terminal());
        // Frozen menu: arrows are ignored while the layout is up.
        app.handle_key(KeyCode::Down);
        assert_eq!(app.menu.row, 0);
        app.handle_key(KeyCode::Char('r'));
        assert!(!app.layout_shown());
        assert_eq!(app.shown_board().occupied(), 0);
    }

    #[test]
    fn test_preview_board_tracks_selected_size() {
        let mut app = App::new();
        app.handle_key(KeyCode::Right);
        assert_eq!(app.shown_board().cols, 21);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.shown_board().cols, 19);
    }
}
