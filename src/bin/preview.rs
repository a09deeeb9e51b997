// Non-interactive fill: configuration comes from POLYPACK_* env vars, the
// finished board goes to stdout as ANSI-colored cells. Attempt exhaustion is
// a reported outcome, not a failure, so the exit code is 0 either way.
use std::env;

use crossterm::style::{Color, Stylize};
use rand::rngs::StdRng;
use rand::SeedableRng;

use polypack::config::{
    BOARD_MAX, BOARD_MIN, DARK_SQUARE, DEFAULT_BOARD, DEFAULT_DENSITY_IDX, DENSITY_STEPS,
    INNER_ATTEMPTS, LIGHT_SQUARE, MAX_ATTEMPTS, PALETTE, SEED_ENV,
};
use polypack::engine::{
    shapes_for_class, Board, Cell, ColorPolicy, FillConfig, Placer, Rgb, RunStatus, SelectionMode,
    ShapeClass,
};

fn main() {
    let size = env_parse::<usize>("POLYPACK_BOARD")
        .map(|n| n.clamp(BOARD_MIN, BOARD_MAX))
        .unwrap_or(DEFAULT_BOARD);
    let class = env::var("POLYPACK_SHAPES")
        .ok()
        .and_then(|s| ShapeClass::from_token(&s))
        .unwrap_or(ShapeClass::Pen);
    let density = env_parse::<f64>("POLYPACK_DENSITY")
        .map(|d| if d > 1.0 { d / 100.0 } else { d })
        .filter(|d| *d > 0.0 && *d < 1.0)
        .unwrap_or(DENSITY_STEPS[DEFAULT_DENSITY_IDX]);
    let colors = env::var("POLYPACK_COLORS")
        .ok()
        .and_then(|s| ColorPolicy::from_token(&s))
        .unwrap_or(ColorPolicy::Random);
    let selection = env::var("POLYPACK_SELECT")
        .ok()
        .and_then(|s| SelectionMode::from_token(&s))
        .unwrap_or(SelectionMode::Random);
    let mut rng = match env_parse::<u64>(SEED_ENV) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let cfg = FillConfig {
        cols: size,
        rows: size,
        density,
        selection,
        colors,
        max_attempts: MAX_ATTEMPTS,
        inner_attempts: INNER_ATTEMPTS,
    };
    let mut placer = Placer::new(&cfg, shapes_for_class(class), PALETTE, &mut rng);
    let status = placer.run(&mut rng);

    print_board(placer.board());
    println!();
    match status {
        RunStatus::TargetReached => {
            println!("Random placement complete.");
            println!(
                "Placed {} pieces, occupied squares: {}/{}",
                placer.placed_count(),
                placer.occupied_cells(),
                placer.target()
            );
        }
        _ => {
            println!(
                "Random placement stopped after {} attempts. Placed {} pieces, occupied squares: {}/{}",
                placer.attempts(),
                placer.placed_count(),
                placer.occupied_cells(),
                placer.target()
            );
        }
    }
}

fn print_board(board: &Board) {
    for gy in 0..board.rows {
        for gx in 0..board.cols {
            let color = match board.get(gx, gy) {
                Cell::Filled(color) => color,
                // Checkerboard backdrop; the lower-left square is dark.
                Cell::Empty => {
                    if (gx + (board.rows - 1 - gy)) % 2 == 0 {
                        DARK_SQUARE
                    } else {
                        LIGHT_SQUARE
                    }
                }
            };
            print!("{}", "  ".on(to_ansi(color)));
        }
        println!();
    }
}

fn to_ansi(color: Rgb) -> Color {
    Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
