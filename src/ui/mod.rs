use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::{App, Menu, MENU_ROWS};
use crate::config::{CELL_W, DARK_SQUARE, LIGHT_SQUARE};
use crate::engine::{Board, Cell, Rgb};

const SIDEBAR_W: u16 = 24;
const MENU_H: u16 = 9;
const SUMMARY_H: u16 = 6;
const CONTROLS_H: u16 = 6;

fn tui_color(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

pub fn draw_app(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let board = app.shown_board();
    let field_w = (board.cols * CELL_W + 2) as u16;
    let field_h = (board.rows + 2) as u16;

    let need_w = SIDEBAR_W + field_w + 4;
    let need_h = (field_h + 4).max(MENU_H + SUMMARY_H + CONTROLS_H + 2);
    if area.width < need_w || area.height < need_h {
        let msg = Paragraph::new(format!("RESIZE TERMINAL (min {need_w}x{need_h})"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("POLYPACK"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("POLYPACK")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Board on the left, sidebar on the right.
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(field_w + 2), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    // Center the fixed-size board within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(field_h),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(field_w),
            Constraint::Min(1),
        ])
        .split(v_center[1]);

    draw_board(frame, board, h_center[1]);
    draw_sidebar(frame, app, cols[1]);
}

fn draw_board(frame: &mut Frame, board: &Board, area: Rect) {
    let block = Block::default()
        .title(format!("{} x {}", board.cols, board.rows))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let pad = " ".repeat(CELL_W);
    let mut lines: Vec<Line> = Vec::with_capacity(board.rows);
    for gy in 0..board.rows {
        let mut spans: Vec<Span> = Vec::with_capacity(board.cols);
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
            spans.push(Span::styled(pad.clone(), Style::default().bg(tui_color(color))));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MENU_H),
            Constraint::Length(SUMMARY_H),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(area);

    draw_menu(frame, app, chunks[0]);
    draw_summary(frame, app, chunks[1]);
    draw_controls(frame, app.layout_shown(), chunks[2]);
}

fn draw_menu(frame: &mut Frame, app: &App, area: Rect) {
    let frozen = app.layout_shown();
    let mut lines: Vec<Line> = Vec::with_capacity(MENU_ROWS + 2);
    for row in 0..MENU_ROWS {
        let text = format!("{:<8}< {} >", Menu::row_label(row), app.menu.value_label(row));
        let style = if frozen {
            Style::default().fg(Color::DarkGray)
        } else if row == app.menu.row {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::raw(""));
    let button = if frozen { "[ repeat ]" } else { "[ start ]" };
    lines.push(Line::from(Span::styled(
        button,
        Style::default()
            .fg(Color::Rgb(0, 128, 255))
            .add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines).block(Block::default().title("MENU").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.last_run() {
        Some(run) => vec![
            Line::raw(format!("{:<9} {}", "targets:", run.placed_count())),
            Line::raw(format!(
                "{:<9} {}/{}",
                "squares:",
                run.occupied_cells(),
                run.target()
            )),
            Line::raw(format!("{:<9} {}", "attempts:", run.attempts())),
            Line::raw(format!("{:<9} {}", "status:", run.status().label())),
        ],
        None => vec![Line::raw("no layout yet"), Line::raw("enter fills the board")],
    };
    let paragraph =
        Paragraph::new(lines).block(Block::default().title("SUMMARY").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_controls(frame: &mut Frame, frozen: bool, area: Rect) {
    let lines = if frozen {
        vec![
            Line::raw("enter/r repeat"),
            Line::raw("q/esc quit"),
        ]
    } else {
        vec![
            Line::raw("↑/↓ row"),
            Line::raw("←/→ value"),
            Line::raw("enter start"),
            Line::raw("q/esc quit"),
        ]
    };
    let paragraph =
        Paragraph::new(lines).block(Block::default().title("CONTROLS").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
