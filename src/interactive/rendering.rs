//! TUI rendering with ratatui
//!
//! The board is drawn as a table with merged blocks shown once per block.

use super::app::{App, InputMode, MessageStyle};
use crate::associations::AssociationSource;
use crate::core::Matrix;
use crate::game::{GameStatus, Highlight, HighlightKind, MASK_CHAR};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table},
};

/// Main UI rendering function
pub fn ui<A: AssociationSource>(f: &mut Frame, app: &App<'_, A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🏛  OLYMPIIKA - Word Association Puzzle")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(text: &str, highlight: Option<&Highlight>) -> Style {
    match highlight {
        Some(h) if !text.is_empty() && h.word == text => match h.kind {
            HighlightKind::New => Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            HighlightKind::Existing => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        },
        _ if text.contains(MASK_CHAR) => Style::default().fg(Color::DarkGray),
        _ => Style::default().fg(Color::White),
    }
}

/// Table rows for a grid; continuation rows of a merged block stay empty
fn board_rows<'a>(grid: &'a Matrix, highlight: Option<&Highlight>) -> Vec<Row<'a>> {
    (0..grid.rows())
        .map(|row| {
            let cells = (0..grid.cols()).map(|col| {
                if grid.is_block_start(row, col) {
                    let text = grid.get(row, col);
                    Cell::from(text).style(cell_style(text, highlight))
                } else {
                    Cell::from("")
                }
            });
            Row::new(cells.collect::<Vec<_>>())
        })
        .collect()
}

fn render_board<A: AssociationSource>(f: &mut Frame, app: &App<'_, A>, area: Rect) {
    let grid = app.session.display();
    let widths: Vec<Constraint> = (0..grid.cols())
        .map(|col| {
            let longest = app
                .session
                .solution()
                .column(col)
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            Constraint::Length(u16::try_from(longest).unwrap_or(u16::MAX).max(3))
        })
        .collect();

    let border_color = if app.session.status() == GameStatus::Won {
        Color::Green
    } else {
        Color::Blue
    };

    let table = Table::new(board_rows(grid, app.highlight.as_ref()), widths)
        .column_spacing(2)
        .block(
            Block::default()
                .title(format!(" {} steps ", grid.steps()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        );

    f.render_widget(table, area);
}

fn render_info_panel<A: AssociationSource>(f: &mut Frame, app: &App<'_, A>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Length(6), // Statistics
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress<A: AssociationSource>(f: &mut Frame, app: &App<'_, A>, area: Rect) {
    let (found, total) = app.session.progress();
    let percent = if total == 0 {
        100
    } else {
        u16::try_from(found * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Found ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{total}"));

    f.render_widget(gauge, area);
}

fn render_stats<A: AssociationSource>(f: &mut Frame, app: &App<'_, A>, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Status:  "),
            Span::styled(
                app.session.status().label(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Puzzles: {} | Solved: {}",
            app.stats.puzzles, app.stats.solved
        )),
        Line::from(format!(
            "Hints:   {} | Reveals: {}",
            app.stats.hints, app.stats.reveals
        )),
        Line::from(format!(
            "Mode:    {}",
            app.generator.config().difficulty.name()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<A: AssociationSource>(f: &mut Frame, app: &App<'_, A>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<A: AssociationSource>(f: &mut Frame, app: &App<'_, A>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 SOLVED! 🎉 | Press 'n' for a new puzzle or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a word | Tab: hint | Ctrl+R: answers ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<A: AssociationSource>(f: &mut Frame, app: &App<'_, A>, area: Rect) {
    let help_text = if app.input_mode == InputMode::WinCelebration {
        "q: Quit | n: New puzzle"
    } else {
        "Esc: Quit | Enter: Submit | Tab: Hint | Ctrl+R: Answers | Ctrl+N: New puzzle"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
