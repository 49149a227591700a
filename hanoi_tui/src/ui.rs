//! Stateless UI rendering for Tower of Hanoi.

use hanoi::{Disk, Game, Rod, DISK_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

use crate::app::App;

/// Renders the full frame: title, rods, status bar, and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let game = app.game();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Rods
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(area);

    // Title
    let title = Paragraph::new("Tower of Hanoi")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_rods(frame, chunks[1], game);

    // Status
    let (text, style) = if game.is_won() {
        (
            format!("Solved in {} moves! Press 'r' to play again.", game.move_count()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("{}  |  Moves: {}", game.status(), game.move_count()),
            Style::default().fg(Color::Yellow),
        )
    };
    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    // Key help
    let help = Paragraph::new("1-3: select rod   s: auto-solve   r: reset   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_rods(frame: &mut Frame, area: Rect, game: &Game) {
    let board_area = center_rect(area, 60, DISK_COUNT as u16 + 3);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(board_area);

    for (i, rod) in Rod::iter().enumerate() {
        draw_rod(frame, cols[i], game, rod);
    }
}

fn draw_rod(frame: &mut Frame, area: Rect, game: &Game, rod: Rod) {
    let border_style = if game.is_won() {
        Style::default().fg(Color::Green)
    } else if game.selected() == Some(rod) {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(rod.label());

    let stack = game.board().rod(rod);
    let mut lines = Vec::new();
    // Draw slots top-down; unoccupied slots show the bare peg.
    for level in (0..DISK_COUNT as usize).rev() {
        lines.push(match stack.get(level) {
            Some(&disk) => disk_line(disk),
            None => Line::from(Span::styled("│", Style::default().fg(Color::DarkGray))),
        });
    }
    lines.push(Line::from(Span::styled(
        "─".repeat(9),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn disk_line(disk: Disk) -> Line<'static> {
    let bar = "█".repeat(disk as usize * 2 + 1);
    let color = match disk {
        1 => Color::Cyan,
        2 => Color::Yellow,
        _ => Color::Magenta,
    };
    Line::from(Span::styled(bar, Style::default().fg(color)))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
