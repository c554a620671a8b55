//! Stateless UI rendering for the N x N board.

use super::TuiView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_ntoe::{Player, Position, Square, Token};

const CELL_WIDTH: usize = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, view: &TuiView) {
    let area = frame.area();
    let size = view.grid.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Title
            Constraint::Min((size * 2) as u16), // Board
            Constraint::Length(1),              // Score
            Constraint::Length(3),              // Status
            Constraint::Length(1),              // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Strictly N-toe - {size}x{size}"))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view);

    let score = Paragraph::new(score_line(view)).alignment(Alignment::Center);
    frame.render_widget(score, chunks[2]);

    let status = Paragraph::new(view.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("arrows: move   enter/space: place   y/n: play again   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &TuiView) {
    let size = view.grid.size();
    let width = (size * (CELL_WIDTH + 1)).saturating_sub(1) as u16;
    let height = (size * 2).saturating_sub(1) as u16;
    let board_area = center_rect(area, width, height);

    let mut lines = Vec::with_capacity(size * 2);
    for row in 0..size {
        if row > 0 {
            lines.push(separator(size));
        }
        lines.push(board_row(view, row));
    }
    frame.render_widget(Paragraph::new(lines), board_area);
}

fn board_row(view: &TuiView, row: usize) -> Line<'static> {
    let size = view.grid.size();
    let mut spans = Vec::with_capacity(size * 2);
    for col in 0..size {
        if col > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        let pos = Position::new(row, col);
        spans.push(cell(view, pos));
    }
    Line::from(spans)
}

fn cell(view: &TuiView, pos: Position) -> Span<'static> {
    let (symbol, base_style) = match view.grid.get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Token::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Token::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if view.show_cursor && pos == view.cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };
    Span::styled(symbol, style)
}

fn separator(size: usize) -> Line<'static> {
    let text = vec!["─".repeat(CELL_WIDTH); size].join("┼");
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn score_line(view: &TuiView) -> Line<'static> {
    let entry = |player: Player| {
        let style = if view.turn == Some(player) {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        Span::styled(
            format!(
                "{} ({}) {}",
                view.names.get(player),
                player.token(),
                view.score.wins(player)
            ),
            style,
        )
    };
    Line::from(vec![entry(Player::One), Span::raw("  :  "), entry(Player::Two)])
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
