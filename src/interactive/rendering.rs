//! TUI rendering with ratatui
//!
//! Letter grid, keyboard, and status bar for the game interface.

use super::app::App;
use crate::core::Verdict;
use crate::engine::{MAX_ATTEMPTS, Status};
use crate::persistence::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Letter grid
            Constraint::Length(5),  // Keyboard
            Constraint::Min(3),     // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, &alert.title, &alert.message);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE - Guess the word")
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

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let submitted = app.engine.attempts().len();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::new();

        if let Some(feedback) = app.engine.row_feedback(row) {
            // Submitted row: letters on feedback colors
            let word = &app.engine.attempts()[row];
            for (letter, &verdict) in word.text().chars().zip(feedback.verdicts()) {
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    verdict_style(verdict),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            // Active row shows the input under construction, later rows are blank
            let input = if row == submitted && app.engine.status().is_in_progress() {
                app.engine.current_input()
            } else {
                ""
            };
            for i in 0..5 {
                let cell = input
                    .chars()
                    .nth(i)
                    .map_or("   ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
                spans.push(Span::styled(
                    cell,
                    Style::default().fg(Color::White).bg(Color::Black),
                ));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Board "),
    );
    f.render_widget(grid, area);
}

fn render_keyboard<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let states = app.engine.letter_states();
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len());

    for row in KEYBOARD_ROWS {
        let mut spans = Vec::new();
        for letter in row.chars() {
            let style = states
                .get(&(letter as u8))
                .map_or_else(|| Style::default().fg(Color::White), |&v| verdict_style(v));
            spans.push(Span::styled(
                format!("{}", letter.to_ascii_uppercase()),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Keyboard "),
    );
    f.render_widget(keyboard, area);
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = Vec::new();

    let hint = match app.engine.status() {
        Status::InProgress if app.engine.is_input_complete() => "Enter to submit",
        Status::InProgress => "Type letters, Backspace to delete",
        _ => "Press 'n' for a new game or 'q' to quit",
    };

    lines.push(Line::from(vec![
        Span::styled(
            format!("Attempt {}/{MAX_ATTEMPTS}  ", app.engine.attempt_count()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(hint),
    ]));
    lines.push(Line::from(Span::styled(
        "Esc: save & quit | Ctrl+N: restart",
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(notice) = &app.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn render_alert(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 7, f.area());

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(message).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "'n' play again | 'q' quit",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
