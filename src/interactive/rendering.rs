//! TUI rendering with ratatui
//!
//! Board, attempt gauge, messages and status bar for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CharacterRecord, Feedback, SlotFeedback};
use crate::game::{GuessRecord, SessionStore};
use crate::transliterate::Transliterator;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SessionStore, T: Transliterator>(f: &mut Frame, app: &App<S, T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Exact => Color::Blue,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🀄 FOUR-CHARACTER WORD GUESS")
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

/// Characters, then the pinyin of every slot with per-letter and tone colors
fn guess_lines(record: &GuessRecord) -> [Line<'static>; 2] {
    let slots = record.outcome().slots();

    let mut word = vec![Span::styled(
        format!("{:>2}. ", record.attempt()),
        Style::default().fg(Color::DarkGray),
    )];
    for slot in slots {
        word.push(Span::styled(
            format!(" {} ", slot.character()),
            Style::default()
                .fg(Color::Black)
                .bg(feedback_color(slot.character_feedback()))
                .add_modifier(Modifier::BOLD),
        ));
        word.push(Span::raw(" "));
    }

    let mut pinyin = vec![Span::raw("    ")];
    for slot in slots {
        pinyin.extend(pinyin_spans(slot));
        pinyin.push(Span::raw(" "));
    }

    [Line::from(word), Line::from(pinyin)]
}

fn pinyin_spans(slot: &SlotFeedback) -> Vec<Span<'static>> {
    if slot.letters().is_empty() {
        return vec![Span::styled("?", Style::default().fg(Color::DarkGray))];
    }

    let mut spans: Vec<Span<'static>> = slot
        .scored_letters()
        .map(|(letter, feedback)| {
            Span::styled(
                letter.to_string(),
                Style::default().fg(feedback_color(feedback)),
            )
        })
        .collect();

    if let Some(tone) = slot.tone() {
        spans.push(Span::styled(
            tone.to_string(),
            Style::default()
                .fg(feedback_color(slot.tone_feedback()))
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

fn reveal_line(record: &CharacterRecord) -> Line<'static> {
    Line::from(format!("  {record}"))
}

fn render_board<S: SessionStore, T: Transliterator>(f: &mut Frame, app: &App<S, T>, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.history().is_empty() {
        lines.push(Line::from(Span::styled(
            "Type a four-character word and press Enter",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for record in app.history() {
        lines.extend(guess_lines(record));
    }

    if let Some(reveal) = app.reveal() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Answer: {}", reveal.target_word),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(reveal.target_details.iter().map(reveal_line));
    }

    // Keep the latest guesses visible
    let height = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    let board = Paragraph::new(visible)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(board, area);
}

fn render_info_panel<S: SessionStore, T: Transliterator>(
    f: &mut Frame,
    app: &App<S, T>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(5), // Legend
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_legend(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts<S: SessionStore, T: Transliterator>(
    f: &mut Frame,
    app: &App<S, T>,
    area: Rect,
) {
    let attempts = app.snapshot.attempts;
    let max = app.snapshot.max_attempts.max(1);
    let ratio = f64::from(attempts) / f64::from(max);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.min(1.0))
        .label(format!("{attempts}/{max}"));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let entry = |feedback: Feedback, text: &'static str| {
        Line::from(vec![
            Span::styled("  ", Style::default().bg(feedback_color(feedback))),
            Span::raw(text),
        ])
    };

    let legend = Paragraph::new(vec![
        entry(Feedback::Exact, " right place"),
        entry(Feedback::Present, " elsewhere in the word"),
        entry(Feedback::Absent, " not in the word"),
    ])
    .block(Block::default().title(" Legend ").borders(Borders::ALL));

    f.render_widget(legend, area);
}

fn render_messages<S: SessionStore, T: Transliterator>(
    f: &mut Frame,
    app: &App<S, T>,
    area: Rect,
) {
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

fn render_input<S: SessionStore, T: Transliterator>(f: &mut Frame, app: &App<S, T>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => {
            let title = if app.snapshot.won {
                " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit "
            } else {
                " Game over | Press 'n' for new game or 'q' to quit "
            };
            (title, "", Color::Green)
        }
        InputMode::Guessing => (
            " Your guess (four characters) | Enter to submit ",
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

fn render_status<S: SessionStore, T: Transliterator>(f: &mut Frame, app: &App<S, T>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let remaining = app
        .snapshot
        .max_attempts
        .saturating_sub(app.snapshot.attempts);
    f.render_widget(
        Paragraph::new(format!("Remaining: {remaining}")).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Ctrl+N: New Game | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
