//! Booking form screen rendering
//!
//! Renders the 13 booking inputs with their labels, inline errors for touched
//! invalid fields, the submit control and a status line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::booking::Field;
use crate::form::BookingForm;

/// Color scheme for the booking form
mod colors {
    use ratatui::style::Color;

    /// Borders and title
    pub const HEADER: Color = Color::Magenta;
    /// Field labels
    pub const LABEL: Color = Color::White;
    /// Focused field
    pub const FOCUSED: Color = Color::Yellow;
    /// Placeholder text
    pub const PLACEHOLDER: Color = Color::DarkGray;
    /// Inline errors
    pub const ERROR: Color = Color::Red;
    /// Submit button background
    pub const BUTTON: Color = Color::Rgb(99, 102, 241);
}

/// Width reserved for field labels
const LABEL_WIDTH: usize = 14;

/// Cursor drawn after the focused field's text
const CURSOR: &str = "\u{2581}"; // ▁

/// Text displayed for a field's value, masked where required
fn display_value(field: Field, value: &str) -> String {
    if field.is_masked() {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

/// Builds the lines for one field: the input line plus an error line when visible
fn field_lines(form: &BookingForm, field: Field) -> Vec<Line<'static>> {
    let focused = form.focused_field() == field;
    let value = form.values.get(field);
    let error = form.visible_error(field);

    let marker = if focused { "\u{25B8} " } else { "  " }; // ▸
    let label_style = match (focused, error.is_some()) {
        (_, true) => Style::default().fg(colors::ERROR),
        (true, false) => Style::default()
            .fg(colors::FOCUSED)
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(colors::LABEL),
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(colors::FOCUSED)),
        Span::styled(
            format!("{:<width$}", field.as_str(), width = LABEL_WIDTH),
            label_style,
        ),
    ];

    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(colors::PLACEHOLDER),
        ));
    } else {
        spans.push(Span::raw(display_value(field, value)));
    }
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(colors::FOCUSED)));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("{:indent$}{}", "", message, indent = LABEL_WIDTH + 2),
            Style::default().fg(colors::ERROR),
        )));
    }
    lines
}

/// Scroll offset that keeps the focused field (and its error line) in view
fn scroll_offset(focus_line: usize, focus_height: usize, viewport: usize) -> u16 {
    let bottom = focus_line + focus_height;
    bottom.saturating_sub(viewport) as u16
}

/// Renders the field list
fn render_fields(frame: &mut Frame, form: &BookingForm, area: Rect) {
    let mut lines = Vec::new();
    let mut focus_line = 0;
    let mut focus_height = 1;

    for field in Field::ALL {
        let block = field_lines(form, field);
        if form.focused_field() == field {
            focus_line = lines.len();
            focus_height = block.len();
        }
        lines.extend(block);
    }

    let offset = scroll_offset(focus_line, focus_height, area.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

/// Renders the submit control
fn render_submit_button(frame: &mut Frame, form: &BookingForm, area: Rect) {
    let (label, style) = if form.submitting {
        (
            "Submitting...",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        )
    } else {
        (
            "Submit Ticket",
            Style::default()
                .fg(Color::White)
                .bg(colors::BUTTON)
                .add_modifier(Modifier::BOLD),
        )
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(button, area);
}

/// Renders the status line: the last blocked-submit reason, or a key hint
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(colors::ERROR),
        )),
        None => Line::from(Span::styled(
            "Tab: next  Enter: submit  F1: help  Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Renders the booking form screen
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `app` - The application state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER))
        .title(Span::styled(
            " Concert Ticket Booking ",
            Style::default()
                .fg(colors::LABEL)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    render_fields(frame, &app.form, chunks[0]);
    render_submit_button(frame, &app.form, chunks[1]);
    render_status(frame, app, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fixtures::valid_booking;
    use crate::client::BookingClient;
    use ratatui::{backend::TestBackend, Terminal};
    use reqwest::Url;

    fn create_test_app() -> App {
        App::new(BookingClient::new(
            Url::parse("http://127.0.0.1:9/api/tickets").unwrap(),
        ))
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                render(frame, app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_shows_title_and_all_labels() {
        let app = create_test_app();
        let content = render_to_string(&app, 80, 40);

        assert!(content.contains("Concert Ticket Booking"));
        for field in Field::ALL {
            assert!(content.contains(field.as_str()), "Should show label {}", field);
        }
        assert!(content.contains("Submit Ticket"));
    }

    #[test]
    fn test_placeholders_shown_for_empty_unfocused_fields() {
        let app = create_test_app();
        let content = render_to_string(&app, 80, 40);

        assert!(content.contains("Enter Email"));
        // The focused field shows its cursor, not its placeholder
        assert!(!content.contains("Enter ConcertId"));
    }

    #[test]
    fn test_security_code_is_masked() {
        let mut app = create_test_app();
        app.form.values = valid_booking();
        app.form.values.security_code = "987".to_string();
        let content = render_to_string(&app, 80, 40);

        assert!(content.contains("***"));
        assert!(!content.contains("987"));
        assert!(content.contains("Halifax"));
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut app = create_test_app();
        let content = render_to_string(&app, 80, 40);
        assert!(!content.contains("ConcertId is required."));

        app.form.focus_next();
        let content = render_to_string(&app, 80, 40);
        assert!(content.contains("ConcertId is required."));
        assert!(!content.contains("Email is required."));
    }

    #[test]
    fn test_submitting_label_while_in_flight() {
        let mut app = create_test_app();
        app.form.submitting = true;
        let content = render_to_string(&app, 80, 40);

        assert!(content.contains("Submitting..."));
        assert!(!content.contains("Submit Ticket"));
    }

    #[test]
    fn test_status_line_shows_blocked_reason() {
        let mut app = create_test_app();
        app.status = Some("13 field(s) need attention".to_string());
        let content = render_to_string(&app, 80, 40);

        assert!(content.contains("13 field(s) need attention"));
    }

    #[test]
    fn test_focused_field_visible_in_small_terminal() {
        let mut app = create_test_app();
        app.form.focus = Field::Country.index();
        let content = render_to_string(&app, 80, 12);

        assert!(content.contains("Country"));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 1, 10), 0);
        assert_eq!(scroll_offset(9, 1, 10), 0);
        assert_eq!(scroll_offset(10, 1, 10), 1);
        assert_eq!(scroll_offset(12, 2, 10), 4);
    }

    #[test]
    fn test_display_value_masks_only_security_code() {
        assert_eq!(display_value(Field::SecurityCode, "123"), "***");
        assert_eq!(display_value(Field::Phone, "123"), "123");
    }
}
