//! Submission outcome alert
//!
//! Renders a centered modal with the outcome of the last booking attempt.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::client::SubmissionOutcome;
use crate::form::Alert;

/// Border and title color for an outcome
fn outcome_color(outcome: SubmissionOutcome) -> Color {
    match outcome {
        SubmissionOutcome::Booked => Color::Green,
        SubmissionOutcome::Rejected => Color::Red,
        SubmissionOutcome::NetworkError => Color::Yellow,
    }
}

/// Renders the alert on top of the current view
pub fn render(frame: &mut Frame, alert: &Alert) {
    let area = frame.area();
    let overlay_area = centered_rect(44, 7, area);
    let color = outcome_color(alert.outcome);

    frame.render_widget(Clear, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            alert.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            alert.raised_at.format("at %H:%M:%S").to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Booking ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, overlay_area);
}
