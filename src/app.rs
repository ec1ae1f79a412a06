//! Application state management for TicketHub
//!
//! This module contains the main application state, handling keyboard input
//! and driving the booking form through validation and submission.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::cli::StartupConfig;
use crate::client::BookingClient;
use crate::form::{BookingForm, SubmitBlocked};
use crate::submit::SubmitTask;

/// Main application struct managing state and data
pub struct App {
    /// The booking form being edited
    pub form: BookingForm,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Status line describing why the last submit did nothing
    pub status: Option<String>,
    /// Booking API client
    client: BookingClient,
    /// Outstanding submission, if any
    pending: Option<SubmitTask>,
}

impl App {
    /// Creates a new App that submits through the given client
    pub fn new(client: BookingClient) -> Self {
        Self {
            form: BookingForm::new(),
            should_quit: false,
            show_help: false,
            status: None,
            client,
            pending: None,
        }
    }

    /// Creates a new App instance with the given startup configuration.
    pub fn with_startup_config(config: &StartupConfig) -> Self {
        Self::new(BookingClient::new(config.endpoint.clone()))
    }

    /// Whether a submission is outstanding
    pub fn is_submitting(&self) -> bool {
        self.form.submitting
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `Ctrl-C`: Quit the application
    /// - `F1`: Toggle help
    /// - `Tab`/`Down`: Next field
    /// - `Shift-Tab`/`Up`: Previous field
    /// - `Backspace`: Delete last character
    /// - `Enter`: Submit the booking
    /// - `Esc`: Close alert or help, otherwise quit
    /// - Any other character: Type into the focused field
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }

        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        // Alert intercepts all keys until dismissed
        if self.form.alert.is_some() {
            if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc) {
                self.form.dismiss_alert();
            }
            return;
        }

        // Handle help overlay - intercepts all keys when shown
        if self.show_help {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_previous();
            }
            KeyCode::Backspace => {
                self.form.backspace();
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c);
            }
            _ => {}
        }
    }

    /// Validates the form and, if valid, starts a background submission
    ///
    /// Spawns onto the current tokio runtime when the form is valid.
    pub fn submit(&mut self) {
        match self.form.begin_submit() {
            Ok(values) => {
                info!(endpoint = %self.client.endpoint(), "starting submission");
                self.status = None;
                self.pending = Some(SubmitTask::spawn(self.client.clone(), values));
            }
            Err(blocked) => {
                debug!(reason = %blocked, "submit blocked");
                if let SubmitBlocked::Invalid(errors) = &blocked {
                    // Jump to the first field that needs fixing
                    if let Some((field, _)) = errors.iter().next() {
                        self.form.focus = field.index();
                    }
                }
                self.status = Some(blocked.to_string());
            }
        }
    }

    /// Applies the outcome of the pending submission if it has resolved
    ///
    /// Called once per event-loop tick.
    pub fn poll_submission(&mut self) {
        let Some(task) = self.pending.as_mut() else {
            return;
        };

        if let Some(outcome) = task.try_recv() {
            info!(?outcome, "submission finished");
            self.pending = None;
            self.form.finish_submit(outcome);
        }
    }

    /// Waits for the pending submission and applies its outcome
    pub async fn wait_for_submission(&mut self) {
        if let Some(task) = self.pending.take() {
            let outcome = task.wait().await;
            self.form.finish_submit(outcome);
        }
    }
}
