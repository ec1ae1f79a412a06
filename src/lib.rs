//! TicketHub Library
//!
//! This module exposes the booking model, validation rules, form state and
//! submission client for use by the binary and integration tests.

pub mod app;
pub mod booking;
pub mod cli;
pub mod client;
pub mod form;
pub mod logging;
pub mod submit;
pub mod ui;
