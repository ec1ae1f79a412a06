//! Integration tests for the booking flow
//!
//! Drives the form from typed input through validation and submission against
//! a mock TicketHub endpoint.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reqwest::Url;
use tickethub::app::App;
use tickethub::booking::{validate, BookingFormValues, Field};
use tickethub::client::{BookingClient, SubmissionOutcome};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The booking from the worked example: every field valid
fn scenario_a() -> BookingFormValues {
    let mut values = BookingFormValues::new();
    for (field, value) in [
        (Field::ConcertId, "12"),
        (Field::Email, "a@b.com"),
        (Field::Name, "Alice"),
        (Field::Phone, "1234567890"),
        (Field::Quantity, "2"),
        (Field::CreditCard, "123456789012"),
        (Field::Expiration, "09/26"),
        (Field::SecurityCode, "123"),
        (Field::Address, "1 Main St"),
        (Field::City, "Halifax"),
        (Field::Province, "NS"),
        (Field::PostalCode, "B3H1A1"),
        (Field::Country, "Canada"),
    ] {
        values.set(field, value);
    }
    values
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Types every field of `values` into the form, tabbing between inputs
fn type_booking(app: &mut App, values: &BookingFormValues) {
    for (_, value) in values.iter() {
        for c in value.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Tab);
    }
}

async fn app_for(server: &MockServer) -> App {
    let url = Url::parse(&format!("{}/api/tickets", server.uri())).unwrap();
    App::new(BookingClient::new(url))
}

#[test]
fn test_scenario_a_all_fields_valid() {
    assert!(validate(&scenario_a()).is_valid());
}

#[test]
fn test_scenario_b_negative_concert_id() {
    let mut values = scenario_a();
    values.set(Field::ConcertId, "-1");
    let result = validate(&values);
    assert!(result
        .error(Field::ConcertId)
        .unwrap()
        .contains("must be a positive integer"));
}

#[test]
fn test_scenario_c_short_phone() {
    let mut values = scenario_a();
    values.set(Field::Phone, "12345");
    let result = validate(&values);
    assert!(result
        .error(Field::Phone)
        .unwrap()
        .contains("must be exactly 10 digits"));
}

#[test]
fn test_scenario_d_month_out_of_range() {
    let mut values = scenario_a();
    values.set(Field::Expiration, "13/26");
    let result = validate(&values);
    assert!(result.error(Field::Expiration).is_some());
    assert_eq!(result.len(), 1);
}

#[test]
fn test_request_body_roundtrip() {
    let values = scenario_a();
    let json = serde_json::to_string(&values).unwrap();
    let back: BookingFormValues = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);
}

#[tokio::test]
async fn test_scenario_e_created_resets_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tickets"))
        .and(header("content-type", "application/json"))
        .and(body_json(scenario_a()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    type_booking(&mut app, &scenario_a());
    assert_eq!(app.form.values, scenario_a());

    press(&mut app, KeyCode::Enter);
    assert!(app.is_submitting());
    app.wait_for_submission().await;

    let alert = app.form.alert.clone().expect("alert should be raised");
    assert_eq!(alert.outcome, SubmissionOutcome::Booked);
    assert_eq!(alert.message(), "Ticket booked successfully!");
    assert_eq!(app.form.values, BookingFormValues::default());
    assert!(app.form.touched.is_empty());
}

#[tokio::test]
async fn test_scenario_f_network_error_keeps_values() {
    // Bind then drop a listener so nothing is accepting on the port
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{}/api/tickets", addr)).unwrap();
    let mut app = App::new(BookingClient::new(url));
    app.form.values = scenario_a();

    press(&mut app, KeyCode::Enter);
    app.wait_for_submission().await;

    let alert = app.form.alert.clone().expect("alert should be raised");
    assert_eq!(alert.message(), "Network error");
    assert_eq!(app.form.values, scenario_a());
}

#[tokio::test]
async fn test_rejected_booking_keeps_values_and_touched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    type_booking(&mut app, &scenario_a());
    let touched_before = app.form.touched.clone();

    press(&mut app, KeyCode::Enter);
    app.wait_for_submission().await;

    assert_eq!(
        app.form.alert.as_ref().map(|a| a.message()),
        Some("Booking failed")
    );
    assert_eq!(app.form.values, scenario_a());
    assert!(app.form.touched.len() >= touched_before.len());

    // Dismissing the alert returns to an editable, re-submittable form
    press(&mut app, KeyCode::Enter);
    assert!(app.form.alert.is_none());
    assert!(!app.is_submitting());
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    let mut values = scenario_a();
    values.set(Field::Expiration, "13/26");
    type_booking(&mut app, &values);

    press(&mut app, KeyCode::Enter);
    assert!(!app.is_submitting());
    assert_eq!(app.form.focused_field(), Field::Expiration);
    assert_eq!(
        app.form.visible_error(Field::Expiration),
        Some("Expiration must be in MM/YY format.")
    );
}
