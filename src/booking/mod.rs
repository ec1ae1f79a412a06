//! Core booking data model for TicketHub
//!
//! This module contains the booking form record that is sent to the TicketHub
//! API, and the `Field` enum naming each of its inputs.

pub mod rules;

pub use rules::{validate, validate_field, ValidationResult};

use serde::{Deserialize, Serialize};

/// One named input of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ConcertId,
    Email,
    Name,
    Phone,
    Quantity,
    CreditCard,
    Expiration,
    SecurityCode,
    Address,
    City,
    Province,
    PostalCode,
    Country,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 13] = [
        Field::ConcertId,
        Field::Email,
        Field::Name,
        Field::Phone,
        Field::Quantity,
        Field::CreditCard,
        Field::Expiration,
        Field::SecurityCode,
        Field::Address,
        Field::City,
        Field::Province,
        Field::PostalCode,
        Field::Country,
    ];

    /// Returns the key used for this field in the request body
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ConcertId => "ConcertId",
            Field::Email => "Email",
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::Quantity => "Quantity",
            Field::CreditCard => "CreditCard",
            Field::Expiration => "Expiration",
            Field::SecurityCode => "SecurityCode",
            Field::Address => "Address",
            Field::City => "City",
            Field::Province => "Province",
            Field::PostalCode => "PostalCode",
            Field::Country => "Country",
        }
    }

    /// Placeholder text shown in an empty input
    pub fn placeholder(&self) -> String {
        format!("Enter {}", self.as_str())
    }

    /// Whether the input should be rendered masked, like a password
    pub fn is_masked(&self) -> bool {
        matches!(self, Field::SecurityCode)
    }

    /// Position of this field in form order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The booking form record
///
/// Every value is kept as the text the user typed, including the numeric
/// fields. Validation interprets the text; storage never coerces it. The
/// serialized form is a flat JSON object keyed by the PascalCase field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingFormValues {
    pub concert_id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub quantity: String,
    pub credit_card: String,
    pub expiration: String,
    pub security_code: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

impl BookingFormValues {
    /// Creates a record with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current text of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ConcertId => &self.concert_id,
            Field::Email => &self.email,
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Quantity => &self.quantity,
            Field::CreditCard => &self.credit_card,
            Field::Expiration => &self.expiration,
            Field::SecurityCode => &self.security_code,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::Province => &self.province,
            Field::PostalCode => &self.postal_code,
            Field::Country => &self.country,
        }
    }

    /// Returns a mutable handle to a field's text
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ConcertId => &mut self.concert_id,
            Field::Email => &mut self.email,
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Quantity => &mut self.quantity,
            Field::CreditCard => &mut self.credit_card,
            Field::Expiration => &mut self.expiration,
            Field::SecurityCode => &mut self.security_code,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
            Field::Province => &mut self.province,
            Field::PostalCode => &mut self.postal_code,
            Field::Country => &mut self.country,
        }
    }

    /// Replaces a field's text
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Resets every field to the empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Iterates over `(field, value)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |field| (*field, self.get(*field)))
    }
}
