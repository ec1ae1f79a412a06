//! Field validation rules for the booking form
//!
//! Each field has a required message plus an ordered list of checks. An empty
//! value reports only its required message; otherwise the first failing check
//! wins. Fields are validated independently of one another.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::{BookingFormValues, Field};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .unwrap()
});
static LETTERS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static CARD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
static EXPIRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").unwrap());
static CVC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

/// A single check and the message reported when it fails
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

/// The complete rule set for one field
pub struct FieldRules {
    pub field: Field,
    pub required: &'static str,
    pub rules: &'static [Rule],
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

fn is_positive(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n > 0.0)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Rules in form order
pub static RULES: [FieldRules; 13] = [
    FieldRules {
        field: Field::ConcertId,
        required: "ConcertId is required.",
        rules: &[
            Rule { check: is_number, message: "ConcertId must be a number." },
            Rule { check: is_positive, message: "ConcertId must be a positive integer." },
        ],
    },
    FieldRules {
        field: Field::Email,
        required: "Email is required.",
        rules: &[Rule { check: |v| EMAIL_RE.is_match(v), message: "Invalid email address." }],
    },
    FieldRules {
        field: Field::Name,
        required: "Name is required.",
        rules: &[
            Rule { check: |v| LETTERS_RE.is_match(v), message: "Name cannot contain numbers." },
            Rule { check: |v| char_len(v) >= 2, message: "Name must be at least 2 characters long." },
            Rule { check: |v| char_len(v) <= 100, message: "Name cannot exceed 100 characters." },
        ],
    },
    FieldRules {
        field: Field::Phone,
        required: "Phone number is required.",
        rules: &[Rule {
            check: |v| PHONE_RE.is_match(v),
            message: "Phone number must be exactly 10 digits.",
        }],
    },
    FieldRules {
        field: Field::Quantity,
        required: "Quantity is required.",
        rules: &[
            Rule { check: is_number, message: "Quantity must be a number." },
            Rule { check: is_positive, message: "Quantity must be a positive integer." },
        ],
    },
    FieldRules {
        field: Field::CreditCard,
        required: "Credit card number is required.",
        rules: &[Rule {
            check: |v| CARD_RE.is_match(v),
            message: "Credit card number must be exactly 12 digits.",
        }],
    },
    FieldRules {
        field: Field::Expiration,
        required: "Expiration date is required.",
        rules: &[Rule {
            check: |v| EXPIRATION_RE.is_match(v),
            message: "Expiration must be in MM/YY format.",
        }],
    },
    FieldRules {
        field: Field::SecurityCode,
        required: "Security code is required.",
        rules: &[Rule {
            check: |v| CVC_RE.is_match(v),
            message: "Security code must be exactly 3 digits.",
        }],
    },
    FieldRules {
        field: Field::Address,
        required: "Address is required.",
        rules: &[Rule {
            check: |v| char_len(v) <= 200,
            message: "Address cannot be longer than 200 characters.",
        }],
    },
    FieldRules {
        field: Field::City,
        required: "City is required.",
        rules: &[Rule {
            check: |v| char_len(v) <= 100,
            message: "City cannot be longer than 100 characters.",
        }],
    },
    FieldRules {
        field: Field::Province,
        required: "Province is required.",
        rules: &[Rule {
            check: |v| char_len(v) <= 50,
            message: "Province cannot be longer than 50 characters.",
        }],
    },
    FieldRules {
        field: Field::PostalCode,
        required: "Postal code is required.",
        rules: &[Rule {
            check: |v| char_len(v) == 6,
            message: "Postal code must be exactly 6 characters.",
        }],
    },
    FieldRules {
        field: Field::Country,
        required: "Country is required.",
        rules: &[Rule {
            check: |v| char_len(v) <= 100,
            message: "Country cannot be longer than 100 characters.",
        }],
    },
];

/// Returns the rule set for a field
pub fn rules_for(field: Field) -> &'static FieldRules {
    &RULES[field.index()]
}

/// Validates a single field value
///
/// # Returns
/// * `Ok(())` if the value passes every rule for the field
/// * `Err(message)` with the message of the first rule that failed
pub fn validate_field(field: Field, value: &str) -> Result<(), &'static str> {
    let field_rules = rules_for(field);

    if value.is_empty() {
        return Err(field_rules.required);
    }

    match field_rules.rules.iter().find(|rule| !(rule.check)(value)) {
        Some(rule) => Err(rule.message),
        None => Ok(()),
    }
}

/// Validates every field of a booking
pub fn validate(values: &BookingFormValues) -> ValidationResult {
    let errors = values
        .iter()
        .filter_map(|(field, value)| {
            validate_field(field, value)
                .err()
                .map(|message| (field, message.to_string()))
        })
        .collect();

    ValidationResult { errors }
}

/// Errors for every currently invalid field, keyed in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    /// True when no field has an error, i.e. the form may be submitted
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error message for a field, if it is invalid
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Number of invalid fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}
