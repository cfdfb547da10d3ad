//! Inquiry form schemas and validation.
//!
//! A submission is a loosely-typed JSON object. The `formType` discriminator
//! picks the shape (`Donate`, `Volunteer`, `Partner`); a missing, `null` or
//! empty discriminator means a plain contact message. Validation either yields
//! a fully-typed [`Inquiry`] or [`FieldErrors`] with one message per offending
//! field. Nothing partial is ever returned.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;
use validator::{Validate, ValidationErrors};

/// Field name → first failing message.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid submission: {}", self.summary())]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    /// Record a message for `field`; the first message per field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Fold in another set, keeping messages already recorded.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Struct fields are snake_case in Rust but camelCase on the wire.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, failures) in errors.field_errors() {
            if let Some(first) = failures.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}.", wire_name(&field)));
                out.add(&wire_name(&field), message);
            }
        }
        out
    }
}

// ==================== Field shapes ====================

const MSG_AMOUNT: &str = "Amount must be a positive number.";

/// What JSON a field must hold before the typed rules run.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FieldKind {
    /// Required string.
    Text,
    /// String or absent; blank counts as absent.
    OptionalText,
    /// A JSON number or a numeric string (browsers send inputs as text).
    Amount,
    /// One of a fixed set of strings.
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind }
}

fn read_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    amount.filter(|n| n.is_finite())
}

/// Check every declared field against the raw payload.
///
/// Returns a normalized object holding exactly the declared fields, with a
/// placeholder wherever a field was missing or mistyped, so the typed form
/// can always be built and its own rules still run on the other fields.
fn check_shape(
    payload: &Map<String, Value>,
    specs: &[FieldSpec],
) -> (Map<String, Value>, FieldErrors) {
    let mut fields = Map::new();
    let mut errors = FieldErrors::default();

    for spec in specs {
        let value = payload.get(spec.name).filter(|v| !v.is_null());
        let normalized = match (spec.kind, value) {
            (FieldKind::OptionalText, None) => None,
            (FieldKind::OptionalText, Some(Value::String(text))) => {
                (!text.trim().is_empty()).then(|| Value::String(text.clone()))
            }
            (FieldKind::Text, Some(Value::String(text))) => Some(Value::String(text.clone())),
            (FieldKind::Amount, Some(raw)) => match read_amount(raw) {
                Some(amount) => Some(Value::from(amount)),
                None => {
                    errors.add(spec.name, MSG_AMOUNT);
                    Some(Value::from(0.0))
                }
            },
            (FieldKind::OneOf(options), Some(Value::String(text)))
                if options.contains(&text.as_str()) =>
            {
                Some(Value::String(text.clone()))
            }
            (FieldKind::OneOf(options), Some(_)) => {
                let choices = options
                    .iter()
                    .map(|o| format!("'{o}'"))
                    .collect::<Vec<_>>()
                    .join(" or ");
                errors.add(spec.name, format!("{} must be {choices}.", spec.label));
                options.first().map(|o| Value::String(o.to_string()))
            }
            (_, None) => {
                errors.add(spec.name, format!("{} is required.", spec.label));
                placeholder(spec.kind)
            }
            (_, Some(_)) => {
                errors.add(spec.name, format!("{} must be a string.", spec.label));
                placeholder(spec.kind)
            }
        };
        if let Some(value) = normalized {
            fields.insert(spec.name.to_string(), value);
        }
    }

    (fields, errors)
}

fn placeholder(kind: FieldKind) -> Option<Value> {
    match kind {
        FieldKind::Text => Some(Value::String(String::new())),
        FieldKind::OptionalText => None,
        FieldKind::Amount => Some(Value::from(0.0)),
        FieldKind::OneOf(options) => options.first().map(|o| Value::String(o.to_string())),
    }
}

/// Shape-check `payload`, build `F` and run its rules, reporting every
/// offending field at once.
pub(crate) fn read_form<F>(
    payload: &Map<String, Value>,
    specs: &[FieldSpec],
) -> Result<F, FieldErrors>
where
    F: DeserializeOwned + Validate,
{
    let (fields, mut errors) = check_shape(payload, specs);

    let form: F = serde_json::from_value(Value::Object(fields)).map_err(|e| {
        warn!("Normalized submission did not fit its form: {}", e);
        FieldErrors::single("form", "The submission could not be read.")
    })?;

    if let Err(rules) = form.validate() {
        errors.merge(rules.into());
    }

    if errors.is_empty() {
        Ok(form)
    } else {
        Err(errors)
    }
}

// ==================== Form type ====================

/// The discriminator carried by every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
    Donate,
    Volunteer,
    Partner,
    Contact,
}

impl FormType {
    pub const ALL: [FormType; 4] = [
        FormType::Donate,
        FormType::Volunteer,
        FormType::Partner,
        FormType::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormType::Donate => "Donate",
            FormType::Volunteer => "Volunteer",
            FormType::Partner => "Partner",
            FormType::Contact => "Contact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Wire fields of this form, in display order.
    fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormType::Donate => DONATION_FIELDS,
            FormType::Volunteer => VOLUNTEER_FIELDS,
            FormType::Partner => PARTNER_FIELDS,
            FormType::Contact => CONTACT_FIELDS,
        }
    }
}

const DONATION_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text),
    field("email", "Email", FieldKind::Text),
    field("amount", "Amount", FieldKind::Amount),
    field("message", "Message", FieldKind::OptionalText),
];

const VOLUNTEER_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text),
    field("email", "Email", FieldKind::Text),
    field("phone", "Phone number", FieldKind::Text),
    field("interest", "Area of interest", FieldKind::Text),
    field("message", "Message", FieldKind::OptionalText),
];

const PARTNER_FIELDS: &[FieldSpec] = &[
    field("companyName", "Company name", FieldKind::Text),
    field("contactPerson", "Contact person", FieldKind::Text),
    field("email", "Email", FieldKind::Text),
    field("phone", "Phone number", FieldKind::Text),
    field("message", "Message", FieldKind::Text),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text),
    field("email", "Email", FieldKind::Text),
    field("message", "Message", FieldKind::Text),
];

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== Form shapes ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DonationForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(range(exclusive_min = 0.0, message = "Amount must be a positive number."))]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VolunteerForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 10, message = "Please enter a valid phone number."))]
    pub phone: String,
    /// Category code picked in the form (teaching, events, healthcare, admin, other).
    pub interest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartnerForm {
    #[validate(length(min = 2, message = "Company name must be at least 2 characters."))]
    pub company_name: String,
    #[validate(length(min = 2, message = "Contact person must be at least 2 characters."))]
    pub contact_person: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 10, message = "Please enter a valid phone number."))]
    pub phone: String,
    #[validate(length(min = 1, message = "Please describe your partnership proposal."))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters."))]
    pub message: String,
}

/// A validated submission, tagged by kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "formType")]
pub enum Inquiry {
    Donate(DonationForm),
    Volunteer(VolunteerForm),
    Partner(PartnerForm),
    Contact(ContactForm),
}

impl Inquiry {
    pub fn form_type(&self) -> FormType {
        match self {
            Inquiry::Donate(_) => FormType::Donate,
            Inquiry::Volunteer(_) => FormType::Volunteer,
            Inquiry::Partner(_) => FormType::Partner,
            Inquiry::Contact(_) => FormType::Contact,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Inquiry::Donate(f) => &f.email,
            Inquiry::Volunteer(f) => &f.email,
            Inquiry::Partner(f) => &f.email,
            Inquiry::Contact(f) => &f.email,
        }
    }
}

/// Read the discriminator. Missing, `null` and `""` all mean a contact message.
fn discriminator(payload: &Map<String, Value>) -> Result<FormType, FieldErrors> {
    match payload.get("formType") {
        None | Some(Value::Null) => Ok(FormType::Contact),
        Some(Value::String(s)) if s.is_empty() => Ok(FormType::Contact),
        Some(Value::String(s)) => FormType::parse(s)
            .ok_or_else(|| FieldErrors::single("formType", format!("Unknown form type '{s}'."))),
        Some(_) => Err(FieldErrors::single("formType", "Form type must be a string.")),
    }
}

/// Validate an untyped payload into an [`Inquiry`].
///
/// Every offending field is reported: missing and mistyped fields first,
/// then the per-form rules on whatever did arrive.
pub fn parse_inquiry(payload: &Value) -> Result<Inquiry, FieldErrors> {
    let Value::Object(map) = payload else {
        return Err(FieldErrors::single("form", "Submission must be a JSON object."));
    };

    let form_type = discriminator(map)?;
    let fields = form_type.fields();
    let inquiry = match form_type {
        FormType::Donate => Inquiry::Donate(read_form(map, fields)?),
        FormType::Volunteer => Inquiry::Volunteer(read_form(map, fields)?),
        FormType::Partner => Inquiry::Partner(read_form(map, fields)?),
        FormType::Contact => Inquiry::Contact(read_form(map, fields)?),
    };
    Ok(inquiry)
}

/// Validate a payload that must be of one specific kind (used by dialogs,
/// which fix their kind up front).
pub fn parse_inquiry_as(form_type: FormType, fields: &Value) -> Result<Inquiry, FieldErrors> {
    let mut map = match fields {
        Value::Object(map) => map.clone(),
        _ => return Err(FieldErrors::single("form", "Submission must be a JSON object.")),
    };
    map.insert(
        "formType".to_string(),
        Value::String(form_type.as_str().to_string()),
    );
    parse_inquiry(&Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn volunteer_payload() -> Value {
        json!({
            "formType": "Volunteer",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "1234567890",
            "interest": "teaching"
        })
    }

    // ==================== Discriminator Tests ====================

    #[test]
    fn test_missing_form_type_is_contact() {
        let inquiry = parse_inquiry(&json!({
            "name": "Asha",
            "email": "asha@example.com",
            "message": "I would like to know more."
        }))
        .expect("Should validate");

        assert_eq!(inquiry.form_type(), FormType::Contact);
    }

    #[test]
    fn test_untagged_and_tagged_contact_are_identical() {
        let untagged = json!({
            "name": "Asha",
            "email": "asha@example.com",
            "message": "I would like to know more."
        });
        let mut tagged = untagged.clone();
        tagged["formType"] = json!("Contact");

        assert_eq!(
            parse_inquiry(&untagged).expect("untagged"),
            parse_inquiry(&tagged).expect("tagged")
        );
    }

    #[test]
    fn test_null_and_empty_form_type_mean_contact() {
        for form_type in [json!(null), json!("")] {
            let inquiry = parse_inquiry(&json!({
                "formType": form_type,
                "name": "Asha",
                "email": "asha@example.com",
                "message": "I would like to know more."
            }))
            .expect("Should validate");
            assert_eq!(inquiry.form_type(), FormType::Contact);
        }
    }

    #[test]
    fn test_unknown_form_type_rejected() {
        let errors = parse_inquiry(&json!({
            "formType": "Sponsor",
            "name": "Asha",
            "email": "asha@example.com",
            "message": "I would like to know more."
        }))
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.get("formType").unwrap().contains("Sponsor"));
    }

    #[test]
    fn test_non_string_form_type_rejected() {
        let errors = parse_inquiry(&json!({"formType": 3})).unwrap_err();
        assert!(errors.contains("formType"));
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let errors = parse_inquiry(&json!(["Donate"])).unwrap_err();
        assert!(errors.contains("form"));
    }

    // ==================== Donate Tests ====================

    #[test]
    fn test_donation_accepts_numeric_string_amount() {
        let inquiry = parse_inquiry(&json!({
            "formType": "Donate",
            "name": "Ravi",
            "email": "ravi@example.com",
            "amount": "50.5",
            "message": ""
        }))
        .expect("Should validate");

        match inquiry {
            Inquiry::Donate(form) => {
                assert!((form.amount - 50.5).abs() < f64::EPSILON);
                assert!(form.message.is_none(), "blank message is dropped");
            }
            other => panic!("Expected donation, got {other:?}"),
        }
    }

    #[test]
    fn test_donation_negative_amount_rejected() {
        let errors = parse_inquiry(&json!({
            "formType": "Donate",
            "name": "A",
            "email": "a@b.com",
            "amount": -5
        }))
        .unwrap_err();

        assert_eq!(errors.get("amount"), Some("Amount must be a positive number."));
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters."));
    }

    #[test]
    fn test_donation_non_numeric_amount_rejected() {
        let errors = parse_inquiry(&json!({
            "formType": "Donate",
            "name": "Ravi",
            "email": "ravi@example.com",
            "amount": "fifty"
        }))
        .unwrap_err();

        assert_eq!(errors.get("amount"), Some("Amount must be a positive number."));
    }

    #[test]
    fn test_donation_missing_amount_names_field() {
        let errors = parse_inquiry(&json!({
            "formType": "Donate",
            "name": "Ravi",
            "email": "ravi@example.com"
        }))
        .unwrap_err();

        assert!(errors.contains("amount"));
    }

    #[test]
    fn test_missing_and_invalid_fields_reported_together() {
        let errors = parse_inquiry(&json!({
            "formType": "Donate",
            "name": "A",
            "email": "not-an-email"
        }))
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("amount"), Some("Amount is required."));
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters."));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address."));
    }

    #[test]
    fn test_boolean_amount_rejected_on_field() {
        let errors = parse_inquiry(&json!({
            "formType": "Donate",
            "name": "Ravi",
            "email": "ravi@example.com",
            "amount": true
        }))
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("amount"), Some("Amount must be a positive number."));
    }

    #[test]
    fn test_numeric_name_rejected_on_field() {
        let errors = parse_inquiry(&json!({
            "formType": "Donate",
            "name": 42,
            "email": "bad",
            "amount": 10
        }))
        .unwrap_err();

        assert_eq!(errors.get("name"), Some("Name must be a string."));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address."));
        assert!(!errors.contains("form"));
    }

    #[test]
    fn test_non_string_optional_message_rejected() {
        let errors = parse_inquiry(&json!({
            "formType": "Donate",
            "name": "Ravi",
            "email": "ravi@example.com",
            "amount": 10,
            "message": ["hi"]
        }))
        .unwrap_err();

        assert_eq!(errors.get("message"), Some("Message must be a string."));
    }

    // ==================== Volunteer Tests ====================

    #[test]
    fn test_volunteer_valid() {
        let inquiry = parse_inquiry(&volunteer_payload()).expect("Should validate");
        assert_eq!(inquiry.form_type(), FormType::Volunteer);
        assert_eq!(inquiry.email(), "jane@example.com");
    }

    #[test]
    fn test_volunteer_short_phone_rejected() {
        let mut payload = volunteer_payload();
        payload["phone"] = json!("12345");

        let errors = parse_inquiry(&payload).unwrap_err();
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number."));
    }

    #[test]
    fn test_volunteer_bad_email_rejected() {
        let mut payload = volunteer_payload();
        payload["email"] = json!("not-an-email");

        let errors = parse_inquiry(&payload).unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address."));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut payload = volunteer_payload();
        payload["utm_source"] = json!("newsletter");

        assert!(parse_inquiry(&payload).is_ok());
    }

    // ==================== Partner Tests ====================

    #[test]
    fn test_partner_uses_camel_case_fields() {
        let inquiry = parse_inquiry(&json!({
            "formType": "Partner",
            "companyName": "Global Corp",
            "contactPerson": "Alex Chen",
            "email": "alex@globalcorp.com",
            "phone": "+1 234 567 890",
            "message": "CSR collaboration on school libraries."
        }))
        .expect("Should validate");

        assert_eq!(inquiry.form_type(), FormType::Partner);
    }

    #[test]
    fn test_partner_errors_use_wire_names() {
        let errors = parse_inquiry(&json!({
            "formType": "Partner",
            "companyName": "G",
            "contactPerson": "A",
            "email": "alex@globalcorp.com",
            "phone": "+1 234 567 890",
            "message": ""
        }))
        .unwrap_err();

        assert!(errors.contains("companyName"));
        assert!(errors.contains("contactPerson"));
        assert!(errors.contains("message"));
        assert!(!errors.contains("company_name"));
    }

    #[test]
    fn test_empty_partner_payload_lists_every_field() {
        let errors = parse_inquiry(&json!({"formType": "Partner"})).unwrap_err();

        for field in ["companyName", "contactPerson", "email", "phone", "message"] {
            assert!(errors.contains(field), "missing {field}");
        }
        assert_eq!(errors.get("companyName"), Some("Company name is required."));
    }

    #[test]
    fn test_partner_message_required() {
        let errors = parse_inquiry(&json!({
            "formType": "Partner",
            "companyName": "Global Corp",
            "contactPerson": "Alex Chen",
            "email": "alex@globalcorp.com",
            "phone": "+1 234 567 890"
        }))
        .unwrap_err();

        assert!(errors.contains("message"));
    }

    // ==================== Contact Tests ====================

    #[test]
    fn test_contact_short_message_rejected() {
        let errors = parse_inquiry(&json!({
            "name": "Asha",
            "email": "asha@example.com",
            "message": "Hi"
        }))
        .unwrap_err();

        assert_eq!(errors.get("message"), Some("Message must be at least 10 characters."));
    }

    #[test]
    fn test_parse_inquiry_as_forces_kind() {
        let inquiry = parse_inquiry_as(
            FormType::Volunteer,
            &json!({
                "formType": "Donate",
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "1234567890",
                "interest": "events"
            }),
        )
        .expect("Should validate");

        assert_eq!(inquiry.form_type(), FormType::Volunteer);
    }

    // ==================== Helper Tests ====================

    #[test]
    fn test_wire_name() {
        assert_eq!(wire_name("company_name"), "companyName");
        assert_eq!(wire_name("email"), "email");
    }

    #[test]
    fn test_field_errors_first_message_wins() {
        let mut errors = FieldErrors::default();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_form_type_parse_roundtrip() {
        for form_type in FormType::ALL {
            assert_eq!(FormType::parse(form_type.as_str()), Some(form_type));
        }
        assert_eq!(FormType::parse("donate"), None);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_non_positive_amount_always_rejected(amount in -1_000_000.0f64..=0.0) {
            let result = parse_inquiry(&json!({
                "formType": "Donate",
                "name": "Ravi Kumar",
                "email": "ravi@example.com",
                "amount": amount
            }));
            let errors = result.unwrap_err();
            prop_assert!(errors.contains("amount"));
        }

        #[test]
        fn prop_positive_amount_accepted(amount in 0.01f64..1_000_000.0) {
            let result = parse_inquiry(&json!({
                "formType": "Donate",
                "name": "Ravi Kumar",
                "email": "ravi@example.com",
                "amount": amount
            }));
            prop_assert!(result.is_ok());
        }
    }
}
