//! Validation rules for the site's forms
//!
//! Field-level rules (required, email, phone, name, minimum length), the
//! cross-field rules of the bulk-order and gift forms, delivery date windows and
//! the as-you-type phone formatter.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Shortest accepted name
pub const MIN_NAME_LENGTH: usize = 2;

/// Smallest area (sq ft) accepted for a 1000+ plant order
pub const MIN_LARGE_ORDER_AREA: i64 = 1000;

/// Furthest delivery date, in months from today
pub const MAX_DELIVERY_MONTHS: u32 = 3;

/// Quantity tier that requires a large area
pub const LARGE_QUANTITY: &str = "1000+";

/// Field names validated with the name rule
pub const NAME_FIELDS: [&str; 3] = ["contactName", "firstName", "lastName"];

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is blank
    Required,
    /// Not shaped like `local@domain.tld`
    InvalidEmail,
    /// Not a 10 digit phone number
    InvalidPhone,
    /// Name contains something other than letters, spaces, hyphens and apostrophes
    InvalidName,
    /// Shorter than the field's minimum length
    TooShort { min: usize },
    /// Corporate project without an organization
    OrganizationRequired,
    /// 1000+ plants for a small area
    AreaTooSmall,
    /// Date before the earliest delivery day
    DateInPast,
    /// Date beyond the delivery window
    DateTooFar,
    /// No deliveries on Sundays
    SundayDelivery,
    /// 1000+ plants for a residential project
    QuantityTooLarge,
    /// Value that is not a date
    InvalidDate,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ValidationError::InvalidPhone => write!(f, "Please enter a valid phone number"),
            ValidationError::InvalidName => {
                write!(f, "Please enter a valid name (letters only)")
            }
            ValidationError::TooShort { min } => {
                write!(f, "Minimum {} characters required", min)
            }
            ValidationError::OrganizationRequired => {
                write!(f, "Organization name is required for corporate projects")
            }
            ValidationError::AreaTooSmall => write!(
                f,
                "Area size should be at least {} sq ft for {} plants",
                MIN_LARGE_ORDER_AREA, LARGE_QUANTITY
            ),
            ValidationError::DateInPast => write!(f, "Delivery date cannot be in the past"),
            ValidationError::DateTooFar => write!(
                f,
                "Delivery date cannot be more than {} months from now",
                MAX_DELIVERY_MONTHS
            ),
            ValidationError::SundayDelivery => write!(f, "Delivery not available on Sundays"),
            ValidationError::QuantityTooLarge => {
                write!(f, "Quantity too large for residential projects")
            }
            ValidationError::InvalidDate => write!(f, "Please enter a valid date"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Input type of a form field, as far as validation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Date,
    Select,
    TextArea,
}

impl FieldKind {
    /// Value for the HTML `type` attribute (selects and textareas have none)
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Select | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
        }
    }
}

/// Static description of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            min_length: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn is_name_field(&self) -> bool {
        is_name_field(self.name)
    }
}

pub fn is_name_field(name: &str) -> bool {
    NAME_FIELDS.contains(&name)
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain with
/// text on both sides
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Ten digits grouped 3-3-4, optionally `(xxx)` and with `-`, `.` or whitespace
/// separators, e.g. `(555) 123-4567`, `555.123.4567`, `5551234567`
pub fn is_valid_phone(phone: &str) -> bool {
    let chars: Vec<char> = phone.chars().collect();
    let mut pos = 0;

    let eat = |pos: &mut usize, pred: &dyn Fn(char) -> bool| -> bool {
        match chars.get(*pos) {
            Some(&c) if pred(c) => {
                *pos += 1;
                true
            }
            _ => false,
        }
    };
    let is_separator = |c: char| c == '-' || c == '.' || c.is_whitespace();
    let digits = |pos: &mut usize, count: usize| -> bool {
        (0..count).all(|_| eat(pos, &|c: char| c.is_ascii_digit()))
    };

    eat(&mut pos, &|c| c == '(');
    if !digits(&mut pos, 3) {
        return false;
    }
    eat(&mut pos, &|c| c == ')');
    eat(&mut pos, &is_separator);
    if !digits(&mut pos, 3) {
        return false;
    }
    eat(&mut pos, &is_separator);
    if !digits(&mut pos, 4) {
        return false;
    }
    pos == chars.len()
}

/// Letters, whitespace, apostrophes and hyphens only, at least two characters
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LENGTH
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-')
}

/// Reformat whatever is in a phone input as `(xxx) xxx-xxxx`.
///
/// Runs on every keystroke, so partial input formats partially: fewer than 3
/// digits are left alone, 3 to 5 become `(xxx) ` plus the rest, and digits past
/// the tenth are dropped.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();
    if len >= 6 {
        format!(
            "({}) {}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..len.min(10)]
        )
    } else if len >= 3 {
        format!("({}) {}", &digits[0..3], &digits[3..])
    } else {
        digits
    }
}

/// Validate one field's value. The first failing rule wins.
///
/// The format rules are mutually exclusive by field type, so a filled email
/// field is never checked against a minimum length.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();

    if spec.required && value.is_empty() {
        return Err(ValidationError::Required);
    }

    if spec.kind == FieldKind::Email && !value.is_empty() {
        return if is_valid_email(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail)
        };
    }

    if spec.kind == FieldKind::Tel && !value.is_empty() {
        return if is_valid_phone(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone)
        };
    }

    if spec.is_name_field() && !value.is_empty() {
        return if is_valid_name(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidName)
        };
    }

    match spec.min_length {
        Some(min) if value.chars().count() < min => Err(ValidationError::TooShort { min }),
        _ => Ok(()),
    }
}

/// Parse the `YYYY-MM-DD` value of a date input
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Earliest selectable delivery day
pub fn earliest_delivery(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

/// Latest selectable delivery day: the same day of the month three months
/// out. A day missing from that month rolls over into the next one, so
/// 30 November reaches 2 March.
pub fn latest_delivery(today: NaiveDate) -> NaiveDate {
    let months = today.month0() + MAX_DELIVERY_MONTHS;
    let year = today.year() + (months / 12) as i32;
    NaiveDate::from_ymd_opt(year, months % 12 + 1, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(today.day0()))))
        .unwrap_or(NaiveDate::MAX)
}

/// Delivery must be tomorrow or later, at most three months out, and not on a Sunday
pub fn validate_delivery_date(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date < earliest_delivery(today) {
        return Err(ValidationError::DateInPast);
    }
    if date > latest_delivery(today) {
        return Err(ValidationError::DateTooFar);
    }
    if date.weekday() == Weekday::Sun {
        return Err(ValidationError::SundayDelivery);
    }
    Ok(())
}

/// Same rules for the raw input value. A cleared input is left to the
/// required rule.
pub fn validate_delivery_input(value: &str, today: NaiveDate) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    let date = parse_date(value).ok_or(ValidationError::InvalidDate)?;
    validate_delivery_date(date, today)
}

/// Gift deliveries may not be scheduled before today. Blank or unparsable
/// values are left to the field rules.
pub fn validate_gift_date(value: &str, today: NaiveDate) -> Result<(), ValidationError> {
    match parse_date(value) {
        Some(date) if date < today => Err(ValidationError::DateInPast),
        _ => Ok(()),
    }
}

/// Corporate projects must name their organization
pub fn validate_organization(project_type: &str, organization: &str) -> Result<(), ValidationError> {
    if project_type == "corporate" && organization.trim().is_empty() {
        Err(ValidationError::OrganizationRequired)
    } else {
        Ok(())
    }
}

/// Orders of 1000+ plants need at least 1000 sq ft. A missing or non-numeric
/// area counts as too small.
pub fn validate_area(quantity: &str, area_size: &str) -> Result<(), ValidationError> {
    if quantity != LARGE_QUANTITY {
        return Ok(());
    }
    match parse_leading_int(area_size) {
        Some(area) if area >= MIN_LARGE_ORDER_AREA => Ok(()),
        _ => Err(ValidationError::AreaTooSmall),
    }
}

/// Residential projects cannot order the largest tier
pub fn validate_quantity(project_type: &str, quantity: &str) -> Result<(), ValidationError> {
    if project_type == "residential" && quantity == LARGE_QUANTITY {
        Err(ValidationError::QuantityTooLarge)
    } else {
        Ok(())
    }
}

/// Integer prefix of a string: `"1500 sq ft"` is 1500, `"abc"` is `None`
fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| n * sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "ana@example.com",
            "first.last@garden.co.uk",
            "x@y.z",
            "tag+plants@mail.io",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plain",
            "no-at.example.com",
            "@example.com",
            "ana@example",
            "ana@.com",
            "ana@example.",
            "ana @example.com",
            "ana@exa mple.com",
            "a@b@c.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_phone_patterns() {
        for phone in [
            "(555) 123-4567",
            "555-123-4567",
            "555.123.4567",
            "5551234567",
            "(555)123-4567",
        ] {
            assert!(is_valid_phone(phone), "{phone} should be valid");
        }
        for phone in ["555-1234", "(555) 123-45678", "phone", "555_123_4567", ""] {
            assert!(!is_valid_phone(phone), "{phone} should be invalid");
        }
    }

    #[test]
    fn test_names() {
        assert!(is_valid_name("Ana"));
        assert!(is_valid_name("Mary-Jane O'Neil"));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("Zoë"));
    }

    #[test]
    fn test_format_phone_incrementally() {
        let digits = "55512345678901";
        let mut value = String::new();
        for (i, d) in digits.chars().enumerate() {
            value.push(d);
            value = format_phone(&value);
            let typed = i + 1;
            match typed {
                1 | 2 => assert_eq!(value, &digits[..typed]),
                3..=5 => assert_eq!(value, format!("(555) {}", &digits[3..typed])),
                _ => {}
            }
        }
        assert_eq!(value, "(555) 123-4567");
        assert!(is_valid_phone(&value));
    }

    #[test]
    fn test_format_phone_partial() {
        assert_eq!(format_phone("555"), "(555) ");
        assert_eq!(format_phone("55512"), "(555) 12");
        assert_eq!(format_phone("555123"), "(555) 123-");
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("ab"), "");
    }

    #[test]
    fn test_rule_order_required_first() {
        let spec = FieldSpec::new("email", "Email", FieldKind::Email).required();
        assert_eq!(validate_field(&spec, "   "), Err(ValidationError::Required));
        assert_eq!(
            validate_field(&spec, "nope"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_field(&spec, " ana@example.com "), Ok(()));
    }

    #[test]
    fn test_optional_fields_accept_blank() {
        let phone = FieldSpec::new("phone", "Phone", FieldKind::Tel);
        assert_eq!(validate_field(&phone, ""), Ok(()));
        assert_eq!(
            validate_field(&phone, "12"),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn test_name_rule_applies_by_field_name() {
        let first = FieldSpec::new("firstName", "First name", FieldKind::Text).required();
        assert_eq!(
            validate_field(&first, "J"),
            Err(ValidationError::InvalidName)
        );
        let city = FieldSpec::new("city", "City", FieldKind::Text);
        assert_eq!(validate_field(&city, "J"), Ok(()));
    }

    #[test]
    fn test_min_length() {
        let message = FieldSpec::new("message", "Message", FieldKind::TextArea)
            .required()
            .min_length(10);
        assert_eq!(
            validate_field(&message, "too short"),
            Err(ValidationError::TooShort { min: 10 })
        );
        assert_eq!(validate_field(&message, "long enough text"), Ok(()));
        assert_eq!(
            ValidationError::TooShort { min: 10 }.to_string(),
            "Minimum 10 characters required"
        );
    }

    #[test]
    fn test_min_length_skipped_for_email() {
        let spec = FieldSpec::new("email", "Email", FieldKind::Email).min_length(50);
        assert_eq!(validate_field(&spec, "a@b.co"), Ok(()));
    }

    #[test]
    fn test_delivery_before_tomorrow_is_past() {
        let today = date(2026, 10, 19);
        assert_eq!(
            validate_delivery_date(today, today),
            Err(ValidationError::DateInPast)
        );
        assert_eq!(
            validate_delivery_date(date(2026, 1, 1), today),
            Err(ValidationError::DateInPast)
        );
        assert_eq!(validate_delivery_date(date(2026, 10, 20), today), Ok(()));
    }

    #[test]
    fn test_delivery_window_upper_bound() {
        let today = date(2026, 10, 19);
        // 2027-01-19 is a Tuesday
        assert_eq!(validate_delivery_date(date(2027, 1, 19), today), Ok(()));
        assert_eq!(
            validate_delivery_date(date(2027, 1, 20), today),
            Err(ValidationError::DateTooFar)
        );
    }

    #[test]
    fn test_window_rolls_over_short_months() {
        let today = date(2026, 11, 30);
        assert_eq!(latest_delivery(today), date(2027, 3, 2));
        // 2027-03-01 is a Monday
        assert_eq!(validate_delivery_input("2027-03-01", today), Ok(()));
        assert_eq!(
            validate_delivery_input("2027-03-03", today),
            Err(ValidationError::DateTooFar)
        );
        assert_eq!(latest_delivery(date(2026, 10, 19)), date(2027, 1, 19));
    }

    #[test]
    fn test_every_sunday_in_window_is_rejected() {
        let today = date(2026, 10, 19);
        let mut day = earliest_delivery(today);
        let mut sundays = 0;
        while day <= latest_delivery(today) {
            let result = validate_delivery_date(day, today);
            if day.weekday() == Weekday::Sun {
                sundays += 1;
                assert_eq!(result, Err(ValidationError::SundayDelivery));
            } else {
                assert_eq!(result, Ok(()));
            }
            day = day.succ_opt().unwrap();
        }
        assert!(sundays >= 12);
    }

    #[test]
    fn test_delivery_input_parsing() {
        let today = date(2026, 10, 19);
        assert_eq!(validate_delivery_input("2026-10-21", today), Ok(()));
        assert_eq!(
            validate_delivery_input("21/10/2026", today),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn test_cleared_delivery_input_has_no_error() {
        let today = date(2026, 10, 19);
        assert_eq!(validate_delivery_input("", today), Ok(()));
        assert_eq!(validate_delivery_input("   ", today), Ok(()));
    }

    #[test]
    fn test_gift_date_allows_today() {
        let today = date(2026, 10, 19);
        assert_eq!(validate_gift_date("2026-10-19", today), Ok(()));
        assert_eq!(
            validate_gift_date("2026-10-18", today),
            Err(ValidationError::DateInPast)
        );
        assert_eq!(validate_gift_date("", today), Ok(()));
    }

    #[test]
    fn test_bulk_order_rules() {
        assert_eq!(
            validate_organization("corporate", "  "),
            Err(ValidationError::OrganizationRequired)
        );
        assert_eq!(validate_organization("corporate", "Acme"), Ok(()));
        assert_eq!(validate_organization("school", ""), Ok(()));

        assert_eq!(
            validate_area("1000+", ""),
            Err(ValidationError::AreaTooSmall)
        );
        assert_eq!(
            validate_area("1000+", "999"),
            Err(ValidationError::AreaTooSmall)
        );
        assert_eq!(validate_area("1000+", "1000"), Ok(()));
        assert_eq!(validate_area("1000+", "2500 sq ft"), Ok(()));
        assert_eq!(validate_area("100-500", ""), Ok(()));
    }

    #[test]
    fn test_quantity_rule_is_residential_only() {
        assert_eq!(
            validate_quantity("residential", "1000+"),
            Err(ValidationError::QuantityTooLarge)
        );
        assert_eq!(validate_quantity("corporate", "1000+"), Ok(()));
        // small corporate orders are accepted as-is
        assert_eq!(validate_quantity("corporate", "50-100"), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::AreaTooSmall.to_string(),
            "Area size should be at least 1000 sq ft for 1000+ plants"
        );
        assert_eq!(
            ValidationError::DateTooFar.to_string(),
            "Delivery date cannot be more than 3 months from now"
        );
    }
}
