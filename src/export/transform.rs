//! Display transforms for CSV cells
//!
//! Each transform is a pure, total function from a resolved value to its
//! display string. `None` stands for a path that did not resolve.
//!
//! Transforms are referenced from configuration tables through [`Transform`],
//! which pairs the function with the name used in definition files.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Signature shared by all transforms
pub type TransformFn = fn(Option<&Value>) -> String;

/// Output format for timestamps
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder rendered for absent dates and empty values
pub const DASH: &str = "-";

/// A named transform
#[derive(Clone, Copy)]
pub struct Transform {
    name: &'static str,
    apply: TransformFn,
}

impl Transform {
    /// Pair a transform function with its lookup name
    pub const fn new(name: &'static str, apply: TransformFn) -> Self {
        Self { name, apply }
    }

    /// Name used in definition files
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render a resolved value
    pub fn apply(&self, value: Option<&Value>) -> String {
        (self.apply)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.name).finish()
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Transform {}

pub const TEXT: Transform = Transform::new("text", text);
pub const YES_NO: Transform = Transform::new("yes_no", yes_no);
pub const DATE: Transform = Transform::new("date", date);
pub const DATE_OR_DASH: Transform = Transform::new("date_or_dash", date_or_dash);
pub const NUMBER_OR_ZERO: Transform = Transform::new("number_or_zero", number_or_zero);
pub const CURRENCY: Transform = Transform::new("currency", currency);
pub const DASH_IF_EMPTY: Transform = Transform::new("dash_if_empty", dash_if_empty);
pub const LIST: Transform = Transform::new("list", list);

/// Every transform that can be referenced by name
pub const ALL: &[Transform] = &[
    TEXT,
    YES_NO,
    DATE,
    DATE_OR_DASH,
    NUMBER_OR_ZERO,
    CURRENCY,
    DASH_IF_EMPTY,
    LIST,
];

/// Find a transform by its name
pub fn lookup(name: &str) -> Option<Transform> {
    ALL.iter().copied().find(|t| t.name == name)
}

/// Default string coercion
///
/// Missing and null values render as the empty string.
pub fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => format_number(n),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(obj @ Value::Object(_)) => obj.to_string(),
    }
}

/// `Yes` for truthy values, `No` otherwise
pub fn yes_no(value: Option<&Value>) -> String {
    let label = if is_truthy(value) { "Yes" } else { "No" };
    label.to_string()
}

/// Format a date or timestamp, empty when absent
pub fn date(value: Option<&Value>) -> String {
    render_date(value).unwrap_or_default()
}

/// Format a date or timestamp, `-` when absent
pub fn date_or_dash(value: Option<&Value>) -> String {
    render_date(value).unwrap_or_else(|| DASH.to_string())
}

/// Numeric value, `0` when absent or not a number
pub fn number_or_zero(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => format_number(n),
        Some(Value::String(s)) if parse_number(s).is_some() => s.trim().to_string(),
        _ => "0".to_string(),
    }
}

/// Amount with two decimals, `0.00` when absent or not a number
pub fn currency(value: Option<&Value>) -> String {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_number(s),
        _ => None,
    };
    format!("{:.2}", amount.unwrap_or(0.0))
}

/// Default coercion, `-` when that renders nothing
pub fn dash_if_empty(value: Option<&Value>) -> String {
    let rendered = text(value);
    if rendered.trim().is_empty() {
        DASH.to_string()
    } else {
        rendered
    }
}

/// Array elements joined by `; `
pub fn list(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text(Some(item)))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        other => text(other),
    }
}

/// Truthiness of a resolved value
///
/// Missing, null, `false`, zero and the empty string are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn render_date(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
                return Some(dt.format(DATETIME_FORMAT).to_string());
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(dt.format(DATETIME_FORMAT).to_string());
            }
            if let Ok(d) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
                return Some(d.format(DATE_FORMAT).to_string());
            }
            Some(trimmed.to_string())
        }
        Some(other) => Some(text(Some(other))),
    }
}
