//! The value gate
//!
//! Every value entering a [`JsonObject`] or [`JsonArray`] passes through
//! [`gate`]. It either keeps the value as-is, canonicalizes it into a
//! JSON-safe form, copies it, or refuses it.
//!
//! | Source                         | Stored as                                   |
//! |--------------------------------|---------------------------------------------|
//! | null, number, bool, string, char | unchanged                                 |
//! | other string-like              | `String`                                    |
//! | `JsonObject` / `JsonArray`     | same handle, or a deep copy in `Deep` mode  |
//! | plain map / list               | new `JsonObject` / `JsonArray`              |
//! | bytes                          | standard base64 string                      |
//! | instant, system time           | ISO-8601 instant string (`...Z`)            |
//! | decimal, anything else         | [`JsonError::IllegalValueKind`]             |
//!
//! The gate is pure: it never touches shared state and never mutates its
//! input, so it can be called from any number of threads.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::collections::{JsonArray, JsonObject};
use crate::core::source::Source;
use crate::core::value::JsonValue;
use crate::error::{JsonError, JsonResult};

/// How nested containers are carried into their new parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CopyMode {
    /// Keep the caller's handle: parent and caller share the container, and a
    /// mutation through either is visible to both.
    #[default]
    Shared,
    /// Store a structurally independent deep copy.
    Deep,
}

impl CopyMode {
    #[inline]
    #[must_use]
    pub const fn is_deep(self) -> bool {
        matches!(self, Self::Deep)
    }
}

impl From<bool> for CopyMode {
    fn from(deep: bool) -> Self {
        if deep { Self::Deep } else { Self::Shared }
    }
}

/// Validate and canonicalize a value for storage in a JSON container
///
/// Arms are ordered most-specific first: the JSON containers are matched
/// before the plain map and list shapes.
///
/// # Errors
///
/// Returns [`JsonError::IllegalValueKind`] naming the offending type when the
/// value is an arbitrary-precision decimal or an opaque value.
pub fn gate(value: Source, mode: CopyMode) -> JsonResult<JsonValue> {
    let gated = match value {
        Source::Null => JsonValue::Null,
        Source::Number(n) => JsonValue::Number(n),
        Source::Bool(b) => JsonValue::Bool(b),
        Source::String(s) => JsonValue::String(s),
        Source::Char(c) => JsonValue::Char(c),
        Source::CharSequence(s) => JsonValue::String((*s).as_ref().to_owned()),
        Source::Object(obj) => JsonValue::Object(if mode.is_deep() { obj.copy() } else { obj }),
        Source::Array(arr) => JsonValue::Array(if mode.is_deep() { arr.copy() } else { arr }),
        Source::Map(map) => JsonValue::Object(JsonObject::from_map(map, mode)?),
        Source::List(list) => JsonValue::Array(JsonArray::from_list(list, mode)?),
        Source::Bytes(bytes) => JsonValue::String(encode_base64(&bytes)),
        Source::Instant(instant) => JsonValue::String(format_instant(&instant)),
        Source::SystemTime(time) => JsonValue::String(format_system_time(time)),
        other @ (Source::Decimal(_) | Source::Opaque { .. }) => {
            let type_name = other.type_name();
            tracing::warn!(type_name, "rejected value of illegal type");
            return Err(JsonError::illegal_value_kind(type_name));
        }
    };
    Ok(gated)
}

/// Standard alphabet, padded.
fn encode_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// `2024-01-01T00:00:00Z`; fractional seconds only when non-zero, printed
/// as 3, 6 or 9 digits.
fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Same format as [`format_instant`], for any `SystemTime` the platform
/// can hold. Readings outside chrono's year range (about ±262 000 years)
/// are converted by hand on the proleptic Gregorian calendar.
fn format_system_time(time: SystemTime) -> String {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (i128::from(after.as_secs()), after.subsec_nanos()),
        Err(before) => {
            let before = before.duration();
            let secs = -i128::from(before.as_secs());
            match before.subsec_nanos() {
                0 => (secs, 0),
                n => (secs - 1, 1_000_000_000 - n),
            }
        }
    };

    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, nanos))
        .map_or_else(|| format_civil(secs, nanos), |instant| format_instant(&instant))
}

/// `secs` since the epoch as `[+-]YYYY-MM-DDThh:mm:ss[.fff]Z`.
fn format_civil(secs: i128, nanos: u32) -> String {
    let (year, month, day) = civil_from_days(secs.div_euclid(86_400));
    let of_day = secs.rem_euclid(86_400);
    let year = match year {
        0..=9999 => format!("{year:04}"),
        y if y > 9999 => format!("+{y}"),
        y => format!("-{:04}", -y),
    };
    format!(
        "{year}-{month:02}-{day:02}T{:02}:{:02}:{:02}{}Z",
        of_day / 3600,
        of_day % 3600 / 60,
        of_day % 60,
        fraction(nanos),
    )
}

/// Days since 1970-01-01 to (year, month, day).
fn civil_from_days(days: i128) -> (i128, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i128::from(month <= 2);
    (year, month, day)
}

/// Fraction digits matching `SecondsFormat::AutoSi`.
fn fraction(nanos: u32) -> String {
    match nanos {
        0 => String::new(),
        n if n % 1_000_000 == 0 => format!(".{:03}", n / 1_000_000),
        n if n % 1_000 == 0 => format!(".{:06}", n / 1_000),
        n => format!(".{n:09}"),
    }
}

impl Source {
    /// Pass this value through the [`gate`]
    pub fn gate(self, mode: CopyMode) -> JsonResult<JsonValue> {
        gate(self, mode)
    }
}
