//! Canonical JSON bytes: the single serialization used for structural keys.
//!
//! Every container in this crate identifies values by a key derived from
//! this canonical form, so there must be **exactly one** canonicalizer in
//! the workspace. Two values that are structurally equal must canonicalize
//! to identical bytes regardless of how their maps were populated.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are emitted in lexicographic byte order.
//! 2. Compact form, no whitespace: `{"a":1,"b":[2,3]}`.
//! 3. Strings are escaped per RFC 8259 §7.
//! 4. Numbers must be integers (`i64` or `u64`). Floats, NaN, and Infinity
//!    are rejected: their textual form is not stable across platforms, and
//!    an unstable key silently breaks container identity.
//! 5. `null`, `true`, `false` are written literally.

use std::io::Write;

/// Failure to canonicalize a `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not representable as `i64` or `u64`.
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes for `value`.
///
/// The output is valid UTF-8 and deterministic: equal values yield equal
/// bytes independent of map insertion order or source formatting.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// an integer.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    emit_value(&mut out, value)?;
    Ok(out)
}

fn emit_value(out: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Null => out.extend_from_slice(b"null"),
        serde_json::Value::Bool(true) => out.extend_from_slice(b"true"),
        serde_json::Value::Bool(false) => out.extend_from_slice(b"false"),
        serde_json::Value::Number(n) => emit_number(out, n)?,
        serde_json::Value::String(s) => emit_string(out, s),
        serde_json::Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit_value(out, item)?;
            }
            out.push(b']');
        }
        serde_json::Value::Object(fields) => {
            let mut names: Vec<&String> = fields.keys().collect();
            names.sort();

            out.push(b'{');
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit_string(out, name);
                out.push(b':');
                emit_value(out, &fields[*name])?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

fn emit_number(out: &mut Vec<u8>, n: &serde_json::Number) -> Result<(), CanonError> {
    // i64 first so negatives land there; u64 covers the large-positive tail.
    if let Some(i) = n.as_i64() {
        let _ = write!(out, "{i}");
        Ok(())
    } else if let Some(u) = n.as_u64() {
        let _ = write!(out, "{u}");
        Ok(())
    } else {
        Err(CanonError::NonIntegerNumber { raw: n.to_string() })
    }
}

fn emit_string(out: &mut Vec<u8>, s: &str) {
    out.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let mut utf8 = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
    out.push(b'"');
}
