//! Scalar token interpretation.

use crate::value::{Number, Value};

/// Convert a raw token into a typed value.
///
/// Recognition order: empty/`null`/`~`, booleans, quoted strings, integers,
/// floats, inline JSON arrays, and finally plain strings. Nothing here fails;
/// a token that does not parse as anything more specific stays a string.
pub fn parse_scalar(token: &str) -> Value {
    let token = token.trim();
    if token.is_empty() {
        return Value::Null;
    }

    match token.to_ascii_lowercase().as_str() {
        "null" | "~" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Some(inner) = unquote(token) {
        return Value::String(inner.to_string());
    }

    if let Some(number) = parse_number(token) {
        return Value::Number(number);
    }

    if token.starts_with('[')
        && token.ends_with(']')
        && let Ok(json) = serde_json::from_str::<serde_json::Value>(token)
    {
        return Value::from(json);
    }

    Value::String(token.to_string())
}

/// Strip one pair of matching surrounding quotes.
///
/// A lone `"` or `'` is not a quoted string and stays as written, rather than
/// collapsing to an empty string.
pub(crate) fn unquote(token: &str) -> Option<&str> {
    let first = token.chars().next()?;
    if token.len() >= 2 && (first == '"' || first == '\'') && token.ends_with(first) {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

/// Integer when there is no `.`, float when there is one.
fn parse_number(token: &str) -> Option<Number> {
    if token.contains('.') {
        token.parse::<f64>().ok().map(Number::Float)
    } else {
        token.parse::<i64>().ok().map(Number::Integer)
    }
}
