use serde_json::{Map, Value};

/// Returns `true` if `value` is a finite JSON number.
///
/// Booleans, strings, `null`, arrays and objects are never numbers, even
/// where another representation might coerce them to one.
///
/// # Examples
///
/// ```
/// # use serde_json::json;
/// # use sales_total::is_number;
/// assert!(is_number(&json!(3)));
/// assert!(is_number(&json!(-0.25)));
/// assert!(!is_number(&json!(true)));
/// assert!(!is_number(&json!("3")));
/// assert!(!is_number(&json!(null)));
/// ```
#[must_use]
pub fn is_number(value: &Value) -> bool {
    number(value).is_some()
}

/// Returns the value of `value` as an `f64`, if it passes [`is_number`].
pub(crate) fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Returns the string field `key` of `object`, unless it is missing, not a
/// string, or blank.
///
/// The string is returned untrimmed.
pub(crate) fn text_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    match object.get(key) {
        Some(Value::String(s)) if !is_blank(s) => Some(s),
        _ => None,
    }
}

/// Returns `true` if `s` holds nothing but whitespace, counting the ASCII
/// file, group, record and unit separators as whitespace.
fn is_blank(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Returns the numeric field `key` of `object`, if it passes [`is_number`].
pub(crate) fn number_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    object.get(key).and_then(number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn is_number_fn_accepts_integers_and_floats() {
        assert!(is_number(&json!(0)));
        assert!(is_number(&json!(42)));
        assert!(is_number(&json!(-7)));
        assert!(is_number(&json!(u64::MAX)));
        assert!(is_number(&json!(1.5)));
        assert!(is_number(&json!(1e300)));
    }

    #[test]
    fn is_number_fn_rejects_booleans() {
        assert!(!is_number(&json!(true)));
        assert!(!is_number(&json!(false)));
    }

    #[test]
    fn is_number_fn_rejects_non_numeric_values() {
        assert!(!is_number(&json!("1.5")));
        assert!(!is_number(&json!(null)));
        assert!(!is_number(&json!([1])));
        assert!(!is_number(&json!({"price": 1})));
    }

    #[test]
    fn is_number_fn_rejects_non_finite_floats() {
        // serde_json stores non-finite floats as null
        assert!(!is_number(&json!(f64::NAN)));
        assert!(!is_number(&json!(f64::INFINITY)));
        assert!(!is_number(&json!(f64::NEG_INFINITY)));
    }

    #[test]
    fn text_field_fn_rejects_blank_and_non_string_values() {
        let object = json!({"ok": " Pen ", "blank": "   ", "num": 3});
        let object = object.as_object().unwrap();
        assert_eq!(text_field(object, "ok"), Some(" Pen "));
        assert_eq!(text_field(object, "blank"), None);
        assert_eq!(text_field(object, "num"), None);
        assert_eq!(text_field(object, "missing"), None);
    }

    #[test]
    fn text_field_fn_treats_separator_characters_as_blank() {
        let object = json!({"seps": "\x1c\x1d \x1e\x1f", "nbsp": "\u{a0}", "tagged": "\x1fPen"});
        let object = object.as_object().unwrap();
        assert_eq!(text_field(object, "seps"), None);
        assert_eq!(text_field(object, "nbsp"), None);
        assert_eq!(text_field(object, "tagged"), Some("\x1fPen"));
    }

    #[test]
    fn number_field_fn_returns_value_as_f64() {
        let object = json!({"int": 2, "float": 0.5, "bool": true});
        let object = object.as_object().unwrap();
        assert_eq!(number_field(object, "int"), Some(2.0));
        assert_eq!(number_field(object, "float"), Some(0.5));
        assert_eq!(number_field(object, "bool"), None);
        assert_eq!(number_field(object, "missing"), None);
    }
}
