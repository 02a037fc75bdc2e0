use serde_json::{Map, Value};

/// One row of a domain collection as delivered by the backend.
///
/// Field sets vary per collection, so rows are kept as JSON objects behind
/// typed accessors instead of one struct per table. Numeric fields arriving
/// as strings are converted exactly once, at ingestion (`normalize`), so no
/// call site re-coerces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Ingest a raw server value. Anything that is not a JSON object is
    /// coerced to an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self(Map::new()),
        }
    }

    /// Coerce the declared numeric fields to JSON numbers in place.
    ///
    /// Strings that do not parse are left verbatim so the table still shows
    /// what the server sent; `number()` treats them as absent.
    pub fn normalize(mut self, numeric_fields: &[&str]) -> Self {
        for field in numeric_fields {
            if let Some(Value::String(s)) = self.0.get(*field) {
                if let Ok(n) = s.trim().parse::<f64>() {
                    if let Some(n) = serde_json::Number::from_f64(n) {
                        self.0.insert((*field).to_string(), Value::Number(n));
                    }
                }
            }
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Display text for a field. Null and missing render as empty, numbers
    /// render without a trailing `.0` when integral.
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else {
                    n.to_string()
                }
            }
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Numeric value of a field, or `None` when missing or non-numeric.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.0.get(field) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Identifier value of a field. Servers send numeric ids while form
    /// state carries strings, so both shapes are accepted.
    pub fn id(&self, field: &str) -> Option<i64> {
        match self.0.get(field) {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// `true` when the record's identifier field equals `id`, tolerating the
    /// string-vs-number mismatch between form fields and server ids.
    pub fn id_matches(&self, field: &str, id: i64) -> bool {
        self.id(field) == Some(id)
    }

    /// `YYYY-MM` key of an ISO date field (`2024-01-15`,
    /// `2024-01-15T10:30:00` and variants all map to `2024-01`).
    pub fn month(&self, field: &str) -> Option<String> {
        let raw = self.text(field);
        month_key(&raw)
    }
}

/// Extract the `YYYY-MM` key of an ISO-ish date string. A real date parse
/// comes first; values that are not full dates (`2024-01`) fall back to a
/// plain prefix check.
pub fn month_key(date: &str) -> Option<String> {
    let date = date.trim();
    let day_part = date.split('T').next().unwrap_or(date);
    if let Ok(parsed) = chrono::NaiveDate::parse_from_str(day_part, "%Y-%m-%d") {
        return Some(parsed.format("%Y-%m").to_string());
    }
    let bytes = date.as_bytes();
    if bytes.len() >= 7
        && bytes[0..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
    {
        // The first seven bytes are ASCII, so the slice is safe.
        return Some(date[..7].to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value)
    }

    #[test]
    fn test_non_object_coerced_to_empty() {
        assert_eq!(record(json!([1, 2, 3])).text("nombre"), "");
        assert_eq!(record(json!("x")).number("total"), None);
    }

    #[test]
    fn test_text_renders_null_and_numbers() {
        let r = record(json!({"nombre": "Harina", "stock": 12, "nota": null}));
        assert_eq!(r.text("nombre"), "Harina");
        assert_eq!(r.text("stock"), "12");
        assert_eq!(r.text("nota"), "");
        assert_eq!(r.text("ausente"), "");
    }

    #[test]
    fn test_number_treats_non_numeric_as_absent() {
        let r = record(json!({"total": "12.50", "estado": "PAGADA", "cantidad": 3}));
        assert_eq!(r.number("total"), Some(12.5));
        assert_eq!(r.number("cantidad"), Some(3.0));
        assert_eq!(r.number("estado"), None);
    }

    #[test]
    fn test_id_accepts_number_and_numeric_string() {
        let r = record(json!({"id_producto": 7}));
        let s = record(json!({"id_producto": "7"}));
        assert!(r.id_matches("id_producto", 7));
        assert!(s.id_matches("id_producto", 7));
        assert!(!s.id_matches("id_producto", 8));
    }

    #[test]
    fn test_normalize_coerces_declared_fields_once() {
        let r = record(json!({"cantidad": "4", "precio_unitario": "2.5", "producto": "Cafe"}))
            .normalize(&["cantidad", "precio_unitario"]);
        assert_eq!(r.get("cantidad"), Some(&json!(4.0)));
        assert_eq!(r.get("precio_unitario"), Some(&json!(2.5)));
        // Undeclared fields stay verbatim.
        assert_eq!(r.get("producto"), Some(&json!("Cafe")));
    }

    #[test]
    fn test_normalize_keeps_unparseable_values_verbatim() {
        let r = record(json!({"cantidad": "n/a"})).normalize(&["cantidad"]);
        assert_eq!(r.text("cantidad"), "n/a");
        assert_eq!(r.number("cantidad"), None);
    }

    #[test]
    fn test_month_key_variants() {
        assert_eq!(month_key("2024-01-15"), Some("2024-01".into()));
        assert_eq!(month_key("2024-01-15T10:30:00"), Some("2024-01".into()));
        assert_eq!(month_key("2024-01"), Some("2024-01".into()));
        assert_eq!(month_key(""), None);
        assert_eq!(month_key("ayer"), None);
    }

    #[test]
    fn test_month_of_date_field() {
        let r = record(json!({"fecha": "2024-02-03"}));
        assert_eq!(r.month("fecha"), Some("2024-02".into()));
        assert_eq!(r.month("otro"), None);
    }
}
