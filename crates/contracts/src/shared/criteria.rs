use crate::shared::record::Record;

/// The active set of client-side predicates narrowing the cache to the
/// rendered view. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// `YYYY-MM` equality on a date field.
    pub month: Option<MonthFilter>,
    /// Exact equality on a tag field (e.g. tipo COMPRA/VENTA).
    pub tag: Option<TagFilter>,
    /// Case-insensitive substring match over one or more text fields.
    pub text: Option<TextFilter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthFilter {
    pub field: String,
    /// Selected month, `YYYY-MM`. Empty selects all months.
    pub month: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagFilter {
    pub field: String,
    /// Selected tag value. Empty selects all.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextFilter {
    pub fields: Vec<String>,
    pub query: String,
}

impl FilterCriteria {
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(m) = &self.month {
            if !m.month.is_empty() && record.month(&m.field).as_deref() != Some(m.month.as_str()) {
                return false;
            }
        }
        if let Some(t) = &self.tag {
            if !t.value.is_empty() && record.text(&t.field) != t.value {
                return false;
            }
        }
        if let Some(t) = &self.text {
            let query = t.query.trim().to_lowercase();
            if !query.is_empty() {
                let haystack = t
                    .fields
                    .iter()
                    .map(|f| record.text(f))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_lowercase();
                if !haystack.contains(&query) {
                    return false;
                }
            }
        }
        true
    }

    /// Project the view out of the cache, preserving order.
    pub fn apply<'a>(&self, cache: &'a [Record]) -> Vec<&'a Record> {
        cache.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movimiento(tipo: &str, fecha: &str, producto: &str) -> Record {
        Record::from_value(json!({
            "tipo": tipo,
            "fecha": fecha,
            "producto": producto,
            "contraparte": "Distribuidora Sur",
        }))
    }

    #[test]
    fn test_default_matches_all() {
        let cache = vec![
            movimiento("COMPRA", "2024-01-10", "Cafe"),
            movimiento("VENTA", "2024-02-01", "Azucar"),
        ];
        let view = FilterCriteria::default().apply(&cache);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_view_preserves_cache_order() {
        let cache = vec![
            movimiento("COMPRA", "2024-01-10", "Cafe"),
            movimiento("VENTA", "2024-01-11", "Azucar"),
            movimiento("COMPRA", "2024-01-12", "Harina"),
        ];
        let criteria = FilterCriteria {
            tag: Some(TagFilter { field: "tipo".into(), value: "COMPRA".into() }),
            ..Default::default()
        };
        let view = criteria.apply(&cache);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].text("producto"), "Cafe");
        assert_eq!(view[1].text("producto"), "Harina");
    }

    #[test]
    fn test_month_filter() {
        let cache = vec![
            movimiento("COMPRA", "2024-01-10", "Cafe"),
            movimiento("COMPRA", "2024-02-01", "Azucar"),
        ];
        let criteria = FilterCriteria {
            month: Some(MonthFilter { field: "fecha".into(), month: "2024-01".into() }),
            ..Default::default()
        };
        let view = criteria.apply(&cache);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].text("producto"), "Cafe");
    }

    #[test]
    fn test_empty_month_selects_all() {
        let cache = vec![movimiento("COMPRA", "2024-01-10", "Cafe")];
        let criteria = FilterCriteria {
            month: Some(MonthFilter { field: "fecha".into(), month: String::new() }),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&cache).len(), 1);
    }

    #[test]
    fn test_text_filter_spans_fields_case_insensitive() {
        let cache = vec![
            movimiento("COMPRA", "2024-01-10", "Cafe"),
            movimiento("VENTA", "2024-01-11", "Azucar"),
        ];
        let criteria = FilterCriteria {
            text: Some(TextFilter {
                fields: vec!["producto".into(), "contraparte".into()],
                query: "SUR".into(),
            }),
            ..Default::default()
        };
        // "sur" only appears in contraparte, shared by both rows.
        assert_eq!(criteria.apply(&cache).len(), 2);

        let criteria = FilterCriteria {
            text: Some(TextFilter {
                fields: vec!["producto".into()],
                query: "azu".into(),
            }),
            ..Default::default()
        };
        let view = criteria.apply(&cache);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].text("producto"), "Azucar");
    }

    #[test]
    fn test_combined_predicates() {
        let cache = vec![
            movimiento("COMPRA", "2024-01-10", "Cafe"),
            movimiento("VENTA", "2024-01-11", "Cafe"),
            movimiento("COMPRA", "2024-02-12", "Cafe"),
        ];
        let criteria = FilterCriteria {
            month: Some(MonthFilter { field: "fecha".into(), month: "2024-01".into() }),
            tag: Some(TagFilter { field: "tipo".into(), value: "COMPRA".into() }),
            text: Some(TextFilter { fields: vec!["producto".into()], query: "caf".into() }),
        };
        assert_eq!(criteria.apply(&cache).len(), 1);
    }
}
