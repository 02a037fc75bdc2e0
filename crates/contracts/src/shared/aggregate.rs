use std::collections::BTreeMap;

use crate::shared::record::Record;

/// How view rows are grouped when summing a value field.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupKey {
    /// Group by the `YYYY-MM` month of a date field. Rows without a
    /// parseable date land under an empty key.
    Month(String),
    /// Group by the verbatim value of a tag field.
    Field(String),
}

impl GroupKey {
    fn of(&self, record: &Record) -> String {
        match self {
            GroupKey::Month(field) => record.month(field).unwrap_or_default(),
            GroupKey::Field(field) => record.text(field),
        }
    }
}

/// Sum `value_field` across the rows of a view, grouped by `key`.
///
/// Non-numeric or missing values contribute zero; the display layer keeps
/// showing them verbatim. The result is ordered by group for stable totals
/// rendering.
pub fn aggregate(view: &[&Record], key: &GroupKey, value_field: &str) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for record in view {
        let group = key.of(record);
        let value = record.number(value_field).unwrap_or(0.0);
        *totals.entry(group).or_insert(0.0) += value;
    }
    totals
}

/// Plain sum of `value_field` across a view, missing values counting zero.
pub fn total(view: &[&Record], value_field: &str) -> f64 {
    view.iter()
        .map(|r| r.number(value_field).unwrap_or(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::criteria::{FilterCriteria, MonthFilter};
    use serde_json::json;

    fn compra(fecha: &str, total: f64) -> Record {
        Record::from_value(json!({"fecha": fecha, "total": total, "proveedor": "Norte"}))
    }

    #[test]
    fn test_empty_view_yields_empty_mapping() {
        let view: Vec<&Record> = Vec::new();
        assert!(aggregate(&view, &GroupKey::Month("fecha".into()), "total").is_empty());
        assert_eq!(total(&view, "total"), 0.0);
    }

    #[test]
    fn test_single_record_maps_group_to_value() {
        let r = compra("2024-03-01", 42.5);
        let view = vec![&r];
        let map = aggregate(&view, &GroupKey::Month("fecha".into()), "total");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("2024-03"), Some(&42.5));
    }

    #[test]
    fn test_month_filter_then_aggregate_sums_selected_month() {
        // Three purchases: 2024-01 x2 (10 + 20) and 2024-02 (5).
        let cache = vec![
            compra("2024-01-05", 10.0),
            compra("2024-01-20", 20.0),
            compra("2024-02-02", 5.0),
        ];
        let criteria = FilterCriteria {
            month: Some(MonthFilter { field: "fecha".into(), month: "2024-01".into() }),
            ..Default::default()
        };
        let view = criteria.apply(&cache);
        assert_eq!(view.len(), 2);

        let map = aggregate(&view, &GroupKey::Month("fecha".into()), "total");
        assert_eq!(map.get("2024-01"), Some(&30.0));
        assert_eq!(total(&view, "total"), 30.0);
    }

    #[test]
    fn test_group_by_tag_field() {
        let a = Record::from_value(json!({"tipo": "COMPRA", "total_linea": 10.0}));
        let b = Record::from_value(json!({"tipo": "VENTA", "total_linea": 4.0}));
        let c = Record::from_value(json!({"tipo": "COMPRA", "total_linea": 2.5}));
        let view = vec![&a, &b, &c];
        let map = aggregate(&view, &GroupKey::Field("tipo".into()), "total_linea");
        assert_eq!(map.get("COMPRA"), Some(&12.5));
        assert_eq!(map.get("VENTA"), Some(&4.0));
    }

    #[test]
    fn test_non_numeric_values_contribute_zero() {
        let a = Record::from_value(json!({"tipo": "COMPRA", "total_linea": "pendiente"}));
        let b = Record::from_value(json!({"tipo": "COMPRA", "total_linea": 8.0}));
        let view = vec![&a, &b];
        let map = aggregate(&view, &GroupKey::Field("tipo".into()), "total_linea");
        assert_eq!(map.get("COMPRA"), Some(&8.0));
        // The unparseable value is still there for display.
        assert_eq!(a.text("total_linea"), "pendiente");
    }
}
