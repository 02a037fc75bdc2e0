//! Per-page configuration of the tabular view.
//!
//! Every list page is the same component pointed at a different endpoint
//! family; what varies is captured here: the column list, the identifier
//! field, which filter controls to render and which totals to compute.

use contracts::shared::criteria::{FilterCriteria, MonthFilter, TagFilter, TextFilter};
use contracts::shared::Record;

#[derive(Clone)]
pub struct ViewConfig {
    /// Identifier field of the collection's records.
    pub id_field: &'static str,
    pub columns: Vec<Column>,
    /// Fields coerced to numbers once when rows are ingested.
    pub numeric_fields: Vec<&'static str>,
    pub filters: FilterControls,
    pub totals: Option<TotalsSpec>,
    /// Row shown when the view is empty.
    pub empty_caption: &'static str,
    /// Question asked before a delete is issued.
    pub delete_prompt: &'static str,
}

impl ViewConfig {
    pub fn new(id_field: &'static str, columns: Vec<Column>) -> Self {
        Self {
            id_field,
            columns,
            numeric_fields: Vec::new(),
            filters: FilterControls::default(),
            totals: None,
            empty_caption: "No hay registros para mostrar",
            delete_prompt: "¿Seguro que quieres eliminar este registro?",
        }
    }

    pub fn numeric(mut self, fields: Vec<&'static str>) -> Self {
        self.numeric_fields = fields;
        self
    }

    pub fn filters(mut self, filters: FilterControls) -> Self {
        self.filters = filters;
        self
    }

    pub fn totals(mut self, totals: TotalsSpec) -> Self {
        self.totals = Some(totals);
        self
    }

    pub fn empty_caption(mut self, caption: &'static str) -> Self {
        self.empty_caption = caption;
        self
    }

    pub fn delete_prompt(mut self, prompt: &'static str) -> Self {
        self.delete_prompt = prompt;
        self
    }
}

#[derive(Clone, Copy)]
pub struct Column {
    pub field: &'static str,
    pub title: &'static str,
    pub format: ColumnFormat,
}

impl Column {
    pub fn text(field: &'static str, title: &'static str) -> Self {
        Self { field, title, format: ColumnFormat::Text }
    }

    pub fn money(field: &'static str, title: &'static str) -> Self {
        Self { field, title, format: ColumnFormat::Money }
    }

    pub fn date(field: &'static str, title: &'static str) -> Self {
        Self { field, title, format: ColumnFormat::Date }
    }

    pub fn badge(
        field: &'static str,
        title: &'static str,
        badge: fn(&Record) -> Option<(&'static str, &'static str)>,
    ) -> Self {
        Self { field, title, format: ColumnFormat::Badge(badge) }
    }
}

#[derive(Clone, Copy)]
pub enum ColumnFormat {
    /// Verbatim display text.
    Text,
    /// `$0.00`-style money; non-numeric shows as zero.
    Money,
    /// ISO date with any time suffix dropped.
    Date,
    /// Text plus an optional `(label, css class)` badge derived from the
    /// whole record.
    Badge(fn(&Record) -> Option<(&'static str, &'static str)>),
}

/// Which client-side filter controls the page renders.
#[derive(Clone, Default)]
pub struct FilterControls {
    pub month: Option<MonthControl>,
    pub tag: Option<TagControl>,
    pub text: Option<TextControl>,
}

#[derive(Clone, Copy)]
pub struct MonthControl {
    pub field: &'static str,
    /// Start at the current month instead of "all months".
    pub default_current: bool,
}

#[derive(Clone)]
pub struct TagControl {
    pub field: &'static str,
    pub label: &'static str,
    pub options: Vec<&'static str>,
}

#[derive(Clone)]
pub struct TextControl {
    pub fields: Vec<&'static str>,
    pub placeholder: &'static str,
}

impl FilterControls {
    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.tag.is_none() && self.text.is_none()
    }

    /// Assemble the criteria out of the current control values.
    pub fn criteria(&self, month: &str, tag: &str, query: &str) -> FilterCriteria {
        FilterCriteria {
            month: self.month.as_ref().map(|c| MonthFilter {
                field: c.field.to_string(),
                month: month.to_string(),
            }),
            tag: self.tag.as_ref().map(|c| TagFilter {
                field: c.field.to_string(),
                value: tag.to_string(),
            }),
            text: self.text.as_ref().map(|c| TextFilter {
                fields: c.fields.iter().map(|f| f.to_string()).collect(),
                query: query.to_string(),
            }),
        }
    }
}

/// Sums rendered above the table, always computed over the filtered view.
#[derive(Clone, Copy)]
pub struct TotalsSpec {
    pub value_field: &'static str,
    pub label: &'static str,
    /// Also show the selected month's sum for this date field.
    pub by_month_field: Option<&'static str>,
    /// Also show one sum per value of this tag field.
    pub by_tag_field: Option<&'static str>,
    pub show_count: bool,
}

impl TotalsSpec {
    pub fn new(value_field: &'static str, label: &'static str) -> Self {
        Self {
            value_field,
            label,
            by_month_field: None,
            by_tag_field: None,
            show_count: false,
        }
    }

    pub fn by_month(mut self, field: &'static str) -> Self {
        self.by_month_field = Some(field);
        self
    }

    pub fn by_tag(mut self, field: &'static str) -> Self {
        self.by_tag_field = Some(field);
        self
    }

    pub fn with_count(mut self) -> Self {
        self.show_count = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_controls_build_match_all_criteria() {
        let controls = FilterControls::default();
        assert!(controls.is_empty());
        let criteria = controls.criteria("2024-01", "COMPRA", "cafe");
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_criteria_picks_up_control_values() {
        let controls = FilterControls {
            month: Some(MonthControl { field: "fecha", default_current: true }),
            tag: Some(TagControl { field: "tipo", label: "Tipo", options: vec!["COMPRA", "VENTA"] }),
            text: Some(TextControl { fields: vec!["producto"], placeholder: "Buscar" }),
        };
        let criteria = controls.criteria("2024-02", "VENTA", "az");
        assert_eq!(criteria.month.unwrap().month, "2024-02");
        assert_eq!(criteria.tag.unwrap().value, "VENTA");
        assert_eq!(criteria.text.unwrap().query, "az");
    }
}
