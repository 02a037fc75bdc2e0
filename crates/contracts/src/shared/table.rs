use crate::shared::criteria::FilterCriteria;
use crate::shared::record::Record;

/// Load state of one tabular view. Re-entered on every reload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

/// Cache/view pair of one tabular page, kept free of DOM and signal types
/// so the whole lifecycle is testable off-browser.
///
/// The cache is replaced wholesale on a successful fetch and left as the
/// last known-good value on failure, never partially updated. Each load
/// carries a generation number; only the latest issued request may touch
/// the cache, so overlapping reloads cannot apply out of order.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    cache: Vec<Record>,
    criteria: FilterCriteria,
    phase: LoadPhase,
    generation: u64,
}

impl TableData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load and return its generation token.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.generation
    }

    /// Apply a finished load. Returns `false` when the response belongs to
    /// a superseded request and was discarded.
    pub fn ingest(&mut self, generation: u64, result: Result<Vec<Record>, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(rows) => {
                self.cache = rows;
                self.phase = LoadPhase::Loaded;
            }
            Err(message) => {
                // Prior contents stay; only the phase reports the failure.
                self.phase = LoadPhase::Errored(message);
            }
        }
        true
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn cache(&self) -> &[Record] {
        &self.cache
    }

    /// The filtered projection, recomputed on demand. Always a subset of
    /// the cache in original order.
    pub fn view(&self) -> Vec<&Record> {
        self.criteria.apply(&self.cache)
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::criteria::TagFilter;
    use serde_json::json;

    fn rows(tags: &[&str]) -> Vec<Record> {
        tags.iter()
            .enumerate()
            .map(|(i, t)| Record::from_value(json!({"id": i, "tipo": t})))
            .collect()
    }

    #[test]
    fn test_successful_load_replaces_cache() {
        let mut table = TableData::new();
        let g = table.begin_load();
        assert_eq!(table.phase(), &LoadPhase::Loading);
        assert!(table.ingest(g, Ok(rows(&["COMPRA", "VENTA"]))));
        assert_eq!(table.phase(), &LoadPhase::Loaded);
        assert_eq!(table.cache().len(), 2);
    }

    #[test]
    fn test_failed_load_keeps_prior_cache() {
        let mut table = TableData::new();
        let g = table.begin_load();
        table.ingest(g, Ok(rows(&["COMPRA", "VENTA", "COMPRA"])));

        let g = table.begin_load();
        assert!(table.ingest(g, Err("HTTP 500".into())));
        assert_eq!(table.cache().len(), 3);
        assert_eq!(table.phase(), &LoadPhase::Errored("HTTP 500".into()));
    }

    #[test]
    fn test_confirmed_empty_response_clears_cache() {
        let mut table = TableData::new();
        let g = table.begin_load();
        table.ingest(g, Ok(rows(&["COMPRA"])));

        let g = table.begin_load();
        table.ingest(g, Ok(Vec::new()));
        assert!(table.cache().is_empty());
        assert_eq!(table.phase(), &LoadPhase::Loaded);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut table = TableData::new();
        let first = table.begin_load();
        let second = table.begin_load();

        // The second (latest issued) request resolves first.
        assert!(table.ingest(second, Ok(rows(&["VENTA"]))));
        // The superseded first request resolves late and must not win.
        assert!(!table.ingest(first, Ok(rows(&["COMPRA", "COMPRA"]))));

        assert_eq!(table.cache().len(), 1);
        assert_eq!(table.cache()[0].text("tipo"), "VENTA");
    }

    #[test]
    fn test_view_is_ordered_subset_of_cache() {
        let mut table = TableData::new();
        let g = table.begin_load();
        table.ingest(g, Ok(rows(&["COMPRA", "VENTA", "COMPRA", "VENTA"])));
        table.set_criteria(FilterCriteria {
            tag: Some(TagFilter { field: "tipo".into(), value: "VENTA".into() }),
            ..Default::default()
        });

        let view = table.view();
        assert_eq!(view.len(), 2);
        let ids: Vec<i64> = view.iter().filter_map(|r| r.id("id")).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_criteria_change_needs_no_reload() {
        let mut table = TableData::new();
        let g = table.begin_load();
        table.ingest(g, Ok(rows(&["COMPRA", "VENTA"])));

        table.set_criteria(FilterCriteria {
            tag: Some(TagFilter { field: "tipo".into(), value: "COMPRA".into() }),
            ..Default::default()
        });
        assert_eq!(table.view().len(), 1);
        table.set_criteria(FilterCriteria::default());
        assert_eq!(table.view().len(), 2);
    }
}
