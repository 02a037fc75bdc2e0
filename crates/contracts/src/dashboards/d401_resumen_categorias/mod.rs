use serde::{Deserialize, Serialize};

/// Read endpoint of the per-category product counts.
pub const ENDPOINT: &str = "categorias_grafica";

/// Per-category product counts as the backend ships them for charting:
/// parallel `labels`/`values` arrays, plus the category ids.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ResumenCategorias {
    #[serde(default)]
    pub ids: Vec<i64>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

impl ResumenCategorias {
    /// Label/value pairs, truncated to the shorter array when the backend
    /// sends mismatched lengths.
    pub fn filas(&self) -> Vec<(&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Category with the highest count, ties resolved to the first.
    pub fn mayor(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, value) in self.filas() {
            match best {
                Some((_, v)) if value <= v => {}
                _ => best = Some((label, value)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resumen() -> ResumenCategorias {
        serde_json::from_str(
            r#"{"ids": [1, 2, 3], "labels": ["Bebidas", "Lácteos", "Panadería"], "values": [12, 4, 9]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_total_and_mayor() {
        let r = resumen();
        assert_eq!(r.total(), 25.0);
        assert_eq!(r.mayor(), Some(("Bebidas", 12.0)));
    }

    #[test]
    fn test_empty_payload() {
        let r = ResumenCategorias::default();
        assert_eq!(r.total(), 0.0);
        assert_eq!(r.mayor(), None);
        assert!(r.filas().is_empty());
    }

    #[test]
    fn test_mismatched_lengths_truncate() {
        let r: ResumenCategorias =
            serde_json::from_str(r#"{"labels": ["A", "B"], "values": [1]}"#).unwrap();
        assert_eq!(r.filas(), vec![("A", 1.0)]);
    }

    #[test]
    fn test_first_wins_on_tie() {
        let r: ResumenCategorias =
            serde_json::from_str(r#"{"labels": ["A", "B"], "values": [5, 5]}"#).unwrap();
        assert_eq!(r.mayor(), Some(("A", 5.0)));
    }
}
