use contracts::domain::a003_producto::{ProductosFiltro, COLLECTION_FILTRO};
use contracts::domain::{a001_categoria, a002_proveedor};
use contracts::shared::Record;

use crate::shared::api::{self, ApiError};

/// Options for the category selects (form and filter).
pub async fn fetch_categorias() -> Result<Vec<Record>, ApiError> {
    api::fetch_records(&format!("/{}", a001_categoria::COLLECTION)).await
}

/// Options for the supplier select.
pub async fn fetch_proveedores() -> Result<Vec<Record>, ApiError> {
    api::fetch_records(&format!("/{}", a002_proveedor::COLLECTION)).await
}

/// Read endpoint honoring the server-side filter. With no criteria the
/// query string disappears entirely.
pub fn endpoint_filtrado(filtro: &ProductosFiltro) -> String {
    match serde_qs::to_string(filtro) {
        Ok(qs) if !qs.is_empty() => format!("/{}?{}", COLLECTION_FILTRO, qs),
        _ => format!("/{}", COLLECTION_FILTRO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_without_criteria_has_no_query() {
        assert_eq!(endpoint_filtrado(&ProductosFiltro::default()), "/productos_filtro");
    }

    #[test]
    fn test_endpoint_carries_both_params() {
        let filtro = ProductosFiltro::new("3", "cafe");
        assert_eq!(endpoint_filtrado(&filtro), "/productos_filtro?categoria=3&q=cafe");
    }

    #[test]
    fn test_endpoint_with_only_text_search() {
        let filtro = ProductosFiltro::new("", "cafe");
        assert_eq!(endpoint_filtrado(&filtro), "/productos_filtro?q=cafe");
    }
}
