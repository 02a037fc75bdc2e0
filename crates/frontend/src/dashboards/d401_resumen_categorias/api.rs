use contracts::dashboards::d401_resumen_categorias::{ResumenCategorias, ENDPOINT};

use crate::shared::api::{self, ApiError};

pub async fn fetch_resumen() -> Result<ResumenCategorias, ApiError> {
    let value = api::fetch_json(&format!("/{}", ENDPOINT)).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}
