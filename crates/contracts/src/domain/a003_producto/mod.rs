use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "productos";
/// Server-side filtered read, `GET /productos_filtro?categoria=<id>&q=<text>`.
pub const COLLECTION_FILTRO: &str = "productos_filtro";
pub const ENTITY: &str = "producto";
pub const ID_FIELD: &str = "id_producto";

/// Create/update payload for a product.
///
/// Select and numeric inputs travel verbatim as the form produced them; the
/// backend owns type coercion, the client only enforces presence.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductoDto {
    #[serde(skip_serializing, default)]
    pub id_producto: Option<i64>,
    pub nombre: String,
    /// Category id as selected in the form.
    pub categoria: String,
    /// Supplier id as selected in the form.
    pub proveedor: String,
    pub precio_compra: String,
    pub precio_venta: String,
    pub stock_minimo: String,
    #[serde(default)]
    pub descripcion: String,
}

impl ProductoDto {
    /// Fill the form from a listed row. Listings carry both the display
    /// names (`categoria`, `proveedor`) and the ids (`id_categoria`,
    /// `id_proveedor`); the form selects want the ids.
    pub fn from_record(record: &crate::shared::Record) -> Self {
        Self {
            id_producto: record.id(ID_FIELD),
            nombre: record.text("nombre"),
            categoria: record.text("id_categoria"),
            proveedor: record.text("id_proveedor"),
            precio_compra: record.text("precio_compra"),
            precio_venta: record.text("precio_venta"),
            stock_minimo: record.text("stock_minimo"),
            descripcion: record.text("descripcion"),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id_producto.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        let required = [
            (&self.nombre, "nombre"),
            (&self.categoria, "categoría"),
            (&self.proveedor, "proveedor"),
            (&self.precio_compra, "precio de compra"),
            (&self.precio_venta, "precio de venta"),
            (&self.stock_minimo, "stock mínimo"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(format!("El campo {} es obligatorio", label));
            }
        }
        Ok(())
    }
}

/// Query string of the server-side product filter. Both parameters are
/// optional; empty values are omitted entirely.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ProductosFiltro {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl ProductosFiltro {
    pub fn new(categoria: &str, q: &str) -> Self {
        let clean = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self { categoria: clean(categoria), q: clean(q) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ProductoDto {
        ProductoDto {
            id_producto: None,
            nombre: "Cafe molido".into(),
            categoria: "2".into(),
            proveedor: "1".into(),
            precio_compra: "35.50".into(),
            precio_venta: "48.00".into(),
            stock_minimo: "12".into(),
            descripcion: String::new(),
        }
    }

    #[test]
    fn test_descripcion_is_optional() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_missing_category_fails() {
        let mut d = dto();
        d.categoria.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_from_record_reads_ids_not_names() {
        let listed = crate::shared::Record::from_value(serde_json::json!({
            "id_producto": 11,
            "nombre": "Cafe molido",
            "categoria": "Bebidas",
            "id_categoria": 2,
            "proveedor": "Distribuidora Sur",
            "id_proveedor": 1,
            "precio_compra": "35.50",
            "precio_venta": "48.00",
            "stock_minimo": 12,
            "descripcion": null,
        }));
        let back = ProductoDto::from_record(&listed);
        assert_eq!(back.id_producto, Some(11));
        assert_eq!(back.categoria, "2");
        assert_eq!(back.proveedor, "1");
        assert_eq!(back.stock_minimo, "12");
        assert_eq!(back.descripcion, "");
    }

    #[test]
    fn test_filtro_drops_empty_params() {
        let f = ProductosFiltro::new("", "  ");
        assert_eq!(f, ProductosFiltro::default());
        let f = ProductosFiltro::new("3", " cafe ");
        assert_eq!(f.categoria.as_deref(), Some("3"));
        assert_eq!(f.q.as_deref(), Some("cafe"));
    }
}
