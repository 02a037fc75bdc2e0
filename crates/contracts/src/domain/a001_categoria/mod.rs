use serde::{Deserialize, Serialize};

/// Read endpoint of the collection.
pub const COLLECTION: &str = "categorias";
/// Entity segment of the mutation endpoint family.
pub const ENTITY: &str = "categoria";
pub const ID_FIELD: &str = "id";

/// Create/update payload for a product category.
///
/// The identifier never travels in the body; create vs update is decided by
/// its presence and it goes in the URL on update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CategoriaDto {
    #[serde(skip_serializing, default)]
    pub id: Option<i64>,
    pub nombre: String,
}

impl CategoriaDto {
    /// Fill the form from a listed row, as the Editar button does.
    pub fn from_record(record: &crate::shared::Record) -> Self {
        Self {
            id: record.id(ID_FIELD),
            nombre: record.text("nombre"),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Required-field check run before any request is issued.
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre no debe quedar vacío".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_fails_validation() {
        let dto = CategoriaDto { id: None, nombre: "   ".into() };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_valid_dto_passes() {
        let dto = CategoriaDto { id: Some(3), nombre: "Bebidas".into() };
        assert!(dto.validate().is_ok());
        assert!(dto.is_edit());
    }

    #[test]
    fn test_id_never_serialized_in_body() {
        let dto = CategoriaDto { id: Some(3), nombre: "Bebidas".into() };
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body, serde_json::json!({"nombre": "Bebidas"}));
    }

    #[test]
    fn test_submitted_fields_survive_the_round_trip() {
        // What goes out in a create is what comes back in the listing,
        // up to the server-assigned identifier.
        let dto = CategoriaDto { id: None, nombre: "Bebidas".into() };
        let mut body = serde_json::to_value(&dto).unwrap();
        body["id"] = serde_json::json!(9);
        let listed = crate::shared::Record::from_value(body);
        let back = CategoriaDto::from_record(&listed);
        assert_eq!(back.id, Some(9));
        assert_eq!(back.nombre, dto.nombre);
    }
}
