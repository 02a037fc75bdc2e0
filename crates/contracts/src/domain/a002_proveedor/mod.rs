use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "proveedores";
pub const ENTITY: &str = "proveedor";
pub const ID_FIELD: &str = "id";

/// Create/update payload for a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProveedorDto {
    #[serde(skip_serializing, default)]
    pub id: Option<i64>,
    pub nombre: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
}

impl ProveedorDto {
    /// Fill the form from a listed row, as the Editar button does.
    pub fn from_record(record: &crate::shared::Record) -> Self {
        Self {
            id: record.id(ID_FIELD),
            nombre: record.text("nombre"),
            telefono: record.text("telefono"),
            email: record.text("email"),
            direccion: record.text("direccion"),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        let required = [
            (&self.nombre, "nombre"),
            (&self.telefono, "teléfono"),
            (&self.email, "email"),
            (&self.direccion, "dirección"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(format!("El campo {} es obligatorio", label));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ProveedorDto {
        ProveedorDto {
            id: None,
            nombre: "Distribuidora Sur".into(),
            telefono: "555-0134".into(),
            email: "ventas@sur.example".into(),
            direccion: "Av. Central 120".into(),
        }
    }

    #[test]
    fn test_all_fields_required() {
        assert!(dto().validate().is_ok());
        for field in ["nombre", "telefono", "email", "direccion"] {
            let mut d = dto();
            match field {
                "nombre" => d.nombre.clear(),
                "telefono" => d.telefono.clear(),
                "email" => d.email.clear(),
                _ => d.direccion.clear(),
            }
            assert!(d.validate().is_err(), "{} vacío debería fallar", field);
        }
    }

    #[test]
    fn test_submitted_fields_survive_the_round_trip() {
        let mut body = serde_json::to_value(&dto()).unwrap();
        body["id"] = serde_json::json!(4);
        let listed = crate::shared::Record::from_value(body);
        let back = ProveedorDto::from_record(&listed);
        assert_eq!(back, ProveedorDto { id: Some(4), ..dto() });
    }
}
