use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "usuarios";
pub const ENTITY: &str = "usuario";
pub const ID_FIELD: &str = "id_usuario";

/// Create/update payload for an application user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UsuarioDto {
    #[serde(skip_serializing, default)]
    pub id_usuario: Option<i64>,
    pub nombre: String,
    pub correo: String,
    pub contrasena: String,
}

impl UsuarioDto {
    /// Fill the form from a listed row. Listings never include the
    /// password; editing always requires typing it again.
    pub fn from_record(record: &crate::shared::Record) -> Self {
        Self {
            id_usuario: record.id(ID_FIELD),
            nombre: record.text("nom_usuario"),
            correo: record.text("correo"),
            contrasena: String::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id_usuario.is_some()
    }

    /// Required fields plus the confirmation the form collects but never
    /// sends over the wire.
    pub fn validate(&self, confirmacion: &str) -> Result<(), String> {
        if self.nombre.trim().is_empty()
            || self.correo.trim().is_empty()
            || self.contrasena.trim().is_empty()
            || confirmacion.trim().is_empty()
        {
            return Err("Todos los campos son obligatorios".into());
        }
        if self.contrasena != confirmacion {
            return Err("Las contraseñas no coinciden".into());
        }
        Ok(())
    }
}
