use serde::{Deserialize, Serialize};

pub const MIN_USUARIO: usize = 3;
pub const MIN_CONTRASENA: usize = 6;

/// Login form state. Validation is purely client-side length checking; the
/// credential round-trip itself is owned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoginForm {
    pub usuario: String,
    pub contrasena: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.usuario.trim().len() < MIN_USUARIO {
            return Err(format!(
                "El usuario debe tener al menos {} caracteres",
                MIN_USUARIO
            ));
        }
        if self.contrasena.trim().len() < MIN_CONTRASENA {
            return Err(format!(
                "La contraseña debe tener al menos {} caracteres",
                MIN_CONTRASENA
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_usuario_rejected() {
        let f = LoginForm { usuario: "ab".into(), contrasena: "secreta1".into() };
        assert!(f.validate().unwrap_err().contains("usuario"));
    }

    #[test]
    fn test_short_contrasena_rejected() {
        let f = LoginForm { usuario: "admin".into(), contrasena: "12345".into() };
        assert!(f.validate().unwrap_err().contains("contraseña"));
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let f = LoginForm { usuario: "  a  ".into(), contrasena: "123456".into() };
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_valid_credentials_pass() {
        let f = LoginForm { usuario: "admin".into(), contrasena: "123456".into() };
        assert!(f.validate().is_ok());
    }
}
