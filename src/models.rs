//! Data models for the clientes API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A persisted cliente record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cliente {
    /// Database-generated identifier
    pub id: i64,

    /// First name
    pub nombre: String,

    /// Last name
    pub apellido: String,

    /// Contact email, unique across all clientes
    pub email: String,

    /// Creation date, date only (column `create_at`)
    #[serde(rename = "createAt")]
    pub create_at: NaiveDate,
}

/// Incoming cliente payload for create and update requests.
///
/// String fields default to empty when missing so that the per-field
/// validators below report them instead of a body-parse failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClienteDraft {
    #[serde(default)]
    #[validate(length(min = 4, max = 12, message = "debe tener entre 4 y 12 caracteres"))]
    pub nombre: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "no puede estar vacío"))]
    pub apellido: String,

    #[serde(default)]
    #[validate(email(message = "no es una dirección de correo válida"))]
    pub email: String,

    /// Optional creation date; stamped by the service when absent
    #[serde(rename = "createAt", default)]
    pub create_at: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ClienteDraft {
        ClienteDraft {
            nombre: "Juan".to_string(),
            apellido: "Perez".to_string(),
            email: "juan@example.com".to_string(),
            create_at: None,
        }
    }

    #[test]
    fn test_cliente_serializes_create_at_as_camel_case() {
        let cliente = Cliente {
            id: 7,
            nombre: "Juan".to_string(),
            apellido: "Perez".to_string(),
            email: "juan@example.com".to_string(),
            create_at: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };

        let json = serde_json::to_value(&cliente).unwrap();

        assert_eq!(json["createAt"], "2024-03-15");
        assert!(json.get("create_at").is_none());
    }

    #[test]
    fn test_valid_draft_passes_validation() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_nombre_length_is_constrained() {
        let mut draft = valid_draft();
        draft.nombre = "Al".to_string();
        assert!(draft.validate().is_err());

        draft.nombre = "Maximiliano II".to_string(); // 14 characters
        assert!(draft.validate().is_err());

        draft.nombre = "Ana María".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_empty_apellido_is_rejected() {
        let mut draft = valid_draft();
        draft.apellido = String::new();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty_strings() {
        let draft: ClienteDraft = serde_json::from_value(serde_json::json!({})).unwrap();

        assert!(draft.nombre.is_empty());
        assert!(draft.apellido.is_empty());
        assert!(draft.email.is_empty());
        assert!(draft.create_at.is_none());

        // All three string fields must then fail validation.
        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nombre"));
        assert!(fields.contains_key("apellido"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_create_at_accepts_iso_date() {
        let draft: ClienteDraft = serde_json::from_value(serde_json::json!({
            "nombre": "Juan",
            "apellido": "Perez",
            "email": "juan@example.com",
            "createAt": "2023-11-02"
        }))
        .unwrap();

        assert_eq!(draft.create_at, NaiveDate::from_ymd_opt(2023, 11, 2));
    }
}
