//! # medicos-types
//!
//! Type definitions for a roster of healthcare professionals ("médicos").
//!
//! This crate provides the record type persisted by `medicos-store`, the
//! borrowed input bundle used to create or update a record, and the field
//! limits the validator enforces.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde,
//!   using the Spanish keys of the on-disk JSON roster.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use medicos_types::{limits, NewProfessional, ProfessionalRecord, TaxId};
//!
//! let input = NewProfessional {
//!     name: "Ana",
//!     surname: "Pérez",
//!     age: "41",
//!     tax_id: "27123456789",
//!     phone: "43215678",
//!     sex: "F",
//!     title: "Médica",
//!     specialty: "Cardiología",
//! };
//!
//! let record: ProfessionalRecord = input.to_record();
//! let key: &TaxId = &record.tax_id;
//! assert_eq!(key.len(), limits::TAX_ID_LEN);
//! ```

#![warn(missing_docs)]

pub mod limits;
mod professional;
mod tax_id;

// Re-export all public types at crate root
pub use professional::{NewProfessional, ProfessionalRecord};
pub use tax_id::TaxId;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfessionalRecord {
        ProfessionalRecord {
            name: "Ana".to_string(),
            surname: "Pérez".to_string(),
            age: "41".to_string(),
            tax_id: "27123456789".to_string(),
            phone: "43215678".to_string(),
            sex: "F".to_string(),
            title: "Médica".to_string(),
            specialty: "Cardiología".to_string(),
        }
    }

    #[test]
    fn test_types_are_exported() {
        let _id: TaxId = "20111222333".to_string();
        assert_eq!(limits::TAX_ID_LEN, 11);
        assert_eq!(limits::PHONE_LEN, 8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_roster_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "apellido",
                "cuilCuit",
                "edad",
                "especialidad",
                "nombre",
                "sexo",
                "telefono",
                "titulo"
            ]
        );
        assert_eq!(object["cuilCuit"], "27123456789");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ProfessionalRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_numeric_age_is_accepted() {
        let json = r#"{
            "nombre": "Luis",
            "apellido": "Gómez",
            "edad": 52,
            "cuilCuit": "20999888777",
            "telefono": "11112222",
            "sexo": "M",
            "titulo": "Médico",
            "especialidad": "Pediatría"
        }"#;

        let parsed: ProfessionalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.age, "52");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_signed_and_fractional_ages_load() {
        let with_age = |age: &str| {
            format!(
                r#"{{"nombre": "Luis", "apellido": "Gómez", "edad": {age},
                    "cuilCuit": "20999888777", "telefono": "11112222",
                    "sexo": "M", "titulo": "Médico", "especialidad": "Pediatría"}}"#
            )
        };

        let negative: ProfessionalRecord = serde_json::from_str(&with_age("-1")).unwrap();
        assert_eq!(negative.age, "-1");

        let fractional: ProfessionalRecord = serde_json::from_str(&with_age("41.5")).unwrap();
        assert_eq!(fractional.age, "41.5");

        let whole: ProfessionalRecord = serde_json::from_str(&with_age("41.0")).unwrap();
        assert_eq!(whole.age, "41");
    }
}
