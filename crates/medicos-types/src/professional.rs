//! Healthcare professional record type.
//!
//! This module provides the `ProfessionalRecord` struct stored in the roster
//! and the borrowed `NewProfessional` input used to create or update one.

use std::fmt;

use crate::TaxId;

/// A healthcare professional entry in the roster.
///
/// Serialized with the Spanish keys of the JSON roster file
/// (`nombre`, `apellido`, `edad`, `cuilCuit`, `telefono`, `sexo`, `titulo`,
/// `especialidad`).
///
/// # Examples
///
/// ```
/// use medicos_types::ProfessionalRecord;
///
/// let record = ProfessionalRecord {
///     name: "Ana".to_string(),
///     surname: "Pérez".to_string(),
///     age: "41".to_string(),
///     tax_id: "27123456789".to_string(),
///     phone: "43215678".to_string(),
///     sex: "F".to_string(),
///     title: "Médica".to_string(),
///     specialty: "Cardiología".to_string(),
/// };
///
/// assert_eq!(record.full_name(), "Ana Pérez");
/// assert!(record.to_string().starts_with("Nombre: Ana"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfessionalRecord {
    /// Given name.
    #[cfg_attr(feature = "serde", serde(rename = "nombre"))]
    pub name: String,
    /// Family name.
    #[cfg_attr(feature = "serde", serde(rename = "apellido"))]
    pub surname: String,
    /// Age in years, as text. JSON numbers are converted on load.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "edad", deserialize_with = "age::deserialize")
    )]
    pub age: String,
    /// CUIL/CUIT, unique across the roster.
    #[cfg_attr(feature = "serde", serde(rename = "cuilCuit"))]
    pub tax_id: TaxId,
    /// Phone number, unique across the roster.
    #[cfg_attr(feature = "serde", serde(rename = "telefono"))]
    pub phone: String,
    /// Sex as entered by the caller.
    #[cfg_attr(feature = "serde", serde(rename = "sexo"))]
    pub sex: String,
    /// Professional degree.
    #[cfg_attr(feature = "serde", serde(rename = "titulo"))]
    pub title: String,
    /// Medical specialty.
    #[cfg_attr(feature = "serde", serde(rename = "especialidad"))]
    pub specialty: String,
}

impl ProfessionalRecord {
    /// Returns "name surname".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Overwrites every field with the values of `input`.
    pub fn apply(&mut self, input: &NewProfessional<'_>) {
        self.name = input.name.to_string();
        self.surname = input.surname.to_string();
        self.age = input.age.to_string();
        self.tax_id = input.tax_id.to_string();
        self.phone = input.phone.to_string();
        self.sex = input.sex.to_string();
        self.title = input.title.to_string();
        self.specialty = input.specialty.to_string();
    }
}

impl fmt::Display for ProfessionalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nombre: {}", self.name)?;
        writeln!(f, "Apellido: {}", self.surname)?;
        writeln!(f, "Edad: {}", self.age)?;
        writeln!(f, "CUIL/CUIT: {}", self.tax_id)?;
        writeln!(f, "Teléfono: {}", self.phone)?;
        writeln!(f, "Sexo: {}", self.sex)?;
        writeln!(f, "Título: {}", self.title)?;
        write!(f, "Especialidad: {}", self.specialty)
    }
}

/// Borrowed field values for creating or updating a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProfessional<'a> {
    /// Given name.
    pub name: &'a str,
    /// Family name.
    pub surname: &'a str,
    /// Age in years.
    pub age: &'a str,
    /// CUIL/CUIT.
    pub tax_id: &'a str,
    /// Phone number.
    pub phone: &'a str,
    /// Sex.
    pub sex: &'a str,
    /// Professional degree.
    pub title: &'a str,
    /// Medical specialty.
    pub specialty: &'a str,
}

impl NewProfessional<'_> {
    /// Builds an owned record from these values, unchanged.
    pub fn to_record(&self) -> ProfessionalRecord {
        ProfessionalRecord {
            name: self.name.to_string(),
            surname: self.surname.to_string(),
            age: self.age.to_string(),
            tax_id: self.tax_id.to_string(),
            phone: self.phone.to_string(),
            sex: self.sex.to_string(),
            title: self.title.to_string(),
            specialty: self.specialty.to_string(),
        }
    }
}

/// Rosters written by hand sometimes carry the age as a JSON number.
#[cfg(feature = "serde")]
mod age {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Unsigned(number) => number.to_string(),
            Raw::Signed(number) => number.to_string(),
            Raw::Float(number) => number.to_string(),
        })
    }
}
