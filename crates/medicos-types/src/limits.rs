//! Field limits enforced on roster input.
//!
//! # Examples
//!
//! ```
//! use medicos_types::limits;
//!
//! assert_eq!(limits::TAX_ID_LEN, 11);
//! assert_eq!(limits::DEFAULT_DATA_FILE, "medicos.json");
//! ```

/// Exact number of digits in a CUIL/CUIT.
pub const TAX_ID_LEN: usize = 11;

/// Exact number of digits in a phone number.
pub const PHONE_LEN: usize = 8;

/// Minimum length of a user name.
pub const MIN_USER_LEN: usize = 4;

/// Minimum length of a password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// File name of the roster when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "medicos.json";

/// JSON keys of a roster entry, in the order they are written.
pub const ROSTER_KEYS: [&str; 8] = [
    "nombre",
    "apellido",
    "edad",
    "cuilCuit",
    "telefono",
    "sexo",
    "titulo",
    "especialidad",
];
