//! # medicos-store
//!
//! Validated, JSON-backed roster of healthcare professionals.
//!
//! The [`MedicosStore`] owns an ordered list of [`ProfessionalRecord`]s and
//! rewrites its JSON file after every create, update or delete. Input is
//! checked by the predicates in [`validation`] before it reaches the store.
//!
//! ```no_run
//! use medicos_store::{MedicosStore, NewProfessional};
//!
//! let mut store = MedicosStore::open("medicos.json")?;
//! store.add(&NewProfessional {
//!     name: "ana",
//!     surname: "pérez",
//!     age: "41",
//!     tax_id: "27123456789",
//!     phone: "43215678",
//!     sex: "F",
//!     title: "Médica",
//!     specialty: "Cardiología",
//! })?;
//!
//! assert_eq!(store.find("27123456789").map(|r| r.name.as_str()), Some("Ana"));
//! # Ok::<(), medicos_store::StoreError>(())
//! ```

#![warn(missing_docs)]

pub mod import;
pub mod store;
pub mod types;
pub mod validation;

pub use import::ImportStats;
pub use store::MedicosStore;
pub use types::{StoreConfig, StoreError, StoreResult, ValidationError};

// Re-export medicos-types for convenience
pub use medicos_types;
pub use medicos_types::{NewProfessional, ProfessionalRecord, TaxId};
