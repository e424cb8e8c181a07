//! JSON-backed roster store.
//!
//! Holds the roster as an ordered list and rewrites the whole JSON file after
//! every create, update or delete.
//!
//! ```ignore
//! let mut store = MedicosStore::open("medicos.json")?;
//! store.add(&input)?;
//!
//! if let Some(shown) = store.display("27123456789") {
//!     println!("{shown}");
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use medicos_types::{NewProfessional, ProfessionalRecord};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::types::{StoreConfig, StoreError, StoreResult};
use crate::validation::{check_professional, is_tax_id, title_case};

/// Roster of healthcare professionals mirrored to a JSON file.
///
/// CUIL/CUIT and phone are unique across the roster. Every successful
/// mutation is persisted before it returns; a failed write leaves the
/// in-memory roster as it was before the call.
///
/// # Example
///
/// ```ignore
/// use medicos_store::{MedicosStore, StoreConfig};
///
/// let mut store = MedicosStore::load(StoreConfig::with_path("medicos.json"))?;
/// store.delete("27123456789")?;
/// assert!(store.find("27123456789").is_none());
/// ```
pub struct MedicosStore {
    /// Records in insertion order.
    records: Vec<ProfessionalRecord>,
    config: StoreConfig,
}

impl std::fmt::Debug for MedicosStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MedicosStore")
            .field("records", &self.records.len())
            .field("data_path", &self.config.data_path)
            .finish()
    }
}

impl MedicosStore {
    /// Creates an empty store that will persist to `config.data_path`.
    ///
    /// Nothing is read from disk; use [`MedicosStore::load`] for that.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            records: Vec::new(),
            config,
        }
    }

    /// Loads the roster described by `config`.
    ///
    /// A missing file yields an empty roster. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load(config: StoreConfig) -> StoreResult<Self> {
        let records = read_roster(&config.data_path)?;
        tracing::info!(
            "Loaded {} professionals from {}",
            records.len(),
            config.data_path.display()
        );
        Ok(Self { records, config })
    }

    /// Loads the roster at `path` with default formatting.
    pub fn open<P: Into<PathBuf>>(path: P) -> StoreResult<Self> {
        Self::load(StoreConfig::with_path(path))
    }

    /// Writes the whole roster to the data file, overwriting it.
    pub fn save(&self) -> StoreResult<()> {
        let path = &self.config.data_path;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let indent = vec![b' '; self.config.indent];
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        self.records.serialize(&mut serializer)?;

        fs::write(path, buf)?;
        tracing::debug!("Saved {} professionals to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Adds a professional and persists the roster.
    ///
    /// Name and surname are title-cased first. Fails if the CUIL/CUIT or phone
    /// is already registered, or if the fields do not validate.
    pub fn add(&mut self, input: &NewProfessional<'_>) -> StoreResult<&ProfessionalRecord> {
        let name = title_case(input.name);
        let surname = title_case(input.surname);
        let input = NewProfessional {
            name: &name,
            surname: &surname,
            ..*input
        };

        if self.records.iter().any(|r| r.tax_id == input.tax_id) {
            return Err(StoreError::DuplicateTaxId {
                tax_id: input.tax_id.to_string(),
            });
        }
        if self.records.iter().any(|r| r.phone == input.phone) {
            return Err(StoreError::DuplicatePhone {
                phone: input.phone.to_string(),
            });
        }
        check_professional(input.name, input.surname, input.age, input.tax_id, input.phone)?;

        self.records.push(input.to_record());
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }

        tracing::debug!("Added professional {}", input.tax_id);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Looks up a professional by CUIL/CUIT.
    ///
    /// Returns `None` if `tax_id` is not 11 digits or is not registered.
    pub fn find(&self, tax_id: &str) -> Option<&ProfessionalRecord> {
        self.position(tax_id).map(|idx| &self.records[idx])
    }

    /// Returns true if a professional with this CUIL/CUIT is registered.
    pub fn contains(&self, tax_id: &str) -> bool {
        self.position(tax_id).is_some()
    }

    /// Overwrites the professional whose CUIL/CUIT is `input.tax_id`.
    ///
    /// Name and surname are title-cased, the fields are validated, and the new
    /// phone must not belong to another professional. The CUIL/CUIT selects
    /// the record and is never changed by an update.
    pub fn update(&mut self, input: &NewProfessional<'_>) -> StoreResult<&ProfessionalRecord> {
        let name = title_case(input.name);
        let surname = title_case(input.surname);
        let input = NewProfessional {
            name: &name,
            surname: &surname,
            ..*input
        };

        check_professional(input.name, input.surname, input.age, input.tax_id, input.phone)?;

        let idx = self
            .position(input.tax_id)
            .ok_or_else(|| StoreError::NotFound {
                tax_id: input.tax_id.to_string(),
            })?;

        let phone_taken = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| i != idx && r.phone == input.phone);
        if phone_taken {
            return Err(StoreError::DuplicatePhone {
                phone: input.phone.to_string(),
            });
        }

        let previous = self.records[idx].clone();
        self.records[idx].apply(&input);
        if let Err(e) = self.save() {
            self.records[idx] = previous;
            return Err(e);
        }

        tracing::debug!("Updated professional {}", input.tax_id);
        Ok(&self.records[idx])
    }

    /// Returns the labelled fields of a professional, or `None` if not found.
    pub fn display(&self, tax_id: &str) -> Option<String> {
        self.find(tax_id).map(ToString::to_string)
    }

    /// Removes a professional and persists the roster.
    ///
    /// Returns the removed record. Fails with [`StoreError::NotFound`] if no
    /// professional has this CUIL/CUIT.
    pub fn delete(&mut self, tax_id: &str) -> StoreResult<ProfessionalRecord> {
        let idx = self.position(tax_id).ok_or_else(|| StoreError::NotFound {
            tax_id: tax_id.to_string(),
        })?;

        let removed = self.records.remove(idx);
        if let Err(e) = self.save() {
            self.records.insert(idx, removed);
            return Err(e);
        }

        tracing::debug!("Deleted professional {}", tax_id);
        Ok(removed)
    }

    /// All professionals in insertion order.
    pub fn records(&self) -> &[ProfessionalRecord] {
        &self.records
    }

    /// Number of professionals in the roster.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the JSON roster file.
    pub fn path(&self) -> &Path {
        &self.config.data_path
    }

    /// Index of the record with this CUIL/CUIT, if the key is well formed.
    fn position(&self, tax_id: &str) -> Option<usize> {
        if !is_tax_id(tax_id) {
            return None;
        }
        self.records.iter().position(|r| r.tax_id == tax_id)
    }
}

/// Reads a JSON roster, treating a missing or blank file as empty.
fn read_roster(path: &Path) -> StoreResult<Vec<ProfessionalRecord>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No roster at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_slice(&bytes)?)
}
