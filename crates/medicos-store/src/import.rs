//! Bulk roster import from CSV.
//!
//! The header must list the roster keys in order:
//! `nombre,apellido,edad,cuilCuit,telefono,sexo,titulo,especialidad`.
//! Every row goes through [`MedicosStore::add`], so validation and uniqueness
//! apply exactly as for a single add.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use medicos_types::limits::ROSTER_KEYS;
use medicos_types::NewProfessional;

use crate::store::MedicosStore;
use crate::types::{StoreError, StoreResult};

/// Outcome of a CSV import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Non-blank data rows read.
    pub total_rows: usize,
    /// Rows added to the roster.
    pub added: usize,
    /// Rows rejected by column count, validation or uniqueness.
    pub rejected: usize,
}

impl MedicosStore {
    /// Imports professionals from a CSV file.
    ///
    /// Rejected rows are logged and counted; a malformed header or an I/O
    /// failure aborts the import.
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> StoreResult<ImportStats> {
        let file = File::open(path.as_ref())?;
        self.import_reader(BufReader::new(file))
    }

    /// Imports professionals from any CSV reader.
    pub fn import_reader<R: Read>(&mut self, reader: R) -> StoreResult<ImportStats> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        validate_headers(&mut csv_reader)?;

        let mut stats = ImportStats::default();
        let mut record = StringRecord::new();

        while csv_reader.read_record(&mut record)? {
            if record.iter().all(|f| f.is_empty()) {
                continue;
            }
            stats.total_rows += 1;
            let line = record.position().map_or(0, |p| p.line());

            if record.len() != ROSTER_KEYS.len() {
                tracing::warn!(
                    "Skipping line {}: expected {} columns, found {}",
                    line,
                    ROSTER_KEYS.len(),
                    record.len()
                );
                stats.rejected += 1;
                continue;
            }

            let input = row_to_input(&record);
            match self.add(&input) {
                Ok(_) => stats.added += 1,
                Err(e) if e.is_rejection() => {
                    tracing::warn!("Skipping line {}: {}", line, e);
                    stats.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Imported {} of {} rows ({} rejected)",
            stats.added,
            stats.total_rows,
            stats.rejected
        );
        Ok(stats)
    }
}

/// Validates that the file has the roster keys as its header.
fn validate_headers<R: Read>(reader: &mut Reader<R>) -> StoreResult<()> {
    let headers = reader.headers()?;

    if headers.len() != ROSTER_KEYS.len() {
        return Err(StoreError::InvalidHeader {
            expected: ROSTER_KEYS.len(),
            found: headers.len(),
        });
    }

    for (i, expected_col) in ROSTER_KEYS.iter().enumerate() {
        let found = headers.get(i).unwrap_or("");
        // Handle UTF-8 BOM at start of file
        let found = found.trim_start_matches('\u{feff}');
        if found != *expected_col {
            return Err(StoreError::UnexpectedColumn {
                position: i,
                expected: expected_col.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(())
}

fn row_to_input(record: &StringRecord) -> NewProfessional<'_> {
    NewProfessional {
        name: column(record, 0),
        surname: column(record, 1),
        age: column(record, 2),
        tax_id: column(record, 3),
        phone: column(record, 4),
        sex: column(record, 5),
        title: column(record, 6),
        specialty: column(record, 7),
    }
}

fn column(record: &StringRecord, i: usize) -> &str {
    record.get(i).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StoreConfig;

    const HEADER: &str = "nombre,apellido,edad,cuilCuit,telefono,sexo,titulo,especialidad\n";

    fn temp_store() -> (tempfile::TempDir, MedicosStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = MedicosStore::new(StoreConfig::with_path(dir.path().join("medicos.json")));
        (dir, store)
    }

    #[test]
    fn test_import_adds_valid_rows() {
        let (_dir, mut store) = temp_store();
        let data = format!(
            "{HEADER}ana,pérez,41,27123456789,43215678,F,Médica,Cardiología\n\
             luis,gómez,52,20999888777,11112222,M,Médico,Pediatría\n"
        );

        let stats = store.import_reader(data.as_bytes()).unwrap();
        assert_eq!(
            stats,
            ImportStats {
                total_rows: 2,
                added: 2,
                rejected: 0
            }
        );
        assert_eq!(store.find("20999888777").unwrap().name, "Luis");
        assert!(store.path().exists());
    }

    #[test]
    fn test_import_counts_rejected_rows() {
        let (_dir, mut store) = temp_store();
        let data = format!(
            "{HEADER}ana,pérez,41,27123456789,43215678,F,Médica,Cardiología\n\
             ana,pérez,41,27123456789,55556666,F,Médica,Cardiología\n\
             123,gómez,52,20999888777,11112222,M,Médico,Pediatría\n\
             luis,gómez,52,2099988877,11112222,M,Médico,Pediatría\n"
        );

        let stats = store.import_reader(data.as_bytes()).unwrap();
        assert_eq!(stats.total_rows, 4);
        assert_eq!(stats.added, 1);
        assert_eq!(stats.rejected, 3);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_import_skips_blank_rows() {
        let (_dir, mut store) = temp_store();
        let data = format!(
            "{HEADER}ana,pérez,41,27123456789,43215678,F,Médica,Cardiología\n\
             ,,,,,,,\n"
        );

        let stats = store.import_reader(data.as_bytes()).unwrap();
        assert_eq!(stats.total_rows, 1);
        assert_eq!(stats.added, 1);
    }

    #[test]
    fn test_import_counts_rows_with_wrong_column_count() {
        let (_dir, mut store) = temp_store();
        let data = format!(
            "{HEADER}ana,pérez,41,27123456789,43215678,F,Médica,Cardiología\n\
             luis,gómez,52,20999888777,11112222,M,Médico\n\
             eva,ruiz,38,27555444333,55556666,F,Médica,Clínica,extra\n\
             juan,díaz,60,20111222333,77778888,M,Médico,Traumatología\n"
        );

        let stats = store.import_reader(data.as_bytes()).unwrap();
        assert_eq!(
            stats,
            ImportStats {
                total_rows: 4,
                added: 2,
                rejected: 2
            }
        );
        assert!(store.contains("20111222333"));
        assert!(!store.contains("20999888777"));

        let reloaded = MedicosStore::open(store.path()).unwrap();
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_import_tolerates_bom() {
        let (_dir, mut store) = temp_store();
        let data = format!("\u{feff}{HEADER}ana,pérez,41,27123456789,43215678,F,Médica,Cardiología\n");

        let stats = store.import_reader(data.as_bytes()).unwrap();
        assert_eq!(stats.added, 1);
    }

    #[test]
    fn test_import_rejects_wrong_header() {
        let (_dir, mut store) = temp_store();

        let err = store
            .import_reader("nombre,apellido\nana,pérez\n".as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidHeader {
                expected: 8,
                found: 2
            }
        ));

        let err = store
            .import_reader(
                "name,apellido,edad,cuilCuit,telefono,sexo,titulo,especialidad\n".as_bytes(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnexpectedColumn { position: 0, .. }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_from_path() {
        let (dir, mut store) = temp_store();
        let csv_path = dir.path().join("roster.csv");
        std::fs::write(
            &csv_path,
            format!("{HEADER}ana,pérez,41,27123456789,43215678,F,Médica,Cardiología\n"),
        )
        .unwrap();

        let stats = store.import_csv(&csv_path).unwrap();
        assert_eq!(stats.added, 1);

        let missing = store.import_csv(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(missing, StoreError::Io(_)));
    }
}
