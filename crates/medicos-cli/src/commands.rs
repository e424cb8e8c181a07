//! Command execution against a roster store.

use medicos_store::{MedicosStore, StoreError, StoreResult};

use crate::args::Command;

/// Runs `command` against `store` and returns the text to print.
///
/// Rejected operations come back as `Err`, carrying the reason.
pub fn run(command: &Command, store: &mut MedicosStore) -> StoreResult<String> {
    match command {
        Command::Add(args) => {
            let record = store.add(&args.as_input())?;
            Ok(format!("Added {} ({})", record.full_name(), record.tax_id))
        }
        Command::Show { tax_id } => store.display(tax_id).ok_or_else(|| StoreError::NotFound {
            tax_id: tax_id.clone(),
        }),
        Command::Update(args) => {
            let record = store.update(&args.as_input())?;
            Ok(format!("Updated {} ({})", record.full_name(), record.tax_id))
        }
        Command::Delete { tax_id } => {
            let record = store.delete(tax_id)?;
            Ok(format!("Deleted {} ({})", record.full_name(), record.tax_id))
        }
        Command::List => {
            if store.is_empty() {
                return Ok("No professionals registered".to_string());
            }
            let lines: Vec<String> = store
                .records()
                .iter()
                .map(|r| format!("{}  {:<30} {}", r.tax_id, r.full_name(), r.specialty))
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Import { csv } => {
            let stats = store.import_csv(csv)?;
            Ok(format!(
                "Imported {} of {} rows ({} rejected)",
                stats.added, stats.total_rows, stats.rejected
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ProfessionalArgs;

    fn make_args(tax_id: &str, phone: &str) -> ProfessionalArgs {
        ProfessionalArgs {
            name: "ana".to_string(),
            surname: "pérez".to_string(),
            age: "41".to_string(),
            tax_id: tax_id.to_string(),
            phone: phone.to_string(),
            sex: "F".to_string(),
            title: "Médica".to_string(),
            specialty: "Cardiología".to_string(),
        }
    }

    fn temp_store() -> (tempfile::TempDir, MedicosStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = MedicosStore::open(dir.path().join("medicos.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_add_show_delete() {
        let (_dir, mut store) = temp_store();

        let out = run(&Command::Add(make_args("27123456789", "43215678")), &mut store).unwrap();
        assert_eq!(out, "Added Ana Pérez (27123456789)");

        let shown = run(
            &Command::Show {
                tax_id: "27123456789".into(),
            },
            &mut store,
        )
        .unwrap();
        assert!(shown.contains("CUIL/CUIT: 27123456789"));

        let out = run(
            &Command::Delete {
                tax_id: "27123456789".into(),
            },
            &mut store,
        )
        .unwrap();
        assert_eq!(out, "Deleted Ana Pérez (27123456789)");

        let err = run(
            &Command::Show {
                tax_id: "27123456789".into(),
            },
            &mut store,
        )
        .unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn test_update_reports_new_values() {
        let (_dir, mut store) = temp_store();
        run(&Command::Add(make_args("27123456789", "43215678")), &mut store).unwrap();

        let mut changed = make_args("27123456789", "43215678");
        changed.surname = "pérez lópez".to_string();
        let out = run(&Command::Update(changed), &mut store).unwrap();
        assert_eq!(out, "Updated Ana Pérez López (27123456789)");
    }

    #[test]
    fn test_duplicate_add_is_an_error() {
        let (_dir, mut store) = temp_store();
        run(&Command::Add(make_args("27123456789", "43215678")), &mut store).unwrap();

        let err = run(&Command::Add(make_args("27123456789", "11112222")), &mut store).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateTaxId { .. }));
    }

    #[test]
    fn test_list() {
        let (_dir, mut store) = temp_store();
        assert_eq!(
            run(&Command::List, &mut store).unwrap(),
            "No professionals registered"
        );

        run(&Command::Add(make_args("27123456789", "43215678")), &mut store).unwrap();
        run(&Command::Add(make_args("20999888777", "11112222")), &mut store).unwrap();

        let listed = run(&Command::List, &mut store).unwrap();
        let lines: Vec<&str> = listed.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("27123456789  Ana Pérez"));
        assert!(lines[1].starts_with("20999888777"));
    }

    #[test]
    fn test_import() {
        let (dir, mut store) = temp_store();
        let csv = dir.path().join("roster.csv");
        std::fs::write(
            &csv,
            "nombre,apellido,edad,cuilCuit,telefono,sexo,titulo,especialidad\n\
             luis,gómez,52,20999888777,11112222,M,Médico,Pediatría\n",
        )
        .unwrap();

        let out = run(&Command::Import { csv }, &mut store).unwrap();
        assert_eq!(out, "Imported 1 of 1 rows (0 rejected)");
        assert!(store.contains("20999888777"));
    }
}
