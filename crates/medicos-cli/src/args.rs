//! CLI argument definitions using clap
//!
//! Commands:
//! - medicos add --name <..> --surname <..> ... --specialty <..>
//! - medicos show <TAX_ID>
//! - medicos update --tax-id <TAX_ID> ...
//! - medicos delete <TAX_ID>
//! - medicos list
//! - medicos import <CSV>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use medicos_types::{limits, NewProfessional};

/// Roster of healthcare professionals backed by a JSON file
#[derive(Parser, Debug)]
#[command(name = "medicos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON roster
    #[arg(long, global = true, env = "MEDICOS_DATA_PATH", default_value = limits::DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Roster operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new professional
    Add(ProfessionalArgs),

    /// Show one professional
    Show {
        /// CUIL/CUIT (11 digits)
        tax_id: String,
    },

    /// Overwrite the professional selected by --tax-id
    Update(ProfessionalArgs),

    /// Remove one professional
    Delete {
        /// CUIL/CUIT (11 digits)
        tax_id: String,
    },

    /// List every professional
    List,

    /// Add professionals from a CSV file with the roster keys as header
    Import {
        /// Path to the CSV file
        csv: PathBuf,
    },
}

/// Field values of a professional.
#[derive(Args, Debug, Clone)]
pub struct ProfessionalArgs {
    /// Given name
    #[arg(long)]
    pub name: String,
    /// Family name
    #[arg(long)]
    pub surname: String,
    /// Age in years
    #[arg(long)]
    pub age: String,
    /// CUIL/CUIT (11 digits)
    #[arg(long)]
    pub tax_id: String,
    /// Phone number (8 digits)
    #[arg(long)]
    pub phone: String,
    /// Sex
    #[arg(long)]
    pub sex: String,
    /// Professional degree
    #[arg(long)]
    pub title: String,
    /// Medical specialty
    #[arg(long)]
    pub specialty: String,
}

impl ProfessionalArgs {
    /// Borrows these values as store input.
    pub fn as_input(&self) -> NewProfessional<'_> {
        NewProfessional {
            name: &self.name,
            surname: &self.surname,
            age: &self.age,
            tax_id: &self.tax_id,
            phone: &self.phone,
            sex: &self.sex,
            title: &self.title,
            specialty: &self.specialty,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
