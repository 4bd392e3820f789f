//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! services by `Arc`. Request handlers never read environment variables, which
//! keeps behaviour consistent across multi-threaded runtimes and test
//! harnesses.

use clinica_store::JsonTable;
use std::path::{Path, PathBuf};

const PATIENTS_FILE: &str = "pacientes.json";
const DOCTORS_FILE: &str = "doctores.json";
const APPOINTMENTS_FILE: &str = "citas.json";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at the given data directory.
    ///
    /// The directory does not need to exist yet; tables are created on first
    /// save.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn patients_table(&self) -> JsonTable {
        JsonTable::new(self.data_dir.join(PATIENTS_FILE))
    }

    pub fn doctors_table(&self) -> JsonTable {
        JsonTable::new(self.data_dir.join(DOCTORS_FILE))
    }

    pub fn appointments_table(&self) -> JsonTable {
        JsonTable::new(self.data_dir.join(APPOINTMENTS_FILE))
    }
}
