//! Backup and import tooling configuration.

use serde::{Deserialize, Serialize};

/// Settings for the shell-invoked dump/restore commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Directory where `pg_dump` output files are written.
    #[serde(default = "default_dump_dir")]
    pub dump_dir: String,
    /// Directory scanned for `.sql` files to import.
    #[serde(default = "default_import_dir")]
    pub import_dir: String,
    /// Name of the dump binary to invoke.
    #[serde(default = "default_pg_dump")]
    pub pg_dump: String,
    /// Name of the restore binary to invoke.
    #[serde(default = "default_psql")]
    pub psql: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            dump_dir: default_dump_dir(),
            import_dir: default_import_dir(),
            pg_dump: default_pg_dump(),
            psql: default_psql(),
        }
    }
}

fn default_dump_dir() -> String {
    "data/backup".to_string()
}

fn default_import_dir() -> String {
    "data/import".to_string()
}

fn default_pg_dump() -> String {
    "pg_dump".to_string()
}

fn default_psql() -> String {
    "psql".to_string()
}
