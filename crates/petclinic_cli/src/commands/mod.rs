//! Command plumbing shared by all subcommands.

use clap::Args;
use log::warn;
use petclinic_core::db::{open_db, DbError};
use petclinic_core::{
    init_logging, ClinicConfig, LoggingError, OwnerService, OwnerServiceError, RepoError,
    SqliteOwnerRepository,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod owner;

/// Flags accepted before any subcommand. Unset flags fall back to
/// `PETCLINIC_*` environment configuration.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// SQLite database file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

impl GlobalArgs {
    /// Layers command-line flags over environment configuration.
    pub fn resolve(&self, base: ClinicConfig) -> ClinicConfig {
        ClinicConfig {
            db_path: self.db.clone().unwrap_or(base.db_path),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
            log_dir: self.log_dir.clone().or(base.log_dir),
        }
    }
}

/// Failure of one CLI invocation.
#[derive(Debug)]
pub enum CommandError {
    Logging(LoggingError),
    Db(DbError),
    Repo(RepoError),
    Service(OwnerServiceError),
    Output(serde_json::Error),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "logging init failed: {err}"),
            Self::Db(err) => write!(f, "database open failed: {err}"),
            Self::Repo(err) => write!(f, "owner repository init failed: {err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to render output: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Service(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<OwnerServiceError> for CommandError {
    fn from(value: OwnerServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

/// Opens the configured store and runs `f` with an owner service over it.
pub fn with_owner_service(
    global: &GlobalArgs,
    f: impl FnOnce(&OwnerService<SqliteOwnerRepository<'_>>) -> Result<String, CommandError>,
) -> Result<String, CommandError> {
    let config = global.resolve(ClinicConfig::from_env());
    if let Some(logging) = config.logging() {
        init_logging(&logging).map_err(CommandError::Logging)?;
    }

    let conn = open_db(&config.db_path).map_err(CommandError::Db)?;
    let repo = SqliteOwnerRepository::try_new(&conn).map_err(CommandError::Repo)?;
    let service = OwnerService::new(repo);

    let result = f(&service);
    if let Err(err) = &result {
        warn!("event=cli_command module=cli status=error error={err}");
    }
    result
}
