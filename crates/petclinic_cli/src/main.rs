//! `petclinic` command-line entry point.
//!
//! # Responsibility
//! - Parse owner commands and route them through `OwnerService`.
//! - Report "owner not found" with its own exit code (404-equivalent).

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;

use commands::{CommandError, GlobalArgs};

const EXIT_FAILURE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "petclinic", version = petclinic_core::core_version())]
#[command(about = "Pet clinic owner registry", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Register a new owner
    Create(commands::owner::OwnerFields),
    /// Show one owner by id
    Find(commands::owner::FindArgs),
    /// List owners with an exact last name
    FindByLastName(commands::owner::FindByLastNameArgs),
    /// Replace every field of an existing owner
    Update(commands::owner::UpdateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::with_owner_service(&cli.global, |service| match cli.command {
        Commands::Create(args) => commands::owner::create(service, args),
        Commands::Find(args) => commands::owner::find(service, args),
        Commands::FindByLastName(args) => commands::owner::find_by_last_name(service, args),
        Commands::Update(args) => commands::owner::update(service, args),
    });

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            match err {
                CommandError::Service(ref service_err) if service_err.is_not_found() => {
                    ExitCode::from(EXIT_NOT_FOUND)
                }
                _ => ExitCode::from(EXIT_FAILURE),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_create_with_all_fields() {
        let cli = Cli::try_parse_from([
            "petclinic",
            "--db",
            "/tmp/clinic.db",
            "create",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--city",
            "Springfield",
        ])
        .unwrap();

        assert_eq!(cli.global.db, Some(PathBuf::from("/tmp/clinic.db")));
        match cli.command {
            Commands::Create(fields) => {
                assert_eq!(fields.first_name.as_deref(), Some("John"));
                assert_eq!(fields.last_name.as_deref(), Some("Doe"));
                assert_eq!(fields.city.as_deref(), Some("Springfield"));
                assert!(fields.address.is_none());
                assert!(fields.telephone.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_find_by_last_name_positional() {
        let cli = Cli::try_parse_from(["petclinic", "find-by-last-name", "Doe"]).unwrap();
        match cli.command {
            Commands::FindByLastName(args) => assert_eq!(args.last_name, "Doe"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn update_requires_id() {
        let err = Cli::try_parse_from(["petclinic", "update", "--first-name", "Jane"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn reports_core_version() {
        let err = Cli::try_parse_from(["petclinic", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err
            .to_string()
            .contains(petclinic_core::core_version()));
    }

    #[test]
    fn parses_negative_ids() {
        let cli = Cli::try_parse_from(["petclinic", "find", "--id", "-1"]).unwrap();
        match cli.command {
            Commands::Find(args) => assert_eq!(args.id, -1),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["petclinic", "update", "--id", "-7", "--city", "Nowhere"])
            .unwrap();
        match cli.command {
            Commands::Update(args) => assert_eq!(args.id, -7),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn find_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["petclinic", "find", "--id", "abc"]).is_err());
    }
}
