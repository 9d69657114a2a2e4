//! Owner subcommands.
//!
//! Every command prints the affected owner(s) as pretty JSON.

use super::CommandError;
use clap::Args;
use petclinic_core::{Owner, OwnerId, OwnerRepository, OwnerService};

/// Owner attributes accepted by `create` and `update`.
///
/// Omitted flags are stored as absent values.
#[derive(Debug, Args)]
pub struct OwnerFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub telephone: Option<String>,
}

impl OwnerFields {
    fn into_owner(self, id: Option<OwnerId>) -> Owner {
        Owner {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            telephone: self.telephone,
        }
    }
}

#[derive(Debug, Args)]
pub struct FindArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub id: OwnerId,
}

#[derive(Debug, Args)]
pub struct FindByLastNameArgs {
    pub last_name: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub id: OwnerId,

    #[command(flatten)]
    pub fields: OwnerFields,
}

pub fn create<R: OwnerRepository>(
    service: &OwnerService<R>,
    fields: OwnerFields,
) -> Result<String, CommandError> {
    let created = service.create(&fields.into_owner(None))?;
    Ok(serde_json::to_string_pretty(&created)?)
}

pub fn find<R: OwnerRepository>(
    service: &OwnerService<R>,
    args: FindArgs,
) -> Result<String, CommandError> {
    let owner = service.find_by_id(args.id)?;
    Ok(serde_json::to_string_pretty(&owner)?)
}

pub fn find_by_last_name<R: OwnerRepository>(
    service: &OwnerService<R>,
    args: FindByLastNameArgs,
) -> Result<String, CommandError> {
    let owners = service.find_by_last_name(&args.last_name)?;
    Ok(serde_json::to_string_pretty(&owners)?)
}

pub fn update<R: OwnerRepository>(
    service: &OwnerService<R>,
    args: UpdateArgs,
) -> Result<String, CommandError> {
    let updated = service.update(&args.fields.into_owner(Some(args.id)))?;
    Ok(serde_json::to_string_pretty(&updated)?)
}
