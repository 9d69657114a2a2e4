//! Owner repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the three storage operations the owner service depends on.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` writes every column, so a `None` field clears the stored value.
//! - Lookups return `None`/empty for missing rows instead of failing.
//! - `find_by_last_name` is ordered by `id ASC`.

use crate::db::migrations::{applied_version, latest_version};
use crate::db::DbError;
use crate::model::owner::{Owner, OwnerId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const OWNER_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    address,
    city,
    telephone
FROM owners";

const OWNER_COLUMNS: [&str; 6] = [
    "id",
    "first_name",
    "last_name",
    "address",
    "city",
    "telephone",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for owner persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "owner repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "owner repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "owner repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage gateway for owner records.
pub trait OwnerRepository {
    /// Inserts `owner` when it has no id, otherwise overwrites the row with
    /// that id. Returns the stored record with its id set.
    fn save(&self, owner: &Owner) -> RepoResult<Owner>;
    /// Loads one owner by id.
    fn find_by_id(&self, id: OwnerId) -> RepoResult<Option<Owner>>;
    /// Lists owners whose last name equals `last_name` exactly.
    fn find_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Owner>>;
}

/// SQLite-backed owner repository.
///
/// Borrows the connection, so it also works on a `rusqlite::Transaction`.
pub struct SqliteOwnerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOwnerRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_owner_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl OwnerRepository for SqliteOwnerRepository<'_> {
    fn save(&self, owner: &Owner) -> RepoResult<Owner> {
        // NULL id lets SQLite assign the next AUTOINCREMENT value.
        let id: OwnerId = self.conn.query_row(
            "INSERT INTO owners (
                id,
                first_name,
                last_name,
                address,
                city,
                telephone
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                address = excluded.address,
                city = excluded.city,
                telephone = excluded.telephone
            RETURNING id;",
            params![
                owner.id,
                owner.first_name.as_deref(),
                owner.last_name.as_deref(),
                owner.address.as_deref(),
                owner.city.as_deref(),
                owner.telephone.as_deref(),
            ],
            |row| row.get(0),
        )?;

        Ok(Owner {
            id: Some(id),
            ..owner.clone()
        })
    }

    fn find_by_id(&self, id: OwnerId) -> RepoResult<Option<Owner>> {
        let owner = self
            .conn
            .query_row(
                &format!("{OWNER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_owner_row,
            )
            .optional()?;
        Ok(owner)
    }

    fn find_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Owner>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{OWNER_SELECT_SQL} WHERE last_name = ?1 ORDER BY id ASC;"))?;
        let owners = stmt
            .query_map([last_name], parse_owner_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(owners)
    }
}

fn parse_owner_row(row: &Row<'_>) -> rusqlite::Result<Owner> {
    Ok(Owner {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        address: row.get("address")?,
        city: row.get("city")?,
        telephone: row.get("telephone")?,
    })
}

fn ensure_owner_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = applied_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "owners")? {
        return Err(RepoError::MissingRequiredTable("owners"));
    }

    for column in OWNER_COLUMNS {
        if !table_has_column(conn, "owners", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "owners",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
