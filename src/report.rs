//! Summary of per-user activity in the phimkhoi database.
//!
//! Collects distinct `userId` counts for watch history and favorites, lists
//! the users collection, and renders all three as plain text sections.

use std::io::{self, Write};

use tracing::info;

use crate::config::ReportConfig;
use crate::db::Database;
use crate::errors::ReportError;
use crate::models::{display_optional, display_value, UserCount, UserSummary};

pub const WATCH_HISTORY_HEADER: &str = "=== WATCH HISTORY userIds ===";
pub const FAVORITES_HEADER: &str = "=== FAVORITES userIds ===";
pub const USERS_HEADER: &str = "=== USERS in DB ===";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub watch_history: Vec<UserCount>,
    pub favorites: Vec<UserCount>,
    pub users: Vec<UserSummary>,
}

impl Report {
    pub async fn collect(db: &Database, config: &ReportConfig) -> Result<Self, ReportError> {
        let watch_history = db.user_counts(&config.watch_history_collection).await?;
        let favorites = db.user_counts(&config.favorites_collection).await?;
        let users = db.list_users(&config.users_collection).await?;

        Ok(Self {
            watch_history,
            favorites,
            users,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_counts_section(out, WATCH_HISTORY_HEADER, &self.watch_history, false)?;
        write_counts_section(out, FAVORITES_HEADER, &self.favorites, true)?;
        write_users_section(out, &self.users)
    }
}

pub fn write_counts_section<W: Write>(
    out: &mut W,
    header: &str,
    entries: &[UserCount],
    leading_blank: bool,
) -> io::Result<()> {
    if leading_blank {
        writeln!(out)?;
    }
    writeln!(out, "{}", header)?;
    for entry in entries {
        writeln!(out, "{}", count_line(entry))?;
    }
    Ok(())
}

pub fn write_users_section<W: Write>(out: &mut W, users: &[UserSummary]) -> io::Result<()> {
    writeln!(out, "\n{}", USERS_HEADER)?;
    for user in users {
        writeln!(out, "{}", user_line(user))?;
    }
    Ok(())
}

pub fn count_line(entry: &UserCount) -> String {
    format!(
        "  userId: {}  ->  {} records",
        display_value(&entry.user_id),
        entry.count
    )
}

pub fn user_line(user: &UserSummary) -> String {
    format!(
        "  _id: {}  name: {}  email: {}  role: {}",
        display_value(&user.id),
        display_optional(user.name.as_ref()),
        display_optional(user.email.as_ref()),
        display_optional(user.role.as_ref()),
    )
}

/// Query and print one section at a time, so sections read before a
/// failing query are already written when the error comes back.
pub async fn write_report<W: Write>(
    db: &Database,
    config: &ReportConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let watch_history = db.user_counts(&config.watch_history_collection).await?;
    info!(
        "Read {} watch history userIds from '{}'",
        watch_history.len(),
        config.watch_history_collection
    );
    write_counts_section(out, WATCH_HISTORY_HEADER, &watch_history, false)?;
    out.flush()?;

    let favorites = db.user_counts(&config.favorites_collection).await?;
    info!(
        "Read {} favorites userIds from '{}'",
        favorites.len(),
        config.favorites_collection
    );
    write_counts_section(out, FAVORITES_HEADER, &favorites, true)?;
    out.flush()?;

    let users = db.list_users(&config.users_collection).await?;
    info!("Read {} users from '{}'", users.len(), config.users_collection);
    write_users_section(out, &users)?;
    out.flush()?;

    Ok(())
}

/// Connect, print every section to stdout, then close the connection.
pub async fn run_report(config: &ReportConfig) -> anyhow::Result<()> {
    let db = Database::connect(&config.mongodb_uri, &config.database).await?;
    write_report(&db, config, &mut io::stdout()).await?;
    db.close().await;
    Ok(())
}
