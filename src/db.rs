// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Local document store: one profile row per user, one income row per
//! transaction, each tagged with the owning user's id. Mutations go through
//! create/delete; callers re-fetch the list after every write instead of
//! patching it in place.

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::PathBuf;

use crate::models::{Currency, FopGroup, Income, IncomeSource, TaxRate, UserProfile};
use crate::utils::{parse_amount, parse_date};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.fopbook", "Fopbook", "fopbook"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("fopbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS profiles(
        user_id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT,
        fop_group INTEGER NOT NULL,
        tax_rate INTEGER NOT NULL,
        has_employees INTEGER NOT NULL DEFAULT 0,
        is_onboarded INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS incomes(
        id TEXT NOT NULL,
        user_id TEXT NOT NULL,
        date TEXT NOT NULL,
        amount TEXT NOT NULL,
        currency TEXT NOT NULL,
        amount_uah TEXT,
        description TEXT NOT NULL,
        source TEXT NOT NULL,
        client_or_project TEXT,
        category TEXT,
        comment TEXT,
        attachments TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        UNIQUE(user_id, id)
    );
    CREATE INDEX IF NOT EXISTS idx_incomes_date ON incomes(date);
    "#,
    )?;
    Ok(())
}

// Active user (the identity provider hands us an opaque stable id;
// locally that is whoever logged in last).

pub fn get_active_user(conn: &Connection) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='active_user'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_active_user(conn: &Connection, user_id: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('active_user', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![user_id],
    )?;
    Ok(())
}

pub fn clear_active_user(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM settings WHERE key='active_user'", [])?;
    Ok(())
}

pub fn require_user(conn: &Connection) -> Result<String> {
    match get_active_user(conn)? {
        Some(u) => Ok(u),
        None => bail!("Not authenticated: run 'fopbook user login <id>' first"),
    }
}

// Profiles

pub fn get_profile(conn: &Connection, user_id: &str) -> Result<Option<UserProfile>> {
    let row = conn
        .query_row(
            "SELECT name, email, fop_group, tax_rate, has_employees, is_onboarded
             FROM profiles WHERE user_id=?1",
            params![user_id],
            |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, Option<String>>(1)?,
                    r.get::<_, i64>(2)?,
                    r.get::<_, i64>(3)?,
                    r.get::<_, bool>(4)?,
                    r.get::<_, bool>(5)?,
                ))
            },
        )
        .optional()?;
    match row {
        None => Ok(None),
        Some((name, email, group, rate, has_employees, is_onboarded)) => Ok(Some(UserProfile {
            name,
            email,
            group: FopGroup::from_number(group)?,
            tax_rate: TaxRate::from_percent(rate)?,
            has_employees,
            is_onboarded,
        })),
    }
}

pub fn save_profile(conn: &Connection, user_id: &str, profile: &UserProfile) -> Result<()> {
    conn.execute(
        "INSERT INTO profiles(user_id, name, email, fop_group, tax_rate, has_employees, is_onboarded)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(user_id) DO UPDATE SET
            name=excluded.name, email=excluded.email, fop_group=excluded.fop_group,
            tax_rate=excluded.tax_rate, has_employees=excluded.has_employees,
            is_onboarded=excluded.is_onboarded",
        params![
            user_id,
            profile.name,
            profile.email,
            profile.group.number(),
            profile.tax_rate.percent() as i64,
            profile.has_employees,
            profile.is_onboarded
        ],
    )?;
    Ok(())
}

// Incomes

pub fn insert_income(conn: &Connection, user_id: &str, income: &Income) -> Result<()> {
    let attachments = if income.attachments.is_empty() {
        None
    } else {
        Some(serde_json::to_string(&income.attachments)?)
    };
    conn.execute(
        "INSERT INTO incomes(id, user_id, date, amount, currency, amount_uah, description,
                             source, client_or_project, category, comment, attachments)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            income.id,
            user_id,
            income.date.to_string(),
            income.amount.to_string(),
            income.currency.as_str(),
            income.amount_uah.map(|d| d.to_string()),
            income.description,
            income.source.as_str(),
            income.client_or_project,
            income.category,
            income.comment,
            attachments
        ],
    )?;
    Ok(())
}

fn row_to_income(
    id: String,
    date: String,
    amount: String,
    currency: String,
    amount_uah: Option<String>,
    description: String,
    source: String,
    client_or_project: Option<String>,
    category: Option<String>,
    comment: Option<String>,
    attachments: Option<String>,
) -> Result<Income> {
    // Amounts are cleaned on read: older rows may carry spaces or a
    // decimal comma from hand-edited imports.
    let amount_uah = match amount_uah {
        Some(s) => Some(parse_amount(&s).with_context(|| format!("Income '{}' amount_uah", id))?),
        None => None,
    };
    let attachments: Vec<String> = match attachments {
        Some(s) => serde_json::from_str(&s)
            .with_context(|| format!("Income '{}' attachments are not valid JSON", id))?,
        None => Vec::new(),
    };
    Ok(Income {
        date: parse_date(&date)?,
        amount: parse_amount(&amount).with_context(|| format!("Income '{}' amount", id))?,
        currency: Currency::parse(&currency)?,
        amount_uah,
        description,
        source: IncomeSource::parse(&source)?,
        client_or_project,
        category,
        comment,
        attachments,
        id,
    })
}

const INCOME_COLS: &str = "id, date, amount, currency, amount_uah, description, source,
                           client_or_project, category, comment, attachments";

pub fn list_incomes(conn: &Connection, user_id: &str) -> Result<Vec<Income>> {
    let sql = format!(
        "SELECT {} FROM incomes WHERE user_id=?1 ORDER BY date DESC, created_at DESC",
        INCOME_COLS
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![user_id])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(row_to_income(
            r.get(0)?,
            r.get(1)?,
            r.get(2)?,
            r.get(3)?,
            r.get(4)?,
            r.get(5)?,
            r.get(6)?,
            r.get(7)?,
            r.get(8)?,
            r.get(9)?,
            r.get(10)?,
        )?);
    }
    Ok(out)
}

pub fn get_income(conn: &Connection, user_id: &str, id: &str) -> Result<Option<Income>> {
    let sql = format!("SELECT {} FROM incomes WHERE user_id=?1 AND id=?2", INCOME_COLS);
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![user_id, id])?;
    match rows.next()? {
        Some(r) => Ok(Some(row_to_income(
            r.get(0)?,
            r.get(1)?,
            r.get(2)?,
            r.get(3)?,
            r.get(4)?,
            r.get(5)?,
            r.get(6)?,
            r.get(7)?,
            r.get(8)?,
            r.get(9)?,
            r.get(10)?,
        )?)),
        None => Ok(None),
    }
}

/// Delete by record id. Returns the number of rows removed (0 when the id
/// does not exist for this user).
pub fn delete_income(conn: &Connection, user_id: &str, id: &str) -> Result<usize> {
    let n = conn.execute(
        "DELETE FROM incomes WHERE user_id=?1 AND id=?2",
        params![user_id, id],
    )?;
    Ok(n)
}
