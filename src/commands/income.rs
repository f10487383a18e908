// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::{Currency, Income, IncomeSource};
use crate::rates;
use crate::utils::{
    fmt_money, http_client, maybe_print_json, parse_amount, parse_date, parse_month, pretty_table,
};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// UAH equivalent for a new or edited record. UAH amounts carry over
/// exactly; USD/EUR go through one NBU lookup for the record's date. A
/// failed lookup is non-fatal: the record saves without an equivalent and
/// the warning invites a later fix.
pub fn resolve_amount_uah(amount: Decimal, currency: Currency, date: NaiveDate) -> Option<Decimal> {
    if currency == Currency::Uah {
        return Some(amount);
    }
    let lookup = http_client()
        .map_err(|e| e.to_string())
        .and_then(|client| {
            rates::nbu_rate_to_uah(&client, currency, date).map_err(|e| e.to_string())
        });
    match lookup {
        Ok(rate) => Some(rates::to_uah(amount, currency, rate)),
        Err(e) => {
            eprintln!(
                "Warning: NBU rate for {} on {} unavailable ({}); saving without a UAH \
                 equivalent. The record will not count toward UAH totals until edited.",
                currency, date, e
            );
            None
        }
    }
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = db::require_user(conn)?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let currency = Currency::parse(sub.get_one::<String>("currency").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().clone();
    let source = IncomeSource::parse(sub.get_one::<String>("source").unwrap())?;
    let attachments: Vec<String> = sub
        .get_many::<String>("attach")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    let amount_uah = resolve_amount_uah(amount, currency, date);
    let income = Income {
        id: crate::utils::new_record_id(),
        date,
        amount,
        currency,
        amount_uah,
        description,
        source,
        client_or_project: sub.get_one::<String>("client").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        comment: sub.get_one::<String>("comment").cloned(),
        attachments,
    };
    db::insert_income(conn, &user, &income)?;
    match income.amount_uah {
        Some(uah) => println!(
            "Recorded {} on {} (id {}, ≈ {})",
            fmt_money(&income.amount, income.currency.as_str()),
            income.date,
            income.id,
            crate::utils::fmt_uah(&uah)
        ),
        None => println!(
            "Recorded {} on {} (id {}, no UAH equivalent)",
            fmt_money(&income.amount, income.currency.as_str()),
            income.date,
            income.id
        ),
    }
    Ok(())
}

#[derive(Serialize)]
pub struct IncomeRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub currency: String,
    pub amount_uah: String,
    pub source: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<IncomeRow>> {
    let user = db::require_user(conn)?;
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let mut incomes = db::list_incomes(conn, &user)?;
    if let Some(month) = month {
        incomes.retain(|i| i.date.format("%Y-%m").to_string() == month);
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        incomes.truncate(*limit);
    }
    Ok(incomes
        .iter()
        .map(|i| IncomeRow {
            id: i.id.clone(),
            date: i.date.to_string(),
            description: i.description.clone(),
            amount: i.amount.round_dp(2).to_string(),
            currency: i.currency.to_string(),
            amount_uah: i
                .amount_uah
                .map(|d| d.round_dp(2).to_string())
                .unwrap_or_default(),
            source: i.source.as_str().to_string(),
        })
        .collect())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.currency.clone(),
                    r.amount_uah.clone(),
                    r.source.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "CCY", "UAH", "Source"],
                rows,
            )
        );
    }
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = db::require_user(conn)?;
    let id = sub.get_one::<String>("id").unwrap();
    let Some(inc) = db::get_income(conn, &user, id)? else {
        bail!("No income with id '{}'", id);
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &inc)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Id".into(), inc.id.clone()],
        vec!["Date".into(), inc.date.to_string()],
        vec![
            "Amount".into(),
            fmt_money(&inc.amount, inc.currency.as_str()),
        ],
        vec![
            "UAH equivalent".into(),
            inc.amount_uah
                .map(|d| crate::utils::fmt_uah(&d))
                .unwrap_or_else(|| "(unconverted)".into()),
        ],
        vec!["Description".into(), inc.description.clone()],
        vec!["Source".into(), inc.source.as_str().into()],
        vec![
            "Client/project".into(),
            inc.client_or_project.clone().unwrap_or_default(),
        ],
        vec!["Category".into(), inc.category.clone().unwrap_or_default()],
        vec!["Comment".into(), inc.comment.clone().unwrap_or_default()],
        vec!["Attachments".into(), inc.attachments.join(", ")],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

/// An optional field under edit: absent flag keeps the stored value, an
/// empty string clears it.
fn edited_field(
    sub: &clap::ArgMatches,
    key: &str,
    existing: Option<String>,
) -> Option<String> {
    match sub.get_one::<String>(key) {
        Some(s) if s.is_empty() => None,
        Some(s) => Some(s.clone()),
        None => existing,
    }
}

/// Edit is delete + recreate under the original id; the UAH equivalent is
/// re-resolved from the edited amount, currency and date.
fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = db::require_user(conn)?;
    let id = sub.get_one::<String>("id").unwrap();
    let Some(existing) = db::get_income(conn, &user, id)? else {
        bail!("No income with id '{}'", id);
    };

    let amount = match sub.get_one::<String>("amount") {
        Some(s) => parse_amount(s)?,
        None => existing.amount,
    };
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => existing.date,
    };
    let currency = match sub.get_one::<String>("currency") {
        Some(s) => Currency::parse(s)?,
        None => existing.currency,
    };

    let source = match sub.get_one::<String>("source") {
        Some(s) => IncomeSource::parse(s)?,
        None => existing.source,
    };
    // Attachments are replaced wholesale when the flag appears; a single
    // empty value clears them.
    let attachments = match sub.get_many::<String>("attach") {
        Some(v) => {
            let v: Vec<String> = v.cloned().collect();
            if v.len() == 1 && v[0].is_empty() {
                Vec::new()
            } else {
                v
            }
        }
        None => existing.attachments,
    };

    let updated = Income {
        id: existing.id.clone(),
        date,
        amount,
        currency,
        amount_uah: resolve_amount_uah(amount, currency, date),
        description: sub
            .get_one::<String>("description")
            .cloned()
            .unwrap_or(existing.description),
        source,
        client_or_project: edited_field(sub, "client", existing.client_or_project),
        category: edited_field(sub, "category", existing.category),
        comment: edited_field(sub, "comment", existing.comment),
        attachments,
    };

    db::delete_income(conn, &user, id)?;
    db::insert_income(conn, &user, &updated)?;
    println!("Updated income '{}'", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = db::require_user(conn)?;
    let id = sub.get_one::<String>("id").unwrap();
    let n = db::delete_income(conn, &user, id)?;
    if n == 0 {
        println!("No income with id '{}'", id);
    } else {
        println!("Removed income '{}'", id);
    }
    Ok(())
}
