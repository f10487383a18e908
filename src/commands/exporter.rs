// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("incomes", sub)) => export_incomes(conn, sub),
        _ => Ok(()),
    }
}

/// The book of income: every record, oldest first, with both the original
/// amount and the UAH equivalent (blank when unresolved).
fn export_incomes(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = db::require_user(conn)?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut incomes = db::list_incomes(conn, &user)?;
    incomes.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "description",
                "amount",
                "currency",
                "amount_uah",
                "category",
                "client_or_project",
                "source",
            ])?;
            for i in &incomes {
                wtr.write_record([
                    i.date.to_string(),
                    i.description.clone(),
                    format!("{:.2}", i.amount),
                    i.currency.to_string(),
                    i.amount_uah
                        .map(|d| format!("{:.2}", d))
                        .unwrap_or_default(),
                    i.category.clone().unwrap_or_default(),
                    i.client_or_project.clone().unwrap_or_default(),
                    i.source.as_str().to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = incomes
                .iter()
                .map(|i| {
                    json!({
                        "date": i.date.to_string(),
                        "description": i.description,
                        "amount": i.amount,
                        "currency": i.currency,
                        "amount_uah": i.amount_uah,
                        "category": i.category,
                        "client_or_project": i.client_or_project,
                        "source": i.source,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} income record(s) to {}", incomes.len(), out);
    Ok(())
}
