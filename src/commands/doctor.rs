// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::Currency;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let user = db::require_user(conn)?;
    let rows = check(conn, &user)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// All consistency findings for one user's book, as issue/detail pairs.
pub fn check(conn: &Connection, user: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) No profile yet
    if db::get_profile(conn, user)?.is_none() {
        rows.push(vec!["missing_profile".into(), user.to_string()]);
    }

    let incomes = db::list_incomes(conn, user)?;
    for inc in &incomes {
        // 2) Foreign-currency records without a UAH equivalent under-count
        //    every total they appear in.
        if inc.currency != Currency::Uah && inc.amount_uah.is_none() {
            rows.push(vec![
                "unconverted_income".into(),
                format!("{} {} {} {}", inc.id, inc.date, inc.amount, inc.currency),
            ]);
        }
        // 3) UAH records must carry amount_uah == amount exactly.
        if inc.currency == Currency::Uah {
            match inc.amount_uah {
                Some(uah) if uah == inc.amount => {}
                other => rows.push(vec![
                    "uah_equivalent_drift".into(),
                    format!("{}: amount {} vs amount_uah {:?}", inc.id, inc.amount, other),
                ]),
            }
        }
        // 4) Income amounts should be positive
        if inc.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("{} {}", inc.id, inc.amount),
            ]);
        }
    }

    Ok(rows)
}
