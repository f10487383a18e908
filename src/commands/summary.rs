// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::FopGroup;
use crate::tax::{self, Period};
use crate::utils::{fmt_uah, maybe_print_json, pretty_table};
use anyhow::{bail, Result};
use rusqlite::Connection;
use rust_decimal_macros::dec;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = db::require_user(conn)?;
    let Some(profile) = db::get_profile(conn, &user)? else {
        bail!("No profile for user '{}'", user);
    };
    let period = Period::parse(sub.get_one::<String>("period").unwrap())?;

    let incomes = db::list_incomes(conn, &user)?;
    let today = chrono::Utc::now().date_naive();
    let summary = tax::summarize(&incomes, &profile, period, today);

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        return Ok(());
    }

    let period_label = match period {
        Period::Month => "month",
        Period::Year => "year",
    };
    let mut rows = vec![vec![
        format!("Total income ({})", period_label),
        fmt_uah(&summary.total_income),
    ]];
    match profile.group {
        FopGroup::Group3 => {
            rows.push(vec![
                format!("Single tax ({}%)", profile.tax_rate.percent()),
                fmt_uah(&summary.tax.percent_levy),
            ]);
            rows.push(vec![
                "Military levy (1%)".into(),
                fmt_uah(&summary.tax.military_levy),
            ]);
        }
        _ => {
            rows.push(vec![
                "Single tax (monthly)".into(),
                fmt_uah(&summary.tax.flat_levy),
            ]);
            rows.push(vec![
                "Military levy (monthly)".into(),
                fmt_uah(&summary.tax.military_levy),
            ]);
        }
    }
    rows.push(vec![
        format!("ESV ({} mo.)", period.months()),
        fmt_uah(&summary.tax.social_contribution),
    ]);
    rows.push(vec![
        format!("Tax total ({})", period_label),
        fmt_uah(&summary.tax.total),
    ]);
    rows.push(vec!["Net income".into(), fmt_uah(&summary.net_income)]);
    rows.push(vec![
        format!("Limit ({})", profile.group),
        fmt_uah(&summary.limit.ceiling),
    ]);
    rows.push(vec![
        "Limit used".into(),
        format!(
            "{} ({:.1}%)",
            fmt_uah(&summary.limit.used),
            summary.limit.percent_used
        ),
    ]);
    rows.push(vec![
        "Limit remaining".into(),
        fmt_uah(&summary.limit.remaining),
    ]);
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    for u in &summary.unconverted {
        println!(
            "Note: {} record(s) totalling {:.2} {} have no UAH equivalent and are \
             excluded from the totals above.",
            u.records, u.amount, u.currency
        );
    }
    if summary.limit.over_limit() {
        println!(
            "DANGER: annual income exceeds the {} ceiling by {:.2} UAH.",
            profile.group,
            summary.limit.used - summary.limit.ceiling
        );
    } else if summary.limit.percent_used > dec!(80) {
        println!(
            "Warning: {:.1}% of the annual limit is used.",
            summary.limit.percent_used
        );
    }
    Ok(())
}
