// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::{FopGroup, TaxRate};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{bail, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(conn, sub)?,
        Some(("set", sub)) => set(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = db::require_user(conn)?;
    let Some(profile) = db::get_profile(conn, &user)? else {
        bail!("No profile for user '{}'", user);
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &profile)? {
        return Ok(());
    }
    let rate = if profile.group == FopGroup::Group3 {
        format!("{}%", profile.tax_rate.percent())
    } else {
        "n/a (fixed payment)".to_string()
    };
    let rows = vec![
        vec!["Name".into(), profile.name.clone()],
        vec!["Email".into(), profile.email.clone().unwrap_or_default()],
        vec!["Group".into(), profile.group.to_string()],
        vec!["Tax rate".into(), rate],
        vec![
            "Employees".into(),
            if profile.has_employees { "yes" } else { "no" }.into(),
        ],
        vec![
            "Onboarded".into(),
            if profile.is_onboarded { "yes" } else { "no" }.into(),
        ],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = db::require_user(conn)?;
    let Some(mut profile) = db::get_profile(conn, &user)? else {
        bail!("No profile for user '{}'", user);
    };

    if let Some(g) = sub.get_one::<i64>("group") {
        profile.group = FopGroup::from_number(*g)?;
        // Picking a group is the onboarding step.
        profile.is_onboarded = true;
    }
    if let Some(r) = sub.get_one::<i64>("tax-rate") {
        if profile.group != FopGroup::Group3 {
            bail!("A tax rate only applies to Group 3; groups 1/2 pay fixed amounts");
        }
        profile.tax_rate = TaxRate::from_percent(*r)?;
    }
    if let Some(name) = sub.get_one::<String>("name") {
        profile.name = name.clone();
    }
    if let Some(email) = sub.get_one::<String>("email") {
        profile.email = Some(email.clone());
    }
    if let Some(e) = sub.get_one::<bool>("employees") {
        profile.has_employees = *e;
    }

    db::save_profile(conn, &user, &profile)?;
    println!(
        "Profile updated: {}, {}{}",
        profile.name,
        profile.group,
        if profile.group == FopGroup::Group3 {
            format!(", single tax {}%", profile.tax_rate.percent())
        } else {
            String::new()
        }
    );
    Ok(())
}
