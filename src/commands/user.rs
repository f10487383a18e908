// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::UserProfile;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            db::set_active_user(conn, id)?;
            if db::get_profile(conn, id)?.is_none() {
                let name = sub
                    .get_one::<String>("name")
                    .map(|s| s.as_str())
                    .unwrap_or("Entrepreneur");
                db::save_profile(conn, id, &UserProfile::default_for(name))?;
                println!(
                    "Logged in as '{}'; created a default profile (Group 3, 5%). \
                     Run 'fopbook profile set' to finish onboarding.",
                    id
                );
            } else {
                println!("Logged in as '{}'", id);
            }
        }
        Some(("logout", _)) => {
            db::clear_active_user(conn)?;
            println!("Logged out");
        }
        Some(("whoami", _)) => match db::get_active_user(conn)? {
            Some(u) => println!("{}", u),
            None => println!("(not logged in)"),
        },
        _ => {}
    }
    Ok(())
}
