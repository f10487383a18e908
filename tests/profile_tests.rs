// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fopbook::commands::{profile, user};
use fopbook::models::{FopGroup, TaxRate};
use fopbook::{cli, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn run(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fopbook"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("user", sub)) => user::handle(conn, sub),
        Some(("profile", sub)) => profile::handle(conn, sub),
        other => panic!("unexpected subcommand {:?}", other.map(|(n, _)| n)),
    }
}

#[test]
fn login_creates_the_default_profile() {
    let conn = setup();
    run(&conn, &["user", "login", "fop-1", "--name", "Olena"]).unwrap();

    assert_eq!(db::get_active_user(&conn).unwrap().as_deref(), Some("fop-1"));
    let p = db::get_profile(&conn, "fop-1").unwrap().unwrap();
    assert_eq!(p.name, "Olena");
    assert_eq!(p.group, FopGroup::Group3);
    assert_eq!(p.tax_rate, TaxRate::Percent5);
    assert!(!p.is_onboarded);
    assert!(!p.has_employees);
}

#[test]
fn login_again_keeps_the_existing_profile() {
    let conn = setup();
    run(&conn, &["user", "login", "fop-1", "--name", "Olena"]).unwrap();
    run(&conn, &["profile", "set", "--group", "2"]).unwrap();
    run(&conn, &["user", "login", "fop-1"]).unwrap();

    let p = db::get_profile(&conn, "fop-1").unwrap().unwrap();
    assert_eq!(p.group, FopGroup::Group2);
}

#[test]
fn setting_the_group_completes_onboarding() {
    let conn = setup();
    run(&conn, &["user", "login", "fop-1"]).unwrap();
    run(&conn, &["profile", "set", "--group", "3", "--tax-rate", "3"]).unwrap();

    let p = db::get_profile(&conn, "fop-1").unwrap().unwrap();
    assert!(p.is_onboarded);
    assert_eq!(p.tax_rate, TaxRate::Percent3);
}

#[test]
fn tax_rate_is_rejected_outside_group3() {
    let conn = setup();
    run(&conn, &["user", "login", "fop-1"]).unwrap();
    run(&conn, &["profile", "set", "--group", "1"]).unwrap();

    let err = run(&conn, &["profile", "set", "--tax-rate", "5"]).unwrap_err();
    assert!(err.to_string().contains("Group 3"));
}

#[test]
fn invalid_group_number_is_rejected() {
    let conn = setup();
    run(&conn, &["user", "login", "fop-1"]).unwrap();
    assert!(run(&conn, &["profile", "set", "--group", "4"]).is_err());
}

#[test]
fn profile_commands_fail_without_login() {
    let conn = setup();
    let err = run(&conn, &["profile", "set", "--group", "1"]).unwrap_err();
    assert!(err.to_string().contains("Not authenticated"));
}
