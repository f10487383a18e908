// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fopbook::commands::exporter;
use fopbook::models::{Currency, Income, IncomeSource, UserProfile};
use fopbook::{cli, db};
use rusqlite::Connection;
use rust_decimal_macros::dec;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    db::set_active_user(&conn, "fop-1").unwrap();
    db::save_profile(&conn, "fop-1", &UserProfile::default_for("Olena")).unwrap();

    let records = [
        ("b", "2026-02-01", dec!(500), Currency::Usd, None),
        ("a", "2026-01-15", dec!(1000), Currency::Uah, Some(dec!(1000))),
    ];
    for (id, date, amount, currency, amount_uah) in records {
        let income = Income {
            id: id.into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            currency,
            amount_uah,
            description: "work".into(),
            source: IncomeSource::Manual,
            client_or_project: None,
            category: Some("services".into()),
            comment: None,
            attachments: Vec::new(),
        };
        db::insert_income(&conn, "fop-1", &income).unwrap();
    }
    conn
}

#[test]
fn csv_export_is_oldest_first_with_blank_unconverted_column() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("book_of_income.csv");

    let matches = cli::build_cli().get_matches_from([
        "fopbook",
        "export",
        "incomes",
        "--format",
        "csv",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&conn, export_m).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "date,description,amount,currency,amount_uah,category,client_or_project,source"
    );
    assert_eq!(lines[1], "2026-01-15,work,1000.00,UAH,1000.00,services,,manual");
    assert_eq!(lines[2], "2026-02-01,work,500.00,USD,,services,,manual");
}

#[test]
fn json_export_carries_null_for_unconverted() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("book.json");

    let matches = cli::build_cli().get_matches_from([
        "fopbook",
        "export",
        "incomes",
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&conn, export_m).unwrap();

    let items: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let arr = items.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["currency"], "UAH");
    assert!(arr[1]["amount_uah"].is_null());
    assert_eq!(arr[1]["source"], "manual");
}
