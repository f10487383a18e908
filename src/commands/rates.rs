// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Currency;
use crate::rates::{nbu_rate_to_uah, nbu_rate_today, to_uah};
use crate::utils::{http_client, parse_amount, parse_date, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("today", _)) => today()?,
        Some(("get", sub)) => get(sub)?,
        Some(("convert", sub)) => convert(sub)?,
        _ => {}
    }
    Ok(())
}

fn today() -> Result<()> {
    let client = http_client()?;
    let mut rows = Vec::new();
    // One currency failing should not hide the other.
    for ccy in [Currency::Usd, Currency::Eur] {
        match nbu_rate_today(&client, ccy) {
            Ok((rate, published)) => {
                rows.push(vec![
                    format!("{} / UAH", ccy),
                    format!("{:.2}", rate),
                    published,
                ]);
            }
            Err(e) => eprintln!("Warning: {}", e),
        }
    }
    if rows.is_empty() {
        println!("Could not load any NBU rates.");
    } else {
        println!("{}", pretty_table(&["Pair", "Rate", "Published"], rows));
    }
    Ok(())
}

fn get(sub: &clap::ArgMatches) -> Result<()> {
    let ccy = Currency::parse(sub.get_one::<String>("currency").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let client = http_client()?;
    let rate = nbu_rate_to_uah(&client, ccy, date)?;
    println!("{} / UAH on {}: {:.4}", ccy, date, rate);
    Ok(())
}

fn convert(sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let ccy = Currency::parse(sub.get_one::<String>("currency").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    if ccy == Currency::Uah {
        println!("{} UAH -> {:.2} UAH", amount, amount);
        return Ok(());
    }
    let client = http_client()?;
    let rate = nbu_rate_to_uah(&client, ccy, date)?;
    println!(
        "{} {} -> {:.2} UAH (rate {:.4})",
        amount,
        ccy,
        to_uah(amount, ccy, rate),
        rate
    );
    Ok(())
}
