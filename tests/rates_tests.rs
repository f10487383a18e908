// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fopbook::models::Currency;
use fopbook::rates::{decode_quotes, rate_from_quotes, to_uah, RateError};
use rust_decimal_macros::dec;

// Captured shape of the NBU statdirectory response.
const NBU_USD_PAYLOAD: &str = r#"[
  {
    "r030": 840,
    "txt": "Долар США",
    "rate": 41.5264,
    "cc": "USD",
    "exchangedate": "15.03.2026"
  }
]"#;

#[test]
fn decodes_a_published_quote() {
    let quotes = decode_quotes(NBU_USD_PAYLOAD).unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].code, "USD");
    assert_eq!(quotes[0].exchange_date, "15.03.2026");
    assert!((quotes[0].rate - 41.5264).abs() < 1e-9);
}

#[test]
fn empty_array_means_no_rate_published() {
    let quotes = decode_quotes("[]").unwrap();
    assert!(quotes.is_empty());
}

#[test]
fn garbage_payload_is_an_error() {
    assert!(decode_quotes("<html>maintenance</html>").is_err());
}

#[test]
fn rate_comes_from_the_first_quote() {
    let quotes = decode_quotes(NBU_USD_PAYLOAD).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let rate = rate_from_quotes(quotes, Currency::Usd, date).unwrap();
    assert_eq!(rate, dec!(41.5264));
}

#[test]
fn empty_payload_names_the_queried_date() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let err = rate_from_quotes(Vec::new(), Currency::Eur, date).unwrap_err();
    assert!(matches!(err, RateError::Unavailable { .. }));
    assert!(err.to_string().contains("2026-03-15"));
}

#[test]
fn missing_current_rate_carries_no_date() {
    // The dateless lookup lets the NBU pick the publication date, so its
    // error cannot name one.
    let err = RateError::NoCurrentRate {
        currency: Currency::Usd,
    };
    assert_eq!(err.to_string(), "NBU published no current USD rate");
}

#[test]
fn foreign_amount_converts_at_the_rate() {
    let quotes = decode_quotes(NBU_USD_PAYLOAD).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let rate = rate_from_quotes(quotes, Currency::Usd, date).unwrap();
    assert_eq!(to_uah(dec!(100), Currency::Usd, rate), dec!(4152.6400));
}

#[test]
fn uah_passes_through_unconverted() {
    assert_eq!(to_uah(dec!(250.75), Currency::Uah, dec!(41.5264)), dec!(250.75));
}
