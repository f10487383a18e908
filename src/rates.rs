// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! NBU exchange-rate resolution. One GET per call, no retry, no cache:
//! a rate is looked up once when an income is recorded and the result is
//! stored on the record itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Currency;

const NBU_EXCHANGE_URL: &str = "https://bank.gov.ua/NBUStatService/v1/statdirectory/exchange";

#[derive(Debug, Error)]
pub enum RateError {
    #[error("NBU published no {currency} rate for {date}")]
    Unavailable { currency: Currency, date: NaiveDate },
    #[error("NBU published no current {currency} rate")]
    NoCurrentRate { currency: Currency },
    #[error("NBU request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// One row of the NBU statdirectory payload. The endpoint returns a JSON
/// array; an empty array means no rate was published for that date.
#[derive(Debug, Deserialize)]
pub struct NbuQuote {
    pub rate: f64,
    #[serde(rename = "cc")]
    pub code: String,
    #[serde(rename = "exchangedate")]
    pub exchange_date: String,
}

pub fn decode_quotes(body: &str) -> Result<Vec<NbuQuote>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Rate for a dated lookup, from a decoded payload. An empty array is how
/// the NBU says "nothing published for that date".
pub fn rate_from_quotes(
    quotes: Vec<NbuQuote>,
    currency: Currency,
    date: NaiveDate,
) -> Result<Decimal, RateError> {
    let quote = quotes
        .into_iter()
        .next()
        .ok_or(RateError::Unavailable { currency, date })?;
    Decimal::try_from(quote.rate).map_err(|_| RateError::Unavailable { currency, date })
}

/// UAH value of an amount given a resolved rate. UAH amounts pass through
/// untouched regardless of the rate supplied.
pub fn to_uah(amount: Decimal, currency: Currency, rate: Decimal) -> Decimal {
    match currency {
        Currency::Uah => amount,
        _ => amount * rate,
    }
}

/// Resolve how many UAH one unit of `currency` is worth on `date`.
///
/// Callers treat failure as non-fatal: the income still saves without a UAH
/// equivalent and the user is told to fix it up later.
pub fn nbu_rate_to_uah(
    client: &reqwest::blocking::Client,
    currency: Currency,
    date: NaiveDate,
) -> Result<Decimal, RateError> {
    let url = format!(
        "{}?valcode={}&date={}&json",
        NBU_EXCHANGE_URL,
        currency,
        date.format("%Y%m%d")
    );
    let quotes: Vec<NbuQuote> = client.get(url).send()?.error_for_status()?.json()?;
    rate_from_quotes(quotes, currency, date)
}

/// Latest published rate for `currency`, letting the NBU pick the
/// publication date. The returned string is the date the NBU stamped on
/// the quote; no date of our own enters the lookup or its error.
pub fn nbu_rate_today(
    client: &reqwest::blocking::Client,
    currency: Currency,
) -> Result<(Decimal, String), RateError> {
    let url = format!("{}?valcode={}&json", NBU_EXCHANGE_URL, currency);
    let quotes: Vec<NbuQuote> = client.get(url).send()?.error_for_status()?.json()?;
    let quote = quotes
        .into_iter()
        .next()
        .ok_or(RateError::NoCurrentRate { currency })?;
    let rate =
        Decimal::try_from(quote.rate).map_err(|_| RateError::NoCurrentRate { currency })?;
    Ok((rate, quote.exchange_date))
}
