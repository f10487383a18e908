// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The three currencies an income can be booked in. UAH is the local
/// currency and never needs rate resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Uah,
    Usd,
    Eur,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Uah => "UAH",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "UAH" => Ok(Currency::Uah),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(anyhow!("Unknown currency '{}' (use UAH|USD|EUR)", other)),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// FOP registration tier. Determines the liability formula and the annual
/// income ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FopGroup {
    Group1,
    Group2,
    Group3,
}

impl FopGroup {
    pub fn number(&self) -> i64 {
        match self {
            FopGroup::Group1 => 1,
            FopGroup::Group2 => 2,
            FopGroup::Group3 => 3,
        }
    }

    pub fn from_number(n: i64) -> Result<Self> {
        match n {
            1 => Ok(FopGroup::Group1),
            2 => Ok(FopGroup::Group2),
            3 => Ok(FopGroup::Group3),
            other => Err(anyhow!("Unknown FOP group {} (use 1|2|3)", other)),
        }
    }
}

impl std::fmt::Display for FopGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group {}", self.number())
    }
}

/// Group 3 single-tax rate. 3% implies VAT registration. For groups 1/2 the
/// stored rate is ignored by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRate {
    Percent5,
    Percent3,
}

impl TaxRate {
    pub fn as_decimal(&self) -> Decimal {
        match self {
            TaxRate::Percent5 => dec!(0.05),
            TaxRate::Percent3 => dec!(0.03),
        }
    }

    pub fn percent(&self) -> u32 {
        match self {
            TaxRate::Percent5 => 5,
            TaxRate::Percent3 => 3,
        }
    }

    pub fn from_percent(n: i64) -> Result<Self> {
        match n {
            5 => Ok(TaxRate::Percent5),
            3 => Ok(TaxRate::Percent3),
            other => Err(anyhow!("Unknown tax rate {}% (use 5|3)", other)),
        }
    }
}

/// How the record entered the book: typed in by hand, or extracted from a
/// scanned document and reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeSource {
    Manual,
    AiScan,
}

impl IncomeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeSource::Manual => "manual",
            IncomeSource::AiScan => "ai-scan",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "manual" => Ok(IncomeSource::Manual),
            "ai-scan" => Ok(IncomeSource::AiScan),
            other => Err(anyhow!("Unknown source '{}' (use manual|ai-scan)", other)),
        }
    }
}

/// One income transaction. `amount` is in the original currency;
/// `amount_uah` is the UAH equivalent resolved once at creation time and
/// cached on the record. It is `None` when rate resolution failed for a
/// foreign-currency record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub currency: Currency,
    pub amount_uah: Option<Decimal>,
    pub description: String,
    pub source: IncomeSource,
    pub client_or_project: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: Option<String>,
    pub group: FopGroup,
    pub tax_rate: TaxRate,
    pub has_employees: bool,
    pub is_onboarded: bool,
}

impl UserProfile {
    /// Profile created on first login, before onboarding.
    pub fn default_for(name: &str) -> Self {
        UserProfile {
            name: name.to_string(),
            email: None,
            group: FopGroup::Group3,
            tax_rate: TaxRate::Percent5,
            has_employees: false,
            is_onboarded: false,
        }
    }
}
