// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Single-tax, military-levy, ESV and limit math for the three FOP groups.
//!
//! Everything here is a pure function of its inputs: callers load the income
//! list fresh from the database and pass it in, nothing is mutated in place.
//! Rounding to two decimals happens at presentation time only.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::models::{Currency, FopGroup, Income, TaxRate, UserProfile};

// 2026 annual income ceilings, UAH.
pub const LIMIT_GROUP_1: Decimal = dec!(1444049);
pub const LIMIT_GROUP_2: Decimal = dec!(7211598);
pub const LIMIT_GROUP_3: Decimal = dec!(10091049);

// 2026 rates and fixed monthly payments, UAH.
pub const MONTHLY_ESV: Decimal = dec!(1902.34);
pub const MILITARY_LEVY_FIXED: Decimal = dec!(864.70);
pub const MILITARY_LEVY_RATE_G3: Decimal = dec!(0.01);
pub const TAX_FIXED_G1: Decimal = dec!(332.80);
pub const TAX_FIXED_G2: Decimal = dec!(1729.00);

/// Annual income ceiling for a group.
pub fn limit_for(group: FopGroup) -> Decimal {
    match group {
        FopGroup::Group1 => LIMIT_GROUP_1,
        FopGroup::Group2 => LIMIT_GROUP_2,
        FopGroup::Group3 => LIMIT_GROUP_3,
    }
}

/// Reporting period: the calendar month containing "today", or the full
/// history of the book for the year view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month,
    Year,
}

impl Period {
    pub fn months(&self) -> u32 {
        match self {
            Period::Month => 1,
            Period::Year => 12,
        }
    }

    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => anyhow::bail!("Unknown period '{}' (use month|year)", other),
        }
    }
}

/// Usage of the annual ceiling. `remaining` clamps at zero; going over the
/// ceiling shows up as `used > ceiling`, never as a negative remainder.
/// `percent_used` clamps at 100 for the same reason.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LimitStatus {
    pub ceiling: Decimal,
    pub used: Decimal,
    pub remaining: Decimal,
    pub percent_used: Decimal,
}

impl LimitStatus {
    pub fn over_limit(&self) -> bool {
        self.used > self.ceiling
    }
}

pub fn limit_usage(group: FopGroup, cumulative_income: Decimal) -> LimitStatus {
    let ceiling = limit_for(group);
    let used = cumulative_income.max(Decimal::ZERO);
    let remaining = (ceiling - used).max(Decimal::ZERO);
    let percent_used = if ceiling > Decimal::ZERO {
        (used / ceiling * dec!(100)).min(dec!(100))
    } else {
        Decimal::ZERO
    };
    LimitStatus {
        ceiling,
        used,
        remaining,
        percent_used,
    }
}

/// One period's liability, split into its components. For group 3 the
/// `flat_levy` is zero; for groups 1/2 the `percent_levy` is zero.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaxBreakdown {
    pub flat_levy: Decimal,
    pub percent_levy: Decimal,
    pub military_levy: Decimal,
    pub social_contribution: Decimal,
    pub total: Decimal,
}

impl TaxBreakdown {
    fn zero() -> Self {
        TaxBreakdown {
            flat_levy: Decimal::ZERO,
            percent_levy: Decimal::ZERO,
            military_levy: Decimal::ZERO,
            social_contribution: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Liability for one period.
///
/// Income at or below zero yields all-zero components, including the fixed
/// payments for groups 1/2. That matches the reference behavior of showing
/// no liability for an empty book.
///
/// For groups 1/2 the flat levy and military levy are quoted as monthly
/// figures in the breakdown; only the ESV line and the total scale to an
/// annual period, the total as `(flat + military + ESV) * 12`. Whether the
/// military levy was meant to scale that way is unconfirmed against the tax
/// code, so the observed schedule is kept as is.
pub fn liabilities(
    group: FopGroup,
    tax_rate: TaxRate,
    period_income: Decimal,
    period: Period,
) -> TaxBreakdown {
    if period_income <= Decimal::ZERO {
        return TaxBreakdown::zero();
    }
    let months = Decimal::from(period.months());
    match group {
        FopGroup::Group3 => {
            let percent_levy = period_income * tax_rate.as_decimal();
            let military_levy = period_income * MILITARY_LEVY_RATE_G3;
            let social_contribution = MONTHLY_ESV * months;
            TaxBreakdown {
                flat_levy: Decimal::ZERO,
                percent_levy,
                military_levy,
                social_contribution,
                total: percent_levy + military_levy + social_contribution,
            }
        }
        FopGroup::Group1 | FopGroup::Group2 => {
            let flat_levy = match group {
                FopGroup::Group1 => TAX_FIXED_G1,
                _ => TAX_FIXED_G2,
            };
            let social_contribution = MONTHLY_ESV * months;
            let monthly_total = flat_levy + MILITARY_LEVY_FIXED + MONTHLY_ESV;
            TaxBreakdown {
                flat_levy,
                percent_levy: Decimal::ZERO,
                military_levy: MILITARY_LEVY_FIXED,
                social_contribution,
                total: monthly_total * months,
            }
        }
    }
}

/// Foreign-currency income that could not be converted and therefore
/// contributes nothing to the UAH totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UnconvertedIncome {
    pub currency: Currency,
    pub amount: Decimal,
    pub records: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodSummary {
    pub period: Period,
    pub total_income: Decimal,
    pub tax: TaxBreakdown,
    pub net_income: Decimal,
    pub limit: LimitStatus,
    pub unconverted: Vec<UnconvertedIncome>,
}

fn in_period(date: NaiveDate, period: Period, today: NaiveDate) -> bool {
    match period {
        Period::Month => date.year() == today.year() && date.month() == today.month(),
        Period::Year => true,
    }
}

/// Aggregate a freshly loaded income list into the period's figures.
///
/// A record counts toward `total_income` through its cached `amount_uah`;
/// a UAH record without one counts its `amount` directly. Foreign-currency
/// records with no resolved rate contribute zero, and are reported under
/// `unconverted` so the gap is visible rather than silent.
pub fn summarize(
    incomes: &[Income],
    profile: &UserProfile,
    period: Period,
    today: NaiveDate,
) -> PeriodSummary {
    let mut total_income = Decimal::ZERO;
    let mut unconverted: Vec<UnconvertedIncome> = Vec::new();

    for inc in incomes.iter().filter(|i| in_period(i.date, period, today)) {
        match inc.amount_uah {
            Some(uah) => total_income += uah,
            None if inc.currency == Currency::Uah => total_income += inc.amount,
            None => {
                match unconverted.iter_mut().find(|u| u.currency == inc.currency) {
                    Some(u) => {
                        u.amount += inc.amount;
                        u.records += 1;
                    }
                    None => unconverted.push(UnconvertedIncome {
                        currency: inc.currency,
                        amount: inc.amount,
                        records: 1,
                    }),
                }
            }
        }
    }

    let tax = liabilities(profile.group, profile.tax_rate, total_income, period);
    let limit = limit_usage(profile.group, total_income);
    let net_income = (total_income - tax.total).max(Decimal::ZERO);

    PeriodSummary {
        period,
        total_income,
        tax,
        net_income,
        limit,
        unconverted,
    }
}
