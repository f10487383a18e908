// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fopbook::models::{FopGroup, TaxRate};
use fopbook::tax::{liabilities, Period};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn zero_or_negative_income_yields_zero_liability_for_all_groups() {
    for group in [FopGroup::Group1, FopGroup::Group2, FopGroup::Group3] {
        for income in [dec!(0), dec!(-1), dec!(-100000)] {
            for period in [Period::Month, Period::Year] {
                let t = liabilities(group, TaxRate::Percent5, income, period);
                assert_eq!(t.flat_levy, Decimal::ZERO);
                assert_eq!(t.percent_levy, Decimal::ZERO);
                assert_eq!(t.military_levy, Decimal::ZERO);
                assert_eq!(t.social_contribution, Decimal::ZERO);
                assert_eq!(t.total, Decimal::ZERO);
            }
        }
    }
}

#[test]
fn group3_five_percent_on_100k_month() {
    let t = liabilities(FopGroup::Group3, TaxRate::Percent5, dec!(100000), Period::Month);
    assert_eq!(t.percent_levy, dec!(5000));
    assert_eq!(t.military_levy, dec!(1000));
    assert_eq!(t.social_contribution, dec!(1902.34));
    assert_eq!(t.flat_levy, Decimal::ZERO);
    assert_eq!(t.total, dec!(7902.34));
}

#[test]
fn group3_three_percent_rate() {
    let t = liabilities(FopGroup::Group3, TaxRate::Percent3, dec!(100000), Period::Month);
    assert_eq!(t.percent_levy, dec!(3000));
    assert_eq!(t.military_levy, dec!(1000));
    assert_eq!(t.total, dec!(3000) + dec!(1000) + dec!(1902.34));
}

#[test]
fn group3_annual_period_scales_esv_only() {
    let t = liabilities(FopGroup::Group3, TaxRate::Percent5, dec!(100000), Period::Year);
    assert_eq!(t.percent_levy, dec!(5000));
    assert_eq!(t.military_levy, dec!(1000));
    assert_eq!(t.social_contribution, dec!(22828.08));
    assert_eq!(t.total, dec!(5000) + dec!(1000) + dec!(22828.08));
}

#[test]
fn group1_monthly_fixed_payment() {
    let t = liabilities(FopGroup::Group1, TaxRate::Percent5, dec!(500), Period::Month);
    assert_eq!(t.flat_levy, dec!(332.80));
    assert_eq!(t.military_levy, dec!(864.70));
    assert_eq!(t.social_contribution, dec!(1902.34));
    assert_eq!(t.percent_levy, Decimal::ZERO);
    assert_eq!(t.total, dec!(3099.84));
}

#[test]
fn group1_annual_total_is_twelve_monthly_payments() {
    // The flat and military levy lines stay monthly figures; the total
    // scales the whole monthly payment by 12.
    let t = liabilities(FopGroup::Group1, TaxRate::Percent5, dec!(500), Period::Year);
    assert_eq!(t.flat_levy, dec!(332.80));
    assert_eq!(t.military_levy, dec!(864.70));
    assert_eq!(t.social_contribution, dec!(22828.08));
    assert_eq!(t.total, dec!(37198.08));
}

#[test]
fn group2_uses_its_own_flat_levy() {
    let t = liabilities(FopGroup::Group2, TaxRate::Percent5, dec!(500), Period::Month);
    assert_eq!(t.flat_levy, dec!(1729.00));
    assert_eq!(t.military_levy, dec!(864.70));
    assert_eq!(t.total, dec!(1729.00) + dec!(864.70) + dec!(1902.34));
    assert!(t.flat_levy > liabilities(FopGroup::Group1, TaxRate::Percent5, dec!(500), Period::Month).flat_levy);
}

#[test]
fn group12_tax_rate_is_ignored() {
    let five = liabilities(FopGroup::Group2, TaxRate::Percent5, dec!(9999), Period::Month);
    let three = liabilities(FopGroup::Group2, TaxRate::Percent3, dec!(9999), Period::Month);
    assert_eq!(five, three);
}
