use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use grossup::domain::PricingResult;

pub fn assert_decimal_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Gross minus every deduction gives back the requested net, to the cent.
pub fn assert_reconciles(result: &PricingResult) {
    assert!(
        result.reconciliation_error() <= dec!(0.01),
        "{} does not reconcile: gross {} - deductions {} != net {}",
        result.marketplace_id,
        result.gross_price,
        result.total_deductions(),
        result.net
    );
}
