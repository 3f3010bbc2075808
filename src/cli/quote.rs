//! Handler for the `quote` command.

use rust_decimal::Decimal;
use serde_json::json;
use tracing::{debug, info};

use super::output;
use crate::config::{Config, DisplayConfig};
use crate::domain::{parse_amount, FeeBranch, FeeProfile, PricingRequest, PricingResult, Resolver};
use crate::error::Result;

/// Execute `quote <marketplace> <target>`.
pub fn execute(config: &Config, marketplace: &str, target: &str) -> Result<()> {
    let registry = config.registry()?;
    let target_net = parse_amount(target)?;
    let request = PricingRequest::new(marketplace, target_net);
    debug!(marketplace, target = %target_net, "Resolving listing price");

    let result = Resolver::new(&registry).resolve(&request)?;
    let profile = registry.get_profile(marketplace)?;
    info!(
        marketplace,
        target = %target_net,
        gross_price = %result.gross_price,
        branch = ?result.branch,
        "Resolved listing price"
    );

    if output::is_json() {
        let payload = serde_json::to_value(&result)?;
        output::emit_json_line(
            "quote",
            json!({
                "marketplace": profile.name(),
                "result": payload,
                "display": display_amounts(&config.display, &result),
            }),
        );
        return Ok(());
    }

    render(&config.display, profile, &result);
    Ok(())
}

fn display_amounts(display: &DisplayConfig, result: &PricingResult) -> serde_json::Value {
    json!({
        "gross_price": display.money(result.gross_price),
        "commission_amount": display.money(result.commission_amount),
        "fixed_fee_amount": display.money(result.fixed_fee_amount),
        "shipping_amount": display.money(result.shipping_amount),
        "net": display.money(result.net),
    })
}

/// Deduction lines worth showing; zero fixed fees and shipping are omitted.
fn deduction_lines(result: &PricingResult) -> Vec<(&'static str, Decimal)> {
    let mut lines = vec![("Commission", result.commission_amount)];
    if result.fixed_fee_amount > Decimal::ZERO {
        lines.push(("Fixed fee", result.fixed_fee_amount));
    }
    if result.shipping_amount > Decimal::ZERO {
        lines.push(("Free shipping", result.shipping_amount));
    }
    lines
}

fn render(display: &DisplayConfig, profile: &FeeProfile, result: &PricingResult) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section(profile.name());
    output::field(
        "Listing price",
        output::highlight(display.money(result.gross_price)),
    );
    output::field("You receive", output::positive(display.money(result.net)));

    output::section("Deductions");
    for (label, amount) in deduction_lines(result) {
        output::field(label, output::negative(format!("- {}", display.money(amount))));
    }

    match result.branch {
        FeeBranch::ShippingSubsidy => output::warning(
            "Price is above the free-shipping threshold: you absorb the shipping cost",
        ),
        FeeBranch::Capped => output::note("Commission capped for this price"),
        FeeBranch::Uncapped | FeeBranch::FixedFee | FeeBranch::Flat => {}
    }

    if !profile.rules().is_empty() {
        output::hint(profile.rules());
    }
}
