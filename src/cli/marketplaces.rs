//! Marketplace listing.

use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::config::{Config, DisplayConfig};
use crate::domain::{FeePolicy, FeeProfile};
use crate::error::Result;

#[derive(Tabled)]
struct MarketplaceRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Policy")]
    policy: &'static str,
    #[tabled(rename = "Commission")]
    commission: String,
    #[tabled(rename = "Fixed Fee")]
    fixed_fee: String,
    #[tabled(rename = "Special Rule")]
    rule: String,
}

/// One-line summary of the rule that makes a policy shape special.
fn special_rule(display: &DisplayConfig, policy: &FeePolicy) -> String {
    match policy {
        FeePolicy::CappedCommission { commission_cap, .. } => {
            format!("commission capped at {}", display.money(*commission_cap))
        }
        FeePolicy::ThresholdShipping { shipping, .. } => format!(
            "free shipping from {} (costs {})",
            display.money(shipping.free_shipping_threshold),
            display.money(shipping.estimated_shipping_cost)
        ),
        FeePolicy::FlatCommission { .. } => "-".to_string(),
    }
}

fn row(display: &DisplayConfig, profile: &FeeProfile) -> Result<MarketplaceRow> {
    let policy = profile.policy()?;
    Ok(MarketplaceRow {
        id: profile.id().to_string(),
        name: profile.name().to_string(),
        policy: policy.name(),
        commission: display.percent(profile.commission_rate()),
        fixed_fee: display.money(profile.fixed_fee()),
        rule: special_rule(display, &policy),
    })
}

/// List registered marketplaces.
pub fn execute(config: &Config) -> Result<()> {
    let registry = config.registry()?;

    if output::is_json() {
        let mut marketplaces = Vec::with_capacity(registry.len());
        for profile in registry.iter() {
            let policy = profile.policy()?;
            let mut entry = serde_json::to_value(profile)?;
            entry["policy"] = json!(policy.name());
            marketplaces.push(entry);
        }
        output::emit_json_line("marketplaces", json!({ "marketplaces": marketplaces }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Marketplaces");

    let rows = registry
        .iter()
        .map(|profile| row(&config.display, profile))
        .collect::<Result<Vec<_>>>()?;
    output::lines(&Table::new(rows).to_string());

    output::hint(&format!(
        "run {} to price a listing",
        output::highlight("grossup quote <id> <target>")
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProfileRegistry;

    #[test]
    fn rows_describe_each_builtin_policy() {
        let display = DisplayConfig::default();
        let registry = ProfileRegistry::builtin();

        let shopee = row(&display, registry.get_profile("shopee").unwrap()).unwrap();
        assert_eq!(shopee.policy, "capped_commission");
        assert_eq!(shopee.commission, "20%");
        assert_eq!(shopee.fixed_fee, "R$ 4,00");
        assert_eq!(shopee.rule, "commission capped at R$ 100,00");

        let meli = row(&display, registry.get_profile("mercadolivre").unwrap()).unwrap();
        assert_eq!(meli.commission, "17,5%");
        assert_eq!(meli.rule, "free shipping from R$ 79,00 (costs R$ 25,00)");

        let shein = row(&display, registry.get_profile("shein").unwrap()).unwrap();
        assert_eq!(shein.fixed_fee, "R$ 0,00");
        assert_eq!(shein.rule, "-");
    }
}
