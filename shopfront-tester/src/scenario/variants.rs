use super::{CheckLog, ScenarioCtx};
use anyhow::Result;
use shopfront_core::{BuyOutcome, OptionAxis, PageItem, Pricing, Resolution, format_price};

/// Every combination of one value per axis, in axis order.
fn combinations(axes: &[OptionAxis]) -> Vec<Vec<(&str, &str)>> {
    axes.iter().fold(vec![Vec::new()], |acc, axis| {
        acc.iter()
            .flat_map(|prefix| {
                axis.values.iter().map(move |value| {
                    let mut combo = prefix.clone();
                    combo.push((axis.name.as_str(), value.as_str()));
                    combo
                })
            })
            .collect()
    })
}

pub fn run(ctx: &ScenarioCtx<'_>, log: &mut CheckLog) -> Result<()> {
    let base = ctx.session()?;
    let PageItem::Product(product) = base.item() else {
        log.check(base.is_ready(), || "bundle page is not ready to buy".to_string());
        return Ok(());
    };
    if let Pricing::Fixed(variant) = base.pricing() {
        log.expect_eq("fixed variant price", base.price_label(), format_price(&variant.price));
        log.check(base.is_ready(), || "single-variant product is not ready".to_string());
        return Ok(());
    }
    if product.required_selections() == 0 {
        let mut session = base.clone();
        log.check(!session.is_ready(), || "unnamed options picked a variant".to_string());
        log.expect_eq("buy without options", session.buy(ctx.origin), BuyOutcome::ShowWarning);
        return Ok(());
    }

    for (slot, name) in product.named_slots() {
        log.check(base.option_axes().iter().any(|axis| axis.slot == slot), || {
            format!("{} '{name}' offers no values", slot.name_key())
        });
    }

    for variant in &product.variants {
        let mut session = base.clone();
        for (slot, name) in product.named_slots() {
            let value = variant.value(slot);
            if value.is_empty() {
                log.check(false, || {
                    format!("variant {} has no {}", variant.id, slot.value_key())
                });
                continue;
            }
            session.select_option(name, value);
        }
        match session.resolution() {
            Resolution::Matched(found) => {
                log.check(found.id == variant.id || found.price == variant.price, || {
                    format!("variant {} resolved to {} with another price", variant.id, found.id)
                });
            }
            other => log.check(false, || format!("variant {} unreachable: {other:?}", variant.id)),
        }

        let selected: Vec<(String, String)> = session
            .selection()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (option, value) in selected {
            let mut partial = session.clone();
            partial.select_option(&option, &value);
            log.expect_eq(
                &format!("deselect {option} after {}", variant.id),
                partial.resolution(),
                Resolution::Incomplete,
            );
            log.check(!partial.is_ready(), || format!("ready after deselecting {option}"));
        }
    }

    let axes = base.option_axes();
    for combo in combinations(axes) {
        let mut session = base.clone();
        for (option, value) in &combo {
            session.select_option(option, value);
        }
        match session.resolution() {
            Resolution::Matched(found) => {
                let agrees = axes
                    .iter()
                    .zip(&combo)
                    .all(|(axis, (_, value))| found.value(axis.slot) == *value);
                log.check(agrees, || format!("{combo:?} matched mismatching variant {}", found.id));
                log.check(!session.warning_visible(), || format!("{combo:?} matched but warns"));
            }
            Resolution::NoMatch => {
                log.check(session.warning_visible(), || format!("{combo:?} has no warning"));
                log.check(!session.is_ready(), || format!("{combo:?} ready without a match"));
            }
            Resolution::Incomplete => {
                log.check(false, || format!("{combo:?} still incomplete"));
            }
        }
        if ctx.verbose {
            println!("   {combo:?} -> {}", session.price_label());
        }
    }
    Ok(())
}
