use super::{CheckLog, ScenarioCtx};
use anyhow::Result;
use shopfront_core::{BuyOutcome, CheckoutTarget, PageItem, Pricing};

pub fn run(ctx: &ScenarioCtx<'_>, log: &mut CheckLog) -> Result<()> {
    let mut session = ctx.session()?;
    let base = format!("{}/c/checkout?", ctx.origin.trim_end_matches('/'));

    if let Pricing::Selectable = session.pricing() {
        let PageItem::Product(product) = session.item().clone() else {
            return Ok(());
        };
        log.expect_eq("buy before selection", session.buy(ctx.origin), BuyOutcome::ShowWarning);
        log.check(session.warning_visible(), || "warning hidden after early buy".to_string());
        if product.required_selections() == 0 {
            return Ok(());
        }
        let Some(variant) = product.variants.first() else {
            return Ok(());
        };
        for (slot, name) in product.named_slots() {
            let value = variant.value(slot);
            if !value.is_empty() {
                session.select_option(name, value);
            }
        }
    }

    let Some(target) = session.checkout_target() else {
        log.check(false, || "no checkout target after selecting a variant".to_string());
        return Ok(());
    };
    let key = match target {
        CheckoutTarget::Variant(_) => "variant_ids",
        CheckoutTarget::Bundle(_) => "bpo_ids",
    };
    let want = format!("{base}{key}={}", target.id());
    log.expect_eq("checkout link", session.buy(ctx.origin), BuyOutcome::Navigate(want.clone()));
    log.expect_eq(
        "checkout link with trailing slash origin",
        session.buy(&format!("{}/", ctx.origin)),
        BuyOutcome::Navigate(want),
    );
    Ok(())
}
