use super::{CheckLog, ScenarioCtx};
use anyhow::Result;
use shopfront_core::{PRICE_UNAVAILABLE, Pricing};

pub fn run(ctx: &ScenarioCtx<'_>, log: &mut CheckLog) -> Result<()> {
    let session = ctx.session()?;
    if ctx.verbose {
        println!(
            "   {} ({}): {}",
            ctx.input.label,
            if session.item().is_bundle() { "bundle" } else { "product" },
            session.display_name()
        );
    }
    log.check(!session.display_name().is_empty(), || "display name is empty".to_string());
    log.check(!session.document_title().is_empty(), || "document title is empty".to_string());
    log.check(!session.images().is_empty(), || "gallery has no images".to_string());
    log.check(!session.description_html().is_empty(), || {
        "description markup is empty".to_string()
    });
    log.check(!session.price_label().is_empty(), || "price label is empty".to_string());
    if let Pricing::Bundle { label, .. } = session.pricing()
        && label == PRICE_UNAVAILABLE
    {
        log::warn!("{}: bundle price not found in state blob", ctx.input.label);
    }
    log.check(!session.warning_visible(), || "warning visible on load".to_string());
    log.check(!session.lightbox_open(), || "lightbox open on load".to_string());
    Ok(())
}
