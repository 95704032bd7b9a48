use super::{CheckLog, ScenarioCtx};
use anyhow::Result;
use shopfront_core::{SWIPE_THRESHOLD_PX, numbers::usize_to_i64};

pub fn run(ctx: &ScenarioCtx<'_>, log: &mut CheckLog) -> Result<()> {
    let mut session = ctx.session()?;
    let len = session.images().len();
    let span = usize_to_i64(len);

    for delta in (-2 * span - 1)..=(2 * span + 1) {
        let idx = session.main_step(delta);
        log.check(idx < len, || format!("main step {delta} left index {idx} of {len}"));
    }
    session.main_go_to(-1);
    log.expect_eq("main go_to(-1)", session.main_gallery().index(), len - 1);
    session.main_go_to(span);
    log.expect_eq("main go_to(len)", session.main_gallery().index(), 0);

    let moved = session.main_swipe(500.0, 500.0 - SWIPE_THRESHOLD_PX);
    log.check(!moved, || "swipe at the threshold moved the gallery".to_string());
    let moved = session.main_swipe(500.0, 500.0 - SWIPE_THRESHOLD_PX - 1.0);
    log.expect_eq("swipe past threshold", moved, len > 1);

    let main_index = session.main_gallery().index();
    session.open_lightbox();
    log.check(session.lightbox_open(), || "lightbox did not open".to_string());
    log.expect_eq("lightbox start index", session.lightbox_gallery().index(), main_index);
    session.lightbox_step(1);
    log.expect_eq("main index after lightbox step", session.main_gallery().index(), main_index);
    session.close_lightbox();
    log.check(!session.lightbox_open(), || "lightbox did not close".to_string());
    Ok(())
}
