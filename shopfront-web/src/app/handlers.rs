use crate::dom;
use shopfront_core::{BuyOutcome, PageSession};
use yew::prelude::*;

/// Callbacks wired into the page components.
#[derive(Clone)]
pub struct AppHandlers {
    pub toggle_option: Callback<(String, String)>,
    pub buy: Callback<()>,
    pub main_select: Callback<usize>,
    pub main_swipe: Callback<(f64, f64)>,
    pub open_lightbox: Callback<()>,
    pub close_lightbox: Callback<()>,
    pub lightbox_select: Callback<usize>,
    pub lightbox_step: Callback<i64>,
    pub lightbox_swipe: Callback<(f64, f64)>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(session: &UseStateHandle<PageSession>) -> Self {
        Self {
            toggle_option: build_toggle_option(session),
            buy: build_buy(session),
            main_select: build_index(session, |s, idx| {
                s.main_go_to(idx);
            }),
            main_swipe: build_swipe(session, PageSession::main_swipe),
            open_lightbox: build_flag(session, PageSession::open_lightbox),
            close_lightbox: build_flag(session, PageSession::close_lightbox),
            lightbox_select: build_index(session, |s, idx| {
                s.lightbox_go_to(idx);
            }),
            lightbox_step: build_lightbox_step(session),
            lightbox_swipe: build_swipe(session, PageSession::lightbox_swipe),
        }
    }
}

fn to_index(idx: usize) -> i64 {
    i64::try_from(idx).unwrap_or(i64::MAX)
}

/// Apply `change` to a copy of the session and store it.
fn update(handle: &UseStateHandle<PageSession>, change: impl FnOnce(&mut PageSession)) {
    let mut next = (**handle).clone();
    change(&mut next);
    handle.set(next);
}

pub fn build_toggle_option(session: &UseStateHandle<PageSession>) -> Callback<(String, String)> {
    let handle = session.clone();
    Callback::from(move |(option, value): (String, String)| {
        update(&handle, |s| {
            let change = s.select_option(&option, &value);
            log::debug!("option {option}={value}: {change:?}");
        });
    })
}

pub fn build_buy(session: &UseStateHandle<PageSession>) -> Callback<()> {
    let handle = session.clone();
    Callback::from(move |()| {
        let origin = match dom::origin() {
            Ok(origin) => origin,
            Err(err) => {
                log::error!("cannot read page origin: {}", dom::js_error_message(&err));
                return;
            }
        };
        let mut next = (*handle).clone();
        match next.buy(&origin) {
            BuyOutcome::Navigate(url) => {
                if let Err(err) = dom::navigate(&url) {
                    log::error!("checkout navigation failed: {}", dom::js_error_message(&err));
                }
            }
            BuyOutcome::ShowWarning => handle.set(next),
        }
    })
}

fn build_index(
    session: &UseStateHandle<PageSession>,
    go_to: fn(&mut PageSession, i64),
) -> Callback<usize> {
    let handle = session.clone();
    Callback::from(move |idx: usize| update(&handle, |s| go_to(s, to_index(idx))))
}

fn build_swipe(
    session: &UseStateHandle<PageSession>,
    swipe: fn(&mut PageSession, f64, f64) -> bool,
) -> Callback<(f64, f64)> {
    let handle = session.clone();
    Callback::from(move |(start, end): (f64, f64)| {
        let mut next = (*handle).clone();
        if swipe(&mut next, start, end) {
            handle.set(next);
        }
    })
}

fn build_flag(session: &UseStateHandle<PageSession>, apply: fn(&mut PageSession)) -> Callback<()> {
    let handle = session.clone();
    Callback::from(move |()| update(&handle, apply))
}

fn build_lightbox_step(session: &UseStateHandle<PageSession>) -> Callback<i64> {
    let handle = session.clone();
    Callback::from(move |delta: i64| {
        update(&handle, |s| {
            s.lightbox_step(delta);
        });
    })
}
