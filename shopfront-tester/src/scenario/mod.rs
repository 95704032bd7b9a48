use anyhow::{Context, Result};
use shopfront_core::{BundlePriceSource, NoBundlePrices, PageSession, StateArrayScan};

pub mod checkout;
pub mod gallery;
pub mod smoke;
pub mod variants;

/// One payload under test, with the optional state script that prices bundles.
#[derive(Debug, Clone)]
pub struct PageInput {
    pub label: String,
    pub payload: String,
    pub state: Option<String>,
}

impl PageInput {
    /// Product and bundle fixtures shipped with the workspace.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self {
                label: "fixture:product".to_string(),
                payload: include_str!("../../../fixtures/product.json").to_string(),
                state: None,
            },
            Self {
                label: "fixture:bundle".to_string(),
                payload: include_str!("../../../fixtures/bundle.json").to_string(),
                state: Some(include_str!("../../../fixtures/bundle_state.json").to_string()),
            },
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub input: &'a PageInput,
    pub origin: &'a str,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    /// Fresh session for the payload; each check starts from page load.
    pub fn session(&self) -> Result<PageSession> {
        let prices: Box<dyn BundlePriceSource> = match self.input.state.as_deref() {
            Some(raw) => Box::new(StateArrayScan::from_json(raw)),
            None => Box::new(NoBundlePrices),
        };
        PageSession::from_payload(Some(&self.input.payload), prices.as_ref())
            .with_context(|| format!("loading {}", self.input.label))
    }
}

/// Passed/failed checks collected while a scenario runs.
#[derive(Debug, Default)]
pub struct CheckLog {
    pub checks: usize,
    pub failures: Vec<String>,
}

impl CheckLog {
    pub fn check(&mut self, ok: bool, describe: impl FnOnce() -> String) {
        self.checks += 1;
        if !ok {
            self.failures.push(describe());
        }
    }

    pub fn expect_eq<T: PartialEq + std::fmt::Debug>(&mut self, what: &str, got: T, want: T) {
        self.check(got == want, || format!("{what}: got {got:?}, want {want:?}"));
    }
}

pub struct TestScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn(&ScenarioCtx<'_>, &mut CheckLog) -> Result<()>,
}

const CATALOG: &[TestScenario] = &[
    TestScenario {
        name: "smoke",
        description: "Payload loads and the page has a name, images and a price",
        run: smoke::run,
    },
    TestScenario {
        name: "variants",
        description: "Every variant is reachable and unmatched combinations warn",
        run: variants::run,
    },
    TestScenario {
        name: "gallery",
        description: "Gallery and lightbox cursors wrap and respect the swipe threshold",
        run: gallery::run,
    },
    TestScenario {
        name: "checkout",
        description: "Buy produces a well-formed checkout link once a target exists",
        run: checkout::run,
    },
];

pub fn get_scenario(name: &str) -> Option<&'static TestScenario> {
    let name = name.to_lowercase();
    CATALOG.iter().find(|s| s.name == name)
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.name, s.description))
}

pub fn all_names() -> Vec<String> {
    CATALOG.iter().map(|s| s.name.to_string()).collect()
}
