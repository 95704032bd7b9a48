use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::{CheckLog, PageInput, ScenarioCtx, TestScenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub input_label: String,
    pub passed: bool,
    pub checks_run: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

pub struct PageTester<'a> {
    origin: &'a str,
    verbose: bool,
}

impl<'a> PageTester<'a> {
    pub const fn new(origin: &'a str, verbose: bool) -> Self {
        Self { origin, verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario, inputs: &[PageInput]) -> Vec<ScenarioResult> {
        inputs
            .iter()
            .map(|input| self.run_single(scenario, input))
            .collect()
    }

    fn run_single(&self, scenario: &TestScenario, input: &PageInput) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} on {}",
                scenario.name.bright_white(),
                input.label
            );
        }
        let ctx = ScenarioCtx {
            input,
            origin: self.origin,
            verbose: self.verbose,
        };
        let start_time = Instant::now();
        let mut log = CheckLog::default();
        if let Err(err) = (scenario.run)(&ctx, &mut log) {
            log.failures.push(format!("{err:#}"));
        }
        let duration = start_time.elapsed();

        if self.verbose {
            for failure in &log.failures {
                println!("  ❌ {}", failure.red());
            }
        }
        log::debug!(
            "{} on {}: {} checks, {} failures",
            scenario.name,
            input.label,
            log.checks,
            log.failures.len()
        );

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            input_label: input.label.clone(),
            passed: log.failures.is_empty(),
            checks_run: log.checks,
            failures: log.failures,
            duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::get_scenario;

    #[test]
    fn broken_payload_is_reported_as_failure() {
        let input = PageInput {
            label: "broken".to_string(),
            payload: "{oops".to_string(),
            state: None,
        };
        let smoke = get_scenario("smoke").expect("smoke registered");
        let results = PageTester::new("https://toko.example", false).run_scenario(smoke, &[input]);
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert!(results[0].failures[0].contains("loading broken"));
    }

    #[test]
    fn results_serialize_duration_as_micros() {
        let result = ScenarioResult {
            scenario_name: "smoke".to_string(),
            input_label: "fixture:product".to_string(),
            passed: true,
            checks_run: 3,
            failures: Vec::new(),
            duration: Duration::from_micros(1500),
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["duration"], 1500);
        let back: ScenarioResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.duration, Duration::from_micros(1500));
    }
}
