use std::{
    collections::BTreeMap,
    fmt::Display,
    hint::black_box,
    io::Write,
    time::{Duration, Instant},
};

use derive_more::Deref;

use crate::fib::rfib;

pub const DEFAULT_N: i64 = 40;

#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Sequence index passed to `rfib`.
    pub n: i64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self { n: DEFAULT_N }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "rfib({n})")]
pub struct Label {
    pub n: i64,
}

#[derive(Debug, Clone)]
pub struct Measurement {
    pub label: Label,
    pub value: u64,
    pub elapsed: Duration,
}

impl Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {}, time: {:.3} seconds",
            self.label,
            self.value,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Elapsed seconds of each run keyed by label, rounded to milliseconds.
#[derive(Debug, Default, Deref)]
pub struct Results(BTreeMap<String, f64>);

impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: Label, elapsed: Duration) -> Option<f64> {
        self.0.insert(label.to_string(), round_millis(elapsed.as_secs_f64()))
    }
}

pub fn round_millis(secs: f64) -> f64 {
    (secs * 1000.).round() / 1000.
}

pub fn run_benchmark(
    config: &BenchmarkConfig,
    results: &mut Results,
    mut out: impl Write,
) -> anyhow::Result<Measurement> {
    for i in 0..=5 {
        tracing::trace!("rfib({i}) = {}", rfib(i))
    }
    let label = Label { n: config.n };
    tracing::debug!("start {label}");

    let start = Instant::now();
    let value = rfib(black_box(config.n));
    let elapsed = start.elapsed();

    let measurement = Measurement {
        label,
        value,
        elapsed,
    };
    writeln!(out, "{measurement}")?;
    if let Some(previous) = results.insert(label, elapsed) {
        tracing::debug!("replaced previous result {previous:.3} for {label}")
    }
    Ok(measurement)
}
