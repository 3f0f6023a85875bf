pub mod bench;
pub mod fib;

use bench::{run_benchmark, BenchmarkConfig, Results};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let config = BenchmarkConfig::default();
    tracing::info!("recursive fibonacci, n = {}", config.n);
    let mut results = Results::new();
    run_benchmark(&config, &mut results, std::io::stdout().lock())?;
    for (label, elapsed) in results.iter() {
        tracing::debug!("{label}: {elapsed:.3}s")
    }
    Ok(())
}
