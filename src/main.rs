use anyhow::Context;
use gasim::config::{AppConfig, ReportFormat};
use gasim::engines::evaluation::PalindromeFitness;
use gasim::engines::generation::{EvolutionEngine, GenerationReporter, JsonReporter, TextReporter};
use gasim::seed::resolve_seed;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::io;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let seed = resolve_seed(args.get(1).map(|s| s.as_str()));
    log::info!("Using seed {} ({:?})", seed.value, seed.source);

    let config_path = env::var_os("GASIM_CONFIG").map(PathBuf::from);
    let app_config = AppConfig::load(config_path.as_deref())
        .context("failed to load configuration")?;

    let rng = StdRng::seed_from_u64(seed.value);
    let mut engine = EvolutionEngine::new(app_config.evolution, rng, PalindromeFitness)
        .context("invalid simulation parameters")?;

    let stdout = io::stdout();
    let mut reporter: Box<dyn GenerationReporter> = match app_config.report.format {
        ReportFormat::Text => Box::new(TextReporter::new(stdout.lock())),
        ReportFormat::Json => Box::new(JsonReporter::new(stdout.lock())),
    };

    engine.run(reporter.as_mut()).context("simulation failed")?;
    Ok(())
}
