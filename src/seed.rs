use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Argument,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSeed {
    pub value: u64,
    pub source: SeedSource,
}

/// Parse the seed argument, falling back to the wall clock in milliseconds.
///
/// Negative seeds are accepted and reinterpreted bit for bit.
pub fn resolve_seed(arg: Option<&str>) -> SimulationSeed {
    match arg.map(|s| s.trim().parse::<i64>()) {
        Some(Ok(seed)) => SimulationSeed {
            value: seed as u64,
            source: SeedSource::Argument,
        },
        Some(Err(e)) => {
            warn!("Seed {:?} is not an integer ({}), using current time", arg.unwrap_or_default(), e);
            clock_seed()
        }
        None => {
            warn!("Seed wasn't passed so using current time");
            clock_seed()
        }
    }
}

fn clock_seed() -> SimulationSeed {
    SimulationSeed {
        value: chrono::Utc::now().timestamp_millis() as u64,
        source: SeedSource::Clock,
    }
}
