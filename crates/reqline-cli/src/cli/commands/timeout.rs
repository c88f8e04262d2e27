//! `reqline timeout` – resolve phase timeouts from config and flags.

use anyhow::{Context, Result};
use reqline_core::config::ReqlineConfig;
use reqline_core::timeout::{ManualClock, TimeoutInput};
use std::time::Duration;

/// Command-line overrides for the `[timeouts]` config section.
#[derive(Debug, Default)]
pub struct TimeoutFlags {
    pub connect: Option<TimeoutInput>,
    pub read: Option<TimeoutInput>,
    pub total: Option<TimeoutInput>,
    pub elapsed: Option<f64>,
}

pub fn run_timeout(cfg: &ReqlineConfig, flags: TimeoutFlags) -> Result<()> {
    for line in resolve(cfg, flags)? {
        println!("{line}");
    }
    Ok(())
}

fn resolve(cfg: &ReqlineConfig, flags: TimeoutFlags) -> Result<Vec<String>> {
    let mut section = cfg.timeouts.clone();
    if flags.connect.is_some() {
        section.connect = flags.connect;
    }
    if flags.read.is_some() {
        section.read = flags.read;
    }
    if flags.total.is_some() {
        section.total = flags.total;
    }

    let clock = ManualClock::default();
    let mut timeout = section.build()?.clocked_by(&clock);
    if let Some(secs) = flags.elapsed {
        let elapsed = Duration::try_from_secs_f64(secs)
            .with_context(|| format!("invalid --elapsed {secs}"))?;
        timeout.start()?;
        clock.advance(elapsed);
        timeout.stop()?;
    }
    tracing::debug!(?timeout, "resolved timeouts");

    let elapsed = timeout.get_elapsed().unwrap_or(Duration::ZERO);
    Ok(vec![
        format!("connect_timeout: {}", timeout.connect_timeout()),
        format!("request_timeout: {}", timeout.request_timeout()),
        format!("total:           {}", timeout.total()),
        format!("elapsed:         {}", elapsed.as_secs_f64()),
    ])
}
