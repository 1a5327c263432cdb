use color_eyre::eyre::{WrapErr, bail};
use env_logger::Env;
use kickabout_core::{FootballEngine, MatchSettings};
use log::info;
use std::env;
use std::fs;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = load_settings()?;

    info!(
        "match started: {}x{} field, {} ms",
        settings.field_width, settings.field_height, settings.match_time_ms
    );

    let result = FootballEngine::play(&settings);

    info!(
        "final score: {} - {}, {} kicks",
        result.score.team_a,
        result.score.team_b,
        result.position_data.kicks().len()
    );

    if let Ok(path) = env::var("RESULT_PATH") {
        let json = serde_json::to_string(&result).wrap_err("failed to serialize match result")?;
        fs::write(&path, json).wrap_err_with(|| format!("failed to write match result to {path}"))?;

        info!("result written to {}", path);
    }

    Ok(())
}

fn load_settings() -> color_eyre::Result<MatchSettings> {
    let settings = match env::var("SETTINGS") {
        Ok(path) => {
            let raw = fs::read_to_string(&path).wrap_err_with(|| format!("failed to read settings from {path}"))?;
            serde_json::from_str(&raw).wrap_err_with(|| format!("invalid settings in {path}"))?
        }
        Err(_) => MatchSettings::default(),
    };

    if settings.time_step_ms <= 0.0 {
        bail!("time_step_ms must be positive, got {}", settings.time_step_ms);
    }

    Ok(settings)
}
