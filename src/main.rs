use orbitsim::{RenderFrame, Renderer, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Override the scenario's tick count
    #[arg(short, long)]
    ticks: Option<u64>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let path = if bundled.exists() {
        bundled
    } else {
        PathBuf::from(file_name)
    };

    let file =
        File::open(&path).with_context(|| format!("opening scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", path.display()))?;

    Ok(scenario_cfg)
}

/// Headless renderer: logs each body instead of drawing it
struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, frames: &[RenderFrame]) {
        for frame in frames {
            debug!(
                label = %frame.label,
                x = frame.position.x,
                y = frame.position.y,
                trail = frame.trail.len(),
                "body"
            );
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let ticks = args.ticks.unwrap_or(scenario_cfg.ticks);

    let mut manager = scenario_cfg.build()?;
    let mut renderer = LogRenderer;

    info!(bodies = manager.len(), ticks, "starting simulation");
    for _ in 0..ticks {
        let frames = manager.tick()?;
        renderer.render(&frames);
    }
    info!("simulation complete");

    Ok(())
}
