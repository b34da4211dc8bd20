use std::io;

use anyhow::{Context, Result};

use maze_explorer::config::Settings;
use maze_explorer::driver::{Driver, Outcome};
use maze_explorer::map::load_map;
use maze_explorer::render::TerminalRenderer;
use maze_explorer::Agent;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let settings = Settings::default();
    let env = load_map(&settings.map_path, &settings.legend, &mut rand::thread_rng())
        .with_context(|| format!("loading {}", settings.map_path.display()))?;
    tracing::info!(
        "Loaded {}x{} maze, start {:?}, finish {:?}",
        env.width(),
        env.height(),
        env.start_pos(),
        env.finish_pos()
    );

    let mut agent = Agent::new(&env);
    let renderer = TerminalRenderer::new(io::stdout(), true);
    let mut driver = Driver::new(renderer, settings.frame_time());

    match driver.run(&mut agent)? {
        Outcome::Reached { steps } => tracing::info!("Finished in {} steps", steps),
        Outcome::Trapped { steps } => tracing::info!("Gave up after {} steps", steps),
    }

    Ok(())
}
