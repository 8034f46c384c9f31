//! Orrery - Sun-centred N-body simulator
//!
//! Runs one of the preset systems, logs a summary, then replays the
//! recorded history through a headless Bevy app.

use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::{Parser, ValueEnum};

use orrery::diagnostics::{relative_drift, total_energy, total_momentum};
use orrery::ellipse::solar_system_curves;
use orrery::playback::{Playback, PlaybackPlugin};
use orrery::state::SimulationState;
use orrery::types::METERS_TO_AU;
use orrery::{SimulationConfig, SimulationError, SimulationRun};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scenario {
    /// Sun, Earth and Mars
    TwoPlanet,
    /// Sun plus Mercury through Pluto
    FullSystem,
    /// Orbit ellipses from published elements
    Ellipses,
}

#[derive(Parser, Debug)]
#[command(about = "Sun-centred Euler N-body simulator")]
struct Args {
    #[arg(short, long, value_enum, default_value_t = Scenario::TwoPlanet)]
    scenario: Scenario,

    /// Frames to replay (default: the whole run)
    #[arg(short, long)]
    frames: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    let result = match args.scenario {
        Scenario::TwoPlanet => simulate(&mut app, SimulationConfig::two_planet(), args.frames),
        Scenario::FullSystem => simulate(&mut app, SimulationConfig::full_system(), args.frames),
        Scenario::Ellipses => report_ellipses(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn simulate(
    app: &mut App,
    config: SimulationConfig,
    frames: Option<usize>,
) -> Result<(), SimulationError> {
    let initial = SimulationState::from_config(&config)?;
    let run = orrery::run(config)?;

    report_run(&initial, &run);

    let limit = frames.unwrap_or(run.step_count()).min(run.step_count());
    app.insert_resource(run).add_plugins(PlaybackPlugin);

    while app.world().resource::<Playback>().frame() < limit {
        app.update();
    }

    let playback = app.world().resource::<Playback>();
    for (id, _) in initial.bodies() {
        if let Some(marker) = playback.marker(id) {
            let au = marker * METERS_TO_AU;
            info!("{id:>8} marker at ({:+.3}, {:+.3}) AU", au.x, au.y);
        }
    }

    Ok(())
}

fn report_run(initial: &SimulationState, run: &SimulationRun) {
    let last = &run.final_state;

    for (id, body) in last.bodies() {
        let au = body.pos_au();
        info!(
            "{id:>8}: ({:+.3}, {:+.3}, {:+.3}) AU, {:.2} km/s",
            au.x,
            au.y,
            au.z,
            body.vel_km_per_s().length()
        );
    }

    if let (Some(e0), Some(e1)) = (total_energy(initial), total_energy(last)) {
        info!("Energy drift: {:.3e}", relative_drift(e0, e1));
    }

    let p0 = total_momentum(initial);
    let p1 = total_momentum(last);
    info!(
        "Momentum change: {:.3e} kg·m/s (of {:.3e})",
        (p1 - p0).length(),
        p0.length()
    );
}

fn report_ellipses() -> Result<(), SimulationError> {
    for curve in solar_system_curves()? {
        let max_x = curve.points.iter().map(|p| p.x.abs()).fold(0.0, f64::max);
        let max_y = curve.points.iter().map(|p| p.y.abs()).fold(0.0, f64::max);
        info!(
            "{:>8}: a = {:.4e} m, b = {:.4e} m, {} samples, extent {:.3} x {:.3} AU",
            curve.body,
            curve.semi_major_axis,
            curve.semi_minor_axis,
            curve.len(),
            max_x * METERS_TO_AU,
            max_y * METERS_TO_AU,
        );
    }
    Ok(())
}
