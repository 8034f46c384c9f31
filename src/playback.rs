//! Frame-by-frame playback of a finished run.
//!
//! The data side of an animation: each frame pulls one sample per body from
//! the immutable history, by increasing step index, into path buffers the
//! playback owns. Drawing those paths is left to whatever consumes them.

use std::collections::BTreeMap;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::history::History;
use crate::simulation::SimulationRun;

/// Plugin advancing [`Playback`] once per `Update` while a
/// [`SimulationRun`] resource is present.
pub struct PlaybackPlugin;

impl Plugin for PlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Playback>()
            .add_systems(Update, advance_playback);
    }
}

/// Cumulative trajectories revealed so far.
#[derive(Resource, Clone, Debug)]
pub struct Playback {
    frame: usize,
    paths: BTreeMap<BodyId, Vec<DVec3>>,
    /// History steps consumed per update. Default: 1.
    pub frames_per_update: usize,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            frame: 0,
            paths: BTreeMap::new(),
            frames_per_update: 1,
        }
    }
}

impl Playback {
    /// Index of the next history step to reveal.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Path revealed so far for a body.
    pub fn path(&self, id: BodyId) -> Option<&[DVec3]> {
        self.paths.get(&id).map(Vec::as_slice)
    }

    /// Current marker position of a body (end of its path).
    pub fn marker(&self, id: BodyId) -> Option<DVec3> {
        self.paths.get(&id)?.last().copied()
    }

    /// Whether every step of `history` has been revealed.
    pub fn is_finished(&self, history: &History) -> bool {
        self.frame >= history.step_count()
    }

    /// Reveal the next frame. Returns `false` once the history is exhausted.
    pub fn advance(&mut self, history: &History) -> bool {
        let Some(samples) = history.frame(self.frame) else {
            return false;
        };
        for (id, pos) in samples {
            self.paths.entry(id).or_default().push(pos);
        }
        self.frame += 1;
        true
    }

    /// Forget revealed paths and restart from frame 0.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.paths.clear();
    }
}

/// Reveal `frames_per_update` frames of the current run.
fn advance_playback(run: Option<Res<SimulationRun>>, mut playback: ResMut<Playback>) {
    let Some(run) = run else {
        return;
    };
    let history = run.history();
    if playback.is_finished(history) {
        return;
    }

    for _ in 0..playback.frames_per_update {
        if !playback.advance(history) {
            break;
        }
    }

    if playback.is_finished(history) {
        info!("Playback finished after {} frames", playback.frame);
    }
}
