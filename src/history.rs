//! Position history recorded by the integrator.
//!
//! One sample per body per step, in chronological order. The integrator is
//! the only writer; consumers get `&History` and read by step index.

use std::collections::BTreeMap;

use bevy::math::DVec3;

use crate::bodies::BodyId;

/// Cartesian axis selector for columnar access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Per-body trajectories of a run.
///
/// Every track has exactly `step_count()` samples; sample `i` is the
/// position after step `i + 1` completed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    tracks: BTreeMap<BodyId, Vec<DVec3>>,
    steps: usize,
}

impl History {
    /// Empty history for the given bodies.
    pub fn new(bodies: impl IntoIterator<Item = BodyId>) -> Self {
        Self::with_capacity(bodies, 0)
    }

    /// Empty history with room for `steps` samples per body.
    pub fn with_capacity(bodies: impl IntoIterator<Item = BodyId>, steps: usize) -> Self {
        Self {
            tracks: bodies
                .into_iter()
                .map(|id| (id, Vec::with_capacity(steps)))
                .collect(),
            steps: 0,
        }
    }

    /// Append one full step: a position for every tracked body.
    pub(crate) fn record_step(&mut self, positions: impl IntoIterator<Item = (BodyId, DVec3)>) {
        for (id, pos) in positions {
            if let Some(track) = self.tracks.get_mut(&id) {
                track.push(pos);
            }
        }
        self.steps += 1;
        debug_assert!(
            self.tracks.values().all(|track| track.len() == self.steps),
            "every body must receive exactly one sample per step"
        );
    }

    /// Number of recorded steps (length of every track).
    pub fn step_count(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// Tracked bodies in heliocentric order.
    pub fn bodies(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.tracks.keys().copied()
    }

    /// Full trajectory of a body.
    pub fn positions(&self, id: BodyId) -> Option<&[DVec3]> {
        self.tracks.get(&id).map(Vec::as_slice)
    }

    /// Position of a body after the given step index.
    pub fn position(&self, id: BodyId, step: usize) -> Option<DVec3> {
        self.tracks.get(&id)?.get(step).copied()
    }

    /// Last recorded position of a body.
    pub fn latest(&self, id: BodyId) -> Option<DVec3> {
        self.tracks.get(&id)?.last().copied()
    }

    /// One axis of a body's trajectory as a series.
    pub fn axis(&self, id: BodyId, axis: Axis) -> Option<impl Iterator<Item = f64> + '_> {
        let track = self.tracks.get(&id)?;
        Some(track.iter().map(move |&pos| axis.component(pos)))
    }

    /// Positions of every body at one step, `None` past the end.
    pub fn frame(&self, step: usize) -> Option<Vec<(BodyId, DVec3)>> {
        if step >= self.steps {
            return None;
        }
        Some(
            self.tracks
                .iter()
                .filter_map(|(&id, track)| track.get(step).map(|&pos| (id, pos)))
                .collect(),
        )
    }
}
