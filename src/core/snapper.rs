use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::interval::IntervalIndex;

/// Which neighbour wins when a candidate sits in a hole between recordings.
///
/// `Earlier` sends the exact midpoint to the previous recording's end;
/// `Later` sends it to the next recording's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MidpointTieBreak {
    #[default]
    Earlier,
    Later,
}

/// Hard playhead limits taken from the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapBounds {
    min_time: i64,
    max_time: i64,
    live: bool,
}

impl SnapBounds {
    /// `live` is derived from whether `now_ms` is still within the end threshold.
    #[must_use]
    pub fn new(start_threshold: i64, end_threshold: i64, now_ms: i64) -> Self {
        Self {
            min_time: start_threshold.min(end_threshold),
            max_time: start_threshold.max(end_threshold),
            live: now_ms <= end_threshold,
        }
    }

    #[must_use]
    pub fn min_time(self) -> i64 {
        self.min_time
    }

    #[must_use]
    pub fn max_time(self) -> i64 {
        self.max_time
    }

    #[must_use]
    pub fn is_live(self) -> bool {
        self.live
    }

    #[must_use]
    pub fn clamp(self, time: i64) -> i64 {
        time.clamp(self.min_time, self.max_time)
    }
}

/// Resolves candidate times to the time the playhead may rest at.
///
/// The only authority for committed playhead times; called on gesture
/// release, keyboard steps, external seeks and playback ticks.
#[derive(Debug, Clone, Copy)]
pub struct TimeSnapper<'a> {
    index: &'a IntervalIndex,
    bounds: SnapBounds,
    tie_break: MidpointTieBreak,
}

impl<'a> TimeSnapper<'a> {
    #[must_use]
    pub fn new(index: &'a IntervalIndex, bounds: SnapBounds, tie_break: MidpointTieBreak) -> Self {
        Self {
            index,
            bounds,
            tie_break,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> SnapBounds {
        self.bounds
    }

    /// Maps `candidate` to an allowed rest time. `snap(snap(t)) == snap(t)`.
    #[must_use]
    pub fn snap(&self, candidate: i64) -> i64 {
        let bounded = self.bounds.clamp(candidate);
        let resting = self.resolve_recorded(bounded);
        let claimed = self.resolve_events(resting);
        self.bounds.clamp(claimed)
    }

    /// Recorded-track rules: inside a recording stays put, before the first
    /// or after the last recording goes to the nearest edge (unless live),
    /// and a hole between recordings goes to the closer edge.
    fn resolve_recorded(&self, candidate: i64) -> i64 {
        let (Some(first), Some(last)) = (self.index.first_recorded(), self.index.last_recorded())
        else {
            return candidate;
        };

        if self.index.recorded_containing(candidate).is_some() {
            return candidate;
        }
        if candidate < first.start_time {
            return first.start_time;
        }
        if candidate > last.end_time {
            return if self.bounds.is_live() {
                candidate
            } else {
                last.end_time
            };
        }

        match self.index.gap_around(candidate) {
            Some((previous, next)) => {
                let midpoint = (previous.end_time as f64 + next.start_time as f64) / 2.0;
                let candidate = candidate as f64;
                let take_previous = match self.tie_break {
                    MidpointTieBreak::Earlier => candidate <= midpoint,
                    MidpointTieBreak::Later => candidate < midpoint,
                };
                if take_previous {
                    previous.end_time
                } else {
                    next.start_time
                }
            }
            // Only reachable with unsorted input; accept the candidate as-is.
            None => candidate,
        }
    }

    /// Event overlay: a covering event pulls the playhead to its start.
    ///
    /// Only events starting at a rest point may claim; overlapping claims
    /// resolve to the earliest start until no earlier claim remains.
    fn resolve_events(&self, resting: i64) -> i64 {
        if self.index.events().is_empty() {
            return resting;
        }

        let mut current = resting;
        loop {
            let claims: SmallVec<[i64; 4]> = self
                .index
                .events_containing(current)
                .map(|event| event.start_time)
                .filter(|start| self.is_rest_point(*start))
                .collect();
            match claims.into_iter().min() {
                Some(start) if start < current => current = start,
                Some(start) => return start,
                None => return current,
            }
        }
    }

    fn is_rest_point(&self, time: i64) -> bool {
        self.bounds.clamp(time) == time && self.resolve_recorded(time) == time
    }
}
