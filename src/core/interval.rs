use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::view_window::ViewWindow;
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalTag {
    Recorded,
    Event,
    Gap,
}

/// Closed time span `[start_time, end_time]` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start_time: i64,
    pub end_time: i64,
    pub tag: IntervalTag,
    pub color: Color,
}

impl Interval {
    /// Builds an interval, swapping the bounds when they arrive reversed.
    #[must_use]
    pub fn new(start_time: i64, end_time: i64, tag: IntervalTag, color: Color) -> Self {
        Self {
            start_time: start_time.min(end_time),
            end_time: start_time.max(end_time),
            tag,
            color,
        }
    }

    #[must_use]
    pub fn recorded(start_time: i64, end_time: i64, color: Color) -> Self {
        Self::new(start_time, end_time, IntervalTag::Recorded, color)
    }

    #[must_use]
    pub fn event(start_time: i64, end_time: i64, color: Color) -> Self {
        Self::new(start_time, end_time, IntervalTag::Event, color)
    }

    #[must_use]
    pub fn contains(&self, time: i64) -> bool {
        time >= self.start_time && time <= self.end_time
    }

    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Intersection with `[left, right]`, or `None` when disjoint.
    #[must_use]
    pub fn clipped(&self, left: i64, right: i64) -> Option<Self> {
        if self.end_time < left || self.start_time > right {
            return None;
        }
        Some(Self {
            start_time: self.start_time.max(left),
            end_time: self.end_time.min(right),
            ..*self
        })
    }
}

/// Inputs the synthetic gap interval is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapContext {
    pub now_ms: i64,
    pub end_threshold: i64,
    pub color: Color,
}

impl GapContext {
    /// "Now" has not yet passed the end threshold, so the view is live.
    #[must_use]
    pub fn is_live(self) -> bool {
        self.now_ms <= self.end_threshold
    }
}

/// Snapshot of the recorded track plus the event overlay.
///
/// Both tracks are taken in caller order and never sorted or merged; lookups
/// assume the recorded track is sorted and non-overlapping. The gap interval
/// is derived on demand from a [`GapContext`] and the current window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalIndex {
    recorded: Vec<Interval>,
    events: Vec<Interval>,
}

impl IntervalIndex {
    #[must_use]
    pub fn new(recorded: Vec<Interval>, events: Vec<Interval>) -> Self {
        let recorded = retag(recorded, IntervalTag::Recorded);
        let events = retag(events, IntervalTag::Event);
        if !is_sorted_non_overlapping(&recorded) {
            warn!(
                intervals = recorded.len(),
                "recorded intervals are not sorted and disjoint; snapping may be inexact"
            );
        }
        Self { recorded, events }
    }

    #[must_use]
    pub fn recorded(&self) -> &[Interval] {
        &self.recorded
    }

    #[must_use]
    pub fn events(&self) -> &[Interval] {
        &self.events
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty() && self.events.is_empty()
    }

    #[must_use]
    pub fn first_recorded(&self) -> Option<&Interval> {
        self.recorded.first()
    }

    #[must_use]
    pub fn last_recorded(&self) -> Option<&Interval> {
        self.recorded.last()
    }

    /// Index of the first recorded interval whose end is not before `time`.
    fn first_ending_at_or_after(&self, time: i64) -> usize {
        self.recorded
            .partition_point(|interval| interval.end_time < time)
    }

    #[must_use]
    pub fn recorded_containing(&self, time: i64) -> Option<&Interval> {
        self.recorded
            .get(self.first_ending_at_or_after(time))
            .filter(|interval| interval.contains(time))
    }

    /// Consecutive recorded intervals `(previous, next)` with `time` strictly
    /// inside the hole between them.
    #[must_use]
    pub fn gap_around(&self, time: i64) -> Option<(&Interval, &Interval)> {
        let next_index = self.first_ending_at_or_after(time);
        if next_index == 0 {
            return None;
        }
        let previous = self.recorded.get(next_index - 1)?;
        let next = self.recorded.get(next_index)?;
        (time > previous.end_time && time < next.start_time).then_some((previous, next))
    }

    pub fn events_containing(&self, time: i64) -> impl Iterator<Item = &Interval> {
        self.events
            .iter()
            .filter(move |interval| interval.contains(time))
    }

    /// Synthetic "not recorded" span after the last recording while live.
    ///
    /// Spans `[last_end, max(window_right, last_end)]`; `None` for a historical
    /// view, an empty recorded track, or a zero-width span.
    #[must_use]
    pub fn gap_interval(&self, window: ViewWindow, context: GapContext) -> Option<Interval> {
        if !context.is_live() {
            return None;
        }
        let last_end = self.last_recorded()?.end_time;
        let end_time = window.right_time().max(last_end);
        if end_time == last_end {
            return None;
        }
        Some(Interval::new(
            last_end,
            end_time,
            IntervalTag::Gap,
            context.color,
        ))
    }

    /// Visible intervals clipped to the window, in draw order: gap, then the
    /// recorded track, then events, each left to right.
    #[must_use]
    pub fn visible_intervals(&self, window: ViewWindow, context: GapContext) -> Vec<Interval> {
        let left = window.left_time();
        let right = window.right_time();

        let gap = self.gap_interval(window, context);
        gap.iter()
            .chain(self.recorded.iter())
            .chain(self.events.iter())
            .filter_map(|interval| interval.clipped(left, right))
            .collect()
    }
}

fn retag(intervals: Vec<Interval>, tag: IntervalTag) -> Vec<Interval> {
    intervals
        .into_iter()
        .map(|interval| Interval::new(interval.start_time, interval.end_time, tag, interval.color))
        .collect()
}

fn is_sorted_non_overlapping(intervals: &[Interval]) -> bool {
    intervals
        .windows(2)
        .all(|pair| pair[0].end_time <= pair[1].start_time)
}
