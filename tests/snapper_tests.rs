use proptest::prelude::*;
use timeline_rs::core::{Interval, IntervalIndex, MidpointTieBreak, SnapBounds, TimeSnapper};
use timeline_rs::render::Color;

const REC: Color = Color::rgb(0.1, 0.7, 0.2);
const EVT: Color = Color::rgb(0.9, 0.6, 0.0);

/// "Now" far past every end threshold used here: a historical view.
const HISTORICAL_NOW: i64 = i64::MAX / 2;

fn historical(start: i64, end: i64) -> SnapBounds {
    SnapBounds::new(start, end, HISTORICAL_NOW)
}

#[test]
fn gap_midpoint_belongs_to_earlier_recording_by_default() {
    let index = IntervalIndex::new(
        vec![Interval::recorded(0, 100, REC), Interval::recorded(200, 300, REC)],
        Vec::new(),
    );
    let snapper = TimeSnapper::new(&index, historical(-1_000, 1_000), MidpointTieBreak::default());

    assert_eq!(snapper.snap(150), 100);
    assert_eq!(snapper.snap(151), 200);
    assert_eq!(snapper.snap(120), 100);
    assert_eq!(snapper.snap(250), 250);
}

#[test]
fn covering_event_pulls_to_its_start() {
    let index = IntervalIndex::new(
        vec![Interval::recorded(0, 1_000, REC)],
        vec![Interval::event(400, 450, EVT)],
    );
    let snapper = TimeSnapper::new(&index, historical(0, 2_000), MidpointTieBreak::Earlier);

    assert_eq!(snapper.snap(420), 400);
    assert_eq!(snapper.snap(450), 400);
    assert_eq!(snapper.snap(451), 451);
}

#[test]
fn empty_recorded_track_only_clamps() {
    let index = IntervalIndex::default();
    let snapper = TimeSnapper::new(&index, historical(1_000, 2_000), MidpointTieBreak::Earlier);

    assert_eq!(snapper.snap(500), 1_000);
    assert_eq!(snapper.snap(5_000), 2_000);
    assert_eq!(snapper.snap(1_500), 1_500);
}

#[test]
fn before_first_recording_goes_to_its_start() {
    let index = IntervalIndex::new(vec![Interval::recorded(500, 900, REC)], Vec::new());
    let snapper = TimeSnapper::new(&index, historical(0, 2_000), MidpointTieBreak::Earlier);
    assert_eq!(snapper.snap(100), 500);
}

#[test]
fn after_last_recording_stops_at_its_end_unless_live() {
    let index = IntervalIndex::new(vec![Interval::recorded(0, 5_000, REC)], Vec::new());

    let historical_snapper =
        TimeSnapper::new(&index, historical(0, 10_000), MidpointTieBreak::Earlier);
    assert_eq!(historical_snapper.snap(6_000), 5_000);

    let live = SnapBounds::new(0, 10_000, 8_000);
    assert!(live.is_live());
    let live_snapper = TimeSnapper::new(&index, live, MidpointTieBreak::Earlier);
    assert_eq!(live_snapper.snap(6_000), 6_000);
    assert_eq!(live_snapper.snap(20_000), 10_000);
}

#[test]
fn event_starting_outside_thresholds_cannot_claim() {
    let index = IntervalIndex::new(
        vec![Interval::recorded(0, 1_000, REC)],
        vec![Interval::event(100, 600, EVT)],
    );
    let snapper = TimeSnapper::new(&index, historical(300, 1_000), MidpointTieBreak::Earlier);
    assert_eq!(snapper.snap(400), 400);
    assert_eq!(snapper.snap(0), 300);
}

fn interval_set() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((1i64..500, 0i64..800), 0..6).prop_map(|pairs| {
        let mut cursor = 0;
        pairs
            .into_iter()
            .map(|(gap, len)| {
                let start = cursor + gap;
                let end = start + len;
                cursor = end;
                (start, end)
            })
            .collect()
    })
}

fn event_set() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..6_000, 0i64..400), 0..4)
        .prop_map(|pairs| pairs.into_iter().map(|(start, len)| (start, start + len)).collect())
}

proptest! {
    #[test]
    fn snap_is_idempotent(
        recorded in interval_set(),
        events in event_set(),
        start in -500i64..3_000,
        span in 0i64..6_000,
        now in 0i64..10_000,
        later in any::<bool>(),
        candidate in -2_000i64..10_000
    ) {
        let index = IntervalIndex::new(
            recorded.iter().map(|(s, e)| Interval::recorded(*s, *e, REC)).collect(),
            events.iter().map(|(s, e)| Interval::event(*s, *e, EVT)).collect(),
        );
        let tie_break = if later { MidpointTieBreak::Later } else { MidpointTieBreak::Earlier };
        let bounds = SnapBounds::new(start, start + span, now);
        let snapper = TimeSnapper::new(&index, bounds, tie_break);

        let once = snapper.snap(candidate);
        prop_assert_eq!(snapper.snap(once), once);
        prop_assert!(once >= bounds.min_time() && once <= bounds.max_time());
    }
}
