use std::cell::RefCell;
use std::rc::Rc;

use timeline_rs::api::{TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{FixedClock, Interval, Viewport};
use timeline_rs::extensions::{ListenerContext, TimelineEvent, TimelineListener};
use timeline_rs::interaction::DragPhase;
use timeline_rs::render::{Color, NullRenderer};

const HOUR: i64 = 3_600_000;
const REC: Color = Color::rgb(0.2, 0.6, 0.2);

/// Playhead handle band for a 91 px tall canvas (scale unit 20 px).
const HANDLE_Y: f64 = 65.0;
const ABOVE_HANDLE_Y: f64 = 10.0;

struct Recorder {
    events: Rc<RefCell<Vec<TimelineEvent>>>,
}

impl TimelineListener for Recorder {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: TimelineEvent, _context: ListenerContext) {
        self.events.borrow_mut().push(event);
    }
}

fn build_engine(width: u32, now: i64) -> TimelineEngine<NullRenderer> {
    let config = TimelineEngineConfig::new(Viewport::new(width, 91)).with_thresholds(0, HOUR);
    TimelineEngine::with_clock(
        NullRenderer::default(),
        config,
        Box::new(FixedClock::new(now)),
    )
    .expect("engine init")
}

fn record(engine: &mut TimelineEngine<NullRenderer>) -> Rc<RefCell<Vec<TimelineEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(Recorder {
            events: events.clone(),
        }))
        .expect("register listener");
    events
}

#[test]
fn pan_then_click_commits_snapped_time() {
    // 3_600_000 px over one hour: one pixel per millisecond.
    let mut engine = build_engine(3_600_000, 10 * HOUR);
    assert_eq!(engine.view_window().left_time(), 0);

    engine.pointer_down(500.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::Pressed);
    engine.pointer_move(400.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::PanningTimeline);
    assert!(engine.playhead().is_panning);
    assert_eq!(engine.view_window().left_time(), 100);
    // The marker stays on its time while the ruler moves.
    assert!((engine.playhead().pixel_x - -100.0).abs() <= 1e-6);
    engine.pointer_up(400.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
    assert!(!engine.playhead().is_panning);
    assert_eq!(engine.current_time(), 0);

    engine.pointer_down(50.0, ABOVE_HANDLE_Y);
    engine.pointer_up(50.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.current_time(), 150);
}

#[test]
fn click_seek_goes_through_snap() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    engine.set_recorded_intervals(vec![
        Interval::recorded(0, 1_000_000, REC),
        Interval::recorded(3_000_000, HOUR, REC),
    ]);

    engine.pointer_down(1_900.0, ABOVE_HANDLE_Y);
    engine.pointer_up(1_900.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.current_time(), 1_000_000);

    engine.pointer_down(2_100.0, ABOVE_HANDLE_Y);
    engine.pointer_up(2_100.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.current_time(), 3_000_000);
}

#[test]
fn dragging_playhead_follows_pointer_and_commits_on_release() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    engine.set_current_time(1_000_000);
    let events = record(&mut engine);

    engine.pointer_down(1_005.0, HANDLE_Y);
    engine.pointer_move(1_500.0, HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::DraggingPlayhead);
    let playhead = engine.playhead();
    assert!(playhead.dragging);
    assert_eq!(playhead.current_time, 1_000_000);
    assert!((playhead.pixel_x - 1_500.0).abs() <= 1e-9);
    assert_eq!(engine.view_window().left_time(), 0);

    engine.pointer_move(2_000.0, HANDLE_Y);
    engine.pointer_up(2_000.0, HANDLE_Y);

    assert_eq!(engine.current_time(), 2_000_000);
    assert!(!engine.playhead().dragging);
    assert_eq!(
        events.borrow().as_slice(),
        &[
            TimelineEvent::ScrubBegan { time: 1_500_000 },
            TimelineEvent::ScrubMoved { time: 1_500_000 },
            TimelineEvent::ScrubMoved { time: 2_000_000 },
            TimelineEvent::TimeCommitted { time: 2_000_000 },
            TimelineEvent::ScrubEnded { time: 2_000_000 },
        ]
    );
}

#[test]
fn press_during_scrub_drops_the_playhead_before_the_new_gesture() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    engine.set_current_time(1_000_000);
    let events = record(&mut engine);

    engine.pointer_down(1_005.0, HANDLE_Y);
    engine.pointer_move(100.0, HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::DraggingPlayhead);

    // No release: the host missed it and a new press arrives elsewhere.
    engine.pointer_down(2_000.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::Pressed);
    assert!(!engine.playhead().dragging);
    assert_eq!(engine.current_time(), 100_000);
    assert_eq!(
        events.borrow().last(),
        Some(&TimelineEvent::ScrubEnded { time: 100_000 })
    );

    engine.pointer_move(1_900.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::PanningTimeline);
    engine.pointer_up(1_900.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.view_window().left_time(), 100_000);

    engine.set_current_time(1_800_000);
    let playhead = engine.playhead();
    assert!(!playhead.dragging);
    assert!(!playhead.is_panning);
    assert_eq!(playhead.current_time, 1_800_000);
    assert!((playhead.pixel_x - 1_700.0).abs() <= 1e-9);
    assert_eq!(playhead.display_time(engine.view_window()), 1_800_000);
}

#[test]
fn press_during_pan_clears_the_panning_flag() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    engine.pointer_down(500.0, ABOVE_HANDLE_Y);
    engine.pointer_move(400.0, ABOVE_HANDLE_Y);
    assert!(engine.playhead().is_panning);

    engine.pointer_down(800.0, ABOVE_HANDLE_Y);
    assert!(!engine.playhead().is_panning);
    engine.pointer_up(800.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
    assert_eq!(engine.current_time(), 900_000);
}

#[test]
fn hit_test_uses_press_position_not_live_position() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    engine.set_current_time(1_000_000);

    // Pressed beside the marker, then moved over it: still a pan.
    engine.pointer_down(1_200.0, HANDLE_Y);
    engine.pointer_move(1_000.0, HANDLE_Y);
    assert_eq!(engine.drag_phase(), DragPhase::PanningTimeline);
    engine.pointer_up(1_000.0, HANDLE_Y);
}

#[test]
fn drop_in_recording_hole_snaps_to_closer_edge() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    engine.set_recorded_intervals(vec![
        Interval::recorded(0, 1_000_000, REC),
        Interval::recorded(3_000_000, HOUR, REC),
    ]);
    engine.set_current_time(500_000);

    engine.pointer_down(500.0, HANDLE_Y);
    engine.pointer_move(1_900.0, HANDLE_Y);
    assert_eq!(engine.playhead().display_time(engine.view_window()), 1_900_000);
    engine.pointer_up(1_900.0, HANDLE_Y);
    assert_eq!(engine.current_time(), 1_000_000);
    assert!((engine.playhead().pixel_x - 1_000.0).abs() <= 1e-9);
}

#[test]
fn leaving_canvas_mid_scrub_settles_and_snaps() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    engine.set_current_time(1_000_000);
    let events = record(&mut engine);

    engine.pointer_down(1_000.0, HANDLE_Y);
    engine.pointer_move(4_000.0, HANDLE_Y);
    engine.pointer_leave();

    assert_eq!(engine.drag_phase(), DragPhase::Idle);
    assert_eq!(engine.current_time(), HOUR);
    assert_eq!(
        events.borrow().last(),
        Some(&TimelineEvent::ScrubEnded { time: HOUR })
    );
}

#[test]
fn leaving_canvas_after_press_does_not_seek() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    engine.pointer_down(1_800.0, ABOVE_HANDLE_Y);
    engine.pointer_leave();
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
    assert_eq!(engine.current_time(), 0);

    engine.pointer_up(1_800.0, ABOVE_HANDLE_Y);
    assert_eq!(engine.current_time(), 0);
}

#[test]
fn idle_move_shows_hover_without_committing() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    let events = record(&mut engine);

    engine.pointer_move(900.0, ABOVE_HANDLE_Y);
    let hover = engine.hover().expect("hover indicator");
    assert_eq!(hover.time, 900_000);
    assert!((hover.pixel_x - 900.0).abs() <= 1e-9);
    assert_eq!(engine.current_time(), 0);
    assert!(events.borrow().is_empty());

    engine.pointer_down(900.0, ABOVE_HANDLE_Y);
    assert!(engine.hover().is_none());
}

#[test]
fn keyboard_steps_and_toggles() {
    let mut engine = build_engine(3_600, 10 * HOUR);
    assert_eq!(engine.current_time(), 0);

    assert!(engine.key_down("ArrowRight"));
    assert_eq!(engine.current_time(), 5_000);
    assert!(engine.key_down("ArrowLeft"));
    assert!(engine.key_down("ArrowLeft"));
    assert_eq!(engine.current_time(), 0);

    assert!(engine.key_down("Enter"));
    assert!(engine.is_playing());
    assert!(engine.key_down(" "));
    assert!(!engine.is_playing());

    assert!(!engine.key_down("KeyQ"));
}
