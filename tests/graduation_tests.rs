use timeline_rs::core::{
    GraduationConfig, GraduationGenerator, GraduationTier, LabelCalendar, ViewWindow,
};

const MINUTE: i64 = 60_000;

fn utc_generator() -> GraduationGenerator {
    GraduationGenerator::new(GraduationConfig::default(), LabelCalendar::UTC)
}

#[test]
fn one_hour_over_3600px_uses_minute_ticks_and_two_minute_labels() {
    let window = ViewWindow::new(0, 1.0, 3_600.0);
    let graduations = utc_generator().generate(window);
    let layout = graduations.layout();

    assert_eq!(layout.minor_step_minutes, 1);
    assert_eq!(layout.label_step_minutes, 2);
    assert_eq!(layout.tick_count, 60);
    assert_eq!(graduations.len(), 60);

    let ticks: Vec<_> = graduations.collect();
    assert_eq!(ticks[0].tier, GraduationTier::Major);
    assert_eq!(ticks[0].label.as_deref(), Some("1970-01-01"));
    assert_eq!(ticks[1].tier, GraduationTier::Minor);
    assert_eq!(ticks[1].label, None);
    assert_eq!(ticks[2].tier, GraduationTier::Medium);
    assert_eq!(ticks[2].label.as_deref(), Some("00:02:00"));
    assert!((ticks[2].pixel_x - 120.0).abs() <= 1e-9);

    let labelled = ticks.iter().filter(|tick| tick.label.is_some()).count();
    assert_eq!(labelled, 30);
}

#[test]
fn first_tick_aligns_to_next_step_boundary() {
    let window = ViewWindow::new(30_000, 1.0, 3_600.0);
    let mut graduations = utc_generator().generate(window);
    assert_eq!(graduations.layout().offset_ms, 30_000);

    let first = graduations.next().expect("first tick");
    assert_eq!(first.time, MINUTE);
    assert!((first.pixel_x - 30.0).abs() <= 1e-9);
}

#[test]
fn negative_left_edge_uses_euclidean_alignment() {
    let window = ViewWindow::new(-30_000, 1.0, 3_600.0);
    let first = utc_generator()
        .generate(window)
        .next()
        .expect("first tick");
    assert_eq!(first.time, 0);
    assert_eq!(first.tier, GraduationTier::Major);
}

#[test]
fn day_boundary_follows_label_calendar() {
    let calendar = LabelCalendar::new(60);
    let generator = GraduationGenerator::new(GraduationConfig::default(), calendar);
    let window = ViewWindow::new(-60 * MINUTE, 1.0, 3_600.0);

    let first = generator.generate(window).next().expect("first tick");
    assert_eq!(first.time, -60 * MINUTE);
    assert_eq!(first.tier, GraduationTier::Major);
    assert_eq!(first.label.as_deref(), Some("1970-01-01"));
}

#[test]
fn wide_window_selects_coarser_steps() {
    let window = ViewWindow::new(0, 24.0, 1_000.0);
    let layout = utc_generator().layout(window);
    assert_eq!(layout.minor_step_minutes, 30);
    assert_eq!(layout.label_step_minutes, 120);
    assert_eq!(layout.step_ms, 30 * MINUTE);
}

#[test]
fn narrow_canvas_falls_back_to_daily_ticks() {
    let window = ViewWindow::new(0, 24.0, 10.0);
    let layout = utc_generator().layout(window);
    assert_eq!(layout.minor_step_minutes, 1_440);
    assert_eq!(layout.label_step_minutes, 1_440);
    assert!(layout.tick_count >= 1);
}

#[test]
fn invalid_gap_config_is_coerced_to_defaults() {
    let config = GraduationConfig {
        min_graduation_gap_px: -1.0,
        label_gap_px: f64::NAN,
    };
    let generator = GraduationGenerator::new(config, LabelCalendar::UTC);
    let layout = generator.layout(ViewWindow::new(0, 1.0, 3_600.0));
    assert_eq!(layout.minor_step_minutes, 1);
    assert_eq!(layout.label_step_minutes, 2);
}
