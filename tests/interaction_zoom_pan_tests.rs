use approx::assert_abs_diff_eq;
use timeline_rs::core::{ViewWindow, ZoomPanController};

const HOUR: i64 = 3_600_000;

#[test]
fn wheel_steps_by_hour_then_half_hour() {
    let mut controller = ZoomPanController::new(ViewWindow::new(0, 2.0, 1_000.0));

    assert!(controller.apply_wheel(-120.0));
    assert_eq!(controller.window().hours_per_ruler(), 1.0);
    assert!(controller.apply_wheel(-3.0));
    assert_eq!(controller.window().hours_per_ruler(), 0.5);
    assert!(!controller.apply_wheel(-1.0));
    assert_eq!(controller.window().hours_per_ruler(), 0.5);

    assert!(controller.apply_wheel(1.0));
    assert_eq!(controller.window().hours_per_ruler(), 1.0);
    assert!(controller.apply_wheel(1.0));
    assert_eq!(controller.window().hours_per_ruler(), 2.0);
}

#[test]
fn wheel_ignores_zero_and_non_finite_deltas() {
    let mut controller = ZoomPanController::new(ViewWindow::new(0, 2.0, 1_000.0));
    assert!(!controller.apply_wheel(0.0));
    assert!(!controller.apply_wheel(f64::NAN));
    assert_eq!(controller.window().hours_per_ruler(), 2.0);
}

#[test]
fn zoom_out_caps_at_a_day() {
    let mut controller = ZoomPanController::new(ViewWindow::new(0, 24.0, 1_000.0));
    assert!(!controller.apply_wheel(1.0));
    assert_eq!(controller.window().hours_per_ruler(), 24.0);
}

#[test]
fn zoom_keeps_center_time_fixed() {
    let mut controller = ZoomPanController::new(ViewWindow::new(10 * HOUR, 4.0, 2_000.0));
    let center_before = controller.window().center_time();

    controller.apply_wheel(-1.0);
    let window = controller.window();
    assert_eq!(window.hours_per_ruler(), 3.0);
    assert_abs_diff_eq!(window.center_time(), center_before, epsilon = 1.0);
    assert_eq!(window.left_time(), 10 * HOUR + HOUR / 2);
}

#[test]
fn pan_moves_left_edge_against_drag_direction() {
    let mut controller = ZoomPanController::new(ViewWindow::new(0, 1.0, 3_600_000.0));
    assert_abs_diff_eq!(controller.window().pixels_per_ms(), 1.0, epsilon = 1e-12);

    assert!(controller.apply_pan(-100.0));
    assert_eq!(controller.window().left_time(), 100);
    assert_abs_diff_eq!(controller.window().pixel_to_time(50.0), 150.0, epsilon = 1e-9);

    assert!(controller.apply_pan(40.0));
    assert_eq!(controller.window().left_time(), 60);
}

#[test]
fn sub_millisecond_pan_is_a_no_op() {
    let mut controller = ZoomPanController::new(ViewWindow::new(0, 24.0, 100.0));
    // 100 px over a day: one pixel is 864 s, so a tiny delta still rounds to ms.
    assert!(controller.apply_pan(1e-6));
    let mut coarse = ZoomPanController::new(ViewWindow::new(0, 0.5, 1_800_000_000.0));
    assert!(!coarse.apply_pan(0.1));
    assert_eq!(coarse.window().left_time(), 0);
}

#[test]
fn resize_pins_left_edge_and_rescales() {
    let mut controller = ZoomPanController::new(ViewWindow::new(5_000, 1.0, 3_600.0));
    assert!(controller.apply_resize(7_200.0));
    let window = controller.window();
    assert_eq!(window.left_time(), 5_000);
    assert_eq!(window.hours_per_ruler(), 1.0);
    assert_abs_diff_eq!(window.pixels_per_ms(), 0.002, epsilon = 1e-15);
    assert!(!controller.apply_resize(7_200.0));
}
