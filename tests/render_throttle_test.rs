use tui_snake::core::{create_initial_state, toggle_pause};
use tui_snake::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 2, false));
    assert!(t.should_render(2, 3, true));
}

#[test]
fn render_throttle_skips_unchanged_running_frames() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(!t.should_render(10, 1, false));
    assert!(!t.should_render(1000, 1, false));
}

#[test]
fn render_throttle_static_refreshes_periodically() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_reset_forces_redraw() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    t.reset();
    assert!(t.should_render(1, 1, true));
}

#[test]
fn render_throttle_follows_state_fingerprint() {
    let state = create_initial_state(10, 10, &mut || 0.0).unwrap();
    let paused = toggle_pause(&state);

    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, state.fingerprint(), !state.is_running()));
    assert!(t.should_render(5, paused.fingerprint(), !paused.is_running()));
    assert!(!t.should_render(6, paused.clone().fingerprint(), !paused.is_running()));
}
