//! Browser-side timing for chart transitions.
//!
//! The chart core only stores tweens; something has to ask it to be redrawn
//! while they run. `use_transition_frames` bumps `AppState::frame` every frame
//! interval while any chart is animating and sleeps otherwise.

use crate::state::AppState;
use dioxus::prelude::*;
use lcv_charts::{Clock, Dashboard};

/// Delay between animation frames.
pub const FRAME_MS: i32 = 16;

/// Wall-clock time from the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Resolve after `ms` milliseconds via `setTimeout`.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms) {
                log::warn!("[LCV] animation: setTimeout failed: {:?}", e);
            }
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Keep the chart views repainting while transitions are in flight.
///
/// The effect reruns whenever the dashboard signal is written (a redraw from a
/// selector or hover handler). If that redraw started a transition and no
/// frame loop is live, one is spawned; it exits after painting the frame in
/// which everything came to rest.
pub fn use_transition_frames(mut state: AppState) {
    let mut running = use_signal(|| false);
    use_effect(move || {
        let animating = dashboard_animating(&state.dashboard.read());
        if !animating || *running.peek() {
            return;
        }
        running.set(true);
        spawn(async move {
            loop {
                sleep_ms(FRAME_MS).await;
                *state.frame.write() += 1;
                if !dashboard_animating(&state.dashboard.peek()) {
                    break;
                }
            }
            running.set(false);
        });
    });
}

fn dashboard_animating(dashboard: &Option<Dashboard>) -> bool {
    dashboard.as_ref().map(|d| d.is_animating()).unwrap_or(false)
}
