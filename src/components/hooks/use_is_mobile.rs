use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Viewport width below which the editor switches to compact controls.
const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Hook reporting whether the viewport is mobile-sized.
///
/// Returns an `RwSignal<bool>` that is true below 768px and is kept
/// current by a window resize listener. The listener lives as long as
/// the page; the manager is mounted for the whole session.
pub fn use_is_mobile() -> RwSignal<bool> {
    let is_mobile = RwSignal::new(read_is_mobile());

    let _resize_handle = window_event_listener(ev::resize, move |_| {
        is_mobile.set(read_is_mobile());
    });

    is_mobile
}

fn read_is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < MOBILE_BREAKPOINT_PX)
        .unwrap_or(false)
}
