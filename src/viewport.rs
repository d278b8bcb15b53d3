use gloo::events::EventListener;

/// Window size in CSS pixels. The page does not own this measurement; it is
/// an external input refreshed on every resize notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ViewportSize {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

pub(crate) fn size() -> ViewportSize {
    let Some(window) = web_sys::window() else {
        return ViewportSize {
            width: 0.0,
            height: 0.0,
        };
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    ViewportSize { width, height }
}

/// Subscribes to window resizes; the subscription lives as long as the
/// returned listener.
pub(crate) fn on_resize<F>(callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "resize", move |_event| {
        callback();
    }))
}
