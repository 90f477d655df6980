use crate::utils::listener::EventListener;
use web_sys::window;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn read() -> Option<Self> {
        let window = window()?;
        let scroll_y = window.scroll_y().ok()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(viewport_height);
        Some(Self {
            scroll_y,
            viewport_height,
            document_height,
        })
    }

    /// Fraction of the scrollable distance already scrolled, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / range).clamp(0.0, 1.0)
    }
}

/// Maps `value` from `input` onto `output`, clamping outside the input range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_end;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// The detail page hides its model once the specifications section has
/// covered the first viewport and shows it again when scrolled back above
/// that line. At exactly one viewport height the current state is kept.
pub fn model_visibility(current: bool, scroll_y: f64, viewport_height: f64) -> bool {
    if current && scroll_y > viewport_height {
        false
    } else if !current && scroll_y < viewport_height {
        true
    } else {
        current
    }
}

#[hook]
pub fn use_window_scroll() -> ScrollMetrics {
    let metrics = use_state_eq(|| ScrollMetrics::read().unwrap_or_default());

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let refresh = {
                    let metrics = metrics.clone();
                    move || {
                        if let Some(latest) = ScrollMetrics::read() {
                            metrics.set(latest);
                        }
                    }
                };
                let on_scroll = EventListener::on_window("scroll", {
                    let refresh = refresh.clone();
                    move |_| refresh()
                });
                let on_resize = EventListener::on_window("resize", move |_| refresh());
                move || {
                    drop(on_scroll);
                    drop(on_resize);
                }
            },
            (),
        );
    }

    *metrics
}
