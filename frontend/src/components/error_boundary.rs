use std::panic;
use web_sys::window;

/// Installs the top-level failure screen.
///
/// A panic anywhere in the app leaves Yew unable to render, so the hook logs
/// it and swaps the whole body for a static recovery screen whose only action
/// is a full page reload.
pub fn install() {
    panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let message = panic_message(info);
        log::error!("Uncaught error: {}", message);
        show_recovery_screen(&message);
    }));
}

fn panic_message(info: &panic::PanicInfo<'_>) -> String {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown error".to_string());
    match info.location() {
        Some(location) => format!("{}\n    at {}:{}", payload, location.file(), location.line()),
        None => payload,
    }
}

fn show_recovery_screen(message: &str) {
    let body = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        body.set_inner_html(&recovery_markup(message));
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub(crate) fn recovery_markup(message: &str) -> String {
    format!(
        r#"<div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #000; color: #fff; padding: 1rem; font-family: system-ui, sans-serif;">
    <div style="max-width: 36rem; border: 1px solid #ef4444; border-radius: 0.25rem; padding: 1.5rem; background: rgba(127, 29, 29, 0.2);">
        <h1 style="font-size: 1.5rem; font-weight: 700; margin: 0 0 1rem; color: #f87171;">Something went wrong</h1>
        <pre style="white-space: pre-wrap; background: rgba(0, 0, 0, 0.5); padding: 1rem; border-radius: 0.25rem; font-size: 0.875rem; max-height: 24rem; overflow: auto;">{}</pre>
        <button onclick="window.location.reload()" style="margin-top: 1rem; padding: 0.5rem 1rem; background: #fff; color: #000; border: none; border-radius: 0.25rem; cursor: pointer;">Reload Page</button>
    </div>
</div>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_screen_escapes_message() {
        let markup = recovery_markup("<script>alert('x')</script> & more");
        assert!(markup.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn recovery_screen_offers_full_reload() {
        let markup = recovery_markup("boom");
        assert!(markup.contains("Something went wrong"));
        assert!(markup.contains("window.location.reload()"));
        assert!(markup.contains(">boom</pre>"));
    }
}
