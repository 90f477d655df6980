/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// How far outside the viewport an embed starts counting as in view.
pub const EMBED_VIEWPORT_MARGIN: &str = "200px";

pub const THEME_STORAGE_KEY: &str = "pagani-theme";

pub const BRAND_URL: &str = "https://www.pagani.com/";

pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "https://www.instagram.com/paganiautomobili"),
    ("X", "https://x.com/PaganiAuto/"),
    ("LinkedIn", "https://www.linkedin.com/company/paganiautomobili/"),
];

pub fn log_level() -> log::Level {
    let default = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    parse_log_level(option_env!("SHOWCASE_LOG_LEVEL")).unwrap_or(default)
}

fn parse_log_level(raw: Option<&str>) -> Option<log::Level> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!(parse_log_level(Some("WARN")), Some(log::Level::Warn));
        assert_eq!(parse_log_level(Some(" trace ")), Some(log::Level::Trace));
        assert_eq!(parse_log_level(Some("loud")), None);
        assert_eq!(parse_log_level(None), None);
    }
}
