use crate::config::MOBILE_BREAKPOINT_PX;

/// Source of the current viewport width, injected so the embed logic can run
/// without a browser window.
pub trait ViewportWidth {
    fn width(&self) -> Option<f64>;
}

/// Reads `window.innerWidth`.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct WindowViewport;

impl ViewportWidth for WindowViewport {
    fn width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// An unknown width is treated as desktop so the embed url is left alone.
    pub fn detect(viewport: &impl ViewportWidth) -> Self {
        viewport
            .width()
            .map(Self::from_width)
            .unwrap_or(DeviceClass::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<f64>);

    impl ViewportWidth for Fixed {
        fn width(&self) -> Option<f64> {
            self.0
        }
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(DeviceClass::from_width(767.9), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Desktop);
    }

    #[test]
    fn detect_uses_injected_width() {
        assert_eq!(DeviceClass::detect(&Fixed(Some(400.0))), DeviceClass::Mobile);
        assert_eq!(DeviceClass::detect(&Fixed(Some(1024.0))), DeviceClass::Desktop);
        assert_eq!(DeviceClass::detect(&Fixed(None)), DeviceClass::Desktop);
    }
}
