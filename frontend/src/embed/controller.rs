use super::device::DeviceClass;
use super::latch::LoadLatch;
use super::source::{with_data_saving_preload, EmbedSource, EmbedUrlError};

/// What the embed container should show.
#[derive(Clone, Debug, PartialEq)]
pub enum EmbedView {
    Thumbnail(String),
    /// The live viewer. Once loaded it stays mounted; `painted` only toggles
    /// whether it is drawn.
    Live { src: String, painted: bool },
    Empty,
}

/// Render policy for one embed instance, independent of the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedController {
    source_url: String,
    source: Result<EmbedSource, EmbedUrlError>,
    explicit_thumbnail: Option<String>,
}

impl EmbedController {
    pub fn new(source_url: &str, explicit_thumbnail: Option<&str>) -> Self {
        let source = EmbedSource::parse(source_url);
        if let Err(e) = &source {
            log::warn!("No derived thumbnail for {}: {}", source_url, e);
        }
        Self {
            source_url: source_url.to_string(),
            source,
            explicit_thumbnail: explicit_thumbnail.map(str::to_string),
        }
    }

    pub fn model_id(&self) -> Option<&str> {
        self.source.as_ref().ok().map(EmbedSource::model_id)
    }

    pub fn derived_thumbnail_url(&self) -> Option<String> {
        self.source.as_ref().ok().map(EmbedSource::thumbnail_url)
    }

    /// The explicit thumbnail wins over the one derived from the model id.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.explicit_thumbnail
            .clone()
            .or_else(|| self.derived_thumbnail_url())
    }

    pub fn optimized_url(&self, device: DeviceClass) -> String {
        match device {
            DeviceClass::Mobile => with_data_saving_preload(&self.source_url),
            DeviceClass::Desktop => self.source_url.clone(),
        }
    }

    pub fn view(
        &self,
        latch: &LoadLatch,
        device: DeviceClass,
        visible: bool,
        thumbnail_only: bool,
    ) -> EmbedView {
        let thumbnail = self.thumbnail_url();

        if thumbnail_only || (!latch.is_loaded() && thumbnail.is_some()) {
            return thumbnail.map(EmbedView::Thumbnail).unwrap_or(EmbedView::Empty);
        }
        if latch.is_loaded() {
            return EmbedView::Live {
                src: self.optimized_url(device),
                painted: visible,
            };
        }
        EmbedView::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::device::ViewportWidth;
    use crate::embed::latch::LatchInputs;
    use std::cell::Cell;

    const ZONDA_R: &str = "https://sketchfab.com/models/6cf8c75a54794fdf895c2d005cbde426/embed?autospin=1&autostart=1&preload=1&dnt=1&transparent=1&ui_infos=0&ui_controls=0&ui_stop=0&ui_watermark=0";
    const MALFORMED: &str = "https://sketchfab.com/embed?preload=1";

    struct ResizableViewport(Cell<f64>);

    impl ViewportWidth for ResizableViewport {
        fn width(&self) -> Option<f64> {
            Some(self.0.get())
        }
    }

    fn loaded() -> LoadLatch {
        LoadLatch::default().observe(LatchInputs {
            visible: true,
            in_view: true,
            thumbnail_only: false,
        })
    }

    fn query_flags(url: &str) -> Vec<(String, String)> {
        url::Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn thumbnail_before_load() {
        let controller = EmbedController::new(ZONDA_R, None);
        assert_eq!(
            controller.view(&LoadLatch::default(), DeviceClass::Desktop, true, false),
            EmbedView::Thumbnail(
                "https://img.sketchfab.com/i/6cf8c75a54794fdf895c2d005cbde426/max.jpg".into()
            )
        );
    }

    #[test]
    fn explicit_thumbnail_overrides_derived() {
        let controller = EmbedController::new(ZONDA_R, Some("/assets/cars/zonda-r.jpg"));
        assert_eq!(
            controller.thumbnail_url().as_deref(),
            Some("/assets/cars/zonda-r.jpg")
        );
    }

    #[test]
    fn malformed_url_uses_explicit_thumbnail() {
        let controller = EmbedController::new(MALFORMED, Some("/assets/fallback.jpg"));
        assert_eq!(controller.model_id(), None);
        assert_eq!(controller.derived_thumbnail_url(), None);
        assert_eq!(
            controller.view(&LoadLatch::default(), DeviceClass::Desktop, true, false),
            EmbedView::Thumbnail("/assets/fallback.jpg".into())
        );
    }

    #[test]
    fn malformed_url_without_thumbnail_falls_through() {
        let controller = EmbedController::new(MALFORMED, None);
        assert_eq!(
            controller.view(&LoadLatch::default(), DeviceClass::Desktop, true, false),
            EmbedView::Empty
        );
        assert_eq!(
            controller.view(&loaded(), DeviceClass::Desktop, true, false),
            EmbedView::Live {
                src: MALFORMED.into(),
                painted: true
            }
        );
    }

    #[test]
    fn thumbnail_only_never_goes_live() {
        let controller = EmbedController::new(ZONDA_R, None);
        let view = controller.view(&loaded(), DeviceClass::Desktop, true, true);
        assert!(matches!(view, EmbedView::Thumbnail(_)));

        let bare = EmbedController::new(MALFORMED, None);
        assert_eq!(
            bare.view(&loaded(), DeviceClass::Desktop, true, true),
            EmbedView::Empty
        );
    }

    #[test]
    fn loaded_embed_stays_mounted_when_hidden() {
        let controller = EmbedController::new(ZONDA_R, None);
        assert_eq!(
            controller.view(&loaded(), DeviceClass::Desktop, false, false),
            EmbedView::Live {
                src: ZONDA_R.into(),
                painted: false
            }
        );
    }

    #[test]
    fn resize_to_mobile_rewrites_only_preload() {
        let controller = EmbedController::new(ZONDA_R, None);
        let viewport = ResizableViewport(Cell::new(1024.0));

        let desktop = match controller.view(&loaded(), DeviceClass::detect(&viewport), true, false) {
            EmbedView::Live { src, .. } => src,
            other => panic!("expected live embed, got {:?}", other),
        };
        viewport.0.set(400.0);
        let mobile = match controller.view(&loaded(), DeviceClass::detect(&viewport), true, false) {
            EmbedView::Live { src, .. } => src,
            other => panic!("expected live embed, got {:?}", other),
        };

        let before = query_flags(&desktop);
        let after = query_flags(&mobile);
        assert_eq!(before.len(), after.len());
        for ((k1, v1), (k2, v2)) in before.iter().zip(after.iter()) {
            assert_eq!(k1, k2);
            if k1 == "preload" {
                assert_eq!((v1.as_str(), v2.as_str()), ("1", "0"));
            } else {
                assert_eq!(v1, v2);
            }
        }
    }
}
