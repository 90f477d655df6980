use thiserror::Error;
use url::Url;

const MODELS_MARKER: &str = "models/";
const PRELOAD_FLAG: &str = "preload";
/// Value that keeps the viewer from fetching the full model up front.
const PRELOAD_DATA_SAVER: &str = "0";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmbedUrlError {
    #[error("embed url could not be parsed: {0}")]
    Unparseable(#[from] url::ParseError),
    #[error("embed url has no host")]
    MissingHost,
    #[error("embed url has no models/<id> segment")]
    MissingModelId,
}

/// A parsed embed endpoint of the form `https://<host>/models/<id>/embed?<flags>`.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedSource {
    url: Url,
    model_id: String,
}

impl EmbedSource {
    pub fn parse(source: &str) -> Result<Self, EmbedUrlError> {
        let url = Url::parse(source)?;
        let model_id = model_id_of(&url).ok_or(EmbedUrlError::MissingModelId)?;
        if url.host_str().is_none() {
            return Err(EmbedUrlError::MissingHost);
        }
        Ok(Self { url, model_id })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// `https://img.<host>/i/<id>/max.jpg`
    pub fn thumbnail_url(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);
        format!("https://img.{}/i/{}/max.jpg", host, self.model_id)
    }
}

/// The text after the first `models/` in the path, up to the next `/`.
fn model_id_of(url: &Url) -> Option<String> {
    let path = url.path();
    let start = path.find(MODELS_MARKER)? + MODELS_MARKER.len();
    path[start..]
        .split('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Forces the `preload` flag to its data-saving value and leaves every other
/// query pair exactly as written. Unparseable input is returned verbatim.
pub fn with_data_saving_preload(source: &str) -> String {
    let mut url = match Url::parse(source) {
        Ok(url) => url,
        Err(_) => return source.to_string(),
    };

    let mut found = false;
    let mut pairs: Vec<String> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            if key == PRELOAD_FLAG {
                found = true;
                format!("{}={}", PRELOAD_FLAG, PRELOAD_DATA_SAVER)
            } else {
                pair.to_string()
            }
        })
        .collect();
    if !found {
        pairs.push(format!("{}={}", PRELOAD_FLAG, PRELOAD_DATA_SAVER));
    }

    url.set_query(Some(&pairs.join("&")));
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONDA_R: &str = "https://sketchfab.com/models/6cf8c75a54794fdf895c2d005cbde426/embed?autospin=1&autostart=1&preload=1&dnt=1&transparent=1&ui_infos=0&ui_controls=0&ui_stop=0&ui_watermark=0";

    #[test]
    fn parses_model_id_and_derives_thumbnail() {
        let source = EmbedSource::parse(ZONDA_R).unwrap();
        assert_eq!(source.model_id(), "6cf8c75a54794fdf895c2d005cbde426");
        assert_eq!(
            source.thumbnail_url(),
            "https://img.sketchfab.com/i/6cf8c75a54794fdf895c2d005cbde426/max.jpg"
        );
    }

    #[test]
    fn thumbnail_host_drops_www_prefix() {
        let source = EmbedSource::parse("https://www.sketchfab.com/models/abc/embed").unwrap();
        assert_eq!(source.thumbnail_url(), "https://img.sketchfab.com/i/abc/max.jpg");
    }

    #[test]
    fn models_marker_matches_inside_longer_segments() {
        let source =
            EmbedSource::parse("https://sketchfab.com/3d-models/abc123/embed?preload=1").unwrap();
        assert_eq!(source.model_id(), "abc123");
        assert_eq!(source.thumbnail_url(), "https://img.sketchfab.com/i/abc123/max.jpg");
    }

    #[test]
    fn missing_or_empty_model_id_is_rejected() {
        assert_eq!(
            EmbedSource::parse("https://sketchfab.com/viewer/abc/embed"),
            Err(EmbedUrlError::MissingModelId)
        );
        assert_eq!(
            EmbedSource::parse("https://sketchfab.com/models/"),
            Err(EmbedUrlError::MissingModelId)
        );
        assert_eq!(
            EmbedSource::parse("https://sketchfab.com/models//embed"),
            Err(EmbedUrlError::MissingModelId)
        );
    }

    #[test]
    fn garbage_is_unparseable() {
        assert!(matches!(
            EmbedSource::parse("not a url"),
            Err(EmbedUrlError::Unparseable(_))
        ));
    }

    #[test]
    fn data_saving_rewrites_only_preload() {
        let rewritten = with_data_saving_preload(ZONDA_R);
        assert_eq!(
            rewritten,
            "https://sketchfab.com/models/6cf8c75a54794fdf895c2d005cbde426/embed?autospin=1&autostart=1&preload=0&dnt=1&transparent=1&ui_infos=0&ui_controls=0&ui_stop=0&ui_watermark=0"
        );
    }

    #[test]
    fn data_saving_appends_missing_preload() {
        assert_eq!(
            with_data_saving_preload("https://sketchfab.com/models/abc/embed?autostart=1"),
            "https://sketchfab.com/models/abc/embed?autostart=1&preload=0"
        );
    }

    #[test]
    fn data_saving_keeps_unparseable_input() {
        assert_eq!(with_data_saving_preload("::nope::"), "::nope::");
    }
}
