//! Embedded image inlining
//!
//! The rasterizer can only read pixels of same-origin images. Before
//! rendering, every image in the capture region is fetched (external ones
//! through the server's image proxy) and its source swapped for a data URI.
//! A failed image is logged and left alone; it never aborts the export.

use futures::future::join_all;
use url::Url;

use crate::models::ExportConfig;
use crate::report::platform::{CaptureRegion, ImageFetcher, ImageSlot};

/// Where an image source points, relative to the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// No source at all
    Missing,
    /// Already a `data:` URI
    Inline,
    SameOrigin,
    CrossOrigin,
}

/// Absolute URL of `src` as the browser would resolve it on the page
///
/// Relative and protocol-relative (`//host/path`) locators are joined onto
/// `page_origin`; `None` when neither parses.
pub fn resolve_source(src: &str, page_origin: &str) -> Option<Url> {
    match Url::parse(src) {
        Ok(url) => Some(url),
        Err(_) => Url::parse(page_origin).ok()?.join(src).ok(),
    }
}

/// Classify `src` against the serialized `page_origin`
pub fn classify_source(src: &str, page_origin: &str) -> ImageSource {
    let src = src.trim();
    if src.is_empty() {
        return ImageSource::Missing;
    }
    if src.get(..5).is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:")) {
        return ImageSource::Inline;
    }

    // Unresolvable locators are left to the browser, relative to the page
    let Some(url) = resolve_source(src, page_origin) else {
        return ImageSource::SameOrigin;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return ImageSource::SameOrigin;
    }

    let same = match Url::parse(page_origin) {
        Ok(page) => page.origin() == url.origin(),
        Err(_) => url.origin().ascii_serialization() == page_origin.trim_end_matches('/'),
    };
    if same {
        ImageSource::SameOrigin
    } else {
        ImageSource::CrossOrigin
    }
}

/// URL of the proxy request for an external image
pub fn proxied_url(proxy_image_url: &str, src: &str) -> String {
    let separator = if proxy_image_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}url={}",
        proxy_image_url,
        separator,
        urlencoding::encode(src)
    )
}

/// URL actually requested for `src`, or `None` when nothing must be fetched
pub fn fetch_url_for(src: &str, config: &ExportConfig) -> Option<String> {
    match classify_source(src, &config.page_origin) {
        ImageSource::Missing | ImageSource::Inline => None,
        ImageSource::SameOrigin => Some(src.to_string()),
        ImageSource::CrossOrigin => match config.proxy_image_url.as_deref() {
            // The proxy runs server-side and needs a scheme for `//host/path`
            Some(proxy) if !proxy.is_empty() => {
                Some(proxied_url(proxy, &absolute_source(src, &config.page_origin)))
            }
            _ => {
                log::debug!("No image proxy configured, fetching {} directly", src);
                Some(src.to_string())
            }
        },
    }
}

fn absolute_source(src: &str, page_origin: &str) -> String {
    if Url::parse(src).is_ok() {
        return src.to_string();
    }
    resolve_source(src, page_origin)
        .map(String::from)
        .unwrap_or_else(|| src.to_string())
}

/// Aggregate result of one inlining pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InlineSummary {
    pub inlined: usize,
    /// Already inline or without a source
    pub skipped: usize,
    pub failed: usize,
}

enum Attempt {
    Inlined,
    Skipped,
    Failed,
}

/// Inline every image under `region`
///
/// All fetches run concurrently; the returned future resolves once each of
/// them has settled.
pub async fn inline_external_images<C, F>(
    region: &C,
    fetcher: &F,
    config: &ExportConfig,
) -> InlineSummary
where
    C: CaptureRegion,
    F: ImageFetcher,
{
    let images = region.images();
    let attempts = join_all(images.iter().map(|image| inline_one(image, fetcher, config))).await;

    attempts
        .into_iter()
        .fold(InlineSummary::default(), |mut summary, attempt| {
            match attempt {
                Attempt::Inlined => summary.inlined += 1,
                Attempt::Skipped => summary.skipped += 1,
                Attempt::Failed => summary.failed += 1,
            }
            summary
        })
}

async fn inline_one<I, F>(image: &I, fetcher: &F, config: &ExportConfig) -> Attempt
where
    I: ImageSlot,
    F: ImageFetcher,
{
    let src = image.source();
    let Some(url) = fetch_url_for(&src, config) else {
        return Attempt::Skipped;
    };

    match fetcher.fetch(&url).await {
        Ok(fetched) => {
            image.replace_source(&fetched.to_data_uri(), &src);
            Attempt::Inlined
        }
        Err(err) => {
            log::warn!("Could not load image as base64: {} ({})", src, err);
            Attempt::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://ligapro.app";

    #[test]
    fn test_classify_data_uri() {
        assert_eq!(classify_source("data:image/png;base64,AAAA", ORIGIN), ImageSource::Inline);
        assert_eq!(classify_source("DATA:image/png;base64,AAAA", ORIGIN), ImageSource::Inline);
    }

    #[test]
    fn test_classify_same_origin() {
        assert_eq!(classify_source("https://ligapro.app/static/shield.png", ORIGIN), ImageSource::SameOrigin);
        assert_eq!(classify_source("/static/shield.png", ORIGIN), ImageSource::SameOrigin);
        assert_eq!(classify_source("https://LIGAPRO.app:443/a.png", ORIGIN), ImageSource::SameOrigin);
    }

    #[test]
    fn test_classify_cross_origin() {
        assert_eq!(classify_source("https://cdn.example.com/a.png", ORIGIN), ImageSource::CrossOrigin);
        // Same host, different scheme or port is another origin
        assert_eq!(classify_source("http://ligapro.app/a.png", ORIGIN), ImageSource::CrossOrigin);
        assert_eq!(classify_source("https://ligapro.app:8443/a.png", ORIGIN), ImageSource::CrossOrigin);
        // Origin text appearing in the path does not make it same-origin
        assert_eq!(
            classify_source("https://evil.example/https://ligapro.app/a.png", ORIGIN),
            ImageSource::CrossOrigin
        );
    }

    #[test]
    fn test_classify_protocol_relative() {
        assert_eq!(classify_source("//cdn.example.com/a.png", ORIGIN), ImageSource::CrossOrigin);
        assert_eq!(classify_source("//ligapro.app/static/a.png", ORIGIN), ImageSource::SameOrigin);
        assert_eq!(
            resolve_source("//cdn.example.com/a.png", ORIGIN).map(String::from).as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn test_protocol_relative_is_proxied_with_scheme() {
        let config = ExportConfig::new(ORIGIN).with_proxy("/proxy_image");
        assert_eq!(
            fetch_url_for("//cdn.example.com/a.png", &config).as_deref(),
            Some("/proxy_image?url=https%3A%2F%2Fcdn.example.com%2Fa.png")
        );
        assert_eq!(
            fetch_url_for("//ligapro.app/static/a.png", &config).as_deref(),
            Some("//ligapro.app/static/a.png")
        );
    }

    #[test]
    fn test_classify_missing() {
        assert_eq!(classify_source("", ORIGIN), ImageSource::Missing);
        assert_eq!(classify_source("   ", ORIGIN), ImageSource::Missing);
    }

    #[test]
    fn test_proxied_url_encodes_target() {
        assert_eq!(
            proxied_url("/proxy_image", "https://cdn.example.com/shields/a b.png?v=2"),
            "/proxy_image?url=https%3A%2F%2Fcdn.example.com%2Fshields%2Fa%20b.png%3Fv%3D2"
        );
        assert_eq!(
            proxied_url("/proxy?league=4", "https://x.io/a.png"),
            "/proxy?league=4&url=https%3A%2F%2Fx.io%2Fa.png"
        );
    }

    #[test]
    fn test_fetch_url_without_proxy_is_direct() {
        let config = ExportConfig::new(ORIGIN);
        assert_eq!(
            fetch_url_for("https://cdn.example.com/a.png", &config).as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(fetch_url_for("data:image/png;base64,AA", &config), None);
    }
}
