//! Contract for the diagram rendering service.
//!
//! Rendering is a one-shot call: markup in, image bytes out. There is no
//! retry; a failed call is reported to the caller as is.

use crate::error::Result;
use crate::perspective::VisualFormat;
use std::time::Duration;

/// Default PlantUML server address.
pub const DEFAULT_RENDER_URL: &str = "http://localhost:8080";

const RENDER_TIMEOUT: Duration = Duration::from_secs(3);
const RENDER_KEEPALIVE: Duration = Duration::from_secs(3);
const RENDER_RESPONSE_TIMEOUT: Duration = Duration::from_secs(3);

/// Turns diagram markup into an image.
pub trait Renderer {
    fn render(&self, markup: &str, format: VisualFormat) -> Result<Vec<u8>>;
}

/// Connection settings for a rendering service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Base address of the service.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub keep_alive: Duration,
    pub response_timeout: Duration,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::new(DEFAULT_RENDER_URL)
    }
}

impl RenderSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            connect_timeout: RENDER_TIMEOUT,
            keep_alive: RENDER_KEEPALIVE,
            response_timeout: RENDER_RESPONSE_TIMEOUT,
        }
    }

    /// Where the markup is posted.
    pub fn submit_url(&self) -> String {
        format!("{}/form", self.endpoint)
    }

    /// Where the rendered image for `diagram_id` is fetched from.
    pub fn output_url(&self, format: VisualFormat, diagram_id: &str) -> String {
        let id = diagram_id.trim_start_matches("/uml/");
        format!("{}/{}/{}", self.endpoint, format.as_str(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    struct EchoRenderer;

    impl Renderer for EchoRenderer {
        fn render(&self, markup: &str, format: VisualFormat) -> Result<Vec<u8>> {
            if markup.is_empty() {
                return Err(ModelError::RenderFailed("empty markup".to_string()));
            }
            Ok(format!("{}:{}", format, markup.len()).into_bytes())
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = RenderSettings::default();
        assert_eq!(settings.endpoint, DEFAULT_RENDER_URL);
        assert_eq!(settings.connect_timeout, Duration::from_secs(3));
        assert_eq!(settings.keep_alive, Duration::from_secs(3));
        assert_eq!(settings.submit_url(), "http://localhost:8080/form");
    }

    #[test]
    fn test_output_url() {
        let settings = RenderSettings::new("http://puml:8080/");
        assert_eq!(
            settings.output_url(VisualFormat::Svg, "/uml/SyfFKj2r"),
            "http://puml:8080/svg/SyfFKj2r"
        );
        assert_eq!(
            settings.output_url(VisualFormat::Png, "SyfFKj2r"),
            "http://puml:8080/png/SyfFKj2r"
        );
    }

    #[test]
    fn test_renderer_contract() {
        let renderer = EchoRenderer;
        assert_eq!(
            renderer.render("@startuml", VisualFormat::Png).unwrap(),
            b"png:9".to_vec()
        );
        assert!(renderer.render("", VisualFormat::Svg).is_err());
    }
}
