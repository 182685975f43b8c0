//! Request parameters: the perspective to draw, the image format to
//! produce and the encoding of the incoming description.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The abstraction level of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    /// Every top-level element of the application.
    Landscape,
    /// A target system and its immediate collaborators.
    Context,
    /// The containers inside a system.
    Container,
    /// The components inside a container.
    Component,
    /// Accepted on requests, but nothing is drawn at this level.
    Code,
}

impl Perspective {
    pub const ALL: [Perspective; 5] = [
        Perspective::Landscape,
        Perspective::Context,
        Perspective::Container,
        Perspective::Component,
        Perspective::Code,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Context => "context",
            Self::Container => "container",
            Self::Component => "component",
            Self::Code => "code",
        }
    }

    /// Landscape and Context diagrams show people and neighbouring systems.
    pub fn is_system_level(&self) -> bool {
        matches!(self, Self::Landscape | Self::Context)
    }
}

impl std::fmt::Display for Perspective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Perspective {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| ModelError::UnknownPerspective(s.to_string()))
    }
}

/// Image format requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualFormat {
    Png,
    Svg,
}

impl VisualFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl std::fmt::Display for VisualFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VisualFormat {
    type Err = ModelError;

    /// Only PNG and SVG are produced; PDF is recognised by callers but rejected here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err(ModelError::UnsupportedVisualFormat(s.to_string())),
        }
    }
}

/// Encoding of the description payload carried by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Compact binary encoding produced by [`crate::codec::encode`].
    Arc,
    Json,
    Yaml,
    /// Raw diagram markup. Recognised, never decoded.
    Puml,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arc => "arc",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Puml => "puml",
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arc" => Ok(Self::Arc),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "puml" => Ok(Self::Puml),
            _ => Err(ModelError::UnknownDataFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_perspective() {
        assert_eq!("context".parse::<Perspective>().unwrap(), Perspective::Context);
        assert_eq!("Landscape".parse::<Perspective>().unwrap(), Perspective::Landscape);
        assert_eq!("CODE".parse::<Perspective>().unwrap(), Perspective::Code);
        assert!(matches!(
            "deployment".parse::<Perspective>(),
            Err(ModelError::UnknownPerspective(_))
        ));
    }

    #[test]
    fn test_system_level() {
        assert!(Perspective::Landscape.is_system_level());
        assert!(Perspective::Context.is_system_level());
        assert!(!Perspective::Container.is_system_level());
        assert!(!Perspective::Component.is_system_level());
    }

    #[test]
    fn test_visual_format_rejects_pdf() {
        assert_eq!("svg".parse::<VisualFormat>().unwrap(), VisualFormat::Svg);
        assert_eq!("PNG".parse::<VisualFormat>().unwrap(), VisualFormat::Png);
        assert!(matches!(
            "pdf".parse::<VisualFormat>(),
            Err(ModelError::UnsupportedVisualFormat(_))
        ));
    }

    #[test]
    fn test_data_format() {
        assert_eq!("yml".parse::<DataFormat>().unwrap(), DataFormat::Yaml);
        assert_eq!("puml".parse::<DataFormat>().unwrap(), DataFormat::Puml);
        assert!("xml".parse::<DataFormat>().is_err());
    }
}
