//! Payload codecs for the architecture description.
//!
//! Descriptions are authored as YAML and shipped to the renderer in a
//! compact binary form. JSON is accepted as well.

use crate::error::{ModelError, Result};
use crate::model::Architecture;
use crate::perspective::DataFormat;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Decodes a description payload.
pub fn decode(format: DataFormat, data: &[u8]) -> Result<Architecture> {
    let arch = match format {
        DataFormat::Arc => bincode::deserialize(data)?,
        DataFormat::Json => serde_json::from_slice(data)?,
        DataFormat::Yaml => serde_yaml::from_slice(data)?,
        DataFormat::Puml => return Err(ModelError::UnsupportedDataFormat(format.to_string())),
    };
    debug!("Decoded {} payload ({} bytes)", format, data.len());
    Ok(arch)
}

/// Encodes a description into a payload.
pub fn encode(format: DataFormat, arch: &Architecture) -> Result<Vec<u8>> {
    match format {
        DataFormat::Arc => Ok(bincode::serialize(arch)?),
        DataFormat::Json => Ok(serde_json::to_vec_pretty(arch)?),
        DataFormat::Yaml => Ok(serde_yaml::to_string(arch)?.into_bytes()),
        DataFormat::Puml => Err(ModelError::UnsupportedDataFormat(format.to_string())),
    }
}

impl Architecture {
    /// Parses an `arc.yaml` document.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Loads a description file. `.json` files are read as JSON, anything
    /// else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let format = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => DataFormat::Json,
            _ => DataFormat::Yaml,
        };
        decode(format, &data)
    }

    /// Encodes the description into the binary request payload.
    pub fn encode(&self) -> Result<Vec<u8>> {
        encode(DataFormat::Arc, self)
    }
}
