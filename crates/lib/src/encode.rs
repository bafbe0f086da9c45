//! Text encoding of a finished stack document.

use thiserror::Error;

use crate::compose::StackDocument;

/// Text format for an encoded document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
  #[default]
  Yaml,
  Json,
}

#[derive(Debug, Error)]
pub enum EncodeError {
  #[error("failed to encode YAML: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("failed to encode JSON: {0}")]
  Json(#[from] serde_json::Error),
}

/// Encode `document` as a YAML stack file.
pub fn to_yaml(document: &StackDocument) -> Result<String, EncodeError> {
  Ok(serde_yaml::to_string(document)?)
}

/// Encode `document` as pretty-printed JSON.
pub fn to_json(document: &StackDocument) -> Result<String, EncodeError> {
  Ok(serde_json::to_string_pretty(document)?)
}

pub fn encode(document: &StackDocument, format: OutputFormat) -> Result<String, EncodeError> {
  match format {
    OutputFormat::Yaml => to_yaml(document),
    OutputFormat::Json => to_json(document),
  }
}
