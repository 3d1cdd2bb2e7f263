//! Loading panel model definitions from files.
//!
//! Model files hold a `models` list in JSON or TOML, selected by file
//! extension. Loaded models pass the same validation as built-ins.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{PanelDbError, PanelDbResult};
use crate::model::PanelModel;

#[derive(Debug, Deserialize)]
struct ModelFile {
    #[serde(default)]
    models: Vec<PanelModel>,
}

/// Read panel models from a JSON or TOML file.
pub fn load_models(path: &Path) -> PanelDbResult<Vec<PanelModel>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let contents = fs::read_to_string(path)?;
    let models = match extension.as_str() {
        "json" => parse_models_json(&contents)?,
        "toml" => parse_models_toml(&contents)?,
        other => return Err(PanelDbError::UnsupportedFormat(other.to_string())),
    };
    for model in &models {
        model.validate()?;
    }
    info!(count = models.len(), file = %path.display(), "loaded panel models");
    Ok(models)
}

/// Parse a JSON model file body.
pub fn parse_models_json(input: &str) -> PanelDbResult<Vec<PanelModel>> {
    let file: ModelFile = serde_json::from_str(input)?;
    Ok(file.models)
}

/// Parse a TOML model file body.
pub fn parse_models_toml(input: &str) -> PanelDbResult<Vec<PanelModel>> {
    let file: ModelFile = toml::from_str(input)?;
    Ok(file.models)
}
