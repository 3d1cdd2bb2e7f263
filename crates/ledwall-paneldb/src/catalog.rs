//! The read-only panel catalog.
//!
//! A catalog maps model names to `PanelModel` records. It is built once
//! (from the built-in table, from caller-supplied models, or both) and is
//! only read afterwards, so concurrent lookups need no coordination.

use std::collections::BTreeMap;

use crate::error::{PanelDbError, PanelDbResult};
use crate::model::{CabinetSize, PanelModel};

/// Read-only mapping from model name to panel specification.
#[derive(Debug, Clone, Default)]
pub struct PanelCatalog {
    models: BTreeMap<String, PanelModel>,
}

fn builtin_model(
    name: &str,
    pixel_density: f64,
    power_per_cabinet_w: f64,
    weight_per_cabinet_kg: f64,
    cabinet_size: CabinetSize,
    is_curved: bool,
) -> PanelModel {
    PanelModel {
        name: name.to_string(),
        pixel_density,
        power_per_cabinet_w,
        weight_per_cabinet_kg,
        cabinet_size,
        is_curved,
    }
}

impl PanelCatalog {
    /// The built-in model table.
    pub fn builtin() -> Self {
        let half_meter = CabinetSize::new(500, 500);
        let models = [
            builtin_model("CRYSTAL 1.9MM", 256.0, 150.0, 8.0, half_meter, false),
            builtin_model("Spider 2.6MM", 192.0, 140.0, 7.5, half_meter, false),
            builtin_model("HB2 2.9MM", 168.0, 130.0, 7.0, half_meter, false),
            builtin_model("BM 3.9MM", 128.0, 120.0, 6.5, half_meter, false),
            builtin_model("PL 4.8MM", 104.0, 110.0, 6.0, half_meter, false),
            builtin_model("CL 2.9MM (Curved)", 168.0, 130.0, 7.0, half_meter, true),
            builtin_model("CL 3.9MM (Curved)", 128.0, 120.0, 6.5, half_meter, true),
            builtin_model(
                "LED Standee 2.5MM",
                256.0,
                600.0,
                50.0,
                CabinetSize::new(640, 1920),
                false,
            ),
        ];
        // The table is literal data with unique names, so it skips the
        // validation path custom models go through.
        let models = models
            .into_iter()
            .map(|model| (model.name.clone(), model))
            .collect();
        Self { models }
    }

    /// Build a catalog from caller-supplied models.
    ///
    /// Each model is validated; duplicate names are rejected.
    pub fn from_models<I>(models: I) -> PanelDbResult<Self>
    where
        I: IntoIterator<Item = PanelModel>,
    {
        Self::default().with_models(models)
    }

    /// Extend this catalog with additional models, consuming it.
    ///
    /// Used to layer custom models on top of the built-in table.
    pub fn with_models<I>(mut self, models: I) -> PanelDbResult<Self>
    where
        I: IntoIterator<Item = PanelModel>,
    {
        for model in models {
            model.validate()?;
            if self.models.contains_key(&model.name) {
                return Err(PanelDbError::DuplicateModel(model.name));
            }
            self.models.insert(model.name.clone(), model);
        }
        Ok(self)
    }

    /// Look up a model by name.
    pub fn lookup(&self, name: &str) -> PanelDbResult<&PanelModel> {
        self.models
            .get(name)
            .ok_or_else(|| PanelDbError::UnknownModel(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Model names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    /// Models in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = &PanelModel> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
