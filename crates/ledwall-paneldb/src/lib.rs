//! # LedWall Panel Database
//!
//! LED panel model specifications and the read-only catalog consumed by the
//! sizing engine. The catalog is assembled once, before any calculation, and
//! is never mutated afterwards; callers needing custom panels build their own
//! catalog (or extend the built-in one) instead of registering models at
//! runtime.

pub mod catalog;
pub mod error;
pub mod io;
pub mod model;

pub use catalog::PanelCatalog;
pub use error::{ModelError, ModelResult, PanelDbError, PanelDbResult};
pub use io::load_models;
pub use model::{CabinetSize, PanelModel};
