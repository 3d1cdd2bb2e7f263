//! # LedWall
//!
//! A sizing calculator for LED video-wall installations. Given a physical
//! target area (or an arc arrangement) and a panel model, it derives the
//! resulting pixel resolution, cabinet count, power draw, weight, and
//! aspect ratio, and can emit the summary as a printable report.
//!
//! ## Architecture
//!
//! LedWall is organized as a workspace with multiple crates:
//!
//! 1. **ledwall-paneldb** - Panel model specifications and the read-only catalog
//! 2. **ledwall-sizing** - The pure sizing engine
//! 3. **ledwall-report** - Printable report export
//! 4. **ledwall** - Command-line binary that integrates all crates

pub use ledwall_paneldb::{
    load_models, CabinetSize, ModelError, PanelCatalog, PanelDbError, PanelModel,
};

pub use ledwall_report::{ReportError, SizingReport};

pub use ledwall_sizing::{
    arc_cabinet_count, calculate, rectangular, to_meters, ArcParameters, AspectFormat,
    AspectRatio, LengthUnit, SizingError, SizingRequest, SizingResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging on stderr with RUST_LOG environment variable
/// support. Defaults to warnings only so calculator output stays clean.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
