use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ledwall::{
    calculate, init_logging, load_models, AspectFormat, LengthUnit, PanelCatalog, SizingReport,
    SizingRequest, BUILD_DATE, VERSION,
};

/// LED video-wall sizing calculator
#[derive(Parser, Debug)]
#[command(name = "ledwall")]
#[command(version)]
#[command(about = "Size an LED video-wall installation", long_about = None)]
struct Args {
    /// Panel model name from the catalog
    #[arg(short, long, default_value = "CRYSTAL 1.9MM")]
    model: String,

    /// Wall width in the selected unit
    #[arg(short = 'W', long, default_value_t = 1.0)]
    width: f64,

    /// Wall height in the selected unit
    #[arg(short = 'H', long, default_value_t = 1.0)]
    height: f64,

    /// Input unit (meters, mm, inches, feet)
    #[arg(short, long, default_value = "meters")]
    unit: String,

    /// Arc diameter in the selected unit (enables arc sizing)
    #[arg(long)]
    arc_diameter: Option<f64>,

    /// Arc angle in degrees, within (0, 360]
    #[arg(long, default_value_t = 360.0)]
    arc_degrees: f64,

    /// Report the aspect ratio as a decimal instead of a reduced ratio
    #[arg(long)]
    decimal_aspect: bool,

    /// Extra panel model definitions (JSON or TOML file)
    #[arg(long, value_name = "FILE")]
    models: Option<PathBuf>,

    /// List catalog models and exit
    #[arg(short, long)]
    list_models: bool,

    /// Write a printable report to this file
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = Args::parse();

    let mut catalog = PanelCatalog::builtin();
    if let Some(path) = &args.models {
        let extra = load_models(path)
            .with_context(|| format!("loading panel models from {}", path.display()))?;
        catalog = catalog.with_models(extra)?;
    }

    if args.list_models {
        for model in catalog.iter() {
            let curved = if model.is_curved { "  curved" } else { "" };
            println!(
                "{:<20} {:>4.0} px/cab  {:>4.0} W  {:>5.1} kg  {}{}",
                model.name,
                model.pixel_density,
                model.power_per_cabinet_w,
                model.weight_per_cabinet_kg,
                model.cabinet_size,
                curved
            );
        }
        return Ok(());
    }

    let unit: LengthUnit = args.unit.parse()?;

    let mut request = SizingRequest::new(&args.model, args.width, args.height, unit);
    if args.decimal_aspect {
        request = request.with_aspect_format(AspectFormat::Decimal);
    }
    if let Some(diameter) = args.arc_diameter {
        request = request.with_arc(diameter, args.arc_degrees);
    }

    let result = calculate(&catalog, &request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Model:         {}", request.model);
        println!(
            "Wall:          {} x {} {}",
            request.width,
            request.height,
            unit.label()
        );
        println!(
            "Resolution:    {} x {} px",
            result.total_width_pixels, result.total_height_pixels
        );
        println!("Cabinets:      {}", result.total_cabinets);
        println!("Power:         {:.0} W", result.total_power_watts);
        println!("Weight:        {:.1} kg", result.total_weight_kg);
        println!("Aspect ratio:  {}", result.aspect_ratio);
        if let Some(count) = result.arc_cabinet_count {
            println!("Arc cabinets:  {}", count);
        }
    }

    if let Some(path) = &args.report {
        SizingReport::new(request, result)
            .with_generator(format!("ledwall {} ({})", VERSION, BUILD_DATE))
            .save(path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
