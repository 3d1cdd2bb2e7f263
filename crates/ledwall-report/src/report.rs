//! Paginated plain-text report rendering.

use std::fs;
use std::path::Path;

use chrono::Local;
use ledwall_sizing::{SizingRequest, SizingResult};
use tracing::info;

use crate::error::ReportResult;

/// Body lines per page, excluding the title block and footer.
const LINES_PER_PAGE: usize = 48;

/// A printable summary of one sizing calculation.
#[derive(Debug, Clone)]
pub struct SizingReport {
    title: String,
    generator: String,
    request: SizingRequest,
    result: SizingResult,
}

impl SizingReport {
    pub fn new(request: SizingRequest, result: SizingResult) -> Self {
        Self {
            title: "LED Video Wall Sizing Report".to_string(),
            generator: format!("ledwall-report {}", env!("CARGO_PKG_VERSION")),
            request,
            result,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the generator line, e.g. with the host application version.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// Render the report as paginated text with form feeds between pages.
    pub fn render(&self) -> String {
        paginate(&self.title, &self.body_lines())
    }

    /// Write the rendered report to `path`.
    pub fn save(&self, path: &Path) -> ReportResult<()> {
        fs::write(path, self.render())?;
        info!(file = %path.display(), "wrote sizing report");
        Ok(())
    }

    fn body_lines(&self) -> Vec<String> {
        let unit = self.request.unit.label();
        let mut lines = vec![
            format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M")),
            format!("Generator: {}", self.generator),
            String::new(),
            "Inputs".to_string(),
            "------".to_string(),
            format!("Panel model:        {}", self.request.model),
            format!("Wall width:         {} {}", self.request.width, unit),
            format!("Wall height:        {} {}", self.request.height, unit),
        ];
        if let Some(arc) = &self.request.arc {
            lines.push(format!("Arc diameter:       {} {}", arc.diameter, unit));
            lines.push(format!("Arc angle:          {} deg", arc.degrees));
        }

        lines.push(String::new());
        lines.push("Results".to_string());
        lines.push("-------".to_string());
        lines.push(format!(
            "Resolution:         {} x {} px",
            self.result.total_width_pixels, self.result.total_height_pixels
        ));
        lines.push(format!("Cabinets:           {}", self.result.total_cabinets));
        lines.push(format!(
            "Power draw:         {:.0} W",
            self.result.total_power_watts
        ));
        lines.push(format!(
            "Weight:             {:.1} kg",
            self.result.total_weight_kg
        ));
        lines.push(format!("Aspect ratio:       {}", self.result.aspect_ratio));
        if let Some(count) = self.result.arc_cabinet_count {
            lines.push(format!("Arc cabinets:       {}", count));
        }
        lines
    }
}

fn paginate(title: &str, lines: &[String]) -> String {
    let pages: Vec<&[String]> = lines.chunks(LINES_PER_PAGE).collect();
    let total_pages = pages.len().max(1);
    let mut out = String::new();

    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            // Form feed between pages for printers.
            out.push('\u{000C}');
        }
        out.push_str(title);
        out.push('\n');
        out.push_str(&"=".repeat(title.len()));
        out.push_str("\n\n");
        for line in *page {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&format!("Page {} of {}\n", index + 1, total_pages));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledwall_sizing::{AspectRatio, LengthUnit};

    fn sample() -> SizingReport {
        let request = SizingRequest::new("CRYSTAL 1.9MM", 2.0, 1.0, LengthUnit::Meters)
            .with_arc(1.0, 360.0);
        let result = SizingResult {
            total_width_pixels: 1024,
            total_height_pixels: 512,
            total_cabinets: 8,
            total_power_watts: 1200.0,
            total_weight_kg: 64.0,
            aspect_ratio: AspectRatio::Reduced {
                width: 2,
                height: 1,
            },
            arc_cabinet_count: Some(7),
        };
        SizingReport::new(request, result)
    }

    #[test]
    fn test_render_labels_all_fields() {
        let text = sample().render();
        assert!(text.contains("LED Video Wall Sizing Report"));
        assert!(text.contains("Panel model:        CRYSTAL 1.9MM"));
        assert!(text.contains("Wall width:         2 m"));
        assert!(text.contains("Resolution:         1024 x 512 px"));
        assert!(text.contains("Cabinets:           8"));
        assert!(text.contains("Power draw:         1200 W"));
        assert!(text.contains("Weight:             64.0 kg"));
        assert!(text.contains("Aspect ratio:       2:1"));
        assert!(text.contains("Arc cabinets:       7"));
        assert!(text.contains("Page 1 of 1"));
    }

    #[test]
    fn test_render_omits_absent_arc() {
        let request = SizingRequest::new("PL 4.8MM", 1.0, 1.0, LengthUnit::Meters);
        let result = SizingResult {
            total_width_pixels: 208,
            total_height_pixels: 208,
            total_cabinets: 4,
            total_power_watts: 440.0,
            total_weight_kg: 24.0,
            aspect_ratio: AspectRatio::Reduced {
                width: 1,
                height: 1,
            },
            arc_cabinet_count: None,
        };
        let text = SizingReport::new(request, result).render();
        assert!(!text.contains("Arc cabinets"));
        assert!(!text.contains("Arc diameter"));
    }

    #[test]
    fn test_custom_title_and_generator() {
        let text = sample()
            .with_title("Ballroom Wall")
            .with_generator("ledwall 9.9.9")
            .render();
        assert!(text.starts_with("Ballroom Wall\n"));
        assert!(text.contains("Generator: ledwall 9.9.9"));
    }

    #[test]
    fn test_save_writes_rendered_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        sample().save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Resolution:         1024 x 512 px"));
        assert!(written.ends_with("Page 1 of 1\n"));
    }
}
