use crate::error::Result;
use crate::models::{Rejection, ValidationOutcome};
use crate::processors::coordinate_validator::classify;
use crate::readers::{DataSource, PointReader};
use crate::settings::MapSettings;
use crate::utils::progress::ProgressReporter;
use crate::writers::{LegendBuilder, MapSurface, MapView, MarkerRenderer};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineReport {
    pub total_rows: usize,
    pub rendered: usize,
    pub rejections: Vec<Rejection>,
}

impl PipelineReport {
    pub fn rejected(&self) -> usize {
        self.rejections.len()
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Pipeline Summary\n");
        summary.push_str("================\n");
        summary.push_str(&format!("Data rows: {}\n", self.total_rows));
        summary.push_str(&format!("Markers rendered: {}\n", self.rendered));
        summary.push_str(&format!("Rows rejected: {}\n", self.rejected()));

        summary
    }
}

/// Runs fetch → parse → validate → render once against a map surface.
pub struct Pipeline {
    settings: MapSettings,
    reader: PointReader,
    renderer: MarkerRenderer,
    legend: LegendBuilder,
}

impl Pipeline {
    pub fn new(settings: MapSettings) -> Self {
        let renderer = MarkerRenderer::from_settings(&settings);
        let legend = LegendBuilder::from_settings(&settings);

        Self {
            settings,
            reader: PointReader::new(),
            renderer,
            legend,
        }
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    /// Set the view and attach the legend. Done once, before any data arrives.
    pub fn prepare_surface<M: MapSurface + ?Sized>(&self, surface: &mut M) {
        surface.initialize(MapView::from_settings(&self.settings));
        self.legend.attach(surface);
    }

    /// Full run. A fetch failure ends the run with an error and nothing is
    /// rendered; bad rows are skipped and reported.
    pub async fn run<M: MapSurface + ?Sized>(
        &self,
        source: &dyn DataSource,
        surface: &mut M,
        progress: Option<&ProgressReporter>,
    ) -> Result<PipelineReport> {
        self.prepare_surface(surface);

        if let Some(p) = progress {
            p.set_message(&format!("Fetching {}...", source.describe()));
        }

        let text = match source.fetch().await {
            Ok(text) => text,
            Err(e) => {
                error!("Error fetching data from {}: {}", source.describe(), e);
                if let Some(p) = progress {
                    p.abandon_with_message("Fetch failed");
                }
                return Err(e);
            }
        };
        debug!("Fetched {} bytes from {}", text.len(), source.describe());

        if let Some(p) = progress {
            p.set_message("Rendering markers...");
        }

        let report = self.process_text(&text, surface);

        if let Some(p) = progress {
            p.finish_with_message(&format!(
                "Rendered {} of {} rows",
                report.rendered, report.total_rows
            ));
        }

        Ok(report)
    }

    /// Parse, validate and render already-fetched text, in row order.
    pub fn process_text<M: MapSurface + ?Sized>(&self, text: &str, surface: &mut M) -> PipelineReport {
        let mut report = PipelineReport::default();

        for (index, record) in self.reader.read_points(text).enumerate() {
            report.total_rows += 1;

            match classify(&record) {
                ValidationOutcome::Valid(point) => {
                    self.renderer.render(surface, &point);
                    report.rendered += 1;
                }
                ValidationOutcome::Invalid => {
                    let rejection = Rejection::new(index + 1, &record);
                    warn!("{}", rejection);
                    report.rejections.push(rejection);
                }
            }
        }

        info!(
            "Processed {} rows: {} rendered, {} rejected",
            report.total_rows,
            report.rendered,
            report.rejected()
        );

        report
    }
}
