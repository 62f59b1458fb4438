use crate::models::ColorBand;
use crate::processors::color_mapper::color_for;
use crate::settings::{MapSettings, OverlayPosition};
use crate::utils::constants::{LEGEND_SWATCH_OFFSET, LEGEND_THRESHOLDS, LEGEND_TITLE};
use crate::writers::map_surface::{MapSurface, Overlay};

/// The fixed legend bands. Each swatch is the gradient color one unit into
/// its band, so the legend stays in step with marker colors.
pub fn legend_bands() -> Vec<ColorBand> {
    LEGEND_THRESHOLDS
        .iter()
        .enumerate()
        .map(|(i, &lower)| {
            let upper = LEGEND_THRESHOLDS.get(i + 1).copied();
            ColorBand::new(lower, upper, color_for(lower + LEGEND_SWATCH_OFFSET))
        })
        .collect()
}

pub struct LegendBuilder {
    position: OverlayPosition,
}

impl LegendBuilder {
    pub fn new() -> Self {
        Self {
            position: OverlayPosition::BottomRight,
        }
    }

    pub fn from_settings(settings: &MapSettings) -> Self {
        Self {
            position: settings.legend_position,
        }
    }

    pub fn build_markup(&self) -> String {
        let rows: Vec<String> = legend_bands()
            .iter()
            .map(|band| {
                format!(
                    "<i style=\"background:{}; width: 18px; height: 18px; display: inline-block;\"></i> {}",
                    band.color,
                    band.label()
                )
            })
            .collect();

        format!("<h4>{}</h4>{}", LEGEND_TITLE, rows.join("<br>"))
    }

    pub fn build(&self) -> Overlay {
        Overlay {
            position: self.position,
            markup: self.build_markup(),
        }
    }

    /// Attach the legend overlay. Call once per surface.
    pub fn attach<M: MapSurface + ?Sized>(&self, surface: &mut M) {
        surface.add_overlay(self.build());
    }
}

impl Default for LegendBuilder {
    fn default() -> Self {
        Self::new()
    }
}
