use crate::models::Rgb;

/// A value interval shown as one swatch in the legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBand {
    pub lower_bound: f64,
    /// `None` for the open-ended final band.
    pub upper_bound: Option<f64>,
    pub color: Rgb,
}

impl ColorBand {
    pub fn new(lower_bound: f64, upper_bound: Option<f64>, color: Rgb) -> Self {
        Self {
            lower_bound,
            upper_bound,
            color,
        }
    }

    pub fn is_open_ended(&self) -> bool {
        self.upper_bound.is_none()
    }

    /// Half-open membership test, `[lower, upper)`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound && self.upper_bound.map_or(true, |upper| value < upper)
    }

    /// Human-readable range, e.g. `2–4` or `10+`.
    pub fn label(&self) -> String {
        match self.upper_bound {
            Some(upper) => format!("{}\u{2013}{}", self.lower_bound, upper),
            None => format!("{}+", self.lower_bound),
        }
    }
}
