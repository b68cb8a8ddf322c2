use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    #[error("chart dataset is empty")]
    Empty,

    #[error("slice {label:?} has a negative or non-finite count")]
    InvalidCount { label: String },

    #[error("chart dataset total is zero")]
    ZeroTotal,
}

/// One category's share of the proportion chart: a label and a raw count.
///
/// Counts need not sum to any particular total; shares are computed
/// against the dataset sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    label: String,
    count: f64,
}

impl ChartSlice {
    #[must_use]
    pub fn new(label: impl Into<String>, count: f64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn count(&self) -> f64 {
        self.count
    }
}

/// The compiled-in dataset: estimated share of public posts written by
/// people versus bots.
#[must_use]
pub fn content_split() -> Vec<ChartSlice> {
    vec![
        ChartSlice::new("Human", 96.76),
        ChartSlice::new("Bot", 3.24),
    ]
}

/// A validated, ordered dataset with a positive total.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    slices: Vec<ChartSlice>,
    total: f64,
}

impl ChartDataset {
    /// Validate a slice list into a renderable dataset.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Empty` for an empty list,
    /// `ChartError::InvalidCount` for a negative or non-finite count, and
    /// `ChartError::ZeroTotal` when the counts sum to zero.
    pub fn new(slices: Vec<ChartSlice>) -> Result<Self, ChartError> {
        if slices.is_empty() {
            return Err(ChartError::Empty);
        }
        for slice in &slices {
            if !slice.count.is_finite() || slice.count < 0.0 {
                return Err(ChartError::InvalidCount {
                    label: slice.label.clone(),
                });
            }
        }
        let total: f64 = slices.iter().map(ChartSlice::count).sum();
        if total <= 0.0 {
            return Err(ChartError::ZeroTotal);
        }

        Ok(Self { slices, total })
    }

    #[must_use]
    pub fn slices(&self) -> &[ChartSlice] {
        &self.slices
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Allocate the full turn proportionally: contiguous wedges, input
    /// order preserved, no sorting.
    #[must_use]
    pub fn layout(&self) -> Vec<SliceGeometry> {
        let mut start_angle = 0.0;
        self.slices
            .iter()
            .map(|slice| {
                let share = slice.count / self.total;
                let sweep_angle = share * 360.0;
                let geometry = SliceGeometry {
                    label: slice.label.clone(),
                    start_angle,
                    sweep_angle,
                    share,
                };
                start_angle += sweep_angle;
                geometry
            })
            .collect()
    }
}

/// One laid-out wedge: angles in degrees, share in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SliceGeometry {
    label: String,
    start_angle: f64,
    sweep_angle: f64,
    share: f64,
}

impl SliceGeometry {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    #[must_use]
    pub fn share(&self) -> f64 {
        self.share
    }

    /// Centered display label, share rounded to one decimal place.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({:.1}%)", self.label, self.share * 100.0)
    }
}

const FALLBACK_COLORS: [&str; 4] = ["#8e7cc3", "#6aa84f", "#e69138", "#45818e"];

/// Fill color for a slice: fixed mapping for the known labels, otherwise
/// deterministic by input position.
#[must_use]
pub fn slice_color(label: &str, index: usize) -> &'static str {
    match label {
        "Human" => "#4c8bf5",
        "Bot" => "#ef5a5a",
        _ => FALLBACK_COLORS[index % FALLBACK_COLORS.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn layout_allocates_the_full_turn_in_order() {
        let dataset = ChartDataset::new(content_split()).unwrap();
        let layout = dataset.layout();

        assert_eq!(layout.len(), 2);
        assert_eq!(layout[0].label(), "Human");
        assert_eq!(layout[1].label(), "Bot");
        assert!(approx_eq(layout[0].start_angle(), 0.0));
        assert!(approx_eq(layout[0].sweep_angle(), 96.76 / 100.0 * 360.0));
        assert!(approx_eq(layout[1].start_angle(), layout[0].sweep_angle()));
        let total_sweep: f64 = layout.iter().map(SliceGeometry::sweep_angle).sum();
        assert!(approx_eq(total_sweep, 360.0));
    }

    #[test]
    fn display_labels_round_to_one_decimal() {
        let dataset = ChartDataset::new(content_split()).unwrap();
        let layout = dataset.layout();

        assert_eq!(layout[0].display_label(), "Human (96.8%)");
        assert_eq!(layout[1].display_label(), "Bot (3.2%)");
    }

    #[test]
    fn counts_need_not_sum_to_one_hundred() {
        let dataset = ChartDataset::new(vec![
            ChartSlice::new("Human", 3.0),
            ChartSlice::new("Bot", 1.0),
        ])
        .unwrap();
        let layout = dataset.layout();

        assert!(approx_eq(layout[0].sweep_angle(), 270.0));
        assert_eq!(layout[0].display_label(), "Human (75.0%)");
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            ChartDataset::new(Vec::new()),
            Err(ChartError::Empty)
        ));
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = ChartDataset::new(vec![ChartSlice::new("Bot", -1.0)]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidCount { .. }));
    }

    #[test]
    fn zero_total_is_rejected() {
        let err = ChartDataset::new(vec![
            ChartSlice::new("Human", 0.0),
            ChartSlice::new("Bot", 0.0),
        ])
        .unwrap_err();
        assert!(matches!(err, ChartError::ZeroTotal));
    }

    #[test]
    fn colors_are_fixed_for_known_labels() {
        assert_eq!(slice_color("Human", 5), "#4c8bf5");
        assert_eq!(slice_color("Bot", 0), "#ef5a5a");
        assert_eq!(slice_color("Other", 0), slice_color("Other", 4));
    }
}
