use spotbot_core::model::{ChartDataset, ChartError, ChartSlice, SliceGeometry, slice_color};

const CENTER: f64 = 100.0;
const RADIUS: f64 = 90.0;
const LABEL_RADIUS: f64 = 52.0;

/// One wedge ready to draw: an SVG path, its fill, and a centered label.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSliceVm {
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub label_x: String,
    pub label_y: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartVm {
    pub slices: Vec<ChartSliceVm>,
    pub view_box: &'static str,
}

/// Lay the dataset out as drawable wedges.
///
/// # Errors
///
/// Propagates dataset validation failures; the caller substitutes a
/// plain-text placeholder instead of the visual.
pub fn map_chart(slices: Vec<ChartSlice>) -> Result<ChartVm, ChartError> {
    let dataset = ChartDataset::new(slices)?;
    let slices = dataset
        .layout()
        .iter()
        .enumerate()
        .map(|(index, geometry)| {
            let mid_angle = geometry.start_angle() + geometry.sweep_angle() / 2.0;
            let (label_x, label_y) = polar(mid_angle, LABEL_RADIUS);
            ChartSliceVm {
                path: wedge_path(geometry),
                color: slice_color(geometry.label(), index),
                label: geometry.display_label(),
                label_x: format!("{label_x:.1}"),
                label_y: format!("{label_y:.1}"),
            }
        })
        .collect();

    Ok(ChartVm {
        slices,
        view_box: "0 0 200 200",
    })
}

// Angles are degrees clockwise from twelve o'clock, matching the
// layout's 0-to-360 turn.
fn polar(angle_deg: f64, radius: f64) -> (f64, f64) {
    let radians = (angle_deg - 90.0).to_radians();
    (
        CENTER + radius * radians.cos(),
        CENTER + radius * radians.sin(),
    )
}

fn wedge_path(geometry: &SliceGeometry) -> String {
    // A single arc cannot span the full turn; a whole-circle slice is
    // drawn as two half arcs instead.
    if geometry.sweep_angle() >= 360.0 - 1e-9 {
        let top = CENTER - RADIUS;
        let bottom = CENTER + RADIUS;
        return format!(
            "M {CENTER:.2} {top:.2} \
             A {RADIUS:.2} {RADIUS:.2} 0 1 1 {CENTER:.2} {bottom:.2} \
             A {RADIUS:.2} {RADIUS:.2} 0 1 1 {CENTER:.2} {top:.2} Z"
        );
    }

    let (start_x, start_y) = polar(geometry.start_angle(), RADIUS);
    let (end_x, end_y) = polar(geometry.start_angle() + geometry.sweep_angle(), RADIUS);
    let large_arc = i32::from(geometry.sweep_angle() > 180.0);
    format!(
        "M {CENTER:.2} {CENTER:.2} L {start_x:.2} {start_y:.2} \
         A {RADIUS:.2} {RADIUS:.2} 0 {large_arc} 1 {end_x:.2} {end_y:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotbot_core::model::content_split;

    #[test]
    fn maps_the_page_dataset_to_two_labeled_wedges() {
        let vm = map_chart(content_split()).unwrap();

        assert_eq!(vm.slices.len(), 2);
        assert_eq!(vm.slices[0].label, "Human (96.8%)");
        assert_eq!(vm.slices[1].label, "Bot (3.2%)");
        assert_eq!(vm.slices[0].color, "#4c8bf5");
        assert_eq!(vm.slices[1].color, "#ef5a5a");
        for slice in &vm.slices {
            assert!(slice.path.starts_with("M "));
            assert!(slice.path.contains(" A "));
            assert!(slice.path.ends_with('Z'));
        }
    }

    #[test]
    fn majority_slice_uses_the_large_arc_flag() {
        let vm = map_chart(content_split()).unwrap();
        assert!(vm.slices[0].path.contains(" 1 1 "));
        assert!(vm.slices[1].path.contains(" 0 1 "));
    }

    #[test]
    fn single_slice_draws_a_whole_circle() {
        let vm = map_chart(vec![ChartSlice::new("Human", 42.0)]).unwrap();
        assert_eq!(vm.slices.len(), 1);
        // two arcs, no line segment through the center
        assert_eq!(vm.slices[0].path.matches(" A ").count(), 2);
        assert!(!vm.slices[0].path.contains(" L "));
    }

    #[test]
    fn labels_sit_inside_the_pie() {
        let vm = map_chart(content_split()).unwrap();
        for slice in &vm.slices {
            let x: f64 = slice.label_x.parse().unwrap();
            let y: f64 = slice.label_y.parse().unwrap();
            assert!((x - CENTER).hypot(y - CENTER) <= RADIUS);
        }
    }

    #[test]
    fn invalid_datasets_are_reported_not_drawn() {
        assert!(matches!(map_chart(Vec::new()), Err(ChartError::Empty)));
        let err = map_chart(vec![
            ChartSlice::new("Human", 0.0),
            ChartSlice::new("Bot", 0.0),
        ])
        .unwrap_err();
        assert!(matches!(err, ChartError::ZeroTotal));
    }
}
