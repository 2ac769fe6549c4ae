//! Chart Style Module
//! Deterministic per-class colors and marker shapes.

use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use plotters::style::RGBColor;

/// Marker shapes cycled across class labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Marker {
    FilledCircle,
    FilledTriangle,
    Cross,
    HollowCircle,
    HollowTriangle,
}

const MARKERS: [Marker; 5] = [
    Marker::FilledCircle,
    Marker::FilledTriangle,
    Marker::Cross,
    Marker::HollowCircle,
    Marker::HollowTriangle,
];

/// Style for the class at `index` among `class_count` sorted classes.
///
/// Colors are sampled evenly along the viridis colormap, so the same
/// set of labels always gets the same color and marker assignment.
pub(super) fn class_style(index: usize, class_count: usize) -> (RGBColor, Marker) {
    let t: f32 = if class_count <= 1 {
        0.5
    } else {
        index as f32 / (class_count - 1) as f32
    };
    (ViridisRGB.get_color(t), MARKERS[index % MARKERS.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_is_deterministic() {
        for n in 1..=6 {
            for i in 0..n {
                assert_eq!(class_style(i, n), class_style(i, n));
            }
        }
    }

    #[test]
    fn classes_get_distinct_styles() {
        for n in 2..=5 {
            let styles: Vec<_> = (0..n).map(|i| class_style(i, n)).collect();
            for a in 0..n {
                for b in (a + 1)..n {
                    assert_ne!(styles[a], styles[b], "classes {a} and {b} of {n}");
                }
            }
        }
    }

    #[test]
    fn single_class_uses_mid_palette() {
        let (color, marker) = class_style(0, 1);
        assert_eq!(color, ViridisRGB.get_color(0.5f32));
        assert_eq!(marker, Marker::FilledCircle);
    }
}
