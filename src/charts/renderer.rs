//! Scatter Chart Renderer
//! Draws labeled scatter plots with Plotters and saves them as PNG images.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{info, warn};
use plotters::prelude::*;
use polars::prelude::*;
use thiserror::Error;

use crate::charts::style::{self, Marker};

/// Column holding the class label of every row.
pub const LABEL_COLUMN: &str = "Label";

/// Canvas size in pixels, an 8x6 figure at 100 px per unit.
const FIGURE_SIZE: (u32, u32) = (800, 600);

/// Marker radius, close to a 50 px^2 marker area.
const POINT_RADIUS: i32 = 4;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("column '{0}' not found in table")]
    MissingColumn(String),
    #[error("column '{column}' cannot be plotted: {source}")]
    BadColumn {
        column: String,
        #[source]
        source: PolarsError,
    },
    #[error("failed to write chart {}: {}", .path.display(), .message)]
    Io { path: PathBuf, message: String },
}

/// Renders class-labeled scatter plots to PNG files.
pub struct ScatterRenderer;

impl ScatterRenderer {
    /// Render a scatter plot of `x_col` against `y_col`, one color and
    /// marker per distinct `Label` value, into the current working
    /// directory. Returns the path of the written image.
    pub fn render(
        df: &DataFrame,
        x_col: &str,
        y_col: &str,
        title: &str,
    ) -> Result<PathBuf, RenderError> {
        Self::render_to(df, x_col, y_col, title, Path::new("."))
    }

    /// Same as [`ScatterRenderer::render`], writing into `out_dir`.
    pub fn render_to(
        df: &DataFrame,
        x_col: &str,
        y_col: &str,
        title: &str,
        out_dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        // Column lookup happens before the backend is created, so a
        // missing column can never leave a partial file behind.
        let groups = Self::group_by_label(df, x_col, y_col)?;
        let out_path = out_dir.join(Self::image_file_name(title));

        let x_range = Self::axis_range(groups.values().flatten().map(|p| p.0));
        let y_range = Self::axis_range(groups.values().flatten().map(|p| p.1));

        {
            let root = BitMapBackend::new(&out_path, FIGURE_SIZE).into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| Self::io_error(&out_path, e))?;

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 22))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(x_range, y_range)
                .map_err(|e| Self::io_error(&out_path, e))?;

            chart
                .configure_mesh()
                .x_desc(x_col)
                .y_desc(y_col)
                .draw()
                .map_err(|e| Self::io_error(&out_path, e))?;

            // Legend heading row; Plotters has no native legend title.
            chart
                .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())
                .map_err(|e| Self::io_error(&out_path, e))?
                .label("Class")
                .legend(|(x, y)| EmptyElement::at((x, y)));

            let class_count = groups.len();
            for (index, (label, points)) in groups.iter().enumerate() {
                let (color, marker) = style::class_style(index, class_count);
                match marker {
                    Marker::FilledCircle => {
                        chart
                            .draw_series(points.iter().map(|&(x, y)| {
                                Circle::new((x, y), POINT_RADIUS, color.filled())
                            }))
                            .map_err(|e| Self::io_error(&out_path, e))?
                            .label(label.as_str())
                            .legend(move |(x, y)| {
                                Circle::new((x, y), POINT_RADIUS, color.filled())
                            });
                    }
                    Marker::FilledTriangle => {
                        chart
                            .draw_series(points.iter().map(|&(x, y)| {
                                TriangleMarker::new((x, y), POINT_RADIUS, color.filled())
                            }))
                            .map_err(|e| Self::io_error(&out_path, e))?
                            .label(label.as_str())
                            .legend(move |(x, y)| {
                                TriangleMarker::new((x, y), POINT_RADIUS, color.filled())
                            });
                    }
                    Marker::Cross => {
                        chart
                            .draw_series(points.iter().map(|&(x, y)| {
                                Cross::new((x, y), POINT_RADIUS, color.stroke_width(2))
                            }))
                            .map_err(|e| Self::io_error(&out_path, e))?
                            .label(label.as_str())
                            .legend(move |(x, y)| {
                                Cross::new((x, y), POINT_RADIUS, color.stroke_width(2))
                            });
                    }
                    Marker::HollowCircle => {
                        chart
                            .draw_series(points.iter().map(|&(x, y)| {
                                Circle::new((x, y), POINT_RADIUS, color.stroke_width(2))
                            }))
                            .map_err(|e| Self::io_error(&out_path, e))?
                            .label(label.as_str())
                            .legend(move |(x, y)| {
                                Circle::new((x, y), POINT_RADIUS, color.stroke_width(2))
                            });
                    }
                    Marker::HollowTriangle => {
                        chart
                            .draw_series(points.iter().map(|&(x, y)| {
                                TriangleMarker::new((x, y), POINT_RADIUS, color.stroke_width(2))
                            }))
                            .map_err(|e| Self::io_error(&out_path, e))?
                            .label(label.as_str())
                            .legend(move |(x, y)| {
                                TriangleMarker::new((x, y), POINT_RADIUS, color.stroke_width(2))
                            });
                    }
                }
            }

            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .background_style(&WHITE.mix(0.8))
                .position(SeriesLabelPosition::UpperRight)
                .draw()
                .map_err(|e| Self::io_error(&out_path, e))?;

            root.present().map_err(|e| Self::io_error(&out_path, e))?;
        }

        info!("wrote {}", out_path.display());
        Ok(out_path)
    }

    /// Open a rendered image with the system default viewer.
    ///
    /// Best effort: a headless host has no viewer to launch, so failures
    /// are logged and otherwise ignored.
    pub fn show(path: &Path) {
        if let Err(err) = open::that(path) {
            warn!("could not display {}: {err}", path.display());
        }
    }

    /// File name for a plot title: spaces become underscores, `.png` is
    /// appended. No other characters are rewritten.
    pub fn image_file_name(title: &str) -> String {
        format!("{}.png", title.replace(' ', "_"))
    }

    /// Group `(x, y)` points by their label value, labels in sorted
    /// order. Rows with a null or NaN coordinate or a null label are
    /// skipped.
    fn group_by_label(
        df: &DataFrame,
        x_col: &str,
        y_col: &str,
    ) -> Result<BTreeMap<String, Vec<(f64, f64)>>, RenderError> {
        let xs = Self::numeric_column(df, x_col)?;
        let ys = Self::numeric_column(df, y_col)?;
        let labels = Self::label_column(df)?;

        let mut groups: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
        for ((x, y), label) in xs.into_iter().zip(ys).zip(labels) {
            let (Some(x), Some(y), Some(label)) = (x, y, label) else {
                continue;
            };
            if x.is_nan() || y.is_nan() {
                continue;
            }
            groups.entry(label).or_default().push((x, y));
        }
        Ok(groups)
    }

    fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, RenderError> {
        let column = df
            .column(name)
            .map_err(|_| RenderError::MissingColumn(name.to_string()))?;
        let values = column
            .cast(&DataType::Float64)
            .map_err(|source| RenderError::BadColumn {
                column: name.to_string(),
                source,
            })?;
        let ca = values.f64().map_err(|source| RenderError::BadColumn {
            column: name.to_string(),
            source,
        })?;
        Ok(ca.into_iter().collect())
    }

    fn label_column(df: &DataFrame) -> Result<Vec<Option<String>>, RenderError> {
        let column = df
            .column(LABEL_COLUMN)
            .map_err(|_| RenderError::MissingColumn(LABEL_COLUMN.to_string()))?;

        Ok((0..column.len())
            .map(|i| {
                let value = column.get(i).ok()?;
                if value.is_null() {
                    None
                } else {
                    Some(value.to_string().trim_matches('"').to_string())
                }
            })
            .collect())
    }

    fn axis_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !min.is_finite() || !max.is_finite() {
            return 0.0..1.0;
        }
        let pad = if max > min { (max - min) * 0.05 } else { 0.5 };
        (min - pad)..(max + pad)
    }

    fn io_error(path: &Path, err: impl std::fmt::Display) -> RenderError {
        RenderError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
