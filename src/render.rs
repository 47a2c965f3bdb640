use crate::error::{Error, Result};
use crate::layout::ChartLayout;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Color used for any series without a usable configured color.
pub const FALLBACK_COLOR: RGBColor = RGBColor(128, 128, 128);

const LINE_HEIGHT: i32 = 16;

/// Draws a finished layout somewhere and reports where it went.
pub trait Renderer {
    fn render(&self, layout: &ChartLayout, colors: &ColorMap) -> Result<PathBuf>;
}

/// Series name to display color.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    colors: HashMap<String, RGBColor>,
}

impl ColorMap {
    /// Parse `#rrggbb` strings. Entries that do not parse are dropped with a
    /// warning and later resolve to [`FALLBACK_COLOR`].
    pub fn from_config(colors: &HashMap<String, String>) -> Self {
        let colors = colors
            .iter()
            .filter_map(|(series, hex)| match parse_hex_color(hex) {
                Some(color) => Some((series.clone(), color)),
                None => {
                    warn!("Ignoring invalid color '{}' for series '{}'", hex, series);
                    None
                }
            })
            .collect();
        Self { colors }
    }

    pub fn get(&self, series: &str) -> RGBColor {
        self.colors.get(series).copied().unwrap_or(FALLBACK_COLOR)
    }
}

pub fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Writes `<output_dir>/<layout name>.svg` using the plotters SVG backend.
pub struct SvgRenderer {
    output_dir: PathBuf,
}

impl SvgRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, layout: &ChartLayout, colors: &ColorMap) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.svg", layout.name));
        draw_chart(layout, colors, &path)
            .map_err(|err| Error::Render(format!("{}: {}", layout.name, err)))?;
        debug!("Rendered {} to {}", layout.name, path.display());
        Ok(path)
    }
}

fn draw_chart(
    layout: &ChartLayout,
    colors: &ColorMap,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, layout.size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = x_bounds(layout);
    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_upper_bound(layout))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .y_desc(layout.y_label.as_str())
        .draw()?;

    // Layout order is paint order: overlays come after what they cover.
    chart.draw_series(layout.bars.iter().map(|bar| {
        let half = bar.width / 2.0;
        Rectangle::new(
            [(bar.x - half, bar.bottom), (bar.x + half, bar.top())],
            colors.get(&bar.series).filled(),
        )
    }))?;

    for entry in &layout.legend {
        let color = colors.get(&entry.series);
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
            .label(entry.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    let annotation_style = TextStyle::from(("sans-serif", 13).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    for annotation in &layout.annotations {
        let (px, py) = chart.backend_coord(&(annotation.x, annotation.y));
        let lines: Vec<&str> = annotation.text.lines().collect();
        for (k, line) in lines.iter().rev().enumerate() {
            root.draw(&Text::new(
                line.to_string(),
                (px, py - k as i32 * LINE_HEIGHT),
                annotation_style.clone(),
            ))?;
        }
    }

    let tick_style =
        TextStyle::from(("sans-serif", 12).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    for tick in &layout.ticks {
        let (px, py) = chart.backend_coord(&(tick.x, 0.0));
        for (k, line) in tick.lines.iter().enumerate() {
            root.draw(&Text::new(
                line.clone(),
                (px, py + 8 + k as i32 * LINE_HEIGHT),
                tick_style.clone(),
            ))?;
        }
    }

    if !layout.legend.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

fn x_bounds(layout: &ChartLayout) -> (f64, f64) {
    let lo = layout
        .bars
        .iter()
        .map(|bar| bar.x - bar.width / 2.0)
        .fold(f64::INFINITY, f64::min);
    let hi = layout
        .bars
        .iter()
        .map(|bar| bar.x + bar.width / 2.0)
        .fold(f64::NEG_INFINITY, f64::max);
    if lo.is_finite() && hi.is_finite() {
        (lo - 0.2, hi + 0.2)
    } else {
        (-1.0, 1.0)
    }
}

/// Explicit limit when the layout sets one, otherwise 10% above the highest
/// bar or annotation anchor. Never below 1 so an all-zero chart still has an axis.
fn y_upper_bound(layout: &ChartLayout) -> f64 {
    let auto = || {
        let bar_top = layout.bars.iter().map(|b| b.top()).fold(0.0, f64::max);
        let text_top = layout.annotations.iter().map(|a| a.y).fold(0.0, f64::max);
        bar_top.max(text_top) * 1.1
    };
    layout
        .y_max
        .filter(|y| *y > 0.0)
        .unwrap_or_else(auto)
        .max(1.0)
}
