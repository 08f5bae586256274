//! Category chart widget for the reports tab.
//!
//! T040: Line and bar charts over labelled series using egui_plot

use egui::{Color32, Response, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::domain::ChartPoint;

/// Chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

/// Chart over an ordered series of labelled points.
pub struct ProgressChart<'a> {
    /// Unique plot id
    id: &'a str,
    /// Series to plot, x = index
    points: &'a [ChartPoint],
    /// Line or bar
    kind: ChartKind,
    /// Series name for tooltips
    series_name: &'a str,
    /// Series color
    color: Color32,
    /// Chart height
    height: f32,
}

impl<'a> ProgressChart<'a> {
    /// Create a new chart.
    pub fn new(id: &'a str, points: &'a [ChartPoint], kind: ChartKind) -> Self {
        Self {
            id,
            points,
            kind,
            series_name: "",
            color: Color32::from_rgb(249, 115, 22),
            height: 260.0,
        }
    }

    pub fn series_name(mut self, name: &'a str) -> Self {
        self.series_name = name;
        self
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the chart in the UI.
    pub fn show(self, ui: &mut Ui) -> Response {
        if self.points.is_empty() {
            return ui.label("Нет данных");
        }

        let labels: Vec<String> = self.points.iter().map(|p| p.category.clone()).collect();
        let axis_labels = labels.clone();
        let tooltip_labels = labels;

        let plot = Plot::new(self.id)
            .height(self.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| category_at(&axis_labels, mark.value))
            .label_formatter(move |_name, value| {
                format!("{}: {}", category_at(&tooltip_labels, value.x), value.y.round())
            });

        let color = self.color;
        let name = self.series_name.to_string();
        let coords = series_coords(self.points);

        match self.kind {
            ChartKind::Line => plot
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(name.clone(), PlotPoints::new(coords.clone()))
                            .color(color)
                            .width(3.0),
                    );
                    plot_ui.points(
                        Points::new(name, PlotPoints::new(coords))
                            .color(color)
                            .radius(5.0),
                    );
                })
                .response,
            ChartKind::Bar => {
                let bars: Vec<Bar> = coords
                    .iter()
                    .map(|[x, y]| Bar::new(*x, *y).width(0.6))
                    .collect();
                plot.show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(name, bars).color(color));
                })
                .response
            }
        }
    }
}

/// Map a series to plot coordinates, one unit per category.
pub fn series_coords(points: &[ChartPoint]) -> Vec<[f64; 2]> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.value])
        .collect()
}

/// Label for an axis position; empty between categories.
fn category_at(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}
