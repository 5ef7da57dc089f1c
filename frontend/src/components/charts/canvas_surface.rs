use std::collections::HashMap;

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{ChartError, ChartKey, ChartSeries, ChartSurface, Rgb, PIE_PALETTE};
use crate::services::format::CURRENCY;

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 350;

const LABEL_COLOR: RGBColor = RGBColor(102, 126, 234);
const AXIS_COLOR: RGBColor = RGBColor(230, 230, 230);
const BOLD_GRID: RGBColor = RGBColor(245, 245, 245);
const LIGHT_GRID: RGBColor = RGBColor(250, 250, 250);

fn as_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn backend_error<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Backend(e.to_string())
}

/// A live chart bound to its canvas. Releasing wipes the canvas so the
/// slot can be redrawn or left blank.
pub struct ChartHandle {
    canvas: HtmlCanvasElement,
}

impl ChartHandle {
    fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    fn release(self) {
        let context = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
        if let Some(context) = context {
            context.clear_rect(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            );
        }
    }
}

/// Chart handles currently alive, keyed by slot.
#[derive(Default)]
pub struct ChartRegistry {
    active: HashMap<ChartKey, ChartHandle>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, key: ChartKey, handle: ChartHandle) {
        self.active.insert(key, handle);
    }

    fn take(&mut self, key: ChartKey) -> Option<ChartHandle> {
        self.active.remove(&key)
    }

    pub fn release_all(&mut self) {
        for (_, handle) in self.active.drain() {
            handle.release();
        }
    }
}

/// Production chart surface: plotters drawing onto the mounted canvases,
/// with handle bookkeeping in a registry that outlives single renders.
pub struct CanvasSurface<'a> {
    registry: &'a mut ChartRegistry,
    canvases: HashMap<ChartKey, HtmlCanvasElement>,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(
        registry: &'a mut ChartRegistry,
        canvases: HashMap<ChartKey, HtmlCanvasElement>,
    ) -> Self {
        Self { registry, canvases }
    }

    fn draw(&self, canvas: &HtmlCanvasElement, series: &ChartSeries) -> Result<(), ChartError> {
        canvas.set_width(CHART_WIDTH);
        canvas.set_height(CHART_HEIGHT);

        let backend = CanvasBackend::with_canvas_object(canvas.clone())
            .ok_or_else(|| ChartError::Backend("canvas backend unavailable".to_string()))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(backend_error)?;

        match series {
            ChartSeries::Pie { labels, values } => draw_pie(&root, labels, values)?,
            ChartSeries::Line {
                label,
                color,
                points,
            } => draw_line(&root, label, *color, points)?,
        }

        root.present().map_err(backend_error)
    }
}

impl ChartSurface for CanvasSurface<'_> {
    fn release_all(&mut self) {
        self.registry.release_all();
    }

    fn render(&mut self, key: ChartKey, series: &ChartSeries) -> Result<(), ChartError> {
        let canvas = self
            .canvases
            .get(&key)
            .ok_or(ChartError::MissingCanvas(key))?
            .clone();

        // A handle for this slot must be gone before the new chart exists.
        if let Some(previous) = self.registry.take(key) {
            previous.release();
        }

        self.draw(&canvas, series)?;
        self.registry.insert(key, ChartHandle::new(canvas));
        Ok(())
    }
}

fn draw_pie(
    root: &DrawingArea<CanvasBackend, Shift>,
    labels: &[String],
    values: &[f64],
) -> Result<(), ChartError> {
    let colors: Vec<RGBColor> = (0..values.len())
        .map(|i| as_rgb(PIE_PALETTE[i % PIE_PALETTE.len()]))
        .collect();
    let center = ((CHART_WIDTH / 2) as i32, (CHART_HEIGHT / 2) as i32);
    let radius = (CHART_HEIGHT as f64) / 2.0 - 20.0;

    let mut pie = Pie::new(&center, &radius, values, &colors, labels);
    pie.label_style(("sans-serif", 14).into_font().color(&BLACK));

    root.draw(&pie).map_err(backend_error)
}

fn draw_line(
    root: &DrawingArea<CanvasBackend, Shift>,
    label: &str,
    color: Rgb,
    points: &[(String, f64)],
) -> Result<(), ChartError> {
    let color = as_rgb(color);

    let max_value = points.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let min_value = points.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let padding = (max_value - min_value).max(1.0) * 0.1;
    let y_min = 0.0_f64.min(min_value - padding);
    let y_max = max_value + padding;
    let x_max = (points.len() as i32 - 1).max(1);

    let labels: Vec<String> = points.iter().map(|(l, _)| l.clone()).collect();

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .y_desc(label)
        .y_label_formatter(&|v| format!("{}{:.2}", CURRENCY, v))
        .x_label_formatter(&|idx| {
            labels
                .get(*idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .label_style(("sans-serif", 12, &LABEL_COLOR))
        .axis_style(&AXIS_COLOR)
        .bold_line_style(&BOLD_GRID)
        .light_line_style(&LIGHT_GRID)
        .x_labels(6)
        .y_labels(8)
        .draw()
        .map_err(backend_error)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, (_, v))| (i as i32, *v)),
            color.stroke_width(3),
        ))
        .map_err(backend_error)?;

    for (i, (_, value)) in points.iter().enumerate() {
        chart
            .draw_series(std::iter::once(Circle::new(
                (i as i32, *value),
                4,
                color.filled(),
            )))
            .map_err(backend_error)?;
    }

    Ok(())
}
