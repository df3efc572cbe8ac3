//! Activity Timeline Chart
//!
//! Messages-per-day line chart using HTML5 Canvas. Points are plotted at
//! their input index, so the caller's ordering is the plotting order; date
//! labels are never parsed or sorted.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::data::{use_dashboard_data, TimelinePoint};
use crate::theme;

/// Time-series chart component for the activity timeline
#[component]
pub fn TimelineChart() -> impl IntoView {
    let data = use_dashboard_data();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_timeline(&canvas, &data.timeline);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="220"
                class="w-full h-56 rounded-lg"
            />
        </div>
    }
}

/// X coordinate for the point at `index` of `count` points, spread evenly
/// across the chart area. A single point sits in the middle.
pub(crate) fn x_position(index: usize, count: usize, left: f64, width: f64) -> f64 {
    if count <= 1 {
        return left + width / 2.0;
    }
    left + (index as f64 / (count - 1) as f64) * width
}

/// Y coordinate for `value` on a 0..=max axis (canvas y grows downward).
pub(crate) fn y_position(value: u32, max: u32, top: f64, height: f64) -> f64 {
    if max == 0 {
        return top + height;
    }
    top + (1.0 - f64::from(value) / f64::from(max)) * height
}

/// Show every n-th x label so long timelines stay legible.
pub(crate) fn label_step(count: usize) -> usize {
    count.div_ceil(8).max(1)
}

/// Draw the timeline on canvas
fn draw_timeline(canvas: &HtmlCanvasElement, points: &[TimelinePoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => {
            web_sys::console::error_1(&"2d canvas context unavailable".into());
            return;
        }
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 15.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&theme::CARD.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Y axis runs from 0 to the busiest day
    let max_messages = points.iter().map(|p| p.messages).max().unwrap_or(0).max(1);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&theme::GRID_LINE.into());
    ctx.set_line_width(1.0);
    let grid_lines = 4;
    for i in 0..=grid_lines {
        let y = margin_top + (f64::from(i) / f64::from(grid_lines)) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value =
            f64::from(max_messages) * (1.0 - f64::from(i) / f64::from(grid_lines));
        ctx.set_fill_style(&theme::SECONDARY_TEXT.into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{}", value.round() as u32), 8.0, y + 4.0);
    }

    if points.is_empty() {
        ctx.set_fill_style(&theme::NEUTRAL_GRAY.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No activity", width / 2.0 - 35.0, height / 2.0);
        return;
    }

    // Connect the points in input order
    ctx.set_stroke_style(&theme::ACCENT_BLUE.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = x_position(i, points.len(), margin_left, chart_width);
        let y = y_position(point.messages, max_messages, margin_top, chart_height);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point dots
    ctx.set_fill_style(&theme::ACCENT_BLUE.into());
    for (i, point) in points.iter().enumerate() {
        let x = x_position(i, points.len(), margin_left, chart_width);
        let y = y_position(point.messages, max_messages, margin_top, chart_height);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    // X-axis date labels, thinned on long timelines
    ctx.set_fill_style(&theme::SECONDARY_TEXT.into());
    ctx.set_font("11px sans-serif");
    let step = label_step(points.len());
    for (i, point) in points.iter().enumerate().step_by(step) {
        let x = x_position(i, points.len(), margin_left, chart_width);
        let _ = ctx.fill_text(&point.date, x - 15.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_plot_in_input_order() {
        // Deliberately shuffled date labels: x must follow the index, not
        // any parsed date value.
        let dates = ["Oct 20", "Jul 22", "Sep 16", "Aug 11"];
        let xs: Vec<f64> = (0..dates.len())
            .map(|i| x_position(i, dates.len(), 40.0, 740.0))
            .collect();
        for pair in xs.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_single_point_centered() {
        assert_eq!(x_position(0, 1, 40.0, 700.0), 390.0);
    }

    #[test]
    fn test_y_position_scales_from_baseline() {
        // value 0 sits on the baseline, max sits at the top
        assert_eq!(y_position(0, 3, 15.0, 175.0), 190.0);
        assert_eq!(y_position(3, 3, 15.0, 175.0), 15.0);
    }

    #[test]
    fn test_y_position_empty_axis() {
        assert_eq!(y_position(0, 0, 15.0, 175.0), 190.0);
    }

    #[test]
    fn test_label_step_thins_long_timelines() {
        assert_eq!(label_step(4), 1);
        assert_eq!(label_step(16), 2);
        assert_eq!(label_step(40), 5);
        assert_eq!(label_step(0), 1);
    }
}
