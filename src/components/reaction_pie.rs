//! Reaction Breakdown
//!
//! Donut chart of reaction counts on HTML5 Canvas, one segment per reaction
//! category, plus an HTML legend duplicating the name/value/color triples.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::data::{use_dashboard_data, Reaction};
use crate::theme;

/// Gap between segments, in radians on each side.
const SEGMENT_GAP: f64 = 0.04;

/// Donut chart with labelled segments
#[component]
pub fn ReactionPie() -> impl IntoView {
    let data = use_dashboard_data();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let reactions = data.reactions.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &reactions);
        }
    });

    view! {
        <div>
            <div class="flex items-center justify-center">
                <canvas
                    node_ref=canvas_ref
                    width="300"
                    height="300"
                    class="max-w-full"
                />
            </div>

            // Legend rows: swatch, name, count
            <div class="mt-6 space-y-2">
                {data.reactions
                    .iter()
                    .map(|r| {
                        view! {
                            <div class="flex items-center justify-between">
                                <div class="flex items-center gap-3">
                                    <div style=format!(
                                        "width: 14px; height: 14px; border-radius: 3px; background: {}",
                                        theme::reaction_color(&r.name),
                                    ) />
                                    <div style=format!("color: {}", theme::PRIMARY_TEXT)>
                                        {r.name.clone()}
                                    </div>
                                </div>
                                <div style=format!("color: {}", theme::SECONDARY_TEXT)>
                                    {r.value}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Start/end angle for each value, proportional to its share of the total.
/// Segments begin at twelve o'clock and run clockwise. A zero total yields
/// no segments.
pub(crate) fn pie_angles(values: &[u32]) -> Vec<(f64, f64)> {
    let total: u64 = values.iter().map(|v| u64::from(*v)).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -std::f64::consts::FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let sweep = u64::from(*v) as f64 / total as f64 * std::f64::consts::TAU;
            let segment = (start, start + sweep);
            start += sweep;
            segment
        })
        .collect()
}

/// Draw the donut on canvas
fn draw_pie(canvas: &HtmlCanvasElement, reactions: &[Reaction]) {
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
    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = 90.0;
    let inner = 45.0;

    ctx.set_fill_style(&theme::CARD.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let values: Vec<u32> = reactions.iter().map(|r| r.value).collect();
    let segments = pie_angles(&values);

    if segments.is_empty() {
        ctx.set_fill_style(&theme::NEUTRAL_GRAY.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No reactions", cx - 40.0, cy);
        return;
    }

    for (reaction, (start, end)) in reactions.iter().zip(&segments) {
        // Shrink both ends slightly so adjacent segments read separately
        let gap = if segments.len() > 1 && end - start > 2.0 * SEGMENT_GAP {
            SEGMENT_GAP
        } else {
            0.0
        };
        let a0 = start + gap;
        let a1 = end - gap;

        ctx.set_fill_style(&theme::reaction_color(&reaction.name).into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, a0, a1);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, a1, a0, true);
        ctx.close_path();
        ctx.fill();

        // "name: value" label just outside the mid-angle
        let mid = (start + end) / 2.0;
        let label_x = cx + mid.cos() * (outer + 12.0);
        let label_y = cy + mid.sin() * (outer + 12.0);
        ctx.set_fill_style(&theme::PRIMARY_TEXT.into());
        ctx.set_font("12px sans-serif");
        ctx.set_text_align(if mid.cos() < 0.0 { "right" } else { "left" });
        let _ = ctx.fill_text(&format!("{}: {}", reaction.name, reaction.value), label_x, label_y);
    }
    ctx.set_text_align("start");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_segments_cover_the_full_circle() {
        let segments = pie_angles(&[38, 24, 12, 8]);
        assert_eq!(segments.len(), 4);
        let swept: f64 = segments.iter().map(|(a0, a1)| a1 - a0).sum();
        assert!((swept - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_segments_proportional_and_contiguous() {
        let segments = pie_angles(&[38, 24, 12, 8]);
        // 38 of 82 of the circle for the first segment
        let first_sweep = segments[0].1 - segments[0].0;
        assert!((first_sweep - 38.0 / 82.0 * TAU).abs() < 1e-9);
        // each segment starts where the previous one ends
        for pair in segments.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_and_zero_total_yield_no_segments() {
        assert!(pie_angles(&[]).is_empty());
        assert!(pie_angles(&[0, 0]).is_empty());
    }

    #[test]
    fn test_zero_value_segment_is_degenerate_not_negative() {
        let segments = pie_angles(&[10, 0, 10]);
        let sweep = segments[1].1 - segments[1].0;
        assert_eq!(sweep, 0.0);
    }
}
