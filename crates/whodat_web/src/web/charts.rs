//! Canvas chart for the toy calculator.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use whodat::float_fmt::fmt_money;
use whodat::pricing::ChartPoint;

use crate::ui_model::{bar_at, layout_bars, BarRect, ChartBar};

const BG_COLOR: &str = "#ffffff";
const GRID_COLOR: &str = "rgba(100, 116, 139, 0.18)";
const TEXT_COLOR: &str = "#334155";
const MUTED_TEXT_COLOR: &str = "#64748b";
const INDICATOR_COLOR: &str = "rgba(15, 23, 42, 0.55)";

const TOP_PAD: f64 = 28.0;
const BOTTOM_PAD: f64 = 46.0;
const GRID_LINES: u32 = 4;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "get_context failed")?
        .ok_or("no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "cast failed".to_string())
}

fn bar_rects(canvas: &HtmlCanvasElement, point: &ChartPoint) -> Vec<BarRect> {
    let values: Vec<f64> = ChartBar::all().iter().map(|b| b.value(point)).collect();
    layout_bars(
        &values,
        canvas.width() as f64,
        canvas.height() as f64,
        TOP_PAD,
        BOTTOM_PAD,
    )
}

/// Bar under a pointer at `offset_x` CSS pixels from the canvas' left edge.
pub(super) fn bar_under_pointer(canvas: &HtmlCanvasElement, point: &ChartPoint, offset_x: f64) -> Option<ChartBar> {
    let css_width = canvas.client_width() as f64;
    if css_width <= 0.0 {
        return None;
    }
    let x = offset_x * canvas.width() as f64 / css_width;
    bar_at(&bar_rects(canvas, point), x).map(|i| ChartBar::all()[i])
}

/// Two bars (initial cost vs final price) with dollar labels on top, the
/// initial cost as the x-axis tick and the series names underneath. A hovered
/// bar gets a dashed indicator at its height.
pub(super) fn draw_price_bars(
    canvas: &HtmlCanvasElement,
    point: &ChartPoint,
    hovered: Option<ChartBar>,
) -> Result<(), String> {
    let ctx = context_2d(canvas)?;

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;

    ctx.set_fill_style_str(BG_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Horizontal grid only.
    let baseline = h - BOTTOM_PAD;
    let step = (baseline - TOP_PAD) / GRID_LINES as f64;
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for i in 0..=GRID_LINES {
        let y = (baseline - step * i as f64).round() + 0.5;
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
    }

    let bars = ChartBar::all();
    let rects = bar_rects(canvas, point);

    ctx.set_text_align("center");
    for (bar, rect) in bars.iter().zip(&rects) {
        let center = rect.x + rect.width / 2.0;

        ctx.set_fill_style_str(bar.color());
        ctx.set_global_alpha(if hovered.is_some_and(|b| b != *bar) { 0.55 } else { 1.0 });
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        ctx.set_global_alpha(1.0);

        ctx.set_font("bold 13px system-ui, sans-serif");
        ctx.set_fill_style_str(TEXT_COLOR);
        let _ = ctx.fill_text(&fmt_money(bar.value(point)), center, rect.y - 8.0);

        ctx.set_font("12px system-ui, sans-serif");
        ctx.set_fill_style_str(MUTED_TEXT_COLOR);
        let _ = ctx.fill_text(bar.label(), center, h - 10.0);
    }

    // The single x-axis category is the initial cost.
    ctx.set_font("11px system-ui, sans-serif");
    ctx.set_fill_style_str(MUTED_TEXT_COLOR);
    let _ = ctx.fill_text(&fmt_money(point.initial_cost), w / 2.0, baseline + 16.0);

    if let Some(rect) = hovered
        .and_then(|b| bars.iter().position(|x| *x == b))
        .and_then(|i| rects.get(i))
    {
        let y = rect.y.round() + 0.5;
        let dash = js_sys::Array::of2(&4.0.into(), &4.0.into());
        ctx.set_stroke_style_str(INDICATOR_COLOR);
        ctx.set_line_dash(&dash).map_err(|_| "set_line_dash failed")?;
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
        ctx.set_line_dash(&js_sys::Array::new())
            .map_err(|_| "set_line_dash failed")?;
    }

    Ok(())
}
