use leptos::html::Canvas;
use leptos::prelude::*;
use whodat::float_fmt::fmt_f64_fixed;
use whodat::pricing::{parse_numeric_input, PriceField, PriceSheet};

use crate::ui_model::{chart_readout, ChartBar};

use super::charts::{bar_under_pointer, draw_price_bars};
use super::console;

#[component]
pub(super) fn CalculatorPage() -> impl IntoView {
    let sheet = RwSignal::new(PriceSheet::default());
    let canvas_ref = NodeRef::<Canvas>::new();
    let hovered = RwSignal::new(None::<ChartBar>);

    let final_price = Memo::new(move |_| sheet.with(|s| s.final_price()));
    let point = Memo::new(move |_| sheet.with(|s| s.chart()[0]));

    // Redraw whenever the point or hover changes, or the canvas mounts.
    Effect::new(move |_| {
        let p = point.get();
        let hover = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = draw_price_bars(&canvas, &p, hover) {
                console::warn(&format!("chart draw failed: {e}"));
            }
        }
    });

    view! {
        <section class="calc-page">
            <div class="calc-form">
                <h2 class="calc-title">"Plastic Toys Calculator"</h2>
                {PriceField::all()
                    .iter()
                    .map(|&field| view! { <PriceInput field=field sheet=sheet /> })
                    .collect_view()}
                <div class="field-row">
                    <label for="finalPrice">"Final Price"</label>
                    <div class="field-input">
                        <input
                            id="finalPrice"
                            type="text"
                            readonly=true
                            prop:value=move || fmt_f64_fixed(final_price.get(), 2)
                        />
                        <span class="field-suffix">"$"</span>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">"Profit Margin Visualization"</h3>
                    <p class="card-description">
                        "This graph shows the initial cost and the final price needed for the toy."
                    </p>
                </div>
                <canvas
                    class="chart-canvas"
                    node_ref=canvas_ref
                    width="480"
                    height="360"
                    title=move || chart_readout(&point.get())
                    on:mousemove=move |ev| {
                        let Some(canvas) = canvas_ref.get_untracked() else { return };
                        let bar = bar_under_pointer(&canvas, &point.get_untracked(), ev.offset_x() as f64);
                        if hovered.get_untracked() != bar {
                            hovered.set(bar);
                        }
                    }
                    on:mouseleave=move |_| hovered.set(None)
                ></canvas>
            </div>
        </section>
    }
}

/// One editable field. The input owns its text; every keystroke is parsed
/// and pushed into the sheet, and a non-numeric entry becomes NaN.
#[component]
fn PriceInput(field: PriceField, sheet: RwSignal<PriceSheet>) -> impl IntoView {
    let initial = fmt_f64_fixed(sheet.with_untracked(|s| s.inputs().get(field)), 0);

    view! {
        <div class="field-row">
            <label for=field.id()>{field.label()}</label>
            <div class="field-input">
                <input
                    id=field.id()
                    type="number"
                    value=initial
                    on:input=move |ev| {
                        let v = parse_numeric_input(&event_target_value(&ev));
                        sheet.update(|s| s.set(field, v));
                    }
                />
                <span class="field-suffix">{field.suffix()}</span>
            </div>
        </div>
    }
}
