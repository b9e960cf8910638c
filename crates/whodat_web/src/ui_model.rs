//! UI models that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! page inventory, the reveal captions and the chart geometry on the host.

use whodat::float_fmt::fmt_money;
use whodat::pricing::ChartPoint;
use whodat::reveal::{RevealFlow, RevealPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Reveal,
    Calculator,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Reveal => "Who's That Pokémon?",
            Page::Calculator => "Toy Calculator",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Reveal => "❓",
            Page::Calculator => "🧮",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Reveal, Page::Calculator]
    }
}

/// Heading above the sprite.
pub fn reveal_caption(flow: &RevealFlow) -> String {
    match flow.phase() {
        RevealPhase::Loading => "Loading…".to_string(),
        RevealPhase::Failed(_) => "No Pokémon this time".to_string(),
        RevealPhase::Ready(item) if flow.is_revealed() => format!("It's {}!", item.display_name()),
        RevealPhase::Ready(_) => "Who's that Pokémon?".to_string(),
    }
}

/// Alt text must not give the answer away before the reveal.
pub fn sprite_alt(flow: &RevealFlow) -> String {
    match flow.item() {
        Some(item) if flow.is_revealed() => item.display_name(),
        Some(_) => "Mystery Pokémon silhouette".to_string(),
        None => String::new(),
    }
}

/// CSS classes for the sprite; `hidden` renders a black silhouette, `revealed`
/// runs the pop-in animation (see `index.html`).
pub fn sprite_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal-sprite revealed"
    } else {
        "reveal-sprite hidden"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBar {
    InitialCost,
    FinalPrice,
}

impl ChartBar {
    pub fn label(self) -> &'static str {
        match self {
            ChartBar::InitialCost => "Initial Cost",
            ChartBar::FinalPrice => "Final Price",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ChartBar::InitialCost => "#2563eb",
            ChartBar::FinalPrice => "#10b981",
        }
    }

    pub fn value(self, point: &ChartPoint) -> f64 {
        match self {
            ChartBar::InitialCost => point.initial_cost,
            ChartBar::FinalPrice => point.final_price,
        }
    }

    pub fn all() -> &'static [ChartBar] {
        &[ChartBar::InitialCost, ChartBar::FinalPrice]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical bars scaled against the largest value. Bars sit on a baseline
/// `bottom_pad` above the canvas bottom and grow at most up to `top_pad`.
///
/// Negative and non-finite values get a zero-height bar.
pub fn layout_bars(values: &[f64], width: f64, height: f64, top_pad: f64, bottom_pad: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let n = values.len() as f64;
    let slot = width / n;
    let bar_width = slot * 0.5;
    let gap = (slot - bar_width) / 2.0;
    let baseline = height - bottom_pad;
    let usable = (baseline - top_pad).max(0.0);

    let max_val = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.01f64, f64::max);

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let norm = if v.is_finite() {
                (v / max_val).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let bar_h = norm * usable;
            BarRect {
                x: (i as f64) * slot + gap,
                y: baseline - bar_h,
                width: bar_width,
                height: bar_h,
            }
        })
        .collect()
}

/// Index of the bar whose horizontal extent contains `x`.
pub fn bar_at(rects: &[BarRect], x: f64) -> Option<usize> {
    rects.iter().position(|r| x >= r.x && x <= r.x + r.width)
}

/// One line per bar, e.g. `Initial Cost: $105.00`.
pub fn chart_readout(point: &ChartPoint) -> String {
    ChartBar::all()
        .iter()
        .map(|b| format!("{}: {}", b.label(), fmt_money(b.value(point))))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use whodat::catalog::CatalogItem;
    use whodat::error::FetchError;

    #[test]
    fn page_inventory_is_stable() {
        let all = Page::all();
        assert_eq!(all.len(), 2);
        assert_eq!(Page::default(), Page::Reveal);
        for p in all {
            assert!(!p.label().trim().is_empty());
            assert!(!p.icon().trim().is_empty());
        }
    }

    #[test]
    fn caption_follows_the_flow() {
        let mut flow = RevealFlow::new();
        assert_eq!(reveal_caption(&flow), "Loading…");

        let t = flow.begin_fetch();
        flow.finish_fetch(t, Ok(CatalogItem::new(122, "mr-mime", "https://img.test/122.png")));
        assert_eq!(reveal_caption(&flow), "Who's that Pokémon?");
        assert_eq!(sprite_alt(&flow), "Mystery Pokémon silhouette");

        flow.reveal();
        assert_eq!(reveal_caption(&flow), "It's Mr Mime!");
        assert_eq!(sprite_alt(&flow), "Mr Mime");

        let t = flow.begin_fetch();
        flow.finish_fetch(t, Err(FetchError::EmptyCatalog));
        assert_eq!(reveal_caption(&flow), "No Pokémon this time");
        assert_eq!(sprite_alt(&flow), "");
    }

    #[test]
    fn sprite_class_switches_on_reveal() {
        assert!(sprite_class(false).contains("hidden"));
        assert!(sprite_class(true).contains("revealed"));
    }

    #[test]
    fn chart_bars_read_the_point() {
        let p = ChartPoint {
            initial_cost: 105.0,
            final_price: 190.0,
        };
        assert_eq!(ChartBar::InitialCost.value(&p), 105.0);
        assert_eq!(ChartBar::FinalPrice.value(&p), 190.0);
        assert_eq!(ChartBar::all().len(), 2);
    }

    #[test]
    fn tallest_bar_fills_the_usable_height() {
        let bars = layout_bars(&[50.0, 100.0], 400.0, 300.0, 20.0, 30.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height, 250.0);
        assert_eq!(bars[1].y, 20.0);
        assert_eq!(bars[0].height, 125.0);
        assert!(bars[0].x < bars[1].x);
        assert!(bars[0].x + bars[0].width <= bars[1].x);
    }

    #[test]
    fn bad_values_get_flat_bars() {
        let bars = layout_bars(&[f64::NAN, -5.0, 10.0], 300.0, 200.0, 10.0, 10.0);
        assert_eq!(bars[0].height, 0.0);
        assert_eq!(bars[1].height, 0.0);
        assert_eq!(bars[2].height, 180.0);
    }

    #[test]
    fn all_zero_values_stay_flat() {
        let bars = layout_bars(&[0.0, 0.0], 200.0, 100.0, 0.0, 0.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 100.0));
        assert!(layout_bars(&[], 200.0, 100.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn hit_test_finds_the_bar_under_the_pointer() {
        let bars = layout_bars(&[50.0, 100.0], 400.0, 300.0, 20.0, 30.0);
        assert_eq!(bar_at(&bars, bars[0].x + 1.0), Some(0));
        assert_eq!(bar_at(&bars, bars[1].x + bars[1].width), Some(1));
        assert_eq!(bar_at(&bars, 0.0), None);
        assert_eq!(bar_at(&bars, 399.0), None);
    }

    #[test]
    fn readout_lists_both_series_in_dollars() {
        let p = ChartPoint {
            initial_cost: 105.0,
            final_price: f64::NAN,
        };
        assert_eq!(chart_readout(&p), "Initial Cost: $105.00\nFinal Price: $NaN");
    }
}
