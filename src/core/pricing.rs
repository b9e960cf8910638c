//! Toy pricing: base price, percentage reduction and shipping cost in, sell
//! price out.
//!
//! ```text
//! final_price = (base - base * reduction / 100 + shipping) / (1 - PROFIT_MARGIN)
//! ```
//!
//! Inputs are not validated. A reduction above 100 or a negative price goes
//! straight through the formula, and a NaN input yields a NaN price.

use serde::{Deserialize, Serialize};

/// Fraction of the sell price kept as profit.
pub const PROFIT_MARGIN: f64 = 0.5;

/// The three editable fields of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceField {
    BasePrice,
    PriceReduction,
    ShippingCost,
}

impl PriceField {
    /// Stable id, used for DOM ids and CLI names.
    pub fn id(self) -> &'static str {
        match self {
            PriceField::BasePrice => "basePrice",
            PriceField::PriceReduction => "priceReduction",
            PriceField::ShippingCost => "shippingCost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceField::BasePrice => "Base Price",
            PriceField::PriceReduction => "Price Reduction",
            PriceField::ShippingCost => "Shipping Cost",
        }
    }

    /// Unit shown after the value.
    pub fn suffix(self) -> &'static str {
        match self {
            PriceField::BasePrice | PriceField::ShippingCost => "$",
            PriceField::PriceReduction => "%",
        }
    }

    pub fn all() -> &'static [PriceField] {
        &[
            PriceField::BasePrice,
            PriceField::PriceReduction,
            PriceField::ShippingCost,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInputs {
    pub base_price: f64,
    /// Percentage, 0..=100 expected.
    pub price_reduction: f64,
    pub shipping_cost: f64,
}

impl PricingInputs {
    pub fn new(base_price: f64, price_reduction: f64, shipping_cost: f64) -> Self {
        Self {
            base_price,
            price_reduction,
            shipping_cost,
        }
    }

    pub fn get(&self, field: PriceField) -> f64 {
        match field {
            PriceField::BasePrice => self.base_price,
            PriceField::PriceReduction => self.price_reduction,
            PriceField::ShippingCost => self.shipping_cost,
        }
    }

    pub fn set(&mut self, field: PriceField, value: f64) {
        match field {
            PriceField::BasePrice => self.base_price = value,
            PriceField::PriceReduction => self.price_reduction = value,
            PriceField::ShippingCost => self.shipping_cost = value,
        }
    }

    /// What the toy costs before any margin: base price plus shipping.
    pub fn initial_cost(&self) -> f64 {
        self.base_price + self.shipping_cost
    }

    pub fn final_price(&self) -> f64 {
        let b = self.base_price;
        let reduced = b - (b * self.price_reduction) / 100.0;
        (reduced + self.shipping_cost) / (1.0 - PROFIT_MARGIN)
    }

    pub fn chart_point(&self) -> ChartPoint {
        ChartPoint {
            initial_cost: self.initial_cost(),
            final_price: self.final_price(),
        }
    }
}

/// One bar pair of the profit chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub initial_cost: f64,
    pub final_price: f64,
}

/// Calculator state: the inputs plus everything derived from them.
///
/// Derived values are rebuilt on every [`PriceSheet::set`]; the chart always
/// holds exactly one point describing the current inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSheet {
    inputs: PricingInputs,
    final_price: f64,
    chart: [ChartPoint; 1],
}

impl PriceSheet {
    pub fn new(inputs: PricingInputs) -> Self {
        Self {
            inputs,
            final_price: inputs.final_price(),
            chart: [inputs.chart_point()],
        }
    }

    pub fn set(&mut self, field: PriceField, value: f64) {
        self.inputs.set(field, value);
        self.final_price = self.inputs.final_price();
        self.chart = [self.inputs.chart_point()];
    }

    pub fn inputs(&self) -> &PricingInputs {
        &self.inputs
    }

    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    pub fn chart(&self) -> &[ChartPoint] {
        &self.chart
    }
}

impl Default for PriceSheet {
    fn default() -> Self {
        Self::new(PricingInputs::default())
    }
}

/// Parse a numeric text field the way browser `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12abc"` is 12. Text without a numeric prefix (including the empty string)
/// is NaN.
pub fn parse_numeric_input(text: &str) -> f64 {
    let s = text.trim_start();

    let (sign, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let bytes = s.as_bytes();
    let mut end = s.len() - unsigned.len();
    let mut mantissa_digits = 0usize;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        let mut frac_digits = 0usize;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            frac_digits += 1;
        }
        if mantissa_digits + frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}
