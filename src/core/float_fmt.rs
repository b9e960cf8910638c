//! Fixed-decimal number rendering, matching `Number.prototype.toFixed`.
//!
//! Float `format!` has panicked on some wasm toolchain/browser combinations,
//! so finite values are scaled and rounded into an integer and only integers
//! go through the formatter.

/// `toFixed` switches to exponent notation from here on.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Above 2^53 every f64 is already an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Render `v` with exactly `decimals` fractional digits.
///
/// Non-finite values render as `NaN`, `Infinity` and `-Infinity`.
pub fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    if v.abs() >= EXPONENT_THRESHOLD {
        return exponent_notation(v);
    }

    let decimals = decimals.min(9);
    let scale = 10_u128.pow(decimals as u32);
    let abs = v.abs();

    // -0.0 prints unsigned; anything below zero keeps its sign even when it
    // rounds to zero.
    let mut out = String::new();
    if v < 0.0 {
        out.push('-');
    }

    if abs >= EXACT_INTEGER_LIMIT {
        out.push_str(&(abs as u128).to_string());
        if decimals > 0 {
            out.push('.');
            out.push_str(&"0".repeat(decimals));
        }
        return out;
    }

    let scaled = (abs * scale as f64).round() as u128;
    out.push_str(&(scaled / scale).to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = (scaled % scale).to_string();
        out.push_str(&"0".repeat(decimals.saturating_sub(frac_str.len())));
        out.push_str(&frac_str);
    }

    out
}

/// Dollar amount with two decimals, e.g. `$190.00`.
pub fn fmt_money(v: f64) -> String {
    format!("${}", fmt_f64_fixed(v, 2))
}

// `1e+21`, `-1.5e+21`: shortest digits, explicit exponent sign.
fn exponent_notation(v: f64) -> String {
    format!("{v:e}").replacen('e', "e+", 1)
}
