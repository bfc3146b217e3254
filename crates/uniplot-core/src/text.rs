// File: crates/uniplot-core/src/text.rs
// Summary: Number-to-text formatting for axis labels (grouped integers, significant digits,
//          shortest unique representation).

use std::collections::HashSet;

use tracing::trace;

/// Format `n` truncated toward zero as a thousands-separated integer, e.g. `-1,234`.
pub fn format_grouped_int(n: f64) -> String {
    if let Some(s) = format_non_finite(n) {
        return s;
    }
    let t = n.trunc();
    if t == 0.0 {
        return "0".to_string();
    }
    group_thousands(&format!("{t:.0}"))
}

/// Format `n` with `digits` significant digits in general notation, thousands-separated.
///
/// Fixed notation is used while the decimal exponent lies in `[-4, digits)`,
/// scientific (`1.5e+06`) otherwise. Trailing zeros are stripped. `digits == 0`
/// behaves like 1.
pub fn format_significant(n: f64, digits: usize) -> String {
    if let Some(s) = format_non_finite(n) {
        return s;
    }
    let p = digits.max(1);
    // Rounded scientific form decides the exponent, rounding carries included.
    let sci = format!("{:.*e}", p - 1, n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exp.unsigned_abs());
    }

    let decimals = (p as i32 - 1 - exp).max(0) as usize;
    let fixed = format!("{n:.decimals$}");
    group_thousands(strip_trailing_zeros(&fixed))
}

/// Label text at a given precision: 0 means grouped integer, otherwise significant digits.
pub fn format_label(n: f64, precision: usize) -> String {
    if precision == 0 {
        format_grouped_int(n)
    } else {
        format_significant(n, precision)
    }
}

/// Find the smallest precision below `max_precision` at which all present labels format
/// to pairwise distinct strings. Missing labels (`None` or `NaN`) become `""`.
///
/// Returns the strings and the adopted precision. When no precision yields distinct
/// strings the labels fall back to their plain `Display` form (precision `None`),
/// which may still contain duplicates.
pub fn shortest_unique_labels(labels: &[Option<f64>], max_precision: usize) -> (Vec<String>, Option<usize>) {
    let present = |l: &Option<f64>| l.filter(|v| !v.is_nan());

    for precision in 0..max_precision {
        let mut seen = HashSet::new();
        let unique = labels
            .iter()
            .filter_map(present)
            .all(|v| seen.insert(format_label(v, precision)));
        if unique {
            trace!(precision, count = labels.len(), "unique label precision found");
            let out = labels
                .iter()
                .map(|l| present(l).map(|v| format_label(v, precision)).unwrap_or_default())
                .collect();
            return (out, Some(precision));
        }
    }

    trace!(max_precision, "no unique precision, falling back to plain formatting");
    let out = labels
        .iter()
        .map(|l| present(l).map(|v| v.to_string()).unwrap_or_default())
        .collect();
    (out, None)
}

// ---- helpers ----------------------------------------------------------------

fn format_non_finite(n: f64) -> Option<String> {
    if n.is_nan() {
        Some("nan".to_string())
    } else if n.is_infinite() {
        Some(if n > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Insert `,` every three digits of the integer part; sign and fraction pass through.
fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut out = String::with_capacity(s.len() + int_part.len() / 3);
    out.push_str(sign);
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
