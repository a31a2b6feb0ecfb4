//! Number formatting and column padding for display.
//!
//! All monetary and volume figures go through [`round2`] /
//! [`format_amount`]; the engine itself never rounds, so this module is
//! the single place where precision is dropped. Column alignment goes
//! through [`pad_left`] / [`pad_right`], which measure terminal cells
//! rather than `char`s.

use unicode_width::UnicodeWidthStr;

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Formats a value with 2 decimals and thousands grouping, e.g.
/// `12,345.67`.
pub fn format_amount(x: f64) -> String {
    let cents = (x * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{sign}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Formats a payback period to 1 decimal, or the caller's
/// not-applicable marker when there is nothing to pay back.
pub fn format_payback(payback: Option<f64>, not_applicable: &str) -> String {
    match payback {
        Some(years) => format!("{years:.1}"),
        None => not_applicable.to_string(),
    }
}

/// Display width of a string in terminal cells.
///
/// Combining marks (Thai vowels and tone marks, for instance) occupy no
/// cell of their own and count zero, unlike `chars().count()`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-aligns `s` in a field of `width` display cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Right-aligns `s` in a field of `width` display cells.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{s}", " ".repeat(fill))
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
