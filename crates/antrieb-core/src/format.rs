// File: crates/antrieb-core/src/format.rs
// Summary: Locale-aware fixed-point number formatting for ticks and tooltips.

/// Number formatting conventions. Defaults follow Swiss German usage:
/// `.` for decimals and `'` between thousands groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal: String,
    pub thousands: String,
    pub grouping: usize,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self { decimal: ".".into(), thousands: "'".into(), grouping: 3 }
    }
}

impl NumberLocale {
    /// Plain fixed-point, no grouping (tooltip values: `1234.50`).
    pub fn fixed(&self, v: f64, precision: usize) -> String {
        self.format(v, precision, false)
    }

    /// Fixed-point with thousands grouping (axis ticks: `1'234`).
    pub fn grouped(&self, v: f64, precision: usize) -> String {
        self.format(v, precision, true)
    }

    fn format(&self, v: f64, precision: usize, group: bool) -> String {
        if !v.is_finite() {
            return "NaN".to_string();
        }
        let raw = format!("{:.*}", precision, v.abs());
        let (int_part, frac_part) = match raw.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (raw.as_str(), None),
        };
        // "-0.00" is shown as "0.00"
        let negative = v < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let mut out = String::with_capacity(raw.len() + 4);
        if negative {
            out.push('-');
        }
        if group && self.grouping > 0 {
            out.push_str(&group_digits(int_part, self.grouping, &self.thousands));
        } else {
            out.push_str(int_part);
        }
        if let Some(f) = frac_part {
            out.push_str(&self.decimal);
            out.push_str(f);
        }
        out
    }
}

fn group_digits(digits: &str, size: usize, sep: &str) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / size * sep.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % size == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}
