use crate::units::request::ConversionResult;
use serde::Serialize;

/// Default number of decimals shown for a converted value
pub const DEFAULT_DECIMALS: usize = 2;

/// Round a value for display with a fixed number of decimals.
///
/// Ties round half away from zero on the shortest decimal form of the value,
/// so 0.125 shows as "0.13" even though its binary value sits just below.
pub fn format_value(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Shortest round-trip digits, e.g. 0.125 -> "1.25e-1"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{:.*}", decimals, value);
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return format!("{:.*}", decimals, value);
    };
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    // Number of leading digits that survive once scaled by 10^decimals
    let keep = exponent + 1 + decimals as i64;
    let mut kept: Vec<u8> = match usize::try_from(keep) {
        Ok(k) => {
            let mut v: Vec<u8> = digits.iter().copied().take(k).collect();
            v.resize(k, 0);
            v
        }
        Err(_) => Vec::new(),
    };
    let round_up = usize::try_from(keep)
        .ok()
        .and_then(|k| digits.get(k))
        .is_some_and(|d| *d >= 5);

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    // At least one integer digit
    while kept.len() <= decimals {
        kept.insert(0, 0);
    }

    let split = kept.len() - decimals;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Just the rounded number
    #[default]
    Plain,
    /// "1 Pounds = 16.00 Ounces"
    Sentence,
    Json,
}

/// Display-ready view of a conversion.
///
/// Labels are plain strings so that a passthrough conversion of an unrecognized
/// unit can still be reported under the label the caller used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    pub category: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub value: f64,
    pub result: f64,
    pub formatted: String,
}

impl<'a> Report<'a> {
    pub fn new(
        category: &'a str,
        from: &'a str,
        to: &'a str,
        value: f64,
        result: f64,
        decimals: usize,
    ) -> Self {
        Self {
            category,
            from,
            to,
            value,
            result,
            formatted: format_value(result, decimals),
        }
    }

    pub fn from_result(result: &ConversionResult, decimals: usize) -> Report<'static> {
        Report::new(
            result.request.category.label(),
            result.request.from.label(),
            result.request.to.label(),
            result.request.value,
            result.result,
            decimals,
        )
    }
}

/// Render a report for output
pub fn render(report: &Report<'_>, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(report.formatted.clone()),
        OutputFormat::Sentence => Ok(format!(
            "{} {} = {} {}",
            report.value, report.from, report.formatted, report.to
        )),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}
