//! Plain-text rendering of the two reports.
//!
//! Layout:
//!
//! ```text
//! <stock>,<interval>,<percentage>
//! #
//! <stock>,<day high>,<day low>
//! ```

use std::io::{self, Write};

use crate::report::ReportView;

/// Separator line between the percentage and day range sections.
pub const DELIMITER: &str = "#";

/// Significant digits used when none are configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Upper bound on significant digits; enough to round-trip any `f64`.
pub const MAX_PRECISION: usize = 17;

/// Renders `value` in shortest general notation with `precision`
/// significant digits (`%g` rules).
///
/// Fixed notation is used while the decimal exponent lies in
/// `[-4, precision)`, scientific notation otherwise; trailing zeros are
/// dropped in both. Non-finite values render as `nan`, `inf` and `-inf`.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let precision = precision.clamp(1, MAX_PRECISION);
    let scientific = format!("{:.*e}", precision - 1, value);
    // `{:e}` always renders as `<mantissa>e<integer exponent>`
    let parts = scientific
        .split_once('e')
        .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)));
    let Some((mantissa, exponent)) = parts else {
        debug_assert!(false, "unexpected scientific rendering '{scientific}'");
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_owned()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Writes both reports separated by [`DELIMITER`].
///
/// The delimiter line is always written, even when both sections are empty.
pub fn write_text_report<W: Write>(
    view: &ReportView<'_>,
    writer: &mut W,
    precision: usize,
) -> io::Result<()> {
    for row in view.percentage_report() {
        writeln!(
            writer,
            "{},{},{}",
            row.stock,
            row.interval,
            format_general(row.percentage, precision)
        )?;
    }

    writeln!(writer, "{DELIMITER}")?;

    for row in view.extrema_report() {
        writeln!(
            writer,
            "{},{},{}",
            row.stock,
            format_general(row.day_high, precision),
            format_general(row.day_low, precision)
        )?;
    }

    writer.flush()
}
