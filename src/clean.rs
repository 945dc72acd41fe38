/// Cell cleaning for worksheet values.
///
/// Every cleaner is total: a cell maps to a number or to `None`, never to an
/// error. Blank cells, stray text, and non-finite parses all come back as
/// `None`, which keeps "value absent" distinguishable from zero everywhere
/// downstream.
use calamine::Data;

/// Convert currency cells like "$63,934" to numbers.
///
/// Native numeric cells pass through unchanged. String cells are parsed after
/// stripping dollar signs, thousands separators, and surrounding whitespace.
/// Anything else (blank, text, dates, errors) is `None`.
pub fn clean_currency(cell: Option<&Data>) -> Option<f64> {
    clean_cell(cell, |s| s.replace('$', "").replace(',', ""))
}

/// Convert numeric cells like "1,234" to numbers.
///
/// Same contract as [`clean_currency`] but only thousands separators are
/// stripped from string cells.
pub fn clean_number(cell: Option<&Data>) -> Option<f64> {
    clean_cell(cell, |s| s.replace(',', ""))
}

/// [`clean_number`] truncated to a whole count, for population and job
/// figures that the dashboard renders as integers.
pub fn clean_integer(cell: Option<&Data>) -> Option<i64> {
    clean_number(cell).map(|value| value as i64)
}

fn clean_cell(cell: Option<&Data>, strip: impl Fn(&str) -> String) -> Option<f64> {
    match cell? {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => {
            let stripped = strip(s);
            stripped
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
        }
        _ => None,
    }
}
