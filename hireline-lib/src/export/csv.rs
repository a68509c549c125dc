//! CSV export of the candidate list
//!
//! Exports the *filtered* list, not the current page, under a fixed header.
//! Every field is double-quoted; skills use `;` as the intra-field separator
//! so the cell survives comma-splitting spreadsheet imports.

use crate::model::Candidate;
use crate::model::StructuredField;
use crate::model::format_address;

/// The fixed export header, in column order.
pub const CSV_HEADER: [&str; 12] = [
    "Name",
    "Email",
    "Phone",
    "LinkedIn",
    "Status",
    "Company",
    "Experience",
    "CTC",
    "Expected CTC",
    "Currency",
    "Location",
    "Skills",
];

/// Renders the given candidates as CSV, one row per record, rows joined with
/// `\n`. Empty input yields the header line only.
pub fn candidates_csv<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut lines = vec![header_line()];
    for candidate in candidates {
        lines.push(row_line(candidate));
    }
    lines.join("\n")
}

fn header_line() -> String {
    CSV_HEADER
        .iter()
        .map(|h| quote(h))
        .collect::<Vec<_>>()
        .join(",")
}

fn row_line(c: &Candidate) -> String {
    let fields = [
        c.full_name(),
        c.email.clone().unwrap_or_default(),
        c.phone.clone().unwrap_or_default(),
        c.linkedin.clone().unwrap_or_default(),
        c.status.clone().unwrap_or_default(),
        c.current_company.clone().unwrap_or_default(),
        experience_field(&c.experience),
        c.current_ctc.clone().unwrap_or_default(),
        c.expected_ctc.clone().unwrap_or_default(),
        c.currency.clone().unwrap_or_default(),
        format_address(&c.address),
        c.skill.join(";"),
    ];
    fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// The experience column carries the field as stored: the raw string, or the
/// re-encoded entries when the backend sent a pre-parsed array.
fn experience_field(field: &StructuredField<crate::model::Experience>) -> String {
    match field {
        StructuredField::Unparsed(raw) => raw.clone(),
        StructuredField::Parsed(entries) => {
            serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

/// Quotes a field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
