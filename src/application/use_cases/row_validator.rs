//! Per-row validation for the import dry run.
//!
//! Rules run rule-by-rule and append issues; a bad row never stops the rows
//! after it. Unmatched catalog labels are NOT row issues — they are tallied
//! separately by the aggregator.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::domain::import::{CanonicalField, ImportRow, ValidationIssue};
use crate::shared::dates;

/// Fields that must be non-empty after trim. The delivery date has its own
/// rule because it must also resolve to a real date.
const REQUIRED_FIELDS: [CanonicalField; 4] = [
    CanonicalField::JobNo,
    CanonicalField::SkipSize,
    CanonicalField::Postcode,
    CanonicalField::Address1,
];

/// Price columns are optional, but a present value must parse.
const PRICE_FIELDS: [CanonicalField; 2] = [CanonicalField::BasePrice, CanonicalField::TotalPrice];

/// Check one row, returning every issue found on it.
pub fn validate_row(row: &ImportRow) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for field in REQUIRED_FIELDS {
        if row.trimmed(field).is_empty() {
            issues.push(ValidationIssue::new(
                row.row_no,
                field.as_str(),
                format!("{} is required", field),
            ));
        }
    }

    let delivery = row.trimmed(CanonicalField::DeliveryDate);
    if delivery.is_empty() {
        issues.push(ValidationIssue::new(
            row.row_no,
            CanonicalField::DeliveryDate.as_str(),
            "delivery date is required",
        ));
    } else if dates::parse_flexible(delivery).is_none() {
        issues.push(ValidationIssue::new(
            row.row_no,
            CanonicalField::DeliveryDate.as_str(),
            format!("unrecognized delivery date '{}'", delivery),
        ));
    }

    for field in PRICE_FIELDS {
        let value = row.trimmed(field);
        if !value.is_empty() && parse_price(value).is_none() {
            issues.push(ValidationIssue::new(
                row.row_no,
                field.as_str(),
                format!("'{}' is not a number", value),
            ));
        }
    }

    issues
}

/// Parse a price cell. Currency prefixes and thousands separators are
/// operator noise, not errors.
pub fn parse_price(value: &str) -> Option<BigDecimal> {
    let cleaned = value
        .trim()
        .trim_start_matches(['\u{a3}', '$', '\u{20ac}'])
        .replace(',', "");
    BigDecimal::from_str(cleaned.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(fields: &[(CanonicalField, &str)]) -> ImportRow {
        let values: HashMap<CanonicalField, String> = fields
            .iter()
            .map(|(f, v)| (*f, v.to_string()))
            .collect();
        ImportRow::new(2, values, HashMap::new())
    }

    fn complete_row() -> Vec<(CanonicalField, &'static str)> {
        vec![
            (CanonicalField::JobNo, "J100"),
            (CanonicalField::SkipSize, "8yd"),
            (CanonicalField::DeliveryDate, "01/03/2024"),
            (CanonicalField::Postcode, "CF31 1AA"),
            (CanonicalField::Address1, "12 High St"),
        ]
    }

    #[test]
    fn test_complete_row_has_no_issues() {
        assert!(validate_row(&row(&complete_row())).is_empty());
    }

    #[test]
    fn test_missing_postcode_is_exactly_one_issue() {
        let mut fields = complete_row();
        fields.retain(|(f, _)| *f != CanonicalField::Postcode);
        let issues = validate_row(&row(&fields));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field_or_rule, "postcode");
        assert_eq!(issues[0].row_no, 2);
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut fields = complete_row();
        fields.retain(|(f, _)| *f != CanonicalField::JobNo);
        fields.push((CanonicalField::JobNo, "   "));
        let issues = validate_row(&row(&fields));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field_or_rule, "job_no");
    }

    #[test]
    fn test_unparseable_delivery_date_is_an_issue() {
        let mut fields = complete_row();
        fields.retain(|(f, _)| *f != CanonicalField::DeliveryDate);
        fields.push((CanonicalField::DeliveryDate, "sometime soon"));
        let issues = validate_row(&row(&fields));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field_or_rule, "delivery_date");
    }

    #[test]
    fn test_absent_price_is_fine_but_garbage_price_is_not() {
        let mut fields = complete_row();
        assert!(validate_row(&row(&fields)).is_empty());

        fields.push((CanonicalField::TotalPrice, "two hundred"));
        let issues = validate_row(&row(&fields));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field_or_rule, "total_price");
    }

    #[test]
    fn test_price_accepts_currency_and_thousands_noise() {
        assert!(parse_price("\u{a3}1,250.00").is_some());
        assert!(parse_price("250").is_some());
        assert!(parse_price("  $99.50 ").is_some());
        assert!(parse_price("n/a").is_none());
    }

    #[test]
    fn test_every_missing_required_field_reported() {
        let issues = validate_row(&row(&[]));
        // four required fields plus the delivery date rule
        assert_eq!(issues.len(), 5);
    }
}
