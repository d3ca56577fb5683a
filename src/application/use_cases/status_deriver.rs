//! Lifecycle triage for the dry-run preview.

use crate::domain::import::{BookingStatus, CanonicalField, ImportRow};
use crate::shared::normalize::normalize;

/// Derive the coarse lifecycle status from the status-like columns.
/// Three tiers, first match wins; anything unrecognized is a plain booking.
pub fn derive_status(row: &ImportRow) -> BookingStatus {
    if normalize(row.get(CanonicalField::CollectionStatus)) == "collected" {
        return BookingStatus::Collected;
    }
    if normalize(row.get(CanonicalField::DeliveryStatus)) == "delivered" {
        return BookingStatus::Delivered;
    }
    BookingStatus::Booked
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

    #[test]
    fn test_collected_beats_delivered() {
        let r = row(&[
            (CanonicalField::CollectionStatus, " Collected "),
            (CanonicalField::DeliveryStatus, "Delivered"),
        ]);
        assert_eq!(derive_status(&r), BookingStatus::Collected);
    }

    #[test]
    fn test_delivered_when_not_collected() {
        let r = row(&[
            (CanonicalField::CollectionStatus, "pending"),
            (CanonicalField::DeliveryStatus, "DELIVERED"),
        ]);
        assert_eq!(derive_status(&r), BookingStatus::Delivered);
    }

    #[test]
    fn test_default_is_booked() {
        assert_eq!(derive_status(&row(&[])), BookingStatus::Booked);
        let unknown = row(&[(CanonicalField::DeliveryStatus, "on route")]);
        assert_eq!(derive_status(&unknown), BookingStatus::Booked);
    }
}
