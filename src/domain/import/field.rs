// ============================================================
// CANONICAL FIELDS
// ============================================================
// The closed set of booking attributes every header alias resolves to

use serde::{Deserialize, Serialize};

/// A canonical booking attribute. Spreadsheet exports name these columns
/// unpredictably; the header resolver maps whatever it finds onto this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    JobNo,
    BookingDate,
    FirstName,
    LastName,
    Company,
    Email,
    Phone,
    Address1,
    Postcode,
    SkipSize,
    BookingType,
    Placement,
    DeliveryDate,
    DeliveryStatus,
    DeliveredDate,
    CollectionDate,
    CollectionStatus,
    CollectedDate,
    BasePrice,
    TotalPrice,
    Notes,
    DriverNotes,
    PermitUrl,
}

impl CanonicalField {
    /// Every canonical field, in the order columns are projected.
    pub const ALL: [CanonicalField; 23] = [
        CanonicalField::JobNo,
        CanonicalField::BookingDate,
        CanonicalField::FirstName,
        CanonicalField::LastName,
        CanonicalField::Company,
        CanonicalField::Email,
        CanonicalField::Phone,
        CanonicalField::Address1,
        CanonicalField::Postcode,
        CanonicalField::SkipSize,
        CanonicalField::BookingType,
        CanonicalField::Placement,
        CanonicalField::DeliveryDate,
        CanonicalField::DeliveryStatus,
        CanonicalField::DeliveredDate,
        CanonicalField::CollectionDate,
        CanonicalField::CollectionStatus,
        CanonicalField::CollectedDate,
        CanonicalField::BasePrice,
        CanonicalField::TotalPrice,
        CanonicalField::Notes,
        CanonicalField::DriverNotes,
        CanonicalField::PermitUrl,
    ];

    /// Stable snake_case identifier, used in reports and issue messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::JobNo => "job_no",
            CanonicalField::BookingDate => "booking_date",
            CanonicalField::FirstName => "first_name",
            CanonicalField::LastName => "last_name",
            CanonicalField::Company => "company",
            CanonicalField::Email => "email",
            CanonicalField::Phone => "phone",
            CanonicalField::Address1 => "address1",
            CanonicalField::Postcode => "postcode",
            CanonicalField::SkipSize => "skip_size",
            CanonicalField::BookingType => "booking_type",
            CanonicalField::Placement => "placement",
            CanonicalField::DeliveryDate => "delivery_date",
            CanonicalField::DeliveryStatus => "delivery_status",
            CanonicalField::DeliveredDate => "delivered_date",
            CanonicalField::CollectionDate => "collection_date",
            CanonicalField::CollectionStatus => "collection_status",
            CanonicalField::CollectedDate => "collected_date",
            CanonicalField::BasePrice => "base_price",
            CanonicalField::TotalPrice => "total_price",
            CanonicalField::Notes => "notes",
            CanonicalField::DriverNotes => "driver_notes",
            CanonicalField::PermitUrl => "permit_url",
        }
    }

    /// Ordered list of acceptable header spellings for this field.
    ///
    /// Aliases are tried in order against the normalized header set and the
    /// first match wins, so put the unambiguous spellings first. The set is
    /// closed and known at build time; no reflection, just a table.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::JobNo => {
                &["job no", "job number", "job ref", "booking ref", "job", "reference", "ref"]
            }
            CanonicalField::BookingDate => {
                &["booking date", "created date", "date booked", "date of booking", "created"]
            }
            CanonicalField::FirstName => {
                &["first name", "forename", "customer first name", "firstname"]
            }
            CanonicalField::LastName => {
                &["last name", "surname", "customer last name", "lastname"]
            }
            CanonicalField::Company => {
                &["company", "company name", "business name", "account name"]
            }
            CanonicalField::Email => &["email", "email address", "e-mail", "customer email"],
            CanonicalField::Phone => {
                &["phone", "telephone", "phone number", "mobile", "contact number", "tel"]
            }
            CanonicalField::Address1 => &[
                "address",
                "address 1",
                "address line 1",
                "site address",
                "delivery address",
                "street",
            ],
            CanonicalField::Postcode => &["postcode", "post code", "zip", "zip code"],
            CanonicalField::SkipSize => {
                &["skip size", "size", "skip type", "skip", "product", "container size"]
            }
            CanonicalField::BookingType => {
                &["booking type", "payment type", "account type", "payment"]
            }
            CanonicalField::Placement => {
                &["placement", "placement type", "skip location", "location"]
            }
            CanonicalField::DeliveryDate => {
                &["delivery date", "date of delivery", "del date", "delivery", "start date"]
            }
            CanonicalField::DeliveryStatus => {
                &["delivery status", "delivered status", "del status"]
            }
            CanonicalField::DeliveredDate => {
                &["delivered date", "actual delivery date", "delivered on", "date delivered"]
            }
            CanonicalField::CollectionDate => {
                &["collection date", "date of collection", "col date", "collection", "end date"]
            }
            CanonicalField::CollectionStatus => {
                &["collection status", "collected status", "col status"]
            }
            CanonicalField::CollectedDate => {
                &["collected date", "actual collection date", "collected on", "date collected"]
            }
            CanonicalField::BasePrice => {
                &["base price", "net price", "hire price", "price ex vat", "price"]
            }
            CanonicalField::TotalPrice => {
                &["total price", "gross price", "price inc vat", "total", "amount"]
            }
            CanonicalField::Notes => &["notes", "comments", "booking notes", "note"],
            CanonicalField::DriverNotes => {
                &["driver notes", "driver instructions", "delivery notes"]
            }
            CanonicalField::PermitUrl => {
                &["permit url", "permit link", "document link", "permit", "document"]
            }
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_field_once() {
        let mut seen = std::collections::HashSet::new();
        for field in CanonicalField::ALL {
            assert!(seen.insert(field.as_str()), "duplicate field {}", field);
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn test_aliases_are_normalized_spellings() {
        // The resolver compares normalized strings; the table must already
        // be lowercase with single spaces or entries could never match.
        for field in CanonicalField::ALL {
            for alias in field.aliases() {
                assert_eq!(*alias, alias.to_lowercase());
                assert!(!alias.contains("  "));
                assert_eq!(*alias, alias.trim());
            }
        }
    }

    #[test]
    fn test_no_alias_shared_between_fields() {
        let mut owners: std::collections::HashMap<&str, CanonicalField> =
            std::collections::HashMap::new();
        for field in CanonicalField::ALL {
            for alias in field.aliases() {
                if let Some(other) = owners.insert(alias, field) {
                    panic!("alias {:?} claimed by both {} and {}", alias, other, field);
                }
            }
        }
    }
}
