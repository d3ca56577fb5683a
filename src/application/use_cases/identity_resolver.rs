//! Customer deduplication keys from partial contact fragments.
//!
//! Historic exports rarely carry a customer id, so rows are bucketed by the
//! strongest fragment they do carry. Resolution is a pure function of one
//! row's contact fields; it never looks at other rows or row order.

use crate::domain::import::{CanonicalField, ImportRow};
use crate::shared::normalize::normalize;

/// Compute the deduplication key for one row.
///
/// Priority, first non-empty fragment wins and fixes the key shape:
/// email, then phone+company, then phone, then company. Rows with none of
/// those fall through to a composite of every normalized fragment, which
/// keys each distinct name separately instead of collapsing all
/// unidentifiable rows into one bucket. Two fragmentless rows with
/// identical names still share a key; that is a known limitation of the
/// source data, not something this stage papers over.
pub fn resolve_identity(row: &ImportRow) -> String {
    let email = normalize(row.get(CanonicalField::Email));
    let phone = normalize(row.get(CanonicalField::Phone));
    let company = normalize(row.get(CanonicalField::Company));

    if !email.is_empty() {
        return format!("email:{}", email);
    }
    if !phone.is_empty() && !company.is_empty() {
        return format!("phone_company:{}|{}", phone, company);
    }
    if !phone.is_empty() {
        return format!("phone:{}", phone);
    }
    if !company.is_empty() {
        return format!("company:{}", company);
    }

    let first = normalize(row.get(CanonicalField::FirstName));
    let last = normalize(row.get(CanonicalField::LastName));
    format!("name:{}|{}|{}|{}|{}", first, last, company, phone, email)
}
