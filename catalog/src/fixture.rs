//! Shared test data.

use crate::domain::{listing, Listing};

/// Returns a valid [`listing::Form`] with the provided `title`.
pub(crate) fn form(title: &str) -> listing::Form {
    listing::Form {
        title: title.into(),
        description: "Nice place".into(),
        price: "100000".into(),
        size: "80".into(),
        bedrooms: "2".into(),
        bathrooms: "1".into(),
        address: "1 Main St".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        zip_code: "62701".into(),
        dealer_name: "Jane Doe".into(),
        dealer_email: "jane@example.com".into(),
        dealer_phone: "555-0100".into(),
        ..listing::Form::default()
    }
}

/// Returns a new [`Listing`] with the provided `title`, created at the
/// provided Unix `timestamp`.
pub(crate) fn listing(title: &str, timestamp: i64, featured: bool) -> Listing {
    let form = listing::Form {
        featured,
        ..form(title)
    };
    let mut listing = Listing::new(
        form.normalize(None).unwrap_or_else(|e| panic!("invalid form: {e}")),
    );
    listing.created_at = listing::CreationDateTime::from_unix_timestamp(
        timestamp,
    )
    .unwrap_or_else(|| panic!("invalid timestamp: {timestamp}"));
    listing.updated_at = listing.created_at.coerce();
    listing
}
