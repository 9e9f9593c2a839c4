//! [`Listing`] definitions.

pub mod form;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user;

pub use self::form::Form;

/// Property listed for sale or rent.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`DateTime`] when this [`Listing`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Listing`] was last modified.
    pub updated_at: ModificationDateTime,

    /// Everything about this [`Listing`] an administrator may edit.
    pub details: Details,
}

impl Listing {
    /// Creates a new [`Listing`] out of the provided [`Details`], stamping it
    /// with a new [`Id`] and the current [`DateTime`].
    #[must_use]
    pub fn new(details: Details) -> Self {
        let now = CreationDateTime::now();
        Self {
            id: Id::new(),
            created_at: now,
            updated_at: now.coerce(),
            details,
        }
    }

    /// Replaces the [`Details`] of this [`Listing`], refreshing its
    /// modification [`DateTime`].
    ///
    /// [`Id`] and creation [`DateTime`] are kept as is.
    pub fn revise(&mut self, details: Details) {
        self.details = details;
        self.updated_at = ModificationDateTime::now();
    }
}

/// Editable details of a [`Listing`], as produced by a normalized [`Form`].
#[derive(Clone, Debug, PartialEq)]
pub struct Details {
    /// [`Title`] of the listing.
    pub title: Title,

    /// [`Description`] of the listing.
    pub description: Description,

    /// Asking [`Price`], in the catalog currency.
    pub price: Price,

    /// [`Size`] of the property, in the catalog area unit.
    pub size: Size,

    /// Number of [`Bedrooms`].
    pub bedrooms: Bedrooms,

    /// Number of [`Bathrooms`].
    pub bathrooms: Bathrooms,

    /// [`PropertyType`] of the property.
    pub property_type: PropertyType,

    /// [`Status`] of the listing.
    pub status: Status,

    /// Street [`Address`] of the property.
    pub address: Address,

    /// [`City`] the property is located in.
    pub city: City,

    /// [`State`] the property is located in.
    pub state: State,

    /// [`ZipCode`] of the property.
    pub zip_code: ZipCode,

    /// [`Latitude`] of the property, if known.
    pub latitude: Option<Latitude>,

    /// [`Longitude`] of the property, if known.
    pub longitude: Option<Longitude>,

    /// [`ImageUrl`]s in display order, the first one being the cover.
    pub images: Vec<ImageUrl>,

    /// Indicator whether the listing is promoted on the home page.
    pub featured: bool,

    /// [`Dealer`] to contact about the listing.
    pub dealer: Dealer,

    /// ID of the user who created the listing, if known.
    pub created_by: Option<user::Id>,
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Asking price of a [`Listing`].
pub type Price = Decimal;

/// Area of a [`Listing`].
pub type Size = Decimal;

/// Number of bedrooms in a [`Listing`].
pub type Bedrooms = i32;

/// Number of bathrooms in a [`Listing`], half-steps allowed.
pub type Bathrooms = Decimal;

/// Latitude of a [`Listing`], in degrees.
pub type Latitude = Decimal;

/// Longitude of a [`Listing`], in degrees.
pub type Longitude = Decimal;

define_kind! {
    #[doc = "Type of a property in a [`Listing`]."]
    enum PropertyType {
        #[doc = "A detached house."]
        House = "House",

        #[doc = "An apartment in a building."]
        Apartment = "Apartment",

        #[doc = "An individually owned unit in a shared building."]
        Condo = "Condo",

        #[doc = "A house sharing walls with its neighbours."]
        Townhouse = "Townhouse",

        #[doc = "A non-residential property."]
        Commercial = "Commercial",
    }
}

define_kind! {
    #[doc = "Status of a [`Listing`]."]
    enum Status {
        #[doc = "Property is offered for sale."]
        ForSale = "For Sale",

        #[doc = "Property is offered for rent."]
        ForRent = "For Rent",

        #[doc = "Property is already sold."]
        Sold = "Sold",
    }
}

/// Defines non-empty text newtypes.
macro_rules! define_text {
    ($(
        #[doc = $doc:literal]
        $name:ident
    ),* $(,)?) => {$(
        #[doc = $doc]
        #[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
        #[as_ref(forward)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given \
                 `text` is not empty.",
            )]
            #[must_use]
            pub fn new(text: impl Into<String>) -> Option<Self> {
                let text = text.into();
                (!text.is_empty()).then_some(Self(text))
            }

            #[doc = concat!(
                "Returns this [`", stringify!($name), "`] as a string slice.",
            )]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("empty `", stringify!($name), "`"))
            }
        }
    )*};
}

define_text! {
    #[doc = "Title of a [`Listing`]."]
    Title,

    #[doc = "Free text description of a [`Listing`]."]
    Description,

    #[doc = "Street address of a [`Listing`]."]
    Address,

    #[doc = "City a [`Listing`] is located in."]
    City,

    #[doc = "State a [`Listing`] is located in."]
    State,

    #[doc = "Zip code of a [`Listing`]."]
    ZipCode,

    #[doc = "URL of a [`Listing`] image."]
    ImageUrl,

    #[doc = "Name of a [`Dealer`]."]
    DealerName,

    #[doc = "Email of a [`Dealer`]."]
    DealerEmail,

    #[doc = "Phone number of a [`Dealer`]."]
    DealerPhone,
}

/// Contact details of a dealer responsible for a [`Listing`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dealer {
    /// [`DealerName`] of this [`Dealer`].
    pub name: DealerName,

    /// [`DealerEmail`] of this [`Dealer`].
    pub email: DealerEmail,

    /// [`DealerPhone`] of this [`Dealer`].
    pub phone: DealerPhone,
}

/// [`DateTime`] when a [`Listing`] was created.
pub type CreationDateTime = DateTimeOf<(Listing, unit::Creation)>;

/// [`DateTime`] when a [`Listing`] was last modified.
pub type ModificationDateTime = DateTimeOf<(Listing, unit::Modification)>;
