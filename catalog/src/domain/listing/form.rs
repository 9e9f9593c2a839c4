//! Administrative [`Form`] of a [`Listing`] and its normalization.

use std::{fmt, str::FromStr};

use common::{define_kind, number};
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use smart_default::SmartDefault;

use crate::domain::user;

use super::{
    Address, City, Dealer, DealerEmail, DealerName, DealerPhone, Description,
    Details, ImageUrl, Listing, PropertyType, State, Status, Title, ZipCode,
};

/// Raw input of the administrative [`Listing`] form, exactly as typed.
///
/// The [`Default`] value is the blank form offered for a new [`Listing`].
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Form {
    /// Title of the [`Listing`].
    pub title: String,

    /// Description of the [`Listing`].
    pub description: String,

    /// Price of the [`Listing`].
    pub price: String,

    /// Size of the [`Listing`].
    pub size: String,

    /// Number of bedrooms of the [`Listing`].
    pub bedrooms: String,

    /// Number of bathrooms of the [`Listing`].
    pub bathrooms: String,

    /// [`PropertyType`] label of the [`Listing`].
    #[default(PropertyType::House.label().to_owned())]
    pub property_type: String,

    /// [`Status`] label of the [`Listing`].
    #[default(Status::ForSale.label().to_owned())]
    pub status: String,

    /// Street address of the [`Listing`].
    pub address: String,

    /// City of the [`Listing`].
    pub city: String,

    /// State of the [`Listing`].
    pub state: String,

    /// Zip code of the [`Listing`].
    pub zip_code: String,

    /// Latitude of the [`Listing`], empty if unknown.
    pub latitude: String,

    /// Longitude of the [`Listing`], empty if unknown.
    pub longitude: String,

    /// Comma-separated image URLs of the [`Listing`].
    pub images: String,

    /// State of the "featured" checkbox.
    pub featured: bool,

    /// Name of the dealer.
    pub dealer_name: String,

    /// Email of the dealer.
    pub dealer_email: String,

    /// Phone number of the dealer.
    pub dealer_phone: String,
}

impl Form {
    /// Validates this [`Form`] and coerces it into [`Details`] of a
    /// [`Listing`] created by the provided user.
    ///
    /// Negative numbers and unpaired coordinates are passed through as is:
    /// ranges are checked by the record store.
    ///
    /// # Errors
    ///
    /// With every [`FieldError`] found, in [`Field`] order, if any field is
    /// missing or malformed.
    pub fn normalize(
        &self,
        created_by: Option<user::Id>,
    ) -> Result<Details, InvalidForm> {
        let mut errors = Vec::new();
        let mut check = Checker {
            errors: &mut errors,
        };

        let title = check.text(Field::Title, &self.title, Title::new);
        let description =
            check.text(Field::Description, &self.description, Description::new);
        let price = check.decimal(Field::Price, &self.price);
        let size = check.decimal(Field::Size, &self.size);
        let bedrooms = check.integer(Field::Bedrooms, &self.bedrooms);
        let bathrooms = check.decimal(Field::Bathrooms, &self.bathrooms);
        let property_type =
            check.choice::<PropertyType>(Field::PropertyType, &self.property_type);
        let status = check.choice::<Status>(Field::Status, &self.status);
        let address = check.text(Field::Address, &self.address, Address::new);
        let city = check.text(Field::City, &self.city, City::new);
        let state = check.text(Field::State, &self.state, State::new);
        let zip_code = check.text(Field::ZipCode, &self.zip_code, ZipCode::new);
        let latitude = check.optional_decimal(Field::Latitude, &self.latitude);
        let longitude =
            check.optional_decimal(Field::Longitude, &self.longitude);
        let dealer_name =
            check.text(Field::DealerName, &self.dealer_name, DealerName::new);
        let dealer_email =
            check.text(Field::DealerEmail, &self.dealer_email, DealerEmail::new);
        let dealer_phone =
            check.text(Field::DealerPhone, &self.dealer_phone, DealerPhone::new);

        // Every `None` below has its `FieldError` recorded.
        let (
            Some(title),
            Some(description),
            Some(price),
            Some(size),
            Some(bedrooms),
            Some(bathrooms),
            Some(property_type),
            Some(status),
            Some(address),
            Some(city),
            Some(state),
            Some(zip_code),
            Some(latitude),
            Some(longitude),
            Some(dealer_name),
            Some(dealer_email),
            Some(dealer_phone),
        ) = (
            title,
            description,
            price,
            size,
            bedrooms,
            bathrooms,
            property_type,
            status,
            address,
            city,
            state,
            zip_code,
            latitude,
            longitude,
            dealer_name,
            dealer_email,
            dealer_phone,
        )
        else {
            return Err(InvalidForm(errors));
        };

        Ok(Details {
            title,
            description,
            price,
            size,
            bedrooms,
            bathrooms,
            property_type,
            status,
            address,
            city,
            state,
            zip_code,
            latitude,
            longitude,
            images: split_images(&self.images),
            featured: self.featured,
            dealer: Dealer {
                name: dealer_name,
                email: dealer_email,
                phone: dealer_phone,
            },
            created_by,
        })
    }
}

impl From<&Listing> for Form {
    /// Pre-fills a [`Form`] for editing the provided [`Listing`].
    fn from(listing: &Listing) -> Self {
        let Details {
            title,
            description,
            price,
            size,
            bedrooms,
            bathrooms,
            property_type,
            status,
            address,
            city,
            state,
            zip_code,
            latitude,
            longitude,
            images,
            featured,
            dealer,
            created_by: _,
        } = &listing.details;

        Self {
            title: title.to_string(),
            description: description.to_string(),
            price: print_decimal(*price),
            size: print_decimal(*size),
            bedrooms: bedrooms.to_string(),
            bathrooms: print_decimal(*bathrooms),
            property_type: property_type.to_string(),
            status: status.to_string(),
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip_code.to_string(),
            latitude: latitude.map(print_decimal).unwrap_or_default(),
            longitude: longitude.map(print_decimal).unwrap_or_default(),
            images: images
                .iter()
                .map(ImageUrl::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            featured: *featured,
            dealer_name: dealer.name.to_string(),
            dealer_email: dealer.email.to_string(),
            dealer_phone: dealer.phone.to_string(),
        }
    }
}

/// Splits comma-separated image URLs, dropping blank segments.
fn split_images(input: &str) -> Vec<ImageUrl> {
    input
        .split(',')
        .map(str::trim)
        .filter_map(ImageUrl::new)
        .collect()
}

/// Prints the provided [`Decimal`] without trailing zeros.
fn print_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Helper recording [`FieldError`]s while parsing [`Form`] fields.
struct Checker<'e> {
    /// [`FieldError`]s recorded so far.
    errors: &'e mut Vec<FieldError>,
}

impl Checker<'_> {
    /// Parses a required text `field`.
    fn text<T>(
        &mut self,
        field: Field,
        input: &str,
        new: impl FnOnce(String) -> Option<T>,
    ) -> Option<T> {
        let value = new(input.to_owned());
        if value.is_none() {
            self.record(field, Problem::MissingField);
        }
        value
    }

    /// Parses a required `field` holding a label of a `K`ind.
    fn choice<K: FromStr>(
        &mut self,
        field: Field,
        input: &str,
    ) -> Option<K> {
        if input.is_empty() {
            self.record(field, Problem::MissingField);
            return None;
        }
        K::from_str(input)
            .map_err(|_| self.record(field, Problem::InvalidChoice))
            .ok()
    }

    /// Parses a required decimal `field`.
    fn decimal(&mut self, field: Field, input: &str) -> Option<Decimal> {
        number::decimal(input)
            .map_err(|_| self.record(field, Problem::InvalidNumber))
            .ok()
    }

    /// Parses a required whole number `field`.
    fn integer(&mut self, field: Field, input: &str) -> Option<i32> {
        number::integer(input)
            .map_err(|_| self.record(field, Problem::InvalidNumber))
            .ok()
    }

    /// Parses an optional decimal `field`, treating an empty one as absent.
    fn optional_decimal(
        &mut self,
        field: Field,
        input: &str,
    ) -> Option<Option<Decimal>> {
        if input.is_empty() {
            return Some(None);
        }
        self.decimal(field, input).map(Some)
    }

    /// Records a [`Problem`] with the provided `field`.
    fn record(&mut self, field: Field, problem: Problem) {
        self.errors.push(FieldError { field, problem });
    }
}

define_kind! {
    #[doc = "Field of a [`Form`] which may fail validation."]
    enum Field {
        #[doc = "[`Form::title`]."]
        Title = "title",

        #[doc = "[`Form::description`]."]
        Description = "description",

        #[doc = "[`Form::price`]."]
        Price = "price",

        #[doc = "[`Form::size`]."]
        Size = "size",

        #[doc = "[`Form::bedrooms`]."]
        Bedrooms = "bedrooms",

        #[doc = "[`Form::bathrooms`]."]
        Bathrooms = "bathrooms",

        #[doc = "[`Form::property_type`]."]
        PropertyType = "property_type",

        #[doc = "[`Form::status`]."]
        Status = "status",

        #[doc = "[`Form::address`]."]
        Address = "address",

        #[doc = "[`Form::city`]."]
        City = "city",

        #[doc = "[`Form::state`]."]
        State = "state",

        #[doc = "[`Form::zip_code`]."]
        ZipCode = "zip_code",

        #[doc = "[`Form::latitude`]."]
        Latitude = "latitude",

        #[doc = "[`Form::longitude`]."]
        Longitude = "longitude",

        #[doc = "[`Form::dealer_name`]."]
        DealerName = "dealer_name",

        #[doc = "[`Form::dealer_email`]."]
        DealerEmail = "dealer_email",

        #[doc = "[`Form::dealer_phone`]."]
        DealerPhone = "dealer_phone",
    }
}

/// Problem with a single [`Form`] [`Field`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Problem {
    /// Required field is empty.
    #[display("is required")]
    MissingField,

    /// Field is not a finite number of the expected kind.
    #[display("is not a valid number")]
    InvalidNumber,

    /// Field is not one of the allowed labels.
    #[display("is not an allowed choice")]
    InvalidChoice,
}

/// [`Problem`] found in a specific [`Field`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("`{field}` {problem}")]
pub struct FieldError {
    /// [`Field`] having the [`Problem`].
    pub field: Field,

    /// [`Problem`] of the [`Field`].
    pub problem: Problem,
}

/// Error of normalizing an invalid [`Form`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub struct InvalidForm(#[error(not(source))] Vec<FieldError>);

impl InvalidForm {
    /// Returns all the [`FieldError`]s of the [`Form`], in [`Field`] order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl Display for InvalidForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid `Form`:")?;
        for e in &self.0 {
            write!(f, "\n- {e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::domain::{
        listing::{ImageUrl, Listing, PropertyType, Status},
        user,
    };

    use super::{Field, FieldError, Form, Problem};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn valid_form() -> Form {
        Form {
            title: "Sunny family house".to_owned(),
            description: "Three bedrooms and a garden.".to_owned(),
            price: "350000".to_owned(),
            size: "1850.5".to_owned(),
            bedrooms: "3".to_owned(),
            bathrooms: "2.5".to_owned(),
            property_type: "House".to_owned(),
            status: "For Sale".to_owned(),
            address: "12 Maple Street".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip_code: "62701".to_owned(),
            latitude: "39.7817".to_owned(),
            longitude: "-89.6501".to_owned(),
            images: "front.jpg, kitchen.jpg".to_owned(),
            featured: true,
            dealer_name: "Jane Doe".to_owned(),
            dealer_email: "jane@example.com".to_owned(),
            dealer_phone: "+1 555 0100".to_owned(),
        }
    }

    #[test]
    fn normalizes_valid_form() {
        let creator = user::Id::new();

        let details = valid_form().normalize(Some(creator)).unwrap();

        assert_eq!(details.title.to_string(), "Sunny family house");
        assert_eq!(details.price, dec("350000"));
        assert_eq!(details.size, dec("1850.5"));
        assert_eq!(details.bedrooms, 3_i32);
        assert_eq!(details.bathrooms, dec("2.5"));
        assert_eq!(details.property_type, PropertyType::House);
        assert_eq!(details.status, Status::ForSale);
        assert_eq!(details.latitude, Some(dec("39.7817")));
        assert_eq!(details.longitude, Some(dec("-89.6501")));
        assert_eq!(
            details
                .images
                .iter()
                .map(ImageUrl::as_str)
                .collect::<Vec<_>>(),
            ["front.jpg", "kitchen.jpg"],
        );
        assert!(details.featured);
        assert_eq!(details.dealer.email.to_string(), "jane@example.com");
        assert_eq!(details.created_by, Some(creator));
    }

    #[test]
    fn reports_exactly_the_missing_field() {
        let cases: [(fn(&mut Form), Field); 11] = [
            (|f| f.title.clear(), Field::Title),
            (|f| f.description.clear(), Field::Description),
            (|f| f.address.clear(), Field::Address),
            (|f| f.city.clear(), Field::City),
            (|f| f.state.clear(), Field::State),
            (|f| f.zip_code.clear(), Field::ZipCode),
            (|f| f.dealer_name.clear(), Field::DealerName),
            (|f| f.dealer_email.clear(), Field::DealerEmail),
            (|f| f.dealer_phone.clear(), Field::DealerPhone),
            (|f| f.property_type.clear(), Field::PropertyType),
            (|f| f.status.clear(), Field::Status),
        ];

        for (clear, field) in cases {
            let mut form = valid_form();
            clear(&mut form);

            let err = form.normalize(None).unwrap_err();

            assert_eq!(
                err.errors(),
                [FieldError {
                    field,
                    problem: Problem::MissingField,
                }],
                "clearing `{field}`",
            );
        }
    }

    #[test]
    fn collects_all_problems() {
        let form = Form {
            title: String::new(),
            price: "cheap".to_owned(),
            bedrooms: "2.5".to_owned(),
            bathrooms: String::new(),
            status: "Leased".to_owned(),
            longitude: "east".to_owned(),
            ..valid_form()
        };

        let err = form.normalize(None).unwrap_err();

        assert_eq!(
            err.errors(),
            [
                FieldError {
                    field: Field::Title,
                    problem: Problem::MissingField,
                },
                FieldError {
                    field: Field::Price,
                    problem: Problem::InvalidNumber,
                },
                FieldError {
                    field: Field::Bedrooms,
                    problem: Problem::InvalidNumber,
                },
                FieldError {
                    field: Field::Bathrooms,
                    problem: Problem::InvalidNumber,
                },
                FieldError {
                    field: Field::Status,
                    problem: Problem::InvalidChoice,
                },
                FieldError {
                    field: Field::Longitude,
                    problem: Problem::InvalidNumber,
                },
            ],
        );
        assert_eq!(
            err.to_string(),
            "invalid `Form`:\n\
             - `title` is required\n\
             - `price` is not a valid number\n\
             - `bedrooms` is not a valid number\n\
             - `bathrooms` is not a valid number\n\
             - `status` is not an allowed choice\n\
             - `longitude` is not a valid number",
        );
    }

    #[test]
    fn splits_images() {
        let form = Form {
            images: "a.jpg, b.jpg,,  c.jpg ".to_owned(),
            ..valid_form()
        };

        let details = form.normalize(None).unwrap();

        assert_eq!(
            details
                .images
                .iter()
                .map(ImageUrl::as_str)
                .collect::<Vec<_>>(),
            ["a.jpg", "b.jpg", "c.jpg"],
        );
    }

    #[test]
    fn empty_images_are_none() {
        let form = Form {
            images: String::new(),
            ..valid_form()
        };

        assert!(form.normalize(None).unwrap().images.is_empty());
    }

    #[test]
    fn empty_coordinates_are_absent() {
        let form = Form {
            latitude: String::new(),
            ..valid_form()
        };

        let details = form.normalize(None).unwrap();

        assert_eq!(details.latitude, None);
        assert_eq!(details.longitude, Some(dec("-89.6501")));
    }

    #[test]
    fn passes_negative_numbers_through() {
        let form = Form {
            price: "-1".to_owned(),
            bedrooms: "-2".to_owned(),
            ..valid_form()
        };

        let details = form.normalize(None).unwrap();

        assert_eq!(details.price, dec("-1"));
        assert_eq!(details.bedrooms, -2);
    }

    #[test]
    fn blank_form_defaults() {
        let form = Form::default();

        assert_eq!(form.property_type, "House");
        assert_eq!(form.status, "For Sale");
        assert!(!form.featured);
        assert!(form.title.is_empty());
        assert!(form.images.is_empty());
    }

    #[test]
    fn prefills_from_listing() {
        let form = Form {
            price: "350000.00".to_owned(),
            latitude: String::new(),
            longitude: String::new(),
            ..valid_form()
        };
        let listing = Listing::new(form.normalize(None).unwrap());

        let prefilled = Form::from(&listing);

        assert_eq!(prefilled.price, "350000");
        assert_eq!(prefilled.bathrooms, "2.5");
        assert_eq!(prefilled.latitude, "");
        assert_eq!(prefilled.images, "front.jpg, kitchen.jpg");
        assert_eq!(prefilled.status, "For Sale");
        assert_eq!(prefilled.normalize(None).unwrap(), listing.details);
    }
}
