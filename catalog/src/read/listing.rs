//! [`Listing`]-related read definitions.

#[cfg(doc)]
use crate::domain::Listing;

/// Featured [`Listing`]s selector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Featured {
    /// Maximum number of [`Listing`]s to select.
    pub limit: usize,
}

pub mod list {
    //! [`Listing`] list derivation.
    //!
    //! A [`Selector`] is applied to a snapshot of all the [`Listing`]s to
    //! derive the [`View`] shown to a visitor. Derivation is pure, so it is
    //! simply repeated whenever the snapshot or the [`Selector`] changes.

    use std::{borrow::Borrow, cmp::Ordering};

    use common::{define_kind, number};
    use rust_decimal::Decimal;
    use tracing as log;

    use crate::domain::{listing::PropertyType, Listing};

    /// Query specification of a [`Listing`] list.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Selector {
        /// [`Filter`] narrowing the list.
        pub filter: Filter,

        /// [`Order`] of the list.
        pub order: Order,
    }

    impl Selector {
        /// Sets the [`Filter::search`] text.
        #[must_use]
        pub fn search(mut self, text: impl Into<String>) -> Self {
            self.filter.search = text.into();
            self
        }

        /// Sets the [`Filter::min_price`] bound.
        #[must_use]
        pub fn min_price(mut self, price: impl Into<String>) -> Self {
            self.filter.min_price = price.into();
            self
        }

        /// Sets the [`Filter::max_price`] bound.
        #[must_use]
        pub fn max_price(mut self, price: impl Into<String>) -> Self {
            self.filter.max_price = price.into();
            self
        }

        /// Sets the [`Filter::min_bedrooms`] bound.
        #[must_use]
        pub fn min_bedrooms(mut self, bedrooms: impl Into<String>) -> Self {
            self.filter.min_bedrooms = bedrooms.into();
            self
        }

        /// Sets the [`Filter::property_type`], [`None`] meaning any.
        #[must_use]
        pub fn property_type(mut self, kind: Option<PropertyType>) -> Self {
            self.filter.property_type = kind;
            self
        }

        /// Sets the [`Order`].
        #[must_use]
        pub fn order(mut self, order: Order) -> Self {
            self.order = order;
            self
        }

        /// Restores the default [`Selector`]: no [`Filter`] and the
        /// [`Order::Newest`] first.
        pub fn reset(&mut self) {
            *self = Self::default();
        }

        /// Derives the ordered list of the provided `listings` satisfying
        /// this [`Selector`].
        ///
        /// The provided `listings` are expected in their record store order:
        /// [`Listing`]s equal by the [`Order`] keep it.
        pub fn apply<L: Borrow<Listing>>(
            &self,
            listings: impl IntoIterator<Item = L>,
        ) -> Vec<L> {
            let criteria = self.filter.criteria();
            let mut selected = listings
                .into_iter()
                .filter(|l| criteria.matches(Borrow::borrow(l)))
                .collect::<Vec<_>>();
            selected.sort_by(|a, b| {
                self.order.compare(Borrow::borrow(a), Borrow::borrow(b))
            });
            selected
        }
    }

    /// Filter of a [`Listing`] list, holding the raw user input.
    ///
    /// Every predicate is inactive while its input is empty. Bounds which
    /// fail to parse are inactive as well.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// Text to search in the address, city or state of a [`Listing`],
        /// case-insensitively.
        pub search: String,

        /// Minimal price of a [`Listing`], inclusive.
        pub min_price: String,

        /// Maximal price of a [`Listing`], inclusive.
        pub max_price: String,

        /// Minimal number of bedrooms of a [`Listing`], inclusive.
        pub min_bedrooms: String,

        /// Exact [`PropertyType`] of a [`Listing`], [`None`] meaning any.
        pub property_type: Option<PropertyType>,
    }

    impl Filter {
        /// Parses this [`Filter`] into [`Criteria`].
        fn criteria(&self) -> Criteria {
            let Self {
                search,
                min_price,
                max_price,
                min_bedrooms,
                property_type,
            } = self;

            Criteria {
                search: (!search.is_empty()).then(|| search.to_lowercase()),
                min_price: bound("min_price", min_price, number::decimal),
                max_price: bound("max_price", max_price, number::decimal),
                min_bedrooms: bound(
                    "min_bedrooms",
                    min_bedrooms,
                    number::integer,
                ),
                property_type: *property_type,
            }
        }
    }

    /// Parses a [`Filter`] bound, treating an unparsable one as absent.
    fn bound<T>(
        name: &str,
        input: &str,
        parse: fn(&str) -> Result<T, number::ParseError>,
    ) -> Option<T> {
        match parse(input) {
            Ok(value) => Some(value),
            Err(number::ParseError::Empty) => None,
            Err(e @ number::ParseError::Invalid) => {
                log::debug!("ignoring `{name}` filter bound `{input}`: {e}");
                None
            }
        }
    }

    /// Active predicates of a [`Filter`].
    #[derive(Debug)]
    struct Criteria {
        /// Lowercased search text.
        search: Option<String>,

        /// Minimal price, inclusive.
        min_price: Option<Decimal>,

        /// Maximal price, inclusive.
        max_price: Option<Decimal>,

        /// Minimal number of bedrooms, inclusive.
        min_bedrooms: Option<i32>,

        /// Exact property type.
        property_type: Option<PropertyType>,
    }

    impl Criteria {
        /// Checks whether the provided [`Listing`] satisfies all these
        /// [`Criteria`].
        fn matches(&self, listing: &Listing) -> bool {
            let l = &listing.details;

            self.search.as_deref().map_or(true, |text| {
                [l.city.as_str(), l.state.as_str(), l.address.as_str()]
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(text))
            }) && self.min_price.map_or(true, |min| l.price >= min)
                && self.max_price.map_or(true, |max| l.price <= max)
                && self.min_bedrooms.map_or(true, |min| l.bedrooms >= min)
                && self.property_type.map_or(true, |t| l.property_type == t)
        }
    }

    define_kind! {
        #[doc = "Order of a [`Listing`] list."]
        enum Order {
            #[doc = "Most recently created first."]
            Newest = "newest",

            #[doc = "Cheapest first."]
            PriceLow = "price-low",

            #[doc = "Most expensive first."]
            PriceHigh = "price-high",

            #[doc = "Smallest first."]
            SizeLow = "size-low",

            #[doc = "Largest first."]
            SizeHigh = "size-high",
        }
    }

    impl Default for Order {
        fn default() -> Self {
            Self::Newest
        }
    }

    impl Order {
        /// Compares the provided [`Listing`]s according to this [`Order`].
        fn compare(self, a: &Listing, b: &Listing) -> Ordering {
            match self {
                Self::Newest => b.created_at.cmp(&a.created_at),
                Self::PriceLow => a.details.price.cmp(&b.details.price),
                Self::PriceHigh => b.details.price.cmp(&a.details.price),
                Self::SizeLow => a.details.size.cmp(&b.details.size),
                Self::SizeHigh => b.details.size.cmp(&a.details.size),
            }
        }
    }

    /// Derived [`Listing`] list.
    #[derive(Clone, Debug)]
    pub struct View {
        /// [`Listing`]s satisfying a [`Selector`], in its [`Order`].
        pub listings: Vec<Listing>,

        /// Total number of [`Listing`]s the [`View`] was derived from.
        pub total: usize,
    }

}
