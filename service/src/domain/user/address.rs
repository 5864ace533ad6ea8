//! [`Address`] definitions.

#[cfg(doc)]
use crate::domain::User;

/// Postal address of a [`User`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Address {
    /// Street name.
    pub street: String,

    /// Suite or apartment.
    pub suite: String,

    /// City name.
    pub city: String,

    /// Postal code.
    pub zipcode: String,

    /// [`Geo`] coordinates of this [`Address`], if known.
    pub geo: Option<Geo>,
}

/// Geographic coordinates, kept verbatim as received.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Geo {
    /// Latitude.
    pub lat: String,

    /// Longitude.
    pub lng: String,
}
