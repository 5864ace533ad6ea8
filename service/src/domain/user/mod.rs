//! [`User`] definitions.

pub mod address;
pub mod company;

use std::sync::LazyLock;

use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;

pub use self::{
    address::{Address, Geo},
    company::Company,
};

/// Person listed on the dashboard.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Name`] of this [`User`].
    pub name: Name,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// [`Phone`] of this [`User`].
    pub phone: Phone,

    /// [`Address`] of this [`User`].
    pub address: Address,

    /// [`Company`] this [`User`] works for.
    pub company: Company,

    /// [`Origin`] of this [`User`] record.
    pub origin: Origin,
}

/// ID of a [`User`].
///
/// Unique within a single list of [`User`]s only.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u64);

impl Id {
    /// [`Id`] assigned to the first [`User`] of an empty list.
    pub const FIRST: Self = Self(1);

    /// Returns the [`Id`] following this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the [`Id`] following the greatest one among the provided
    /// [`Id`]s, or [`Id::FIRST`] if there are none.
    ///
    /// [`None`] if the greatest [`Id`] has no following one.
    #[must_use]
    pub fn after(ids: impl IntoIterator<Item = Self>) -> Option<Self> {
        ids.into_iter().max().map_or(Some(Self::FIRST), Self::next)
    }
}

/// Name of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty()
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Email address of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    ///
    /// Only the basic shape is checked: a local part, `@` and a domain with
    /// a dot, none of them containing whitespace or another `@`.
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`User`].
///
/// Free text, not validated.
#[derive(AsRef, Clone, Debug, Default, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Phone(String);

common::define_kind! {
    #[doc = "Origin of a [`User`] record."]
    enum Origin {
        #[doc = "Fetched from the remote listing endpoint."]
        Remote = 1,

        #[doc = "Created locally and never persisted remotely."]
        Local = 2,
    }
}

#[cfg(test)]
mod spec {
    use super::{Email, Id, Name};

    #[test]
    fn next_id_after_greatest() {
        assert_eq!(Id::after([Id::from(1), Id::from(3)]), Some(Id::from(4)));
        assert_eq!(Id::after([Id::from(7), Id::from(2)]), Some(Id::from(8)));
        assert_eq!(Id::after([]), Some(Id::FIRST));
    }

    #[test]
    fn no_id_after_greatest_possible() {
        assert_eq!(Id::from(u64::MAX).next(), None);
        assert_eq!(Id::after([Id::from(1), Id::from(u64::MAX)]), None);
    }

    #[test]
    fn name_must_be_trimmed_and_non_empty() {
        assert!(Name::new("Alice").is_some());
        assert!(Name::new("Alice Smith").is_some());

        assert!(Name::new("").is_none());
        assert!(Name::new("   ").is_none());
        assert!(Name::new(" Alice").is_none());
        assert!(Name::new("Alice ").is_none());
    }

    #[test]
    fn email_must_have_basic_shape() {
        assert!(Email::new("a@x.com").is_some());
        assert!(Email::new("alice.smith@mail.example.org").is_some());

        assert!(Email::new("").is_none());
        assert!(Email::new("not-an-email").is_none());
        assert!(Email::new("a@x").is_none());
        assert!(Email::new("@x.com").is_none());
        assert!(Email::new("a@@x.com").is_none());
        assert!(Email::new("a b@x.com").is_none());
    }
}
