//! [`Company`] definitions.

#[cfg(doc)]
use crate::domain::User;

/// Company a [`User`] works for.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Company {
    /// Name of this [`Company`].
    pub name: String,

    /// Catch-phrase of this [`Company`]. May be empty.
    pub catch_phrase: String,

    /// Business slogan of this [`Company`]. May be empty.
    pub bs: String,
}
