//! [`Command`] definition.

pub mod add_user;
pub mod load_users;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{add_user::AddUser, load_users::LoadUsers};
