//! [`Query`] collection related to the multiple [`User`]s.

use std::convert::Infallible;

use common::operations::{By, Select};

#[cfg(doc)]
use crate::Store;
use crate::{domain::User, read::user::list, Service};

use super::Query;

/// Queries the [`User`]s list projected from the [`Store`] by the provided
/// [`list::Selector`].
pub type List = Select<By<Vec<User>, list::Selector>>;

impl<R> Query<List> for Service<R> {
    type Ok = Vec<User>;
    type Err = Infallible;

    async fn execute(&self, Select(by): List) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();
        Ok(selector.project(self.store().state().users()))
    }
}
