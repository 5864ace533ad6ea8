//! [`Query`] collection related to a single [`User`].

use std::convert::Infallible;

use common::operations::{By, Select};

#[cfg(doc)]
use crate::Store;
use crate::{
    domain::{user, User},
    Service,
};

use super::Query;

/// Queries a [`Store`]d [`User`] by its [`user::Id`].
pub type ById = Select<By<Option<User>, user::Id>>;

impl<R> Query<ById> for Service<R> {
    type Ok = Option<User>;
    type Err = Infallible;

    async fn execute(&self, Select(by): ById) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .store()
            .state()
            .users()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        domain::{user::Id, User},
        query::Query as _,
        store::spec::user,
        Config, Service,
    };

    #[tokio::test]
    async fn finds_by_id() {
        let svc = Service::new(Config::default(), ());
        svc.store().replace_list(vec![
            user(1, "Alice", "a@x.com"),
            user(2, "Bob", "b@x.com"),
        ]);

        let bob = svc
            .execute(Select(By::<Option<User>, _>::new(Id::from(2))))
            .await
            .unwrap();
        assert_eq!(bob, Some(user(2, "Bob", "b@x.com")));

        let missing = svc
            .execute(Select(By::<Option<User>, _>::new(Id::from(5))))
            .await
            .unwrap();
        assert_eq!(missing, None);
    }
}
