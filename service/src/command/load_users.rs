//! [`Command`] for loading the initial list of [`User`]s.

use std::{collections::HashSet, convert::Infallible};

use common::{
    define_kind,
    operations::{By, Select},
};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::Store;
use crate::{
    domain::{user::Origin, User},
    infra::{remote, Remote},
    Service,
};

use super::Command;

/// Message stored into the [`Store`] on any fetch failure.
pub const FETCH_FAILED: &str = "Failed to fetch users";

/// [`Command`] for loading the initial list of [`User`]s from the [`Remote`]
/// listing endpoint into the [`Store`].
///
/// Does nothing if the [`Store`] already has [`User`]s or a load is already
/// in progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadUsers;

define_kind! {
    #[doc = "Policy of resolving a fetch completed after the [`Store`]d \
             [`User`]s list has been changed locally."]
    enum StaleFetchPolicy {
        #[doc = "Fetched [`User`]s replace the whole list, discarding the \
                 local changes."]
        Overwrite = 1,

        #[doc = "Locally created [`User`]s absent among the fetched ones are \
                 kept in front of them."]
        Merge = 2,
    }
}

impl Default for StaleFetchPolicy {
    fn default() -> Self {
        Self::Overwrite
    }
}

/// Outcome of [`LoadUsers`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Nothing has been fetched, as the [`Store`] already has [`User`]s or
    /// is loading them.
    Skipped,

    /// The provided number of [`User`]s has been loaded.
    Loaded(usize),

    /// Fetching has failed and the [`Store`] holds the error message.
    Failed,
}

impl<R> Command<LoadUsers> for Service<R>
where
    R: Remote<
        Select<By<Vec<User>, ()>>,
        Ok = Vec<User>,
        Err = Traced<remote::Error>,
    >,
{
    type Ok = Outcome;
    type Err = Infallible;

    async fn execute(&self, _: LoadUsers) -> Result<Self::Ok, Self::Err> {
        let store = self.store();
        {
            let state = store.state();
            if !state.users().is_empty() || state.is_loading() {
                return Ok(Outcome::Skipped);
            }
        }

        store.set_loading(true);
        log::info!("loading `User`s");

        match self.remote().execute(Select(By::new(()))).await {
            Ok(fetched) => {
                let users = match self.config().stale_fetch {
                    StaleFetchPolicy::Overwrite => fetched,
                    StaleFetchPolicy::Merge => {
                        merge(store.state().users(), fetched)
                    }
                };
                let count = users.len();
                store.replace_list(users);
                log::info!("loaded {count} `User`s");
                Ok(Outcome::Loaded(count))
            }
            Err(e) => {
                log::error!("failed to fetch `User`s: {e}");
                store.set_error(FETCH_FAILED);
                Ok(Outcome::Failed)
            }
        }
    }
}

/// Puts the locally created [`User`]s from the `current` list which are absent
/// among the `fetched` ones in front of the latter.
fn merge(current: &[User], fetched: Vec<User>) -> Vec<User> {
    let fetched_ids = fetched.iter().map(|u| u.id).collect::<HashSet<_>>();
    current
        .iter()
        .filter(|u| u.origin == Origin::Local && !fetched_ids.contains(&u.id))
        .cloned()
        .chain(fetched)
        .collect()
}
