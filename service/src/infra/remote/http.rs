//! HTTP [`Remote`] implementation.

use std::time::Duration;

use common::operations::{By, Select};
use reqwest::Client;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::infra::Remote;
use crate::{domain::User, infra::remote};

use super::dto;

pub use reqwest::Url;

/// HTTP client of the listing endpoint.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: Client,

    /// [`Url`] of the listing endpoint.
    url: Url,
}

impl Http {
    /// Creates a new [`Http`] client of the listing endpoint located at the
    /// provided [`Url`].
    ///
    /// # Errors
    ///
    /// If failed to initialize the underlying HTTP client.
    pub fn new(
        url: Url,
        timeout: Duration,
    ) -> Result<Self, Traced<remote::Error>> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> remote::Error))?;
        Ok(Self { client, url })
    }
}

impl remote::Remote<Select<By<Vec<User>, ()>>> for Http {
    type Ok = Vec<User>;
    type Err = Traced<remote::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        use remote::Error as E;

        log::debug!("requesting `User`s from `{}`", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let status = response.status();
        if !status.is_success() {
            return Err(tracerr::new!(E::Status(status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;
        dto::decode(&body).map_err(tracerr::from_and_wrap!(=> E))
    }
}
