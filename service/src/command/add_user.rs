//! [`Command`] for adding a new [`User`] locally.

use std::{collections::BTreeMap, fmt};

use common::define_kind;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::Store;
use crate::{
    domain::{
        user::{self, Address, Company, Origin, Phone},
        User,
    },
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`User`] to the [`Store`] from the raw form
/// input.
///
/// The [`User`] is never sent to the listing endpoint. Executing the same
/// [`AddUser`] twice adds two [`User`]s with different IDs.
#[derive(Clone, Debug, Default)]
pub struct AddUser {
    /// Name of a new [`User`]. Required.
    pub name: String,

    /// Email address of a new [`User`]. Required.
    pub email: String,

    /// Phone number of a new [`User`].
    pub phone: String,

    /// Street of a new [`User`]'s [`Address`].
    pub street: String,

    /// Suite of a new [`User`]'s [`Address`].
    pub suite: String,

    /// City of a new [`User`]'s [`Address`].
    pub city: String,

    /// Postal code of a new [`User`]'s [`Address`].
    pub zipcode: String,

    /// Name of a new [`User`]'s [`Company`].
    pub company_name: String,
}

define_kind! {
    #[doc = "Field of an [`AddUser`] form."]
    enum FormField {
        #[doc = "[`AddUser::name`]."]
        Name = 1,

        #[doc = "[`AddUser::email`]."]
        Email = 2,

        #[doc = "[`AddUser::phone`]."]
        Phone = 3,

        #[doc = "[`AddUser::street`]."]
        Street = 4,

        #[doc = "[`AddUser::suite`]."]
        Suite = 5,

        #[doc = "[`AddUser::city`]."]
        City = 6,

        #[doc = "[`AddUser::zipcode`]."]
        Zipcode = 7,

        #[doc = "[`AddUser::company_name`]."]
        CompanyName = 8,
    }
}

impl AddUser {
    /// Returns the value of the provided [`FormField`].
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Street => &self.street,
            FormField::Suite => &self.suite,
            FormField::City => &self.city,
            FormField::Zipcode => &self.zipcode,
            FormField::CompanyName => &self.company_name,
        }
    }

    /// Returns a mutable reference to the value of the provided [`FormField`].
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Street => &mut self.street,
            FormField::Suite => &mut self.suite,
            FormField::City => &mut self.city,
            FormField::Zipcode => &mut self.zipcode,
            FormField::CompanyName => &mut self.company_name,
        }
    }

    /// Validates the required fields of this [`AddUser`] form.
    ///
    /// # Errors
    ///
    /// With every failed [`FormField`] and its message.
    pub fn validate(
        &self,
    ) -> Result<(user::Name, user::Email), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = user::Name::new(self.name.trim());
        if name.is_none() {
            errors.add(FormField::Name, "Name is required");
        }

        let email = self.email.trim();
        let email = if email.is_empty() {
            errors.add(FormField::Email, "Email is required");
            None
        } else {
            let email = user::Email::new(email);
            if email.is_none() {
                errors.add(FormField::Email, "Invalid email format");
            }
            email
        };

        match (name, email) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(errors),
        }
    }
}

impl<R> Command<AddUser> for Service<R> {
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddUser) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let (name, email) = cmd
            .validate()
            .map_err(|e| tracerr::new!(E::Invalid(e)))?;

        let AddUser {
            name: _,
            email: _,
            phone,
            street,
            suite,
            city,
            zipcode,
            company_name,
        } = cmd;

        let store = self.store();
        let id = user::Id::after(store.state().users().iter().map(|u| u.id))
            .ok_or_else(|| tracerr::new!(E::IdsExhausted))?;
        let user = User {
            id,
            name,
            email,
            phone: Phone::from(phone.trim()),
            address: Address {
                street: street.trim().to_owned(),
                suite: suite.trim().to_owned(),
                city: city.trim().to_owned(),
                zipcode: zipcode.trim().to_owned(),
                geo: None,
            },
            company: Company {
                name: company_name.trim().to_owned(),
                catch_phrase: String::new(),
                bs: String::new(),
            },
            origin: Origin::Local,
        };

        store.append_record(user.clone());
        log::info!("added `User(id: {id})` locally");

        Ok(user)
    }
}

/// Messages of the failed [`FormField`]s, in the [`FormField`]s order.
#[derive(Clone, Debug, Default, Eq, Error, PartialEq)]
pub struct ValidationErrors(
    #[error(not(source))] BTreeMap<FormField, &'static str>,
);

impl ValidationErrors {
    /// Records the provided `message` for the provided [`FormField`].
    fn add(&mut self, field: FormField, message: &'static str) {
        _ = self.0.insert(field, message);
    }

    /// Returns the message of the provided [`FormField`], if it failed.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Iterates over the failed [`FormField`]s and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    /// Indicates whether no [`FormField`] failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, (field, message)) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Error of [`AddUser`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Form input is invalid.
    #[display("Invalid `User` form: {_0}")]
    Invalid(ValidationErrors),

    /// No [`user::Id`] follows the greatest one in the [`Store`].
    #[display("No `User` ID is left to assign")]
    #[from(ignore)]
    IdsExhausted,
}
