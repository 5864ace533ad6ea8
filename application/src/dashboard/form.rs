//! Add-user form view of a [`Dashboard`].
//!
//! [`Dashboard`]: super::Dashboard

use std::fmt;

use service::command::add_user::{AddUser, FormField, ValidationErrors};

/// Mounted add-user form view.
#[derive(Debug, Default)]
pub(crate) struct View {
    /// Raw values of the form.
    pub(crate) form: AddUser,

    /// Errors of the last submission.
    pub(crate) errors: ValidationErrors,

    /// Indicator whether the form is being submitted.
    pub(crate) submitting: bool,
}

impl View {
    /// Sets the provided [`FormField`] to the provided `value`.
    pub(crate) fn set(&mut self, field: FormField, value: String) {
        *self.form.field_mut(field) = value;
    }

    /// Renders this [`View`].
    pub(crate) fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Add user")?;
        if self.submitting {
            writeln!(f, "Submitting...")?;
        }

        for &field in FormField::ALL {
            let required = match field {
                FormField::Name | FormField::Email => "*",
                FormField::Phone
                | FormField::Street
                | FormField::Suite
                | FormField::City
                | FormField::Zipcode
                | FormField::CompanyName => " ",
            };
            let label = format!("{field}{required}");
            let value = self.form.field(field);
            match self.errors.get(field) {
                Some(e) => writeln!(f, "  {label:<14}: {value}  <- {e}")?,
                None => writeln!(f, "  {label:<14}: {value}")?,
            }
        }
        writeln!(f, "Type `set <field> <value>`, `submit` or `cancel`.")
    }
}
