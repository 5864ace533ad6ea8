//! Listing view of a [`Dashboard`].
//!
//! [`Dashboard`]: super::Dashboard

use std::{fmt, future, time::Duration};

use common::Debounce;
use itertools::Itertools as _;
use service::{
    domain::User,
    read::user::list::{self, Direction, Field, Sort},
    store::State,
};
use tokio::{sync::watch, task};

/// Mounted listing view.
///
/// Unmounting (dropping) it cancels the pending search debounce.
#[derive(Debug)]
pub(crate) struct View {
    /// Search term, debounced before being applied.
    search: Debounce<String>,

    /// Receiver of the applied search terms.
    applied: watch::Receiver<String>,

    /// Current [`Sort`] of the list.
    sort: Sort,

    /// Task driving the search [`Debounce`].
    debouncer: task::JoinHandle<()>,
}

impl View {
    /// Mounts a new [`View`] debouncing its search term for the provided
    /// `delay`.
    ///
    /// Must be called within a [`task::LocalSet`].
    pub(crate) fn mount(delay: Duration) -> Self {
        let search = Debounce::new(String::new(), delay);
        let applied = search.subscribe();
        let debouncer = task::spawn_local({
            let search = search.clone();
            async move { search.run().await }
        });
        Self {
            search,
            applied,
            sort: Sort::default(),
            debouncer,
        }
    }

    /// Changes the raw search term.
    pub(crate) fn search(&self, term: String) {
        self.search.set(term);
    }

    /// Sorts the list by the provided [`Field`].
    pub(crate) fn sort_by(&mut self, field: Field) {
        self.sort = self.sort.toggle(field);
    }

    /// Returns the list [`list::Selector`] currently applied.
    pub(crate) fn selector(&self) -> list::Selector {
        list::Selector {
            search: self.search.current(),
            sort: self.sort,
        }
    }

    /// Resolves once a new search term is applied.
    pub(crate) async fn applied(&mut self) {
        if self.applied.changed().await.is_err() {
            future::pending::<()>().await;
        }
    }

    /// Renders this [`View`] over the provided [`State`] and projected
    /// `users`.
    pub(crate) fn render(
        &self,
        state: &State,
        users: &[User],
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let Sort { field, direction } = self.sort;
        let arrow = match direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        writeln!(f, "Users (sorted by {field}, {arrow})")?;

        let (latest, current) = (self.search.latest(), self.search.current());
        if latest == current {
            writeln!(f, "Search: {current:?}")?;
        } else {
            writeln!(f, "Search: {current:?} (typing {latest:?})")?;
        }

        if let Some(error) = state.error() {
            writeln!(f, "[!] {error}")?;
        }

        if state.is_loading() {
            writeln!(f, "Loading...")?;
        } else if users.is_empty() {
            writeln!(f, "No users found.")?;
        } else {
            table(users, f)?;
        }

        if let Some(user) = state.selected() {
            writeln!(f)?;
            details(user, f)?;
        }
        Ok(())
    }
}

impl Drop for View {
    fn drop(&mut self) {
        self.debouncer.abort();
    }
}

/// Renders the provided [`User`]s as a table.
fn table(users: &[User], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const HEADER: [&str; 5] = ["ID", "Name", "Email", "Phone", "Company"];

    let rows = users
        .iter()
        .map(|u| {
            [
                u.id.to_string(),
                u.name.to_string(),
                u.email.to_string(),
                u.phone.to_string(),
                u.company.name.clone(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    writeln!(f, "{}", line(HEADER.into_iter(), widths))?;
    writeln!(f, "{}", widths.iter().map(|w| "-".repeat(*w)).join("-+-"))?;
    for row in &rows {
        writeln!(f, "{}", line(row.iter().map(String::as_str), widths))?;
    }
    Ok(())
}

/// Pads the provided table `cells` to the provided `widths`.
fn line<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: [usize; 5],
) -> String {
    let line = cells
        .zip(widths)
        .map(|(c, w)| format!("{c:<w$}"))
        .join(" | ");
    line.trim_end().to_owned()
}

/// Renders the details panel of the provided [`User`].
fn details(user: &User, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let User {
        id,
        name,
        email,
        phone,
        address,
        company,
        origin: _,
    } = user;

    writeln!(f, "User #{id}: {name}")?;
    writeln!(f, "  Email:   {email}")?;
    writeln!(f, "  Phone:   {phone}")?;
    let place = [
        address.street.as_str(),
        address.suite.as_str(),
        address.city.as_str(),
        address.zipcode.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .join(", ");
    writeln!(f, "  Address: {place}")?;
    if let Some(geo) = &address.geo {
        writeln!(f, "  Geo:     {}, {}", geo.lat, geo.lng)?;
    }
    writeln!(f, "  Company: {}", company.name)?;
    if !company.catch_phrase.is_empty() {
        writeln!(f, "           \"{}\"", company.catch_phrase)?;
    }
    if !company.bs.is_empty() {
        writeln!(f, "           {}", company.bs)?;
    }
    writeln!(f, "Type `close` to hide.")
}
