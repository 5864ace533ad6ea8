//! [`Dashboard`] session.

mod form;
mod list;

use std::{fmt, future, rc::Rc, time::Duration};

use common::operations::{By, Select};
use derive_more::Display;
use service::{
    command::{add_user::ExecutionError, load_users::Outcome, LoadUsers},
    domain::{user, User},
    infra::{remote, Remote},
    store::State,
    Service,
};
use tokio::{
    io::{
        self, AsyncBufRead, AsyncBufReadExt as _, AsyncWrite,
        AsyncWriteExt as _,
    },
    task,
};
use tracerr::Traced;
use tracing as log;

use crate::input::{self, Input, ParseError};

/// Route of a [`Dashboard`].
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Route {
    /// Listing view.
    #[default]
    #[display("list")]
    List,

    /// Add-user form view.
    #[display("add-user")]
    AddUser,
}

/// Reaction of a [`Dashboard`] on an [`Input`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reaction {
    /// Active view should be rendered.
    Render,

    /// Message should be shown to the user.
    Notice(String),

    /// Session should end.
    Quit,
}

/// Mounted view of a [`Dashboard`].
#[derive(Debug)]
enum View {
    /// Mounted listing view.
    List(list::View),

    /// Mounted add-user form view.
    AddUser(form::View),
}

/// Terminal session of the users dashboard.
///
/// Must be driven within a [`task::LocalSet`], as mounting the listing view
/// spawns local tasks.
#[derive(Debug)]
pub struct Dashboard<R> {
    /// [`Service`] the views operate on.
    service: Rc<Service<R>>,

    /// Delay of applying the search term in the listing view.
    debounce: Duration,

    /// Currently mounted view, if any.
    view: Option<View>,
}

impl<R> Dashboard<R>
where
    R: Remote<
            Select<By<Vec<User>, ()>>,
            Ok = Vec<User>,
            Err = Traced<remote::Error>,
        > + 'static,
{
    /// Creates a new [`Dashboard`] over the provided [`Service`], with no view
    /// mounted yet.
    #[must_use]
    pub fn new(service: Service<R>, debounce: Duration) -> Self {
        Self {
            service: Rc::new(service),
            debounce,
            view: None,
        }
    }

    /// Returns the [`Service`] of this [`Dashboard`].
    #[must_use]
    pub fn service(&self) -> &Service<R> {
        &self.service
    }

    /// Returns the [`Route`] of the currently mounted view, if any.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        self.view.as_ref().map(|v| match v {
            View::List(_) => Route::List,
            View::AddUser(_) => Route::AddUser,
        })
    }

    /// Unmounts the current view and mounts the one of the provided
    /// [`Route`].
    ///
    /// Mounting the listing view loads the [`User`]s, unless they are loaded
    /// or being loaded already. The load is not cancelled on unmounting.
    pub fn navigate(&mut self, route: Route) {
        // Unmount first, so the pending search is cancelled before anything
        // else happens.
        drop(self.view.take());

        log::debug!("navigating to `{route}` view");
        self.view = Some(match route {
            Route::List => {
                let service = Rc::clone(&self.service);
                drop(task::spawn_local(async move {
                    match service.execute(LoadUsers).await {
                        Ok(Outcome::Skipped) => {
                            log::debug!("`User`s are loaded already");
                        }
                        Ok(Outcome::Loaded(_) | Outcome::Failed) => {}
                        Err(e) => match e {},
                    }
                }));
                View::List(list::View::mount(self.debounce))
            }
            Route::AddUser => View::AddUser(form::View::default()),
        });
    }

    /// Handles the provided [`Input`].
    pub async fn handle(&mut self, input: Input) -> Reaction {
        if self.view.is_none() {
            self.navigate(Route::List);
        }
        let route = self.route().unwrap_or_default();

        match (input, route) {
            (Input::Help, _) => Reaction::Notice(input::HELP.to_owned()),
            (Input::Quit, _) => Reaction::Quit,

            (Input::List, Route::List) => Reaction::Render,
            (Input::Search(term), Route::List) => {
                if let Some(View::List(v)) = &self.view {
                    v.search(term);
                }
                Reaction::Render
            }
            (Input::Sort(field), Route::List) => {
                if let Some(View::List(v)) = &mut self.view {
                    v.sort_by(field);
                }
                Reaction::Render
            }
            (Input::Open(id), Route::List) => self.open(id).await,
            (Input::Close, Route::List) => {
                self.service.store().clear_selection();
                Reaction::Render
            }
            (Input::Add, Route::List) => {
                self.navigate(Route::AddUser);
                Reaction::Render
            }
            (Input::Reload, Route::List) => {
                self.navigate(Route::List);
                Reaction::Render
            }

            (Input::Set(field, value), Route::AddUser) => {
                if let Some(View::AddUser(v)) = &mut self.view {
                    v.set(field, value);
                }
                Reaction::Render
            }
            (Input::Submit, Route::AddUser) => self.submit().await,
            (Input::Cancel, Route::AddUser) => {
                self.navigate(Route::List);
                Reaction::Render
            }

            (
                Input::List
                | Input::Search(_)
                | Input::Sort(_)
                | Input::Open(_)
                | Input::Close
                | Input::Add
                | Input::Reload
                | Input::Set(..)
                | Input::Submit
                | Input::Cancel,
                Route::List | Route::AddUser,
            ) => Reaction::Notice(format!(
                "Command is not available in the `{route}` view, type `help` \
                 for the list",
            )),
        }
    }

    /// Selects the [`User`] with the provided [`user::Id`].
    async fn open(&self, id: user::Id) -> Reaction {
        let found = match self.service.execute(Select(By::new(id))).await {
            Ok(found) => found,
            Err(e) => match e {},
        };
        if let Some(user) = found {
            self.service.store().set_selection(user);
            Reaction::Render
        } else {
            Reaction::Notice(format!("User #{id} is not found"))
        }
    }

    /// Submits the mounted add-user form.
    async fn submit(&mut self) -> Reaction {
        let Some(View::AddUser(view)) = &mut self.view else {
            return Reaction::Render;
        };
        if view.submitting {
            return Reaction::Render;
        }

        view.submitting = true;
        let res = self.service.execute(view.form.clone()).await;
        view.submitting = false;

        match res.map_err(Traced::into_inner) {
            Ok(_) => {
                self.navigate(Route::List);
            }
            Err(ExecutionError::Invalid(errors)) => {
                log::debug!("`User` form rejected: {errors}");
                view.errors = errors;
            }
            Err(e @ ExecutionError::IdsExhausted) => {
                log::warn!("failed to add `User`: {e}");
                return Reaction::Notice(e.to_string());
            }
        }
        Reaction::Render
    }

    /// Renders the currently mounted view.
    pub async fn render(&self) -> String {
        let Some(view) = &self.view else {
            return String::new();
        };

        let users = match view {
            View::List(v) => {
                match self.service.execute(Select(By::new(v.selector()))).await
                {
                    Ok(users) => users,
                    Err(e) => match e {},
                }
            }
            View::AddUser(_) => Vec::new(),
        };

        let state = self.service.store().state();
        Screen {
            view,
            state: &state,
            users: &users,
        }
        .to_string()
    }

    /// Resolves once the mounted view should be rendered again on its own.
    async fn refreshed(&mut self) {
        match &mut self.view {
            Some(View::List(v)) => v.applied().await,
            Some(View::AddUser(_)) | None => future::pending().await,
        }
    }

    /// Runs this [`Dashboard`] session, reading [`Input`] lines from the
    /// provided `input` and writing rendered views to the provided `output`,
    /// until [`Input::Quit`] or the end of `input`.
    ///
    /// # Errors
    ///
    /// If reading `input` or writing `output` fails.
    pub async fn run<I, O>(mut self, input: I, mut output: O) -> io::Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        /// Event driving a [`Dashboard`] session.
        enum Event {
            /// Line of [`Input`] is read.
            Line(Option<String>),

            /// Rendered view has become stale.
            Stale,
        }

        let mut lines = input.lines();
        let mut store = self.service.store().subscribe();

        self.navigate(Route::List);
        output.write_all(self.render().await.as_bytes()).await?;

        loop {
            output.write_all(b"> ").await?;
            output.flush().await?;

            let event = tokio::select! {
                line = lines.next_line() => Event::Line(line?),
                Ok(()) = store.changed() => Event::Stale,
                () = self.refreshed() => Event::Stale,
            };

            let reaction = match event {
                Event::Line(None) => break,
                Event::Line(Some(line)) => match line.parse::<Input>() {
                    Ok(input) => self.handle(input).await,
                    Err(ParseError::Empty) => continue,
                    Err(e) => Reaction::Notice(e.to_string()),
                },
                Event::Stale => {
                    output.write_all(b"\n").await?;
                    Reaction::Render
                }
            };

            match reaction {
                Reaction::Render => {
                    _ = store.borrow_and_update();
                    output.write_all(self.render().await.as_bytes()).await?;
                }
                Reaction::Notice(msg) => {
                    output.write_all(msg.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                }
                Reaction::Quit => break,
            }
        }

        output.flush().await
    }
}

/// Rendering of a mounted [`View`].
struct Screen<'a> {
    /// [`View`] to render.
    view: &'a View,

    /// [`State`] to render the [`View`] over.
    state: &'a State,

    /// Projected [`User`]s list.
    users: &'a [User],
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view {
            View::List(v) => v.render(self.state, self.users, f),
            View::AddUser(v) => v.render(f),
        }
    }
}
