//! [`Store`] of the dashboard state.

use std::sync::Arc;

use strum::IntoStaticStr;
use tokio::sync::watch;
use tracing as log;

use crate::domain::User;

/// Single authoritative holder of the dashboard [`State`].
///
/// [`State`] is mutated only by applying [`Transition`]s. Every applied
/// [`Transition`] notifies all the subscribers exactly once.
#[derive(Clone, Debug)]
pub struct Store {
    /// Channel holding the current [`State`].
    state: Arc<watch::Sender<State>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates a new [`Store`] with an empty [`State`].
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(State::default());
        Self {
            state: Arc::new(state),
        }
    }

    /// Returns read access to the current [`State`].
    ///
    /// The returned guard blocks [`Transition`]s while alive, so it must not
    /// be held across `.await` points.
    #[must_use]
    pub fn state(&self) -> watch::Ref<'_, State> {
        self.state.borrow()
    }

    /// Returns a copy of the current [`State`].
    #[must_use]
    pub fn snapshot(&self) -> State {
        self.state.borrow().clone()
    }

    /// Subscribes to the [`State`] changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<State> {
        self.state.subscribe()
    }

    /// Applies the provided [`Transition`] to the current [`State`].
    pub fn apply(&self, transition: Transition) {
        let name: &'static str = (&transition).into();
        self.state.send_modify(|state| state.apply(transition));
        log::debug!(
            "`Store` transition `{name}` applied, revision: {}",
            self.state.borrow().revision,
        );
    }

    /// Applies [`Transition::ReplaceList`].
    pub fn replace_list(&self, users: Vec<User>) {
        self.apply(Transition::ReplaceList(users));
    }

    /// Applies [`Transition::SetLoading`].
    pub fn set_loading(&self, loading: bool) {
        self.apply(Transition::SetLoading(loading));
    }

    /// Applies [`Transition::SetError`].
    pub fn set_error(&self, message: impl Into<String>) {
        self.apply(Transition::SetError(message.into()));
    }

    /// Applies [`Transition::SetSelection`].
    pub fn set_selection(&self, user: User) {
        self.apply(Transition::SetSelection(user));
    }

    /// Applies [`Transition::ClearSelection`].
    pub fn clear_selection(&self) {
        self.apply(Transition::ClearSelection);
    }

    /// Applies [`Transition::AppendRecord`].
    pub fn append_record(&self, user: User) {
        self.apply(Transition::AppendRecord(user));
    }
}

/// Dashboard state held by a [`Store`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// [`User`]s in their arrival order, newest local ones first.
    users: Vec<User>,

    /// Indicator whether the initial fetch is outstanding.
    loading: bool,

    /// Message of the last fetch failure.
    error: Option<String>,

    /// Currently selected [`User`].
    selected: Option<User>,

    /// Number of [`Transition`]s applied so far.
    revision: u64,
}

impl State {
    /// Returns the [`User`]s of this [`State`].
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Indicates whether the initial fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message of the last fetch failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the currently selected [`User`], if any.
    #[must_use]
    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Returns the number of [`Transition`]s applied to this [`State`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies the provided [`Transition`] to this [`State`].
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::ReplaceList(users) => {
                self.users = users;
                self.loading = false;
                self.error = None;
            }
            Transition::SetLoading(loading) => self.loading = loading,
            Transition::SetError(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            Transition::SetSelection(user) => self.selected = Some(user),
            Transition::ClearSelection => self.selected = None,
            Transition::AppendRecord(user) => self.users.insert(0, user),
        }
        self.revision += 1;
    }
}

/// Mutation of a [`State`].
#[derive(Clone, Debug, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Transition {
    /// Replaces the whole list of [`User`]s, finishing loading and clearing
    /// the error.
    ReplaceList(Vec<User>),

    /// Sets the loading indicator, touching nothing else.
    SetLoading(bool),

    /// Sets the error message, finishing loading.
    SetError(String),

    /// Selects the provided [`User`].
    SetSelection(User),

    /// Clears the [`User`] selection.
    ClearSelection,

    /// Puts the provided [`User`] in front of the list.
    AppendRecord(User),
}

#[cfg(test)]
pub(crate) mod spec {
    use crate::domain::{
        user::{self, Address, Company, Email, Name, Origin, Phone},
        User,
    };

    use super::{State, Store, Transition};

    /// Creates a new [`User`] with the provided fields.
    pub(crate) fn user(id: u64, name: &str, email: &str) -> User {
        User {
            id: user::Id::from(id),
            name: Name::new(name).unwrap(),
            email: Email::new(email).unwrap(),
            phone: Phone::default(),
            address: Address::default(),
            company: Company::default(),
            origin: Origin::Remote,
        }
    }

    #[test]
    fn starts_empty() {
        let state = Store::new().snapshot();

        assert!(state.users().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.selected(), None);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn error_finishes_loading() {
        let store = Store::new();

        store.set_loading(true);
        assert!(store.state().is_loading());

        store.set_error("x");
        assert!(!store.state().is_loading());
        assert_eq!(store.state().error(), Some("x"));
    }

    #[test]
    fn replacing_list_finishes_loading_and_clears_error() {
        let store = Store::new();
        store.set_error("x");

        store.set_loading(true);
        assert_eq!(store.state().error(), Some("x"));

        store.replace_list(vec![user(1, "Alice", "a@x.com")]);
        let state = store.snapshot();
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.users(), [user(1, "Alice", "a@x.com")]);
    }

    #[test]
    fn setting_loading_touches_nothing_else() {
        let mut state = State::default();
        state.apply(Transition::ReplaceList(vec![user(1, "A", "a@x.com")]));
        state.apply(Transition::SetSelection(user(1, "A", "a@x.com")));
        state.apply(Transition::SetError("x".into()));

        let before = state.clone();
        state.apply(Transition::SetLoading(true));

        assert!(state.is_loading());
        assert_eq!(state.users(), before.users());
        assert_eq!(state.error(), before.error());
        assert_eq!(state.selected(), before.selected());
    }

    #[test]
    fn appends_newest_first() {
        let store = Store::new();
        store.replace_list(vec![user(1, "A", "a@x.com")]);

        store.append_record(user(2, "B", "b@x.com"));
        store.append_record(user(3, "C", "c@x.com"));

        let ids = store
            .state()
            .users()
            .iter()
            .map(|u| u.id.into())
            .collect::<Vec<u64>>();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn selection_is_a_copy() {
        let store = Store::new();
        store.replace_list(vec![user(1, "A", "a@x.com")]);
        store.set_selection(user(1, "A", "a@x.com"));

        store.replace_list(vec![]);
        assert_eq!(store.state().selected(), Some(&user(1, "A", "a@x.com")));

        store.clear_selection();
        assert_eq!(store.state().selected(), None);
    }

    #[tokio::test]
    async fn notifies_subscribers_on_every_transition() {
        let store = Store::new();
        let mut rx = store.subscribe();

        store.set_loading(true);
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_loading());

        store.set_loading(true);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().revision(), 2);

        assert!(!rx.has_changed().unwrap());
    }
}
