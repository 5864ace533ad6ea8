//! [`User`] read model definition.
//!
//! [`User`]: crate::domain::User

pub mod list {
    //! [`User`]s list definitions.
    //!
    //! A list is projected from the [`Store`]d [`User`]s by retaining the ones
    //! matching the search term and ordering them by the chosen [`Field`].
    //!
    //! [`Store`]: crate::Store

    use std::cmp::Ordering;

    use common::{collation, define_kind};

    use crate::domain::{user, User};

    /// Selector of a [`User`]s list.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Selector {
        /// Search term to filter [`User`]s by.
        ///
        /// Used verbatim, without trimming.
        pub search: String,

        /// [`Sort`] to order [`User`]s by.
        pub sort: Sort,
    }

    impl Selector {
        /// Projects the provided [`User`]s according to this [`Selector`].
        ///
        /// The relative order of [`User`]s equal by the sorted [`Field`] is
        /// preserved.
        #[must_use]
        pub fn project(&self, users: &[User]) -> Vec<User> {
            let search = self.search.to_lowercase();
            let mut list = users
                .iter()
                .filter(|u| matches(u, &search))
                .cloned()
                .collect::<Vec<_>>();
            list.sort_by(|a, b| self.sort.compare(a, b));
            list
        }
    }

    /// Checks whether the provided [`User`] matches the lowercased `search`
    /// term by its name or email.
    fn matches(user: &User, search: &str) -> bool {
        [user.name.as_ref(), user.email.as_ref()]
            .into_iter()
            .any(|s: &str| s.to_lowercase().contains(search))
    }

    define_kind! {
        #[doc = "Field to sort [`User`]s by."]
        enum Field {
            #[doc = "[`user::Name`] of a [`User`]."]
            Name = 1,

            #[doc = "[`user::Email`] of a [`User`]."]
            Email = 2,
        }
    }

    impl Field {
        /// Returns the [`Key`] of the provided [`User`] for this [`Field`].
        #[must_use]
        pub fn key(self, user: &User) -> Key<'_> {
            match self {
                Self::Name => Key::Text(user.name.as_ref()),
                Self::Email => Key::Text(user.email.as_ref()),
            }
        }
    }

    define_kind! {
        #[doc = "Direction to sort [`User`]s in."]
        enum Direction {
            #[doc = "From the least to the greatest."]
            Ascending = 1,

            #[doc = "From the greatest to the least."]
            Descending = 2,
        }
    }

    impl Direction {
        /// Returns the opposite [`Direction`].
        #[must_use]
        pub const fn reversed(self) -> Self {
            match self {
                Self::Ascending => Self::Descending,
                Self::Descending => Self::Ascending,
            }
        }

        /// Orients the provided ascending [`Ordering`] in this [`Direction`].
        #[must_use]
        pub const fn orient(self, ordering: Ordering) -> Ordering {
            match self {
                Self::Ascending => ordering,
                Self::Descending => ordering.reverse(),
            }
        }
    }

    /// Ordering of a [`User`]s list.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Sort {
        /// [`Field`] to sort by.
        pub field: Field,

        /// [`Direction`] to sort in.
        pub direction: Direction,
    }

    impl Default for Sort {
        fn default() -> Self {
            Self {
                field: Field::Name,
                direction: Direction::Ascending,
            }
        }
    }

    impl Sort {
        /// Returns the [`Sort`] resulting from choosing the provided `field`.
        ///
        /// Choosing the current [`Field`] again reverses the [`Direction`],
        /// while choosing another one sorts by it in [`Direction::Ascending`].
        #[must_use]
        pub fn toggle(self, field: Field) -> Self {
            if field == self.field {
                Self {
                    field,
                    direction: self.direction.reversed(),
                }
            } else {
                Self {
                    field,
                    direction: Direction::Ascending,
                }
            }
        }

        /// Compares the provided [`User`]s according to this [`Sort`].
        #[must_use]
        pub fn compare(&self, a: &User, b: &User) -> Ordering {
            self.direction
                .orient(self.field.key(a).compare(&self.field.key(b)))
        }
    }

    /// Value of a [`User`] [`Field`] to be compared.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum Key<'a> {
        /// Text compared in a locale-aware manner.
        Text(&'a str),

        /// Number compared by its value.
        Number(u64),
    }

    impl From<user::Id> for Key<'_> {
        fn from(id: user::Id) -> Self {
            Self::Number(id.into())
        }
    }

    impl Key<'_> {
        /// Compares this [`Key`] with the `other` one.
        ///
        /// [`Key`]s of different kinds are considered equal.
        #[must_use]
        pub fn compare(&self, other: &Self) -> Ordering {
            match (self, other) {
                (Self::Text(a), Self::Text(b)) => collation::compare(a, b),
                (Self::Number(a), Self::Number(b)) => a.cmp(b),
                (Self::Text(_), Self::Number(_))
                | (Self::Number(_), Self::Text(_)) => Ordering::Equal,
            }
        }
    }

    #[cfg(test)]
    mod spec {
        use std::cmp::Ordering;

        use crate::{domain::User, store::spec::user};

        use super::{Direction, Field, Key, Selector, Sort};

        fn names(list: &[User]) -> Vec<&str> {
            list.iter().map(|u| u.name.as_ref()).collect()
        }

        fn search(term: &str) -> Selector {
            Selector {
                search: term.to_owned(),
                sort: Sort::default(),
            }
        }

        #[test]
        fn filters_by_name_or_email_ignoring_case() {
            let users = [
                user(1, "Alice", "a@x.com"),
                user(2, "Bob", "b@x.com"),
                user(3, "Carol", "ALICE.fan@y.org"),
            ];

            assert_eq!(
                names(&search("ali").project(&users)),
                ["Alice", "Carol"],
            );
            assert_eq!(names(&search("BOB").project(&users)), ["Bob"]);
            assert_eq!(names(&search("@y.").project(&users)), ["Carol"]);
            assert!(search("zed").project(&users).is_empty());
        }

        #[test]
        fn empty_search_retains_everything() {
            let users =
                [user(1, "Bob", "b@x.com"), user(2, "Alice", "a@x.com")];

            assert_eq!(names(&search("").project(&users)), ["Alice", "Bob"]);
        }

        #[test]
        fn search_is_not_trimmed() {
            let users =
                [user(1, "Alice", "a@x.com"), user(2, "Ann Lee", "l@x.com")];

            assert_eq!(names(&search(" ").project(&users)), ["Ann Lee"]);
            assert!(search(" ali").project(&users).is_empty());
        }

        #[test]
        fn sorts_by_chosen_field_and_direction() {
            let users = [
                user(1, "Bob", "a@x.com"),
                user(2, "Alice", "c@x.com"),
                user(3, "carol", "b@x.com"),
            ];
            let mut selector = search("");

            let sorted = |s: &Selector| names(&s.project(&users)).join(",");

            assert_eq!(sorted(&selector), "Alice,Bob,carol");

            selector.sort = selector.sort.toggle(Field::Name);
            assert_eq!(sorted(&selector), "carol,Bob,Alice");

            selector.sort = selector.sort.toggle(Field::Email);
            assert_eq!(sorted(&selector), "Bob,carol,Alice");
        }

        #[test]
        fn keeps_original_order_of_equal_keys() {
            let users = [
                user(1, "Sam", "z@x.com"),
                user(2, "Alex", "y@x.com"),
                user(3, "Sam", "a@x.com"),
            ];
            let mut selector = search("");

            let ids = |list: Vec<User>| {
                list.into_iter().map(|u| u.id.into()).collect::<Vec<u64>>()
            };
            assert_eq!(ids(selector.project(&users)), [2, 1, 3]);

            selector.sort.direction = Direction::Descending;
            assert_eq!(ids(selector.project(&users)), [1, 3, 2]);
        }

        #[test]
        fn toggling_sort() {
            let sort = Sort::default();
            assert_eq!(sort.field, Field::Name);
            assert_eq!(sort.direction, Direction::Ascending);

            let sort = sort.toggle(Field::Name);
            assert_eq!(sort.direction, Direction::Descending);

            let sort = sort.toggle(Field::Email);
            assert_eq!(sort.field, Field::Email);
            assert_eq!(sort.direction, Direction::Ascending);

            let sort = sort.toggle(Field::Email).toggle(Field::Email);
            assert_eq!(sort.direction, Direction::Ascending);
        }

        #[test]
        fn compares_numeric_keys_by_value() {
            assert_eq!(
                Key::Number(2).compare(&Key::Number(10)),
                Ordering::Less,
            );
            assert_eq!(
                Key::from(crate::domain::user::Id::from(7))
                    .compare(&Key::Number(7)),
                Ordering::Equal,
            );
            assert_eq!(
                Key::Text("2").compare(&Key::Text("10")),
                Ordering::Greater,
            );
            assert_eq!(
                Key::Text("a").compare(&Key::Number(1)),
                Ordering::Equal,
            );
        }

        #[test]
        fn parses_field_and_direction() {
            assert_eq!("name".parse::<Field>().unwrap(), Field::Name);
            assert_eq!("Email".parse::<Field>().unwrap(), Field::Email);
            assert!("phone".parse::<Field>().is_err());
            assert_eq!(Direction::Descending.to_string(), "descending");
        }
    }
}
