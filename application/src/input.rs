//! [`Input`] of a dashboard session.

use std::str::FromStr;

use derive_more::{Display, Error};
use service::{command::add_user::FormField, domain::user, read::user::list};

/// Single line of user input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// Re-renders the active view.
    List,

    /// Changes the raw search term.
    Search(String),

    /// Sorts by the provided [`list::Field`].
    Sort(list::Field),

    /// Opens details of the [`user::Id`]entified user.
    Open(user::Id),

    /// Closes the opened details.
    Close,

    /// Navigates to the add-user form.
    Add,

    /// Sets the add-user [`FormField`] to the provided value.
    Set(FormField, String),

    /// Submits the add-user form.
    Submit,

    /// Leaves the add-user form without submitting.
    Cancel,

    /// Mounts the listing view again.
    Reload,

    /// Shows the available commands.
    Help,

    /// Ends the session.
    Quit,
}

/// Error of parsing an [`Input`].
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Line is empty.
    #[display("Empty command")]
    Empty,

    /// Command is not known.
    #[display("Unknown command `{_0}`, type `help` for the list")]
    Unknown(#[error(not(source))] String),

    /// Command argument is missing or invalid.
    #[display("Invalid argument for `{_0}`: {_1}")]
    Argument(&'static str, &'static str),
}

impl FromStr for Input {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = line
            .trim_start()
            .split_once(' ')
            .unwrap_or((line.trim_start(), ""));

        match command {
            "" => Err(ParseError::Empty),
            "list" => Ok(Self::List),
            // Search term is kept verbatim, spaces included.
            "search" => Ok(Self::Search(rest.to_owned())),
            "sort" => rest
                .trim()
                .parse()
                .map(Self::Sort)
                .map_err(|_| {
                    ParseError::Argument("sort", "expected `name` or `email`")
                }),
            "open" => rest
                .trim()
                .parse()
                .map(Self::Open)
                .map_err(|_| ParseError::Argument("open", "expected user ID")),
            "close" => Ok(Self::Close),
            "add" => Ok(Self::Add),
            "set" => {
                let rest = rest.trim_start();
                let (field, value) =
                    rest.split_once(' ').unwrap_or((rest.trim_end(), ""));
                field
                    .parse()
                    .map(|f| Self::Set(f, value.to_owned()))
                    .map_err(|_| {
                        ParseError::Argument("set", "unknown form field")
                    })
            }
            "submit" => Ok(Self::Submit),
            "cancel" => Ok(Self::Cancel),
            "reload" => Ok(Self::Reload),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_owned())),
        }
    }
}

/// Description of the available commands.
pub const HELP: &str = "\
Listing view:
  list                 render the list again
  search <text>        filter by name or email
  sort name|email      sort, choosing the same field again reverses
  open <id>            show details of a user
  close                hide the details
  add                  open the add-user form
  reload               mount the listing view again
Add-user form:
  set <field> <value>  fields: name, email, phone, street, suite, city,
                       zipcode, company_name
  submit               add the user and return to the list
  cancel               return to the list
Anywhere:
  help                 show this help
  quit                 end the session
";
