//! Parsing of interactive commands.

use artgrid_lib::model::RecordId;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Page(u32),
    /// Select by record id.
    Select(Vec<RecordId>),
    /// Unselect by record id.
    Unselect(Vec<RecordId>),
    /// Flip the checkbox of 1-based row numbers on the current page.
    Toggle(Vec<usize>),
    /// Header checkbox on.
    All,
    /// Header checkbox off.
    None,
    /// Open or close the bulk-select popover.
    BulkToggle,
    /// Submit the bulk-select popover with a count.
    Bulk(i64),
    Show,
    /// Print the ids of every selected record.
    Selected,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Not a number: `{0}`")]
    InvalidNumber(String),

    #[error("Nothing to do")]
    Empty,
}

pub const HELP: &str = "\
Commands:
  next | n              next page
  prev | p              previous page
  page N                go to page N
  select ID..           select records by id
  unselect ID..         unselect records by id
  toggle ROW..  | t     flip rows by their number on this page
  all                   select every row on this page
  none                  unselect every row on this page
  bulk                  open or close the custom select popover
  bulk N                select the first N rows of this page
  show                  redraw the table
  selected              list every selected id
  help | ?              this text
  quit | q              exit";

/// Parses one input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };
    let args: Vec<&str> = words.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "page" | "g" => {
            let arg = first(&args, "page", "a page number")?;
            Command::Page(number(arg)?)
        }
        "select" | "s" => Command::Select(list(&args, "select", "record ids")?),
        "unselect" | "u" => Command::Unselect(list(&args, "unselect", "record ids")?),
        "toggle" | "t" => Command::Toggle(list(&args, "toggle", "row numbers")?),
        "all" => Command::All,
        "none" => Command::None,
        "bulk" | "b" => match args.first() {
            Some(arg) => Command::Bulk(number(arg)?),
            None => Command::BulkToggle,
        },
        "show" | "ls" => Command::Show,
        "selected" => Command::Selected,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn first<'a>(args: &[&'a str], command: &'static str, what: &'static str) -> Result<&'a str, ParseError> {
    args.first()
        .copied()
        .ok_or(ParseError::MissingArgument { command, what })
}

fn number<T: std::str::FromStr>(arg: &str) -> Result<T, ParseError> {
    arg.parse()
        .map_err(|_| ParseError::InvalidNumber(arg.to_string()))
}

fn list<T: std::str::FromStr>(args: &[&str], command: &'static str, what: &'static str) -> Result<Vec<T>, ParseError> {
    if args.is_empty() {
        return Err(ParseError::MissingArgument { command, what });
    }
    args.iter()
        .flat_map(|a| a.split(','))
        .filter(|a| !a.is_empty())
        .map(number)
        .collect()
}
