//! Maps command lines typed by the user to workflow events.
//!
//! Each line is `<command> [argument]`; the argument is everything after the
//! first run of whitespace, kept verbatim apart from outer whitespace.

use crate::app::Event;

/// Help shown by the `help` command.
pub const HELP_TEXT: &str = "\
search <name>    look up the image for a car
edit             open the favorite editor for the current car
desc <text>      set the description in the editor
rating <1-5>     set the rating in the editor (no value clears it)
star             toggle the favorite star locally
save             save the current car as a favorite
cancel           close the editor without saving
remove <name>    remove a favorite
refresh          reload favorites from the store
filter <query>   filter the favorites list (no value shows all)
theme            switch between light and dark
help             show this help
quit             exit";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the workflow.
    Dispatch(Event),
    /// Print [`HELP_TEXT`].
    Help,
    /// Unrecognized command word.
    Unknown(String),
}

/// Parses one input line. Blank lines yield `None`.
///
/// # Example
///
/// ```rust
/// use car_favorites::app::Event;
/// use car_favorites::ui::{parse_command, Command};
///
/// assert_eq!(
///     parse_command("search  Ferrari F40 "),
///     Some(Command::Dispatch(Event::SearchSubmit("Ferrari F40".to_string())))
/// );
/// assert_eq!(parse_command("   "), None);
/// ```
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, argument) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let event = match word.to_lowercase().as_str() {
        "search" | "s" => Event::SearchSubmit(argument.to_string()),
        "edit" | "e" => Event::OpenFavoriteEditor,
        "desc" | "description" => Event::SetDescription(argument.to_string()),
        "rating" | "r" => Event::RatingInput(argument.to_string()),
        "star" => Event::QuickToggleFavorite,
        "save" => Event::SaveFavorite,
        "cancel" => Event::CancelEdit,
        "remove" | "rm" => Event::RemoveFavorite(argument.to_string()),
        "refresh" => Event::RefreshFavorites,
        "filter" | "f" => Event::FilterFavorites(argument.to_string()),
        "theme" => Event::ToggleTheme,
        "quit" | "exit" | "q" => Event::Quit,
        "help" | "?" => return Some(Command::Help),
        _ => return Some(Command::Unknown(word.to_string())),
    };
    Some(Command::Dispatch(event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_map_to_events() {
        assert_eq!(parse_command("edit"), Some(Command::Dispatch(Event::OpenFavoriteEditor)));
        assert_eq!(parse_command("SAVE"), Some(Command::Dispatch(Event::SaveFavorite)));
        assert_eq!(
            parse_command("desc  very   fast "),
            Some(Command::Dispatch(Event::SetDescription("very   fast".to_string())))
        );
        assert_eq!(parse_command("theme"), Some(Command::Dispatch(Event::ToggleTheme)));
        assert_eq!(parse_command("help"), Some(Command::Help));
    }

    #[test]
    fn rating_without_value_clears() {
        assert_eq!(parse_command("rating"), Some(Command::Dispatch(Event::RatingInput(String::new()))));
        assert_eq!(parse_command("rating 12"), Some(Command::Dispatch(Event::RatingInput("12".to_string()))));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(parse_command("launch rocket"), Some(Command::Unknown("launch".to_string())));
    }
}
