//! Command parser for the : command system

use crate::core::action::ExportFormat;
use crate::core::nav::{Theme, ViewId};
use crate::core::query::SortKey;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    View(ViewId),

    // Query
    Search(String),
    Sort(SortKey),
    Page(usize),
    Next,
    Prev,

    // Selection
    SelectAll,
    SelectNone,
    Select(String),
    Clear,

    // Shell
    Theme(Option<Theme>),
    Sidebar,
    Drawer,
    Export(ExportFormat),
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Command names offered by the autocompletion hint
pub const COMMAND_NAMES: &[&str] = &[
    "view", "default", "ecommerce", "search", "sort", "page", "next", "prev", "select", "clear",
    "theme", "sidebar", "drawer", "export", "help", "quit",
];

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "view" | "v" | "go" => match args {
            Some(name) => Command::View(ViewId::parse(&name)),
            None => Command::Unknown(input.to_string()),
        },
        "default" | "orders" => Command::View(ViewId::OrderList),
        "ecommerce" | "analytics" => Command::View(ViewId::Ecommerce),

        "search" | "find" | "s" => Command::Search(args.unwrap_or_default()),
        "sort" => match args.as_deref().and_then(SortKey::parse) {
            Some(key) => Command::Sort(key),
            None => Command::Unknown(input.to_string()),
        },
        "page" | "p" => match args.and_then(|s| s.parse().ok()) {
            Some(n) => Command::Page(n),
            None => Command::Unknown(input.to_string()),
        },
        "next" | "n" => Command::Next,
        "prev" | "previous" => Command::Prev,

        "select" | "sel" => match args.as_deref() {
            Some("all") => Command::SelectAll,
            Some("none") => Command::SelectNone,
            Some(id) => Command::Select(id.to_string()),
            None => Command::Unknown(input.to_string()),
        },
        "clear" | "deselect" => Command::Clear,

        "theme" => match args {
            None => Command::Theme(None),
            Some(name) => match Theme::parse(&name) {
                Some(theme) => Command::Theme(Some(theme)),
                None => Command::Unknown(input.to_string()),
            },
        },
        "sidebar" | "menu" => Command::Sidebar,
        "drawer" | "notifications" => Command::Drawer,
        "export" => match args {
            None => Command::Export(ExportFormat::Csv),
            Some(format) => match ExportFormat::parse(&format) {
                Some(format) => Command::Export(format),
                None => Command::Unknown(input.to_string()),
            },
        },
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

/// Remaining characters of the first command name that starts with `input`
pub fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim_start();
    if input.is_empty() || input.contains(' ') {
        return None;
    }
    let lowered = input.to_lowercase();
    COMMAND_NAMES
        .iter()
        .find(|name| name.starts_with(&lowered) && name.len() > lowered.len())
        .map(|name| &name[lowered.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("ecommerce"), Command::View(ViewId::Ecommerce));
        assert_eq!(parse_command("default"), Command::View(ViewId::OrderList));
        assert_eq!(
            parse_command("view ecommerce"),
            Command::View(ViewId::Ecommerce)
        );
        assert_eq!(parse_command("view bogus"), Command::View(ViewId::OrderList));
        assert_eq!(parse_command("view"), Command::Unknown("view".to_string()));
    }

    #[test]
    fn test_parse_query_commands() {
        assert_eq!(
            parse_command("search  natali "),
            Command::Search("natali".to_string())
        );
        assert_eq!(parse_command("search"), Command::Search(String::new()));
        assert_eq!(parse_command("sort date"), Command::Sort(SortKey::Date));
        assert_eq!(
            parse_command("sort colour"),
            Command::Unknown("sort colour".to_string())
        );
        assert_eq!(parse_command("page 3"), Command::Page(3));
        assert_eq!(parse_command("page x"), Command::Unknown("page x".to_string()));
        assert_eq!(parse_command("next"), Command::Next);
        assert_eq!(parse_command("prev"), Command::Prev);
    }

    #[test]
    fn test_parse_selection_commands() {
        assert_eq!(parse_command("select all"), Command::SelectAll);
        assert_eq!(parse_command("select none"), Command::SelectNone);
        assert_eq!(
            parse_command("select #CM9803"),
            Command::Select("#CM9803".to_string())
        );
        assert_eq!(parse_command("clear"), Command::Clear);
    }

    #[test]
    fn test_parse_shell_commands() {
        assert_eq!(parse_command("theme"), Command::Theme(None));
        assert_eq!(parse_command("theme dark"), Command::Theme(Some(Theme::Dark)));
        assert_eq!(parse_command("export"), Command::Export(ExportFormat::Csv));
        assert_eq!(parse_command("export JSON"), Command::Export(ExportFormat::Json));
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }

    #[test]
    fn test_command_hint() {
        assert_eq!(command_hint("eco"), Some("mmerce"));
        assert_eq!(command_hint("se"), Some("arch"));
        assert_eq!(command_hint("search"), None);
        assert_eq!(command_hint("sort d"), None);
        assert_eq!(command_hint(""), None);
    }
}
