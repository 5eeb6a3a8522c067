use thiserror::Error;
use crate::enums::category_filter::CategoryFilter;
use crate::enums::tab::Tab;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleCommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid {what}: '{value}'")]
    InvalidArgument {
        what: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    /// 1-based position among visible cards
    Card(usize),
    Path(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Tab(Tab),
    Language(String),
    /// Code may be empty; the controller rejects it.
    Analyze(String),
    AnalyzeFile(String),
    /// Path may be empty; the controller rejects it.
    Scan(String),
    Search(String),
    Filter(CategoryFilter),
    List,
    Open(OpenTarget),
    Close,
    Backdrop,
    Status,
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Result<Option<Self>, ConsoleCommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "tab" => {
                let tab = rest.parse::<Tab>().map_err(|_| ConsoleCommandError::InvalidArgument {
                    what: "tab",
                    value: rest.to_string(),
                })?;
                Self::Tab(tab)
            }
            "lang" => {
                if rest.is_empty() {
                    return Err(ConsoleCommandError::MissingArgument { command: "lang", argument: "a language" });
                }
                Self::Language(rest.to_string())
            }
            "analyze" => Self::Analyze(rest.to_string()),
            "analyze-file" => {
                if rest.is_empty() {
                    return Err(ConsoleCommandError::MissingArgument { command: "analyze-file", argument: "a file path" });
                }
                Self::AnalyzeFile(rest.to_string())
            }
            "scan" => Self::Scan(rest.to_string()),
            "search" => Self::Search(rest.to_string()),
            "filter" => {
                let filter = rest.parse::<CategoryFilter>().map_err(|_| ConsoleCommandError::InvalidArgument {
                    what: "category",
                    value: rest.to_string(),
                })?;
                Self::Filter(filter)
            }
            "list" | "ls" => Self::List,
            "open" => {
                if rest.is_empty() {
                    return Err(ConsoleCommandError::MissingArgument { command: "open", argument: "a card number or report path" });
                }
                match rest.parse::<usize>() {
                    Ok(0) => {
                        return Err(ConsoleCommandError::InvalidArgument { what: "card number", value: rest.to_string() });
                    }
                    Ok(position) => Self::Open(OpenTarget::Card(position)),
                    Err(_) => Self::Open(OpenTarget::Path(rest.to_string())),
                }
            }
            "close" => Self::Close,
            "backdrop" => Self::Backdrop,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ConsoleCommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

pub const HELP: &str = "\
Commands:
  tab analyze|repo|reports   switch panel (reports reloads the list)
  lang <language>            language sent with snippets
  analyze <code>             analyze a one-line snippet
  analyze-file <path>        analyze a file's contents
  scan <repo path>           list files the backend would analyze
  search <text>              filter reports by text (empty clears)
  filter all|quality|impact|analysis
  list                       show the report list
  open <n>|<path>            open a report
  close | backdrop           close the report viewer
  status                     backend health and control states
  help | quit";
