//! Command-line driver running the comment handler against an in-memory
//! record store.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError, ConfigManager};
use crate::handler::{FormHandler, Request, CUSTOMER_ID_FIELD, CUSTOMER_ID_PARAM, HELLO_FIELD};
use crate::record::{FieldMap, MemoryRecordStore, RecordError, RecordType};
use crate::widget::{FieldValue, Page};

pub const USAGE: &str = "Usage: serverwidget_cli <command>\n\
     Commands:\n  \
     get <customer id>\n  \
     post <customer id> [text]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Input(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("Output failed: {0}")]
    Output(String),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get { id: String },
    Post { id: String, text: Option<String> },
}

impl Command {
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let name = args
            .next()
            .ok_or_else(|| CliError::Input("missing command".into()))?;
        let id = args
            .next()
            .ok_or_else(|| CliError::Input(format!("`{}` needs a customer id", name)))?;
        let command = match name.as_str() {
            "get" => Command::Get { id },
            "post" => {
                let rest: Vec<String> = args.by_ref().collect();
                let text = if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                };
                Command::Post { id, text }
            }
            other => return Err(CliError::Input(format!("unknown command `{}`", other))),
        };
        if let Some(extra) = args.next() {
            return Err(CliError::Input(format!("unexpected argument `{}`", extra)));
        }
        Ok(command)
    }

    fn into_request(self, config: &Config) -> Request {
        match self {
            Command::Get { id } => {
                Request::get(FieldMap::new()).with_parameter(CUSTOMER_ID_PARAM, id_value(&id))
            }
            Command::Post { id, text } => Request::post(FieldMap::new())
                .with_parameter(CUSTOMER_ID_FIELD, id_value(&id))
                .with_parameter(HELLO_FIELD, text.unwrap_or_else(|| config.greeting.clone())),
        }
    }
}

fn id_value(id: &str) -> FieldValue {
    match id.parse::<u64>() {
        Ok(number) => FieldValue::from(number),
        Err(_) => FieldValue::from(id),
    }
}

/// Store seeded with the demo customers.
pub fn demo_store(record_type: RecordType) -> Result<MemoryRecordStore, CliError> {
    let store = MemoryRecordStore::new();
    let customers = [
        ("6", json!({"entityid": "Foo Bar Inc.", "comments": "Foo Bar"})),
        ("7", json!({"entityid": "Acme Corp.", "comments": ""})),
    ];
    for (id, values) in customers {
        let values = match values {
            FieldValue::Object(map) => map,
            _ => FieldMap::new(),
        };
        store.insert(record_type, id, values)?;
    }
    Ok(store)
}

/// Runs one command and writes the resulting page as JSON to `out`.
pub fn run<W: Write>(command: Command, config: Config, out: &mut W) -> Result<(), CliError> {
    let store = demo_store(config.record_type)?;
    let request = command.into_request(&config);
    debug!(?request, "dispatching cli request");

    let handler = FormHandler::new(store, config);
    let mut pages: Vec<Page> = Vec::new();
    handler.on_request(&request, &mut pages);
    for page in pages {
        writeln!(out, "{}", page.to_json()?)?;
    }
    Ok(())
}

pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::new()?.load()?;
    crate::init_with_filter(&config.log_filter);

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", USAGE);
            return Err(err);
        }
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(command, config, &mut out)
}

/// Formats an error line for the terminal.
pub fn error_line(err: &CliError) -> String {
    format!("ERROR: [x] {}", err).red().to_string()
}
