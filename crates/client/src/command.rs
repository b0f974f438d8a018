//! Line commands accepted by the terminal front end.

use std::str::FromStr;

use marquee_core::error::CoreError;

use crate::form::FormField;

/// Text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  set <field> <value>   fill a form field (title, director, genre, year, rating, duration)
  add                   add the form as a new movie
  stage                 add the form to the temp collection
  replace               replace the collection with the temp collection
  show                  show the current collection
  select <id>           show details for one movie
  edit <id>             load a listed movie into the form
  update                save the form over the movie being edited
  delete <id>           delete one movie
  delete-all            delete every movie
  list                  re-fetch the collection
  help                  print this text
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Add,
    Stage,
    Replace,
    Show,
    Select(String),
    Edit(String),
    Update,
    Delete(String),
    DeleteAll,
    List,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CoreError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                Command::Set(field.parse()?, value.trim().to_string())
            }
            "add" => Command::Add,
            "stage" | "temp" => Command::Stage,
            "replace" => Command::Replace,
            "show" => Command::Show,
            "select" => Command::Select(rest.to_string()),
            "edit" => Command::Edit(required(verb, rest)?),
            "update" => Command::Update,
            "delete" => Command::Delete(required(verb, rest)?),
            "delete-all" => Command::DeleteAll,
            "list" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(CoreError::Validation(format!(
                    "unknown command '{other}', try 'help'"
                )))
            }
        };
        Ok(command)
    }
}

fn required(verb: &str, arg: &str) -> Result<String, CoreError> {
    if arg.is_empty() {
        return Err(CoreError::Validation(format!("'{verb}' needs a movie id")));
    }
    Ok(arg.to_string())
}
