use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(String, String),
    Get(String),
    Del(String),
    Expire(String, i64),
    Dragon,
    Help(Option<String>),
    Exit,
}

impl ToString for Command {
    fn to_string(&self) -> String {
        match self {
            Command::Set(k, v) => format!("SET {} {}", k, v),
            Command::Get(k) => format!("GET {}", k),
            Command::Del(k) => format!("DEL {}", k),
            Command::Expire(k, secs) => format!("EXPIRE {} {}", k, secs),
            Command::Dragon => "DRAGON".to_owned(),
            Command::Help(Some(topic)) => format!("HELP {}", topic),
            Command::Help(None) => "HELP".to_owned(),
            Command::Exit => "EXIT".to_owned(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Error: SET requires exactly two arguments")]
    SetArity,

    #[error("Error: {0} requires a key")]
    KeyArity(&'static str),

    #[error("Error: EXPIRE requires a key and number of seconds")]
    ExpireArity,

    #[error("Error: Invalid number of seconds")]
    InvalidSeconds(String),

    #[error("Unknown command. Type 'help' for a list of commands.")]
    Unknown(String),
}

/// Verbs with their one-line usage, in the order `HELP` lists them.
pub const VERBS: &[(&str, &str)] = &[
    ("SET", "Set a key-value pair: SET key value"),
    ("GET", "Get the value of a key: GET key"),
    ("DEL", "Delete a key: DEL key"),
    ("EXPIRE", "Set a key's time to live in seconds: EXPIRE key seconds"),
    ("DRAGON", "Display a dragon ASCII art"),
    ("HELP", "List commands, or show usage for one: HELP [command]"),
    ("EXIT", "Exit DragoDB"),
];

pub fn usage(verb: &str) -> Option<&'static str> {
    let verb = verb.to_uppercase();
    VERBS
        .iter()
        .find(|(name, _)| *name == verb)
        .map(|(_, text)| *text)
}

fn single_key(verb: &'static str, args: &[&str]) -> Result<String, CommandError> {
    match args {
        [key] => Ok((*key).to_owned()),
        _ => Err(CommandError::KeyArity(verb)),
    }
}

/// Parses one non-empty input line. Only argument counts and the EXPIRE
/// seconds are checked here; keys and values are passed through as-is.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    match verb.to_uppercase().as_str() {
        "SET" => match args.as_slice() {
            [key, value] => Ok(Command::Set((*key).to_owned(), (*value).to_owned())),
            _ => Err(CommandError::SetArity),
        },
        "GET" => single_key("GET", &args).map(Command::Get),
        "DEL" => single_key("DEL", &args).map(Command::Del),
        "EXPIRE" => match args.as_slice() {
            [key, seconds] => {
                let seconds = seconds
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidSeconds((*seconds).to_owned()))?;
                Ok(Command::Expire((*key).to_owned(), seconds))
            }
            _ => Err(CommandError::ExpireArity),
        },
        "DRAGON" => Ok(Command::Dragon),
        "HELP" => Ok(Command::Help(args.first().map(|s| (*s).to_owned()))),
        "EXIT" => Ok(Command::Exit),
        _ => Err(CommandError::Unknown(verb.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_command() {
        let command = parse_command("SET name dragon").unwrap();
        assert_eq!(command, Command::Set("name".into(), "dragon".into()));
    }

    #[test]
    fn test_verbs_are_case_insensitive() {
        assert_eq!(parse_command("get k").unwrap(), Command::Get("k".into()));
        assert_eq!(parse_command("dEl k").unwrap(), Command::Del("k".into()));
        assert_eq!(parse_command("Exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_keys_keep_their_case() {
        assert_eq!(
            parse_command("SET Key Value").unwrap(),
            Command::Set("Key".into(), "Value".into())
        );
    }

    #[test]
    fn test_set_arity() {
        assert_eq!(parse_command("SET k"), Err(CommandError::SetArity));
        assert_eq!(parse_command("SET k v extra"), Err(CommandError::SetArity));
    }

    #[test]
    fn test_get_and_del_require_one_key() {
        assert_eq!(parse_command("GET"), Err(CommandError::KeyArity("GET")));
        assert_eq!(parse_command("DEL a b"), Err(CommandError::KeyArity("DEL")));
        assert_eq!(
            CommandError::KeyArity("GET").to_string(),
            "Error: GET requires a key"
        );
    }

    #[test]
    fn test_expire_parses_signed_seconds() {
        assert_eq!(
            parse_command("EXPIRE k 10").unwrap(),
            Command::Expire("k".into(), 10)
        );
        assert_eq!(
            parse_command("expire k -1").unwrap(),
            Command::Expire("k".into(), -1)
        );
    }

    #[test]
    fn test_expire_rejects_non_integer_seconds() {
        let err = parse_command("EXPIRE k soon").unwrap_err();
        assert_eq!(err, CommandError::InvalidSeconds("soon".into()));
        assert_eq!(err.to_string(), "Error: Invalid number of seconds");
        assert_eq!(parse_command("EXPIRE k"), Err(CommandError::ExpireArity));
    }

    #[test]
    fn test_unknown_verb() {
        let err = parse_command("FLY away").unwrap_err();
        assert_eq!(err, CommandError::Unknown("FLY".into()));
        assert_eq!(
            err.to_string(),
            "Unknown command. Type 'help' for a list of commands."
        );
    }

    #[test]
    fn test_help_topics() {
        assert_eq!(parse_command("help").unwrap(), Command::Help(None));
        assert_eq!(
            parse_command("HELP expire").unwrap(),
            Command::Help(Some("expire".into()))
        );
        assert_eq!(
            usage("expire"),
            Some("Set a key's time to live in seconds: EXPIRE key seconds")
        );
        assert_eq!(usage("fly"), None);
        assert_eq!(parse_command("?"), Err(CommandError::Unknown("?".into())));
    }

    #[test]
    fn test_command_to_string() {
        assert_eq!(Command::Expire("k".into(), -3).to_string(), "EXPIRE k -3");
        assert_eq!(Command::Help(None).to_string(), "HELP");
    }
}
