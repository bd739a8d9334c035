//! `key=value` argument extraction for terminal commands.
//!
//! Only `name`, `email` and `message` are recognised. A value is either a bare
//! run of non-whitespace or a double-quoted string which may contain
//! whitespace and `\"` escapes. Anything else in the line is ignored. When a
//! key appears more than once the last occurrence wins.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKey {
    Name,
    Email,
    Message,
}

impl ArgKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgKey::Name => "name",
            ArgKey::Email => "email",
            ArgKey::Message => "message",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(ArgKey::Name),
            "email" => Some(ArgKey::Email),
            "message" => Some(ArgKey::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ParsedArgs {
    pub fn get(&self, key: ArgKey) -> Option<&str> {
        match key {
            ArgKey::Name => self.name.as_deref(),
            ArgKey::Email => self.email.as_deref(),
            ArgKey::Message => self.message.as_deref(),
        }
    }

    fn set(&mut self, key: ArgKey, value: String) {
        match key {
            ArgKey::Name => self.name = Some(value),
            ArgKey::Email => self.email = Some(value),
            ArgKey::Message => self.message = Some(value),
        }
    }

    /// Keys that were not supplied, in `name, email, message` order.
    pub fn missing(&self) -> Vec<ArgKey> {
        [ArgKey::Name, ArgKey::Email, ArgKey::Message]
            .into_iter()
            .filter(|k| self.get(*k).is_none())
            .collect()
    }
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Key must start a token so `username=x` does not yield `name`.
        Regex::new(r#"(?:^|\s)(name|email|message)=("(?:[^"\\]|\\.)*"|\S+)"#)
            .expect("argument pattern is valid")
    })
}

/// Parse the part of a command line that follows the verb.
pub fn parse(rest: &str) -> ParsedArgs {
    let mut parsed = ParsedArgs::default();
    for caps in pattern().captures_iter(rest) {
        let Some(key) = ArgKey::from_key(&caps[1]) else {
            continue;
        };
        parsed.set(key, unquote(&caps[2]));
    }
    parsed
}

fn unquote(raw: &str) -> String {
    match raw
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) if raw.len() >= 2 => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        _ => raw.to_string(),
    }
}
