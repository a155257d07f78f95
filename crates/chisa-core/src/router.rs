//! Command parsing: raw message text -> structured command.

/// A parsed command. Ephemeral: built per inbound message, dropped after
/// dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// Prefix that matched, e.g. ".".
    pub prefix: String,
    /// Lowercased command word.
    pub name: String,
    /// Whitespace-tokenized arguments after the command word.
    pub args: Vec<String>,
    /// Untokenized remainder after the command word, interior whitespace and
    /// punctuation preserved. For handlers that want natural-language input.
    pub raw_args: String,
}

#[derive(Clone, Debug)]
pub struct CommandParser {
    prefixes: Vec<String>,
}

impl CommandParser {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Attempt to parse a command from the given text.
    ///
    /// Returns `None` if the text does not start with any known prefix, or if
    /// nothing but whitespace follows the prefix. Callers use `None` to fall
    /// through to other text handling (e.g. game answers).
    pub fn parse(&self, text: &str) -> Option<Command> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        for prefix in &self.prefixes {
            let Some(body) = text.strip_prefix(prefix.as_str()) else {
                continue;
            };

            let mut fields = body.split_whitespace();
            let head = fields.next()?;
            let args: Vec<String> = fields.map(str::to_string).collect();

            // Remainder after the command word, untouched except for edge trim.
            let raw_args = if args.is_empty() {
                String::new()
            } else {
                body.trim_start()
                    .strip_prefix(head)
                    .unwrap_or("")
                    .trim()
                    .to_string()
            };

            return Some(Command {
                prefix: prefix.clone(),
                name: head.to_lowercase(),
                args,
                raw_args,
            });
        }

        None
    }
}
