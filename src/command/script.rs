//! Script parsing and execution.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::command::Command;
use crate::common::{Error, ProductId, Result};
use crate::store::{Catalog, Placement};

/// A parsed command script.
///
/// Tokens are separated by any whitespace, so line breaks inside a command
/// are allowed. Anything after the announced number of commands is ignored.
///
/// # Example
/// ```
/// use warehousedb::command::Script;
/// use warehousedb::Placement;
///
/// let script = Script::parse("2\nadd 1 7 kettle 10 2\npurchase 5 7 4\n").unwrap();
/// let catalog = script.run(Placement::Home);
/// assert_eq!(catalog.get(7u32).unwrap().stock(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Parse a script.
    ///
    /// # Errors
    /// - `Error::UnexpectedEof` if the input ends before the count is met
    /// - `Error::UnknownCommand` for a verb other than add/restock/purchase/delete
    /// - `Error::Parse` for a token that is not a valid number
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        let count: usize = tokens.number("command count")?;
        let mut commands = Vec::with_capacity(count.min(tokens.remaining()));
        for _ in 0..count {
            commands.push(parse_command(&mut tokens)?);
        }

        debug!(commands = commands.len(), "parsed script");
        Ok(Self { commands })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Apply every command in order. Returns how many changed the catalog.
    pub fn apply_to(&self, catalog: &mut Catalog, placement: Placement) -> usize {
        self.commands
            .iter()
            .filter(|command| command.apply(catalog, placement))
            .count()
    }

    /// Apply the script to a fresh catalog.
    pub fn run(&self, placement: Placement) -> Catalog {
        let mut catalog = Catalog::new();
        let applied = self.apply_to(&mut catalog, placement);
        debug!(applied, skipped = self.len() - applied, "script finished");
        catalog
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.commands.len())?;
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}

fn parse_command(tokens: &mut Tokens<'_>) -> Result<Command> {
    let (line, verb) = tokens.next("command")?;

    let command = match verb {
        "add" => Command::Add {
            day: tokens.number("day")?,
            id: ProductId::new(tokens.number("product id")?),
            name: tokens.next("product name")?.1.to_string(),
            stock: tokens.number("stock")?,
            demand: tokens.number("demand")?,
        },
        "restock" => Command::Restock {
            id: ProductId::new(tokens.number("product id")?),
            amount: tokens.number("amount")?,
        },
        "purchase" => Command::Purchase {
            day: tokens.number("day")?,
            id: ProductId::new(tokens.number("product id")?),
            amount: tokens.number("amount")?,
        },
        "delete" => Command::Delete {
            id: ProductId::new(tokens.number("product id")?),
        },
        other => {
            return Err(Error::UnknownCommand {
                line,
                verb: other.to_string(),
            })
        }
    };
    Ok(command)
}

/// Whitespace-separated tokens tagged with their 1-based line number.
struct Tokens<'a> {
    tokens: std::vec::IntoIter<(usize, &'a str)>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let tokens: Vec<(usize, &'a str)> = input
            .lines()
            .enumerate()
            .flat_map(|(n, line)| line.split_whitespace().map(move |token| (n + 1, token)))
            .collect();
        Self {
            tokens: tokens.into_iter(),
        }
    }

    fn remaining(&self) -> usize {
        self.tokens.len()
    }

    fn next(&mut self, expected: &'static str) -> Result<(usize, &'a str)> {
        self.tokens.next().ok_or(Error::UnexpectedEof { expected })
    }

    fn number<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let (line, token) = self.next(expected)?;
        token.parse().map_err(|_| Error::Parse {
            line,
            message: format!("expected {expected}, found '{token}'"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_verb() {
        let script = Script::parse(
            "4\n\
             add 1 3 pan 2 1\n\
             restock 3 10\n\
             purchase 2 3 1\n\
             delete 3\n",
        )
        .unwrap();

        assert_eq!(
            script.commands(),
            &[
                Command::Add {
                    day: 1,
                    id: ProductId::new(3),
                    name: "pan".to_string(),
                    stock: 2,
                    demand: 1,
                },
                Command::Restock {
                    id: ProductId::new(3),
                    amount: 10,
                },
                Command::Purchase {
                    day: 2,
                    id: ProductId::new(3),
                    amount: 1,
                },
                Command::Delete { id: ProductId::new(3) },
            ]
        );
    }

    #[test]
    fn test_parse_ignores_line_layout_and_trailing_tokens() {
        let script = Script::parse("1 add\n1 3\npan 2 1 delete 3").unwrap();
        assert_eq!(script.len(), 1);
    }

    #[test]
    fn test_parse_zero_commands() {
        let script = Script::parse("0\n").unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        let err = Script::parse("").unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedEof {
                expected: "command count"
            }
        ));
    }

    #[test]
    fn test_parse_truncated_script() {
        let err = Script::parse("2\nadd 1 3 pan 2 1\n").unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { expected: "command" }));

        let err = Script::parse("1\nadd 1 3 pan").unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { expected: "stock" }));
    }

    #[test]
    fn test_parse_unknown_verb_reports_line() {
        let err = Script::parse("2\ndelete 3\nsell 3 1\n").unwrap_err();
        match err {
            Error::UnknownCommand { line, verb } => {
                assert_eq!(line, 3);
                assert_eq!(verb, "sell");
            }
            other => panic!("Expected UnknownCommand, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bad_number_reports_line() {
        let err = Script::parse("1\nrestock 3\nten\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("amount"));
                assert!(message.contains("'ten'"));
            }
            other => panic!("Expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_negative_amount() {
        assert!(matches!(
            Script::parse("1\npurchase 2 3 -1").unwrap_err(),
            Error::Parse { line: 2, .. }
        ));
    }

    #[test]
    fn test_display_reparses() {
        let text = "2\nadd 1 3 pan 2 1\npurchase 2 3 1\n";
        let script = Script::parse(text).unwrap();
        assert_eq!(script.to_string(), text);
    }

    #[test]
    fn test_run_counts_applied_commands() {
        let script = Script::parse(
            "4\n\
             add 1 7 kettle 10 2\n\
             purchase 5 7 4\n\
             purchase 6 7 100\n\
             delete 17\n",
        )
        .unwrap();

        let mut catalog = Catalog::new();
        assert_eq!(script.apply_to(&mut catalog, Placement::Home), 2);

        let record = catalog.get(7u32).unwrap();
        assert_eq!(record.stock(), 6);
        assert_eq!(record.demand(), 6);
        assert_eq!(record.last_purchase_day(), 5);
    }
}
