//! # Register Shell
//!
//! Line-oriented terminal front-end over [`Register`].
//!
//! ## Commands
//! ```text
//! name <text>   type into the item name field (shows suggestions)
//! qty <text>    type into the quantity field
//! pick <n>      copy suggestion n (1-based) into the name field
//! add           add the form contents to the bill
//! clear         clear the bill
//! list          item list and current total
//! bill          full invoice
//! json          bill snapshot as JSON
//! catalog       product list
//! help          this text
//! quit          leave the shell
//! ```
//!
//! Input and output are generic so tests can drive the shell from a byte
//! buffer.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::commands::bill::BillResponse;
use crate::error::ApiError;
use crate::register::{Notice, NoticeKind, Register};

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  name <text>   type into the item name field
  qty <text>    type into the quantity field
  pick <n>      use suggestion n for the item name
  add           add the item to the bill
  clear         clear the bill
  list          show items and current total
  bill          show the invoice
  json          print the bill as JSON
  catalog       list products and prices
  help          show this text
  quit          exit";

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Name(String),
    Quantity(String),
    /// Zero-based suggestion index.
    Pick(usize),
    Add,
    Clear,
    List,
    Bill,
    Json,
    Catalog,
    Help,
    Quit,
}

/// Shell input that does not map to an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command `{0}`. Type `help` for the list of commands.")]
    UnknownCommand(String),

    #[error("`pick` needs a suggestion number, starting at 1.")]
    InvalidPick,
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));

        match command.to_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "name" => Ok(Action::Name(argument.to_string())),
            "qty" => Ok(Action::Quantity(argument.to_string())),
            "pick" => argument
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .map(Action::Pick)
                .ok_or(ParseError::InvalidPick),
            "add" => Ok(Action::Add),
            "clear" => Ok(Action::Clear),
            "list" => Ok(Action::List),
            "bill" => Ok(Action::Bill),
            "json" => Ok(Action::Json),
            "catalog" => Ok(Action::Catalog),
            "help" => Ok(Action::Help),
            "quit" | "exit" => Ok(Action::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Runs the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(register: &mut Register, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "=== {} ===", register.config().store_name)?;
    writeln!(output, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        debug!(action = ?action, "shell action");
        if !dispatch(register, action, &mut output)? {
            break;
        }
    }

    writeln!(output)?;
    Ok(())
}

/// Applies one action. Returns `false` when the shell should stop.
fn dispatch<W: Write>(register: &mut Register, action: Action, output: &mut W) -> io::Result<bool> {
    match action {
        Action::Name(text) => {
            let response = register.type_name(&text);
            for (i, name) in response.suggestions.iter().enumerate() {
                writeln!(output, "  {}) {}", i + 1, name)?;
            }
        }
        Action::Quantity(text) => register.type_quantity(&text),
        Action::Pick(index) => match register.select_suggestion(index) {
            Some(name) => writeln!(output, "Item: {name}")?,
            None => writeln!(output, "No suggestion number {}.", index + 1)?,
        },
        Action::Add => match register.submit_add() {
            Ok(response) => write_bill_list(output, &response)?,
            Err(notice) => write_notice(output, &notice)?,
        },
        Action::Clear => {
            let notice = register.clear_bill();
            write_notice(output, &notice)?;
        }
        Action::List => write_bill_list(output, &register.bill_view())?,
        Action::Bill => {
            let invoice = register.invoice_text();
            write!(output, "{}", invoice.text)?;
            writeln!(output, "{}", invoice.grand_total_label)?;
        }
        Action::Json => {
            let snapshot = register.bill().snapshot();
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => writeln!(output, "{json}")?,
                Err(err) => write_notice(output, &ApiError::internal(err.to_string()).into())?,
            }
        }
        Action::Catalog => {
            for product in register.products() {
                writeln!(output, "{:<20}{}", product.name, product.price_display)?;
            }
        }
        Action::Help => writeln!(output, "{HELP}")?,
        Action::Quit => return Ok(false),
    }
    Ok(true)
}

fn write_bill_list<W: Write>(output: &mut W, response: &BillResponse) -> io::Result<()> {
    if response.items.is_empty() {
        writeln!(output, "(no items)")?;
    }
    for row in &response.items {
        writeln!(output, "{:<20}{:<8}{}", row.name, row.quantity, row.subtotal_display)?;
    }
    writeln!(output, "{}", response.current_total_label)
}

fn write_notice<W: Write>(output: &mut W, notice: &Notice) -> io::Result<()> {
    let tag = match notice.kind {
        NoticeKind::Info => "info",
        NoticeKind::Warning => "warning",
    };
    writeln!(output, "[{tag}] {}: {}", notice.title, notice.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut register = Register::default();
        let mut output = Vec::new();
        run(&mut register, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("name ch".parse::<Action>(), Ok(Action::Name("ch".to_string())));
        assert_eq!("name Cheese (200g)".parse::<Action>(), Ok(Action::Name("Cheese (200g)".to_string())));
        assert_eq!("qty 3".parse::<Action>(), Ok(Action::Quantity("3".to_string())));
        assert_eq!("pick 2".parse::<Action>(), Ok(Action::Pick(1)));
        assert_eq!("ADD".parse::<Action>(), Ok(Action::Add));
        assert_eq!("quit\r\n".parse::<Action>(), Ok(Action::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<Action>(), Err(ParseError::Empty));
        assert_eq!("pick 0".parse::<Action>(), Err(ParseError::InvalidPick));
        assert_eq!("pick x".parse::<Action>(), Err(ParseError::InvalidPick));
        assert_eq!(
            "checkout".parse::<Action>(),
            Err(ParseError::UnknownCommand("checkout".to_string()))
        );
    }

    #[test]
    fn test_add_and_list() {
        let out = run_script("name Milk(1L)\nqty 2\nadd\nname Bread\nqty 1\nadd\nlist\nquit\n");

        assert!(out.starts_with("=== SuperMart Billing System ===\n"));
        assert!(out.contains("Milk(1L)            2       ₹6.00\n"));
        assert!(out.contains("Bread               1       ₹2.25\n"));
        assert!(out.contains("Current Total: ₹8.25\n"));
    }

    #[test]
    fn test_suggestions_and_pick() {
        let out = run_script("name ch\npick 2\nqty 1\nadd\npick 1\n");

        assert!(out.contains("  1) Cheese (200g)\n  2) Chicken(1kg)\n"));
        assert!(out.contains("Item: Chicken(1kg)\n"));
        assert!(out.contains("Current Total: ₹8.75\n"));
        assert!(out.contains("No suggestion number 1.\n"));
    }

    #[test]
    fn test_rejected_add_prints_warning() {
        let out = run_script("name Kiwi\nqty 2\nadd\nname Apple\nqty abc\nadd\n");

        assert!(out.contains("[warning] Product Not Found: Kiwi is not in our product database.\n"));
        assert!(out.contains("[warning] Input Error: Quantity must be a whole number.\n"));
    }

    #[test]
    fn test_clear_and_bill() {
        let out = run_script("bill\nname Apple\nqty 1\nadd\nclear\nlist\n");

        assert!(out.contains("No items added yet. Add items in the 'Add items' tab.\nGrand Total: ₹0.00\n"));
        assert!(out.contains("[info] Bill Cleared: The current bill has been cleared.\n"));
        assert!(out.contains("(no items)\nCurrent Total: ₹0.00\n"));
    }

    #[test]
    fn test_json_output() {
        let out = run_script("name Apple\nqty 4\nadd\njson\n");

        let start = out.find('{').unwrap();
        let end = out.rfind('}').unwrap();
        let json: serde_json::Value = serde_json::from_str(&out[start..=end]).unwrap();
        assert_eq!(json["lines"][0]["product_name"], "Apple");
        assert_eq!(json["lines"][0]["quantity"], 4);
        assert_eq!(json["totals"]["grand_total"], 1000);
    }

    #[test]
    fn test_unknown_command_and_catalog() {
        let out = run_script("checkout\ncatalog\n");

        assert!(out.contains("Unknown command `checkout`."));
        assert!(out.contains("Apple               ₹2.50\n"));
        assert!(out.contains("Water Bottle        ₹1.00\n"));
    }
}
