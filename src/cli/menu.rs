//! Interactive stock menu
//!
//! A line-based read-eval-print loop over the stock list. Input and output
//! are generic so whole sessions can be scripted.
//!
//! End of input acts as `4` at the main menu, as `quit` inside the Add and
//! Alter flows, and aborts the Check prompt. Lines that are not valid UTF-8
//! are decoded lossily and treated as ordinary input.

use std::io::{BufRead, Write};

use crossterm::style::{Color, Stylize};
use tracing::debug;

use crate::display::{format_filter_report, format_name_list, format_unavailable};
use crate::error::StockResult;
use crate::models::ProductFilter;
use crate::services::{parse_amount, StockService, UpsertOutcome};

/// Printed for the `-v` command
pub const VERSION_BANNER: &str = "Version control: 1.01";

const RULE: &str = "---------------------------------------------------------------------------";
const WIDE_RULE: &str =
    "------------------------------------------------------------------------------------------";

/// A main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `1`: add items
    Add,
    /// `2`: update or remove items
    Alter,
    /// `3`: display items by category
    Check,
    /// `4`: save and exit
    Quit,
    /// `-v`: print the version banner
    Version,
    /// Anything else
    Unknown,
}

impl MenuCommand {
    /// Parse a line typed at the main menu
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuCommand::Add,
            "2" => MenuCommand::Alter,
            "3" => MenuCommand::Check,
            "4" => MenuCommand::Quit,
            "-v" => MenuCommand::Version,
            _ => MenuCommand::Unknown,
        }
    }
}

/// The interactive menu driving a [`StockService`]
pub struct StockMenu<R, W> {
    service: StockService,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> StockMenu<R, W> {
    /// Create a menu reading commands from `input` and writing to `output`
    pub fn new(service: StockService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            color: true,
        }
    }

    /// Enable or disable colored status text
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// The underlying service
    pub fn service(&self) -> &StockService {
        &self.service
    }

    /// Consume the menu, returning the service
    pub fn into_service(self) -> StockService {
        self.service
    }

    /// Run the main loop until `4` or end of input
    ///
    /// Only console I/O failures are returned; storage failures are reported
    /// on the console and the loop continues.
    pub fn run(&mut self) -> StockResult<()> {
        loop {
            self.print_main_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("end of input at main menu");
                self.persist()?;
                return Ok(());
            };

            match MenuCommand::parse(&line) {
                MenuCommand::Add => self.add_items()?,
                MenuCommand::Alter => {
                    self.alter_stock()?;
                    self.persist()?;
                }
                MenuCommand::Check => self.check_stock()?,
                MenuCommand::Quit => {
                    self.persist()?;
                    return Ok(());
                }
                MenuCommand::Version => writeln!(self.output, "{}", VERSION_BANNER)?,
                MenuCommand::Unknown => debug!(input = %line, "ignoring menu input"),
            }
        }
    }

    fn print_main_menu(&mut self) -> StockResult<()> {
        self.say("Stock List", Color::Blue)?;
        self.say("Choose from the options below", Color::White)?;
        self.say(" 1.Add\n 2.Alter\n 3.Check\n 4.Quit", Color::White)
    }

    /// Add flow: prompt for items until `quit`, then save and list unavailable items
    fn add_items(&mut self) -> StockResult<()> {
        writeln!(self.output, "Make a list to see whether we have any of the items in stock")?;
        writeln!(self.output, "Add an item: ")?;

        loop {
            let Some(name) = self.prompt("Enter the item name (type 'quit' to exit): ")? else {
                break;
            };
            if name.eq_ignore_ascii_case("quit") {
                break;
            }

            let Some(category) = self.prompt("Is it a food product or non-food product? ")? else {
                break;
            };
            let Some(raw_amount) = self.prompt("Enter the amount: ")? else {
                break;
            };

            match parse_amount(&raw_amount) {
                Ok(amount) => {
                    let available = self.service.add_item(&name, &category, amount).available;
                    if !available {
                        self.say(&format!("{} is out of stock", name), Color::Yellow)?;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "rejected amount");
                    self.say("Invalid amount. Enter a valid number", Color::Red)?;
                }
            }
        }

        self.say(RULE, Color::Green)?;
        self.persist()?;

        let report = format_unavailable(&self.service.unavailable());
        self.say(report.trim_end(), Color::Red)
    }

    /// Alter flow: update-or-insert and remove, until `quit`
    fn alter_stock(&mut self) -> StockResult<()> {
        loop {
            self.say("Select the option you want to pick", Color::White)?;
            writeln!(self.output, "\n1. Update\n2. Remove\n(type 'quit' to go back)")?;

            let Some(choice) = self.read_line()? else {
                break;
            };

            let done = match choice.as_str() {
                "quit" => true,
                "1" => !self.update_item()?,
                "2" => !self.remove_item()?,
                _ => {
                    self.say("Invalid input", Color::Red)?;
                    false
                }
            };

            self.say(RULE, Color::Green)?;
            let names = format_name_list(self.service.products());
            self.say(names.trim_end(), Color::White)?;

            if done {
                break;
            }
        }

        Ok(())
    }

    /// Returns `false` when input ended mid-prompt
    fn update_item(&mut self) -> StockResult<bool> {
        let Some(name) = self.prompt("Enter the product name you want to update: ")? else {
            return Ok(false);
        };
        let exists = self.service.find(&name).is_some();

        let Some(category) = self.prompt("Specify the type of product: ")? else {
            return Ok(false);
        };
        let amount_prompt = if exists {
            "Enter the new amount: "
        } else {
            "Enter the amount: "
        };
        let Some(raw_amount) = self.prompt(amount_prompt)? else {
            return Ok(false);
        };

        match parse_amount(&raw_amount) {
            Ok(amount) => match self.service.upsert(&name, &category, amount) {
                UpsertOutcome::Updated { before } => {
                    writeln!(self.output, "Updated {}", before.name)?;
                }
                UpsertOutcome::Inserted => {
                    writeln!(self.output, "Added {}", name)?;
                }
            },
            Err(e) => {
                debug!(error = %e, "rejected amount");
                self.say("Invalid amount. Please enter a valid number.", Color::Red)?;
            }
        }

        self.persist()?;
        Ok(true)
    }

    /// Returns `false` when input ended mid-prompt
    fn remove_item(&mut self) -> StockResult<bool> {
        let Some(name) = self.prompt("What do you want to remove?: ")? else {
            return Ok(false);
        };

        match self.service.remove(&name) {
            0 => self.say(&format!("{} not found in stock", name), Color::Red)?,
            removed => {
                writeln!(self.output, "Removed {} item(s) named {}", removed, name)?;
                self.persist()?;
            }
        }

        Ok(true)
    }

    /// Check flow: show products for one category filter
    fn check_stock(&mut self) -> StockResult<()> {
        let Some(raw) = self.prompt("What type of stock do you want to display: Food, Non-Food, or all?")? else {
            return Ok(());
        };

        let filter = match raw.parse::<ProductFilter>() {
            Ok(filter) => filter,
            Err(keyword) => {
                return self.say(
                    &format!(
                        "Invalid product type: {}. Please enter 'food', 'non-food', or 'all'.",
                        keyword
                    ),
                    Color::Red,
                );
            }
        };

        let report = format_filter_report(filter, &self.service.filter(filter));
        write!(self.output, "{}", report)?;
        self.say(WIDE_RULE, Color::Green)
    }

    /// Save the list, reporting the outcome on the console
    fn persist(&mut self) -> StockResult<()> {
        match self.service.save() {
            Ok(()) => self.say("Stock data saved successfully.", Color::Green),
            Err(e) => self.say(&format!("Error saving stock data: {}", e), Color::Red),
        }
    }

    fn prompt(&mut self, text: &str) -> StockResult<Option<String>> {
        writeln!(self.output, "{}", text)?;
        self.read_line()
    }

    /// Read one trimmed line, or `None` at end of input
    fn read_line(&mut self) -> StockResult<Option<String>> {
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn say(&mut self, text: &str, color: Color) -> StockResult<()> {
        if self.color {
            writeln!(self.output, "{}", text.with(color))?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }
}
