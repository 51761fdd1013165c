use anyhow::Result;
use chrono::NaiveDate;
use console::{pad_str, style, Alignment, StyledObject};
use rust_decimal::Decimal;
use std::path::Path;

use crate::args::Args;
use crate::db;
use crate::ledger::{
    current_balance, parse_operation, running_balances, DeleteOutcome, Ledger, Operation,
    PendingDelete, RowSelection, DATE_FORMAT,
};
use crate::terminal;

const MENU: &[&str] = &[
    "Add operations",
    "List operations",
    "Load ledger",
    "Save ledger",
    "Delete operation",
    "Current balance",
    "Quit",
];

pub fn main(_args: Args) -> Result<()> {
    Cli::new().run()
}

pub struct Cli {
    ledger: Ledger,
}

impl Cli {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            println!();
            match terminal::select("Main menu", MENU)? {
                Some(0) => self.main_add_operations()?,
                Some(1) => self.main_list_operations(),
                Some(2) => self.main_load()?,
                Some(3) => self.main_save()?,
                Some(4) => self.main_delete_operation()?,
                Some(5) => self.main_current_balance(),
                Some(_) => return Ok(()),
                None => {}
            }
        }
    }

    fn main_add_operations(&mut self) -> Result<()> {
        if terminal::confirm("Display the existing operations before entry?")? {
            self.print_operations();
        }
        loop {
            println!("{}", style_header("New operation:"));
            let date = terminal::input("Date (DD/MM/YY)")?;
            let description = terminal::input("Description")?;
            let debit = terminal::input("Debit")?;
            let credit = terminal::input("Credit")?;
            match parse_operation(&date, &description, &debit, &credit) {
                Ok(operation) => {
                    self.ledger.insert(operation);
                    println!("{}", style_notice("Operation recorded."));
                    if !terminal::confirm("Add another operation?")? {
                        return Ok(());
                    }
                }
                Err(err) => {
                    // Back to the form so the user can fix the input
                    println!("{}", style_error(&err.to_string()));
                    if !terminal::confirm("Try again?")? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn main_list_operations(&self) {
        self.print_operations();
    }

    fn main_load(&mut self) -> Result<()> {
        let file_name = terminal::input("File name")?;
        let file_name = file_name.trim();
        if file_name.is_empty() {
            println!("{}", style_error("Please enter a file name."));
            return Ok(());
        }
        let prompt =
            format!("Load the ledger from '{file_name}'? Unsaved operations will be lost.");
        if !terminal::confirm(&prompt)? {
            return Ok(());
        }
        match db::load(Path::new(file_name)) {
            Ok(ledger) => {
                self.ledger = ledger;
                println!(
                    "{}",
                    style_notice(&format!(
                        "Loaded {} operations from '{file_name}'.",
                        self.ledger.len()
                    ))
                );
            }
            // The in-memory ledger is untouched on any load failure
            Err(err @ db::LoadError::NotFound(_)) => {
                println!("{}", style_error(&err.to_string()));
            }
            Err(err) => {
                println!("{}", style_error(&format!("{:#}", anyhow::Error::new(err))));
            }
        }
        Ok(())
    }

    fn main_save(&mut self) -> Result<()> {
        let today = chrono::Local::now()
            .date_naive()
            .format(DATE_FORMAT)
            .to_string();
        let save_date = terminal::input_with_initial("Today's date (DD/MM/YY)", &today)?;
        let save_date = save_date.trim().to_string();
        if NaiveDate::parse_from_str(&save_date, DATE_FORMAT).is_err() {
            println!("{}", style_error("Invalid date format, use DD/MM/YY."));
            return Ok(());
        }
        let file_name = terminal::input("File name")?;
        let file_name = file_name.trim();
        if file_name.is_empty() {
            println!("{}", style_error("Please enter a file name."));
            return Ok(());
        }
        if !terminal::confirm(&format!("Save the ledger to '{file_name}'?"))? {
            return Ok(());
        }
        self.ledger.set_last_save_date(save_date);
        match db::save(&self.ledger, Path::new(file_name)) {
            Ok(()) => println!(
                "{}",
                style_notice(&format!("Ledger saved to '{file_name}'."))
            ),
            Err(err) => println!("{}", style_error(&format!("{err:#}"))),
        }
        Ok(())
    }

    fn main_delete_operation(&mut self) -> Result<()> {
        self.print_operations();
        if self.ledger.is_empty() {
            return Ok(());
        }

        // The selection list mirrors the displayed table, header line included.
        let balances = running_balances(self.ledger.operations());
        let mut rows = vec![table_header()];
        rows.extend(
            self.ledger
                .operations()
                .iter()
                .zip(&balances)
                .map(|(operation, balance)| format_row(operation, *balance)),
        );
        let selection = match terminal::select("Select the row to delete", &rows)? {
            Some(0) => RowSelection::Header,
            Some(row) => RowSelection::Data(row - 1),
            None => RowSelection::None,
        };

        let pending = match PendingDelete::begin(&self.ledger, selection) {
            Ok(pending) => pending,
            Err(err) => {
                println!("{}", style_error(&err.to_string()));
                return Ok(());
            }
        };

        let snapshot = pending.snapshot();
        let prompt = format!(
            "Delete this operation? {} {} (debit {:.2}, credit {:.2})",
            snapshot.date.format(DATE_FORMAT),
            snapshot.description,
            snapshot.debit,
            snapshot.credit,
        );
        let confirmed = terminal::confirm(&prompt)?;
        match pending.resolve(&mut self.ledger, confirmed)? {
            DeleteOutcome::Applied { .. } => {
                println!("{}", style_notice("Operation deleted."));
                self.print_operations();
            }
            DeleteOutcome::Cancelled => {}
        }
        Ok(())
    }

    fn main_current_balance(&self) {
        println!("{}", style_header("Current balance:"));
        println!("{}", style_balance(current_balance(self.ledger.operations())));
    }

    fn print_operations(&self) {
        println!("{}", style_header("Operations:"));
        if self.ledger.is_empty() {
            println!("(none)");
            return;
        }
        println!("{}", style(table_header()).yellow().bold());
        let balances = running_balances(self.ledger.operations());
        for (operation, balance) in self.ledger.operations().iter().zip(balances) {
            println!("{}", format_row(operation, balance));
        }
        if !self.ledger.last_save_date().is_empty() {
            println!(
                "{}",
                style(format!("Last saved: {}", self.ledger.last_save_date())).dim()
            );
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

fn table_header() -> String {
    format!(
        "{} {} {} {} {}",
        pad_str("Date", 10, Alignment::Right, None),
        pad_str("Description", 30, Alignment::Left, None),
        pad_str("Debit", 12, Alignment::Right, None),
        pad_str("Credit", 12, Alignment::Right, None),
        pad_str("Balance", 12, Alignment::Right, None),
    )
}

fn format_row(operation: &Operation, balance: Decimal) -> String {
    format!(
        "{} {} {} {} {}",
        pad_str(
            &operation.date.format(DATE_FORMAT).to_string(),
            10,
            Alignment::Right,
            None
        ),
        pad_str(&operation.description, 30, Alignment::Left, None),
        pad_str(&format!("{:.2}", operation.debit), 12, Alignment::Right, None),
        pad_str(
            &format!("{:.2}", operation.credit),
            12,
            Alignment::Right,
            None
        ),
        pad_str(
            &style_balance(balance).to_string(),
            12,
            Alignment::Right,
            None
        ),
    )
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold().underlined()
}

fn style_notice(notice: &str) -> StyledObject<&str> {
    style(notice).green()
}

fn style_error(message: &str) -> StyledObject<&str> {
    style(message).red().bold()
}

fn style_balance(balance: Decimal) -> StyledObject<String> {
    let result = style(format!("{balance:.2}")).bold();
    if balance < Decimal::ZERO {
        result.red()
    } else {
        result.green()
    }
}
