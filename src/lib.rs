pub mod args;
pub mod cli;
pub mod db;
pub mod ledger;
pub mod terminal;
