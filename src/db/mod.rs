mod file;

pub use file::{load, save, LoadError};
