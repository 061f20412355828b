//! Reporter implementations.

mod console;
mod log;

pub use self::{console::ConsoleReporter, log::LogReporter};
