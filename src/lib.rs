pub mod cli;
pub mod config;
pub mod declaration;
pub mod error;
pub mod filesystem;
pub mod generator;
pub mod lexer;
pub mod mapping;
pub mod output;
pub mod resolver;
pub mod scanner;
pub mod source;
pub mod store;

#[cfg(test)]
#[allow(dead_code)]
mod mock_fs;

pub use error::{AutoloadError, ErrorKind, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit status for a failed command: configuration problems get their own code.
#[must_use]
pub const fn exit_code_for(error: &AutoloadError) -> i32 {
    match error.kind() {
        ErrorKind::Configuration => EXIT_CONFIG_ERROR,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
