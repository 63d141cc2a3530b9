/// Command parser for the interactive session
///
/// This module provides a parser for the route explorer's command language
/// using the pest library. It is the only place where raw user input is
/// normalized before reaching the graph store.

pub mod ast;
mod builder;

pub use ast::Command;
pub use builder::{normalize_city, parse_distance};

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "parser/command.pest"]
pub struct CommandParser;

/// Parser errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Pest parsing error: {0}")]
    PestError(#[from] Box<pest::error::Error<Rule>>),

    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    #[error("City name must not be empty")]
    EmptyCity,

    #[error("Invalid distance '{value}': {reason}")]
    InvalidDistance { value: String, reason: &'static str },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse one input line into a command
///
/// # Arguments
/// * `input` - A single command line
///
/// # Returns
/// * `Ok(Command)` - Parsed and normalized command
/// * `Err(ParseError)` - Parse or validation error
///
/// # Examples
/// ```
/// use city_pathfinder::parser::{parse_command, Command};
///
/// let command = parse_command("add nyc boston 215").unwrap();
/// assert!(matches!(command, Command::AddPath { distance: 215, .. }));
/// ```
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let pairs = CommandParser::parse(Rule::command, input.trim())
        .map_err(|e| ParseError::PestError(Box::new(e)))?;

    builder::build_command(pairs)
}
