/// Command builder - converts the pest parse tree into a `Command`
///
/// Input normalization lives here: city labels are trimmed and upper-cased,
/// distances must be non-negative whole numbers.

use super::ast::Command;
use super::{ParseError, ParseResult, Rule};
use crate::algorithms::SearchAlgorithm;
use crate::types::{CityId, Weight};
use pest::iterators::{Pair, Pairs};

/// Build a command from pest Pairs
pub fn build_command(pairs: Pairs<Rule>) -> ParseResult<Command> {
    for pair in pairs {
        if pair.as_rule() == Rule::command {
            let inner = pair
                .into_inner()
                .next()
                .ok_or_else(|| ParseError::InvalidSyntax("Empty command".into()))?;
            return build_inner(inner);
        }
    }
    Err(ParseError::InvalidSyntax("Empty command".into()))
}

fn build_inner(pair: Pair<Rule>) -> ParseResult<Command> {
    match pair.as_rule() {
        Rule::add_command => build_add(pair),
        Rule::search_command => build_search(pair),
        Rule::reset_command => Ok(Command::Reset),
        Rule::show_command => Ok(Command::Show {
            json: pair.into_inner().any(|p| p.as_rule() == Rule::json_flag),
        }),
        Rule::dot_command => Ok(Command::Dot),
        Rule::help_command => Ok(Command::Help),
        Rule::quit_command => Ok(Command::Quit),
        other => Err(ParseError::InvalidSyntax(format!(
            "Unknown command: {:?}",
            other
        ))),
    }
}

fn build_add(pair: Pair<Rule>) -> ParseResult<Command> {
    let mut cities = Vec::with_capacity(2);
    let mut distance = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::city => cities.push(build_city(inner)?),
            Rule::distance => distance = Some(parse_distance(inner.as_str())?),
            _ => {}
        }
    }

    let (from, to) = two_cities(cities, "add")?;
    let distance =
        distance.ok_or_else(|| ParseError::InvalidSyntax("add requires a distance".into()))?;

    Ok(Command::AddPath { from, to, distance })
}

fn build_search(pair: Pair<Rule>) -> ParseResult<Command> {
    let mut algorithm = None;
    let mut cities = Vec::with_capacity(2);

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::algorithm => {
                let parsed: SearchAlgorithm = inner
                    .as_str()
                    .parse()
                    .map_err(|e| ParseError::InvalidSyntax(format!("{}", e)))?;
                algorithm = Some(parsed);
            }
            Rule::city => cities.push(build_city(inner)?),
            _ => {}
        }
    }

    let algorithm =
        algorithm.ok_or_else(|| ParseError::InvalidSyntax("Missing algorithm".into()))?;
    let (start, end) = two_cities(cities, algorithm.name())?;

    Ok(Command::Search {
        algorithm,
        start,
        end,
    })
}

fn build_city(pair: Pair<Rule>) -> ParseResult<CityId> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::InvalidSyntax("Missing city".into()))?;

    let raw = match inner.as_rule() {
        Rule::quoted_city => inner
            .into_inner()
            .next()
            .map(|text| text.as_str())
            .unwrap_or(""),
        _ => inner.as_str(),
    };

    normalize_city(raw)
}

fn two_cities(cities: Vec<CityId>, command: &str) -> ParseResult<(CityId, CityId)> {
    let mut iter = cities.into_iter();
    match (iter.next(), iter.next()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ParseError::InvalidSyntax(format!(
            "{} requires two cities",
            command
        ))),
    }
}

/// Normalize a raw city label: trim and upper-case
///
/// # Errors
/// `ParseError::EmptyCity` if nothing is left after trimming
pub fn normalize_city(raw: &str) -> ParseResult<CityId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyCity);
    }
    Ok(CityId::new(trimmed.to_uppercase()))
}

/// Parse a distance as a non-negative whole number
///
/// # Errors
/// `ParseError::InvalidDistance` describing why the value was rejected
pub fn parse_distance(raw: &str) -> ParseResult<Weight> {
    raw.parse::<Weight>().map_err(|_| {
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        let reason = if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            "distance is too large"
        } else {
            match raw.parse::<f64>().ok().filter(|v| v.is_finite()) {
                Some(v) if v < 0.0 || raw.starts_with('-') => "distance must not be negative",
                Some(_) => "distance must be a whole number",
                None => "distance is not a number",
            }
        };
        ParseError::InvalidDistance {
            value: raw.to_string(),
            reason,
        }
    })
}
