//! Checks behind the `verify-sorting` and `verify-api` tools.

use crate::error::{PortfolioError, Result};
use crate::fetcher::is_sorted_by_stars;
use crate::types::GitHubRepo;
use serde_json::{Map, Value};
use std::io::{self, Write};

/// Fields every repository object in an API listing must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "name",
    "html_url",
    "description",
    "stargazers_count",
    "language",
];

const TOP_N: usize = 5;

const PASS: &str = "✓";
const FAIL: &str = "✗";

fn glyph(ok: bool) -> &'static str {
    if ok {
        PASS
    } else {
        FAIL
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRepo {
    pub rank: usize,
    pub name: String,
    pub stars: u64,
}

/// Outcome of checking a fetched listing for descending star order.
#[derive(Debug, Clone)]
pub struct SortReport {
    pub top: Vec<RankedRepo>,
    pub star_counts: Vec<u64>,
    pub is_sorted: bool,
}

/// Check that `repos` is non-increasing by star count over its whole length.
///
/// The slice is inspected as given, never re-sorted.
pub fn verify_sorting(repos: &[GitHubRepo]) -> Result<SortReport> {
    if repos.is_empty() {
        return Err(PortfolioError::NoRepositories("No repositories found".to_string()));
    }

    let star_counts: Vec<u64> = repos.iter().map(|r| r.stargazers_count).collect();
    let top = repos
        .iter()
        .take(TOP_N)
        .enumerate()
        .map(|(i, r)| RankedRepo {
            rank: i + 1,
            name: r.name.clone(),
            stars: r.stargazers_count,
        })
        .collect();

    Ok(SortReport {
        top,
        is_sorted: is_sorted_by_stars(&star_counts),
        star_counts,
    })
}

impl SortReport {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Top repositories by stars:")?;
        writeln!(out, "{}", "-".repeat(50))?;
        for entry in &self.top {
            writeln!(out, "{}. {}: {} stars", entry.rank, entry.name, entry.stars)?;
        }

        let shown = self.star_counts.len().min(TOP_N);
        writeln!(out, "\nSort verification:")?;
        writeln!(out, "Star counts: {:?}", &self.star_counts[..shown])?;
        writeln!(out, "\nCorrectly sorted by stars: {}", glyph(self.is_sorted))?;
        Ok(())
    }

    pub fn check(&self) -> Result<()> {
        if self.is_sorted {
            Ok(())
        } else {
            Err(PortfolioError::NotSorted)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldCheck {
    pub field: &'static str,
    pub present: bool,
    pub value: Option<Value>,
}

/// Presence of [`REQUIRED_FIELDS`] on the first object of a listing.
#[derive(Debug, Clone)]
pub struct FieldReport {
    pub checks: Vec<FieldCheck>,
}

/// Parse an API listing: a JSON array of repository objects.
pub fn parse_listing(input: impl AsRef<[u8]>) -> Result<Vec<Value>> {
    match serde_json::from_slice::<Value>(input.as_ref())? {
        Value::Array(items) => Ok(items),
        other => Err(PortfolioError::InvalidInput(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

/// Check the first element of `listing` for every required field.
///
/// Only the first element is inspected; presence is what counts, a `null`
/// value passes.
pub fn verify_fields(listing: &[Value]) -> Result<FieldReport> {
    let first = listing.first().ok_or_else(|| {
        PortfolioError::NoRepositories("No repositories found in the response".to_string())
    })?;

    let empty = Map::new();
    let object = first.as_object().unwrap_or(&empty);

    let checks = REQUIRED_FIELDS
        .iter()
        .map(|&field| FieldCheck {
            field,
            present: object.contains_key(field),
            value: object.get(field).cloned(),
        })
        .collect();

    Ok(FieldReport { checks })
}

impl FieldReport {
    pub fn all_present(&self) -> bool {
        self.checks.iter().all(|c| c.present)
    }

    pub fn missing(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|c| !c.present)
            .map(|c| c.field.to_string())
            .collect()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Required fields check:")?;
        for check in &self.checks {
            writeln!(out, "{}: {}", check.field, glyph(check.present))?;
        }

        writeln!(out, "\nSample repository data:")?;
        for check in &self.checks {
            writeln!(out, "{}: {}", check.field, display_value(check.value.as_ref()))?;
        }
        Ok(())
    }

    pub fn check(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PortfolioError::MissingFields(missing))
        }
    }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
