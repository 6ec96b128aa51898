//! Console text for operation results.

use std::io::{self, Write};

use minisocial_core::{NetworkStats, Person};
use serde::Serialize;

/// Print a titled list of people, or `empty` when there are none.
pub fn people(out: &mut impl Write, title: &str, people: &[Person], empty: &str) -> io::Result<()> {
    if people.is_empty() {
        return writeln!(out, "{empty}");
    }
    writeln!(out, "\n--- {title} ---")?;
    for p in people {
        writeln!(out, "- {p}")?;
    }
    Ok(())
}

pub fn search_result(out: &mut impl Write, name: &str, person: Option<&Person>) -> io::Result<()> {
    match person {
        Some(p) => writeln!(out, "\nFound: {p}"),
        None => writeln!(out, "Person '{name}' not found."),
    }
}

pub fn statistics(out: &mut impl Write, stats: &NetworkStats) -> io::Result<()> {
    writeln!(out, "\n=== STATISTICS ===")?;
    writeln!(out, "Total People: {}", stats.people)?;
    writeln!(out, "Total Friendships: {}", stats.friendships)
}

/// Result of a friendship change, for `--json` output.
#[derive(Debug, Serialize)]
pub struct FriendshipChange<'a> {
    pub friendship: &'static str,
    pub first: &'a str,
    pub second: &'a str,
}

impl<'a> FriendshipChange<'a> {
    pub fn created(first: &'a str, second: &'a str) -> Self {
        Self {
            friendship: "created",
            first: first.trim(),
            second: second.trim(),
        }
    }

    pub fn deleted(first: &'a str, second: &'a str) -> Self {
        Self {
            friendship: "deleted",
            first: first.trim(),
            second: second.trim(),
        }
    }
}
