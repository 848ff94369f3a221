//! Scripted sessions: one intent per line, applied in order against a single
//! in-memory catalog.
//!
//! ```text
//! # comments and blank lines are skipped
//! filter drama
//! add Beta --category comedy --featured
//! sort category-desc
//! remove 2
//! list
//! ```
//!
//! A rejected intent is reported and the session carries on with the state it
//! had before that line.

use super::render::{
    render_details, render_error, render_featured, render_messages, render_view,
};
use super::setup::AddArgs;
use clap::{Parser, Subcommand};
use shelf::api::{parse_filter, parse_sort, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::Result;
use shelf::ids::IdSource;
use shelf::model::NewTitle;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    intent: Intent,
}

#[derive(Subcommand, Debug)]
enum Intent {
    Add(AddArgs),
    Remove { id: u32 },
    Filter { filter: String },
    Sort { option: String },
    List,
    Featured,
    Show { id: u32 },
    #[command(alias = "exit")]
    Quit,
}

/// Counts of what happened in a session.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct SessionSummary {
    pub applied: usize,
    pub rejected: usize,
}

pub(super) fn run<I, R, W>(
    api: &mut ShelfApi<I>,
    config: &ShelfConfig,
    input: R,
    out: &mut W,
) -> Result<SessionSummary>
where
    I: IdSource,
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = match SessionLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(line = number + 1, "unreadable intent");
                writeln!(out, "line {}: {}", number + 1, e.render())?;
                summary.rejected += 1;
                continue;
            }
        };

        let outcome = match parsed.intent {
            Intent::Quit => break,
            Intent::List => {
                write!(out, "{}", render_view(api.state()))?;
                continue;
            }
            Intent::Featured => {
                write!(out, "{}", render_featured(&api.featured()))?;
                continue;
            }
            Intent::Show { id } => {
                write!(out, "{}", render_details(api.find(id), config))?;
                continue;
            }
            Intent::Add(args) => new_title(&args).and_then(|title| api.add_title(title)),
            Intent::Remove { id } => api.remove_title(id),
            Intent::Filter { filter } => {
                parse_filter(&filter).and_then(|filter| api.set_filter(filter))
            }
            Intent::Sort { option } => parse_sort(&option).and_then(|option| api.set_sort(option)),
        };

        match outcome {
            Ok(result) => {
                summary.applied += 1;
                write!(out, "{}", render_messages(&result.messages))?;
            }
            Err(e) => {
                summary.rejected += 1;
                write!(out, "{}", render_error(&e))?;
            }
        }
    }

    Ok(summary)
}

pub(super) fn new_title(args: &AddArgs) -> Result<NewTitle> {
    let category = args
        .category
        .parse()
        .map_err(shelf::error::ShelfError::Api)?;
    Ok(NewTitle::new(args.name.join(" "), category)
        .featured(args.featured)
        .with_image(args.image.clone()))
}
