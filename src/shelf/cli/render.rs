use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::config::ShelfConfig;
use shelf::model::{Category, TitleRecord};
use shelf::state::CatalogState;
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 40;
const ID_WIDTH: usize = 7;
const FEATURED_MARKER: &str = "★";

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

pub(super) fn render_error(error: &shelf::error::ShelfError) -> String {
    format!("{}\n", error.to_string().red())
}

/// The display view with a heading naming the active filter and sort.
pub(super) fn render_view(state: &CatalogState) -> String {
    let Some(view) = state.display_view() else {
        return format!("{}\n", "The list is unavailable.".red());
    };

    let mut out = String::new();
    let heading = format!(
        "Showing {} · sorted by {}",
        state.active_filter(),
        state.active_sort()
    );
    let _ = writeln!(out, "{}", heading.dimmed());
    let titles: Vec<&TitleRecord> = view.iter().collect();
    out.push_str(&render_titles(&titles));
    out
}

pub(super) fn render_titles(titles: &[&TitleRecord]) -> String {
    if titles.is_empty() {
        return "No titles found.\n".to_string();
    }

    let mut out = String::new();
    for title in titles {
        let id = format!("{:>width$}. ", title.id, width = ID_WIDTH);
        let name = truncate_to_width(&title.name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        let marker = if title.featured { FEATURED_MARKER } else { " " };
        let _ = writeln!(
            out,
            "{}{} {}{} {}",
            id.yellow(),
            marker.yellow(),
            name,
            " ".repeat(padding),
            title.category.label().dimmed()
        );
    }
    out
}

pub(super) fn render_featured(titles: &[&TitleRecord]) -> String {
    if titles.is_empty() {
        return format!(
            "{}\n{}\n",
            "Featured Title List is empty.".bold(),
            "Add a title with --featured to see it here.".dimmed()
        );
    }
    let heading = if titles.len() > 1 {
        "Featured Titles"
    } else {
        "Featured Title"
    };
    format!("{}\n{}", heading.bold(), render_titles(titles))
}

pub(super) fn render_details(title: Option<&TitleRecord>, config: &ShelfConfig) -> String {
    let Some(title) = title else {
        return format!(
            "{}\n",
            "Item unavailable. Go back to the list.".red()
        );
    };
    let mut out = String::new();
    let _ = writeln!(out, "{}", title.name.bold());
    let _ = writeln!(out, "{:<10}{}", "id", title.id);
    let _ = writeln!(out, "{:<10}{}", "category", title.category.label());
    let _ = writeln!(
        out,
        "{:<10}{}",
        "image",
        config.image_for(title.image.as_deref())
    );
    if title.featured {
        let _ = writeln!(out, "{:<10}{}", "featured", FEATURED_MARKER.yellow());
    }
    out
}

pub(super) fn render_filters(filters: &[Category]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18}{}", "all", "All".dimmed());
    for category in filters {
        let _ = writeln!(out, "{:<18}{}", category.as_str(), category.label().dimmed());
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
