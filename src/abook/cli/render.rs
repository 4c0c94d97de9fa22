use abook::api::{CmdMessage, CmdResult, MessageLevel};
use abook::error::AbookError;
use abook::model::{Phone, Record};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const BIRTHDAY_WIDTH: usize = 12;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn render_error(err: &AbookError) -> String {
    match err {
        AbookError::Api(msg) => msg.red().to_string(),
        other => format!("Error: {}", other).red().to_string(),
    }
}

/// One aligned line per contact: name, birthday, phones.
pub(super) fn render_records(records: &[Record]) -> String {
    if records.is_empty() {
        return "No contacts found.".to_string();
    }
    records
        .iter()
        .map(render_record_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn render_pages(pages: &[Vec<Record>]) -> String {
    if pages.is_empty() {
        return "No contacts found.".to_string();
    }
    let total = pages.len();
    pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let header = format!("Page {}/{}", i + 1, total).bold().to_string();
            format!("{}\n{}", header, render_records(page))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Everything a command produced, in display order: records, then pages,
/// then messages.
pub(super) fn render_result(result: &CmdResult) -> String {
    let mut parts = Vec::new();
    if !result.listed_records.is_empty() {
        parts.push(render_records(&result.listed_records));
    }
    if !result.pages.is_empty() {
        parts.push(render_pages(&result.pages));
    }
    if !result.messages.is_empty() {
        parts.push(render_messages(&result.messages));
    }
    parts.join("\n")
}

fn render_record_line(record: &Record) -> String {
    let name = truncate_to_width(record.name.value(), NAME_WIDTH);
    let name_padding = NAME_WIDTH.saturating_sub(name.width());

    let birthday = record
        .birthday
        .map(|b| b.to_string())
        .unwrap_or_default();
    let phones = if record.phones.is_empty() {
        "-".to_string()
    } else {
        record
            .phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let birthday = format!("{:<bw$}", birthday, bw = BIRTHDAY_WIDTH);
    format!(
        "  {}{} {} {}",
        name.bold(),
        " ".repeat(name_padding),
        birthday.dimmed(),
        phones
    )
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
