//! Rendering of task listings for chat display
//!
//! Output uses Telegram's legacy Markdown: `*bold*` headers, with text taken
//! from task files escaped so it cannot break the markup. Escapes are not
//! honored inside an entity, so header text is left as-is.

use super::locale::Messages;
use super::model::TaskRecord;
use super::stats::Stats;

/// Characters kept from a description in summary mode
pub const SUMMARY_DESCRIPTION_CHARS: usize = 50;

/// Per-item detail of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Title, status and priority
    #[default]
    Detailed,
    /// Title and the start of the description
    Summary,
}

/// The "no tasks" message for a category
pub fn empty_message(category: &str, messages: &Messages) -> String {
    format!("{} '{}'", messages.no_tasks, category)
}

/// Render a numbered list of records for a category
pub fn format_category(
    category: &str,
    records: &[TaskRecord],
    mode: FormatMode,
    messages: &Messages,
) -> String {
    if records.is_empty() {
        return empty_message(category, messages);
    }

    let title = format!("{}:", messages.category_title(category));
    let mut output = format!("{}\n\n", bold(&title));

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, escape_markdown(&record.title)));

        match mode {
            FormatMode::Detailed => {
                if let Some(status) = non_empty(&record.status) {
                    output.push_str(&format!(
                        "   {}: {}\n",
                        messages.status,
                        escape_markdown(status)
                    ));
                }
                if let Some(priority) = non_empty(&record.priority) {
                    output.push_str(&format!(
                        "   {}: {}\n",
                        messages.priority,
                        escape_markdown(priority)
                    ));
                }
            }
            FormatMode::Summary => {
                if let Some(description) = non_empty(&record.description) {
                    let shown = truncate_chars(description, SUMMARY_DESCRIPTION_CHARS);
                    output.push_str(&format!("   {}...\n", escape_markdown(&shown)));
                }
            }
        }

        output.push('\n');
    }

    output
}

/// Render per-category counts and the date
pub fn format_stats(stats: &Stats, messages: &Messages) -> String {
    format!(
        "{}\n\n{}: {}\n{}: {}\n{}: {}\n\n{}: {}",
        messages.stats_title,
        messages.stats_current,
        stats.current,
        messages.stats_completed,
        stats.completed,
        messages.stats_projects,
        stats.projects,
        messages.stats_date,
        stats.date.format("%Y-%m-%d"),
    )
}

/// First `max` characters of `s`, counted in chars rather than bytes
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Escape the characters that legacy Markdown treats as entity delimiters
pub fn escape_markdown(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Bold entity; escapes are not honored inside entities, so `*` is dropped instead
fn bold(text: &str) -> String {
    format!("*{}*", text.replace('*', ""))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
