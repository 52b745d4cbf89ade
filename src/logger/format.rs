//! Log formatting and console output
//!
//! Handles:
//! - Colorized tag and level columns
//! - Text wrapping at word boundaries (words are never split, so explorer
//!   links stay clickable)
//! - Broken pipe handling for piped commands

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 9;
const LEVEL_WIDTH: usize = 7;

/// Maximum line length before wrapping
const MAX_LINE_LENGTH: usize = 160;

pub fn format_and_log(tag: &LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let tag_str = tag.colorize(format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH));
    let level_str = format_level(level);

    let base_line = format!("{} [{}] [{}] ", time.dimmed(), tag_str, level_str);
    let base_length = strip_ansi_codes(&base_line).chars().count();
    let available_space = MAX_LINE_LENGTH.saturating_sub(base_length).max(40);

    let chunks = wrap_text(message, available_space);
    let continuation_prefix = " ".repeat(base_length);

    for (i, chunk) in chunks.iter().enumerate() {
        let line = if i == 0 {
            format!("{}{}", base_line, chunk)
        } else {
            format!("{}{}", continuation_prefix, chunk)
        };
        write_line_safe(&line, level.is_diagnostic());
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let padded = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => padded.bright_red().bold(),
        LogLevel::Warning => padded.bright_yellow().bold(),
        LogLevel::Info => padded.white().bold(),
        LogLevel::Debug | LogLevel::Verbose => padded.dimmed(),
    }
}

/// Write a line, exiting quietly when the reader has gone away
fn write_line_safe(message: &str, to_stderr: bool) {
    let result = if to_stderr {
        let mut handle = stderr();
        writeln!(handle, "{}", message).and_then(|_| handle.flush())
    } else {
        let mut handle = stdout();
        writeln!(handle, "{}", message).and_then(|_| handle.flush())
    };

    if let Err(e) = result {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}

/// Remove ANSI color codes from text
pub(crate) fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape && ch == 'm' {
            in_escape = false;
        } else if !in_escape {
            result.push(ch);
        }
    }
    result
}

/// Wrap text at word boundaries, respecting existing newlines
///
/// A word longer than the width gets a line of its own instead of being split.
pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for line in text.split('\n') {
        if strip_ansi_codes(line).chars().count() <= max_width {
            result.push(line.to_string());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0;

        for word in line.split_whitespace() {
            let word_len = strip_ansi_codes(word).chars().count();

            if current_line.is_empty() {
                current_line = word.to_string();
                current_len = word_len;
            } else if current_len + 1 + word_len <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_len += 1 + word_len;
            } else {
                result.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
                current_len = word_len;
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}
