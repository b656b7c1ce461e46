use std::error::Error;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use super::rich::RichError;
use crate::env::EnvVar;

/// Formats RichError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && EnvVar::get("NO_COLOR").is_none()
    }

    /// Formats the error for display
    pub fn format(&self, error: &RichError) -> String {
        let plain = if self.verbose {
            self.format_verbose_plain(error)
        } else {
            self.format_simple_plain(error)
        };

        if self.use_color {
            Self::apply_color(&plain)
        } else {
            plain
        }
    }

    fn format_simple_plain(&self, error: &RichError) -> String {
        let mut output = format!("error[{}]: {}", error.code().as_str(), error.message());

        let context_lines = Self::format_context(error);
        if !context_lines.is_empty() {
            output.push('\n');
            output.push_str(&context_lines);
        }

        output
    }

    fn format_verbose_plain(&self, error: &RichError) -> String {
        let mut output = self.format_simple_plain(error);

        output.push_str("\n  |");
        output.push_str(&format!("\n  | Cause: {}", error.code().cause()));

        output.push_str("\n  |");
        output.push_str("\n  | Remediation:");
        for line in error.code().remediation().lines() {
            output.push_str(&format!("\n  |   {}", line));
        }

        let source_chain = Self::format_source_chain(error);
        if !source_chain.is_empty() {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Source chain:\n{}", source_chain));
        }

        output.push_str("\n  |");
        output.push_str("\n  = note: use `wxr-import --help` for more information");

        output
    }

    fn format_context(error: &RichError) -> String {
        let ctx = error.context();
        let mut lines = Vec::new();

        // file_path first, then additional (BTreeMap order)
        if let Some(path) = &ctx.file_path {
            lines.push(format!("  --> {}", path.to_string_lossy()));
        }

        for (key, value) in &ctx.additional {
            lines.push(format!("  --> {}: {}", key, value));
        }

        lines.join("\n")
    }

    fn format_source_chain(error: &RichError) -> String {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn std::error::Error + 'static)> = error.source();

        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }

        chain.join("\n")
    }

    fn apply_color(text: &str) -> String {
        let mut result = String::new();

        for line in text.lines() {
            if !result.is_empty() {
                result.push('\n');
            }

            if line.starts_with("error[") {
                let bracket_end = line.find(']').map(|i| i + 1).unwrap_or(0);
                let (error_prefix, rest) = line.split_at(bracket_end);
                result.push_str(&format!("{}{}", error_prefix.red().bold(), rest.bold()));
            } else if line.starts_with("  -->") {
                result.push_str(&line.blue().to_string());
            } else if line.starts_with("  | Cause:") {
                result.push_str(&line.yellow().to_string());
            } else if line.starts_with("  | Remediation:") {
                result.push_str(&line.green().to_string());
            } else if line.starts_with("  = note:") || line.starts_with("  |   -") {
                result.push_str(&line.dimmed().to_string());
            } else {
                result.push_str(line);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, ErrorContext};

    fn no_color() -> bool {
        false
    }

    fn with_color() -> bool {
        true
    }

    #[test]
    fn format_simple() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let error = RichError::new(ErrorCode::Xml001, "Malformed document: unexpected end");

        let output = formatter.format(&error);
        assert_eq!(output, "error[XML001]: Malformed document: unexpected end");
    }

    #[test]
    fn format_simple_with_context() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let context = ErrorContext::new()
            .with_file_path("/exports/site.xml")
            .with_additional("position", "12:4");
        let error = RichError::new(ErrorCode::Xml001, "Malformed document").with_context(context);

        let output = formatter.format(&error);
        let path_pos = output.find("  --> /exports/site.xml").unwrap();
        let extra_pos = output.find("  --> position: 12:4").unwrap();
        assert!(path_pos < extra_pos, "file path should come before extras");
    }

    #[test]
    fn format_verbose() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let error = RichError::new(ErrorCode::Io001, "IO error: not found");

        let output = formatter.format(&error);
        assert!(output.contains("error[IO001]"));
        assert!(output.contains("Cause:"));
        assert!(output.contains("Remediation:"));
        assert!(output.contains("note: use `wxr-import --help`"));
    }

    #[test]
    fn verbose_includes_source_chain() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "underlying error");
        let error =
            RichError::new(ErrorCode::Io001, "Failed to read file").with_source(io_error);

        let output = formatter.format(&error);
        assert!(output.contains("Source chain:"));
        assert!(output.contains("underlying error"));
    }

    #[test]
    fn no_color_output_has_no_escape_codes() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let error = RichError::new(ErrorCode::Val001, "Test");
        assert!(!formatter.format(&error).contains("\x1b["));
    }

    #[test]
    fn color_output_has_escape_codes() {
        let formatter = ErrorFormatter::with_color_detection(false, with_color);
        let error = RichError::new(ErrorCode::Val001, "Test");
        assert!(formatter.format(&error).contains("\x1b["));
    }
}
