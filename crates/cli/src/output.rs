//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print an indented `label: value` line under a previous status line
    pub fn detail(label: &str, value: &str) {
        println!("   {} {}", format!("{}:", label).dimmed(), value);
    }

    /// Print a tip block: a heading followed by indented lines
    pub fn tip(heading: &str, lines: &[&str]) {
        println!();
        println!("{} {}", "💡".yellow(), heading.bold());
        for line in lines {
            println!("   {}", line);
        }
    }
}

/// Format image dimensions as `WIDTHxHEIGHT`
pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{}x{}", width, height)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Format `part` as a percentage of `total` with one decimal
pub fn format_percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dimensions() {
        assert_eq!(format_dimensions(512, 256), "512x256");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "pixel", "pixels"), "1 pixel");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "pixel", "pixels"), "5 pixels");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1, 2), "50.0%");
        assert_eq!(format_percent(1, 3), "33.3%");
    }

    #[test]
    fn test_format_percent_empty() {
        assert_eq!(format_percent(0, 0), "0.0%");
    }
}
