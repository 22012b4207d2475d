//! Output formatters for analysis reports

use crate::analysis::metrics::{gauge_color, score_color};
use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatchError};
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};

const BAR_WIDTH: usize = 30;
const GAUGE_WIDTH: usize = 20;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and text charts
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".blue().bold(), title.blue().bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_gauge(&self, filled: u8, color: Color) -> String {
        let cells = (filled as usize * GAUGE_WIDTH + 50) / 100;
        let fill = "█".repeat(cells);
        let fill = if self.use_colors {
            fill.color(color).to_string()
        } else {
            fill
        };
        format!("[{}{}]", fill, "░".repeat(GAUGE_WIDTH - cells))
    }

    fn format_bar(&self, label: &str, count: usize, max: usize, color: Color) -> String {
        let width = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        let bar = "█".repeat(width);
        format!("  {:<16} {} {}\n", label, self.colorize(&bar, color), count)
    }

    fn format_skill_list(&self, title: &str, skills: &[String], color: Color) -> String {
        let mut output = format!("\n  {} ({})\n", self.colorize(title, color), skills.len());
        if skills.is_empty() {
            output.push_str("    (none)\n");
        }
        for skill in skills {
            output.push_str(&format!("    • {}\n", skill));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME MATCH ANALYSIS"));
        output.push_str(&format!(
            "Resume: {} | Job description: {}\n",
            report.metadata.resume_file, report.metadata.job_file
        ));

        output.push_str(&self.format_header("Your Resume Match Score"));
        let score = format!("{}%", result.score);
        output.push_str(&format!(
            "  {} {}\n",
            self.colorize(&score, score_color(result.score)),
            report.score_label
        ));
        let gauge = self.format_gauge(report.gauge.filled, gauge_color(result.score));
        output.push_str(&format!("  {}\n", gauge));

        let bar = &report.skills_comparison;
        let max = bar.resume_count.max(bar.jd_count).max(bar.matched_count);
        output.push_str(&self.format_header("Skills Comparison"));
        output.push_str(&self.format_bar("Resume Skills", bar.resume_count, max, Color::Magenta));
        output.push_str(&self.format_bar("JD Skills", bar.jd_count, max, Color::Blue));
        output.push_str(&self.format_bar("Matched Skills", bar.matched_count, max, Color::Green));

        let pie = &report.match_breakdown;
        output.push_str(&self.format_header("Match Breakdown"));
        match report.match_ratio {
            Some(ratio) => {
                output.push_str(&format!(
                    "  {} matched, {} missing ({:.0}% of required skills covered)\n",
                    self.colorize(&pie.matched_count.to_string(), Color::Green),
                    self.colorize(&pie.missing_count.to_string(), Color::Red),
                    ratio * 100.0
                ));
            }
            None => output.push_str("  No skills to compare\n"),
        }

        if result.has_suggestions() {
            output.push_str(&self.format_header("💡 Suggestions for Improvement"));
            output.push_str(&format!("  {}\n", result.suggestions_for_improvements));
        }

        if self.detailed {
            output.push_str(&self.format_header("Detailed Skill Breakdown"));
            output.push_str(&self.format_skill_list("Resume Skills", &result.resume_skills, Color::Magenta));
            output.push_str(&self.format_skill_list("JD Skills", &result.jd_skills, Color::Blue));
            output.push_str(&self.format_skill_list("Matched Skills", &result.matched_skills, Color::Green));
            output.push_str(&self.format_skill_list("Missing Skills", &result.missing_skills, Color::Red));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Picks the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
        };
        formatter.format_report(report).map_err(|e| match e {
            ResumeMatchError::Serialization(inner) => {
                ResumeMatchError::OutputFormatting(format!("Failed to render report: {}", inner))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::payload::AnalysisResult;
    use crate::output::report::ReportMetadata;

    fn report(suggestions: &str) -> AnalysisReport {
        let result = AnalysisResult {
            jd_skills: vec!["sql".into(), "python".into()],
            matched_skills: vec!["python".into()],
            missing_skills: vec!["sql".into()],
            resume_skills: vec!["python".into(), "java".into()],
            score: 75.0,
            suggestions_for_improvements: suggestions.to_string(),
        };
        AnalysisReport::new(result, ReportMetadata::new("cv.pdf", "jd.pdf", "http://localhost:5000"))
    }

    #[test]
    fn test_console_summary() {
        let formatter = ConsoleFormatter::new(false, false);
        let text = formatter.format_report(&report("")).unwrap();
        assert!(text.contains("75% Good Match"));
        assert!(text.contains("1 matched, 1 missing (50% of required skills covered)"));
        assert!(!text.contains("Suggestions"));
        assert!(!text.contains("Detailed Skill Breakdown"));
    }

    #[test]
    fn test_console_suggestions_and_details() {
        let formatter = ConsoleFormatter::new(false, true);
        let text = formatter.format_report(&report("Add SQL projects.")).unwrap();
        assert!(text.contains("Suggestions for Improvement"));
        assert!(text.contains("Add SQL projects."));
        assert!(text.contains("Missing Skills (1)"));
        assert!(text.contains("    • java"));
    }

    #[test]
    fn test_gauge_rendering() {
        let formatter = ConsoleFormatter::new(false, false);
        assert_eq!(
            formatter.format_gauge(0, Color::Red),
            format!("[{}]", "░".repeat(GAUGE_WIDTH))
        );
        assert_eq!(
            formatter.format_gauge(100, Color::Green),
            format!("[{}]", "█".repeat(GAUGE_WIDTH))
        );
    }

    #[test]
    fn test_gauge_fill_is_coloured() {
        colored::control::set_override(true);
        let formatter = ConsoleFormatter::new(true, false);
        let gauge = formatter.format_gauge(50, Color::TrueColor { r: 255, g: 165, b: 0 });
        let fill = "█".repeat(GAUGE_WIDTH / 2);
        assert!(gauge.contains(&fill.truecolor(255, 165, 0).to_string()));
        assert!(gauge.ends_with(&format!("{}]", "░".repeat(GAUGE_WIDTH / 2))));
    }

    #[test]
    fn test_json_output() {
        let generator = ReportGenerator::new(false, false);
        let json = generator.generate(&report(""), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["score"], 75.0);
        assert_eq!(value["score_band"], "Good");
        assert_eq!(value["skills_comparison"]["jd_count"], 2);
        assert_eq!(value["match_breakdown"]["matched_count"], 1);
        assert_eq!(value["result"]["suggestions_for_improvements"], "");
    }

    #[test]
    fn test_supported_formats() {
        assert_eq!(ConsoleFormatter::new(true, false).supports_format(), OutputFormat::Console);
        assert_eq!(JsonFormatter::new(false).supports_format(), OutputFormat::Json);
    }
}
