use crate::fetch::{fetch_outline, FetchConfig, UpstreamOptions};
use crate::prelude::{eprintln, println, *};
use colored::{ColoredString, Colorize};
use std::io::IsTerminal;
use wikioutline_core::outline::{render_markdown, Outline};

#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Article subject (e.g., "United States")
    #[clap(env = "OUTLINE_SUBJECT")]
    pub subject: String,

    #[clap(flatten)]
    pub upstream: UpstreamOptions,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FetchConfig::from(&options.upstream);

    if global.verbose {
        eprintln!("Fetching {}", config.url_for(&options.subject));
    }

    let outline = fetch_outline(&config, &options.subject).await?;

    if global.verbose {
        eprintln!("Found {} headings", outline.headings.len());
    }

    if options.json {
        output_json(&outline)
    } else {
        output_markdown(&outline);
        Ok(())
    }
}

fn format_output_json(outline: &Outline) -> Result<String> {
    serde_json::to_string_pretty(outline).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn output_json(outline: &Outline) -> Result<()> {
    let json = format_output_json(outline)?;
    println!("{}", json);
    Ok(())
}

fn output_markdown(outline: &Outline) {
    let markdown = render_markdown(outline);

    if std::io::stdout().is_terminal() {
        for line in markdown.lines() {
            println!("{}", colorize_line(line));
        }
    } else {
        // Piped output: plain markdown only
        println!("{}", markdown);
    }
}

/// Number of leading `#` characters of a markdown heading line.
fn heading_depth(line: &str) -> usize {
    line.chars().take_while(|c| *c == '#').count()
}

fn colorize_line(line: &str) -> ColoredString {
    match heading_depth(line) {
        0 => line.normal(),
        1 => line.bright_cyan().bold(),
        2 => line.bright_magenta().bold(),
        3 => line.green(),
        _ => line.white(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikioutline_core::outline::Heading;

    #[test]
    fn test_heading_depth() {
        assert_eq!(heading_depth("## Contents"), 2);
        assert_eq!(heading_depth("# Title"), 1);
        assert_eq!(heading_depth("###### Deep"), 6);
        assert_eq!(heading_depth(""), 0);
        assert_eq!(heading_depth("plain"), 0);
    }

    #[test]
    fn test_colorize_line_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(colorize_line("### Beta").to_string(), "### Beta");
        assert_eq!(colorize_line("").to_string(), "");
    }

    #[test]
    fn test_format_output_json() {
        let outline = Outline {
            title: "Test Page".to_string(),
            headings: vec![Heading {
                level: 2,
                text: "Alpha".to_string(),
            }],
        };

        let json = format_output_json(&outline).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Test Page");
        assert_eq!(value["headings"][0]["level"], 2);
        assert_eq!(value["headings"][0]["text"], "Alpha");
    }
}
