use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// Base URL articles are looked up under when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Fixed first line of every rendered outline.
pub const CONTENTS_HEADER: &str = "## Contents";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1#firstHeading").expect("title selector is valid"));

static CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#mw-content-text").expect("content selector is valid"));

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6").expect("heading selector is valid")
});

/// Reasons an article document can't be turned into an outline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    #[error("Could not find page title")]
    MissingTitle,

    #[error("Could not find content on page")]
    MissingContent,
}

/// A single heading found inside the article content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// 1 through 6, taken from the tag name (`h3` -> 3)
    pub level: u8,
    pub text: String,
}

/// Page title plus every non-empty heading, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub title: String,
    pub headings: Vec<Heading>,
}

/// Replace spaces with underscores, the article naming convention upstream.
///
/// "United States" becomes "United_States". Nothing else is changed.
pub fn normalize_subject(subject: &str) -> String {
    subject.replace(' ', "_")
}

/// Build the article URL for a subject by appending it to `base`.
pub fn article_url(base: &str, subject: &str) -> String {
    format!("{base}{}", normalize_subject(subject))
}

/// Parse article HTML into an [`Outline`].
///
/// The title comes from the first `h1#firstHeading`. Headings are only
/// collected inside the first `div#mw-content-text` so navigation, sidebar
/// and footer headings stay out of the outline. Headings whose trimmed text
/// is empty are dropped. Levels are passed through as-is, skipped levels are
/// not repaired.
pub fn parse_outline(html: &str) -> Result<Outline, OutlineError> {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| element_text(&el))
        .ok_or(OutlineError::MissingTitle)?;

    let content = document
        .select(&CONTENT_SELECTOR)
        .next()
        .ok_or(OutlineError::MissingContent)?;

    let headings = content
        .select(&HEADING_SELECTOR)
        .filter_map(|el| {
            let level = heading_level(el.value().name())?;
            let text = element_text(&el);
            (!text.is_empty()).then_some(Heading { level, text })
        })
        .collect();

    Ok(Outline { title, headings })
}

/// Render a heading as a markdown line: `level` hashes, a space, the text.
pub fn heading_line(heading: &Heading) -> String {
    format!("{} {}", "#".repeat(heading.level as usize), heading.text)
}

/// Render an outline as markdown.
///
/// The contents header, the `# title` line and each heading line are joined
/// by a blank line. There is no trailing newline.
pub fn render_markdown(outline: &Outline) -> String {
    let mut lines = Vec::with_capacity(outline.headings.len() + 2);
    lines.push(CONTENTS_HEADER.to_string());
    lines.push(format!("# {}", outline.title));
    lines.extend(outline.headings.iter().map(heading_line));

    lines.join("\n\n")
}

/// `h1`..`h6` to 1..6, anything else to `None`.
fn heading_level(tag: &str) -> Option<u8> {
    tag.strip_prefix('h')?
        .parse::<u8>()
        .ok()
        .filter(|level| (1..=6).contains(level))
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
