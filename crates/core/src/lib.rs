//! Core library for wikioutline
//!
//! This crate implements the **Functional Core** of the wikioutline service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`wikioutline_core`** (this crate): Pure transformation functions with zero I/O
//! - **`wikioutline`**: HTTP fetching, the HTTP server and the CLI (the Imperative Shell)
//!
//! Everything in here takes strings in and hands values out. The article HTML
//! is fetched by the shell and passed to [`outline::parse_outline`]; the
//! resulting [`outline::Outline`] is turned into markdown by
//! [`outline::render_markdown`]. None of these functions touch the network,
//! so they are tested with fixture HTML only.
//!
//! # Example Usage
//!
//! ```rust
//! use wikioutline_core::outline::{parse_outline, render_markdown};
//!
//! let html = r#"<h1 id="firstHeading">Test Page</h1>
//!     <div id="mw-content-text"><h2>Alpha</h2><h3>Beta</h3></div>"#;
//!
//! let outline = parse_outline(html).unwrap();
//! assert_eq!(
//!     render_markdown(&outline),
//!     "## Contents\n\n# Test Page\n\n## Alpha\n\n### Beta"
//! );
//! ```

pub mod outline;
