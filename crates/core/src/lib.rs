//! Core library for crosspost
//!
//! This crate implements the **Functional Core** of crosspost: it turns a
//! parsed blog article into the markup of a forum dialect, so the article can
//! be cross-posted by hand. Following the Functional Core - Imperative Shell
//! pattern, nothing here performs I/O.
//!
//! - **`crosspost_core`** (this crate): pure transformation from an HTML tree
//!   to dialect text
//! - **`crosspost`**: source acquisition, configuration and output (the
//!   Imperative Shell)
//!
//! # Pipeline
//!
//! ```text
//! scraper::Html ──► Document::from_html
//!                    │  title, canonical URL, `.content` container
//!                    ▼
//!                  MarkupNode tree ──► Dispatcher::handle (per body child)
//!                                        │  LineBuffer fragments
//!                                        ├──► Table::extract / render
//!                                        ▼
//!                                      Renderer (reddit | rpggeek)
//!                    ▼
//!                  Document { blocks } ──► blocks joined by blank lines
//! ```
//!
//! The dispatcher fails on any node kind it does not know. An article that
//! uses new markup has to be taught to the dispatcher, it is never exported
//! with pieces silently missing.
//!
//! # Modules
//!
//! - [`node`]: owned markup tree and the closed set of node kinds
//! - [`line`]: fragment buffer for one block
//! - [`dispatch`]: node kind → handling rule
//! - [`table`]: table extraction, normalization and rendering
//! - [`render`]: the [`render::Renderer`] trait, its dialects and the registry
//! - [`document`]: top-level orchestration
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use crosspost_core::{transpile_str, ExportOptions};
//!
//! let document = transpile_str(&html_source, "rpggeek", &ExportOptions::default())?;
//! println!("{document}");
//! ```

pub mod dispatch;
pub mod document;
pub mod error;
pub mod line;
pub mod node;
pub mod options;
pub mod render;
pub mod table;
pub mod text;

pub use document::{transpile, transpile_str, Document};
pub use error::ExportError;
pub use options::ExportOptions;
pub use render::{renderer_for, Dialect, Renderer};
