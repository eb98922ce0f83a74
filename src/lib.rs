/*!
 * # textgroom - plain-text document grooming
 *
 * A Rust library and CLI for preparing plain-text documents in a
 * lightweight markup format for publication.
 *
 * ## Features
 *
 * - Language-aware typography normalization (quotes, apostrophes, dashes,
 *   ligatures, ordinals, ellipses, non-breaking spaces) for en, es, fi,
 *   sr, hr, ru, it and mk
 * - Bare URL rewriting into `[[url][host]]` markup links
 * - Footnote renumbering for the primary `[n]` and secondary `{n}`
 *   channels, with hard consistency checking: on a reference/definition
 *   count mismatch nothing is written and a full diagnostic is produced
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `typography`: Language profiles and the typography rule chain:
 *   - `typography::profile`: per-language character tables
 *   - `typography::rules`: the ordered rewrite steps
 * - `links`: Bare-URL link rewriting
 * - `footnotes`: Footnote renumbering and consistency checking:
 *   - `footnotes::renumber`: the two-pass scanning engine
 *   - `footnotes::report`: mismatch diagnostics
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod footnotes;
pub mod language_utils;
pub mod links;
pub mod typography;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, FootnoteError};
pub use footnotes::{FootnoteRenumberer, MarkerKind, MismatchReport};
pub use links::LinkFilter;
pub use typography::{LanguageProfile, profile_for};
