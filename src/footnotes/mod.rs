/*!
 * Footnote renumbering and consistency checking.
 *
 * Documents carry two independent footnote channels: primary `[n]` markers
 * and secondary `{n}` markers. Both are renumbered sequentially by order of
 * appearance, and each channel's reference count must equal its definition
 * count or the whole rewrite is refused.
 *
 * # Architecture
 *
 * - `renumber`: the two-pass scanning engine and its per-pass state
 * - `report`: the structured diagnostic produced on a count mismatch
 */

pub mod renumber;
pub mod report;

// Re-export main types
pub use renumber::{FootnoteRenumberer, MarkerKind};
pub use report::MismatchReport;
