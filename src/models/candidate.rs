//! Candidate rows offered for selection.

/// One selectable entry of a category's candidate list.
///
/// The identifier is the entity's persistence key; two candidates may
/// render identically but never share an identifier unless the source
/// graph itself contains duplicate rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Human-readable projection shown in the selection list.
    pub display_text: String,
    /// Opaque identifier the selection is keyed on.
    pub identifier: String,
    /// Whether the identifier was selected in a prior session.
    pub preselected: bool,
}
