//! Vocabulary constants for the blueprint configuration schema.

/// Blueprint configuration schema terms.
///
/// These are the predicates and the one class type the three category
/// shapes are built from.
pub mod blueprint {
    use oxrdf::NamedNodeRef;

    /// Namespace IRI of the blueprint configuration schema.
    pub const NS: &str = "http://schema.example.org/blueprint-ui-config-initializer/";

    /// The class entity type.
    pub const CLASS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/Class",
    );

    /// Human-readable label of a class, link, detail or detail group.
    pub const LABEL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/label",
    );

    /// Display color index of a class.
    pub const COLOR_INDEX: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/colorIndex",
    );

    /// Icon name of a class.
    pub const ICON: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/icon",
    );

    /// Search ranking priority of a class.
    pub const SEARCH_PRIO: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/searchPrio",
    );

    /// Connects an entity to one of its owned link records.
    pub const LINK: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/link",
    );

    /// Connects a detail group to one of its owned detail records.
    pub const DETAIL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/detail",
    );

    /// Connects a class entity to a detail group it displays.
    pub const DETAIL_GROUP: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/detailGroup",
    );

    /// Ordering position of a detail record or detail group.
    pub const ORDER: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/order",
    );

    /// Property path a link or detail record reads its value from.
    pub const PATH: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/path",
    );

    /// Target entity of a link.
    pub const TO: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://schema.example.org/blueprint-ui-config-initializer/to",
    );
}
