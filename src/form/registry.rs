//! src/form/registry.rs
//!
//! Static metadata for the four constraint panels: option value/label pairs,
//! hidden-field names, selected-flag tokens, and default parameter fields.
//!
//! Centralized so `select`/`remove` can be written once and driven by the table
//! instead of being duplicated per panel.

use ratatui::style::Color;

/// Sentinel value of the selector's placeholder entry; selecting it does nothing.
pub const PLACEHOLDER: &str = "select";

/// The four constraint panels, in selector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Homopolymer,
    Hairpin,
    GcMotif,
    GcKey,
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] = [
        PanelKind::Homopolymer,
        PanelKind::Hairpin,
        PanelKind::GcMotif,
        PanelKind::GcKey,
    ];

    /// Stable index into per-panel state arrays.
    pub fn idx(self) -> usize {
        match self {
            PanelKind::Homopolymer => 0,
            PanelKind::Hairpin => 1,
            PanelKind::GcMotif => 2,
            PanelKind::GcKey => 3,
        }
    }

    /// Parse a selector option value. Unrecognized values yield `None` so the
    /// caller can treat them as a benign no-op.
    pub fn from_option_value(value: &str) -> Option<PanelKind> {
        PanelKind::ALL
            .iter()
            .copied()
            .find(|k| k.meta().option_value == value)
    }

    /// Metadata record for this panel.
    pub fn meta(self) -> &'static PanelMeta {
        &METAS[self.idx()]
    }
}

/// Per-panel metadata mirroring the form's hidden fields and selector entries.
///
/// `selected_flag`/`visible_flag` are `None` for gckey, which carries no hidden
/// fields at all.
pub struct PanelMeta {
    pub kind: PanelKind,
    /// Selector option value (also the panel's identifying name).
    pub option_value: &'static str,
    /// Selector option display label, also used as the panel title.
    pub option_label: &'static str,
    /// Hidden field holding the selected token while the panel is shown.
    pub selected_flag: Option<&'static str>,
    /// Token written into `selected_flag` on select.
    pub selected_token: &'static str,
    /// Hidden field holding "True"/"False", restored at startup.
    pub visible_flag: Option<&'static str>,
    /// Accent color for the rendered panel border.
    pub color: Color,
}

static METAS: [PanelMeta; 4] = [
    PanelMeta {
        kind: PanelKind::Homopolymer,
        option_value: "homopolymer",
        option_label: "Homopolymer",
        selected_flag: Some("homSelected"),
        selected_token: "hom",
        visible_flag: Some("homVisible"),
        color: Color::Magenta,
    },
    PanelMeta {
        kind: PanelKind::Hairpin,
        option_value: "hairpin",
        option_label: "Hairpin",
        selected_flag: Some("hairpinSelected"),
        selected_token: "hairpin",
        visible_flag: Some("hairpinVisible"),
        color: Color::Cyan,
    },
    PanelMeta {
        kind: PanelKind::GcMotif,
        option_value: "gcmotif",
        option_label: "Motif GC-Content",
        selected_flag: Some("motifGcContentSelected"),
        selected_token: "gcmotif",
        visible_flag: Some("gcVisible"),
        color: Color::Yellow,
    },
    PanelMeta {
        kind: PanelKind::GcKey,
        option_value: "gckey",
        option_label: "Key GC-Content",
        selected_flag: None,
        selected_token: "",
        visible_flag: None,
        color: Color::Green,
    },
];

/// One constraint parameter shown inside a panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
}

impl Field {
    fn new(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Default parameter fields a panel (re)loads its contents with.
pub fn default_fields(kind: PanelKind) -> Vec<Field> {
    match kind {
        PanelKind::Homopolymer => vec![Field::new("maxHomopolymer", "5")],
        PanelKind::Hairpin => vec![
            Field::new("maxHairpin", "1"),
            Field::new("loopMin", "6"),
            Field::new("loopMax", "7"),
        ],
        PanelKind::GcMotif => vec![
            Field::new("gcContentMinPercentage", "25"),
            Field::new("gcContentMaxPercentage", "65"),
        ],
        PanelKind::GcKey => vec![
            Field::new("keyGcContentMinPercentage", "25"),
            Field::new("keyGcContentMaxPercentage", "65"),
        ],
    }
}
