//! src/form/state.rs
//!
//! The toggler state machine: per-panel visibility records, the selector's
//! ordered option list, the hidden-flag store, and the pending load queue.
//!
//! Invariant maintained by every operation: a panel is visible iff its option
//! is absent from the selector iff its visibility flag reads "True".

use std::sync::{Arc, RwLock};

use super::flags::FlagStore;
use super::registry::{self, Field, PLACEHOLDER, PanelKind};

/// Height of a rendered panel region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeightMode {
    /// Shown at its natural height.
    Full,
    /// Hidden; occupies no space.
    Collapsed,
}

/// Mutable per-panel state.
#[derive(Debug)]
pub struct PanelState {
    pub kind: PanelKind,
    pub visible: bool,
    pub height: HeightMode,
    /// Parameter fields, repopulated on every load signal.
    pub fields: Vec<Field>,
    /// Count of load signals delivered, for collaborators that lazily
    /// initialize contents.
    pub loads: u64,
}

impl PanelState {
    fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            visible: false,
            height: HeightMode::Collapsed,
            fields: registry::default_fields(kind),
            loads: 0,
        }
    }
}

/// One available-to-add entry in the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

/// The whole form: panels, selector options, flags, and queued load signals.
#[derive(Debug)]
pub struct FormState {
    panels: [PanelState; 4],
    pub options: Vec<OptionEntry>,
    pub flags: FlagStore,
    pending_loads: Vec<PanelKind>,
}

impl FormState {
    /// Build the form from host-supplied flags and restore prior state:
    /// every panel whose visibility flag reads "True" is shown and its option
    /// removed. Restore writes no flags and emits no load signals.
    pub fn new(flags: FlagStore) -> Self {
        let mut form = Self {
            panels: PanelKind::ALL.map(PanelState::new),
            options: PanelKind::ALL
                .iter()
                .map(|k| OptionEntry {
                    value: k.meta().option_value,
                    label: k.meta().option_label,
                })
                .collect(),
            flags,
            pending_loads: Vec::new(),
        };
        for kind in Self::restore_visible(&form.flags) {
            form.take_option(kind);
            form.show(kind);
        }
        form
    }

    /// Pure restore step: which panels should come up visible for these flags.
    pub fn restore_visible(flags: &FlagStore) -> Vec<PanelKind> {
        PanelKind::ALL
            .iter()
            .copied()
            .filter(|k| {
                k.meta()
                    .visible_flag
                    .is_some_and(|name| flags.is_true(name))
            })
            .collect()
    }

    pub fn panel(&self, kind: PanelKind) -> &PanelState {
        &self.panels[kind.idx()]
    }

    fn panel_mut(&mut self, kind: PanelKind) -> &mut PanelState {
        &mut self.panels[kind.idx()]
    }

    /// Panels currently shown, in selector order.
    pub fn visible_panels(&self) -> Vec<PanelKind> {
        PanelKind::ALL
            .iter()
            .copied()
            .filter(|k| self.panel(*k).visible)
            .collect()
    }

    /// Whether the given panel's option is still available to add.
    pub fn option_present(&self, kind: PanelKind) -> bool {
        let value = kind.meta().option_value;
        self.options.iter().any(|o| o.value == value)
    }

    /// Selector change handler.
    ///
    /// No-op for the placeholder, for unrecognized values, and for values whose
    /// option is already gone (i.e. the panel is already shown). Returns whether
    /// anything changed.
    pub fn select(&mut self, value: &str) -> bool {
        if value == PLACEHOLDER {
            return false;
        }
        let Some(kind) = PanelKind::from_option_value(value) else {
            return false;
        };
        if !self.take_option(kind) {
            return false;
        }
        self.show(kind);
        let meta = kind.meta();
        if let Some(name) = meta.selected_flag {
            self.flags.set(name, meta.selected_token);
        }
        if let Some(name) = meta.visible_flag {
            self.flags.set_bool(name, true);
        }
        self.pending_loads.push(kind);
        true
    }

    /// Per-panel remove control.
    ///
    /// Guarded no-op when the panel is already hidden, so the option entry can
    /// never be duplicated. Returns whether anything changed.
    pub fn remove(&mut self, kind: PanelKind) -> bool {
        if !self.panel(kind).visible {
            return false;
        }
        let meta = kind.meta();
        // re-insert at the end, like select.add(option) on the original page
        self.options.push(OptionEntry {
            value: meta.option_value,
            label: meta.option_label,
        });
        let panel = self.panel_mut(kind);
        panel.visible = false;
        panel.height = HeightMode::Collapsed;
        if let Some(name) = meta.selected_flag {
            self.flags.set(name, "");
        }
        if let Some(name) = meta.visible_flag {
            self.flags.set_bool(name, false);
        }
        self.pending_loads.push(kind);
        true
    }

    /// Drain queued load signals; the host reinitializes those panels' contents.
    pub fn take_loads(&mut self) -> Vec<PanelKind> {
        std::mem::take(&mut self.pending_loads)
    }

    /// Read a parameter field of a panel.
    pub fn field(&self, kind: PanelKind, name: &str) -> Option<&str> {
        self.panel(kind)
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Edit a parameter field; false if the panel has no such field.
    pub fn set_field(&mut self, kind: PanelKind, name: &str, value: &str) -> bool {
        match self
            .panel_mut(kind)
            .fields
            .iter_mut()
            .find(|f| f.name == name)
        {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// (Re)initialize a panel's contents with its default fields.
    pub fn reload(&mut self, kind: PanelKind) {
        let panel = self.panel_mut(kind);
        panel.fields = registry::default_fields(kind);
        panel.loads += 1;
    }

    fn show(&mut self, kind: PanelKind) {
        let panel = self.panel_mut(kind);
        panel.visible = true;
        panel.height = HeightMode::Full;
    }

    /// Remove the panel's option entry; false if it was already gone.
    fn take_option(&mut self, kind: PanelKind) -> bool {
        let value = kind.meta().option_value;
        match self.options.iter().position(|o| o.value == value) {
            Some(pos) => {
                self.options.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Alias: Arc<RwLock<FormState>>
pub type SharedForm = Arc<RwLock<FormState>>;

/// Wrap a form for sharing with the render panels.
pub fn shared(form: FormState) -> SharedForm {
    Arc::new(RwLock::new(form))
}
