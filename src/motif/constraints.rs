//! src/motif/constraints.rs
//!
//! Validated constraint parameters for motif generation, and their derivation
//! from the form's panels.
//!
//! A motif is key + payload + key, so `motif_size = payload_size + 2 * key_size`.
//! The homopolymer cap is clamped to what a motif can physically contain, and
//! tighter again when only one key exists.

use std::str::FromStr;

use color_eyre::eyre::{Result, bail, eyre};

use super::checks;
use crate::form::{FormState, PanelKind};

/// Element counts and sizes the surrounding page supplies outside the
/// constraint panels.
#[derive(Clone, Copy, Debug)]
pub struct ElementSizes {
    pub payload_size: usize,
    pub payload_num: usize,
    pub key_size: usize,
    pub key_num: usize,
}

impl Default for ElementSizes {
    fn default() -> Self {
        Self {
            payload_size: 5,
            payload_num: 10,
            key_size: 2,
            key_num: 2,
        }
    }
}

/// Which checks are active; one flag per constraint panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    pub hom: bool,
    pub hairpin: bool,
    pub gc_content: bool,
    pub key_gc_content: bool,
}

impl ConstraintSet {
    /// The checks the user has added, i.e. the visible panels.
    pub fn from_form(form: &FormState) -> Self {
        Self {
            hom: form.panel(PanelKind::Homopolymer).visible,
            hairpin: form.panel(PanelKind::Hairpin).visible,
            gc_content: form.panel(PanelKind::GcMotif).visible,
            key_gc_content: form.panel(PanelKind::GcKey).visible,
        }
    }
}

/// Validated generation parameters.
#[derive(Clone, Debug)]
pub struct Constraints {
    pub payload_size: usize,
    pub payload_num: usize,
    pub key_size: usize,
    pub key_num: usize,
    pub max_hom: usize,
    pub max_hairpin: usize,
    pub loop_size_min: usize,
    pub loop_size_max: usize,
    pub min_gc: f64,
    pub max_gc: f64,
    pub key_min_gc: f64,
    pub key_max_gc: f64,
}

impl Constraints {
    /// Validate and derive the effective parameters.
    pub fn new(
        sizes: ElementSizes,
        max_hom: usize,
        max_hairpin: usize,
        loop_size_min: usize,
        loop_size_max: usize,
        min_gc: f64,
        max_gc: f64,
        key_min_gc: f64,
        key_max_gc: f64,
    ) -> Result<Self> {
        if sizes.payload_size == 0 || sizes.key_size == 0 {
            bail!("payload and key sizes must be positive");
        }
        if sizes.payload_num == 0 || sizes.key_num == 0 {
            bail!("payload and key counts must be positive");
        }
        if max_hom == 0 {
            bail!("max homopolymer length must be positive");
        }
        if max_hairpin == 0 {
            bail!("max hairpin stem length must be positive");
        }
        if loop_size_min > loop_size_max {
            bail!("hairpin loop range is inverted");
        }
        if min_gc > max_gc || key_min_gc > key_max_gc {
            bail!("GC-content range is inverted");
        }
        if max_gc > 100.0 || key_max_gc > 100.0 {
            bail!("GC-content bounds must lie within 0..=100");
        }

        // a run can never exceed what fits across keys and payloads
        let mut max_hom = max_hom.min(4 * sizes.key_size - 2 + 3 * sizes.payload_size);
        if sizes.key_num == 1 {
            max_hom = max_hom.min(sizes.key_size + sizes.payload_size - 1);
        }

        Ok(Self {
            payload_size: sizes.payload_size,
            payload_num: sizes.payload_num,
            key_size: sizes.key_size,
            key_num: sizes.key_num,
            max_hom,
            max_hairpin,
            loop_size_min,
            loop_size_max,
            min_gc,
            max_gc,
            key_min_gc,
            key_max_gc,
        })
    }

    /// Read the parameters out of the form. A hidden panel contributes its
    /// fallback value; a visible panel contributes its field, which must parse.
    pub fn from_form(form: &FormState, sizes: ElementSizes) -> Result<Self> {
        let max_hom = parsed(form, PanelKind::Homopolymer, "maxHomopolymer", 1usize)?;
        let max_hairpin = parsed(form, PanelKind::Hairpin, "maxHairpin", 1usize)?;
        let loop_size_min = parsed(form, PanelKind::Hairpin, "loopMin", 1usize)?;
        let loop_size_max = parsed(form, PanelKind::Hairpin, "loopMax", 1usize)?;
        let min_gc = parsed(form, PanelKind::GcMotif, "gcContentMinPercentage", 25.0f64)?;
        let max_gc = parsed(form, PanelKind::GcMotif, "gcContentMaxPercentage", 65.0f64)?;
        let key_min_gc = parsed(form, PanelKind::GcKey, "keyGcContentMinPercentage", 25.0f64)?;
        let key_max_gc = parsed(form, PanelKind::GcKey, "keyGcContentMaxPercentage", 65.0f64)?;
        Self::new(
            sizes,
            max_hom,
            max_hairpin,
            loop_size_min,
            loop_size_max,
            min_gc,
            max_gc,
            key_min_gc,
            key_max_gc,
        )
    }

    pub fn motif_size(&self) -> usize {
        self.payload_size + 2 * self.key_size
    }

    /// Whether an assembled motif passes every active check.
    pub fn allows_motif(&self, seq: &str, set: &ConstraintSet) -> bool {
        if set.hom && checks::longest_run(seq) > self.max_hom {
            return false;
        }
        if set.gc_content {
            let gc = checks::gc_percent(seq);
            if gc < self.min_gc || gc > self.max_gc {
                return false;
            }
        }
        if set.hairpin
            && checks::max_stem(seq, self.loop_size_min, self.loop_size_max) > self.max_hairpin
        {
            return false;
        }
        true
    }

    /// Whether a key passes every active check; keys have their own GC bounds.
    pub fn allows_key(&self, seq: &str, set: &ConstraintSet) -> bool {
        if set.hom && checks::longest_run(seq) > self.max_hom {
            return false;
        }
        if set.key_gc_content {
            let gc = checks::gc_percent(seq);
            if gc < self.key_min_gc || gc > self.key_max_gc {
                return false;
            }
        }
        if set.hairpin
            && checks::max_stem(seq, self.loop_size_min, self.loop_size_max) > self.max_hairpin
        {
            return false;
        }
        true
    }
}

fn parsed<T: FromStr>(form: &FormState, kind: PanelKind, name: &str, fallback: T) -> Result<T> {
    if !form.panel(kind).visible {
        return Ok(fallback);
    }
    let raw = form.field(kind, name).unwrap_or_default();
    raw.parse()
        .map_err(|_| eyre!("field {} has a non-numeric value '{}'", name, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FlagStore;

    fn sizes(payload_size: usize, payload_num: usize, key_size: usize, key_num: usize) -> ElementSizes {
        ElementSizes {
            payload_size,
            payload_num,
            key_size,
            key_num,
        }
    }

    fn plain(sizes: ElementSizes, max_hom: usize) -> Result<Constraints> {
        Constraints::new(sizes, max_hom, 2, 1, 1, 25.0, 65.0, 25.0, 65.0)
    }

    #[test]
    fn rejects_invalid_ranges() {
        let s = sizes(5, 1, 2, 2);
        assert!(Constraints::new(s, 1, 2, 3, 1, 25.0, 65.0, 25.0, 65.0).is_err());
        assert!(Constraints::new(s, 1, 2, 1, 1, 70.0, 65.0, 25.0, 65.0).is_err());
        assert!(Constraints::new(s, 1, 2, 1, 1, 25.0, 120.0, 25.0, 65.0).is_err());
        assert!(Constraints::new(s, 0, 2, 1, 1, 25.0, 65.0, 25.0, 65.0).is_err());
        assert!(Constraints::new(s, 1, 0, 1, 1, 25.0, 65.0, 25.0, 65.0).is_err());
        assert!(plain(sizes(0, 1, 2, 2), 1).is_err());
        assert!(plain(sizes(5, 0, 2, 2), 1).is_err());
    }

    #[test]
    fn homopolymer_cap_is_clamped() {
        // 4*2 - 2 + 3*10 = 36
        let c = plain(sizes(10, 1, 2, 2), 100).unwrap();
        assert_eq!(c.max_hom, 36);
        // single key tightens to key_size + payload_size - 1 = 11
        let c = plain(sizes(10, 1, 2, 1), 100).unwrap();
        assert_eq!(c.max_hom, 11);
        // an already-small cap is untouched
        let c = plain(sizes(10, 1, 2, 2), 3).unwrap();
        assert_eq!(c.max_hom, 3);
    }

    #[test]
    fn disabled_checks_are_ignored() {
        let c = plain(sizes(5, 1, 2, 2), 1).unwrap();
        let none = ConstraintSet::default();
        assert!(c.allows_motif("AAAAAAAAA", &none));
        let hom_only = ConstraintSet {
            hom: true,
            ..ConstraintSet::default()
        };
        assert!(!c.allows_motif("AAAAAAAAA", &hom_only));
        assert!(c.allows_motif("ACTACTACT", &hom_only));
    }

    #[test]
    fn gc_bounds_apply_to_the_right_element() {
        let c = Constraints::new(sizes(4, 1, 4, 2), 4, 2, 1, 1, 50.0, 100.0, 0.0, 25.0).unwrap();
        let set = ConstraintSet {
            gc_content: true,
            key_gc_content: true,
            ..ConstraintSet::default()
        };
        // motif bounds ignore the key bounds and vice versa
        assert!(c.allows_motif("GGCCGGCCGGCC", &set));
        assert!(!c.allows_motif("ATATATATATAT", &set));
        assert!(c.allows_key("ATAT", &set));
        assert!(!c.allows_key("GGCC", &set));
    }

    #[test]
    fn hairpin_check_flags_long_stems() {
        let c = Constraints::new(sizes(3, 1, 2, 2), 4, 1, 1, 1, 0.0, 100.0, 0.0, 100.0).unwrap();
        let set = ConstraintSet {
            hairpin: true,
            ..ConstraintSet::default()
        };
        // two-base stem across the payload/key boundary exceeds max_hairpin=1
        assert!(!c.allows_motif("GTACAGT", &set));
        assert!(c.allows_motif("AAGAAAA", &set));
    }

    #[test]
    fn from_form_uses_panel_fields_when_visible() {
        let mut form = FormState::new(FlagStore::new());
        let c = Constraints::from_form(&form, ElementSizes::default()).unwrap();
        // hidden panels fall back to the analysis defaults
        assert_eq!(c.max_hom, 1);
        assert_eq!((c.loop_size_min, c.loop_size_max), (1, 1));
        assert_eq!((c.min_gc, c.max_gc), (25.0, 65.0));

        form.select("homopolymer");
        form.select("hairpin");
        let c = Constraints::from_form(&form, ElementSizes::default()).unwrap();
        assert_eq!(c.max_hom, 5);
        assert_eq!((c.loop_size_min, c.loop_size_max), (6, 7));
    }

    #[test]
    fn from_form_reports_bad_field_values() {
        let mut form = FormState::new(FlagStore::new());
        form.select("gcmotif");
        form.set_field(PanelKind::GcMotif, "gcContentMinPercentage", "lots");
        assert!(Constraints::from_form(&form, ElementSizes::default()).is_err());
    }

    #[test]
    fn active_set_follows_panel_visibility() {
        let mut form = FormState::new(FlagStore::new());
        assert_eq!(ConstraintSet::from_form(&form), ConstraintSet::default());
        form.select("hairpin");
        form.select("gckey");
        let set = ConstraintSet::from_form(&form);
        assert!(set.hairpin && set.key_gc_content);
        assert!(!set.hom && !set.gc_content);
    }
}
