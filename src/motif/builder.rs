//! src/motif/builder.rs
//!
//! Generates keys and payloads conforming to the active constraints, and
//! assembles the motifs they produce.
//!
//! Candidates are sampled uniformly and rejected until they pass; a bounded
//! attempt budget turns an unsatisfiable configuration into a clean failure
//! instead of a spin.

use rand::Rng;

use super::checks::NUCLEOTIDES;
use super::constraints::{ConstraintSet, Constraints};

/// Attempts per element before giving up on the whole set.
const MAX_ATTEMPTS: usize = 2_000;

/// A conforming generation result.
#[derive(Clone, Debug, Default)]
pub struct MotifSet {
    pub keys: Vec<String>,
    pub payloads: Vec<String>,
    pub motifs: Vec<String>,
}

pub struct MotifBuilder {
    constraints: Constraints,
    enabled: ConstraintSet,
}

impl MotifBuilder {
    pub fn new(constraints: Constraints, enabled: ConstraintSet) -> Self {
        Self {
            constraints,
            enabled,
        }
    }

    /// Build `key_num` distinct keys and `payload_num` distinct payloads such
    /// that every key and every assembled motif passes the enabled checks.
    /// `None` when the attempt budget runs out.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Option<MotifSet> {
        let mut keys: Vec<String> = Vec::new();
        while keys.len() < self.constraints.key_num {
            let key = self.sample(rng, self.constraints.key_size, |cand| {
                keys.iter().all(|k| k != cand) && self.constraints.allows_key(cand, &self.enabled)
            })?;
            keys.push(key);
        }

        let mut payloads: Vec<String> = Vec::new();
        let mut motifs: Vec<String> = Vec::new();
        while payloads.len() < self.constraints.payload_num {
            let payload = self.sample(rng, self.constraints.payload_size, |cand| {
                payloads.iter().all(|p| p != cand)
                    && self
                        .motifs_for(&keys, cand)
                        .iter()
                        .all(|m| self.constraints.allows_motif(m, &self.enabled))
            })?;
            for motif in self.motifs_for(&keys, &payload) {
                if !motifs.contains(&motif) {
                    motifs.push(motif);
                }
            }
            payloads.push(payload);
        }

        Some(MotifSet {
            keys,
            payloads,
            motifs,
        })
    }

    /// Every motif a payload forms with the key list: each key wrapped around
    /// the payload, and each key paired with its successor.
    fn motifs_for(&self, keys: &[String], payload: &str) -> Vec<String> {
        let mut motifs = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            let next = &keys[(i + 1) % keys.len()];
            for motif in [
                format!("{key}{payload}{key}"),
                format!("{key}{payload}{next}"),
            ] {
                if !motifs.contains(&motif) {
                    motifs.push(motif);
                }
            }
        }
        motifs
    }

    fn sample<R: Rng>(
        &self,
        rng: &mut R,
        len: usize,
        accept: impl Fn(&str) -> bool,
    ) -> Option<String> {
        for _ in 0..MAX_ATTEMPTS {
            let cand = random_sequence(rng, len);
            if accept(&cand) {
                return Some(cand);
            }
        }
        None
    }
}

/// A uniformly random sequence over the DNA alphabet.
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::constraints::ElementSizes;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lenient() -> (Constraints, ConstraintSet) {
        let sizes = ElementSizes {
            payload_size: 5,
            payload_num: 3,
            key_size: 2,
            key_num: 2,
        };
        let constraints =
            Constraints::new(sizes, 3, 2, 1, 2, 20.0, 80.0, 0.0, 100.0).unwrap();
        let enabled = ConstraintSet {
            hom: true,
            hairpin: true,
            gc_content: true,
            key_gc_content: true,
        };
        (constraints, enabled)
    }

    #[test]
    fn random_sequences_use_the_dna_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let seq = random_sequence(&mut rng, 40);
        assert_eq!(seq.len(), 40);
        assert!(seq.chars().all(|b| NUCLEOTIDES.contains(&b)));
    }

    #[test]
    fn build_produces_a_conforming_set() {
        let (constraints, enabled) = lenient();
        let motif_size = constraints.motif_size();
        let builder = MotifBuilder::new(constraints.clone(), enabled);
        let mut rng = StdRng::seed_from_u64(42);
        let set = builder.build(&mut rng).expect("set within budget");

        assert_eq!(set.keys.len(), 2);
        assert_eq!(set.payloads.len(), 3);
        assert!(set.keys.iter().all(|k| k.len() == 2));
        assert!(set.payloads.iter().all(|p| p.len() == 5));
        for motif in &set.motifs {
            assert_eq!(motif.len(), motif_size);
            assert!(constraints.allows_motif(motif, &enabled));
        }
        for key in &set.keys {
            assert!(constraints.allows_key(key, &enabled));
        }
        // distinctness
        let mut keys = set.keys.clone();
        keys.dedup();
        assert_eq!(keys.len(), set.keys.len());
    }

    #[test]
    fn motifs_wrap_payloads_in_keys() {
        let (constraints, enabled) = lenient();
        let builder = MotifBuilder::new(constraints, enabled);
        let keys = vec!["AT".to_string(), "GC".to_string()];
        let motifs = builder.motifs_for(&keys, "CCC");
        assert!(motifs.contains(&"ATCCCAT".to_string()));
        assert!(motifs.contains(&"ATCCCGC".to_string()));
        assert!(motifs.contains(&"GCCCCGC".to_string()));
        assert!(motifs.contains(&"GCCCCAT".to_string()));
        assert_eq!(motifs.len(), 4);
    }

    #[test]
    fn unsatisfiable_constraints_fail_cleanly() {
        // three distinct single-base keys with a 100% GC requirement: only G
        // and C qualify, so a third key can never exist
        let sizes = ElementSizes {
            payload_size: 4,
            payload_num: 1,
            key_size: 1,
            key_num: 3,
        };
        let constraints =
            Constraints::new(sizes, 2, 1, 1, 1, 0.0, 100.0, 100.0, 100.0).unwrap();
        let enabled = ConstraintSet {
            key_gc_content: true,
            ..ConstraintSet::default()
        };
        let builder = MotifBuilder::new(constraints, enabled);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(builder.build(&mut rng).is_none());
    }
}
