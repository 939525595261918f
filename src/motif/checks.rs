//! src/motif/checks.rs
//!
//! Pure sequence checks the constraint panels configure: homopolymer run
//! length, GC-content percentage, and hairpin stem detection.
//!
//! A hairpin is a stem of bases pairing with the reverse complement of a later
//! stem, separated by a loop whose length lies in the configured range. The
//! detector reports the longest such stem so callers can compare it against
//! the allowed maximum.

/// The DNA alphabet.
pub const NUCLEOTIDES: [char; 4] = ['A', 'T', 'C', 'G'];

/// Watson-Crick complement; non-nucleotide characters map to themselves.
pub fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

/// Length of the longest run of one repeated base.
pub fn longest_run(seq: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for base in seq.chars() {
        current = if Some(base) == previous { current + 1 } else { 1 };
        longest = longest.max(current);
        previous = Some(base);
    }
    longest
}

/// GC-content of the sequence as a percentage; 0 for the empty sequence.
pub fn gc_percent(seq: &str) -> f64 {
    let len = seq.chars().count();
    if len == 0 {
        return 0.0;
    }
    let gc = seq.chars().filter(|b| *b == 'G' || *b == 'C').count();
    gc as f64 * 100.0 / len as f64
}

/// Longest hairpin stem over every loop placement with a loop length in
/// `[loop_min, loop_max]`.
///
/// For a loop occupying `seq[p..p+l]`, the stem extends outward while
/// `seq[p-1-k]` pairs with `seq[p+l+k]`; the innermost pair sits directly
/// against the loop on both sides.
pub fn max_stem(seq: &str, loop_min: usize, loop_max: usize) -> usize {
    let bases: Vec<char> = seq.chars().collect();
    let n = bases.len();
    let mut best = 0;
    for loop_len in loop_min..=loop_max {
        if loop_len + 2 > n {
            break;
        }
        for start in 1..(n - loop_len) {
            let mut k = 0;
            while start >= k + 1
                && start + loop_len + k < n
                && bases[start - 1 - k] == complement(bases[start + loop_len + k])
            {
                k += 1;
            }
            best = best.max(k);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_pairs() {
        assert_eq!(complement('A'), 'T');
        assert_eq!(complement('T'), 'A');
        assert_eq!(complement('C'), 'G');
        assert_eq!(complement('G'), 'C');
        assert_eq!(complement('N'), 'N');
    }

    #[test]
    fn longest_run_counts_repeats() {
        assert_eq!(longest_run(""), 0);
        assert_eq!(longest_run("ACGT"), 1);
        assert_eq!(longest_run("AAATCC"), 3);
        assert_eq!(longest_run("ATCGGGG"), 4);
    }

    #[test]
    fn gc_percent_of_known_sequences() {
        assert_eq!(gc_percent(""), 0.0);
        assert_eq!(gc_percent("GGCC"), 100.0);
        assert_eq!(gc_percent("ATAT"), 0.0);
        assert_eq!(gc_percent("GATC"), 50.0);
    }

    #[test]
    fn empty_and_short_sequences_have_no_stem() {
        assert_eq!(max_stem("", 1, 1), 0);
        assert_eq!(max_stem("ACG", 1, 1), 0);
    }

    #[test]
    fn full_hairpin_inside_one_element() {
        // stem AC, loop G, stem GT: GT reversed pairs AC
        assert_eq!(max_stem("ACGGT", 1, 1), 2);
    }

    #[test]
    fn loop_length_outside_range_shrinks_the_stem() {
        // the two-base stem of ACGGT needs a one-base loop
        assert_eq!(max_stem("ACGGT", 2, 3), 1);
    }

    #[test]
    fn stem_spans_the_payload_key_boundary() {
        // key GT, payload ACA: stem1 sits at the payload tail, stem2 reaches
        // into the trailing key copy
        let motif = format!("{}{}{}", "GT", "ACA", "GT");
        assert_eq!(max_stem(&motif, 1, 1), 2);
    }

    #[test]
    fn unpaired_bases_do_not_extend_the_stem() {
        assert_eq!(max_stem("AAGAA", 1, 1), 0);
    }
}
