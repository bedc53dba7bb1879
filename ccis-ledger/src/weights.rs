//! Insertion-order evidence weights.
//!
//! Evidence earns its weight from ledger position, not wall-clock age:
//! the n-th record (0-based) weighs `exp(-rate * n)`. Early evidence in
//! a competency journey is the baseline the whole progression is read
//! against, so it keeps the most weight; a learner who pads the ledger
//! with easy wins late changes little. Weights are assigned once at
//! insertion and never rewritten.

/// Weight of the record at `position` in the ledger.
pub fn insertion_weight(decay_rate: f64, position: usize) -> f64 {
    (-decay_rate * position as f64).exp()
}

/// Weight the next record would receive, given the current ledger
/// length. Exclusions do not free up positions; the ledger only grows.
pub fn next_weight(decay_rate: f64, ledger_len: usize) -> f64 {
    insertion_weight(decay_rate, ledger_len)
}
