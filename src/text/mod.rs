// Per-record text handling: cleanup, author fields, engagement counters.
//
// Everything here is pure and local: no I/O, no failure modes. Malformed
// input degrades to documented defaults instead of erroring.

pub mod author;
pub mod metrics;
pub mod normalize;
