// Suspicion scoring: the per-post signals and the formula that combines them.
//
// keywords, engagement and suspicion are pure per-post functions. history is
// the one batch-wide aggregate and must be built from the whole batch before
// any post can be scored.

pub mod engagement;
pub mod history;
pub mod keywords;
pub mod suspicion;
