// Sentiment scoring: trait-based so the model can be swapped.
//
// The default implementation is VADER, a rule-and-lexicon model tuned for
// social media text. It runs locally and returns a compound polarity score.

pub mod traits;
pub mod vader;
