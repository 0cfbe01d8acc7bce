// Language detection and translation: trait-based so the external services
// can be swapped (or faked in tests) without touching the pipeline.
//
// The adapter module owns the retry policy; the traits only describe a
// single call to the underlying service.

pub mod adapter;
pub mod detect;
pub mod google;
pub mod libre;
pub mod traits;
