//! The interview decision procedure.
//!
//! `dispatch::plan` is the pure core: given a caller-supplied snapshot it
//! selects one protocol (per-subject walk, per-activity walk, fixed-order
//! preset walk, or the open-ended fallback) and returns the next step plus a
//! state patch. `engine::Engine` executes that step, calling the model only
//! where a step needs generative text.

pub mod academic;
pub mod background;
pub mod cv;
pub mod dispatch;
pub mod engine;
pub mod entities;
pub mod extracurricular;
pub mod presets;
pub mod prompts;
pub mod state;
pub mod themes;
pub mod window;

pub use dispatch::{Plan, Step};
pub use engine::Engine;
pub use state::{InterviewState, NextQuestion, Track, Turn};
