pub mod case_handlers;
pub mod evidence_handlers;
pub mod health_handlers;
pub mod lookup_handlers;

pub use health_handlers::{root, store_diagnostics};
