//! The check cycle: visibility, identity, deduplication, and output
//!
//! - visibility: the 50%-overlap predicate with its fully-on-screen fast path
//! - identity: the dedup key and the session-scoped seen-set
//! - sink: where report lines go
//! - reporter: the Idle/Checking state machine that ties a pass together

pub mod identity;
pub mod reporter;
pub mod sink;
pub mod visibility;

pub use identity::{identity, SeenSet};
pub use reporter::{CheckState, PassOutcome, Reporter, ReporterConfig, Signal};
pub use sink::{LogSink, MemorySink, ReportSink};
pub use visibility::{is_sufficiently_visible, VISIBILITY_THRESHOLD};
