pub mod record_ctx;
pub mod render_flow;

pub use record_ctx::{EntryNameSanitizer, RecordCtx};
pub use render_flow::RenderFlow;
