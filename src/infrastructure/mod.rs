pub mod storage;
pub mod template_store;

pub use storage::Storage;
pub use template_store::{TemplateHandle, TemplateStore};
