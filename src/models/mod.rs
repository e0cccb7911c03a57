pub mod loaders;
pub mod record;
pub mod report;
pub mod table;

pub use loaders::{load_table, TableFormat};
pub use record::NormalizedRecord;
pub use report::{BatchReport, RenderResult, RowFailure};
pub use table::{CellValue, RawTable};
