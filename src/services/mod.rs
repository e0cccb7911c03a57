pub mod archive_writer;
pub mod normalizer;
pub mod renderer;
pub mod validator;

pub use archive_writer::ArchiveWriter;
pub use normalizer::RecordNormalizer;
pub use renderer::{DocumentRender, DocxRenderer};
pub use validator::{SchemaValidator, ValidationReport};
