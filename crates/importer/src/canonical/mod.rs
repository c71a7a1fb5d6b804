pub mod models;
pub mod transformer;
pub mod validator;

pub use models::{CanonicalSnapshot, FORMAT_VERSION, SourceMetadata, SourceType};
pub use transformer::{CanonicalTransformer, ImportSummary};
pub use validator::{CanonicalValidator, ValidationReport};
