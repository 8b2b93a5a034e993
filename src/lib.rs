pub mod error;
pub mod export;
pub mod fetch;
pub mod pipeline;
pub mod process;

pub use error::{ErrorKind, PipelineError};
pub use pipeline::{run, PipelineConfig, RunSummary};
