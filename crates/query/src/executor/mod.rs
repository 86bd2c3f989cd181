//! Query executor module.

mod filter;
mod group;
mod project;
mod runner;
mod sort;

pub use filter::{FilterExecutor, HavingExecutor};
pub use group::GroupExecutor;
pub use project::ProjectExecutor;
pub(crate) use runner::PipelineRunner;
pub use sort::SortExecutor;
