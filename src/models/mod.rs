pub mod owner;
pub mod raw;
pub mod task;
pub mod project;

pub use owner::*;
pub use raw::*;
pub use task::*;
pub use project::*;
