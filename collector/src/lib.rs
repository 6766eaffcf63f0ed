pub mod context;
pub mod scheduler;
pub mod tasks;

pub use context::CollectorContext;
pub use scheduler::Scheduler;
