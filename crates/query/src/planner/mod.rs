//! Query planner module.

mod logical;

pub use logical::LogicalPlan;
