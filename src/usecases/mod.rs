//! Application use cases. Orchestrate domain logic via ports.

pub mod plan_service;
pub mod planner_session;

pub use plan_service::{PlanService, RewritePolicy};
pub use planner_session::{Derived, PlannerSession};
