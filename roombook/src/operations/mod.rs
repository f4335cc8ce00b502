//! Reservation lifecycle operations using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: reads the current record, applies the status guards
//!    and the availability check, and builds a plan
//! 2. **Execution**: takes the plan and performs the single write, or in
//!    dry-run mode only confirms the target still exists
//!
//! Both phases run inside the same immediate transaction when driven by
//! [`ReservationManager`].
//!
//! # Examples
//!
//! ```no_run
//! use roombook::operations::{ManagerOptions, ReservationManager};
//! use roombook::{Database, DatabaseConfig, Logger, ReservationId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
//! let logger = Logger::default();
//! let mut manager = ReservationManager::new(&mut db, &logger, ManagerOptions::default());
//!
//! manager.approve(ReservationId::new(1)).unwrap();
//! ```

pub mod executor;
pub mod lifecycle;
pub mod manager;
pub mod plan;
pub mod transitions;

pub use executor::{ExecutionResult, PlanExecutor};
pub use lifecycle::{
    plan_approve, plan_cancel, plan_create, plan_delete, plan_update, OVERLAP_MESSAGE,
};
pub use manager::{ManagerOptions, ReservationManager};
pub use plan::{OperationPlan, PlanAction};
pub use transitions::{guard_approve, guard_cancel, guard_update, permits, target_status};
