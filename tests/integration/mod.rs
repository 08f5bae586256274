//! Integration test modules.

mod dashboard_flow_test;
mod scheduler_test;
