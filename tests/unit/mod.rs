//! Unit test modules.

mod config_test;
mod store_test;
mod view_model_test;
