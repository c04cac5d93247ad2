//! Integration tests

mod auth_test;
mod graph_test;
mod storage_test;
