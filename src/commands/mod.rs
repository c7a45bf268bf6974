//! CLI command implementations.
//!
//! Each command is in its own submodule with an options struct and an
//! `execute_*` entry point.

pub mod compare;
pub mod evaluate;
pub mod export;
pub mod recommend;

pub use compare::{execute_compare, select_libraries, CompareOptions};
pub use evaluate::{execute_evaluate, EvaluateOptions};
pub use export::{execute_export, ExportOptions};
pub use recommend::{execute_recommend, RecommendOptions};
