pub mod config;
pub mod edge_cases;
pub mod runner;
