//! Horizon - scenario-based personal finance projections
//!
//! This library records a simple ledger (accounts, categories,
//! transactions) and projects it forward: recent history is averaged into a
//! baseline, scenarios layer behavior changes on top of it, and the result
//! is simulated month by month, checked against goals and compared.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (ledger records, scenarios, goals)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `projection`: Baseline, simulation, goal analysis and comparison
//! - `services`: Business logic layer
//! - `cli`: Command handlers
//! - `display`, `reports`: Terminal output
//! - `export`: JSON, YAML and CSV export of projections
//!
//! # Example
//!
//! ```rust,ignore
//! use horizon::config::{paths::HorizonPaths, settings::Settings};
//! use horizon::services::ProjectionService;
//! use horizon::storage::Storage;
//!
//! let paths = HorizonPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let baseline = ProjectionService::new(&storage, &settings).calculate_baseline()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod projection;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{HorizonError, HorizonResult};
