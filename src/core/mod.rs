//! # Core Application Logic
//!
//! The to-do list itself and how it is stored.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • TodoStore (the list) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • persistence          │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`todo`]: The `Todo` record and id assignment
//! - [`store`]: `TodoStore`, the ordered list and its mutations
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`storage`]: The key-value primitive (`FileStore`, `MemoryStore`)
//! - [`persistence`]: Load/save of the list and the background `SaveWorker`
//! - [`config`]: Layered settings

pub mod action;
pub mod config;
pub mod persistence;
pub mod state;
pub mod storage;
pub mod store;
pub mod todo;
