//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar with item counts and status text
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Single-line text field (compose and inline edit)
//! - `TodoList`: Selectable list of items with persistent `TodoListState`
//!
//! Components receive external data as props rather than reaching into
//! `App`, which keeps each one testable against a `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── todo_list.rs     (Item rows, selection)
//! └── input_box/       (Text field + cursor tracking)
//! ```

pub mod input_box;
pub mod title_bar;
pub mod todo_list;

pub use input_box::{INPUT_HEIGHT, InputBox, InputEvent};
pub use title_bar::TitleBar;
pub use todo_list::{ListEvent, TodoList, TodoListState};
