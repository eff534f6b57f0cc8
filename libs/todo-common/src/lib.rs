//! Todo Common - Shared constants and date utilities for the todo service
//!
//! # Examples
//!
//! ```
//! use todo_common::{format_date, parse_flexible_date, DEFAULT_PORT};
//!
//! assert_eq!(DEFAULT_PORT, 3000);
//!
//! let date = parse_flexible_date("Jan 2 2021").unwrap();
//! assert_eq!(format_date(&date), "2021-01-02");
//! ```

pub mod constants;
pub mod utils;

pub use constants::*;
pub use utils::*;
