//! This module contains helper functionality.

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;
