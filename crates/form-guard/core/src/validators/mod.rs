//! Field validators
//!
//! Pure string checks shared by the guard, the browser adapter and any
//! server-side code that wants the same rules.

pub mod garde_validators;
pub mod keywords;
pub mod url;

pub use self::garde_validators::*;
pub use self::keywords::*;
pub use self::url::*;
