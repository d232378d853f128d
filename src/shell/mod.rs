//! Command line splitting.

pub mod detect;
pub mod posix;
mod dispatch;
pub mod windows;

pub use detect::{Signals, detect};
pub use dispatch::{Convention, Format, split, split_with};
