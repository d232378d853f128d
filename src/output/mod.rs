//! Output formatting and response generation.

mod response;

pub use response::{SplitResponse, VerbReport, format_response};
