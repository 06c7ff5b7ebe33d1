//! Run outcome reporting.

mod command;
mod outcome;

pub use command::{workflow_command, AnnotationLevel};
pub use outcome::Outcome;
