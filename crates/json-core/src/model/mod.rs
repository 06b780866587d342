//! Modelos del contrato request/response (ProcessRequest, ProcessResult,...)

pub mod health;
pub mod operation;
pub mod request;
pub mod result;

pub use health::Healthcheck;
pub use operation::{Indent, JsonOperation};
pub use request::ProcessRequest;
pub use result::{ProcessResult, ValidationResult};
