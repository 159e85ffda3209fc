//! Wire models shared by the API server and its clients.

pub mod report;
pub mod upload;

pub use report::{DocumentValidation, FraudRisk, ValidationResult};
pub use upload::{UploadRequest, UploadedFile};
