pub mod document;
pub mod engine;
pub mod scorer;
pub mod validator;

pub use crate::domain::model::{Product, RiskAssessment, User};
pub use crate::domain::ports::{ConfigProvider, RecordSource};
pub use crate::utils::error::Result;
