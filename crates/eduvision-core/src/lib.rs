//! Domain model for EduVision.
//!
//! - `subject`: instructional subjects and their fixed framings
//! - `request`: request kinds and the `PromptRequest` value
//! - `prompt`: pure prompt builders
//! - `outcome`: the observable `RequestOutcome` state
//! - `failure`: user-facing failure messages and fault classification
//! - `client`: the `GenerativeClient` seam for the hosted model
//! - `prepared_image`: bounded, decoded images ready for upload
//! - `config`: configuration and secret file schemas
//! - `catalog`: suggestion lists and sample study history

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod failure;
pub mod prepared_image;
pub mod outcome;
pub mod prompt;
pub mod request;
pub mod subject;

pub use client::{ClientFault, GenerationPrompt, GenerativeClient};
pub use error::EduError;
pub use prepared_image::PreparedImage;
pub use outcome::RequestOutcome;
pub use request::{PromptRequest, RequestKind};
pub use subject::Subject;
