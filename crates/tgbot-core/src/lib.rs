//! # tgbot-core
//!
//! Wire codec, payload projection, executor contract, configuration, and
//! error handling shared by every tgbot crate.

pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod input_file;
pub mod payload;
pub mod traits;

pub use codec::{Entity, ResultShape};
pub use envelope::{Envelope, ResponseParameters};
pub use error::{BoxError, DecodeError, EncodeError, ExecutionError};
pub use input_file::{InputFile, Upload, UploadSource};
pub use payload::Payload;
pub use traits::{execute, Executor, Method};
