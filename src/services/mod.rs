//! One wrapper per emulated service. Every operation is a single
//! pass-through call to the SDK; failures from the emulator surface to the
//! caller unchanged.

pub mod lambda;
pub mod s3;
pub mod sqs;

pub use lambda::LambdaService;
pub use s3::S3Service;
pub use sqs::{ReceivedMessage, SqsService};
