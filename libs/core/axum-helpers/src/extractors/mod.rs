//! Custom extractors for request handling.

pub mod validated_body;

pub use validated_body::ValidatedBody;
