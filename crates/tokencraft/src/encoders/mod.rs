//! # Token Encoders
//!
//! See [`TokenEncoder`].

pub mod token_encoder;

#[doc(inline)]
pub use token_encoder::TokenEncoder;
