//! # Token Decoders
//!
//! See [`TokenDecoder`].

pub mod token_decoder;

#[doc(inline)]
pub use token_decoder::TokenDecoder;
