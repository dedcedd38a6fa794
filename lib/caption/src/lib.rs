//! Image captioning for lookalike
//!
//! A [`Captioner`] turns a product image into free text that the encoder
//! scores against the taxonomy. [`GeminiCaptioner`] calls the Gemini
//! `generateContent` API; [`FixedCaptioner`] and [`UnavailableCaptioner`]
//! cover tests and deployments without credentials.

pub mod captioner;
pub mod error;
pub mod gemini;
pub mod source;

pub use captioner::{Captioner, FixedCaptioner, UnavailableCaptioner};
pub use error::{CaptionError, Result};
pub use gemini::{GeminiCaptioner, GeminiConfig};
pub use source::ImageSource;
