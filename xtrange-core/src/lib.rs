//! # Xtrange Core Library
//!
//! Dialogue and inspection logic for Xtrange, a social-deduction game
//! where the player interrogates characters at the door and must spot
//! the impostors ("Xtranges") among them.
//!
//! Two independent resolvers:
//!
//! - **Response Resolver** ([`response`]) — normalize the question, look
//!   it up in the character's scripted knowledge base, fall back to a
//!   generic line, and corrupt the text if the character is an Xtrange.
//! - **Inspection Resolver** ([`inspection`]) — eyes, teeth and pocket
//!   searches returning flavor text and image asset references.
//!
//! Both are pure with respect to shared state. Randomness comes from a
//! caller-supplied [`rand::Rng`], so every outcome is reproducible under
//! a seed; [`get_character_response`] and [`get_inspection_result`] use
//! the thread RNG and the stock tables.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod corruption;
pub mod engine;
pub mod error;
pub mod inspection;
pub mod knowledge;
pub mod response;
pub mod roster;
pub mod text;
pub mod types;

pub use config::XtrangeConfig;
pub use engine::XtrangeEngine;
pub use error::XtrangeError;
pub use inspection::get_inspection_result;
pub use response::get_character_response;
pub use types::*;
