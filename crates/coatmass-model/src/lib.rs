//! Value types shared by the coating mass calculator and its history store.
//!
//! - `input` - [`CalculationInput`], [`RawCalculationInput`] and validation
//! - `result` - [`CalculationResult`] and its chart [`Distribution`]
//! - `error` - [`InvalidInputError`]

pub mod error;
pub mod input;
pub mod result;

pub use error::{InvalidInputError, Result};
pub use input::{
    CalculationInput, DEFAULT_PROJECT_LABEL, InputField, Layer, MixRatio, RawCalculationInput,
};
pub use result::{CalculationResult, Component, Distribution, RESULT_DECIMALS, Slice};
