//! Media understanding for askforge.
//!
//! Currently OCR only, and the OCR engine is simulated: the trait seam exists
//! so a real recognition backend can be swapped in without touching callers.

pub mod ocr;

pub use ocr::{OcrEngine, SimulatedOcr};
