//! # Wordmark
//!
//! A small library that turns a short piece of text into a stylized square
//! image: words are pulled apart with a wide gap, the font size is chosen so
//! the wrapped text fills the frame, and the finished canvas gets a soft
//! blur before it is exported as a PNG.
//!
//! ## Overview
//!
//! The pipeline is a single synchronous pass per render: space the words,
//! wrap them greedily at a candidate font size, walk the size down until the
//! block fits the vertical budget, paint, blur. The [`Generator`] re-runs
//! the whole pass whenever the text or either color changes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wordmark::{Color, EXPORT_FILE_NAME, Generator};
//!
//! let generator = Generator::new();
//! generator.load_system_fonts();
//!
//! generator.set_background_color(Color::WHITE);
//! generator.set_text_color(Color::from_hex("#202020")?);
//! generator.set_text("Hello world");
//!
//! if let Some(png) = generator.export_png()? {
//!     std::fs::write(EXPORT_FILE_NAME, png)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! *   **Auto-fit layout**: greedy word wrapping plus a descending
//!     font-size search against a fixed 500x500 canvas.
//! *   **Single-face rendering**: one narrow sans-serif face is used for
//!     both measurement and drawing, so wrapped widths always match the
//!     painted output.
//! *   **Reactive renders**: every input setter repaints the canvas in
//!     full; readers only ever observe finished images.

pub mod color;
pub mod error;
pub mod font_store;
pub mod generator;
pub mod layout;
pub mod render;

// common re-exports
pub use color::Color;
pub use error::Error;
pub use font_store::FontStore;
pub use generator::{EXPORT_FILE_NAME, Generator, Phase, RenderOptions};
pub use render::Canvas;

// re-export dependencies
pub use fontdb;
pub use fontdue;
pub use parking_lot;
