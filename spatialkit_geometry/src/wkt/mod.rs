//! Well-Known Text: the canonical renderer and a tokenizer for the reverse direction.

mod parse;
mod render;

pub use parse::*;
pub use render::*;
