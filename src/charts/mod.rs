//! Charts module - scatter rendering

mod renderer;
mod style;

pub use renderer::{RenderError, ScatterRenderer, LABEL_COLUMN};
