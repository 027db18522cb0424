//! Configurable printing of sequences and containers in a bracketed, separated form, such as
//! `{1, 2, 3}`. Saves the boilerplate of joining elements by hand when debugging or logging.

pub mod config;
pub mod display;
pub mod error;
pub mod formatter;
pub mod options;
pub mod render;
pub mod sink;

#[cfg(test)]
pub(crate) mod testing;

pub use display::{format_seq, DisplaySeq, SeqExt};
pub use error::FormatError;
pub use formatter::ContainerFormatter;
pub use options::{FormatOptions, Param, Params};
pub use render::{Native, Renderer, RendererSlot};

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
