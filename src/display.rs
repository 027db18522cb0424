use std::fmt;
use std::fmt::{Display, Formatter};

use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::render::{Native, Renderer};

/// Writes `begin`, then each element of `items` separated by `separator`, then `end`. Returns the
/// number of elements written.
///
/// The renderer is checked for readiness before the first write, so a
/// [FormatError::MissingRenderer] leaves `out` untouched.
pub fn write_seq<I, R>(
    out: &mut dyn fmt::Write,
    items: I,
    renderer: &R,
    options: &FormatOptions,
) -> Result<usize, FormatError>
where
    I: IntoIterator,
    R: Renderer<I::Item> + ?Sized,
{
    if !renderer.is_ready() {
        return Err(FormatError::MissingRenderer);
    }

    out.write_str(&options.begin)?;
    let mut count = 0;
    for item in items {
        if count != 0 {
            out.write_str(&options.separator)?;
        }
        renderer.render(item, out)?;
        count += 1;
    }
    out.write_str(&options.end)?;
    Ok(count)
}

/// Renders a sequence into a new [String].
pub fn format_seq<I, R>(
    items: I,
    renderer: &R,
    options: &FormatOptions,
) -> Result<String, FormatError>
where
    I: IntoIterator,
    R: Renderer<I::Item> + ?Sized,
{
    let mut out = String::new();
    write_seq(&mut out, items, renderer, options)?;
    Ok(out)
}

/// A [Display] view of a sequence. The sequence is re-iterated (via [Clone]) on every `fmt` call,
/// so the same view may be displayed any number of times.
///
/// Displaying through a renderer that is not ready fails with [fmt::Error]; use [format_seq] to
/// observe the underlying [FormatError].
pub struct DisplaySeq<I, R = Native> {
    items: I,
    renderer: R,
    options: FormatOptions,
}

impl<I> DisplaySeq<I> {
    pub fn new(items: I) -> Self {
        Self {
            items,
            renderer: Native,
            options: FormatOptions::DEFAULT,
        }
    }
}

impl<I, R> DisplaySeq<I, R> {
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_renderer<S>(self, renderer: S) -> DisplaySeq<I, S> {
        DisplaySeq {
            items: self.items,
            renderer,
            options: self.options,
        }
    }
}

impl<I, R> Display for DisplaySeq<I, R>
where
    I: IntoIterator + Clone,
    R: Renderer<I::Item>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self.items.clone(), &self.renderer, &self.options)
            .map_err(|_| fmt::Error)?;
        Ok(())
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplaySeq<&'a [D]> {
    fn from(items: &'a [D]) -> Self {
        DisplaySeq::new(items)
    }
}

pub trait SeqExt: IntoIterator + Clone + Sized {
    fn display_seq(self) -> DisplaySeq<Self> {
        DisplaySeq::new(self)
    }

    fn display_seq_with(self, options: FormatOptions) -> DisplaySeq<Self> {
        DisplaySeq::new(self).with_options(options)
    }

    fn display_seq_rendered<R: Renderer<Self::Item>>(self, renderer: R) -> DisplaySeq<Self, R> {
        DisplaySeq::new(self).with_renderer(renderer)
    }
}

impl<I: IntoIterator + Clone> SeqExt for I {}
