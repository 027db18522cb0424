//! [ContainerFormatter] prints sequences to a [Sink] in a bracketed, separated form, such as
//! `{1, 2, 3}`.
//!
//! A formatter carries three pieces of configuration: the sink, the element renderer and the
//! default [FormatOptions]. Nothing else persists between calls. Output is written
//! incrementally; if the sink fails midway, whatever was written before the failure stays
//! written.

use std::io::Write;

use tracing::trace;

use crate::display::write_seq;
use crate::error::FormatError;
use crate::options::{FormatOptions, Params};
use crate::render::{Native, Renderer};
use crate::sink::{IoBridge, Sink};


#[derive(Debug)]
pub struct ContainerFormatter<'w, R = Native> {
    sink: Sink<'w>,
    renderer: R,
    options: FormatOptions,
}

impl Default for ContainerFormatter<'_, Native> {
    fn default() -> Self {
        Self {
            sink: Sink::stdout(),
            renderer: Native,
            options: FormatOptions::DEFAULT,
        }
    }
}

impl<'w> ContainerFormatter<'w, Native> {
    /// A formatter writing to `sink` and rendering elements with [Display](std::fmt::Display).
    pub fn new(sink: impl Into<Sink<'w>>) -> Self {
        Self {
            sink: sink.into(),
            renderer: Native,
            options: FormatOptions::DEFAULT,
        }
    }
}

impl<'w, R> ContainerFormatter<'w, R> {
    pub fn with_sink(mut self, sink: impl Into<Sink<'w>>) -> Self {
        self.sink = sink.into();
        self
    }

    /// Replaces the renderer. The renderer may be of a different type, which is how a formatter
    /// for non-[Display](std::fmt::Display) elements is obtained.
    pub fn with_renderer<S>(self, renderer: S) -> ContainerFormatter<'w, S> {
        ContainerFormatter {
            sink: self.sink,
            renderer,
            options: self.options,
        }
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set_sink(&mut self, sink: impl Into<Sink<'w>>) {
        self.sink = sink.into();
    }

    pub fn set_renderer(&mut self, renderer: R) {
        self.renderer = renderer;
    }

    pub fn set_options(&mut self, options: FormatOptions) {
        self.options = options;
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The configured sink, for writes of the caller's own.
    pub fn sink(&mut self) -> &mut (dyn Write + 'w) {
        &mut *self.sink
    }

    /// Prints `container` using the configured options. Returns the sink so that further output
    /// can be chained onto the printed sequence.
    pub fn print<C>(&mut self, container: C) -> Result<&mut (dyn Write + 'w), FormatError>
    where
        C: IntoIterator,
        R: Renderer<C::Item>,
    {
        let Self {
            sink,
            renderer,
            options,
        } = self;
        emit(sink, container, renderer, options)?;
        Ok(&mut **sink)
    }

    /// Prints `container` using `options` in place of the configured ones.
    pub fn print_with<C>(
        &mut self,
        container: C,
        options: &FormatOptions,
    ) -> Result<&mut (dyn Write + 'w), FormatError>
    where
        C: IntoIterator,
        R: Renderer<C::Item>,
    {
        emit(&mut self.sink, container, &self.renderer, options)?;
        Ok(&mut *self.sink)
    }

    /// Prints `container` with a partial override. Parameters missing from `params` take their
    /// documented defaults rather than the configured options.
    pub fn print_params<C>(
        &mut self,
        container: C,
        params: &Params,
    ) -> Result<&mut (dyn Write + 'w), FormatError>
    where
        C: IntoIterator,
        R: Renderer<C::Item>,
    {
        self.print_with(container, &FormatOptions::from_params(params))
    }

    /// Prints `container` with a one-off `renderer`, leaving the configured renderer in place.
    pub fn print_rendered<C, S>(
        &mut self,
        container: C,
        renderer: &S,
        options: &FormatOptions,
    ) -> Result<&mut (dyn Write + 'w), FormatError>
    where
        C: IntoIterator,
        S: Renderer<C::Item> + ?Sized,
    {
        emit(&mut self.sink, container, renderer, options)?;
        Ok(&mut *self.sink)
    }
}

fn emit<C, R>(
    sink: &mut Sink,
    container: C,
    renderer: &R,
    options: &FormatOptions,
) -> Result<(), FormatError>
where
    C: IntoIterator,
    R: Renderer<C::Item> + ?Sized,
{
    let mut bridge = IoBridge::new(&mut **sink);
    match write_seq(&mut bridge, container, renderer, options) {
        Ok(count) => {
            trace!("printed {count} element(s)");
            Ok(())
        }
        Err(FormatError::Fmt(err)) => Err(match bridge.error.take() {
            Some(err) => FormatError::Sink(err),
            None => FormatError::Fmt(err),
        }),
        Err(err) => Err(err),
    }
}
