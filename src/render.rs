//! Element renderers. A [Renderer] turns one element of a sequence into text.
//!
//! Elements that implement [Display] are rendered by [Native]. Any other element type must be
//! given a closure; leaving it out is rejected by the type checker. When the renderer is only
//! known at runtime, [RendererSlot] defers that check to the print call and reports
//! [FormatError::MissingRenderer].

use std::fmt;
use std::fmt::Display;

use crate::error::FormatError;

pub trait Renderer<T> {
    /// Writes the textual form of `element` to `out`.
    fn render(&self, element: T, out: &mut dyn fmt::Write) -> Result<(), FormatError>;

    /// Whether this renderer can produce output at all. Checked once before anything is
    /// written, so a missing renderer never leaves a half-printed sequence behind.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Renders elements through their [Display] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Native;

impl<T: Display> Renderer<T> for Native {
    fn render(&self, element: T, out: &mut dyn fmt::Write) -> Result<(), FormatError> {
        write!(out, "{element}")?;
        Ok(())
    }
}

impl<T, F> Renderer<T> for F
where
    F: Fn(T) -> String,
{
    fn render(&self, element: T, out: &mut dyn fmt::Write) -> Result<(), FormatError> {
        out.write_str(&self(element))?;
        Ok(())
    }
}

/// A renderer for `&X` elements that is configured (or cleared) at runtime. The stored function
/// accepts an element borrow of any lifetime, so containers printed through the slot only need
/// to live for the print call.
pub struct RendererSlot<'a, X: ?Sized> {
    func: Option<BoxedRenderer<'a, X>>,
}

pub type BoxedRenderer<'a, X> = Box<dyn Fn(&X) -> String + 'a>;

impl<'a, X: ?Sized> RendererSlot<'a, X> {
    pub fn empty() -> Self {
        Self { func: None }
    }

    pub fn new(func: impl Fn(&X) -> String + 'a) -> Self {
        Self {
            func: Some(Box::new(func)),
        }
    }

    pub fn set(&mut self, func: impl Fn(&X) -> String + 'a) {
        self.func = Some(Box::new(func));
    }

    pub fn clear(&mut self) -> Option<BoxedRenderer<'a, X>> {
        self.func.take()
    }

    pub fn is_set(&self) -> bool {
        self.func.is_some()
    }
}

impl<X: ?Sized> Default for RendererSlot<'_, X> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<X: ?Sized> fmt::Debug for RendererSlot<'_, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererSlot")
            .field("set", &self.is_set())
            .finish()
    }
}

impl<'e, X: ?Sized> Renderer<&'e X> for RendererSlot<'_, X> {
    fn render(&self, element: &'e X, out: &mut dyn fmt::Write) -> Result<(), FormatError> {
        let func = self.func.as_ref().ok_or(FormatError::MissingRenderer)?;
        out.write_str(&func(element))?;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.func.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string<T>(
        renderer: &impl Renderer<T>,
        element: T,
    ) -> Result<String, FormatError> {
        let mut out = String::new();
        renderer.render(element, &mut out)?;
        Ok(out)
    }

    #[test]
    fn native_uses_display() {
        assert_eq!("42", render_to_string(&Native, 42).unwrap());
        assert_eq!("x", render_to_string(&Native, &"x").unwrap());
        assert!(Renderer::<u8>::is_ready(&Native));
    }

    #[test]
    fn closure_with_captured_context() {
        let unit = "kg";
        let renderer = |mass: &f64| format!("{mass:.1}{unit}");
        assert_eq!("2.5kg", render_to_string(&renderer, &2.5).unwrap());
    }

    #[test]
    fn closure_for_type_without_display() {
        struct Opaque(u32);
        let renderer = |opaque: &Opaque| format!("#{}", opaque.0);
        assert_eq!("#7", render_to_string(&renderer, &Opaque(7)).unwrap());
    }

    #[test]
    fn empty_slot_fails() {
        let slot: RendererSlot<u32> = RendererSlot::empty();
        assert!(!Renderer::<&u32>::is_ready(&slot));
        assert!(matches!(
            render_to_string(&slot, &1u32),
            Err(FormatError::MissingRenderer)
        ));
    }

    #[test]
    fn slot_set_and_clear() {
        let mut slot: RendererSlot<u32> = RendererSlot::default();
        slot.set(|value| format!("<{value}>"));
        assert!(slot.is_set());
        assert_eq!("<3>", render_to_string(&slot, &3u32).unwrap());

        assert!(slot.clear().is_some());
        assert!(!slot.is_set());
        assert!(slot.clear().is_none());
    }

    #[test]
    fn slot_debug() {
        let slot: RendererSlot<u32> = RendererSlot::new(|value: &u32| value.to_string());
        assert_eq!("RendererSlot { set: true }", format!("{slot:?}"));
    }

    #[test]
    fn slot_accepts_borrows_of_any_lifetime() {
        let slot: RendererSlot<str> = RendererSlot::new(|word: &str| word.len().to_string());
        for round in 0..3 {
            let word = "x".repeat(round);
            assert_eq!(round.to_string(), render_to_string(&slot, word.as_str()).unwrap());
        }
    }
}
