//! Leptos Toast Utilities
//!
//! Managed toast stack for Leptos.
//! Each toast occupies a horizontal slot; slots re-flow when a toast is
//! dismissed so the stack never overlaps and never grows without bound.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Outer width of one toast container (350px card + 1rem padding each side)
pub const CONTAINER_WIDTH_PX: u32 = 382;

/// Gap kept between neighbouring toast containers
pub const SPACING_PX: u32 = 330;

pub type ToastId = u64;

/// A toast currently present on the page
#[derive(Clone, Debug, PartialEq)]
pub struct Toast<T> {
    pub id: ToastId,
    pub payload: T,
}

/// Ordered list of present toasts, oldest first
#[derive(Clone, Debug)]
pub struct ToastStack<T> {
    toasts: Vec<Toast<T>>,
    next_id: ToastId,
    stride_px: u32,
}

impl<T> Default for ToastStack<T> {
    fn default() -> Self {
        Self::with_stride(CONTAINER_WIDTH_PX + SPACING_PX)
    }
}

impl<T> ToastStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stride(stride_px: u32) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            stride_px,
        }
    }

    /// Add a toast at the end of the stack and return its id
    pub fn push(&mut self, payload: T) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, payload });
        id
    }

    /// Evict a toast. Returns its payload if it was still present.
    pub fn dismiss(&mut self, id: ToastId) -> Option<T> {
        let pos = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(pos).payload)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast<T>> {
        self.toasts.iter()
    }

    /// Right margin for the toast in `slot` (0 = rightmost)
    pub fn offset_for_slot(&self, slot: usize) -> u32 {
        self.stride_px * slot as u32
    }

    /// Right margin for a present toast, derived from its current slot
    pub fn offset_of(&self, id: ToastId) -> Option<u32> {
        self.toasts
            .iter()
            .position(|t| t.id == id)
            .map(|slot| self.offset_for_slot(slot))
    }
}

impl<T: Clone> ToastStack<T> {
    /// Snapshot of (toast, offset) pairs in display order
    pub fn layout(&self) -> Vec<(Toast<T>, u32)> {
        self.toasts
            .iter()
            .enumerate()
            .map(|(slot, t)| (t.clone(), self.offset_for_slot(slot)))
            .collect()
    }
}

/// Reactive handle to a toast stack
pub type ToastSignal<T> = RwSignal<ToastStack<T>>;

pub fn create_toast_signal<T: Send + Sync + 'static>() -> ToastSignal<T> {
    RwSignal::new(ToastStack::new())
}

/// Remove a toast from the reactive stack
pub fn dismiss_toast<T: Send + Sync + 'static>(toasts: ToastSignal<T>, id: ToastId) {
    toasts.update(|stack| {
        stack.dismiss(id);
    });
}

/// Push a toast and schedule its eviction after `dismiss_after_ms`.
/// A toast closed earlier by the user is simply not found when the timer fires.
pub fn show_toast<T: Send + Sync + 'static>(
    toasts: ToastSignal<T>,
    payload: T,
    dismiss_after_ms: u32,
) -> ToastId {
    let mut id = 0;
    toasts.update(|stack| id = stack.push(payload));
    Timeout::new(dismiss_after_ms, move || dismiss_toast(toasts, id)).forget();
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIDE: u32 = CONTAINER_WIDTH_PX + SPACING_PX;

    #[test]
    fn test_three_toasts_do_not_overlap() {
        let mut stack = ToastStack::new();
        let a = stack.push("a");
        let b = stack.push("b");
        let c = stack.push("c");

        assert_eq!(stack.offset_of(a), Some(0));
        assert_eq!(stack.offset_of(b), Some(STRIDE));
        assert_eq!(stack.offset_of(c), Some(2 * STRIDE));
    }

    #[test]
    fn test_dismiss_reflows_remaining() {
        let mut stack = ToastStack::new();
        let a = stack.push("a");
        let b = stack.push("b");
        let c = stack.push("c");

        assert_eq!(stack.dismiss(b), Some("b"));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.offset_of(a), Some(0));
        assert_eq!(stack.offset_of(c), Some(STRIDE));
        assert_eq!(stack.offset_of(b), None);

        // New toast takes the next free slot, not the old count
        let d = stack.push("d");
        assert_eq!(stack.offset_of(d), Some(2 * STRIDE));
    }

    #[test]
    fn test_dismiss_twice_is_noop() {
        let mut stack = ToastStack::new();
        let a = stack.push(1);
        assert_eq!(stack.dismiss(a), Some(1));
        assert_eq!(stack.dismiss(a), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_layout_matches_offsets() {
        let mut stack = ToastStack::with_stride(100);
        stack.push("x");
        stack.push("y");
        let layout = stack.layout();
        assert_eq!(layout.len(), 2);
        assert_eq!(layout[0].0.payload, "x");
        assert_eq!(layout[0].1, 0);
        assert_eq!(layout[1].0.payload, "y");
        assert_eq!(layout[1].1, 100);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut stack = ToastStack::new();
        let a = stack.push(());
        stack.dismiss(a);
        let b = stack.push(());
        assert_ne!(a, b);
    }
}
