//! Bounded buffer of pending tool events.

use paver_collections::RingQueue;
use paver_core::TileGridMut;

use crate::tool::{Tool, ToolEvent};

/// Events waiting to be fed to a tool, oldest first.
///
/// Consecutive hovers collapse into the latest one, so a burst of pointer
/// motion between two frames costs one search, not one per sample.
///
/// # Examples
///
/// ```
/// use paver_core::OffsetCoord;
/// use paver_road::{EventInbox, ToolEvent};
///
/// let mut inbox = EventInbox::new(8);
/// inbox.push(ToolEvent::Hover(OffsetCoord::new(0, 0)));
/// inbox.push(ToolEvent::Hover(OffsetCoord::new(0, 1)));
/// inbox.push(ToolEvent::Press);
/// assert_eq!(inbox.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct EventInbox {
    events: RingQueue<ToolEvent>,
}

impl EventInbox {
    /// Default number of buffered events.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// An inbox holding at most `capacity` events.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "EventInbox capacity must be positive");
        Self {
            events: RingQueue::new(capacity + 1),
        }
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether another non-hover event would overflow.
    pub fn is_full(&self) -> bool {
        self.events.is_full()
    }

    /// Buffer `event`, replacing a hover at the back with a newer hover.
    ///
    /// # Panics
    ///
    /// Panics if the inbox is full and `event` cannot be merged.
    pub fn push(&mut self, event: ToolEvent) {
        let merge = matches!(event, ToolEvent::Hover(_))
            && matches!(self.events.back(), Some(ToolEvent::Hover(_)));
        if merge {
            self.events.pop_back();
        }
        self.events.push_back_value(event);
    }

    /// Drop every buffered event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Feed every buffered event to `tool` in arrival order. Returns the
    /// number of events delivered.
    pub fn drain_into<T, G>(&mut self, tool: &mut T, grid: &mut G) -> usize
    where
        T: Tool + ?Sized,
        G: TileGridMut + ?Sized,
    {
        let mut delivered = 0;
        while let Some(event) = self.events.take_front() {
            tool.handle(grid, event);
            delivered += 1;
        }
        delivered
    }
}

impl Default for EventInbox {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
