/// An event to track the progress of a brute-force search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    /// The passwords of this length are about to be tried.
    Length {
        length: u32,
        /// The number of passwords of this length, `None` if it doesn't fit in a u128.
        candidates: Option<u128>,
    },
    /// A password was hashed and compared to the target.
    Attempt { candidate: &'a str },
}

/// Receives the events of a search.
/// Events carry no control flow, a sink can safely ignore them.
pub trait EventSink {
    fn send(&mut self, event: Event<'_>);
}

/// Discards all the events.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: Event<'_>) {}
}

impl<F: FnMut(Event<'_>)> EventSink for F {
    #[inline]
    fn send(&mut self, event: Event<'_>) {
        self(event)
    }
}
