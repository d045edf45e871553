/// Cross-view signals.
///
/// The consent signal carries no payload: listeners re-read the store
/// rather than trusting an event body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEvent {
    ConsentChanged,
}

impl SiteEvent {
    /// Wire name used by the event stream.
    pub fn name(self) -> &'static str {
        match self {
            SiteEvent::ConsentChanged => "consent-changed",
        }
    }
}
