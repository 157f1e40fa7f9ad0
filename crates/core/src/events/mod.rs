//! Events, their reservations, and the event persistence seam.

pub mod store;
pub mod types;

pub use store::{EventStore, OrganizerItem};
pub use types::{Event, Reservation};
