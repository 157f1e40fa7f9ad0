//! Event domain types.

use chrono::NaiveDate;
use planora_shared::types::{EventId, ReservationId, SolutionId, UserId};

use crate::budget::Budget;

/// An organizer's event. Owns exactly one budget; all ledger
/// mutations load the event, mutate the budget in memory, and save
/// the whole aggregate back.
#[derive(Debug, Clone)]
pub struct Event {
    /// Event id.
    pub id: EventId,
    /// Organizer user who owns the event.
    pub organizer: UserId,
    /// Calendar day the event takes place.
    pub date: NaiveDate,
    /// The event's ledger.
    pub budget: Budget,
}

/// A booking of a service for an event. Reservation callbacks carry
/// this id and the ledger resolves the event and service from it.
#[derive(Debug, Clone, Copy)]
pub struct Reservation {
    /// Reservation id.
    pub id: ReservationId,
    /// The event the booking was made for.
    pub event_id: EventId,
    /// The booked service.
    pub service_id: SolutionId,
}
