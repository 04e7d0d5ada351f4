pub mod event;
pub mod guest;
pub mod party;
pub mod payment;
pub mod purchase;
pub mod ticket;

pub use event::{Event, EventAvailability, UpstreamEvent, DEFAULT_EVENT_IMAGE};
pub use guest::GuestVerificationRequest;
pub use party::{Party, PartyReport, PartyStatus, PartySummary};
pub use payment::{
    CreatePaymentRequest, Payer, PaymentPreference, PaymentPreferenceRequest, UpstreamPreference,
};
pub use purchase::{GuestRegistration, PurchaseRequest};
pub use ticket::{Ticket, TicketLookupRequest, TicketLookupResponse, TicketStatus};
