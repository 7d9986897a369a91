//! Domain core: the application record, its validation pipeline, and the
//! ports connecting it to adapters.
//!
//! Everything in this module is transport agnostic. Inbound adapters map
//! [`Error`] values into protocol envelopes; outbound adapters implement the
//! driven traits declared in [`ports`].

pub mod application;
pub mod application_service;
pub mod error;
pub mod export;
pub mod fields;
pub mod ports;
pub mod receipt;
pub mod semantic;


pub use self::application::{
    Application, ApplicationFields, ApplicationId, ApplicationIdError, validate_application,
    validate_application_update,
};
pub use self::application_service::{
    APPLICATION_DELETED_MESSAGE, APPLICATION_NOT_FOUND_MESSAGE, ApplicationService,
};
pub use self::error::{Error, ErrorCode};
pub use self::fields::{Field, FieldErrors};
pub use self::receipt::{Receipt, ReceiptIssuer};
pub use self::semantic::SEMANTIC_UNAVAILABLE_MESSAGE;
