//! # Clinica Core
//!
//! Core business logic for the clinica appointment manager.
//!
//! This crate contains pure data operations over the flat JSON tables:
//! - Patient and doctor registration, update, and lookup
//! - The appointment scheduling validator (weekday, office hours, conflicts)
//! - Appointment status transitions (cancel, complete)
//! - Identifier normalisation for loosely-typed client identifiers
//!
//! **No API concerns**: HTTP routing, request decoding, and status-code
//! mapping belong in `api-rest`.

pub mod appointments;
pub mod config;
pub mod doctors;
pub mod error;
pub mod ident;
pub mod models;
pub mod patients;

pub use appointments::{AppointmentDraft, AppointmentService};
pub use config::CoreConfig;
pub use doctors::{DoctorDraft, DoctorService, DoctorStats};
pub use error::{ClinicError, ClinicResult};
pub use ident::{normalise, EntityKind, RawId};
pub use models::{Appointment, AppointmentStatus, Doctor, Patient};
pub use patients::{PatientDraft, PatientService};
