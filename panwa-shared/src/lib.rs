pub mod models;
pub mod pii;

pub use models::{
    NewReservation, NewVerification, Reservation, ReservationKind, Session, Store, User,
    VerificationRecord,
};
pub use pii::Masked;
