// ── Domain model ──

mod reservation;

pub use reservation::{Area, Customer, Reservation, Shift, Status};
