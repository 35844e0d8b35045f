//! Screen implementations. The viewer has a single screen: the table.

pub mod reservations;
