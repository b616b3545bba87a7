use thiserror::Error;

pub const INVALID_BOOKING_PERIOD: &str =
    "The start date cannot be in the past or later than the end date.";
pub const INVALID_OCCUPANCY_PERIOD: &str = "The start date cannot be later than the end date.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("{0}")]
    InvalidDateRange(&'static str),
}
