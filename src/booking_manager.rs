use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    clock::Clock,
    error::{BookingError, INVALID_BOOKING_PERIOD, INVALID_OCCUPANCY_PERIOD},
    repository::Repository,
    types::{Booking, Room, RoomId},
};

/// Decides room availability and occupancy on top of a room and a booking
/// repository. Every operation reads each repository at most once and works
/// on that snapshot.
#[derive(Clone)]
pub struct BookingManager<R, B, C> {
    rooms: R,
    bookings: B,
    clock: C,
}

impl<R, B, C> BookingManager<R, B, C>
where
    R: Repository<Room>,
    B: Repository<Booking>,
    C: Clock,
{
    pub fn new(rooms: R, bookings: B, clock: C) -> Self {
        Self {
            rooms,
            bookings,
            clock,
        }
    }

    /// Returns the first room, in repository order, without an active booking
    /// overlapping `[start_date, end_date]`. `None` if every room is taken.
    pub fn find_available_room(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<RoomId>, BookingError> {
        if start_date < self.clock.today() || start_date > end_date {
            warn!(%start_date, %end_date, "Rejected booking period");
            return Err(BookingError::InvalidDateRange(INVALID_BOOKING_PERIOD));
        }

        let rooms = self.rooms.get_all();
        let bookings = self.bookings.get_all();

        let unavailable: HashSet<RoomId> = bookings
            .iter()
            .filter(|booking| booking.is_active && booking.overlaps(start_date, end_date))
            .map(|booking| booking.room_id)
            .collect();

        let room_id = rooms
            .iter()
            .map(|room| room.id)
            .find(|room_id| !unavailable.contains(room_id));

        debug!(%start_date, %end_date, ?room_id, "Availability checked");
        Ok(room_id)
    }

    /// Assigns the booking to an available room and stores it. Returns the
    /// stored booking, or `None` without touching the repository if no room
    /// is free for the requested period.
    pub fn create_booking(&self, mut booking: Booking) -> Result<Option<Booking>, BookingError> {
        let Some(room_id) = self.find_available_room(booking.start_date, booking.end_date)? else {
            info!(
                start_date = %booking.start_date,
                end_date = %booking.end_date,
                "No room available, booking not created"
            );
            return Ok(None);
        };

        booking.room_id = room_id;
        booking.is_active = true;
        self.bookings.add(booking.clone());

        info!(
            room_id,
            start_date = %booking.start_date,
            end_date = %booking.end_date,
            "Booking created"
        );
        Ok(Some(booking))
    }

    /// Dates within `[start_date, end_date]`, ascending, on which every room
    /// is covered by an active booking.
    pub fn fully_occupied_dates(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<NaiveDate>, BookingError> {
        if start_date > end_date {
            warn!(%start_date, %end_date, "Rejected occupancy period");
            return Err(BookingError::InvalidDateRange(INVALID_OCCUPANCY_PERIOD));
        }

        let room_ids: HashSet<RoomId> = self.rooms.get_all().iter().map(|room| room.id).collect();
        let active_bookings: Vec<Booking> = self
            .bookings
            .get_all()
            .into_iter()
            .filter(|booking| booking.is_active && room_ids.contains(&booking.room_id))
            .collect();

        if room_ids.is_empty() {
            return Ok(vec![]);
        }

        let occupied_dates: Vec<NaiveDate> = start_date
            .iter_days()
            .take_while(|date| *date <= end_date)
            .filter(|date| {
                let occupied_rooms: HashSet<RoomId> = active_bookings
                    .iter()
                    .filter(|booking| booking.occupies(*date))
                    .map(|booking| booking.room_id)
                    .collect();
                occupied_rooms.len() == room_ids.len()
            })
            .collect();

        debug!(%start_date, %end_date, count = occupied_dates.len(), "Occupancy computed");
        Ok(occupied_dates)
    }
}
