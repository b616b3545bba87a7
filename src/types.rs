use chrono::NaiveDate;
use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};

pub type RoomId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = crate::schema::rooms)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct Booking {
    pub id: i32,
    pub room_id: RoomId,
    pub customer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl Room {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
        }
    }
}

impl Booking {
    /// Candidate booking without room assignment. The room and the active flag
    /// are set by the booking manager, the id by the repository.
    pub fn new(customer_id: i32, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: 0,
            room_id: 0,
            customer_id,
            start_date,
            end_date,
            is_active: false,
        }
    }

    /// Both ranges are inclusive, so touching boundaries count as overlap.
    pub fn overlaps(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        self.start_date <= end_date && start_date <= self.end_date
    }

    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
