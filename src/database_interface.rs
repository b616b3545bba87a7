use crate::repository::Repository;
use crate::schema::{bookings, rooms};
use crate::types::{Booking, Room, RoomId};
use chrono::NaiveDate;
use diesel::{
    Connection, ConnectionError, Insertable, PgConnection, QueryDsl, RunQueryDsl, SelectableHelper,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::error;

#[derive(Insertable)]
#[diesel(table_name = rooms)]
pub struct NewRoom {
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub room_id: RoomId,
    pub customer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl From<Room> for NewRoom {
    fn from(room: Room) -> Self {
        Self {
            description: room.description,
        }
    }
}

impl From<Booking> for NewBooking {
    fn from(booking: Booking) -> Self {
        Self {
            room_id: booking.room_id,
            customer_id: booking.customer_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            is_active: booking.is_active,
        }
    }
}

#[derive(Clone)]
pub struct DatabaseInterface {
    connection: Arc<Mutex<PgConnection>>,
}

impl DatabaseInterface {
    pub fn new(database_url: &str) -> Result<Self, ConnectionError> {
        let connection = Self::establish_connection(database_url)?;
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    fn establish_connection(database_url: &str) -> Result<PgConnection, ConnectionError> {
        PgConnection::establish(database_url)
    }

    fn connection(&self) -> MutexGuard<'_, PgConnection> {
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn remove_all(&self) {
        let mut connection = self.connection();
        let result = diesel::delete(bookings::table)
            .execute(&mut *connection)
            .and_then(|_| diesel::delete(rooms::table).execute(&mut *connection));

        if let Err(err) = result {
            error!(?err, "Failed to clear database");
        }
    }
}

// Rows are read ordered by id so callers see a stable provider order.
impl Repository<Room> for DatabaseInterface {
    fn get_all(&self) -> Vec<Room> {
        let mut connection = self.connection();
        let result = rooms::table
            .order(rooms::id)
            .select(Room::as_select())
            .load(&mut *connection);

        match result {
            Ok(result) => result,
            Err(err) => {
                error!(?err, "Failed to read rooms from database");
                vec![]
            }
        }
    }

    fn add(&self, room: Room) {
        let mut connection = self.connection();
        let result = diesel::insert_into(rooms::table)
            .values(NewRoom::from(room))
            .execute(&mut *connection);

        if let Err(err) = result {
            error!(?err, "Room can't be added");
        }
    }
}

impl Repository<Booking> for DatabaseInterface {
    fn get_all(&self) -> Vec<Booking> {
        let mut connection = self.connection();
        let result = bookings::table
            .order(bookings::id)
            .select(Booking::as_select())
            .load(&mut *connection);

        match result {
            Ok(result) => result,
            Err(err) => {
                error!(?err, "Failed to read bookings from database");
                vec![]
            }
        }
    }

    fn add(&self, booking: Booking) {
        let mut connection = self.connection();
        let result = diesel::insert_into(bookings::table)
            .values(NewBooking::from(booking))
            .execute(&mut *connection);

        if let Err(err) = result {
            error!(?err, "Booking can't be added");
        }
    }
}
