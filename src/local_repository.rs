use crate::{
    repository::Repository,
    types::{Booking, Room},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Records whose identifier is assigned by the repository on insertion.
pub trait Identifiable {
    fn id(&self) -> i32;
    fn assign_id(&mut self, id: i32);
}

impl Identifiable for Room {
    fn id(&self) -> i32 {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Identifiable for Booking {
    fn id(&self) -> i32 {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// Impersistent repository keeping records in insertion order.
#[derive(Debug)]
pub struct LocalRepository<T> {
    entities: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for LocalRepository<T> {
    fn default() -> Self {
        Self {
            entities: Arc::default(),
        }
    }
}

impl<T> Clone for LocalRepository<T> {
    fn clone(&self) -> Self {
        Self {
            entities: self.entities.clone(),
        }
    }
}

impl<T> LocalRepository<T> {
    fn entities(&self) -> MutexGuard<'_, Vec<T>> {
        self.entities.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocalRepository<Room> {
    pub fn with_example_rooms(number_of_rooms: u32) -> Self {
        let rooms = Self::default();
        for number in 1..=number_of_rooms {
            rooms.add(Room::new(format!("Room {number}")));
        }
        rooms
    }
}

impl<T> Repository<T> for LocalRepository<T>
where
    T: Identifiable + Clone + Send + 'static,
{
    fn get_all(&self) -> Vec<T> {
        self.entities().clone()
    }

    fn add(&self, mut entity: T) {
        let mut entities = self.entities();
        let id = entities.iter().map(Identifiable::id).max().unwrap_or(0) + 1;
        entity.assign_id(id);
        entities.push(entity);
        debug!(id, "Record added");
    }
}
