use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use chrono::NaiveDate;

use crate::{
    clock::Clock,
    repository::Repository,
    types::{Booking, Room, RoomId},
};

pub struct MockRepositoryInner<T> {
    pub calls_to_get_all: AtomicU64,
    pub calls_to_add: AtomicU64,
    pub entities: Mutex<Vec<T>>,
}

pub struct MockRepository<T>(pub Arc<MockRepositoryInner<T>>);

impl<T> Clone for MockRepository<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> MockRepository<T> {
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self(Arc::new(MockRepositoryInner {
            calls_to_get_all: AtomicU64::default(),
            calls_to_add: AtomicU64::default(),
            entities: Mutex::new(entities),
        }))
    }

    pub fn calls_to_get_all(&self) -> u64 {
        self.0.calls_to_get_all.load(Ordering::SeqCst)
    }

    pub fn calls_to_add(&self) -> u64 {
        self.0.calls_to_add.load(Ordering::SeqCst)
    }
}

impl<T> Repository<T> for MockRepository<T>
where
    T: Clone + Send + 'static,
{
    fn get_all(&self) -> Vec<T> {
        self.0.calls_to_get_all.fetch_add(1, Ordering::SeqCst);
        self.0.entities.lock().unwrap().clone()
    }

    fn add(&self, entity: T) {
        self.0.calls_to_add.fetch_add(1, Ordering::SeqCst);
        self.0.entities.lock().unwrap().push(entity);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn room(id: RoomId) -> Room {
    Room {
        id,
        description: format!("Room {id}"),
    }
}

pub fn booking(
    id: i32,
    room_id: RoomId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_active: bool,
) -> Booking {
    Booking {
        id,
        room_id,
        customer_id: 1,
        start_date,
        end_date,
        is_active,
    }
}
