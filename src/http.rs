use crate::booking_manager::BookingManager;
use crate::clock::Clock;
use crate::error::BookingError;
use crate::repository::Repository;
use crate::types::{Booking, Room, RoomId};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;
use validator::Validate;

/// Reported as `room_id` when no room is free for the requested period.
pub const NO_ROOM_AVAILABLE: RoomId = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DateRangeQuery {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct CreateBookingRequest {
    #[validate(range(min = 1))]
    customer_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AvailableRoomResponse {
    room_id: RoomId,
}

#[derive(Clone)]
pub struct AppState<R, B, C> {
    rooms: R,
    bookings: B,
    booking_manager: BookingManager<R, B, C>,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

pub fn create_app<R, B, C>(rooms: R, bookings: B, clock: C) -> Router
where
    R: Repository<Room>,
    B: Repository<Booking>,
    C: Clock,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let booking_manager = BookingManager::new(rooms.clone(), bookings.clone(), clock);
    let state = AppState {
        rooms,
        bookings,
        booking_manager,
    };

    Router::new()
        .route("/rooms", get(get_rooms::<R, B, C>))
        .route("/rooms/available", get(get_available_room::<R, B, C>))
        .route(
            "/bookings",
            get(get_bookings::<R, B, C>).post(create_booking::<R, B, C>),
        )
        .route("/bookings/occupied", get(get_fully_occupied_dates::<R, B, C>))
        .with_state(state)
        .layer(cors)
}

async fn get_rooms<R, B, C>(State(state): State<AppState<R, B, C>>) -> Json<Vec<Room>>
where
    R: Repository<Room>,
    B: Repository<Booking>,
    C: Clock,
{
    Json(state.rooms.get_all())
}

async fn get_bookings<R, B, C>(State(state): State<AppState<R, B, C>>) -> Json<Vec<Booking>>
where
    R: Repository<Room>,
    B: Repository<Booking>,
    C: Clock,
{
    Json(state.bookings.get_all())
}

async fn get_available_room<R, B, C>(
    State(state): State<AppState<R, B, C>>,
    Query(period): Query<DateRangeQuery>,
) -> Result<Json<AvailableRoomResponse>, BookingError>
where
    R: Repository<Room>,
    B: Repository<Booking>,
    C: Clock,
{
    let room_id = state
        .booking_manager
        .find_available_room(period.start_date, period.end_date)?
        .unwrap_or(NO_ROOM_AVAILABLE);
    Ok(Json(AvailableRoomResponse { room_id }))
}

async fn create_booking<R, B, C>(
    State(state): State<AppState<R, B, C>>,
    Json(request): Json<CreateBookingRequest>,
) -> Response
where
    R: Repository<Room>,
    B: Repository<Booking>,
    C: Clock,
{
    if let Err(err) = request.validate() {
        warn!(?err, "Invalid booking request");
        return (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response();
    }

    let booking = Booking::new(request.customer_id, request.start_date, request.end_date);
    match state.booking_manager.create_booking(booking) {
        Ok(Some(booking)) => (StatusCode::CREATED, Json(booking)).into_response(),
        Ok(None) => (
            StatusCode::CONFLICT,
            "No room is available for the requested period".to_string(),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

async fn get_fully_occupied_dates<R, B, C>(
    State(state): State<AppState<R, B, C>>,
    Query(period): Query<DateRangeQuery>,
) -> Result<Json<Vec<NaiveDate>>, BookingError>
where
    R: Repository<Room>,
    B: Repository<Booking>,
    C: Clock,
{
    let dates = state
        .booking_manager
        .fully_occupied_dates(period.start_date, period.end_date)?;
    Ok(Json(dates))
}
