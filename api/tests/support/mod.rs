//! Shared fixture for the API integration tests: an in-memory substitute for
//! the record store plus a token-issuing identity provider, assembled into
//! the real router so requests can be driven with `tower::ServiceExt`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use kernel::model::{
    auth::{AccessToken, TokenClaims},
    id::{ReservationId, RoomId, UserId},
    list::ListOptions,
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation, ReservationStatus,
    },
    role::Role,
    room::{
        event::{CreateRoom, UpdateRoom},
        Campus, ResourceTags, Room, RoomQuery,
    },
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use kernel::repository::{
    auth::AuthRepository, health::HealthCheckRepository, reservation::ReservationRepository,
    room::RoomRepository, user::UserRepository,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "secreto-de-pruebas";
pub const TEST_TOKEN_TTL: u64 = 1800;

// Keep credential hashing cheap in tests.
const BCRYPT_COST: u32 = 4;

#[derive(Default)]
struct StoreInner {
    users: HashMap<i64, StoredUser>,
    rooms: HashMap<i64, Room>,
    reservations: HashMap<i64, Reservation>,
    seq: i64,
}

struct StoredUser {
    user: User,
    password_hash: String,
}

impl StoreInner {
    fn next_id(&mut self) -> i64 {
        self.seq += 1;
        self.seq
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore(Arc<Mutex<StoreInner>>);

fn page<T>(items: Vec<T>, options: ListOptions) -> Vec<T> {
    items
        .into_iter()
        .skip(options.skip as usize)
        .take(options.limit as usize)
        .collect()
}

impl InMemoryStore {
    pub fn seed_user(&self, name: &str, email: &str, password: &str, role: Role) -> User {
        let password_hash = bcrypt::hash(password, BCRYPT_COST).unwrap();
        let mut inner = self.0.lock().unwrap();
        let id = inner.next_id();
        let user = User {
            id: UserId::new(id),
            name: name.into(),
            email: email.into(),
            role,
        };
        inner.users.insert(
            id,
            StoredUser {
                user: user.clone(),
                password_hash,
            },
        );
        user
    }

    pub fn seed_room(&self, name: &str, campus: Campus, capacity: i32, resources: &str) -> Room {
        let mut inner = self.0.lock().unwrap();
        let id = inner.next_id();
        let room = Room {
            id: RoomId::new(id),
            name: name.into(),
            campus,
            capacity,
            resources: ResourceTags::parse(resources).unwrap(),
        };
        inner.rooms.insert(id, room.clone());
        room
    }

    /// Inserts a reservation row directly, bypassing admission. Tests use
    /// this to plant records that violate the usual invariants.
    pub fn seed_reservation(
        &self,
        user_id: UserId,
        room_id: RoomId,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        status: ReservationStatus,
    ) -> Reservation {
        let mut inner = self.0.lock().unwrap();
        let id = inner.next_id();
        let reservation = Reservation {
            id: ReservationId::new(id),
            user_id,
            room_id,
            date,
            start_time,
            end_time,
            status,
        };
        inner.reservations.insert(id, reservation.clone());
        reservation
    }

    pub fn get_reservation(&self, reservation_id: ReservationId) -> Option<Reservation> {
        self.0
            .lock()
            .unwrap()
            .reservations
            .get(&reservation_id.raw())
            .cloned()
    }

    /// Simulates an out-of-band deletion that skipped the referential guard.
    pub fn remove_user_raw(&self, user_id: UserId) {
        self.0.lock().unwrap().users.remove(&user_id.raw());
    }

    pub fn remove_room_raw(&self, room_id: RoomId) {
        self.0.lock().unwrap().rooms.remove(&room_id.raw());
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let password_hash = bcrypt::hash(&event.password, BCRYPT_COST)?;
        let mut inner = self.0.lock().unwrap();
        if inner
            .users
            .values()
            .any(|stored| stored.user.email == event.email)
        {
            return Err(AppError::ConflictError("El email ya está registrado".into()));
        }
        let id = inner.next_id();
        let user = User {
            id: UserId::new(id),
            name: event.name,
            email: event.email,
            role: event.role,
        };
        inner.users.insert(
            id,
            StoredUser {
                user: user.clone(),
                password_hash,
            },
        );
        Ok(user)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>> {
        let inner = self.0.lock().unwrap();
        let mut users: Vec<User> = inner.users.values().map(|s| s.user.clone()).collect();
        users.sort_by_key(|user| user.id);
        Ok(page(users, options))
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let inner = self.0.lock().unwrap();
        Ok(inner.users.get(&user_id.raw()).map(|s| s.user.clone()))
    }

    async fn update(&self, event: UpdateUser) -> AppResult<User> {
        let password_hash = event
            .password
            .as_deref()
            .map(|password| bcrypt::hash(password, BCRYPT_COST))
            .transpose()?;

        let mut inner = self.0.lock().unwrap();
        if inner
            .users
            .values()
            .any(|stored| stored.user.email == event.email && stored.user.id != event.user_id)
        {
            return Err(AppError::ConflictError("El email ya está registrado".into()));
        }
        let stored = inner
            .users
            .get_mut(&event.user_id.raw())
            .ok_or_else(|| AppError::EntityNotFound("Usuario no encontrado".into()))?;
        stored.user.name = event.name;
        stored.user.email = event.email;
        stored.user.role = event.role;
        if let Some(password_hash) = password_hash {
            stored.password_hash = password_hash;
        }
        Ok(stored.user.clone())
    }

    async fn delete(&self, user_id: UserId) -> AppResult<()> {
        let mut inner = self.0.lock().unwrap();
        inner
            .users
            .remove(&user_id.raw())
            .map(|_| ())
            .ok_or_else(|| AppError::EntityNotFound("Usuario no encontrado".into()))
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let mut inner = self.0.lock().unwrap();
        let id = inner.next_id();
        let room = Room {
            id: RoomId::new(id),
            name: event.name,
            campus: event.campus,
            capacity: event.capacity,
            resources: event.resources,
        };
        inner.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn find_all(&self, query: RoomQuery) -> AppResult<Vec<Room>> {
        let inner = self.0.lock().unwrap();
        let mut rooms: Vec<Room> = inner
            .rooms
            .values()
            .filter(|room| query.campus.map_or(true, |campus| room.campus == campus))
            .filter(|room| {
                query
                    .resource
                    .map_or(true, |resource| room.resources.contains(resource))
            })
            .cloned()
            .collect();
        rooms.sort_by_key(|room| room.id);
        Ok(page(rooms, query.options))
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let inner = self.0.lock().unwrap();
        Ok(inner.rooms.get(&room_id.raw()).cloned())
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        let mut inner = self.0.lock().unwrap();
        let room = inner
            .rooms
            .get_mut(&event.room_id.raw())
            .ok_or_else(|| AppError::EntityNotFound("Sala no encontrada".into()))?;
        room.name = event.name;
        room.campus = event.campus;
        room.capacity = event.capacity;
        room.resources = event.resources;
        Ok(room.clone())
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<()> {
        let mut inner = self.0.lock().unwrap();
        inner
            .rooms
            .remove(&room_id.raw())
            .map(|_| ())
            .ok_or_else(|| AppError::EntityNotFound("Sala no encontrada".into()))
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let mut inner = self.0.lock().unwrap();
        let id = inner.next_id();
        let reservation = Reservation {
            id: ReservationId::new(id),
            user_id: event.user_id,
            room_id: event.room_id,
            date: event.slot.date,
            start_time: event.slot.start_time,
            end_time: event.slot.end_time,
            status: ReservationStatus::Pendiente,
        };
        inner.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Reservation>> {
        let inner = self.0.lock().unwrap();
        let mut reservations: Vec<Reservation> = inner.reservations.values().cloned().collect();
        reservations.sort_by_key(|reservation| reservation.id);
        Ok(page(reservations, options))
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let inner = self.0.lock().unwrap();
        Ok(inner.reservations.get(&reservation_id.raw()).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: UserId,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>> {
        let inner = self.0.lock().unwrap();
        let mut reservations: Vec<Reservation> = inner
            .reservations
            .values()
            .filter(|reservation| reservation.user_id == user_id)
            .cloned()
            .collect();
        reservations.sort_by_key(|reservation| reservation.id);
        Ok(page(reservations, options))
    }

    async fn find_by_room_id(
        &self,
        room_id: RoomId,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>> {
        let inner = self.0.lock().unwrap();
        let mut reservations: Vec<Reservation> = inner
            .reservations
            .values()
            .filter(|reservation| reservation.room_id == room_id)
            .cloned()
            .collect();
        reservations.sort_by_key(|reservation| reservation.id);
        Ok(page(reservations, options))
    }

    async fn find_by_date(
        &self,
        date: NaiveDate,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>> {
        let inner = self.0.lock().unwrap();
        let mut reservations: Vec<Reservation> = inner
            .reservations
            .values()
            .filter(|reservation| reservation.date == date)
            .cloned()
            .collect();
        reservations.sort_by_key(|reservation| reservation.id);
        Ok(page(reservations, options))
    }

    async fn update(&self, event: UpdateReservation) -> AppResult<Reservation> {
        let mut inner = self.0.lock().unwrap();
        let reservation = inner
            .reservations
            .get_mut(&event.reservation_id.raw())
            .ok_or_else(|| AppError::EntityNotFound("Reserva no encontrada".into()))?;
        reservation.user_id = event.user_id;
        reservation.room_id = event.room_id;
        reservation.date = event.slot.date;
        reservation.start_time = event.slot.start_time;
        reservation.end_time = event.slot.end_time;
        reservation.status = event.status;
        Ok(reservation.clone())
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()> {
        let mut inner = self.0.lock().unwrap();
        inner
            .reservations
            .remove(&reservation_id.raw())
            .map(|_| ())
            .ok_or_else(|| AppError::EntityNotFound("Reserva no encontrada".into()))
    }
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

pub struct InMemoryAuthRepository {
    store: InMemoryStore,
}

#[async_trait]
impl AuthRepository for InMemoryAuthRepository {
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User> {
        let inner = self.store.0.lock().unwrap();
        let stored = inner
            .users
            .values()
            .find(|stored| stored.user.email == email)
            .ok_or_else(|| {
                AppError::UnauthenticatedError("Email o contraseña incorrectos".into())
            })?;
        if !bcrypt::verify(password, &stored.password_hash)? {
            return Err(AppError::UnauthenticatedError(
                "Email o contraseña incorrectos".into(),
            ));
        }
        Ok(stored.user.clone())
    }

    fn issue_token(&self, user: &User) -> AppResult<AccessToken> {
        Ok(AccessToken(token_for(user)))
    }

    fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        jsonwebtoken::decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::UnauthenticatedError("Token inválido".into()))
    }

    fn token_ttl(&self) -> u64 {
        TEST_TOKEN_TTL
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: InMemoryStore,
}

pub fn create_test_app() -> TestApp {
    let store = InMemoryStore::default();
    let registry = AppRegistry::from_parts(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(InMemoryAuthRepository {
            store: store.clone(),
        }),
    );
    let router = Router::new()
        .merge(api::route::health::build_health_check_routers())
        .merge(api::route::v1::routes())
        .with_state(registry);
    TestApp { router, store }
}

pub fn token_for(user: &User) -> String {
    let iat = Utc::now().timestamp() as u64;
    let claims = TokenClaims {
        sub: user.email.clone(),
        user_id: user.id,
        role: user.role,
        iat,
        exp: iat + TEST_TOKEN_TTL,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn detail(body: &serde_json::Value) -> &str {
    body["detail"].as_str().unwrap_or_default()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
