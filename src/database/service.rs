//! Database service layer
//!
//! This service bundles the repositories and implements the persistence
//! collaborator interface consumed by the business services.

use async_trait::async_trait;

use crate::database::store::EventStore;
use crate::database::{AvailabilityRepository, DatabasePool, EventRepository, UserRepository};
use crate::models::{
    AvailabilityFact, BestSlotUpdate, CreateEventRequest, CreateUserRequest, Event, Membership,
    User,
};
use crate::scheduling::TimeSlot;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub availability: AvailabilityRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            availability: AvailabilityRepository::new(pool),
        }
    }
}

#[async_trait]
impl EventStore for DatabaseService {
    async fn find_user_by_tele_id(&self, tele_id: i64) -> Result<Option<User>> {
        self.users.find_by_tele_id(tele_id).await
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        self.users.create(request).await
    }

    async fn set_onboarding_flags(
        &self,
        user_id: i64,
        initialised: bool,
        callout_cleared: bool,
    ) -> Result<User> {
        self.users
            .set_onboarding_flags(user_id, initialised, callout_cleared)
            .await
    }

    async fn find_event_by_code(&self, event_code: &str) -> Result<Option<Event>> {
        self.events.find_by_code(event_code).await
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        self.events.create(request).await
    }

    async fn update_best_slot(&self, event_id: i64, best: &BestSlotUpdate) -> Result<()> {
        self.events.update_best_slot(event_id, best).await
    }

    async fn update_display_text(&self, event_id: i64, text: &str) -> Result<()> {
        self.events.update_display_text(event_id, text).await
    }

    async fn insert_membership(&self, event_id: i64, user_id: i64) -> Result<Membership> {
        self.events.insert_membership(event_id, user_id).await
    }

    async fn is_member(&self, event_id: i64, user_id: i64) -> Result<bool> {
        self.events.is_member(event_id, user_id).await
    }

    async fn list_members(&self, event_id: i64) -> Result<Vec<User>> {
        self.events.list_members(event_id).await
    }

    async fn add_callout(&self, event_id: i64, user_id: i64) -> Result<()> {
        self.events.add_callout(event_id, user_id).await
    }

    async fn remove_callout(&self, event_id: i64, user_id: i64) -> Result<()> {
        self.events.remove_callout(event_id, user_id).await
    }

    async fn list_callouts(&self, event_id: i64) -> Result<Vec<User>> {
        self.events.list_callouts(event_id).await
    }

    async fn replace_availability(
        &self,
        event_id: i64,
        user_id: i64,
        slots: &[TimeSlot],
    ) -> Result<()> {
        self.availability
            .replace_for_user(event_id, user_id, slots)
            .await
    }

    async fn list_availability(&self, event_id: i64) -> Result<Vec<AvailabilityFact>> {
        self.availability.list_for_event(event_id).await
    }
}
