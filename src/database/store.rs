//! Persistence collaborator interface
//!
//! The services consume this trait rather than the concrete repositories so
//! tests can substitute an in-memory fake. All operations are
//! request/response and may fail with a store error.

use async_trait::async_trait;

use crate::models::{
    AvailabilityFact, BestSlotUpdate, CreateEventRequest, CreateUserRequest, Event, Membership,
    User,
};
use crate::scheduling::TimeSlot;
use crate::utils::errors::Result;

#[async_trait]
pub trait EventStore: Send + Sync {
    // users
    async fn find_user_by_tele_id(&self, tele_id: i64) -> Result<Option<User>>;
    async fn create_user(&self, request: CreateUserRequest) -> Result<User>;
    async fn set_onboarding_flags(
        &self,
        user_id: i64,
        initialised: bool,
        callout_cleared: bool,
    ) -> Result<User>;

    // events
    async fn find_event_by_code(&self, event_code: &str) -> Result<Option<Event>>;
    async fn create_event(&self, request: CreateEventRequest) -> Result<Event>;
    async fn update_best_slot(&self, event_id: i64, best: &BestSlotUpdate) -> Result<()>;
    async fn update_display_text(&self, event_id: i64, text: &str) -> Result<()>;

    // memberships
    async fn insert_membership(&self, event_id: i64, user_id: i64) -> Result<Membership>;
    async fn is_member(&self, event_id: i64, user_id: i64) -> Result<bool>;
    async fn list_members(&self, event_id: i64) -> Result<Vec<User>>;

    // pending callouts
    async fn add_callout(&self, event_id: i64, user_id: i64) -> Result<()>;
    async fn remove_callout(&self, event_id: i64, user_id: i64) -> Result<()>;
    async fn list_callouts(&self, event_id: i64) -> Result<Vec<User>>;

    // availability
    async fn replace_availability(
        &self,
        event_id: i64,
        user_id: i64,
        slots: &[TimeSlot],
    ) -> Result<()>;
    async fn list_availability(&self, event_id: i64) -> Result<Vec<AvailabilityFact>>;
}
