//! In-memory EventStore fake
//!
//! Substitutes for the Postgres-backed store in integration tests. Mirrors
//! the store's uniqueness guarantees so the services see the same contract.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use meetwhenah::database::EventStore;
use meetwhenah::models::{
    AvailabilityFact, BestSlotUpdate, CreateEventRequest, CreateUserRequest, Event, Membership,
    User,
};
use meetwhenah::scheduling::TimeSlot;
use meetwhenah::{MeetWhenAhError, Result};

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: Vec<User>,
    events: Vec<Event>,
    memberships: Vec<Membership>,
    callouts: Vec<(i64, i64)>,
    availability: Vec<AvailabilityFact>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of membership rows for an event, for assertions
    pub fn membership_count(&self, event_id: i64) -> usize {
        let inner = self.inner.lock().unwrap();
        inner
            .memberships
            .iter()
            .filter(|m| m.event_id == event_id)
            .count()
    }

    /// Number of pending callouts for an event, for assertions
    pub fn callout_count(&self, event_id: i64) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.callouts.iter().filter(|(e, _)| *e == event_id).count()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn find_user_by_tele_id(&self, tele_id: i64) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.tele_id == tele_id).cloned())
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.tele_id == request.tele_id) {
            return Err(MeetWhenAhError::InvalidInput(format!(
                "duplicate tele_id {}",
                request.tele_id
            )));
        }

        let user = User {
            id: inner.next_id(),
            tele_id: request.tele_id,
            tele_handle: request.tele_handle,
            display_name: request.display_name,
            initialised: request.initialised,
            callout_cleared: request.callout_cleared,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn set_onboarding_flags(
        &self,
        user_id: i64,
        initialised: bool,
        callout_cleared: bool,
    ) -> Result<User> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(MeetWhenAhError::UserNotFound { tele_id: user_id })?;
        user.initialised = initialised;
        user.callout_cleared = callout_cleared;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn find_event_by_code(&self, event_code: &str) -> Result<Option<Event>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .events
            .iter()
            .find(|e| e.event_code == event_code)
            .cloned())
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let mut inner = self.inner.lock().unwrap();
        let event = Event {
            id: inner.next_id(),
            event_code: request.event_code,
            name: request.name,
            details: request.details,
            creator_id: request.creator_id,
            start_date: request.start_date,
            end_date: request.end_date,
            display_text: None,
            best_date: None,
            best_start_time: None,
            best_end_time: None,
            best_participant_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        inner.events.push(event.clone());
        Ok(event)
    }

    async fn update_best_slot(&self, event_id: i64, best: &BestSlotUpdate) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(event) = inner.events.iter_mut().find(|e| e.id == event_id) {
            event.best_date = Some(best.date);
            event.best_start_time = Some(best.start_time);
            event.best_end_time = Some(best.end_time);
            event.best_participant_count = best.participant_count;
            event.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_display_text(&self, event_id: i64, text: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(event) = inner.events.iter_mut().find(|e| e.id == event_id) {
            event.display_text = Some(text.to_string());
            event.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn insert_membership(&self, event_id: i64, user_id: i64) -> Result<Membership> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .memberships
            .iter()
            .any(|m| m.event_id == event_id && m.user_id == user_id)
        {
            return Err(MeetWhenAhError::InvalidInput(format!(
                "duplicate membership ({event_id}, {user_id})"
            )));
        }

        let membership = Membership {
            id: inner.next_id(),
            event_id,
            user_id,
            joined_at: Utc::now(),
        };
        inner.memberships.push(membership.clone());
        Ok(membership)
    }

    async fn is_member(&self, event_id: i64, user_id: i64) -> Result<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .memberships
            .iter()
            .any(|m| m.event_id == event_id && m.user_id == user_id))
    }

    async fn list_members(&self, event_id: i64) -> Result<Vec<User>> {
        let inner = self.inner.lock().unwrap();
        let mut members = Vec::new();
        for membership in inner.memberships.iter().filter(|m| m.event_id == event_id) {
            if let Some(user) = inner.users.iter().find(|u| u.id == membership.user_id) {
                members.push(user.clone());
            }
        }
        Ok(members)
    }

    async fn add_callout(&self, event_id: i64, user_id: i64) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.callouts.contains(&(event_id, user_id)) {
            inner.callouts.push((event_id, user_id));
        }
        Ok(())
    }

    async fn remove_callout(&self, event_id: i64, user_id: i64) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.callouts.retain(|&pair| pair != (event_id, user_id));
        Ok(())
    }

    async fn list_callouts(&self, event_id: i64) -> Result<Vec<User>> {
        let inner = self.inner.lock().unwrap();
        let mut users = Vec::new();
        for &(_, user_id) in inner.callouts.iter().filter(|(e, _)| *e == event_id) {
            if let Some(user) = inner.users.iter().find(|u| u.id == user_id) {
                users.push(user.clone());
            }
        }
        Ok(users)
    }

    async fn replace_availability(
        &self,
        event_id: i64,
        user_id: i64,
        slots: &[TimeSlot],
    ) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .availability
            .retain(|f| !(f.event_id == event_id && f.user_id == user_id));

        for slot in slots {
            let already = inner.availability.iter().any(|f| {
                f.event_id == event_id
                    && f.user_id == user_id
                    && f.available_date == slot.date
                    && f.available_time == slot.time
            });
            if already {
                continue;
            }
            let fact = AvailabilityFact {
                id: inner.next_id(),
                event_id,
                user_id,
                available_date: slot.date,
                available_time: slot.time,
                created_at: Utc::now(),
            };
            inner.availability.push(fact);
        }
        Ok(())
    }

    async fn list_availability(&self, event_id: i64) -> Result<Vec<AvailabilityFact>> {
        let inner = self.inner.lock().unwrap();
        let mut facts: Vec<AvailabilityFact> = inner
            .availability
            .iter()
            .filter(|f| f.event_id == event_id)
            .cloned()
            .collect();
        facts.sort_by_key(|f| (f.available_date, f.available_time, f.id));
        Ok(facts)
    }
}
