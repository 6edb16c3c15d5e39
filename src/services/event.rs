//! Event service implementation
//!
//! Owns event creation, the join flow of the membership state machine, and
//! recomputation of an event's derived scheduling data (cached best slot and
//! display text).

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::Settings;
use crate::database::store::EventStore;
use crate::models::event::{BestSlotUpdate, CreateEventRequest, Event};
use crate::models::user::CreateUserRequest;
use crate::scheduling::{aggregate_slots, merge_contiguous, rank_slots, render_display_text};
use crate::scheduling::{AvailabilitySlot, ContiguousBlock};
use crate::state::{plan_join, JoinAction, MembershipState};
use crate::utils::errors::{MeetWhenAhError, Result};
use crate::utils::helpers::generate_event_code;
use crate::utils::logging::{log_event_action, log_recompute};

/// What a join request produced: the text to show (None for the idempotent
/// no-op) and whether to prompt the user for availability now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub display_text: Option<String>,
    pub prompt_availability: bool,
}

impl JoinOutcome {
    fn silent() -> Self {
        Self {
            display_text: None,
            prompt_availability: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventService<S> {
    store: S,
    settings: Settings,
}

impl<S: EventStore> EventService<S> {
    pub fn new(store: S, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// Create a new event with a freshly generated shareable code
    pub async fn create_event(
        &self,
        name: String,
        details: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        creator_tele_id: Option<i64>,
    ) -> Result<Event> {
        if name.trim().is_empty() {
            return Err(MeetWhenAhError::InvalidInput(
                "Event name must not be empty".to_string(),
            ));
        }
        if start_date > end_date {
            return Err(MeetWhenAhError::InvalidInput(format!(
                "Event start date {start_date} is after end date {end_date}"
            )));
        }

        let creator_id = match creator_tele_id {
            Some(tele_id) => self
                .store
                .find_user_by_tele_id(tele_id)
                .await?
                .map(|user| user.id),
            None => None,
        };

        let event = self
            .store
            .create_event(CreateEventRequest {
                event_code: generate_event_code(),
                name,
                details,
                creator_id,
                start_date,
                end_date,
            })
            .await?;

        let text = self.render_and_store(&event).await?;
        info!(event_code = %event.event_code, "Event created");

        let mut event = event;
        event.display_text = Some(text);
        Ok(event)
    }

    /// Look up an event by its shareable code
    pub async fn get_by_code(&self, event_code: &str) -> Result<Event> {
        self.store
            .find_event_by_code(event_code)
            .await?
            .ok_or_else(|| MeetWhenAhError::EventNotFound {
                event_code: event_code.to_string(),
            })
    }

    /// Process a join request for an event.
    ///
    /// Derives the user's membership state, executes the planned transition,
    /// and returns the text to hand back to the transport layer.
    pub async fn handle_join(
        &self,
        tele_id: i64,
        tele_handle: Option<String>,
        event_code: &str,
    ) -> Result<JoinOutcome> {
        let event = self.get_by_code(event_code).await?;

        let user = self.store.find_user_by_tele_id(tele_id).await?;
        let already_member = match &user {
            Some(user) => self.store.is_member(event.id, user.id).await?,
            None => false,
        };

        let state = MembershipState::derive(user.as_ref());
        let action = plan_join(state, already_member);
        debug!(
            tele_id = tele_id,
            event_code = %event.event_code,
            state = ?state,
            action = ?action,
            "Join request"
        );

        match action {
            JoinAction::CreateUserWithCallout => {
                let created = self
                    .store
                    .create_user(CreateUserRequest::from_join_attempt(tele_id, tele_handle))
                    .await?;
                self.store.add_callout(event.id, created.id).await?;

                let text = self.render_and_store(&event).await?;
                log_event_action(&event.event_code, "join_callout", tele_id, None);
                Ok(JoinOutcome {
                    display_text: Some(text),
                    prompt_availability: false,
                })
            }
            JoinAction::AwaitOnboarding => {
                let text = match event.display_text.clone() {
                    Some(text) => text,
                    None => self.render_and_store(&event).await?,
                };
                Ok(JoinOutcome {
                    display_text: Some(text),
                    prompt_availability: false,
                })
            }
            JoinAction::ClearCalloutAndJoin => {
                let user = user.ok_or(MeetWhenAhError::UserNotFound { tele_id })?;
                self.store.remove_callout(event.id, user.id).await?;
                self.store.insert_membership(event.id, user.id).await?;
                self.store.set_onboarding_flags(user.id, true, true).await?;

                let text = self.recompute(&event).await?;
                log_event_action(&event.event_code, "join_after_callout", tele_id, None);
                Ok(JoinOutcome {
                    display_text: Some(text),
                    prompt_availability: false,
                })
            }
            JoinAction::JoinAndPrompt => {
                let user = user.ok_or(MeetWhenAhError::UserNotFound { tele_id })?;
                self.store.insert_membership(event.id, user.id).await?;

                let text = self.recompute(&event).await?;
                log_event_action(&event.event_code, "join", tele_id, None);
                Ok(JoinOutcome {
                    display_text: Some(text),
                    prompt_availability: true,
                })
            }
            JoinAction::AlreadyMember => Ok(JoinOutcome::silent()),
        }
    }

    /// Recompute the derived scheduling data for an event.
    ///
    /// Aggregates the current availability facts, caches the top-ranked slot
    /// (the best window is a single slot, so end time mirrors start time),
    /// and persists the re-rendered display text.
    pub async fn recompute(&self, event: &Event) -> Result<String> {
        let facts = self.store.list_availability(event.id).await?;
        let slots = aggregate_slots(&facts);

        let mut updated = event.clone();
        let best = rank_slots(&slots, 1).into_iter().next();
        if let Some(ref best) = best {
            let update = BestSlotUpdate {
                date: best.date,
                start_time: best.time,
                end_time: best.time,
                participant_count: best.participant_count() as i32,
            };
            self.store.update_best_slot(event.id, &update).await?;

            updated.best_date = Some(update.date);
            updated.best_start_time = Some(update.start_time);
            updated.best_end_time = Some(update.end_time);
            updated.best_participant_count = update.participant_count;
        }

        log_recompute(&event.event_code, slots.len(), best.is_some());
        self.render_and_store(&updated).await
    }

    /// The top-N candidate slots for an event, N from configuration
    pub async fn best_times(&self, event: &Event) -> Result<Vec<AvailabilitySlot>> {
        let facts = self.store.list_availability(event.id).await?;
        let slots = aggregate_slots(&facts);
        Ok(rank_slots(&slots, self.settings.scheduling.best_slot_limit))
    }

    /// Contiguous meeting windows meeting the configured minimum duration
    pub async fn meeting_windows(&self, event: &Event) -> Result<Vec<ContiguousBlock>> {
        let facts = self.store.list_availability(event.id).await?;
        let slots = aggregate_slots(&facts);
        Ok(merge_contiguous(
            &slots,
            self.settings.scheduling.min_block_minutes,
        ))
    }

    /// Render the display text from current state and persist it
    async fn render_and_store(&self, event: &Event) -> Result<String> {
        let members = self.store.list_members(event.id).await?;
        let callouts = self.store.list_callouts(event.id).await?;

        let text = render_display_text(event, &members, &callouts);
        self.store.update_display_text(event.id, &text).await?;
        Ok(text)
    }
}
