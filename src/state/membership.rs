//! Event-membership state machine
//!
//! Governs how a user goes from unknown, to onboarded, to an active
//! participant of a specific event. The state is computed by one pure
//! function from the user row's two onboarding flags, and the transition
//! table maps (state, already-member) onto the single action the join
//! handler executes.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Membership state of an external identity relative to the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipState {
    /// No user record exists for this external identity
    Unlinked,
    /// User exists but has never completed the /start flow
    PendingOnboarding,
    /// User completed /start after being auto-created by a join attempt;
    /// a callout is still pending on some event
    NeedsCalloutClear,
    /// Fully onboarded; eligible for membership and availability prompts
    Active,
}

impl MembershipState {
    /// Derive the state from the user row (or its absence).
    ///
    /// The flags are monotone toward `true` during normal flow, so the
    /// mapping is total: `initialised` gates PendingOnboarding,
    /// `callout_cleared` gates NeedsCalloutClear.
    pub fn derive(user: Option<&User>) -> Self {
        match user {
            None => MembershipState::Unlinked,
            Some(user) if !user.initialised => MembershipState::PendingOnboarding,
            Some(user) if !user.callout_cleared => MembershipState::NeedsCalloutClear,
            Some(_) => MembershipState::Active,
        }
    }
}

/// The action a join request triggers for a given (state, membership) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinAction {
    /// Create the user with both flags false, record a pending callout,
    /// re-render the display text; no membership yet
    CreateUserWithCallout,
    /// User must finish onboarding externally; re-emit the current display
    /// text unchanged
    AwaitOnboarding,
    /// Remove the pending callout, create the membership, set
    /// `callout_cleared`, recompute the display text
    ClearCalloutAndJoin,
    /// Create the membership, recompute, and prompt the user for
    /// availability
    JoinAndPrompt,
    /// Idempotent no-op; return silently without recomputation
    AlreadyMember,
}

/// The transition table for a join request
pub fn plan_join(state: MembershipState, already_member: bool) -> JoinAction {
    match (state, already_member) {
        (MembershipState::Unlinked, _) => JoinAction::CreateUserWithCallout,
        (MembershipState::PendingOnboarding, _) => JoinAction::AwaitOnboarding,
        (MembershipState::NeedsCalloutClear, _) => JoinAction::ClearCalloutAndJoin,
        (MembershipState::Active, false) => JoinAction::JoinAndPrompt,
        (MembershipState::Active, true) => JoinAction::AlreadyMember,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(initialised: bool, callout_cleared: bool) -> User {
        User {
            id: 1,
            tele_id: 42,
            tele_handle: Some("alice".to_string()),
            display_name: None,
            initialised,
            callout_cleared,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_state_derivation() {
        assert_eq!(MembershipState::derive(None), MembershipState::Unlinked);
        assert_eq!(
            MembershipState::derive(Some(&user(false, false))),
            MembershipState::PendingOnboarding
        );
        assert_eq!(
            MembershipState::derive(Some(&user(false, true))),
            MembershipState::PendingOnboarding
        );
        assert_eq!(
            MembershipState::derive(Some(&user(true, false))),
            MembershipState::NeedsCalloutClear
        );
        assert_eq!(
            MembershipState::derive(Some(&user(true, true))),
            MembershipState::Active
        );
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(
            plan_join(MembershipState::Unlinked, false),
            JoinAction::CreateUserWithCallout
        );
        assert_eq!(
            plan_join(MembershipState::PendingOnboarding, false),
            JoinAction::AwaitOnboarding
        );
        assert_eq!(
            plan_join(MembershipState::PendingOnboarding, true),
            JoinAction::AwaitOnboarding
        );
        assert_eq!(
            plan_join(MembershipState::NeedsCalloutClear, false),
            JoinAction::ClearCalloutAndJoin
        );
        assert_eq!(
            plan_join(MembershipState::Active, false),
            JoinAction::JoinAndPrompt
        );
        assert_eq!(
            plan_join(MembershipState::Active, true),
            JoinAction::AlreadyMember
        );
    }
}
