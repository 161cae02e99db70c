//! Integration Tests for the session layer
//!
//! These tests drive a `Session` the way a presentation layer would and
//! check the resulting state after each intent.

use proptest::prelude::*;
use rust_decimal_macros::dec;

use app_session::{
    reduce, AddFriendDraft, AppState, Dispatch, Intent, Session, SessionConfig, SessionError,
    SessionEventKind, SplitBillDraft,
};
use core_kernel::Amount;
use domain_ledger::{LedgerError, Payer, Selection, ValidationError};
use test_utils::{
    assert_balance, assert_only_balance_changed, assert_rosters_equal, bill_split_strategy,
    positive_amount_strategy, roster_strategy, AmountFixtures, FriendFixtures, RosterBuilder,
    SequentialIdGenerator,
};

fn seeded_session() -> Session<SequentialIdGenerator> {
    Session::with_id_generator(&SessionConfig::default(), SequentialIdGenerator::new())
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    /// Sarah(20); user pays 100 and their own part is 30 -> Sarah owes 70 more
    #[test]
    fn test_user_pays_bill_with_sarah() {
        let mut session = seeded_session();
        let sarah = FriendFixtures::sarah_id();
        let before = session.state().roster.clone();

        session.dispatch(Intent::select(sarah)).unwrap();
        assert_eq!(session.state().selection, Selection::Selected(sarah));

        let outcome = session
            .dispatch(Intent::split_bill(
                AmountFixtures::bill_100(),
                AmountFixtures::paid_30(),
                Payer::User,
            ))
            .unwrap();

        assert_eq!(outcome, Dispatch::Applied { events: 2 });
        assert_only_balance_changed(&before, &session.state().roster, &sarah, Amount::from(70));
        assert_balance(&session.state().roster, &sarah, 90);
        assert!(session.state().selection.is_none());
    }

    /// Clark(-7); Clark pays 50 and the user's part is 20 -> user owes 20 more
    #[test]
    fn test_clark_pays_bill() {
        let mut session = seeded_session();
        let clark = FriendFixtures::clark_id();

        session.dispatch(Intent::select(clark)).unwrap();
        session
            .dispatch(Intent::split_bill(50, 20, Payer::Friend))
            .unwrap();

        assert_balance(&session.state().roster, &clark, -27);
        let summary = session.state().roster.get(&clark).unwrap().balance_summary();
        assert_eq!(summary, "You owe Clark 27€");
    }

    #[test]
    fn test_add_friend_with_empty_name_keeps_form_open() {
        let mut session = seeded_session();
        session.dispatch(Intent::OpenAddFriendForm).unwrap();
        let before = session.state().clone();

        let outcome = session.dispatch(Intent::add_friend("", "x")).unwrap();

        assert_eq!(outcome, Dispatch::Ignored(ValidationError::EmptyName));
        assert_eq!(session.state(), &before);
        assert!(session.state().is_add_friend_form_visible());
    }

    #[test]
    fn test_select_anthony_twice() {
        let mut session = seeded_session();
        let anthony = FriendFixtures::anthony_id();
        let before = session.state().roster.clone();

        session.dispatch(Intent::select(anthony)).unwrap();
        assert_eq!(session.state().selection, Selection::Selected(anthony));

        session.dispatch(Intent::select(anthony)).unwrap();
        assert_eq!(session.state().selection, Selection::None);
        assert_eq!(session.state().roster, before);
    }

    #[test]
    fn test_empty_split_leaves_selection() {
        let mut session = seeded_session();
        let sarah = FriendFixtures::sarah_id();
        session.dispatch(Intent::select(sarah)).unwrap();
        let before = session.state().clone();

        let outcome = session
            .dispatch(Intent::split_bill(0, 0, Payer::User))
            .unwrap();

        assert_eq!(outcome, Dispatch::Ignored(ValidationError::MissingBill));
        assert_eq!(session.state(), &before);
        assert_eq!(session.state().selection, Selection::Selected(sarah));
    }
}

// ============================================================================
// Add Friend Flow
// ============================================================================

mod add_friend_flow {
    use super::*;

    #[test]
    fn test_added_friend_gets_generated_id_and_avatar() {
        let mut session = seeded_session();
        let expected_id = test_utils::SequentialIdGenerator::new().peek();

        session.dispatch(Intent::ToggleAddFriendForm).unwrap();
        let mut draft = session.add_friend_draft();
        draft.set_name("Dana");
        session.dispatch(draft.to_intent()).unwrap();

        let state = session.state();
        assert_eq!(state.roster.len(), 4);
        assert!(!state.is_add_friend_form_visible());

        let dana = state.roster.get(&expected_id).unwrap();
        assert_eq!(dana.name(), "Dana");
        assert_eq!(
            dana.image(),
            format!("https://i.pravatar.cc/48?id={}", expected_id.as_uuid())
        );
        assert!(dana.balance().is_zero());
    }

    #[test]
    fn test_configured_avatar_template_reaches_new_friend() {
        let vars: std::collections::HashMap<String, String> = [(
            "SPLIT_DEFAULT_AVATAR_TEMPLATE".to_string(),
            "https://img.example/a".to_string(),
        )]
        .into_iter()
        .collect();
        let config =
            SessionConfig::load(config::Environment::with_prefix("SPLIT").source(Some(vars)))
                .unwrap();
        let ids = SequentialIdGenerator::new();
        let expected_id = ids.peek();
        let mut session = Session::with_id_generator(&config, ids);

        let mut draft = session.add_friend_draft();
        draft.set_name("Dana");
        session.dispatch(draft.to_intent()).unwrap();

        let dana = session.state().roster.get(&expected_id).unwrap();
        assert_eq!(
            dana.image(),
            format!("https://img.example/a?id={}", expected_id.as_uuid())
        );
    }

    #[test]
    fn test_default_draft_matches_default_config() {
        let session = seeded_session();
        assert_eq!(session.add_friend_draft(), AddFriendDraft::default());
    }

    #[test]
    fn test_new_friend_is_appended_last_and_splittable() {
        let mut session = seeded_session();
        session
            .dispatch_all([
                Intent::OpenAddFriendForm,
                Intent::add_friend("Dana", "https://i.pravatar.cc/48"),
            ])
            .unwrap();

        let dana = session.state().roster.iter().last().unwrap().id();
        session.dispatch(Intent::select(dana)).unwrap();
        session
            .dispatch(Intent::split_bill(Amount::new(dec!(40.50)), Amount::new(dec!(20.25)), Payer::User))
            .unwrap();

        assert_balance(&session.state().roster, &dana, Amount::new(dec!(20.25)));
    }

    #[test]
    fn test_history_records_events_in_order() {
        let mut session = seeded_session();
        let sarah = FriendFixtures::sarah_id();

        session
            .dispatch_all([
                Intent::OpenAddFriendForm,
                Intent::select(sarah),
                Intent::split_bill(100, 30, Payer::User),
            ])
            .unwrap();

        let kinds: Vec<_> = session.history().iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                SessionEventKind::AddFriendFormOpened,
                SessionEventKind::FriendSelected { friend_id: sarah },
                SessionEventKind::AddFriendFormClosed,
                SessionEventKind::BalanceAdjusted {
                    friend_id: sarah,
                    delta: Amount::from(70),
                    new_balance: Amount::from(90),
                },
                SessionEventKind::SelectionCleared,
            ]
        );
    }
}

// ============================================================================
// Split Bill Form
// ============================================================================

mod split_bill_form {
    use super::*;

    #[test]
    fn test_draft_clamps_and_submits() {
        let mut session = seeded_session();
        let anthony = FriendFixtures::anthony_id();
        session.dispatch(Intent::select(anthony)).unwrap();

        let mut draft = SplitBillDraft::new();
        draft.set_bill(app_session::forms::parse_amount("60"));
        assert!(draft.set_paid_by_user(app_session::forms::parse_amount("25")));
        assert!(!draft.set_paid_by_user(app_session::forms::parse_amount("61")));
        draft.set_payer(Payer::Friend);
        assert_eq!(draft.friend_expense(), Some(Amount::from(35)));

        session.dispatch(draft.to_intent()).unwrap();
        assert_balance(&session.state().roster, &anthony, -25);
    }

    #[test]
    fn test_cents_survive_the_round_trip_through_the_form() {
        let mut session = seeded_session();
        let clark = FriendFixtures::clark_id();
        session.dispatch(Intent::select(clark)).unwrap();

        let mut draft = SplitBillDraft::new();
        draft.set_bill(Some(AmountFixtures::bill_with_cents()));
        assert!(draft.set_paid_by_user(app_session::forms::parse_amount("40.10")));
        assert_eq!(draft.friend_expense(), Some(Amount::new(dec!(47.25))));

        session.dispatch(draft.to_intent()).unwrap();
        assert_balance(&session.state().roster, &clark, Amount::new(dec!(40.25)));
    }

    #[test]
    fn test_bill_lowered_below_expense_is_rejected_on_submit() {
        let mut session = seeded_session();
        session.dispatch(Intent::select(FriendFixtures::sarah_id())).unwrap();

        let mut draft = SplitBillDraft::new();
        draft.set_bill(Some(Amount::from(50)));
        draft.set_paid_by_user(Some(Amount::from(40)));
        draft.set_bill(Some(Amount::from(30)));

        let outcome = session.dispatch(draft.to_intent()).unwrap();
        assert_eq!(outcome, Dispatch::Ignored(ValidationError::PaidExceedsBill));
    }
}

// ============================================================================
// Custom Rosters
// ============================================================================

mod custom_rosters {
    use super::*;

    #[test]
    fn test_session_resumed_from_built_roster() {
        let roster = RosterBuilder::new().friend("Ann", -3).friend("Bo", 4).build();
        let ann = roster.iter().next().unwrap().id();
        let mut session = Session::with_state(AppState::new(roster.clone()), SequentialIdGenerator::new());

        session.dispatch(Intent::select(ann)).unwrap();
        session.dispatch(Intent::split_bill(10, 4, Payer::Friend)).unwrap();

        assert_only_balance_changed(&roster, &session.state().roster, &ann, Amount::from(-4));
        assert_balance(&session.state().roster, &ann, -7);
    }

    #[test]
    fn test_rejected_intents_leave_roster_intact() {
        let roster = RosterBuilder::new().friend("Ann", 0).build();
        let ann = roster.iter().next().unwrap().id();
        let mut session = Session::with_state(AppState::new(roster.clone()), SequentialIdGenerator::new());

        session.dispatch(Intent::select(ann)).unwrap();
        session
            .dispatch_all([
                Intent::split_bill(10, 0, Payer::User),
                Intent::split_bill(10, 11, Payer::User),
                Intent::add_friend("", ""),
            ])
            .unwrap();

        assert_rosters_equal(&session.state().roster, &roster);
    }
}

// ============================================================================
// Contract Violations
// ============================================================================

mod contract_violations {
    use super::*;

    #[test]
    fn test_unknown_friend_is_an_error_and_changes_nothing() {
        let mut session = seeded_session();
        let before = session.state().clone();

        let result = session.dispatch(Intent::select(core_kernel::FriendId::new()));

        assert!(matches!(
            result,
            Err(SessionError::Ledger(LedgerError::FriendNotFound(_)))
        ));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_split_for_friend_missing_from_roster() {
        let mut state = AppState::seeded();
        state.selection = Selection::Selected(core_kernel::FriendId::new());

        let result = reduce(&state, Intent::split_bill(10, 5, Payer::User), &SequentialIdGenerator::new());
        assert!(matches!(
            result,
            Err(SessionError::Ledger(LedgerError::FriendNotFound(_)))
        ));
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn split_changes_only_selected_friend(
        roster in roster_strategy(6),
        pick in any::<prop::sample::Index>(),
        split in bill_split_strategy()
    ) {
        let target = roster.iter().nth(pick.index(roster.len())).unwrap().id();
        let ids = SequentialIdGenerator::new();

        let state = reduce(&AppState::new(roster.clone()), Intent::select(target), &ids).unwrap().state;
        let intent = Intent::split_bill(split.bill, split.paid_by_user, split.payer);
        let next = reduce(&state, intent, &ids).unwrap().state;

        let delta = split.delta().unwrap();
        for (old, new) in roster.iter().zip(next.roster.iter()) {
            if old.id() == target {
                prop_assert_eq!(new.balance(), old.balance() + delta);
            } else {
                prop_assert_eq!(old, new);
                prop_assert!(next.roster.shares_entry(&roster, &old.id()));
            }
        }
        prop_assert!(next.selection.is_none());
    }

    #[test]
    fn adding_friends_never_shrinks_or_duplicates(names in proptest::collection::vec("[A-Z][a-z]{1,8}", 1..6)) {
        let mut session = seeded_session();
        let mut last_len = session.state().roster.len();

        for name in names {
            session.dispatch(Intent::add_friend(name, "https://i.pravatar.cc/48")).unwrap();
            let roster = &session.state().roster;
            prop_assert_eq!(roster.len(), last_len + 1);
            last_len = roster.len();

            let mut ids: Vec<_> = roster.iter().map(|f| f.id()).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), roster.len());
        }
    }

    #[test]
    fn user_then_friend_paid_splits_cancel(half in positive_amount_strategy()) {
        // Even bill, user's own part is half: user pays -> +half, friend pays -> -half
        let bill = half + half;
        let sarah = FriendFixtures::sarah_id();
        let mut session = seeded_session();
        let original = session.state().roster.clone();

        session.dispatch(Intent::select(sarah)).unwrap();
        session.dispatch(Intent::split_bill(bill, half, Payer::User)).unwrap();
        session.dispatch(Intent::select(sarah)).unwrap();
        session.dispatch(Intent::split_bill(bill, half, Payer::Friend)).unwrap();

        prop_assert_eq!(
            session.state().roster.get(&sarah).unwrap().balance(),
            original.get(&sarah).unwrap().balance()
        );
    }
}
