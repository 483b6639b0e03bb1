// Property tests: every wire model survives a JSON round trip.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use lunance_api::WireModel;
use lunance_api::models::{
    CategoryModel, CategoryWithStatsModel, MonthlyTrendModel, PreferencesModel, TransactionModel,
    UserProfileModel,
};

// ── Strategies ──────────────────────────────────────────────────────

fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
}

fn amount() -> impl Strategy<Value = f64> {
    (-1e12f64..1e12f64).prop_filter("finite", |v| v.is_finite())
}

fn kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("income".to_owned()),
        Just("expense".to_owned()),
        "[a-z]{1,8}",
    ]
}

prop_compose! {
    fn category()(
        id in "[a-z0-9]{1,12}",
        name in ".{0,20}",
        category_type in kind(),
        icon in "[a-z_ ]{0,12}",
        color in prop_oneof![Just(String::new()), "#[0-9A-F]{6}"],
        keywords in proptest::collection::vec("[a-z]{1,8}", 0..4),
        is_default in any::<bool>(),
        created_at in timestamp(),
        updated_at in proptest::option::of(timestamp()),
    ) -> CategoryModel {
        CategoryModel {
            id, name, category_type, icon, color, keywords, is_default, created_at, updated_at,
        }
    }
}

prop_compose! {
    fn transaction()(
        id in "[a-z0-9]{1,12}",
        transaction_type in kind(),
        amount in amount(),
        category_id in "[a-z0-9]{1,12}",
        category_name in proptest::option::of(".{1,12}"),
        description in ".{0,30}",
        notes in proptest::option::of(".{1,30}"),
        date in timestamp(),
        created_at in timestamp(),
    ) -> TransactionModel {
        TransactionModel {
            id, transaction_type, amount, category_id, category_name, description, notes, date,
            created_at,
        }
    }
}

fn round_trips<M: WireModel + PartialEq + std::fmt::Debug>(model: &M) -> Result<(), TestCaseError> {
    let back = M::from_json(&model.to_json()).map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(&back, model);
    Ok(())
}

// ── Properties ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn category_round_trips(model in category()) {
        round_trips(&model)?;
    }

    #[test]
    fn category_with_stats_round_trips(
        category in category(),
        transaction_count in 0u64..1_000_000,
        total_amount in amount(),
        average_amount in amount(),
        last_used in proptest::option::of(timestamp()),
    ) {
        round_trips(&CategoryWithStatsModel {
            category, transaction_count, total_amount, average_amount, last_used,
        })?;
    }

    #[test]
    fn transaction_round_trips(model in transaction()) {
        round_trips(&model)?;
    }

    #[test]
    fn trend_round_trips(month in "20[0-9]{2}-(0[1-9]|1[0-2])", income in amount(), expense in amount()) {
        round_trips(&MonthlyTrendModel { month, income, expense })?;
    }

    #[test]
    fn profile_round_trips(
        id in "[a-z0-9]{1,12}",
        name in ".{0,20}",
        email in "[a-z]{1,8}@[a-z]{1,8}\\.id",
        university in proptest::option::of(".{1,20}"),
        created_at in timestamp(),
    ) {
        round_trips(&UserProfileModel { id, name, email, university, created_at })?;
    }

    #[test]
    fn preferences_round_trip(
        currency in "[A-Z]{3}",
        language in "[a-z]{2}",
        theme in prop_oneof![Just("light"), Just("dark"), Just("system")],
        notifications_enabled in any::<bool>(),
        monthly_budget in proptest::option::of(amount()),
    ) {
        round_trips(&PreferencesModel {
            currency,
            language,
            theme: theme.to_owned(),
            notifications_enabled,
            monthly_budget,
        })?;
    }
}
