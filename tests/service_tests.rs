use chrono::NaiveDate;
use subtrack_core::core::services::{RateService, SubscriptionService};
use subtrack_core::currency::CurrencyCode;
use subtrack_core::domain::{BillingCycle, NewSubscription, SubscriptionBook, SubscriptionPatch};
use subtrack_core::errors::TrackerError;

#[test]
fn record_lifecycle_create_update_toggle_remove() {
    let mut book = SubscriptionBook::new("flows");
    let id = SubscriptionService::create(&mut book, NewSubscription::new("Adobe CC", 6480.0))
        .expect("create record");

    SubscriptionService::update(
        &mut book,
        id,
        SubscriptionPatch {
            service_name: Some("Adobe Creative Cloud".into()),
            billing_cycle: Some(BillingCycle::Yearly),
            ..Default::default()
        },
    )
    .expect("rename and switch cycle");

    let sub = book.subscription(id).unwrap();
    assert_eq!(sub.service_name, "Adobe Creative Cloud");
    assert_eq!(sub.amount_jpy_monthly, 540);
    assert_eq!(sub.amount_jpy_yearly, 6480);

    assert!(!SubscriptionService::toggle_active(&mut book, id).expect("pause"));
    assert!(SubscriptionService::toggle_active(&mut book, id).expect("resume"));

    let removed = SubscriptionService::remove(&mut book, id).expect("remove record");
    assert_eq!(removed.service_name, "Adobe Creative Cloud");
    assert_eq!(book.subscription_count(), 0);
    assert!(matches!(
        SubscriptionService::remove(&mut book, id),
        Err(TrackerError::NotFound(_))
    ));
}

#[test]
fn failed_updates_leave_the_record_untouched() {
    let mut book = SubscriptionBook::new("flows");
    let id = SubscriptionService::create(&mut book, NewSubscription::new("Spotify", 980.0))
        .expect("create record");
    let before = book.subscription(id).unwrap().clone();

    let err = SubscriptionService::update(
        &mut book,
        id,
        SubscriptionPatch {
            service_name: Some("   ".into()),
            amount_original: Some(1280.0),
            ..Default::default()
        },
    )
    .expect_err("blank name must fail");
    assert!(matches!(err, TrackerError::InvalidInput(_)));

    let after = book.subscription(id).unwrap();
    assert_eq!(after.service_name, before.service_name);
    assert_eq!(after.amount_original, before.amount_original);
    assert_eq!(after.amount_jpy_monthly, before.amount_jpy_monthly);
    assert_eq!(after.updated_at, before.updated_at);
}

#[test]
fn imports_are_all_or_nothing() {
    let mut book = SubscriptionBook::new("flows");
    let err = SubscriptionService::import(
        &mut book,
        vec![
            NewSubscription::new("Netflix", 1490.0),
            NewSubscription::new("", 980.0),
        ],
    )
    .expect_err("blank name poisons the batch");
    assert!(matches!(err, TrackerError::InvalidInput(_)));
    assert_eq!(book.subscription_count(), 0);

    let ids = SubscriptionService::import(
        &mut book,
        vec![
            NewSubscription::new("Netflix", 1490.0),
            NewSubscription::new("Spotify", 980.0),
        ],
    )
    .expect("clean batch lands");
    assert_eq!(ids.len(), 2);
    assert_eq!(book.subscription_count(), 2);

    let names: Vec<&str> = SubscriptionService::list(&book)
        .iter()
        .map(|sub| sub.service_name.as_str())
        .collect();
    assert_eq!(names, vec!["Netflix", "Spotify"]);
}

#[test]
fn rate_replacement_defers_to_the_next_edit() {
    let mut book = SubscriptionBook::new("flows");
    let id = SubscriptionService::create(
        &mut book,
        NewSubscription::new("Dropbox", 15.0).with_currency(CurrencyCode::usd()),
    )
    .expect("create usd record");
    assert_eq!(book.subscription(id).unwrap().amount_jpy_monthly, 2250);

    RateService::set_rate(&mut book, 200.0).expect("replace rate");
    assert_eq!(RateService::current(&book), 200.0);

    // The cached pair is untouched until a canonical input changes.
    let sub = book.subscription(id).unwrap();
    assert_eq!(sub.amount_jpy_monthly, 2250);
    assert_eq!(sub.amount_jpy_yearly, 27000);

    SubscriptionService::update(
        &mut book,
        id,
        SubscriptionPatch {
            amount_original: Some(30.0),
            ..Default::default()
        },
    )
    .expect("edit amount");
    let sub = book.subscription(id).unwrap();
    assert_eq!(sub.amount_jpy_monthly, 6000);
    assert_eq!(sub.amount_jpy_yearly, 72000);
}

#[test]
fn optional_fields_can_be_cleared() {
    let mut book = SubscriptionBook::new("flows");
    let started = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
    let renewal = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
    let id = SubscriptionService::create(
        &mut book,
        NewSubscription::new("iCloud+", 130.0)
            .with_memo("trial ends in May")
            .with_start_date(started)
            .with_next_billing_date(renewal),
    )
    .expect("create record");
    assert_eq!(book.subscription(id).unwrap().start_date, Some(started));

    SubscriptionService::update(
        &mut book,
        id,
        SubscriptionPatch {
            memo: Some(None),
            start_date: Some(None),
            next_billing_date: Some(None),
            ..Default::default()
        },
    )
    .expect("clear optionals");

    let sub = book.subscription(id).unwrap();
    assert!(sub.memo.is_none());
    assert!(sub.start_date.is_none());
    assert!(sub.next_billing_date.is_none());
    // An untouched pair proves the clear did not re-derive anything.
    assert_eq!(sub.amount_jpy_monthly, 130);
}
