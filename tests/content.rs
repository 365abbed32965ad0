mod helpers;

use chrono::NaiveDate;
use claim::{assert_err, assert_none, assert_ok, assert_some};
use helpers::spawn_app;
use rust_decimal::Decimal;
use samity::core::Clock;
use samity::db::activities::{delete_activity, upsert_activity};
use samity::db::gallery::{delete_gallery_item, upsert_gallery_item};
use samity::db::members::delete_member;
use samity::db::messages::delete_message;
use samity::db::notices::{delete_notice, upsert_notice};
use samity::db::reports::{activities_by_status, latest_notice};
use samity::db::settings::update_settings;
use samity::db::transactions::delete_transaction;
use samity::models::activities::{ActivityForm, ActivityStatus};
use samity::models::gallery::{GalleryForm, MediaType, DEFAULT_GALLERY_TITLE};
use samity::models::notices::NoticeForm;
use samity::models::settings::SettingsPatch;

fn notice(title: &str) -> NoticeForm {
    NoticeForm {
        title: Some(title.into()),
        content: Some("বিস্তারিত".into()),
        ..Default::default()
    }
}

#[test]
fn new_notice_goes_to_the_top_dated_today() {
    let mut test_app = spawn_app();

    let first = assert_ok!(upsert_notice(&mut test_app.app.store, notice("প্রথম"), None));
    let second = assert_ok!(upsert_notice(&mut test_app.app.store, notice("দ্বিতীয়"), None));

    let expected_id = test_app.clock.now().timestamp_millis().to_string();
    assert_eq!(first.id, expected_id);
    assert_ne!(first.id, second.id);
    assert_eq!(first.date, test_app.today());
    assert_none!(first.download_url.as_ref());

    let notices = test_app.stored_dataset().notices;
    assert_eq!(notices.len(), 4);
    assert_eq!(notices[0], second);
    assert_eq!(notices[1], first);
    assert_eq!(latest_notice(test_app.app.dataset()), Some(&second));
}

#[test]
fn notice_keeps_an_explicit_date_and_attachment() {
    let mut test_app = spawn_app();
    let form = NoticeForm {
        date: NaiveDate::from_ymd_opt(2025, 1, 5),
        download_url: Some("https://example.com/agm.pdf".into()),
        ..notice("সভা")
    };

    let created = assert_ok!(upsert_notice(&mut test_app.app.store, form, None));

    assert_eq!(created.date, "2025-01-05");
    assert_eq!(created.download_url.as_deref(), Some("https://example.com/agm.pdf"));
}

#[test]
fn notice_needs_title_and_content() {
    let mut test_app = spawn_app();
    let before = test_app.app.dataset().clone();

    let untitled = NoticeForm {
        title: Some(String::new()),
        ..notice("x")
    };
    let empty = NoticeForm {
        content: None,
        ..notice("x")
    };
    for form in [untitled, empty] {
        let error = assert_err!(upsert_notice(&mut test_app.app.store, form, None));
        assert!(error.is_validation());
    }
    assert_eq!(test_app.app.dataset(), &before);
}

#[test]
fn editing_a_notice_keeps_its_position() {
    let mut test_app = spawn_app();
    let form = NoticeForm {
        title: Some("সংশোধিত".into()),
        ..Default::default()
    };

    let edited = assert_ok!(upsert_notice(&mut test_app.app.store, form, Some("2")));

    let notices = &test_app.app.dataset().notices;
    assert_eq!(notices[1], edited);
    assert_eq!(edited.title, "সংশোধিত");
    assert_eq!(edited.content, "সদস্যদের সুবিধার জন্য ১০০০ টাকার মাসিক স্কিম চালু হয়েছে।");
}

#[test]
fn new_activity_is_planned_by_default() {
    let mut test_app = spawn_app();
    let form = ActivityForm {
        title: Some("মৎস্য চাষ".into()),
        ..Default::default()
    };

    let activity = assert_ok!(upsert_activity(&mut test_app.app.store, form, None));

    assert_eq!(activity.status, ActivityStatus::Planned);
    assert_eq!(activity.description, "");
    assert_eq!(test_app.app.dataset().activities[0], activity);

    let board = activities_by_status(test_app.app.dataset());
    assert_eq!(board.planned, vec![&activity]);
    assert_eq!(board.current.len(), 2);
}

#[test]
fn activity_status_can_move_forward() {
    let mut test_app = spawn_app();
    let form = ActivityForm {
        status: Some(ActivityStatus::Completed),
        ..Default::default()
    };

    let activity = assert_ok!(upsert_activity(&mut test_app.app.store, form, Some("1")));

    assert_eq!(activity.status, ActivityStatus::Completed);
    assert_eq!(activity.title, "পোল্ট্রি খামার প্রকল্প");
}

#[test]
fn gallery_upload_fills_in_defaults() {
    let mut test_app = spawn_app();
    let form = GalleryForm {
        title: Some(String::new()),
        image_url: Some("data:image/png;base64,AAAA".into()),
        kind: Some(MediaType::Video),
        ..Default::default()
    };

    let item = assert_ok!(upsert_gallery_item(&mut test_app.app.store, form, None));

    assert_eq!(item.title, DEFAULT_GALLERY_TITLE);
    assert_eq!(item.description, "");
    assert_eq!(item.kind, MediaType::Image);
    assert_eq!(test_app.stored_dataset().gallery[0], item);
}

#[test]
fn gallery_upload_needs_an_image() {
    let mut test_app = spawn_app();

    assert_err!(upsert_gallery_item(
        &mut test_app.app.store,
        GalleryForm::default(),
        None
    ));
    assert_eq!(test_app.app.dataset().gallery.len(), 2);
}

#[test]
fn settings_patch_overwrites_only_supplied_fields() {
    let mut test_app = spawn_app();
    let patch = SettingsPatch {
        name: Some("নতুন সমিতি".into()),
        monthly_savings_amount: Some(Decimal::from(1500)),
        ..Default::default()
    };

    let settings = assert_ok!(update_settings(&mut test_app.app.store, patch));

    assert_eq!(settings.name, "নতুন সমিতি");
    assert_eq!(settings.monthly_savings_amount, Decimal::from(1500));
    assert_eq!(settings.slogan, "Save Together, Grow Together");
    assert_eq!(settings.admin_password(), "admin123");
    assert_eq!(test_app.stored_dataset().settings, settings);
}

#[test]
fn negative_savings_amount_is_rejected() {
    let mut test_app = spawn_app();
    let patch = SettingsPatch {
        monthly_savings_amount: Some(Decimal::from(-1)),
        ..Default::default()
    };

    let error = assert_err!(update_settings(&mut test_app.app.store, patch));

    assert!(error.is_validation());
    assert_eq!(
        test_app.app.dataset().settings.monthly_savings_amount,
        Decimal::from(1000)
    );
}

#[test]
fn deletes_are_idempotent_in_every_collection() {
    let mut test_app = spawn_app();
    let store = &mut test_app.app.store;

    assert!(delete_notice(store, "1"));
    assert!(!delete_notice(store, "1"));
    assert!(delete_activity(store, "2"));
    assert!(!delete_activity(store, "2"));
    assert!(delete_gallery_item(store, "1"));
    assert!(!delete_gallery_item(store, "1"));
    assert!(delete_member(store, "1002"));
    assert!(!delete_member(store, "1002"));
    assert!(delete_transaction(store, "t3"));
    assert!(!delete_transaction(store, "t3"));
    assert!(!delete_message(store, "missing"));

    let dataset = test_app.stored_dataset();
    assert_eq!(dataset.notices.len(), 1);
    assert_eq!(dataset.activities.len(), 1);
    assert_eq!(dataset.gallery.len(), 1);
    assert_eq!(dataset.members.len(), 1);
    assert_eq!(dataset.transactions.len(), 2);
    assert_some!(dataset.member("1001"));
}
