use super::common::{provider, scored, transformed, GroupScores};
use crate::engine::domain::StateCode;
use crate::engine::metrics::{Metric, MetricValue, PassFail};
use crate::engine::scoring::transform_provider;

fn scores(regulatory: f64, ux: f64, intent: f64, authority: f64, commercial: f64) -> GroupScores {
    GroupScores {
        regulatory,
        ux,
        intent,
        authority,
        commercial,
    }
}

#[test]
fn derives_every_metric_from_group_scores() {
    let record = scored(
        provider("northside", "NSW", 72.5),
        scores(60.0, 84.6, 71.2, 83.0, 48.0),
    );

    let table = transform_provider(&record).metrics;

    assert_eq!(table.asqa_registration, PassFail::Pass);
    assert_eq!(table.scope_match, PassFail::Pass);
    assert_eq!(table.page_speed, 85);
    assert_eq!(table.mobile_usability, 78);
    assert_eq!(table.course_completeness, 4);
    assert_eq!(table.price_transparency, 2);
    assert_eq!(table.google_reviews, 4.7);
    assert_eq!(table.review_volume, 155);
    assert_eq!(table.review_recency, 4);
}

#[test]
fn halves_round_up() {
    let record = scored(
        provider("halfway", "VIC", 70.25),
        scores(80.0, 84.5, 85.5, 75.0, 50.0),
    );

    let table = transform_provider(&record).metrics;

    assert_eq!(table.page_speed, 85);
    assert_eq!(table.mobile_usability, 85);
    // 10 + 70.25 * 2 = 150.5
    assert_eq!(table.review_volume, 151);
    // 50 / 20 = 2.5
    assert_eq!(table.price_transparency, 3);
}

#[test]
fn star_ratings_clamp_to_one_through_five() {
    let record = scored(
        provider("edge", "QLD", 50.0),
        scores(59.9, 0.0, 9.0, 100.0, 0.0),
    );

    let table = transform_provider(&record).metrics;

    assert_eq!(table.scope_match, PassFail::Fail);
    assert_eq!(table.course_completeness, 1);
    assert_eq!(table.price_transparency, 1);
    assert_eq!(table.review_recency, 5);
    assert_eq!(table.google_reviews, 5.0);
}

#[test]
fn inactive_status_fails_registration() {
    let mut record = provider("lapsed", "SA", 64.0);
    record.status = "cancelled".to_string();

    let provider = transform_provider(&record);

    assert!(!provider.is_active());
    assert_eq!(provider.metrics.asqa_registration, PassFail::Fail);
    assert_eq!(
        provider.metrics.value(Metric::AsqaRegistration),
        MetricValue::Check(PassFail::Fail)
    );
}

#[test]
fn carries_identity_and_raw_scores() {
    let mut record = scored(
        provider("harbour", "NSW", 81.0),
        scores(90.0, 70.0, 65.0, 88.0, 55.0),
    );
    record.price = Some(1850.0);
    record.phone = Some("02 9000 0000".to_string());

    let provider = transform_provider(&record);

    assert_eq!(provider.id, "harbour");
    assert_eq!(provider.source_id, "harbour");
    assert_eq!(provider.score, 81.0);
    assert_eq!(provider.price, Some(1850.0));
    assert_eq!(provider.phone.as_deref(), Some("02 9000 0000"));
    assert_eq!(provider.raw_scores.regulatory, 90.0);
    assert_eq!(provider.raw_scores.authority, 88.0);
    assert_eq!(provider.raw_scores.commercial, 55.0);
}

#[test]
fn formatted_table_uses_display_units() {
    let record = scored(
        provider("display", "WA", 72.5),
        scores(60.0, 84.6, 71.2, 83.0, 48.0),
    );

    let formatted = transform_provider(&record).metrics.formatted();
    let rendered: Vec<&str> = formatted.iter().map(|(_, text)| text.as_str()).collect();

    assert_eq!(
        rendered,
        vec![
            "Pass",
            "Pass",
            "85/100",
            "78/100",
            "4/5",
            "2/5",
            "4.7 ★",
            "155 reviews",
            "4/5"
        ]
    );
}

#[test]
fn enquiry_target_names_the_state() {
    let providers = transformed(&[provider("enquire", "Multi", 70.0)]);

    let target = providers[0].enquiry_target(StateCode::Tas);

    assert_eq!(target.provider_id, "enquire");
    assert_eq!(target.provider_name, "enquire Training");
    assert_eq!(target.state, StateCode::Tas);
}
