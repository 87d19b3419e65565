//! Payment eligibility, history and mark-as-paid against PostgreSQL.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use outreach_core::error::ErrorKind;
use outreach_database::repositories::{DisclosureRepository, PaymentFilter};
use outreach_entity::audit::{columns, tables};
use outreach_entity::employee::EmployeeRole;

use helpers::{DisclosureSeed, TestApp, at};

struct Fixture {
    app: TestApp,
    scout_id: Uuid,
    accountant_id: Uuid,
    rating_id: Uuid,
    token: String,
}

async fn fixture() -> Option<Fixture> {
    let app = TestApp::with_database().await?;
    let scout_id = app
        .create_employee("Scout", "secret", EmployeeRole::Scout)
        .await;
    let accountant_id = app
        .create_employee("Accountant", "secret", EmployeeRole::Accountant)
        .await;
    let rating_id = app.create_rating("Rating A").await;
    let token = app.token_for(accountant_id, EmployeeRole::Accountant);

    Some(Fixture {
        app,
        scout_id,
        accountant_id,
        rating_id,
        token,
    })
}

impl Fixture {
    async fn eligible_ids(&self, query: &str) -> Vec<Uuid> {
        self.list("eligible", query).await.disclosure_ids()
    }

    async fn history_ids(&self, query: &str) -> Vec<Uuid> {
        self.list("history", query).await.disclosure_ids()
    }

    async fn list(&self, listing: &str, query: &str) -> helpers::TestResponse {
        let path = format!(
            "/api/payments/{listing}?scoutIds={}{query}",
            self.scout_id
        );
        let response = self.app.request("GET", &path, None, Some(&self.token)).await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response
    }

    async fn mark_paid(&self, body: serde_json::Value) -> StatusCode {
        self.app
            .request("POST", "/api/payments/mark-paid", Some(body), Some(&self.token))
            .await
            .status
    }

    async fn rated(&self, created_at: DateTime<Utc>) -> Uuid {
        let id = self
            .app
            .create_disclosure(DisclosureSeed::eligible(
                self.scout_id,
                self.rating_id,
                created_at,
            ))
            .await;
        self.app
            .audit(
                tables::DISCLOSURES_TO_RATINGS,
                id,
                columns::RATING_ID,
                None,
                Some(&self.rating_id.to_string()),
                created_at,
            )
            .await;
        id
    }

}

#[tokio::test]
async fn test_rated_record_moves_from_eligible_to_history() {
    let Some(fx) = fixture().await else { return };
    let record = fx.rated(at(2026, 3, 1)).await;

    assert_eq!(fx.eligible_ids("").await, vec![record]);
    assert!(fx.history_ids("").await.is_empty());

    let status = fx
        .mark_paid(serde_json::json!({ "scoutId": fx.scout_id }))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let entry = fx
        .app
        .payments()
        .find_by_disclosure(record)
        .await
        .unwrap()
        .expect("ledger entry written");
    assert_eq!(entry.created_by, fx.accountant_id);

    assert!(fx.eligible_ids("").await.is_empty());
    let history = fx.list("history", "").await;
    assert_eq!(history.disclosure_ids(), vec![record]);
    assert!(!history.items()[0]["paidAt"].is_null());
}

#[tokio::test]
async fn test_records_before_program_start_are_never_listed() {
    let Some(fx) = fixture().await else { return };
    fx.rated(at(2026, 1, 15)).await;

    assert!(fx.eligible_ids("").await.is_empty());
    assert!(fx.history_ids("").await.is_empty());

    let status = fx
        .mark_paid(serde_json::json!({ "scoutId": fx.scout_id }))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(fx.history_ids("").await.is_empty());
}

#[tokio::test]
async fn test_program_start_instant_itself_is_not_payable() {
    let Some(fx) = fixture().await else { return };
    let program_start = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
    let on_start = fx.rated(program_start).await;
    let just_after = fx.rated(program_start + chrono::Duration::seconds(1)).await;

    let eligible = fx.list("eligible", "").await;
    assert_eq!(eligible.disclosure_ids(), vec![just_after]);
    assert_eq!(eligible.body["totalCount"], 1);
    assert!(!fx.history_ids("").await.contains(&on_start));

    let status = fx
        .mark_paid(serde_json::json!({ "scoutId": fx.scout_id }))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(fx.history_ids("").await, vec![just_after]);
    assert_eq!(fx.app.payment_count(on_start).await, 0);
}

#[tokio::test]
async fn test_incomplete_or_unrated_visits_are_not_payable() {
    let Some(fx) = fixture().await else { return };

    for visit_result in [None, Some("not_completed"), Some("cant_be_completed")] {
        fx.app
            .create_disclosure(DisclosureSeed {
                visit_result,
                ..DisclosureSeed::eligible(fx.scout_id, fx.rating_id, at(2026, 3, 2))
            })
            .await;
    }
    fx.app
        .create_disclosure(DisclosureSeed {
            rating_id: None,
            ..DisclosureSeed::eligible(fx.scout_id, fx.rating_id, at(2026, 3, 2))
        })
        .await;

    assert!(fx.eligible_ids("").await.is_empty());
    assert!(fx.history_ids("").await.is_empty());
}

#[tokio::test]
async fn test_custom_rating_is_payable() {
    let Some(fx) = fixture().await else { return };
    let record = fx
        .app
        .create_disclosure(DisclosureSeed {
            rating_id: None,
            custom_rating: Some("Family relocated".to_string()),
            ..DisclosureSeed::eligible(fx.scout_id, fx.rating_id, at(2026, 3, 3))
        })
        .await;

    let stored = DisclosureRepository::new(fx.app.db_pool.clone())
        .find_by_id(record)
        .await
        .unwrap()
        .expect("disclosure exists");
    assert!(stored.is_custom_rating);
    assert!(stored.is_ratable() && stored.has_valid_rating());

    let page = fx.list("eligible", "").await;
    assert_eq!(page.disclosure_ids(), vec![record]);
    assert_eq!(page.items()[0]["rating"]["isCustom"], true);
    assert_eq!(page.items()[0]["rating"]["customRating"], "Family relocated");
}

#[tokio::test]
async fn test_one_row_per_record_with_latest_completion() {
    let Some(fx) = fixture().await else { return };
    let record = fx.rated(at(2026, 3, 1)).await;
    fx.app
        .audit(
            tables::DISCLOSURES_TO_RATINGS,
            record,
            columns::NOTE,
            None,
            Some("changed note"),
            at(2026, 3, 20),
        )
        .await;
    fx.app
        .audit(
            tables::DISCLOSURES_TO_RATINGS,
            record,
            columns::RATING_ID,
            None,
            Some(&fx.rating_id.to_string()),
            at(2026, 3, 5),
        )
        .await;

    let page = fx.list("eligible", "").await;
    assert_eq!(page.body["totalCount"], 1);
    assert_eq!(page.disclosure_ids(), vec![record]);

    let completed_at: DateTime<Utc> = page.items()[0]["rating"]["completedAt"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("completedAt is set");
    assert_eq!(completed_at, at(2026, 3, 5));
}

#[tokio::test]
async fn test_date_range_includes_whole_last_day() {
    let Some(fx) = fixture().await else { return };
    let early = fx.rated(at(2026, 3, 1)).await;
    let late = fx.rated(at(2026, 3, 31)).await;
    let outside = fx.rated(at(2026, 4, 1)).await;

    let ids = fx
        .eligible_ids("&dateFrom=2026-03-01&dateTo=2026-03-31")
        .await;
    assert!(ids.contains(&early));
    assert!(ids.contains(&late));
    assert!(!ids.contains(&outside));
}

#[tokio::test]
async fn test_pagination_reports_distinct_total() {
    let Some(fx) = fixture().await else { return };
    for day in 1..=3 {
        fx.rated(at(2026, 3, day)).await;
    }

    let first = fx.list("eligible", "&pageSize=2&pageNumber=0").await;
    let second = fx.list("eligible", "&pageSize=2&pageNumber=1").await;

    assert_eq!(first.body["totalCount"], 3);
    assert_eq!(first.items().len(), 2);
    assert_eq!(second.items().len(), 1);
    assert!(
        first
            .disclosure_ids()
            .iter()
            .all(|id| !second.disclosure_ids().contains(id))
    );
}

#[tokio::test]
async fn test_mark_paid_twice_writes_one_entry() {
    let Some(fx) = fixture().await else { return };
    let record = fx.rated(at(2026, 3, 4)).await;
    let body = serde_json::json!({ "scoutId": fx.scout_id });

    assert_eq!(fx.mark_paid(body.clone()).await, StatusCode::NO_CONTENT);
    assert_eq!(fx.mark_paid(body).await, StatusCode::NO_CONTENT);

    assert_eq!(fx.app.payment_count(record).await, 1);
}

#[tokio::test]
async fn test_mark_paid_respects_date_window() {
    let Some(fx) = fixture().await else { return };
    let inside = fx.rated(at(2026, 3, 10)).await;
    let outside = fx.rated(at(2026, 3, 20)).await;

    let status = fx
        .mark_paid(serde_json::json!({
            "scoutId": fx.scout_id,
            "dateFrom": "2026-03-01",
            "dateTo": "2026-03-15",
        }))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(fx.app.payment_count(inside).await, 1);
    assert_eq!(fx.app.payment_count(outside).await, 0);
    assert_eq!(fx.eligible_ids("").await, vec![outside]);
}

#[tokio::test]
async fn test_record_is_in_exactly_one_listing() {
    let Some(fx) = fixture().await else { return };
    let paid = fx.rated(at(2026, 3, 6)).await;
    fx.mark_paid(serde_json::json!({ "scoutId": fx.scout_id }))
        .await;
    let unpaid = fx.rated(at(2026, 3, 7)).await;

    let eligible = fx.eligible_ids("").await;
    let history = fx.history_ids("").await;

    for record in [paid, unpaid] {
        let listed = usize::from(eligible.contains(&record)) + usize::from(history.contains(&record));
        assert_eq!(listed, 1, "{record}");
    }
}

#[tokio::test]
async fn test_concurrent_mark_paid_pays_each_record_once() {
    let Some(fx) = fixture().await else { return };
    let mut records = Vec::new();
    for day in 1..=5 {
        records.push(fx.rated(at(2026, 3, day)).await);
    }

    let repo = Arc::new(fx.app.payments());
    let filter = PaymentFilter::for_scout(fx.scout_id, None, None);
    let calls = (0..4).map(|_| {
        let repo = Arc::clone(&repo);
        let filter = filter.clone();
        let actor = fx.accountant_id;
        tokio::spawn(async move { repo.mark_as_paid(&filter, actor).await })
    });

    let mut written = 0;
    for handle in futures::future::join_all(calls).await {
        match handle.expect("task panicked") {
            Ok(n) => written += n,
            Err(e) => assert_eq!(e.kind, ErrorKind::Conflict, "{e}"),
        }
    }

    assert_eq!(written, records.len() as u64);
    for record in records {
        assert_eq!(fx.app.payment_count(record).await, 1);
    }
}

#[tokio::test]
async fn test_other_scouts_are_not_listed() {
    let Some(fx) = fixture().await else { return };
    let mine = fx.rated(at(2026, 3, 8)).await;

    let other_scout = fx
        .app
        .create_employee("Other", "secret", EmployeeRole::Scout)
        .await;
    let theirs = fx
        .app
        .create_disclosure(DisclosureSeed::eligible(
            other_scout,
            fx.rating_id,
            at(2026, 3, 8),
        ))
        .await;

    let ids = fx.eligible_ids("").await;
    assert_eq!(ids, vec![mine]);

    let path = format!(
        "/api/payments/eligible?scoutIds={}&scoutIds={other_scout}",
        fx.scout_id
    );
    let both = fx.app.request("GET", &path, None, Some(&fx.token)).await;
    let ids = both.disclosure_ids();
    assert!(ids.contains(&mine));
    assert!(ids.contains(&theirs));
}
