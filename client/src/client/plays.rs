use cynic::QueryBuilder;

use super::{GraphQlExecutor, InstruqtClient};
use crate::{
    QueryOptions,
    api::types::*,
    errors::{OperationContext, Result},
};

impl<E: GraphQlExecutor> InstruqtClient<E> {
    /// Fetches one page of play reports started between `from` and `to`.
    ///
    /// All list filters of the options are forwarded, empty lists included.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_plays(
        &self,
        from: DateTime,
        to: DateTime,
        take: i32,
        skip: i32,
        options: &QueryOptions,
    ) -> Result<PlayReports> {
        let ordering = options.ordering();
        let input = PlayReportInput {
            team_slug: self.team_slug.clone(),
            date_range_filter: DateRangeFilter { from, to },
            track_ids: options.track_ids().to_vec(),
            track_invite_ids: options.track_invite_ids().to_vec(),
            landing_page_ids: options.landing_page_ids().to_vec(),
            tags: options.tags().to_vec(),
            user_ids: options.user_ids().to_vec(),
            pagination: Pagination { skip, take },
            play_type: options.play_type(),
            ordering: PlayReportOrdering {
                order_by: ordering.order_by,
                direction: ordering.direction,
            },
        };

        self.executor
            .query(QueryPlayReports::build(PlayReportsVariables { input }))
            .await
            .map(|resp| resp.play_reports)
            .context("get_plays")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::client::testing::MockExecutor;

    fn range() -> (DateTime, DateTime) {
        (
            chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            chrono::Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        )
    }

    fn empty_reports() -> serde_json::Value {
        json!({ "playReports": { "items": [], "totalItems": 0 } })
    }

    #[tokio::test]
    async fn defaults_forward_all_play_type_and_empty_lists() -> anyhow::Result<()> {
        let executor = MockExecutor::new().with_data(empty_reports());
        let client = InstruqtClient::with_executor(executor.clone(), "team");
        let (from, to) = range();

        client.get_plays(from, to, 25, 50, &QueryOptions::default()).await?;

        let input = &executor.operations()[0].variables["input"];
        assert_eq!(json!("ALL"), input["playType"]);
        assert_eq!(json!([]), input["trackIds"]);
        assert_eq!(json!([]), input["trackInviteIds"]);
        assert_eq!(json!([]), input["landingPageIds"]);
        assert_eq!(json!([]), input["tags"]);
        assert_eq!(json!([]), input["userIds"]);
        assert_eq!(json!("team"), input["teamSlug"]);
        assert_eq!(json!({ "skip": 50, "take": 25 }), input["pagination"]);
        assert_eq!(json!({ "orderBy": "completion_percent", "direction": "Desc" }), input["ordering"]);
        Ok(())
    }

    #[tokio::test]
    async fn filters_are_forwarded_verbatim() -> anyhow::Result<()> {
        let executor = MockExecutor::new().with_data(empty_reports());
        let client = InstruqtClient::with_executor(executor.clone(), "team");
        let (from, to) = range();

        let options = QueryOptions::default()
            .with_track_ids(["t1", "t2"])
            .with_tags(["beta"])
            .with_play_type(PlayType::Developer)
            .with_ordering(PlayReportOrderBy::TimeSpent, OrderDirection::Asc);
        client.get_plays(from, to, 10, 0, &options).await?;

        let input = &executor.operations()[0].variables["input"];
        assert_eq!(json!(["t1", "t2"]), input["trackIds"]);
        assert_eq!(json!(["beta"]), input["tags"]);
        assert_eq!(json!("DEVELOPER"), input["playType"]);
        assert_eq!(json!({ "orderBy": "time_spent", "direction": "Asc" }), input["ordering"]);
        Ok(())
    }

    #[tokio::test]
    async fn play_reports_are_decoded() -> anyhow::Result<()> {
        let executor = MockExecutor::new().with_data(json!({
            "playReports": {
                "totalItems": 12,
                "items": [{
                    "id": "p1",
                    "track": { "id": "t1", "slug": "intro", "title": "Intro" },
                    "trackInvite": null,
                    "user": { "id": "u1", "profile": { "displayName": "Ada Lovelace", "email": "ada@example.com" } },
                    "completionPercent": 66.6,
                    "totalChallenges": 3,
                    "completedChallenges": 2,
                    "timeSpent": 1200,
                    "stoppedReason": "stopped_by_user",
                    "mode": "normal",
                    "startedAt": "2024-01-05T09:30:00Z",
                    "activity": [{ "time": "2024-01-05T09:31:00Z", "message": "started challenge" }],
                    "playReview": { "id": "r1", "score": 5, "content": null },
                    "customParameters": [{ "key": "utm_source", "value": "newsletter" }]
                }]
            }
        }));
        let client = InstruqtClient::with_executor(executor, "team");
        let (from, to) = range();

        let reports = client.get_plays(from, to, 10, 0, &QueryOptions::default()).await?;

        assert_eq!(12, reports.total_items);
        assert_eq!(1, reports.items.len());
        let report = &reports.items[0];
        assert_eq!(2, report.completed_challenges);
        assert_eq!(Some(5), report.play_review.as_ref().map(|r| r.score));
        assert_eq!("newsletter", report.custom_parameters[0].value);
        Ok(())
    }
}
