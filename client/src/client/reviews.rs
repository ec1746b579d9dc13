use cynic::QueryBuilder;

use super::{GraphQlExecutor, InstruqtClient};
use crate::{
    QueryOptions,
    api::types::*,
    errors::{OperationContext, Result},
};

impl<E: GraphQlExecutor> InstruqtClient<E> {
    /// Fetches a single review, with its play when [`QueryOptions::with_play`] is set.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_review(&self, review_id: &str, options: &QueryOptions) -> Result<Option<Review>> {
        if review_id.is_empty() {
            return Ok(None);
        }

        let variables = ReviewVariables {
            review_id: review_id.into(),
        };

        if options.include_play() {
            self.executor
                .query(QueryReviewWithPlay::build(variables))
                .await
                .map(|resp| resp.track_review.map(Review::from))
                .context("get_review")
        } else {
            self.executor
                .query(QueryReview::build(variables))
                .await
                .map(|resp| resp.track_review.map(Review::from))
                .context("get_review")
        }
    }
}
