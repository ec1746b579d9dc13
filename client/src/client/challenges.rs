use cynic::{MutationBuilder, QueryBuilder};

use super::{GraphQlExecutor, InstruqtClient};
use crate::{
    QueryOptions,
    api::types::*,
    errors::{OperationContext, Result},
};

impl<E: GraphQlExecutor> InstruqtClient<E> {
    /// Fetches the challenges of a track in track order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_challenges(&self, track_id: &str) -> Result<Vec<Challenge>> {
        if track_id.is_empty() {
            return Ok(Vec::new());
        }

        self.executor
            .query(QueryChallenges::build(ChallengesVariables {
                track_id: track_id.into(),
                team_slug: self.team_slug.clone(),
            }))
            .await
            .map(|resp| resp.challenges)
            .context("get_challenges")
    }

    /// Fetches a challenge by its identifier.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_challenge(&self, challenge_id: &str, options: &QueryOptions) -> Result<Option<ChallengeDetails>> {
        if challenge_id.is_empty() {
            return Ok(None);
        }

        let challenge = self
            .executor
            .query(QueryChallenge::build(ChallengeVariables {
                challenge_id: challenge_id.into(),
            }))
            .await
            .context("get_challenge")?
            .challenge;

        match challenge {
            Some(challenge) => self.with_assignment(challenge, options).await.map(Some).context("get_challenge"),
            None => Ok(None),
        }
    }

    /// Fetches a challenge including the user's status and attempts.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_user_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
        options: &QueryOptions,
    ) -> Result<Option<ChallengeDetails>> {
        match self.fetch_user_challenge(user_id, challenge_id).await? {
            Some(challenge) => self
                .with_assignment(challenge, options)
                .await
                .map(Some)
                .context("get_user_challenge"),
            None => Ok(None),
        }
    }

    /// Moves the user's play of the track forward to the given challenge.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn skip_to_challenge(&self, user_id: &str, track_id: &str, challenge_id: &str) -> Result<()> {
        let resp = self
            .executor
            .mutate(MutationSkipToChallenge::build(SkipToChallengeVariables {
                track_id: track_id.into(),
                challenge_id: challenge_id.into(),
                user_id: user_id.into(),
            }))
            .await
            .context("skip_to_challenge")?;

        tracing::debug!(status = ?resp.skip_to_challenge.status, "skipped to challenge");
        Ok(())
    }

    pub(super) async fn fetch_user_challenge(&self, user_id: &str, challenge_id: &str) -> Result<Option<Challenge>> {
        if challenge_id.is_empty() {
            return Ok(None);
        }

        self.executor
            .query(QueryUserChallenge::build(UserChallengeVariables {
                challenge_id: challenge_id.into(),
                user_id: user_id.into(),
            }))
            .await
            .map(|resp| resp.challenge)
            .context("get_user_challenge")
    }

    async fn with_assignment(&self, challenge: Challenge, options: &QueryOptions) -> Result<ChallengeDetails> {
        let assignment = if options.include_assignment() {
            self.executor
                .query(QueryChallengeAssignment::build(ChallengeVariables {
                    challenge_id: challenge.id.clone(),
                }))
                .await?
                .challenge
                .and_then(|c| c.assignment)
        } else {
            None
        };

        Ok(ChallengeDetails { challenge, assignment })
    }
}
