use cynic::{MutationBuilder, QueryBuilder};

use super::{GraphQlExecutor, InstruqtClient};
use crate::{
    QueryOptions,
    api::types::*,
    errors::{OperationContext, Result},
};

impl<E: GraphQlExecutor> InstruqtClient<E> {
    /// Fetches a track by its identifier.
    ///
    /// Challenges and reviews are fetched in follow-up calls when requested
    /// through the options.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_track_by_id(&self, track_id: &str, options: &QueryOptions) -> Result<Option<TrackDetails>> {
        if track_id.is_empty() {
            return Ok(None);
        }

        let resp = self
            .executor
            .query(QueryTrackById::build(TrackByIdVariables {
                track_id: track_id.into(),
            }))
            .await
            .context("get_track_by_id")?;

        match resp.track {
            Some(track) => self
                .enrich_track(track_id, track, options)
                .await
                .map(Some)
                .context("get_track_by_id"),
            None => Ok(None),
        }
    }

    /// Fetches a track as seen by the given user.
    ///
    /// When challenges are requested, each challenge of the track is replaced
    /// by the user's view of it, costing one extra call per challenge.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_user_track_by_id(
        &self,
        user_id: &str,
        track_id: &str,
        options: &QueryOptions,
    ) -> Result<Option<TrackDetails<SandboxTrack>>> {
        if track_id.is_empty() {
            return Ok(None);
        }

        let resp = self
            .executor
            .query(QueryUserTrack::build(UserTrackVariables {
                track_id: track_id.into(),
                user_id: user_id.into(),
                organization_slug: self.team_slug.clone(),
            }))
            .await
            .context("get_user_track_by_id")?;

        let Some(track) = resp.track else {
            return Ok(None);
        };

        let mut details = TrackDetails::from(track);

        if options.include_challenges() {
            let challenges = self.get_challenges(track_id).await.context("get_user_track_by_id")?;

            let mut user_challenges = Vec::with_capacity(challenges.len());
            for challenge in challenges {
                let user_challenge = self
                    .fetch_user_challenge(user_id, &challenge.id)
                    .await
                    .context("get_user_track_by_id")?;
                user_challenges.push(user_challenge.unwrap_or(challenge));
            }
            details.challenges = user_challenges;
        }

        if options.include_reviews() {
            details.reviews = self
                .get_reviews(track_id, options)
                .await
                .context("get_user_track_by_id")?;
        }

        Ok(Some(details))
    }

    /// Fetches a track of the client's team by its slug.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_track_by_slug(&self, track_slug: &str, options: &QueryOptions) -> Result<Option<TrackDetails>> {
        if track_slug.is_empty() {
            return Ok(None);
        }

        let resp = self
            .executor
            .query(QueryTrackBySlug::build(TrackBySlugVariables {
                track_slug: track_slug.into(),
                team_slug: self.team_slug.clone(),
            }))
            .await
            .context("get_track_by_slug")?;

        match resp.track {
            Some(track) => {
                let track_id = track.id.clone();
                self.enrich_track(&track_id, track, options)
                    .await
                    .map(Some)
                    .context("get_track_by_slug")
            }
            None => Ok(None),
        }
    }

    /// Fetches all tracks of the client's team.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_tracks(&self, options: &QueryOptions) -> Result<Vec<TrackDetails>> {
        let resp = self
            .executor
            .query(QueryTracks::build(TracksVariables {
                organization_slug: self.team_slug.clone(),
            }))
            .await
            .context("get_tracks")?;

        let mut tracks = Vec::with_capacity(resp.tracks.len());
        for track in resp.tracks {
            let track_id = track.id.clone();
            tracks.push(
                self.enrich_track(&track_id, track, options)
                    .await
                    .context("get_tracks")?,
            );
        }

        Ok(tracks)
    }

    /// Returns the first challenge of the user's track that can currently be played.
    ///
    /// Challenges are scanned in the order returned by the server and matched
    /// against [`PLAYABLE_CHALLENGE_STATUSES`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_track_unlocked_challenge(&self, user_id: &str, track_id: &str) -> Result<Option<Challenge>> {
        let track = self
            .get_user_track_by_id(user_id, track_id, &QueryOptions::default().with_challenges())
            .await
            .context("get_track_unlocked_challenge")?;

        Ok(track.and_then(|track| track.challenges.into_iter().find(Challenge::is_playable)))
    }

    /// Generates a token granting a single play of the track.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn generate_one_time_play_token(&self, track_id: &str) -> Result<String> {
        self.executor
            .mutate(MutationGenerateOneTimePlayToken::build(GenerateTokenVariables {
                track_id: track_id.into(),
            }))
            .await
            .map(|resp| resp.generate_one_time_play_token)
            .context("generate_one_time_play_token")
    }

    /// Fetches the reviews of a track.
    ///
    /// With [`QueryOptions::with_play`] each review also carries the play it
    /// was left on.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_reviews(&self, track_id: &str, options: &QueryOptions) -> Result<TrackReviews> {
        if track_id.is_empty() {
            return Ok(TrackReviews::default());
        }

        let variables = TrackReviewsVariables {
            track_id: track_id.into(),
        };

        if options.include_play() {
            self.executor
                .query(QueryTrackReviewsWithPlay::build(variables))
                .await
                .map(|resp| resp.track_reviews.into())
                .context("get_reviews")
        } else {
            self.executor
                .query(QueryTrackReviews::build(variables))
                .await
                .map(|resp| resp.track_reviews.into())
                .context("get_reviews")
        }
    }

    async fn enrich_track<T>(&self, track_id: &str, track: T, options: &QueryOptions) -> Result<TrackDetails<T>> {
        let mut details = TrackDetails::from(track);

        if options.include_challenges() {
            details.challenges = self.get_challenges(track_id).await?;
        }

        if options.include_reviews() {
            details.reviews = self.get_reviews(track_id, options).await?;
        }

        Ok(details)
    }
}
