use super::{DateTime, UserRef, challenges::Challenge, reviews::TrackReviews, sandboxes::SandboxConfigVersion, schema};

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq)]
pub struct TrackStatistics {
    pub average_review_score: Option<f64>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct TrackTag {
    pub value: String,
}

/// A learning module published by the team.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub slug: String,
    pub icon: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub teaser: Option<String>,
    pub level: Option<String>,
    pub embed_token: Option<String>,
    pub created_at: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
    pub last_update: Option<DateTime>,
    pub statistics: Option<TrackStatistics>,
    pub track_tags: Vec<TrackTag>,
}

/// A track as seen by one user's run through it.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq)]
#[cynic(graphql_type = "Track")]
pub struct SandboxTrack {
    pub id: String,
    pub slug: String,
    pub icon: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub teaser: Option<String>,
    pub level: Option<String>,
    pub embed_token: Option<String>,
    pub created_at: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
    pub last_update: Option<DateTime>,
    pub statistics: Option<TrackStatistics>,
    pub track_tags: Vec<TrackTag>,
    pub status: Option<String>,
    pub started: Option<DateTime>,
    pub completed: Option<DateTime>,
    pub participant: Option<UserRef>,
    pub sandbox_config: Option<SandboxConfigVersion>,
}

/// A track together with the data fetched by follow-up calls.
///
/// `challenges` and `reviews` stay empty unless requested through
/// [`QueryOptions`](crate::QueryOptions).
#[derive(Clone, Debug, PartialEq)]
pub struct TrackDetails<T = Track> {
    pub track: T,
    pub challenges: Vec<Challenge>,
    pub reviews: TrackReviews,
}

impl<T> From<T> for TrackDetails<T> {
    fn from(track: T) -> Self {
        Self {
            track,
            challenges: Vec::new(),
            reviews: TrackReviews::default(),
        }
    }
}

#[derive(cynic::QueryVariables, Debug)]
pub struct TrackByIdVariables {
    pub track_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "TrackByIdVariables")]
pub struct QueryTrackById {
    #[arguments(trackID: $track_id)]
    pub track: Option<Track>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct UserTrackVariables {
    pub track_id: String,
    pub user_id: String,
    pub organization_slug: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "UserTrackVariables")]
pub struct QueryUserTrack {
    #[arguments(trackID: $track_id, userID: $user_id, organizationSlug: $organization_slug)]
    pub track: Option<SandboxTrack>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct TrackBySlugVariables {
    pub track_slug: String,
    pub team_slug: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "TrackBySlugVariables")]
pub struct QueryTrackBySlug {
    #[arguments(trackSlug: $track_slug, teamSlug: $team_slug)]
    pub track: Option<Track>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct TracksVariables {
    pub organization_slug: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "TracksVariables")]
pub struct QueryTracks {
    #[arguments(organizationSlug: $organization_slug)]
    pub tracks: Vec<Track>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct GenerateTokenVariables {
    pub track_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "GenerateTokenVariables")]
pub struct MutationGenerateOneTimePlayToken {
    #[arguments(trackID: $track_id)]
    pub generate_one_time_play_token: String,
}
