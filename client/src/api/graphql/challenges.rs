use super::{DateTime, TrackRef, schema};

/// Challenge statuses a user can currently play.
pub const PLAYABLE_CHALLENGE_STATUSES: [&str; 4] = ["unlocked", "creating", "created", "started"];

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct ChallengeAttempt {
    pub message: Option<String>,
    pub timestamp: Option<DateTime>,
}

/// One step of a track.
///
/// `status` and `attempts` are only populated when the challenge is fetched
/// on behalf of a user.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub teaser: Option<String>,
    pub index: i32,
    pub status: Option<String>,
    pub track: Option<TrackRef>,
    pub attempts: Vec<ChallengeAttempt>,
}

impl Challenge {
    /// Whether the status is one of [`PLAYABLE_CHALLENGE_STATUSES`].
    pub fn is_playable(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| PLAYABLE_CHALLENGE_STATUSES.contains(&status))
    }
}

/// A challenge with its assignment text, when requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeDetails {
    pub challenge: Challenge,
    pub assignment: Option<String>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
#[cynic(graphql_type = "Challenge")]
pub struct ChallengeAssignment {
    pub assignment: Option<String>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
#[cynic(graphql_type = "Challenge")]
pub struct ChallengeRef {
    pub id: String,
    pub status: Option<String>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct ChallengesVariables {
    pub track_id: String,
    pub team_slug: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "ChallengesVariables")]
pub struct QueryChallenges {
    #[arguments(trackID: $track_id, teamSlug: $team_slug)]
    pub challenges: Vec<Challenge>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct ChallengeVariables {
    pub challenge_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "ChallengeVariables")]
pub struct QueryChallenge {
    #[arguments(challengeID: $challenge_id)]
    pub challenge: Option<Challenge>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "ChallengeVariables")]
pub struct QueryChallengeAssignment {
    #[arguments(challengeID: $challenge_id)]
    pub challenge: Option<ChallengeAssignment>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct UserChallengeVariables {
    pub challenge_id: String,
    pub user_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "UserChallengeVariables")]
pub struct QueryUserChallenge {
    #[arguments(challengeID: $challenge_id, userID: $user_id)]
    pub challenge: Option<Challenge>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct SkipToChallengeVariables {
    pub track_id: String,
    pub challenge_id: String,
    pub user_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "SkipToChallengeVariables")]
pub struct MutationSkipToChallenge {
    #[arguments(trackID: $track_id, challengeID: $challenge_id, userID: $user_id)]
    pub skip_to_challenge: ChallengeRef,
}
