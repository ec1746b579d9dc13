use super::{DateTime, UserRef, schema};

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentVariable {
    pub key: String,
    pub value: String,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct RuntimeParameters {
    pub environment_variables: Vec<EnvironmentVariable>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct TrackInviteClaim {
    pub id: String,
    pub user: Option<UserRef>,
    pub claimed_at: Option<DateTime>,
}

/// A shareable invitation granting access to tracks.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct TrackInvite {
    pub id: String,
    pub public_title: Option<String>,
    pub runtime_parameters: Option<RuntimeParameters>,
    pub claims: Vec<TrackInviteClaim>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct InviteVariables {
    pub invite_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "InviteVariables")]
pub struct QueryTrackInvite {
    #[arguments(inviteID: $invite_id)]
    pub track_invite: Option<TrackInvite>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct InvitesVariables {
    pub team_slug: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "InvitesVariables")]
pub struct QueryTrackInvites {
    #[arguments(teamSlug: $team_slug)]
    pub track_invites: Vec<TrackInvite>,
}
