pub mod challenges;
pub mod invites;
pub mod plays;
pub mod reviews;
pub mod sandboxes;
pub mod teams;
pub mod tracks;
pub mod users;

#[cynic::schema("instruqt")]
pub(crate) mod schema {}

/// Timestamps are RFC 3339 strings on the wire.
pub type DateTime = chrono::DateTime<chrono::Utc>;

cynic::impl_scalar!(DateTime, schema::DateTime);

/// Back-reference to a track from another resource.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
#[cynic(graphql_type = "Track")]
pub struct TrackRef {
    pub id: String,
    pub slug: String,
    pub title: String,
}

/// Back-reference to an invite from another resource.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
#[cynic(graphql_type = "TrackInvite")]
pub struct InviteRef {
    pub id: String,
    pub public_title: Option<String>,
}

/// Back-reference to a user from another resource.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
#[cynic(graphql_type = "User")]
pub struct UserRef {
    pub id: String,
    pub profile: Option<users::UserProfile>,
}
