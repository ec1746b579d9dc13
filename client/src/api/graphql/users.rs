use super::schema;

/// Platform-wide profile of a user.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

/// Team-scoped details of a user.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub job_level: Option<String>,
    pub consent: Option<bool>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct UserInfoVariables {
    pub user_id: String,
    pub team_slug: String,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
#[cynic(graphql_type = "User", variables = "UserInfoVariables")]
pub struct UserWithDetails {
    pub id: String,
    #[arguments(teamSlug: $team_slug)]
    pub details: Option<UserDetails>,
    pub profile: Option<UserProfile>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "UserInfoVariables")]
pub struct QueryUserInfo {
    #[arguments(userID: $user_id)]
    pub user: Option<UserWithDetails>,
}

/// Name and email of a user, resolved from either of its detail sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
