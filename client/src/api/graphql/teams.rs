use super::schema;

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// PEM encoded key used to encrypt PII sent to the third-party gateway.
    pub tpg_public_key: String,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct TeamVariables {
    pub team_slug: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "TeamVariables")]
pub struct QueryTeam {
    #[arguments(teamSlug: $team_slug)]
    pub team: Option<Team>,
}
