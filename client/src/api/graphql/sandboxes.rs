use super::{DateTime, InviteRef, TrackRef, UserRef, schema};

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct SandboxConfig {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub version: i32,
    pub deleted: Option<DateTime>,
}

#[derive(cynic::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SandboxConfigVersionStatus {
    #[cynic(rename = "draft")]
    Draft,
    #[cynic(rename = "published")]
    Published,
    #[cynic(rename = "archived")]
    Archived,
    #[cynic(rename = "isolated")]
    Isolated,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct SandboxConfigVersion {
    pub id: String,
    pub config: SandboxConfig,
    pub version: i32,
    pub description: Option<String>,
    pub status: SandboxConfigVersionStatus,
    pub published_at: Option<DateTime>,
}

#[derive(cynic::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotStartPoolType {
    #[cynic(rename = "dedicated")]
    Dedicated,
    #[cynic(rename = "shared")]
    Shared,
}

#[derive(cynic::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotStartStatus {
    #[cynic(rename = "Running")]
    Running,
    #[cynic(rename = "Provisioning")]
    Provisioning,
    #[cynic(rename = "Inactive")]
    Inactive,
    #[cynic(rename = "Expired")]
    Expired,
    #[cynic(rename = "Deleted")]
    Deleted,
    #[cynic(rename = "AutoRefill")]
    AutoRefill,
}

/// Utilization of one sandbox configuration within a pool.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct HotStartPoolConfigEdge {
    pub claimed: i32,
    pub available: i32,
    pub created: i32,
    pub failed: i32,
    pub creating: i32,
    pub total: i32,
    pub node: SandboxConfig,
}

/// Utilization of one track within a pool.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct HotStartPoolTrackEdge {
    pub claimed: i32,
    pub available: i32,
    pub created: i32,
    pub failed: i32,
    pub creating: i32,
    pub total: i32,
    pub node: TrackRef,
}

/// Pre-provisioned sandboxes kept warm for faster starts.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct HotStartPool {
    pub id: String,
    #[cynic(rename = "type")]
    pub pool_type: HotStartPoolType,
    pub size: i32,
    pub created: Option<DateTime>,
    pub deleted: Option<DateTime>,
    pub name: Option<String>,
    pub auto_refill: bool,
    pub starts_at: Option<DateTime>,
    pub ends_at: Option<DateTime>,
    pub status: HotStartStatus,
    pub region: Option<String>,
    pub configs: Vec<HotStartPoolConfigEdge>,
    pub tracks: Vec<HotStartPoolTrackEdge>,
}

/// A live or historical environment backing a play.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct Sandbox {
    pub id: String,
    pub last_activity_at: Option<DateTime>,
    pub state: String,
    pub track: Option<TrackRef>,
    pub invite: Option<InviteRef>,
    pub user: Option<UserRef>,
    pub hot_start_pool: Option<HotStartPool>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct SandboxConnection {
    pub nodes: Vec<Sandbox>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct SandboxVariable {
    pub key: String,
    pub value: String,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct SandboxVariables {
    pub sandbox_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "SandboxVariables")]
pub struct QuerySandbox {
    #[arguments(ID: $sandbox_id)]
    pub sandbox: Option<Sandbox>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct SandboxesVariables {
    pub team_slug: String,
    pub state: Option<String>,
    pub pool_ids: Vec<String>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "SandboxesVariables")]
pub struct QuerySandboxes {
    #[arguments(teamSlug: $team_slug, state: $state, poolIds: $pool_ids)]
    pub sandboxes: SandboxConnection,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct SandboxVariableVariables {
    pub sandbox_id: String,
    pub hostname: String,
    pub key: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "SandboxVariableVariables")]
pub struct QuerySandboxVariable {
    #[arguments(sandboxID: $sandbox_id, hostname: $hostname, key: $key)]
    pub get_sandbox_variable: Option<SandboxVariable>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct HotStartPoolsVariables {
    pub team_slug: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "HotStartPoolsVariables")]
pub struct QueryHotStartPools {
    #[arguments(teamSlug: $team_slug)]
    pub hot_start_pools: Vec<HotStartPool>,
}
