use super::{DateTime, InviteRef, TrackRef, UserRef, schema};

/// Kind of play to include in play reports.
#[derive(cynic::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayType {
    #[cynic(rename = "ALL")]
    All,
    #[cynic(rename = "DEVELOPER")]
    Developer,
    #[cynic(rename = "NORMAL")]
    Normal,
}

#[derive(cynic::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayReportOrderBy {
    #[cynic(rename = "completion_percent")]
    CompletionPercent,
    #[cynic(rename = "time_spent")]
    TimeSpent,
}

#[derive(cynic::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    #[cynic(rename = "Asc")]
    Asc,
    #[cynic(rename = "Desc")]
    Desc,
}

#[derive(cynic::InputObject, Debug, Clone, PartialEq, Eq)]
#[cynic(rename_all = "camelCase")]
pub struct DateRangeFilter {
    pub from: DateTime,
    pub to: DateTime,
}

#[derive(cynic::InputObject, Debug, Clone, PartialEq, Eq)]
#[cynic(rename_all = "camelCase")]
pub struct Pagination {
    pub skip: i32,
    pub take: i32,
}

#[derive(cynic::InputObject, Debug, Clone, PartialEq, Eq)]
#[cynic(rename_all = "camelCase")]
pub struct PlayReportOrdering {
    pub order_by: PlayReportOrderBy,
    pub direction: OrderDirection,
}

/// Filter forwarded verbatim to the `playReports` query.
///
/// List filters are always sent as lists, an empty list meaning "no filter".
#[derive(cynic::InputObject, Debug, Clone, PartialEq, Eq)]
#[cynic(rename_all = "camelCase")]
pub struct PlayReportInput {
    pub team_slug: String,
    pub date_range_filter: DateRangeFilter,
    pub track_ids: Vec<String>,
    pub track_invite_ids: Vec<String>,
    pub landing_page_ids: Vec<String>,
    pub tags: Vec<String>,
    pub user_ids: Vec<String>,
    pub pagination: Pagination,
    pub play_type: PlayType,
    pub ordering: PlayReportOrdering,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct PlayActivity {
    pub time: Option<DateTime>,
    pub message: String,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct CustomParameter {
    pub key: String,
    pub value: String,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct PlayReview {
    pub id: String,
    pub score: i32,
    pub content: Option<String>,
}

/// One user's pass through a track.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq)]
pub struct PlayReport {
    pub id: String,
    pub track: Option<TrackRef>,
    pub track_invite: Option<InviteRef>,
    pub user: Option<UserRef>,
    pub completion_percent: f64,
    pub total_challenges: i32,
    pub completed_challenges: i32,
    /// Seconds spent in the play.
    pub time_spent: i32,
    pub stopped_reason: Option<String>,
    pub mode: String,
    pub started_at: Option<DateTime>,
    pub activity: Vec<PlayActivity>,
    pub play_review: Option<PlayReview>,
    pub custom_parameters: Vec<CustomParameter>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq)]
#[cynic(graphql_type = "PlayReportConnection")]
pub struct PlayReports {
    pub items: Vec<PlayReport>,
    pub total_items: i32,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct PlayReportsVariables {
    pub input: PlayReportInput,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "PlayReportsVariables")]
pub struct QueryPlayReports {
    #[arguments(input: $input)]
    pub play_reports: PlayReports,
}
