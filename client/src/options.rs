use crate::api::types::{OrderDirection, PlayReportOrderBy, PlayType};

/// Ordering applied to play reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, smart_default::SmartDefault)]
pub struct Ordering {
    #[default(PlayReportOrderBy::CompletionPercent)]
    pub order_by: PlayReportOrderBy,
    #[default(OrderDirection::Desc)]
    pub direction: OrderDirection,
}

/// Shapes the queries issued by the resource methods of
/// [`InstruqtClient`](crate::InstruqtClient).
///
/// Values are immutable once built; every `with_*` method consumes the options
/// and returns an updated copy:
///
/// ```
/// use instruqt_client::{QueryOptions, api::types::PlayType};
///
/// let opts = QueryOptions::default()
///     .with_track_ids(["t1", "t2"])
///     .with_play_type(PlayType::Developer);
///
/// assert_eq!(opts.track_ids(), ["t1", "t2"]);
/// assert!(!opts.include_challenges());
/// ```
///
/// Each method only reads the options relevant to it and ignores the rest.
#[derive(Clone, Debug, PartialEq, Eq, smart_default::SmartDefault)]
pub struct QueryOptions {
    include_challenges: bool,
    include_reviews: bool,
    include_play: bool,
    include_assignment: bool,
    track_ids: Vec<String>,
    track_invite_ids: Vec<String>,
    landing_page_ids: Vec<String>,
    tags: Vec<String>,
    user_ids: Vec<String>,
    #[default(PlayType::All)]
    play_type: PlayType,
    ordering: Ordering,
    state: Option<String>,
    pool_ids: Vec<String>,
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl QueryOptions {
    /// Fetches the challenges of each returned track in a follow-up call.
    pub fn with_challenges(mut self) -> Self {
        self.include_challenges = true;
        self
    }

    /// Fetches the reviews of each returned track in a follow-up call.
    pub fn with_reviews(mut self) -> Self {
        self.include_reviews = true;
        self
    }

    /// Requests the play that produced each review.
    pub fn with_play(mut self) -> Self {
        self.include_play = true;
        self
    }

    /// Fetches the assignment text of a challenge in a follow-up call.
    pub fn with_assignment(mut self) -> Self {
        self.include_assignment = true;
        self
    }

    pub fn with_track_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.track_ids = collect(ids);
        self
    }

    pub fn with_track_invite_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.track_invite_ids = collect(ids);
        self
    }

    pub fn with_landing_page_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.landing_page_ids = collect(ids);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = collect(tags);
        self
    }

    pub fn with_user_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_ids = collect(ids);
        self
    }

    /// Replaces the default [`PlayType::All`] filter.
    pub fn with_play_type(mut self, play_type: PlayType) -> Self {
        self.play_type = play_type;
        self
    }

    pub fn with_ordering(mut self, order_by: PlayReportOrderBy, direction: OrderDirection) -> Self {
        self.ordering = Ordering { order_by, direction };
        self
    }

    /// Restricts sandboxes to the given state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Restricts sandboxes to the given hot-start pools.
    pub fn with_pool_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pool_ids = collect(ids);
        self
    }

    pub fn include_challenges(&self) -> bool {
        self.include_challenges
    }

    pub fn include_reviews(&self) -> bool {
        self.include_reviews
    }

    pub fn include_play(&self) -> bool {
        self.include_play
    }

    pub fn include_assignment(&self) -> bool {
        self.include_assignment
    }

    pub fn track_ids(&self) -> &[String] {
        &self.track_ids
    }

    pub fn track_invite_ids(&self) -> &[String] {
        &self.track_invite_ids
    }

    pub fn landing_page_ids(&self) -> &[String] {
        &self.landing_page_ids
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn user_ids(&self) -> &[String] {
        &self.user_ids
    }

    pub fn play_type(&self) -> PlayType {
        self.play_type
    }

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn pool_ids(&self) -> &[String] {
        &self.pool_ids
    }
}
