use super::{DateTime, schema};

/// The play a review was left on.
#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
pub struct Play {
    pub id: String,
    pub started_at: Option<DateTime>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
#[cynic(graphql_type = "TrackReview")]
pub struct BaseReview {
    pub id: String,
    pub score: i32,
    pub content: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

#[derive(cynic::QueryFragment, Debug, Clone, PartialEq, Eq)]
#[cynic(graphql_type = "TrackReview")]
pub struct ReviewWithPlay {
    pub id: String,
    pub score: i32,
    pub content: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
    pub play: Option<Play>,
}

/// A track review, regardless of which shape it was fetched with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    pub score: i32,
    pub content: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
    /// Only set when the review was fetched with [`QueryOptions::with_play`](crate::QueryOptions::with_play).
    pub play: Option<Play>,
}

impl From<BaseReview> for Review {
    fn from(value: BaseReview) -> Self {
        Self {
            id: value.id,
            score: value.score,
            content: value.content,
            created_at: value.created_at,
            updated_at: value.updated_at,
            play: None,
        }
    }
}

impl From<ReviewWithPlay> for Review {
    fn from(value: ReviewWithPlay) -> Self {
        Self {
            id: value.id,
            score: value.score,
            content: value.content,
            created_at: value.created_at,
            updated_at: value.updated_at,
            play: value.play,
        }
    }
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "TrackReviewConnection")]
pub struct BaseReviewConnection {
    pub total_count: i32,
    pub nodes: Vec<BaseReview>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "TrackReviewConnection")]
pub struct ReviewWithPlayConnection {
    pub total_count: i32,
    pub nodes: Vec<ReviewWithPlay>,
}

/// One page of a track's reviews with the overall count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackReviews {
    pub total_count: i32,
    pub nodes: Vec<Review>,
}

impl From<BaseReviewConnection> for TrackReviews {
    fn from(value: BaseReviewConnection) -> Self {
        Self {
            total_count: value.total_count,
            nodes: value.nodes.into_iter().map(Review::from).collect(),
        }
    }
}

impl From<ReviewWithPlayConnection> for TrackReviews {
    fn from(value: ReviewWithPlayConnection) -> Self {
        Self {
            total_count: value.total_count,
            nodes: value.nodes.into_iter().map(Review::from).collect(),
        }
    }
}

#[derive(cynic::QueryVariables, Debug)]
pub struct TrackReviewsVariables {
    pub track_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "TrackReviewsVariables")]
pub struct QueryTrackReviews {
    #[arguments(trackID: $track_id)]
    pub track_reviews: BaseReviewConnection,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "TrackReviewsVariables")]
pub struct QueryTrackReviewsWithPlay {
    #[arguments(trackID: $track_id)]
    pub track_reviews: ReviewWithPlayConnection,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct ReviewVariables {
    pub review_id: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "ReviewVariables")]
pub struct QueryReview {
    #[arguments(reviewID: $review_id)]
    pub track_review: Option<BaseReview>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "ReviewVariables")]
pub struct QueryReviewWithPlay {
    #[arguments(reviewID: $review_id)]
    pub track_review: Option<ReviewWithPlay>,
}
