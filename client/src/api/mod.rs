pub(crate) mod graphql;

/// Request and response shapes of the Instruqt GraphQL API.
pub mod types {
    pub use super::graphql::{
        DateTime, InviteRef, TrackRef, UserRef,
        challenges::{
            Challenge, ChallengeAssignment, ChallengeAttempt, ChallengeDetails, ChallengeRef, ChallengeVariables,
            ChallengesVariables, MutationSkipToChallenge, PLAYABLE_CHALLENGE_STATUSES, QueryChallenge,
            QueryChallengeAssignment, QueryChallenges, QueryUserChallenge, SkipToChallengeVariables,
            UserChallengeVariables,
        },
        invites::{
            EnvironmentVariable, InviteVariables, InvitesVariables, QueryTrackInvite, QueryTrackInvites,
            RuntimeParameters, TrackInvite, TrackInviteClaim,
        },
        plays::{
            CustomParameter, DateRangeFilter, OrderDirection, Pagination, PlayActivity, PlayReport, PlayReportInput,
            PlayReportOrderBy, PlayReportOrdering, PlayReports, PlayReportsVariables, PlayReview, PlayType,
            QueryPlayReports,
        },
        reviews::{
            BaseReview, BaseReviewConnection, Play, QueryReview, QueryReviewWithPlay, QueryTrackReviews,
            QueryTrackReviewsWithPlay, Review, ReviewVariables, ReviewWithPlay, ReviewWithPlayConnection,
            TrackReviews, TrackReviewsVariables,
        },
        sandboxes::{
            HotStartPool, HotStartPoolConfigEdge, HotStartPoolTrackEdge, HotStartPoolType, HotStartPoolsVariables,
            HotStartStatus, QueryHotStartPools, QuerySandbox, QuerySandboxVariable, QuerySandboxes, Sandbox,
            SandboxConfig, SandboxConfigVersion, SandboxConfigVersionStatus, SandboxConnection, SandboxVariable,
            SandboxVariableVariables, SandboxVariables, SandboxesVariables,
        },
        teams::{QueryTeam, Team, TeamVariables},
        tracks::{
            GenerateTokenVariables, MutationGenerateOneTimePlayToken, QueryTrackById, QueryTrackBySlug, QueryTracks,
            QueryUserTrack, SandboxTrack, Track, TrackByIdVariables, TrackBySlugVariables, TrackDetails,
            TrackStatistics, TrackTag, TracksVariables, UserTrackVariables,
        },
        users::{QueryUserInfo, UserDetails, UserInfo, UserInfoVariables, UserProfile, UserWithDetails},
    };
}
