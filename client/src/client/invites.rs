use cynic::QueryBuilder;

use super::{GraphQlExecutor, InstruqtClient};
use crate::{
    api::types::*,
    errors::{OperationContext, Result},
};

impl<E: GraphQlExecutor> InstruqtClient<E> {
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_invite(&self, invite_id: &str) -> Result<Option<TrackInvite>> {
        if invite_id.is_empty() {
            return Ok(None);
        }

        self.executor
            .query(QueryTrackInvite::build(InviteVariables {
                invite_id: invite_id.into(),
            }))
            .await
            .map(|resp| resp.track_invite)
            .context("get_invite")
    }

    /// Lists all invites of the team.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_invites(&self) -> Result<Vec<TrackInvite>> {
        self.executor
            .query(QueryTrackInvites::build(InvitesVariables {
                team_slug: self.team_slug.clone(),
            }))
            .await
            .map(|resp| resp.track_invites)
            .context("get_invites")
    }
}
