use cynic::QueryBuilder;

use super::{GraphQlExecutor, InstruqtClient};
use crate::{
    QueryOptions,
    api::types::*,
    errors::{OperationContext, Result},
};

/// Host sandbox variables are read from.
const SANDBOX_VARIABLE_HOST: &str = "server";

impl<E: GraphQlExecutor> InstruqtClient<E> {
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_sandbox(&self, sandbox_id: &str) -> Result<Option<Sandbox>> {
        if sandbox_id.is_empty() {
            return Ok(None);
        }

        self.executor
            .query(QuerySandbox::build(SandboxVariables {
                sandbox_id: sandbox_id.into(),
            }))
            .await
            .map(|resp| resp.sandbox)
            .context("get_sandbox")
    }

    /// Lists the team's sandboxes, optionally filtered by state and hot-start pools.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn get_sandboxes(&self, options: &QueryOptions) -> Result<Vec<Sandbox>> {
        self.executor
            .query(QuerySandboxes::build(SandboxesVariables {
                team_slug: self.team_slug.clone(),
                state: options.state().map(str::to_owned),
                pool_ids: options.pool_ids().to_vec(),
            }))
            .await
            .map(|resp| resp.sandboxes.nodes)
            .context("get_sandboxes")
    }

    /// Reads a variable set on the `server` host of a sandbox.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_sandbox_variable(&self, sandbox_id: &str, key: &str) -> Result<Option<String>> {
        if sandbox_id.is_empty() || key.is_empty() {
            return Ok(None);
        }

        self.executor
            .query(QuerySandboxVariable::build(SandboxVariableVariables {
                sandbox_id: sandbox_id.into(),
                hostname: SANDBOX_VARIABLE_HOST.into(),
                key: key.into(),
            }))
            .await
            .map(|resp| resp.get_sandbox_variable.map(|var| var.value))
            .context("get_sandbox_variable")
    }

    /// Lists the hot-start pools of the team.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_hot_start_pools(&self) -> Result<Vec<HotStartPool>> {
        self.executor
            .query(QueryHotStartPools::build(HotStartPoolsVariables {
                team_slug: self.team_slug.clone(),
            }))
            .await
            .map(|resp| resp.hot_start_pools)
            .context("get_hot_start_pools")
    }
}
