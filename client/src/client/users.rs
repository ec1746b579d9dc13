use cynic::QueryBuilder;

use super::{GraphQlExecutor, InstruqtClient};
use crate::{
    api::types::*,
    errors::{OperationContext, Result},
};

fn has_email(email: &Option<String>) -> bool {
    email.as_deref().is_some_and(|email| !email.is_empty())
}

/// Team details win when they carry an email, the profile is the fallback.
fn resolve_user_info(user: UserWithDetails) -> UserInfo {
    if let Some(details) = user.details.filter(|details| has_email(&details.email)) {
        tracing::info!(user_id = %user.id, "found user info in team details");
        return UserInfo {
            first_name: details.first_name.unwrap_or_default(),
            last_name: details.last_name.unwrap_or_default(),
            email: details.email.unwrap_or_default(),
        };
    }

    if let Some(profile) = user.profile.filter(|profile| has_email(&profile.email)) {
        tracing::info!(user_id = %user.id, "found user info in user profile");
        let display_name = profile.display_name.unwrap_or_default();
        let mut names = display_name.split_whitespace();
        return UserInfo {
            first_name: names.next().unwrap_or_default().to_owned(),
            last_name: names.collect::<Vec<_>>().join(" "),
            email: profile.email.unwrap_or_default(),
        };
    }

    UserInfo::default()
}

impl<E: GraphQlExecutor> InstruqtClient<E> {
    /// Resolves the name and email of a user.
    ///
    /// Returns an empty [`UserInfo`] when neither the team details nor the
    /// profile of the user carry an email.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_user_info(&self, user_id: &str) -> Result<UserInfo> {
        if user_id.is_empty() {
            return Ok(UserInfo::default());
        }

        let resp = self
            .executor
            .query(QueryUserInfo::build(UserInfoVariables {
                user_id: user_id.into(),
                team_slug: self.team_slug.clone(),
            }))
            .await
            .context("get_user_info")?;

        Ok(resp.user.map(resolve_user_info).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::MockExecutor;

    fn user(details_email: Option<&str>, display_name: &str, profile_email: Option<&str>) -> UserWithDetails {
        UserWithDetails {
            id: "u1".into(),
            details: Some(UserDetails {
                first_name: Some("Grace".into()),
                last_name: Some("Hopper".into()),
                email: details_email.map(Into::into),
                company: None,
                job_title: None,
                job_level: None,
                consent: Some(true),
            }),
            profile: Some(UserProfile {
                display_name: Some(display_name.into()),
                email: profile_email.map(Into::into),
            }),
        }
    }

    #[test]
    fn details_win_when_they_have_an_email() {
        let info = resolve_user_info(user(Some("grace@example.com"), "Amazing Grace", Some("g@example.com")));

        assert_eq!(
            UserInfo {
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                email: "grace@example.com".into(),
            },
            info
        );
    }

    #[test]
    fn profile_name_is_split_on_whitespace() {
        let info = resolve_user_info(user(Some(""), "  Mary  Ann   Smith ", Some("mary@example.com")));

        assert_eq!("Mary", info.first_name);
        assert_eq!("Ann Smith", info.last_name);
        assert_eq!("mary@example.com", info.email);
    }

    #[test]
    fn single_word_display_name_has_empty_last_name() {
        let info = resolve_user_info(user(None, "Prince", Some("prince@example.com")));

        assert_eq!("Prince", info.first_name);
        assert_eq!("", info.last_name);
    }

    #[test]
    fn no_email_anywhere_yields_empty_info() {
        assert_eq!(UserInfo::default(), resolve_user_info(user(None, "Nobody", Some(""))));
    }

    #[tokio::test]
    async fn user_info_is_team_scoped() -> anyhow::Result<()> {
        let executor = MockExecutor::new().with_data(json!({
            "user": {
                "id": "u1",
                "details": null,
                "profile": { "displayName": "Ada Lovelace", "email": "ada@example.com" }
            }
        }));
        let client = InstruqtClient::with_executor(executor.clone(), "acme");

        let info = client.get_user_info("u1").await?;

        assert_eq!("Ada", info.first_name);
        assert_eq!("Lovelace", info.last_name);
        assert_eq!(json!("acme"), executor.operations()[0].variables["teamSlug"]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_user_id_short_circuits() -> anyhow::Result<()> {
        let executor = MockExecutor::new();
        let client = InstruqtClient::with_executor(executor.clone(), "acme");

        assert_eq!(UserInfo::default(), client.get_user_info("").await?);
        assert_eq!(0, executor.call_count());
        Ok(())
    }
}
