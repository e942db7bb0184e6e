use anyhow::{bail, Result};

use crate::config::{AtlassianConfig, Config};
use crate::confluence::ConfluenceClient;
use crate::discord::DiscordClient;
use crate::github::GitHubClient;
use crate::gitlab::GitLabClient;
use crate::jira::JiraClient;
use crate::slack::SlackClient;

/// A provider client that may be missing because its credentials are not set.
pub struct OptionalClient<T> {
    service: &'static str,
    client: Option<T>,
}

impl<T> OptionalClient<T> {
    pub fn new<F>(service: &'static str, factory: F) -> Self
    where
        F: FnOnce() -> Result<Option<T>>,
    {
        let client = match factory() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Failed to create {} client: {:#}", service, e);
                None
            }
        };

        Self { service, client }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn get(&self) -> Result<&T> {
        match &self.client {
            Some(client) => Ok(client),
            None => bail!("{} not configured", self.service),
        }
    }
}

pub struct Providers {
    pub confluence: OptionalClient<ConfluenceClient>,
    pub discord: OptionalClient<DiscordClient>,
    pub github: OptionalClient<GitHubClient>,
    pub gitlab: OptionalClient<GitLabClient>,
    pub jira: OptionalClient<JiraClient>,
    pub slack: OptionalClient<SlackClient>,
}

impl Providers {
    /// Build every client whose secret is present in the environment.
    pub fn from_config(config: &Config) -> Self {
        Self::with_secrets(config, |name| std::env::var(name).ok())
    }

    pub fn with_secrets<S>(config: &Config, secret: S) -> Self
    where
        S: Fn(&str) -> Option<String>,
    {
        let timeout = config.timeout();

        let confluence = OptionalClient::new("Confluence", || {
            atlassian_parts(&config.confluence, secret("CONFLUENCE_API_TOKEN"))
                .map(|(url, user, token)| {
                    ConfluenceClient::with_timeout(url, user, &token, timeout)
                })
                .transpose()
        });

        let discord = OptionalClient::new("Discord", || {
            secret("DISCORD_BOT_TOKEN")
                .map(|token| {
                    DiscordClient::with_base_url(&config.discord.base_url, &token, timeout)
                })
                .transpose()
        });

        let github = OptionalClient::new("GitHub", || {
            secret("GITHUB_TOKEN")
                .map(|token| GitHubClient::with_base_url(&config.github.base_url, &token, timeout))
                .transpose()
        });

        let gitlab = OptionalClient::new("GitLab", || {
            secret("GITLAB_TOKEN")
                .map(|token| GitLabClient::with_timeout(&config.gitlab.base_url, &token, timeout))
                .transpose()
        });

        let jira = OptionalClient::new("Jira", || {
            atlassian_parts(&config.jira, secret("JIRA_API_TOKEN"))
                .map(|(url, user, token)| JiraClient::with_timeout(url, user, &token, timeout))
                .transpose()
        });

        let slack = OptionalClient::new("Slack", || {
            secret("SLACK_TOKEN")
                .map(|token| SlackClient::with_base_url(&config.slack.base_url, &token, timeout))
                .transpose()
        });

        Self {
            confluence,
            discord,
            github,
            gitlab,
            jira,
            slack,
        }
    }
}

fn atlassian_parts(
    config: &AtlassianConfig,
    token: Option<String>,
) -> Option<(&str, &str, String)> {
    Some((
        config.base_url.as_deref()?,
        config.username.as_deref()?,
        token?,
    ))
}
