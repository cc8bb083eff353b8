use super::TimeTracking;
use crate::libs::error::{Result, WorkbookError};
use crate::libs::worklog::WorklogEntry;
use crate::msg_debug;
use chrono::{NaiveDate, NaiveTime};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Response,
};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.tempo.io/core/3";
const WORKLOGS_URL: &str = "worklogs";
const USER_WORKLOGS_URL: &str = "worklogs/user";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize, Debug)]
struct TempoWorklogPage {
    #[serde(default)]
    results: Option<Vec<TempoWorklog>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TempoWorklog {
    tempo_worklog_id: u64,
    issue: TempoIssue,
    time_spent_seconds: u64,
    start_date: NaiveDate,
    start_time: NaiveTime,
    author: TempoAuthor,
}

#[derive(Deserialize, Debug)]
struct TempoIssue {
    key: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TempoAuthor {
    account_id: String,
}

impl From<TempoWorklog> for WorklogEntry {
    fn from(worklog: TempoWorklog) -> Self {
        Self {
            issue_key: worklog.issue.key,
            time_spent_seconds: worklog.time_spent_seconds,
            start_date: worklog.start_date,
            start_time: worklog.start_time,
            author_account_id: worklog.author.account_id,
            tempo_worklog_id: Some(worklog.tempo_worklog_id),
        }
    }
}

#[derive(Debug)]
pub struct Tempo {
    client: Client,
    config: TempoConfig,
}

impl Tempo {
    pub fn new(config: &TempoConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| WorkbookError::Validation("the API key contains characters not allowed in a header".to_string()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    async fn error_body(res: Response) -> String {
        res.text().await.unwrap_or_default()
    }
}

impl TimeTracking for Tempo {
    async fn find_worklogs(&self, date: NaiveDate) -> Result<Vec<WorklogEntry>> {
        let day = date.format(DATE_FORMAT).to_string();
        let url = self.url(&format!("{}/{}", USER_WORKLOGS_URL, self.config.account_id));
        msg_debug!(format!("GET {} for {}", url, day));

        let res = self.client.get(&url).query(&[("from", &day), ("to", &day)]).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = Self::error_body(res).await;
            return Err(WorkbookError::remote(format!("fetching worklogs for {}", day), status, body));
        }

        let page = res.json::<TempoWorklogPage>().await?;
        let mut entries: Vec<WorklogEntry> = page.results.unwrap_or_default().into_iter().map(WorklogEntry::from).collect();
        entries.sort_by_key(|entry| entry.start_time);
        Ok(entries)
    }

    async fn create_worklog(&self, entry: &WorklogEntry) -> Result<()> {
        let url = self.url(WORKLOGS_URL);
        msg_debug!(format!("POST {} {:?}", url, entry));

        let res = self.client.post(&url).json(entry).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = Self::error_body(res).await;
            return Err(WorkbookError::remote(
                format!(
                    "creating worklog {} on {} at {} ({}s)",
                    entry.issue_key, entry.start_date, entry.start_time, entry.time_spent_seconds
                ),
                status,
                body,
            ));
        }
        Ok(())
    }

    async fn delete_worklog(&self, worklog_id: u64) -> Result<()> {
        let url = self.url(&format!("{}/{}", WORKLOGS_URL, worklog_id));
        msg_debug!(format!("DELETE {}", url));

        let res = self.client.delete(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = Self::error_body(res).await;
            return Err(WorkbookError::remote(format!("deleting worklog {}", worklog_id), status, body));
        }
        Ok(())
    }
}

/// Connection settings for one Tempo account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TempoConfig {
    pub api_url: String,
    pub api_key: String,
    pub account_id: String,
}

impl TempoConfig {
    pub fn new(api_key: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            account_id: account_id.into(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
