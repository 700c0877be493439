//! Blocking HTTP client for the mite REST API.

use super::wire::{ProjectEnvelope, ServiceEnvelope, TimeEntryEnvelope, TimeEntryPayload};
use super::{EntryCommand, EntryQuery, NamedRef, SortDirection, TimeStore, UserFilter};
use crate::errors::{AppError, AppResult};
use crate::models::{TimeEntry, TimeEntryId};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue};

const API_KEY_HEADER: &str = "x-miteapikey";

pub struct MiteClient {
    http: Client,
    base_url: String,
}

impl MiteClient {
    pub fn new(base_url: &str, token: &str) -> AppResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(AppError::Config("mite url is empty".to_string()));
        }

        let mut key = HeaderValue::from_str(token.trim())
            .map_err(|_| AppError::Config("mite token contains invalid characters".to_string()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = Client::builder()
            .user_agent(concat!("mighty/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Pass 2xx responses through, turn everything else into `RemoteStatus`.
fn check(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(AppError::RemoteStatus {
        status: status.as_u16(),
        body,
    })
}

impl TimeStore for MiteClient {
    fn list_entries(&self, query: &EntryQuery) -> AppResult<Vec<TimeEntry>> {
        let user = match query.user {
            UserFilter::Current => "current".to_string(),
            UserFilter::Id(id) => id.to_string(),
        };
        let direction = match query.sort.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };

        let mut params = vec![
            ("user_id", user),
            ("from", query.range.from.to_string()),
            ("to", query.range.to.to_string()),
        ];
        if query.sort.by_date {
            params.push(("sort", "date".to_string()));
            params.push(("direction", direction.to_string()));
        }

        tracing::debug!("GET time_entries {:?}", params);
        let response = self
            .http
            .get(self.url("time_entries.json"))
            .query(&params)
            .send()?;

        check(response)?
            .json::<Vec<TimeEntryEnvelope>>()?
            .into_iter()
            .map(|e| e.time_entry.into_entry())
            .collect()
    }

    fn create_entry(&self, command: &EntryCommand) -> AppResult<TimeEntry> {
        let response = self
            .http
            .post(self.url("time_entries.json"))
            .json(&TimeEntryPayload::new(command))
            .send()?;

        check(response)?
            .json::<TimeEntryEnvelope>()?
            .time_entry
            .into_entry()
    }

    fn edit_entry(&self, id: TimeEntryId, command: &EntryCommand) -> AppResult<()> {
        let response = self
            .http
            .patch(self.url(&format!("time_entries/{id}.json")))
            .json(&TimeEntryPayload::new(command))
            .send()?;

        check(response)?;
        Ok(())
    }

    fn delete_entry(&self, id: TimeEntryId) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("time_entries/{id}.json")))
            .send()?;

        check(response)?;
        Ok(())
    }

    fn list_projects(&self) -> AppResult<Vec<NamedRef>> {
        let response = self.http.get(self.url("projects.json")).send()?;
        Ok(check(response)?
            .json::<Vec<ProjectEnvelope>>()?
            .into_iter()
            .map(|p| p.project.into())
            .collect())
    }

    fn list_services(&self) -> AppResult<Vec<NamedRef>> {
        let response = self.http.get(self.url("services.json")).send()?;
        Ok(check(response)?
            .json::<Vec<ServiceEnvelope>>()?
            .into_iter()
            .map(|s| s.service.into())
            .collect())
    }
}
