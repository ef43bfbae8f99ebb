//! REST transport for the hosted assignment store
//!
//! Speaks the PostgREST dialect of the hosted database. Row-level
//! security scopes every query to the bearer token's user, so no owner
//! filter is sent explicitly; the owner column is only stamped on
//! inserts. Mutations request `return=representation` so a vanished id
//! shows up as an empty result set rather than a silent no-op.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};

use crate::core::models::{Assignment, NewAssignment};
use crate::core::ports::AssignmentStore;
use crate::error::Error;

/// Path of the assignments table under the REST root
const TABLE_PATH: &str = "/rest/v1/assignments";

/// HTTP client for the hosted store
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: String,
    user_id: String,
}

impl RestStore {
    /// Create a transport against the given store endpoint.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, access_token: &str, user_id: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: access_token.to_string(),
            user_id: user_id.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TABLE_PATH)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.api_key).bearer_auth(&self.access_token)
    }

    async fn expect_rows(response: Response) -> Result<Vec<Assignment>, Error> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::store_unavailable(format!("store returned {status}")));
        }
        response
            .json()
            .await
            .map_err(|err| Error::store_unavailable(format!("malformed store response: {err}")))
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::store_unavailable(err.to_string())
}

#[async_trait]
impl AssignmentStore for RestStore {
    async fn fetch_all(&self) -> Result<Vec<Assignment>, Error> {
        debug!("GET {}", self.endpoint());
        let request = self
            .client
            .get(self.endpoint())
            .query(&[("select", "*"), ("order", "due_date.asc")]);
        let response = self.authorize(request).send().await.map_err(transport)?;
        Self::expect_rows(response).await
    }

    async fn insert(&self, new: &NewAssignment) -> Result<Assignment, Error> {
        debug!("POST {}", self.endpoint());
        let body = serde_json::json!([{
            "name": new.name,
            "class_name": new.class_name,
            "due_date": new.due_at,
            "user_id": self.user_id,
        }]);
        let request = self
            .client
            .post(self.endpoint())
            .header("Prefer", "return=representation")
            .json(&body);
        let response = self.authorize(request).send().await.map_err(transport)?;
        let mut rows = Self::expect_rows(response).await?;
        rows.pop()
            .ok_or_else(|| Error::store_unavailable("store returned no row for insert"))
    }

    async fn set_completed(&self, id: &str, completed: bool) -> Result<Assignment, Error> {
        debug!("PATCH {} id={id}", self.endpoint());
        let request = self
            .client
            .patch(self.endpoint())
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "completed": completed }));
        let response = self.authorize(request).send().await.map_err(transport)?;
        let mut rows = Self::expect_rows(response).await?;
        rows.pop().ok_or_else(|| Error::not_found(id))
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!("DELETE {} id={id}", self.endpoint());
        let request = self
            .client
            .delete(self.endpoint())
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation");
        let response = self.authorize(request).send().await.map_err(transport)?;
        let rows = Self::expect_rows(response).await?;
        if rows.is_empty() {
            return Err(Error::not_found(id));
        }
        Ok(())
    }
}
