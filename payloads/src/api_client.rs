use crate::{
    GolferId, GroupId, SessionId, ShotId, TournamentId,
    requests::{self, MAX_PAGE_SIZE, PageRequest},
    responses::{self, Paginated},
};
use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .put(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .patch(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn empty_delete(&self, path: &str) -> ReqwestResult {
        self.inner_client.delete(self.format_url(path)).send().await
    }

    async fn query_get(
        &self,
        path: &str,
        filter: &impl Serialize,
        page: &PageRequest,
    ) -> ReqwestResult {
        self.inner_client
            .get(self.format_url(path))
            .query(filter)
            .query(page)
            .send()
            .await
    }

    async fn page<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: &impl Serialize,
        page: &PageRequest,
    ) -> Result<Paginated<T>, ClientError> {
        let response = self.query_get(path, filter, page).await?;
        ok_body(response).await
    }

    /// Walk every page of a list endpoint and flatten the results.
    async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: &impl Serialize,
    ) -> Result<Vec<T>, ClientError> {
        let mut results = Vec::new();
        let mut next = Some(1);
        while let Some(page) = next {
            let body: Paginated<T> = self
                .page(path, filter, &PageRequest::new(page, MAX_PAGE_SIZE))
                .await?;
            results.extend(body.results);
            // guard against a server that keeps pointing at the same page
            next = body.next.filter(|n| *n > page);
        }
        Ok(results)
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }
}

/// Tournaments
impl APIClient {
    pub async fn list_tournaments(
        &self,
        filter: &requests::TournamentFilter,
    ) -> Result<Vec<responses::Tournament>, ClientError> {
        self.list_all("tournaments", filter).await
    }

    pub async fn tournaments_page(
        &self,
        filter: &requests::TournamentFilter,
        page: &PageRequest,
    ) -> Result<Paginated<responses::Tournament>, ClientError> {
        self.page("tournaments", filter, page).await
    }

    pub async fn get_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<responses::Tournament, ClientError> {
        let response =
            self.empty_get(&format!("tournaments/{tournament_id}")).await?;
        ok_body(response).await
    }

    /// Get a tournament along with all of its groups.
    pub async fn get_tournament_with_groups(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<responses::TournamentWithGroups, ClientError> {
        let response = self
            .empty_get(&format!("tournaments/{tournament_id}/groups"))
            .await?;
        ok_body(response).await
    }

    pub async fn create_tournament(
        &self,
        details: &crate::Tournament,
    ) -> Result<responses::Tournament, ClientError> {
        let response = self.post("tournaments", details).await?;
        ok_body(response).await
    }

    pub async fn update_tournament(
        &self,
        tournament_id: &TournamentId,
        details: &crate::Tournament,
    ) -> Result<responses::Tournament, ClientError> {
        let response = self
            .put(&format!("tournaments/{tournament_id}"), details)
            .await?;
        ok_body(response).await
    }

    /// Delete a single tournament, unassociating its groups.
    pub async fn delete_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_delete(&format!("tournaments/{tournament_id}"))
            .await?;
        ok_empty(response).await
    }

    pub async fn bulk_delete_tournaments(
        &self,
        details: &requests::BulkDelete<TournamentId>,
    ) -> Result<responses::BulkDeleteResult, ClientError> {
        let response = self.post("tournaments/bulk_delete", details).await?;
        ok_body(response).await
    }
}

/// Groups
impl APIClient {
    pub async fn list_groups(
        &self,
        filter: &requests::GroupFilter,
    ) -> Result<Vec<responses::Group>, ClientError> {
        self.list_all("groups", filter).await
    }

    pub async fn groups_page(
        &self,
        filter: &requests::GroupFilter,
        page: &PageRequest,
    ) -> Result<Paginated<responses::Group>, ClientError> {
        self.page("groups", filter, page).await
    }

    pub async fn get_group(
        &self,
        group_id: &GroupId,
    ) -> Result<responses::Group, ClientError> {
        let response = self.empty_get(&format!("groups/{group_id}")).await?;
        ok_body(response).await
    }

    /// Get a group along with its golfers.
    pub async fn get_group_with_golfers(
        &self,
        group_id: &GroupId,
    ) -> Result<responses::GroupWithGolfers, ClientError> {
        let response =
            self.empty_get(&format!("groups/{group_id}/golfers")).await?;
        ok_body(response).await
    }

    pub async fn create_group(
        &self,
        details: &crate::Group,
    ) -> Result<responses::Group, ClientError> {
        let response = self.post("groups", details).await?;
        ok_body(response).await
    }

    pub async fn update_group(
        &self,
        group_id: &GroupId,
        details: &crate::Group,
    ) -> Result<responses::Group, ClientError> {
        let response =
            self.put(&format!("groups/{group_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_group(
        &self,
        group_id: &GroupId,
    ) -> Result<(), ClientError> {
        let response = self.empty_delete(&format!("groups/{group_id}")).await?;
        ok_empty(response).await
    }

    pub async fn bulk_delete_groups(
        &self,
        details: &requests::BulkDelete<GroupId>,
    ) -> Result<responses::BulkDeleteResult, ClientError> {
        let response = self.post("groups/bulk_delete", details).await?;
        ok_body(response).await
    }

    /// Move golfers into a group, failing if it would exceed capacity.
    pub async fn assign_golfers(
        &self,
        group_id: &GroupId,
        details: &requests::GolferIds,
    ) -> Result<responses::GroupAssignmentResult, ClientError> {
        let response = self
            .post(&format!("groups/{group_id}/assign_golfers"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn remove_golfers(
        &self,
        group_id: &GroupId,
        details: &requests::GolferIds,
    ) -> Result<responses::GroupAssignmentResult, ClientError> {
        let response = self
            .post(&format!("groups/{group_id}/remove_golfers"), details)
            .await?;
        ok_body(response).await
    }
}

/// Golfers
impl APIClient {
    pub async fn list_golfers(
        &self,
        filter: &requests::GolferFilter,
    ) -> Result<Vec<responses::Golfer>, ClientError> {
        self.list_all("golfers", filter).await
    }

    pub async fn golfers_page(
        &self,
        filter: &requests::GolferFilter,
        page: &PageRequest,
    ) -> Result<Paginated<responses::Golfer>, ClientError> {
        self.page("golfers", filter, page).await
    }

    pub async fn get_golfer(
        &self,
        golfer_id: &GolferId,
    ) -> Result<responses::Golfer, ClientError> {
        let response = self.empty_get(&format!("golfers/{golfer_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_golfer(
        &self,
        details: &crate::Golfer,
    ) -> Result<responses::Golfer, ClientError> {
        let response = self.post("golfers", details).await?;
        ok_body(response).await
    }

    pub async fn update_golfer(
        &self,
        golfer_id: &GolferId,
        details: &crate::Golfer,
    ) -> Result<responses::Golfer, ClientError> {
        let response =
            self.put(&format!("golfers/{golfer_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_golfer(
        &self,
        golfer_id: &GolferId,
    ) -> Result<(), ClientError> {
        let response =
            self.empty_delete(&format!("golfers/{golfer_id}")).await?;
        ok_empty(response).await
    }

    pub async fn bulk_delete_golfers(
        &self,
        details: &requests::BulkDelete<GolferId>,
    ) -> Result<responses::BulkDeleteResult, ClientError> {
        let response = self.post("golfers/bulk_delete", details).await?;
        ok_body(response).await
    }
}

/// Shots
impl APIClient {
    pub async fn list_shots(
        &self,
        filter: &requests::ShotFilter,
    ) -> Result<Vec<responses::Shot>, ClientError> {
        self.list_all("shots", filter).await
    }

    pub async fn shots_page(
        &self,
        filter: &requests::ShotFilter,
        page: &PageRequest,
    ) -> Result<Paginated<responses::Shot>, ClientError> {
        self.page("shots", filter, page).await
    }

    pub async fn shot_statistics(
        &self,
        filter: &requests::ShotFilter,
    ) -> Result<responses::ShotStatistics, ClientError> {
        let response = self
            .inner_client
            .get(self.format_url("shots/statistics"))
            .query(filter)
            .send()
            .await?;
        ok_body(response).await
    }

    pub async fn get_shot(
        &self,
        shot_id: &ShotId,
    ) -> Result<responses::Shot, ClientError> {
        let response = self.empty_get(&format!("shots/{shot_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_shot(
        &self,
        details: &crate::Shot,
    ) -> Result<responses::Shot, ClientError> {
        let response = self.post("shots", details).await?;
        ok_body(response).await
    }

    pub async fn update_shot(
        &self,
        shot_id: &ShotId,
        details: &crate::Shot,
    ) -> Result<responses::Shot, ClientError> {
        let response = self.put(&format!("shots/{shot_id}"), details).await?;
        ok_body(response).await
    }

    /// Set or clear one measurement without resending the whole shot.
    pub async fn update_shot_metric(
        &self,
        shot_id: &ShotId,
        details: &requests::UpdateShotMetric,
    ) -> Result<responses::Shot, ClientError> {
        let response =
            self.patch(&format!("shots/{shot_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_shot(&self, shot_id: &ShotId) -> Result<(), ClientError> {
        let response = self.empty_delete(&format!("shots/{shot_id}")).await?;
        ok_empty(response).await
    }

    pub async fn bulk_delete_shots(
        &self,
        details: &requests::BulkDelete<ShotId>,
    ) -> Result<responses::BulkDeleteResult, ClientError> {
        let response = self.post("shots/bulk_delete", details).await?;
        ok_body(response).await
    }
}

/// Practice sessions
impl APIClient {
    pub async fn list_sessions(
        &self,
        filter: &requests::SessionFilter,
    ) -> Result<Vec<responses::Session>, ClientError> {
        self.list_all("sessions", filter).await
    }

    pub async fn sessions_page(
        &self,
        filter: &requests::SessionFilter,
        page: &PageRequest,
    ) -> Result<Paginated<responses::Session>, ClientError> {
        self.page("sessions", filter, page).await
    }

    pub async fn get_session(
        &self,
        session_id: &SessionId,
    ) -> Result<responses::Session, ClientError> {
        let response =
            self.empty_get(&format!("sessions/{session_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_session(
        &self,
        details: &crate::Session,
    ) -> Result<responses::Session, ClientError> {
        let response = self.post("sessions", details).await?;
        ok_body(response).await
    }

    pub async fn update_session(
        &self,
        session_id: &SessionId,
        details: &crate::Session,
    ) -> Result<responses::Session, ClientError> {
        let response =
            self.put(&format!("sessions/{session_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_session(
        &self,
        session_id: &SessionId,
    ) -> Result<(), ClientError> {
        let response =
            self.empty_delete(&format!("sessions/{session_id}")).await?;
        ok_empty(response).await
    }

    pub async fn bulk_delete_sessions(
        &self,
        details: &requests::BulkDelete<SessionId>,
    ) -> Result<responses::BulkDeleteResult, ClientError> {
        let response = self.post("sessions/bulk_delete", details).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
