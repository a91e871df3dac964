use payloads::{
    APIClient, ClientError, Session, SessionId,
    requests::{BulkDelete, SessionFilter},
    responses::{self, BulkDeleteResult},
};
use yew::prelude::*;

use super::{Resource, ResourceHandle, use_resource};

impl Resource for responses::Session {
    type Details = Session;
    type Filter = SessionFilter;

    const LABEL: &'static str = "Session";

    async fn list(
        client: &APIClient,
        filter: &SessionFilter,
    ) -> Result<Vec<Self>, ClientError> {
        client.list_sessions(filter).await
    }

    async fn create(
        client: &APIClient,
        details: &Session,
    ) -> Result<Self, ClientError> {
        client.create_session(details).await
    }

    async fn update(
        client: &APIClient,
        id: &SessionId,
        details: &Session,
    ) -> Result<Self, ClientError> {
        client.update_session(id, details).await
    }

    async fn delete(
        client: &APIClient,
        id: &SessionId,
    ) -> Result<(), ClientError> {
        client.delete_session(id).await
    }

    async fn bulk_delete(
        client: &APIClient,
        request: &BulkDelete<SessionId>,
    ) -> Result<BulkDeleteResult, ClientError> {
        client.bulk_delete_sessions(request).await
    }
}

#[hook]
pub fn use_sessions(
    filter: SessionFilter,
) -> ResourceHandle<responses::Session> {
    use_resource(filter)
}
