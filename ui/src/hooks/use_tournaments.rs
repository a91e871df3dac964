use payloads::{
    APIClient, ClientError, Tournament, TournamentId,
    requests::{BulkDelete, TournamentFilter},
    responses::{self, BulkDeleteResult},
};
use yew::prelude::*;

use super::{Resource, ResourceHandle, use_resource};

impl Resource for responses::Tournament {
    type Details = Tournament;
    type Filter = TournamentFilter;

    const LABEL: &'static str = "Tournament";

    async fn list(
        client: &APIClient,
        filter: &TournamentFilter,
    ) -> Result<Vec<Self>, ClientError> {
        client.list_tournaments(filter).await
    }

    async fn create(
        client: &APIClient,
        details: &Tournament,
    ) -> Result<Self, ClientError> {
        client.create_tournament(details).await
    }

    async fn update(
        client: &APIClient,
        id: &TournamentId,
        details: &Tournament,
    ) -> Result<Self, ClientError> {
        client.update_tournament(id, details).await
    }

    async fn delete(
        client: &APIClient,
        id: &TournamentId,
    ) -> Result<(), ClientError> {
        client.delete_tournament(id).await
    }

    async fn bulk_delete(
        client: &APIClient,
        request: &BulkDelete<TournamentId>,
    ) -> Result<BulkDeleteResult, ClientError> {
        client.bulk_delete_tournaments(request).await
    }
}

#[hook]
pub fn use_tournaments(
    filter: TournamentFilter,
) -> ResourceHandle<responses::Tournament> {
    use_resource(filter)
}
