use payloads::{
    APIClient, ClientError, Golfer, GolferId,
    requests::{BulkDelete, GolferFilter},
    responses::{self, BulkDeleteResult},
};
use yew::prelude::*;

use super::{Resource, ResourceHandle, use_resource};

impl Resource for responses::Golfer {
    type Details = Golfer;
    type Filter = GolferFilter;

    const LABEL: &'static str = "Golfer";

    async fn list(
        client: &APIClient,
        filter: &GolferFilter,
    ) -> Result<Vec<Self>, ClientError> {
        client.list_golfers(filter).await
    }

    async fn create(
        client: &APIClient,
        details: &Golfer,
    ) -> Result<Self, ClientError> {
        client.create_golfer(details).await
    }

    async fn update(
        client: &APIClient,
        id: &GolferId,
        details: &Golfer,
    ) -> Result<Self, ClientError> {
        client.update_golfer(id, details).await
    }

    async fn delete(
        client: &APIClient,
        id: &GolferId,
    ) -> Result<(), ClientError> {
        client.delete_golfer(id).await
    }

    async fn bulk_delete(
        client: &APIClient,
        request: &BulkDelete<GolferId>,
    ) -> Result<BulkDeleteResult, ClientError> {
        client.bulk_delete_golfers(request).await
    }
}

/// Golfers matching `filter`.
#[hook]
pub fn use_golfers(filter: GolferFilter) -> ResourceHandle<responses::Golfer> {
    use_resource(filter)
}
