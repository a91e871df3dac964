use std::ops::Deref;

use list_view::Mutation;
use payloads::{
    APIClient, ClientError, Shot, ShotId, ShotMetric,
    requests::{BulkDelete, ShotFilter, UpdateShotMetric},
    responses::{self, BulkDeleteResult},
};
use yew::prelude::*;

use super::use_resource::{Done, use_mutation_context};
use super::{Resource, ResourceHandle, use_resource};
use crate::get_api_client;

impl Resource for responses::Shot {
    type Details = Shot;
    type Filter = ShotFilter;

    const LABEL: &'static str = "Shot";

    async fn list(
        client: &APIClient,
        filter: &ShotFilter,
    ) -> Result<Vec<Self>, ClientError> {
        client.list_shots(filter).await
    }

    async fn create(
        client: &APIClient,
        details: &Shot,
    ) -> Result<Self, ClientError> {
        client.create_shot(details).await
    }

    async fn update(
        client: &APIClient,
        id: &ShotId,
        details: &Shot,
    ) -> Result<Self, ClientError> {
        client.update_shot(id, details).await
    }

    async fn delete(
        client: &APIClient,
        id: &ShotId,
    ) -> Result<(), ClientError> {
        client.delete_shot(id).await
    }

    async fn bulk_delete(
        client: &APIClient,
        request: &BulkDelete<ShotId>,
    ) -> Result<BulkDeleteResult, ClientError> {
        client.bulk_delete_shots(request).await
    }
}

/// Shots plus single-measurement edits for inline table cells.
#[derive(Clone)]
pub struct ShotsHandle {
    pub shots: ResourceHandle<responses::Shot>,
    pub update_metric: Callback<(ShotId, ShotMetric, Option<f64>, Done)>,
}

impl Deref for ShotsHandle {
    type Target = ResourceHandle<responses::Shot>;

    fn deref(&self) -> &Self::Target {
        &self.shots
    }
}

#[hook]
pub fn use_shots(filter: ShotFilter) -> ShotsHandle {
    let shots = use_resource::<responses::Shot>(filter);
    let context = use_mutation_context();

    let update_metric = {
        let context = context.clone();
        let mutate = shots.mutate.clone();
        Callback::from(
            move |(shot_id, metric, value, done): (
                ShotId,
                ShotMetric,
                Option<f64>,
                Done,
            )| {
                let mutate = mutate.clone();
                let request = UpdateShotMetric { metric, value };
                context.run(
                    async move {
                        get_api_client()
                            .update_shot_metric(&shot_id, &request)
                            .await
                    },
                    move |shot| {
                        mutate.emit(Mutation::Update(shot));
                        format!("{metric} updated")
                    },
                    done,
                );
            },
        )
    };

    ShotsHandle {
        shots: ResourceHandle {
            is_loading: shots.is_loading || *context.is_loading,
            ..shots
        },
        update_metric,
    }
}
