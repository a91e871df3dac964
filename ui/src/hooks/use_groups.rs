use std::ops::Deref;

use payloads::{
    APIClient, ClientError, GolferId, Group, GroupId,
    requests::{BulkDelete, GolferIds, GroupFilter},
    responses::{self, BulkDeleteResult, GroupAssignmentResult},
};
use yew::prelude::*;

use super::use_resource::{Done, use_mutation_context};
use super::{Resource, ResourceHandle, use_resource};
use crate::get_api_client;

impl Resource for responses::Group {
    type Details = Group;
    type Filter = GroupFilter;

    const LABEL: &'static str = "Group";

    async fn list(
        client: &APIClient,
        filter: &GroupFilter,
    ) -> Result<Vec<Self>, ClientError> {
        client.list_groups(filter).await
    }

    async fn create(
        client: &APIClient,
        details: &Group,
    ) -> Result<Self, ClientError> {
        client.create_group(details).await
    }

    async fn update(
        client: &APIClient,
        id: &GroupId,
        details: &Group,
    ) -> Result<Self, ClientError> {
        client.update_group(id, details).await
    }

    async fn delete(
        client: &APIClient,
        id: &GroupId,
    ) -> Result<(), ClientError> {
        client.delete_group(id).await
    }

    async fn bulk_delete(
        client: &APIClient,
        request: &BulkDelete<GroupId>,
    ) -> Result<BulkDeleteResult, ClientError> {
        client.bulk_delete_groups(request).await
    }
}

/// Groups plus golfer assignment. Assignments change golfer counts, so the
/// groups are refetched afterwards.
#[derive(Clone)]
pub struct GroupsHandle {
    pub groups: ResourceHandle<responses::Group>,
    pub assign_golfers: Callback<(GroupId, Vec<GolferId>, Done)>,
    pub remove_golfers: Callback<(GroupId, Vec<GolferId>, Done)>,
}

impl Deref for GroupsHandle {
    type Target = ResourceHandle<responses::Group>;

    fn deref(&self) -> &Self::Target {
        &self.groups
    }
}

#[hook]
pub fn use_groups(filter: GroupFilter) -> GroupsHandle {
    let groups = use_resource::<responses::Group>(filter);
    let context = use_mutation_context();

    let assignment = |remove: bool| {
        let context = context.clone();
        let refetch = groups.refetch.clone();
        Callback::from(
            move |(group_id, golfer_ids, done): (GroupId, Vec<GolferId>, Done)| {
                let refetch = refetch.clone();
                let request = GolferIds { golfer_ids };
                context.run(
                    async move {
                        let client = get_api_client();
                        if remove {
                            client.remove_golfers(&group_id, &request).await
                        } else {
                            client.assign_golfers(&group_id, &request).await
                        }
                    },
                    move |result: GroupAssignmentResult| {
                        refetch.emit(());
                        result.message
                    },
                    done,
                );
            },
        )
    };

    GroupsHandle {
        assign_golfers: assignment(false),
        remove_golfers: assignment(true),
        groups: ResourceHandle {
            is_loading: groups.is_loading || *context.is_loading,
            ..groups
        },
    }
}
