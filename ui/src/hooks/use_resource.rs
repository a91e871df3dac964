//! The data hook shared by every entity screen.
//!
//! [`use_resource`] fetches a filtered collection, keeps it in a local
//! reducer and exposes create / update / delete / bulk delete callbacks.
//! Successful mutations are applied to the local collection (prepend,
//! replace in place, remove) instead of refetching, and every outcome is
//! reported with a toast.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use list_view::{Mutation, apply_mutation};
use payloads::{
    APIClient, ClientError, Record,
    requests::BulkDelete,
    responses::BulkDeleteResult,
};
use yew::prelude::*;

use super::FetchState;
use crate::contexts::toast::{ToastHandle, use_toast};
use crate::get_api_client;

/// A record type the console can list and edit through the REST api.
pub trait Resource: Record + Clone + PartialEq + 'static {
    /// Editable fields, sent as the create and update request body.
    type Details: Clone + PartialEq + 'static;
    type Filter: Clone + PartialEq + Default + 'static;

    /// Capitalised singular name used in notifications, e.g. "Golfer".
    const LABEL: &'static str;

    fn list(
        client: &APIClient,
        filter: &Self::Filter,
    ) -> impl Future<Output = Result<Vec<Self>, ClientError>>;

    fn create(
        client: &APIClient,
        details: &Self::Details,
    ) -> impl Future<Output = Result<Self, ClientError>>;

    fn update(
        client: &APIClient,
        id: &Self::Id,
        details: &Self::Details,
    ) -> impl Future<Output = Result<Self, ClientError>>;

    fn delete(
        client: &APIClient,
        id: &Self::Id,
    ) -> impl Future<Output = Result<(), ClientError>>;

    fn bulk_delete(
        client: &APIClient,
        request: &BulkDelete<Self::Id>,
    ) -> impl Future<Output = Result<BulkDeleteResult, ClientError>>;
}

/// Fetched records as a reducer over [`Mutation`]s.
#[derive(Debug, PartialEq)]
pub struct Collection<R: Record> {
    pub items: FetchState<Vec<R>>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self {
            items: FetchState::NotFetched,
        }
    }
}

impl<R: Record + Clone> Reducible for Collection<R> {
    type Action = Mutation<R>;

    fn reduce(self: Rc<Self>, mutation: Mutation<R>) -> Rc<Self> {
        let mut items = match (&self.items, &mutation) {
            (_, Mutation::Set(_)) => Vec::new(),
            (FetchState::Fetched(items), _) => items.clone(),
            // Nothing to patch before the first fetch lands
            (FetchState::NotFetched, _) => return self,
        };
        apply_mutation(&mut items, mutation);
        Rc::new(Self {
            items: FetchState::Fetched(items),
        })
    }
}

/// Reports whether a mutation succeeded, so forms and dialogs can close.
pub type Done = Callback<bool>;

pub struct ResourceHandle<R: Resource> {
    pub items: FetchState<Vec<R>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub create: Callback<(R::Details, Done)>,
    pub update: Callback<(R::Id, R::Details, Done)>,
    /// The flag deletes dependent records too, which goes through the bulk
    /// endpoint since only it supports cascading.
    pub delete: Callback<(R::Id, bool, Done)>,
    pub bulk_delete: Callback<(Vec<R::Id>, bool, Done)>,
    /// Patch the local collection after a request made outside this hook.
    pub(crate) mutate: Callback<Mutation<R>>,
}

impl<R: Resource> Clone for ResourceHandle<R> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            refetch: self.refetch.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
            bulk_delete: self.bulk_delete.clone(),
            mutate: self.mutate.clone(),
        }
    }
}

impl<R: Resource> ResourceHandle<R> {
    /// Fetched records, or an empty slice before the first fetch.
    pub fn items(&self) -> &[R] {
        self.items.as_ref().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn find(&self, id: R::Id) -> Option<&R> {
        self.items().iter().find(|item| item.id() == id)
    }
}

/// Shared plumbing for a mutation: loading flag, error state and toasts.
#[derive(Clone)]
pub(crate) struct MutationContext {
    pub is_loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub toast: ToastHandle,
}

impl MutationContext {
    /// Run `request` and report the outcome. `on_success` applies the result
    /// locally and returns the success message.
    pub fn run<T, Fut>(
        &self,
        request: Fut,
        on_success: impl FnOnce(T) -> String + 'static,
        done: Done,
    ) where
        T: 'static,
        Fut: Future<Output = Result<T, ClientError>> + 'static,
    {
        let this = self.clone();
        yew::platform::spawn_local(async move {
            this.is_loading.set(true);
            this.error.set(None);

            let ok = match request.await {
                Ok(result) => {
                    this.toast.success(on_success(result));
                    true
                }
                Err(e) => {
                    tracing::warn!(error = %e, "request failed");
                    this.error.set(Some(e.to_string()));
                    this.toast.error(e.to_string());
                    false
                }
            };

            this.is_loading.set(false);
            done.emit(ok);
        });
    }
}

#[hook]
pub(crate) fn use_mutation_context() -> MutationContext {
    MutationContext {
        is_loading: use_state(|| false),
        error: use_state(|| None::<String>),
        toast: use_toast(),
    }
}

/// Fetch the records matching `filter` and expose their mutations.
#[hook]
pub fn use_resource<R: Resource>(filter: R::Filter) -> ResourceHandle<R> {
    let collection = use_reducer(Collection::<R>::default);
    let context = use_mutation_context();
    // Only the newest fetch may land, so a slow response for an old filter
    // can't overwrite the current one.
    let generation = use_mut_ref(|| 0_u64);

    let refetch = {
        let collection = collection.dispatcher();
        let context = context.clone();
        let generation = generation.clone();

        use_callback(filter.clone(), move |_: (), filter: &R::Filter| {
            let collection = collection.clone();
            let context = context.clone();
            let generation = generation.clone();
            let filter = filter.clone();
            let current = next_generation(&generation);

            yew::platform::spawn_local(async move {
                context.is_loading.set(true);
                context.error.set(None);

                let result = R::list(&get_api_client(), &filter).await;
                if *generation.borrow() != current {
                    return;
                }
                match result {
                    Ok(items) => collection.dispatch(Mutation::Set(items)),
                    Err(e) => {
                        tracing::warn!(error = %e, resource = R::LABEL, "fetch failed");
                        context.error.set(Some(e.to_string()));
                        context.toast.error(e.to_string());
                    }
                }
                context.is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(filter, move |_| refetch.emit(()));
    }

    let create = {
        let collection = collection.dispatcher();
        let context = context.clone();
        Callback::from(move |(details, done): (R::Details, Done)| {
            let collection = collection.clone();
            context.run(
                async move { R::create(&get_api_client(), &details).await },
                move |created| {
                    collection.dispatch(Mutation::Prepend(created));
                    format!("{} created successfully", R::LABEL)
                },
                done,
            );
        })
    };

    let update = {
        let collection = collection.dispatcher();
        let context = context.clone();
        Callback::from(move |(id, details, done): (R::Id, R::Details, Done)| {
            let collection = collection.clone();
            context.run(
                async move { R::update(&get_api_client(), &id, &details).await },
                move |updated| {
                    collection.dispatch(Mutation::Update(updated));
                    format!("{} updated successfully", R::LABEL)
                },
                done,
            );
        })
    };

    let bulk_delete = {
        let collection = collection.dispatcher();
        let context = context.clone();
        Callback::from(
            move |(ids, delete_children, done): (Vec<R::Id>, bool, Done)| {
                let collection = collection.clone();
                let request = BulkDelete {
                    ids: ids.clone(),
                    delete_children,
                };
                context.run(
                    async move {
                        R::bulk_delete(&get_api_client(), &request).await
                    },
                    move |result: BulkDeleteResult| {
                        collection.dispatch(Mutation::Remove(ids));
                        result.message
                    },
                    done,
                );
            },
        )
    };

    let delete = {
        let collection = collection.dispatcher();
        let context = context.clone();
        let bulk_delete = bulk_delete.clone();
        Callback::from(move |(id, delete_children, done): (R::Id, bool, Done)| {
            if delete_children {
                bulk_delete.emit((vec![id], true, done));
                return;
            }
            let collection = collection.clone();
            context.run(
                async move { R::delete(&get_api_client(), &id).await },
                move |()| {
                    collection.dispatch(Mutation::Remove(vec![id]));
                    format!("{} deleted successfully", R::LABEL)
                },
                done,
            );
        })
    };

    let mutate = {
        let collection = collection.dispatcher();
        Callback::from(move |mutation| collection.dispatch(mutation))
    };

    ResourceHandle {
        items: collection.items.clone(),
        is_loading: *context.is_loading
            || (!collection.items.is_fetched() && context.error.is_none()),
        error: (*context.error).clone(),
        refetch,
        create,
        update,
        delete,
        bulk_delete,
        mutate,
    }
}

fn next_generation(generation: &Rc<RefCell<u64>>) -> u64 {
    let mut generation = generation.borrow_mut();
    *generation += 1;
    *generation
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::SessionId;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(SessionId, &'static str);

    impl Record for Row {
        type Id = SessionId;

        fn id(&self) -> SessionId {
            self.0
        }
    }

    #[test]
    fn mutations_wait_for_the_first_fetch() {
        let row = Row(SessionId(Uuid::new_v4()), "Range warmup");
        let empty = Rc::new(Collection::<Row>::default());
        let unchanged = empty.clone().reduce(Mutation::Prepend(row.clone()));
        assert_eq!(unchanged.items, FetchState::NotFetched);

        let fetched = empty.reduce(Mutation::Set(vec![]));
        let prepended = fetched.reduce(Mutation::Prepend(row.clone()));
        assert_eq!(prepended.items, FetchState::Fetched(vec![row.clone()]));

        let removed = prepended.reduce(Mutation::Remove(vec![row.0]));
        assert_eq!(removed.items, FetchState::Fetched(vec![]));
    }
}
