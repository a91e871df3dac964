use payloads::Record;

/// A local change to a fetched collection, mirroring a successful request.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<R: Record> {
    /// Replace everything, e.g. after a fetch.
    Set(Vec<R>),
    /// A newly created record goes to the top.
    Prepend(R),
    /// Replace the record with the same id, if present.
    Update(R),
    Remove(Vec<R::Id>),
}

pub fn apply_mutation<R: Record>(items: &mut Vec<R>, mutation: Mutation<R>) {
    match mutation {
        Mutation::Set(new_items) => *items = new_items,
        Mutation::Prepend(item) => items.insert(0, item),
        Mutation::Update(item) => {
            let id = item.id();
            if let Some(existing) = items.iter_mut().find(|i| i.id() == id) {
                *existing = item;
            }
        }
        Mutation::Remove(ids) => items.retain(|i| !ids.contains(&i.id())),
    }
}
