use crate::query::CollectionQuery;
use crate::service::{DataService, ServiceError};
use serde::de::DeserializeOwned;

/// Result of a collection load. A failed load renders the same as an empty
/// one, but the states stay distinguishable for logging and tests.
#[derive(Clone, Debug)]
pub enum Listing<T> {
    Pending,
    Ready(Vec<T>),
    Failed(ServiceError),
}

impl<T> Listing<T> {
    pub fn records(&self) -> &[T] {
        match self {
            Listing::Ready(records) => records,
            Listing::Pending | Listing::Failed(_) => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Listing::Pending)
    }
}

/// Issues exactly one select for the collection. Errors are logged here and
/// not surfaced to the visitor.
pub async fn load<S, T>(service: &S, query: CollectionQuery) -> Listing<T>
where
    S: DataService,
    T: DeserializeOwned,
{
    match service.select(query).await {
        Ok(records) => Listing::Ready(records),
        Err(err) => {
            log::error!("failed to load {}: {err}", query.collection);
            Listing::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_is_empty_unless_ready() {
        assert!(Listing::<u32>::Pending.records().is_empty());
        assert!(Listing::<u32>::Failed(ServiceError::Network("down".into())).records().is_empty());
        assert_eq!(Listing::Ready(vec![1, 2, 3]).records(), &[1, 2, 3]);
    }

    #[test]
    fn pending_is_the_only_loading_state() {
        assert!(Listing::<u32>::Pending.is_pending());
        assert!(!Listing::Ready(vec![1]).is_pending());
        assert!(!Listing::<u32>::Failed(ServiceError::Network("down".into())).is_pending());
    }
}
