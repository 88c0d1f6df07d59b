use parking_lot::RwLock;
use std::sync::Arc;

use crate::engine::SearchEngine;
use crate::index::{DocId, Document};

/// Cloneable handle to one [`SearchEngine`] shared across threads.
///
/// Inserts take the write lock and so serialize against each other and against
/// searches; searches share the read lock. Results are cloned out of the lock.
#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedEngine {
    pub fn new() -> Self { Self::default() }

    pub fn add_document(&self, content: impl Into<String>) -> DocId {
        self.inner.write().add_document(content)
    }

    pub fn search(&self, query: &str) -> Vec<Document> {
        self.inner.read().search(query).into_iter().cloned().collect()
    }

    pub fn search_scored(&self, query: &str) -> Vec<(Document, f64)> {
        self.inner
            .read()
            .search_scored(query)
            .into_iter()
            .map(|hit| (hit.document.clone(), hit.score))
            .collect()
    }

    pub fn len(&self) -> usize { self.inner.read().len() }

    pub fn is_empty(&self) -> bool { self.inner.read().is_empty() }

    /// Run `f` with shared access to the engine.
    pub fn read<R>(&self, f: impl FnOnce(&SearchEngine) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<SearchEngine> for SharedEngine {
    fn from(engine: SearchEngine) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_inserts_get_dense_ids() {
        let shared = SharedEngine::new();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..25).map(|i| shared.add_document(format!("thread{t} item{i}"))).collect::<Vec<_>>()
                })
            })
            .collect();
        let mut ids: Vec<DocId> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..100).collect::<Vec<_>>());
        assert_eq!(shared.len(), 100);
        shared.read(|engine| {
            assert_eq!(engine.document_frequency("thread0"), 25);
            assert_eq!(engine.document_frequency("item7"), 4);
        });
    }

    #[test]
    fn search_returns_owned_documents() {
        let shared = SharedEngine::from(SearchEngine::new());
        assert!(shared.is_empty());
        shared.add_document("red fox");
        shared.add_document("blue whale");
        shared.add_document("green frog");
        let hits = shared.search("fox");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content(), "red fox");
        let scored = shared.search_scored("whale");
        assert_eq!(scored[0].0.id(), 1);
        assert!(scored[0].1 > 0.0);
    }
}
