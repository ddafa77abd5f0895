use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::screening::models::Screening;

/// Process-local screening results. Nothing survives a restart.
/// When full, the oldest screening is evicted to make room.
#[derive(Clone)]
pub struct ScreeningStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Screening>>>>,
    capacity: usize,
}

impl ScreeningStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    pub async fn insert(&self, screening: Screening) -> Arc<Screening> {
        let screening = Arc::new(screening);
        let mut map = self.inner.write().await;

        while map.len() >= self.capacity {
            let oldest = map
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id);
            match oldest {
                Some(id) => {
                    tracing::debug!("Evicting screening {id}");
                    map.remove(&id);
                }
                None => break,
            }
        }

        map.insert(screening.id, Arc::clone(&screening));
        screening
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Screening>> {
        self.inner.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
