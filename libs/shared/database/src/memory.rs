use tokio::sync::RwLock;
use uuid::Uuid;

/// A row that can live in an [`InMemoryTable`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// Insertion-ordered table guarded by a tokio `RwLock`.
///
/// Mutations report success as `bool`, matching the repository contract:
/// inserting an id twice, or modifying/removing an unknown id, fails.
#[derive(Debug)]
pub struct InMemoryTable<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Record> InMemoryTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn find(&self, id: Uuid) -> Option<T> {
        self.rows.read().await.iter().find(|row| row.id() == id).cloned()
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.rows.read().await.iter().any(|row| row.id() == id)
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| predicate(*row))
            .cloned()
            .collect()
    }

    pub async fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.rows.read().await.iter().any(predicate)
    }

    pub async fn insert(&self, row: T) -> bool {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|existing| existing.id() == row.id()) {
            return false;
        }
        rows.push(row);
        true
    }

    /// Applies `change` to the stored row with `id`, in place.
    pub async fn modify<F>(&self, id: Uuid, change: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                change(row);
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        rows.len() != before
    }
}
