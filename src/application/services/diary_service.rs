use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::application::ports::{DiaryStore, DiaryStoreError};
use crate::domain::DiaryEntry;

/// The last diary fetch, kept readable for re-rendering.
#[derive(Debug, Clone, Default)]
pub struct DiaryView {
    pub date: Option<NaiveDate>,
    pub entries: Vec<DiaryEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct DiaryService<D>
where
    D: DiaryStore,
{
    store: Arc<D>,
    view: RwLock<DiaryView>,
}

impl<D> DiaryService<D>
where
    D: DiaryStore,
{
    pub fn new(store: Arc<D>) -> Self {
        Self {
            store,
            view: RwLock::new(DiaryView::default()),
        }
    }

    /// Fetches the entries for one Seoul calendar date. A failed fetch
    /// records the error and leaves the entry list empty.
    pub async fn refresh(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>, DiaryStoreError> {
        {
            let mut view = self.view.write().await;
            view.date = Some(date);
            view.loading = true;
            view.error = None;
        }

        match self.store.entries_on(date).await {
            Ok(entries) => {
                let mut view = self.view.write().await;
                view.entries = entries.clone();
                view.loading = false;
                Ok(entries)
            }
            Err(error) => {
                tracing::warn!(%date, error = %error, "Diary list fetch failed");
                let mut view = self.view.write().await;
                view.entries.clear();
                view.loading = false;
                view.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    pub async fn view(&self) -> DiaryView {
        self.view.read().await.clone()
    }
}
