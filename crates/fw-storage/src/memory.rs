//! In-memory storage backend.
//!
//! Backs tests and local development. All four provider traits are
//! implemented on a single store so deletes cascade the same way the SQL
//! schema does through foreign keys.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use fw_model::{Child, Milestone, Parent, Word};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::child::ChildProvider;
use crate::error::{StorageError, StorageResult};
use crate::milestone::MilestoneProvider;
use crate::parent::ParentProvider;
use crate::word::WordProvider;

/// In-memory storage for tests and development.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    parents: RwLock<HashMap<Uuid, Parent>>,
    children: RwLock<HashMap<Uuid, Child>>,
    words: RwLock<HashMap<Uuid, Word>>,
    milestones: RwLock<HashMap<Uuid, Milestone>>,
}

impl InMemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn remove_child_records(&self, child_id: Uuid) {
        self.words.write().await.retain(|_, w| w.child_id != child_id);
        self.milestones
            .write()
            .await
            .retain(|_, m| m.child_id != child_id);
    }
}

fn sort_words(mut words: Vec<Word>) -> Vec<Word> {
    words.sort_by_key(|w| w.date_achieve);
    words
}

fn sort_milestones(mut milestones: Vec<Milestone>) -> Vec<Milestone> {
    milestones.sort_by_key(|m| m.date_achieve);
    milestones
}

#[async_trait]
impl ParentProvider for InMemoryStorage {
    async fn create(&self, parent: &Parent) -> StorageResult<()> {
        let mut parents = self.parents.write().await;
        if parents.values().any(|p| p.username == parent.username) {
            return Err(StorageError::duplicate(
                "Parent",
                "username",
                &parent.username,
            ));
        }
        parents.insert(parent.id, parent.clone());
        Ok(())
    }

    async fn update(&self, parent: &Parent) -> StorageResult<()> {
        let mut parents = self.parents.write().await;
        if !parents.contains_key(&parent.id) {
            return Err(StorageError::not_found("Parent", parent.id));
        }
        parents.insert(parent.id, parent.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        if self.parents.write().await.remove(&id).is_none() {
            return Err(StorageError::not_found("Parent", id));
        }
        let orphaned: Vec<Uuid> = {
            let children = self.children.read().await;
            children
                .values()
                .filter(|c| c.parent_id == id)
                .map(|c| c.id)
                .collect()
        };
        self.children.write().await.retain(|_, c| c.parent_id != id);
        for child_id in orphaned {
            self.remove_child_records(child_id).await;
        }
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Parent>> {
        Ok(self.parents.read().await.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> StorageResult<Option<Parent>> {
        let parents = self.parents.read().await;
        Ok(parents.values().find(|p| p.username == username).cloned())
    }

    async fn list(&self) -> StorageResult<Vec<Parent>> {
        let mut parents: Vec<Parent> = self.parents.read().await.values().cloned().collect();
        parents.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(parents)
    }
}

#[async_trait]
impl ChildProvider for InMemoryStorage {
    async fn create(&self, child: &Child) -> StorageResult<()> {
        self.children.write().await.insert(child.id, child.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        if self.children.write().await.remove(&id).is_none() {
            return Err(StorageError::not_found("Child", id));
        }
        self.remove_child_records(id).await;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Child>> {
        Ok(self.children.read().await.get(&id).cloned())
    }

    async fn get_by_parent(&self, parent_id: Uuid) -> StorageResult<Vec<Child>> {
        let children = self.children.read().await;
        let mut owned: Vec<Child> = children
            .values()
            .filter(|c| c.parent_id == parent_id)
            .cloned()
            .collect();
        owned.sort_by_key(|c| c.birth_date);
        Ok(owned)
    }
}

#[async_trait]
impl WordProvider for InMemoryStorage {
    async fn create(&self, word: &Word) -> StorageResult<()> {
        self.words.write().await.insert(word.id, word.clone());
        Ok(())
    }

    async fn delete(&self, child_id: Uuid, id: Uuid) -> StorageResult<()> {
        let mut words = self.words.write().await;
        match words.get(&id) {
            Some(w) if w.child_id == child_id => {
                words.remove(&id);
                Ok(())
            }
            _ => Err(StorageError::not_found("Word", id)),
        }
    }

    async fn get_by_id(&self, child_id: Uuid, id: Uuid) -> StorageResult<Option<Word>> {
        let words = self.words.read().await;
        Ok(words.get(&id).filter(|w| w.child_id == child_id).cloned())
    }

    async fn get_by_child(&self, child_id: Uuid) -> StorageResult<Vec<Word>> {
        let words = self.words.read().await;
        Ok(sort_words(
            words
                .values()
                .filter(|w| w.child_id == child_id)
                .cloned()
                .collect(),
        ))
    }

    async fn get_by_text(&self, child_id: Uuid, word: &str) -> StorageResult<Option<Word>> {
        let words = self.words.read().await;
        Ok(words
            .values()
            .filter(|w| w.child_id == child_id && w.matches(word))
            .min_by_key(|w| w.date_achieve)
            .cloned())
    }

    async fn get_before(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Word>> {
        let words = self.words.read().await;
        Ok(sort_words(
            words
                .values()
                .filter(|w| w.child_id == child_id && w.achieved_before(date))
                .cloned()
                .collect(),
        ))
    }

    async fn get_after(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Word>> {
        let words = self.words.read().await;
        Ok(sort_words(
            words
                .values()
                .filter(|w| w.child_id == child_id && w.achieved_after(date))
                .cloned()
                .collect(),
        ))
    }

    async fn get_between(
        &self,
        child_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Word>> {
        let words = self.words.read().await;
        Ok(sort_words(
            words
                .values()
                .filter(|w| w.child_id == child_id && w.achieved_between(start, end))
                .cloned()
                .collect(),
        ))
    }
}

#[async_trait]
impl MilestoneProvider for InMemoryStorage {
    async fn create(&self, milestone: &Milestone) -> StorageResult<()> {
        self.milestones
            .write()
            .await
            .insert(milestone.id, milestone.clone());
        Ok(())
    }

    async fn update(&self, milestone: &Milestone) -> StorageResult<()> {
        let mut milestones = self.milestones.write().await;
        match milestones.get(&milestone.id) {
            Some(existing) if existing.child_id == milestone.child_id => {
                milestones.insert(milestone.id, milestone.clone());
                Ok(())
            }
            _ => Err(StorageError::not_found("Milestone", milestone.id)),
        }
    }

    async fn delete(&self, child_id: Uuid, id: Uuid) -> StorageResult<()> {
        let mut milestones = self.milestones.write().await;
        match milestones.get(&id) {
            Some(m) if m.child_id == child_id => {
                milestones.remove(&id);
                Ok(())
            }
            _ => Err(StorageError::not_found("Milestone", id)),
        }
    }

    async fn get_by_id(&self, child_id: Uuid, id: Uuid) -> StorageResult<Option<Milestone>> {
        let milestones = self.milestones.read().await;
        Ok(milestones
            .get(&id)
            .filter(|m| m.child_id == child_id)
            .cloned())
    }

    async fn get_by_child(&self, child_id: Uuid) -> StorageResult<Vec<Milestone>> {
        let milestones = self.milestones.read().await;
        Ok(sort_milestones(
            milestones
                .values()
                .filter(|m| m.child_id == child_id)
                .cloned()
                .collect(),
        ))
    }

    async fn search_by_title(
        &self,
        child_id: Uuid,
        fragment: &str,
    ) -> StorageResult<Vec<Milestone>> {
        let milestones = self.milestones.read().await;
        Ok(sort_milestones(
            milestones
                .values()
                .filter(|m| m.child_id == child_id && m.title_contains(fragment))
                .cloned()
                .collect(),
        ))
    }

    async fn get_by_title(&self, child_id: Uuid, title: &str) -> StorageResult<Option<Milestone>> {
        let milestones = self.milestones.read().await;
        Ok(milestones
            .values()
            .filter(|m| m.child_id == child_id && m.title_matches(title))
            .min_by_key(|m| m.date_achieve)
            .cloned())
    }

    async fn get_before(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Milestone>> {
        let milestones = self.milestones.read().await;
        Ok(sort_milestones(
            milestones
                .values()
                .filter(|m| m.child_id == child_id && m.achieved_before(date))
                .cloned()
                .collect(),
        ))
    }

    async fn get_after(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Milestone>> {
        let milestones = self.milestones.read().await;
        Ok(sort_milestones(
            milestones
                .values()
                .filter(|m| m.child_id == child_id && m.achieved_after(date))
                .cloned()
                .collect(),
        ))
    }

    async fn get_between(
        &self,
        child_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Milestone>> {
        let milestones = self.milestones.read().await;
        Ok(sort_milestones(
            milestones
                .values()
                .filter(|m| m.child_id == child_id && m.achieved_between(start, end))
                .cloned()
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use fw_model::Gender;

    use super::*;

    // InMemoryStorage implements all four provider traits, so the shared
    // method names need qualified calls here.

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_parent(username: &str) -> Parent {
        Parent::new(username, "hash", format!("{username}@example.com"))
    }

    #[tokio::test]
    async fn create_parent_rejects_duplicate_username() {
        let store = InMemoryStorage::new();
        ParentProvider::create(&store, &sample_parent("anna"))
            .await
            .unwrap();

        let err = ParentProvider::create(&store, &sample_parent("anna"))
            .await
            .unwrap_err();
        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn username_lookup_is_exact() {
        let store = InMemoryStorage::new();
        ParentProvider::create(&store, &sample_parent("anna"))
            .await
            .unwrap();

        assert!(store.get_by_username("anna").await.unwrap().is_some());
        assert!(store.get_by_username("Anna").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_parent_cascades_to_children_and_records() {
        let store = InMemoryStorage::new();
        let parent = sample_parent("anna");
        ParentProvider::create(&store, &parent).await.unwrap();

        let child = Child::new(parent.id, "Mia", date(2021, 3, 14), Gender::Female);
        ChildProvider::create(&store, &child).await.unwrap();

        let word = Word::new(child.id, "mama", date(2022, 5, 1));
        WordProvider::create(&store, &word).await.unwrap();
        let milestone = Milestone::new(child.id, "First steps", "walked!", date(2022, 8, 2));
        MilestoneProvider::create(&store, &milestone).await.unwrap();

        ParentProvider::delete(&store, parent.id).await.unwrap();

        assert!(ChildProvider::get_by_id(&store, child.id)
            .await
            .unwrap()
            .is_none());
        assert!(WordProvider::get_by_id(&store, child.id, word.id)
            .await
            .unwrap()
            .is_none());
        assert!(MilestoneProvider::get_by_id(&store, child.id, milestone.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn deleting_child_cascades_to_records() {
        let store = InMemoryStorage::new();
        let child = Child::new(Uuid::now_v7(), "Mia", date(2021, 3, 14), Gender::Female);
        ChildProvider::create(&store, &child).await.unwrap();

        let word = Word::new(child.id, "mama", date(2022, 5, 1));
        WordProvider::create(&store, &word).await.unwrap();

        ChildProvider::delete(&store, child.id).await.unwrap();

        assert!(WordProvider::get_by_id(&store, child.id, word.id)
            .await
            .unwrap()
            .is_none());
        assert!(WordProvider::get_by_child(&store, child.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn word_delete_is_scoped_to_child() {
        let store = InMemoryStorage::new();
        let word = Word::new(Uuid::now_v7(), "mama", date(2022, 5, 1));
        WordProvider::create(&store, &word).await.unwrap();

        let other_child = Uuid::now_v7();
        let err = WordProvider::delete(&store, other_child, word.id)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        // Still present under the owning child.
        assert!(WordProvider::get_by_id(&store, word.child_id, word.id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn word_text_lookup_ignores_case_and_picks_earliest() {
        let store = InMemoryStorage::new();
        let child_id = Uuid::now_v7();
        WordProvider::create(&store, &Word::new(child_id, "Mama", date(2022, 5, 1)))
            .await
            .unwrap();
        WordProvider::create(&store, &Word::new(child_id, "MAMA", date(2022, 4, 1)))
            .await
            .unwrap();

        let found = store.get_by_text(child_id, "mama").await.unwrap().unwrap();
        assert_eq!(found.date_achieve, date(2022, 4, 1));

        assert!(store.get_by_text(child_id, "papa").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn word_date_queries_follow_bound_rules() {
        let store = InMemoryStorage::new();
        let child_id = Uuid::now_v7();
        for (text, day) in [("a", 1), ("b", 2), ("c", 3)] {
            WordProvider::create(&store, &Word::new(child_id, text, date(2022, 5, day)))
                .await
                .unwrap();
        }

        let before = WordProvider::get_before(&store, child_id, date(2022, 5, 2))
            .await
            .unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].word, "a");

        let after = WordProvider::get_after(&store, child_id, date(2022, 5, 2))
            .await
            .unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].word, "c");

        let between =
            WordProvider::get_between(&store, child_id, date(2022, 5, 1), date(2022, 5, 2))
                .await
                .unwrap();
        assert_eq!(between.len(), 2);
        assert_eq!(between[0].word, "a");
        assert_eq!(between[1].word, "b");
    }

    #[tokio::test]
    async fn milestone_title_search_is_case_insensitive_substring() {
        let store = InMemoryStorage::new();
        let child_id = Uuid::now_v7();
        MilestoneProvider::create(
            &store,
            &Milestone::new(child_id, "First Steps", "walked", date(2022, 8, 2)),
        )
        .await
        .unwrap();
        MilestoneProvider::create(
            &store,
            &Milestone::new(child_id, "First tooth", "lower left", date(2022, 1, 9)),
        )
        .await
        .unwrap();

        let all_first = store.search_by_title(child_id, "first").await.unwrap();
        assert_eq!(all_first.len(), 2);
        assert_eq!(all_first[0].title, "First tooth");

        let steps = store.search_by_title(child_id, "STEPS").await.unwrap();
        assert_eq!(steps.len(), 1);

        assert!(store
            .search_by_title(child_id, "crawl")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn milestone_exact_title_lookup_ignores_case() {
        let store = InMemoryStorage::new();
        let child_id = Uuid::now_v7();
        MilestoneProvider::create(
            &store,
            &Milestone::new(child_id, "First Steps", "walked", date(2022, 8, 2)),
        )
        .await
        .unwrap();

        assert!(store
            .get_by_title(child_id, "first steps")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .get_by_title(child_id, "first")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn milestone_update_checks_child_scope() {
        let store = InMemoryStorage::new();
        let child_id = Uuid::now_v7();
        let mut milestone = Milestone::new(child_id, "First word", "said mama", date(2022, 5, 1));
        MilestoneProvider::create(&store, &milestone).await.unwrap();

        milestone.title = "First spoken word".to_string();
        MilestoneProvider::update(&store, &milestone).await.unwrap();
        let stored = MilestoneProvider::get_by_id(&store, child_id, milestone.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.title, "First spoken word");

        let mut foreign = milestone.clone();
        foreign.child_id = Uuid::now_v7();
        let err = MilestoneProvider::update(&store, &foreign)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
