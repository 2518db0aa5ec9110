//! In-process story source for service and router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use hn_facade::{Error, Result, Story, StorySource};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Scriptable [`StorySource`] that counts every upstream call.
#[derive(Default)]
pub struct FakeSource {
    ids: Mutex<Vec<u64>>,
    stories: Mutex<HashMap<u64, Story>>,
    failing: Mutex<HashSet<u64>>,
    delays: Mutex<HashMap<u64, Duration>>,
    ids_delay: Mutex<Option<Duration>>,
    ids_down: AtomicBool,
    pub id_calls: AtomicUsize,
    pub story_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(self, ids: impl IntoIterator<Item = u64>) -> Self {
        *self.ids.lock().unwrap() = ids.into_iter().collect();
        self
    }

    pub fn with_story(self, story: Story) -> Self {
        self.stories.lock().unwrap().insert(story.id, story);
        self
    }

    /// Linked story titled `"Story {id}"` for every id.
    pub fn with_linked_stories(self, ids: impl IntoIterator<Item = u64>) -> Self {
        {
            let mut stories = self.stories.lock().unwrap();
            for id in ids {
                stories.insert(
                    id,
                    Story::new(id, format!("Story {}", id)).with_url(format!("http://example.com/{}", id)),
                );
            }
        }
        self
    }

    pub fn with_failing(self, id: u64) -> Self {
        self.failing.lock().unwrap().insert(id);
        self
    }

    pub fn with_delay(self, id: u64, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(id, delay);
        self
    }

    /// Delay every id-list response, successful or not.
    pub fn with_ids_delay(self, delay: Duration) -> Self {
        *self.ids_delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn set_ids_down(&self, down: bool) {
        self.ids_down.store(down, Ordering::SeqCst);
    }

    pub fn replace_story(&self, story: Story) {
        self.stories.lock().unwrap().insert(story.id, story);
    }

    pub fn id_calls(&self) -> usize {
        self.id_calls.load(Ordering::SeqCst)
    }

    pub fn story_calls(&self) -> usize {
        self.story_calls.load(Ordering::SeqCst)
    }

    pub fn upstream_calls(&self) -> usize {
        self.id_calls() + self.story_calls()
    }
}

#[async_trait]
impl StorySource for FakeSource {
    async fn fetch_new_story_ids(&self) -> Result<Vec<u64>> {
        self.id_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.ids_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.ids_down.load(Ordering::SeqCst) {
            return Err(Error::fetch("fake://newstories.json", "upstream unavailable"));
        }
        Ok(self.ids.lock().unwrap().clone())
    }

    async fn fetch_story(&self, id: u64) -> Result<Option<Story>> {
        self.story_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delays.lock().unwrap().get(&id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().unwrap().contains(&id) {
            return Err(Error::fetch(format!("fake://item/{}.json", id), "connection reset"));
        }
        Ok(self.stories.lock().unwrap().get(&id).cloned())
    }
}

pub fn ids_of(stories: &[Story]) -> Vec<u64> {
    stories.iter().map(|s| s.id).collect()
}
