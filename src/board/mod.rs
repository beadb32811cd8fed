//! The to-do board: an ordered task list with editing, filtering and sorting.
//!
//! The board keeps tasks in insertion order. Filtering and sorting only
//! shape [`TaskBoard::visible_tasks`]; they never reorder the stored list.
//! Every mutation writes through to the key-value store; the in-memory
//! state is applied first and stays authoritative if the write fails.

pub mod model;
pub mod persist;

use std::cmp::Reverse;

use thiserror::Error;

use crate::ports::kv_store::{KeyValueStore, StoreError};
use crate::ports::IdGenerator;

pub use model::{Filter, Priority, SortKey, Task, ViewPrefs};

/// Why an id (or id prefix) did not pick out a single task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No task id starts with the given text.
    #[error("no task with id {0:?}")]
    NotFound(String),
    /// Several task ids start with the given text.
    #[error("id prefix {prefix:?} matches {count} tasks; use more characters")]
    Ambiguous {
        /// The prefix that was given.
        prefix: String,
        /// How many tasks it matched.
        count: usize,
    },
}

/// Ordered task list plus view state, backed by a key-value store.
pub struct TaskBoard<'a> {
    store: &'a dyn KeyValueStore,
    ids: &'a dyn IdGenerator,
    tasks: Vec<Task>,
    view: ViewPrefs,
    editing_id: Option<String>,
    greeting_name: String,
}

impl<'a> TaskBoard<'a> {
    /// Loads the board from `store`.
    ///
    /// Unreadable or malformed saved values are logged and replaced by
    /// defaults; loading never fails.
    pub fn load(store: &'a dyn KeyValueStore, ids: &'a dyn IdGenerator) -> Self {
        let tasks = persist::load_tasks(store).unwrap_or_else(|e| {
            tracing::warn!("failed to load saved tasks, starting empty: {e}");
            Vec::new()
        });
        let greeting_name = persist::load_name(store).unwrap_or_else(|e| {
            tracing::warn!("failed to load greeting name: {e}");
            String::new()
        });
        let view = persist::load_view(store).unwrap_or_else(|e| {
            tracing::warn!("failed to load view settings: {e}");
            ViewPrefs::default()
        });

        Self {
            store,
            ids,
            tasks: dedupe_ids(tasks),
            view,
            editing_id: None,
            greeting_name,
        }
    }

    /// Appends a task with a fresh id.
    ///
    /// Blank text is ignored and returns `Ok(None)`; otherwise the trimmed
    /// text is stored and the new id returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list could not be saved. The task has
    /// still been added in memory.
    pub fn add_task(
        &mut self,
        text: &str,
        priority: Priority,
    ) -> Result<Option<String>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mut id = self.ids.generate_id();
        while self.position(&id).is_some() {
            tracing::debug!(%id, "generated id already in use, drawing another");
            id = self.ids.generate_id();
        }

        self.tasks.push(Task {
            id: id.clone(),
            text: text.to_string(),
            done: false,
            priority,
        });
        self.save_tasks()?;
        Ok(Some(id))
    }

    /// Removes the task with `id`. Returns `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list could not be saved.
    pub fn delete_task(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.tasks.remove(index);
        if self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
        }
        self.save_tasks()?;
        Ok(true)
    }

    /// Flips the done flag of `id`, returning the new value, or `None` if
    /// there is no such task.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list could not be saved.
    pub fn toggle_done(&mut self, id: &str) -> Result<Option<bool>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let task = &mut self.tasks[index];
        task.done = !task.done;
        let done = task.done;
        self.save_tasks()?;
        Ok(Some(done))
    }

    /// Puts `id` into edit mode, replacing any task already being edited.
    /// Returns `false` (and changes nothing) if there is no such task.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.editing_id = Some(id.to_string());
        true
    }

    /// Leaves edit mode without changing any task.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    /// The task currently in edit mode.
    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    /// Overwrites the text and priority of `id` and leaves edit mode.
    ///
    /// Unlike [`TaskBoard::add_task`] the text is taken as given, blank or
    /// not. Returns `false` if there is no such task.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list could not be saved.
    pub fn save_edit(
        &mut self,
        id: &str,
        text: &str,
        priority: Priority,
    ) -> Result<bool, StoreError> {
        self.editing_id = None;
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        let task = &mut self.tasks[index];
        task.text = text.to_string();
        task.priority = priority;
        self.save_tasks()?;
        Ok(true)
    }

    /// Sets which tasks [`TaskBoard::visible_tasks`] returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the view settings could not be saved.
    pub fn set_filter(&mut self, filter: Filter) -> Result<(), StoreError> {
        self.view.filter = filter;
        persist::save_view(self.store, self.view)
    }

    /// Sets the order of [`TaskBoard::visible_tasks`].
    ///
    /// # Errors
    ///
    /// Returns an error if the view settings could not be saved.
    pub fn set_sort(&mut self, sort: SortKey) -> Result<(), StoreError> {
        self.view.sort = sort;
        persist::save_view(self.store, self.view)
    }

    /// Sets the name used in the greeting.
    ///
    /// # Errors
    ///
    /// Returns an error if the name could not be saved.
    pub fn set_greeting_name(&mut self, name: &str) -> Result<(), StoreError> {
        name.clone_into(&mut self.greeting_name);
        persist::save_name(self.store, name)
    }

    /// Tasks passing the filter, in the chosen order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let mut visible: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| self.view.filter.matches(task))
            .collect();
        if self.view.sort == SortKey::Priority {
            // sort_by_key is stable, so equal priorities keep insertion order.
            visible.sort_by_key(|task| Reverse(task.priority.rank()));
        }
        visible
    }

    /// Share of tasks done, as a whole percentage rounded half up. Zero for
    /// an empty board.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.tasks.len();
        if total == 0 {
            return 0;
        }
        let done = self.tasks.iter().filter(|task| task.done).count();
        let percent = (200 * done + total) / (2 * total);
        u8::try_from(percent).unwrap_or(100)
    }

    /// "Hello" or "Hello, <name>".
    #[must_use]
    pub fn greeting(&self) -> String {
        if self.greeting_name.is_empty() {
            "Hello".to_string()
        } else {
            format!("Hello, {}", self.greeting_name)
        }
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The task with exactly this id.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> Filter {
        self.view.filter
    }

    /// Active sort key.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.view.sort
    }

    /// Saved greeting name; empty when unset.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        &self.greeting_name
    }

    /// Expands an id or unique id prefix to a full task id.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if nothing or more than one task matches.
    pub fn resolve_id(&self, needle: &str) -> Result<String, LookupError> {
        let needle = needle.trim();
        if let Some(task) = self.task(needle) {
            return Ok(task.id.clone());
        }
        let prefixed = |task: &&Task| !needle.is_empty() && task.id.starts_with(needle);
        let mut matches = self.tasks.iter().filter(prefixed);
        match (matches.next(), matches.count()) {
            (Some(task), 0) => Ok(task.id.clone()),
            (Some(_), rest) => Err(LookupError::Ambiguous {
                prefix: needle.to_string(),
                count: rest + 1,
            }),
            (None, _) => Err(LookupError::NotFound(needle.to_string())),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn save_tasks(&self) -> Result<(), StoreError> {
        persist::save_tasks(self.store, &self.tasks)
    }
}

/// Keeps the first task for each id; later duplicates are dropped.
fn dedupe_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = std::collections::HashSet::new();
    tasks
        .into_iter()
        .filter(|task| {
            let fresh = seen.insert(task.id.clone());
            if !fresh {
                tracing::warn!(id = %task.id, "dropping saved task with duplicate id");
            }
            fresh
        })
        .collect()
}
