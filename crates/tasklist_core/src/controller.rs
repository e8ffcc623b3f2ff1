//! Task-list controller.
//!
//! # Responsibility
//! - Own the task list and its injected collaborators.
//! - Apply each user intent as: state transition, view update, recount,
//!   persist.
//! - Run the two-phase delete (fade now, commit after `DELETE_FADE_DELAY`).
//!
//! # Invariants
//! - The list is the only source of truth; the surface is rewritten from it.
//! - Every completed mutation is followed by a recount and a full persist.
//! - Storage failures are logged and never abort an operation.

use crate::clock::Clock;
use crate::input::Intent;
use crate::model::task::{Task, TaskId};
use crate::scheduler::{DeferredScheduler, DELETE_FADE_DELAY};
use crate::state::counts::TaskCounts;
use crate::state::task_list::{TaskList, TaskListError};
use crate::storage::{load_task_list, save_task_list, KeyValueStore, StorageResult};
use crate::view::surface::RenderSurface;
use crate::view::view_state::compute_view_state;
use log::{debug, error, info, warn};
use std::time::Instant;

/// Event-driven controller over one task list.
pub struct TaskListController<S, R, D, C> {
    list: TaskList,
    store: S,
    surface: R,
    scheduler: D,
    clock: C,
}

impl<S, R, D, C> TaskListController<S, R, D, C>
where
    S: KeyValueStore,
    R: RenderSurface,
    D: DeferredScheduler,
    C: Clock,
{
    /// Builds the controller and runs `initialize`.
    pub fn new(store: S, surface: R, scheduler: D, clock: C) -> Self {
        let mut controller = Self {
            list: TaskList::new(),
            store,
            surface,
            scheduler,
            clock,
        };
        controller.initialize();
        controller
    }

    /// Loads the stored list and redraws everything from it.
    ///
    /// Missing or corrupt stored data yields an empty list.
    pub fn initialize(&mut self) {
        self.list = load_task_list(&self.store);
        self.surface.clear_rows();
        for task in self.list.tasks() {
            self.surface.append_row(task);
        }
        self.apply_view_state();
        let counts = self.recompute_counts();
        info!(
            "event=controller_init module=controller status=ok total={} completed={}",
            counts.total, counts.completed
        );
    }

    /// Adds a pending task from raw input text.
    ///
    /// Returns the new id, or `None` when the text is blank or no id greater
    /// than the stored ones is left.
    pub fn add_task(&mut self, raw_text: &str) -> Option<TaskId> {
        if raw_text.trim().is_empty() {
            debug!("event=task_add module=controller status=skipped reason=blank_input");
            return None;
        }

        let id = match self.list.next_id(self.clock.now_ms()) {
            Ok(id) => id,
            Err(err) => {
                error!(
                    "event=task_add module=controller status=error error_code=id_space_exhausted error={}",
                    err
                );
                return None;
            }
        };
        let task = self.list.add(id, raw_text)?.clone();

        self.surface.clear_input();
        self.surface.append_row(&task);
        self.apply_view_state();
        self.after_mutation("task_add");
        Some(id)
    }

    /// Flips completion of `id` and mirrors it on the row.
    ///
    /// # Errors
    /// - `NotFound` when `id` is not in the list. Only displayed rows can
    ///   request a toggle, so this is a caller bug; nothing is changed.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<bool, TaskListError> {
        match self.list.toggle(id) {
            Ok(done) => {
                self.surface.set_row_done(id, done);
                self.after_mutation("task_toggle");
                Ok(done)
            }
            Err(err) => {
                warn!(
                    "event=task_toggle module=controller status=error error_code=task_not_found id={}",
                    id
                );
                Err(err)
            }
        }
    }

    /// First delete phase: fades the row and schedules the commit.
    ///
    /// Returns `false` without scheduling when `id` is unknown.
    pub fn mark_for_deletion(&mut self, id: TaskId) -> bool {
        if self.list.get(id).is_none() {
            return false;
        }
        self.surface.mark_row_fading(id);
        self.scheduler.schedule(id, DELETE_FADE_DELAY);
        debug!("event=task_delete module=controller status=scheduled id={id}");
        true
    }

    /// Second delete phase: removes the task and its row.
    ///
    /// Absent ids are a no-op and return `None`.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.list.remove(id)?;
        self.surface.remove_row(id);
        self.apply_view_state();
        self.after_mutation("task_delete");
        Some(removed)
    }

    /// Removes every task.
    pub fn delete_all_tasks(&mut self) {
        self.list.clear();
        self.surface.clear_rows();
        self.apply_view_state();
        self.after_mutation("task_delete_all");
    }

    /// Commits every deferred delete due at `now`; returns how many ran.
    pub fn run_due(&mut self, now: Instant) -> usize {
        self.scheduler
            .take_due(now)
            .into_iter()
            .filter_map(|id| self.delete_task(id))
            .count()
    }

    /// Earliest deadline of a deferred delete.
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.next_due().is_some()
    }

    /// Dispatches one input-surface event.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Submit(text) => {
                self.add_task(&text);
            }
            Intent::Toggle(id) => {
                if let Err(err) = self.toggle_task(id) {
                    debug!("event=intent_toggle module=controller status=ignored error={err}");
                }
            }
            Intent::Delete(id) => {
                self.mark_for_deletion(id);
            }
            Intent::DeleteAll => self.delete_all_tasks(),
        }
    }

    /// Recomputes aggregate counts and updates the three labels.
    pub fn recompute_counts(&mut self) -> TaskCounts {
        let counts = self.list.counts();
        self.surface.set_count_labels(&counts.labels());
        counts
    }

    /// Writes the full list to storage, replacing the prior value.
    pub fn persist(&mut self) -> StorageResult<()> {
        save_task_list(&mut self.store, &self.list)
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn counts(&self) -> TaskCounts {
        self.list.counts()
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply_view_state(&mut self) {
        let state = compute_view_state(&self.list);
        self.surface.set_empty_visible(state.show_empty);
        self.surface.set_counts_visible(state.show_counts);
        self.surface.set_delete_all_visible(state.show_delete_all);
    }

    fn after_mutation(&mut self, event: &'static str) {
        let counts = self.recompute_counts();
        match self.persist() {
            Ok(()) => info!(
                "event={event} module=controller status=ok total={} completed={} pending={}",
                counts.total, counts.completed, counts.pending
            ),
            Err(err) => error!(
                "event={event} module=controller status=error error_code=persist_failed error={}",
                err
            ),
        }
    }
}
