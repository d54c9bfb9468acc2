//! Generation tasks and flag selection

use std::fmt;

/// An independent unit of generation work
///
/// Tasks are ordered; [`Task::ALL`] is the order in which a full generation
/// runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {
    /// Create-table migration (delegated to a migration collaborator)
    Migration,
    /// UI component
    VueComponent,
    /// `create`, `edit`, `index` and `show` views
    Views,
    /// Model type
    Model,
    /// Resource controller plus web routes
    Controller,
    /// API controller plus API routes
    ApiController,
}

impl Task {
    /// Every task in execution order
    pub const ALL: [Self; 6] = [
        Self::Migration,
        Self::VueComponent,
        Self::Views,
        Self::Model,
        Self::Controller,
        Self::ApiController,
    ];

    /// Short name for logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Migration => "migration",
            Self::VueComponent => "vue",
            Self::Views => "view",
            Self::Model => "model",
            Self::Controller => "controller",
            Self::ApiController => "api",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flag-style task selection, as exposed on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Selection {
    /// Enable every task
    pub all: bool,
    /// Create-table migration
    pub migration: bool,
    /// UI component
    pub vue: bool,
    /// Views
    pub view: bool,
    /// Controller and web routes
    pub controller: bool,
    /// Model
    pub model: bool,
    /// API controller and API routes
    pub api: bool,
}

impl Selection {
    /// Selection with every task enabled
    #[must_use]
    pub const fn all() -> Self {
        Self {
            all: true,
            migration: false,
            vue: false,
            view: false,
            controller: false,
            model: false,
            api: false,
        }
    }

    /// Whether a task is selected
    #[must_use]
    pub const fn includes(&self, task: Task) -> bool {
        if self.all {
            return true;
        }
        match task {
            Task::Migration => self.migration,
            Task::VueComponent => self.vue,
            Task::Views => self.view,
            Task::Model => self.model,
            Task::Controller => self.controller,
            Task::ApiController => self.api,
        }
    }

    /// Selected tasks in execution order
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        Task::ALL
            .into_iter()
            .filter(|task| self.includes(*task))
            .collect()
    }

    /// True when nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }
}

impl FromIterator<Task> for Selection {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut selection = Self::default();
        for task in iter {
            match task {
                Task::Migration => selection.migration = true,
                Task::VueComponent => selection.vue = true,
                Task::Views => selection.view = true,
                Task::Model => selection.model = true,
                Task::Controller => selection.controller = true,
                Task::ApiController => selection.api = true,
            }
        }
        selection
    }
}
