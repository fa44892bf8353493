use questlab_types::QuestId;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Lifecycle of a quest.
///
/// `Available -> Active -> Completed`, with `Abandoned` reachable from the
/// first two. `Completed` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Available,
    Active,
    Completed,
    Abandoned,
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "available",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        };
        f.write_str(label)
    }
}

/// What a call to [`Quest::advance`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestProgress {
    /// Progress moved but the target is not reached yet.
    Advanced { progress: u32, target: u32 },
    /// The quest just completed. Returned once per quest.
    Completed { reward: u32 },
    /// Nothing changed, for this reason.
    Ignored(&'static str),
}

/// An objective with a numeric target, e.g. "slay 5 rats".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    progress: u32,
    target: u32,
    reward: u32,
    status: QuestStatus,
}

impl Quest {
    /// Creates an available quest. A target of zero is treated as one.
    pub fn new(title: impl Into<String>, target: u32, reward: u32) -> Self {
        Self {
            id: QuestId::new(),
            title: title.into(),
            description: String::new(),
            progress: 0,
            target: target.max(1),
            reward,
            status: QuestStatus::Available,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn progress(&self) -> u32 {
        self.progress
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn reward(&self) -> u32 {
        self.reward
    }

    #[must_use]
    pub fn status(&self) -> QuestStatus {
        self.status
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == QuestStatus::Completed
    }

    /// Moves an available quest to active. Returns false otherwise.
    pub fn accept(&mut self) -> bool {
        if self.status != QuestStatus::Available {
            return false;
        }
        self.status = QuestStatus::Active;
        true
    }

    /// Adds `amount` to the progress of an active quest.
    ///
    /// Reaching the target completes the quest and yields the reward. Any
    /// later call is ignored, so the reward is paid at most once.
    pub fn advance(&mut self, amount: u32) -> QuestProgress {
        match self.status {
            QuestStatus::Active => {}
            QuestStatus::Available => return QuestProgress::Ignored("quest has not been accepted"),
            QuestStatus::Completed => return QuestProgress::Ignored("quest is already completed"),
            QuestStatus::Abandoned => return QuestProgress::Ignored("quest was abandoned"),
        }
        if amount == 0 {
            return QuestProgress::Ignored("no progress made");
        }
        self.progress = self.progress.saturating_add(amount).min(self.target);
        if self.progress == self.target {
            self.status = QuestStatus::Completed;
            info!(quest = %self.title, reward = self.reward, "Quest completed");
            QuestProgress::Completed {
                reward: self.reward,
            }
        } else {
            QuestProgress::Advanced {
                progress: self.progress,
                target: self.target,
            }
        }
    }

    /// Gives up on a quest that is not finished. Returns false otherwise.
    pub fn abandon(&mut self) -> bool {
        match self.status {
            QuestStatus::Available | QuestStatus::Active => {
                self.status = QuestStatus::Abandoned;
                true
            }
            QuestStatus::Completed | QuestStatus::Abandoned => false,
        }
    }
}
