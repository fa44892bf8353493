use crate::{ModelError, ModelResult, Quest, QuestProgress, QuestStatus};
use questlab_types::{GameEvent, GameEventKind, QuestId};
use serde::{Deserialize, Serialize};

/// The quests a player has taken on, in the order they were accepted.
///
/// Every state change is also written to a journal of [`GameEvent`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestLog {
    quests: Vec<Quest>,
    gold_earned: u64,
    #[serde(skip)]
    journal: Vec<GameEvent>,
}

impl QuestLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a quest and stores it in the log.
    pub fn accept(&mut self, mut quest: Quest) -> ModelResult<QuestId> {
        if self.quests.iter().any(|q| q.id == quest.id) {
            return Err(ModelError::QuestAlreadyAccepted(quest.title));
        }
        if !quest.accept() {
            return Err(ModelError::QuestAlreadyAccepted(quest.title));
        }
        let id = quest.id;
        self.journal.push(GameEvent::now(GameEventKind::QuestAccepted {
            title: quest.title.clone(),
        }));
        self.quests.push(quest);
        Ok(id)
    }

    /// Advances a quest. The reward is credited once, on completion.
    pub fn advance(&mut self, id: QuestId, amount: u32) -> ModelResult<QuestProgress> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(ModelError::QuestNotFound(id))?;
        let outcome = quest.advance(amount);
        match outcome {
            QuestProgress::Advanced { progress, target } => {
                self.journal.push(GameEvent::now(GameEventKind::QuestProgressed {
                    title: quest.title.clone(),
                    progress,
                    target,
                }));
            }
            QuestProgress::Completed { reward } => {
                self.gold_earned += u64::from(reward);
                self.journal.push(GameEvent::now(GameEventKind::QuestCompleted {
                    title: quest.title.clone(),
                    reward,
                }));
            }
            QuestProgress::Ignored(_) => {}
        }
        Ok(outcome)
    }

    /// Abandons a quest. Returns false when it was already finished.
    pub fn abandon(&mut self, id: QuestId) -> ModelResult<bool> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(ModelError::QuestNotFound(id))?;
        Ok(quest.abandon())
    }

    #[must_use]
    pub fn get(&self, id: QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.title == title)
    }

    pub fn active(&self) -> impl Iterator<Item = &Quest> {
        self.with_status(QuestStatus::Active)
    }

    pub fn completed(&self) -> impl Iterator<Item = &Quest> {
        self.with_status(QuestStatus::Completed)
    }

    pub fn with_status(&self, status: QuestStatus) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(move |q| q.status() == status)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quest> {
        self.quests.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Total gold paid out by completed quests.
    #[must_use]
    pub fn gold_earned(&self) -> u64 {
        self.gold_earned
    }

    /// Events recorded since the log was created. Not persisted.
    #[must_use]
    pub fn journal(&self) -> &[GameEvent] {
        &self.journal
    }
}

/// Two logs are equal when they hold the same quests and earnings; the
/// journal is transient and ignored.
impl PartialEq for QuestLog {
    fn eq(&self, other: &Self) -> bool {
        self.quests == other.quests && self.gold_earned == other.gold_earned
    }
}
