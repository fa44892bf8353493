//! Observer: publishers broadcast [`GameEvent`]s without knowing who
//! listens.
//!
//! Subscribers are either callbacks registered on the [`EventBus`] or
//! channel receivers that drain events at their own pace.

use questlab_types::{GameEvent, GameEventKind};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use tracing::{debug, info};

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&GameEvent)>;

enum Subscriber {
    Callback(Callback),
    Channel(mpsc::Sender<GameEvent>),
}

/// Single-threaded event bus. Subscribers are notified in subscription
/// order.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
    published: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("published", &self.published)
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = self.add(Subscriber::Callback(Box::new(callback)));
        debug!(subscription = id.0, "Callback subscribed");
        id
    }

    /// Subscribes a channel; events are delivered as owned clones.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, mpsc::Receiver<GameEvent>) {
        let (tx, rx) = mpsc::channel();
        let id = self.add(Subscriber::Channel(tx));
        debug!(subscription = id.0, "Channel subscribed");
        (id, rx)
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn published(&self) -> u64 {
        self.published
    }

    /// Notifies every subscriber and returns how many received the event.
    ///
    /// Channel subscribers whose receiver has been dropped are removed.
    pub fn publish(&mut self, event: &GameEvent) -> usize {
        self.published += 1;
        let mut delivered = 0;
        self.subscribers.retain_mut(|(id, subscriber)| match subscriber {
            Subscriber::Callback(callback) => {
                callback(event);
                delivered += 1;
                true
            }
            Subscriber::Channel(tx) => {
                if tx.send(event.clone()).is_ok() {
                    delivered += 1;
                    true
                } else {
                    debug!(subscription = id.0, "Channel closed, unsubscribing");
                    false
                }
            }
        });
        delivered
    }
}

/// Unlocks achievements from the event stream.
#[derive(Debug, Default)]
pub struct AchievementTracker {
    kills: u32,
    quests_completed: u32,
    unlocked: Vec<String>,
}

impl AchievementTracker {
    pub const FIRST_BLOOD: &'static str = "First Blood";
    pub const MONSTER_HUNTER: &'static str = "Monster Hunter";
    pub const QUEST_MASTER: &'static str = "Quest Master";
    pub const SEASONED: &'static str = "Seasoned Adventurer";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker and subscribes it to `bus`. The tracker is shared
    /// between the caller and the bus callback.
    pub fn attach(bus: &mut EventBus) -> (Rc<RefCell<Self>>, SubscriptionId) {
        let tracker = Rc::new(RefCell::new(Self::new()));
        let observer = Rc::clone(&tracker);
        let id = bus.subscribe(move |event| observer.borrow_mut().on_event(event));
        (tracker, id)
    }

    pub fn on_event(&mut self, event: &GameEvent) {
        match &event.kind {
            GameEventKind::Died { .. } => {
                self.kills += 1;
                if self.kills == 1 {
                    self.unlock(Self::FIRST_BLOOD);
                }
                if self.kills == 10 {
                    self.unlock(Self::MONSTER_HUNTER);
                }
            }
            GameEventKind::QuestCompleted { .. } => {
                self.quests_completed += 1;
                if self.quests_completed == 3 {
                    self.unlock(Self::QUEST_MASTER);
                }
            }
            GameEventKind::LevelUp { level, .. } if *level >= 5 => {
                self.unlock(Self::SEASONED);
            }
            _ => {}
        }
    }

    fn unlock(&mut self, name: &str) {
        if !self.has(name) {
            info!(achievement = name, "Achievement unlocked");
            self.unlocked.push(name.to_string());
        }
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.unlocked.iter().any(|a| a == name)
    }

    #[must_use]
    pub fn unlocked(&self) -> &[String] {
        &self.unlocked
    }

    #[must_use]
    pub fn kills(&self) -> u32 {
        self.kills
    }
}

/// Collects narrative lines for everything published, like a combat log
/// window.
pub fn narrate(bus: &mut EventBus) -> (Rc<RefCell<Vec<String>>>, SubscriptionId) {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    let id = bus.subscribe(move |event| sink.borrow_mut().push(event.describe()));
    (lines, id)
}
