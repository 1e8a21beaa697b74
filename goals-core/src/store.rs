use tracing::{debug, info, warn};

/// Controls what `commit_draft` does at the edges.
///
/// The default is fully permissive: empty drafts are committed as empty
/// entries and the draft is left in place after a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitPolicy {
    pub clear_draft_on_commit: bool,
    pub reject_empty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Appended { index: usize },
    RejectedEmpty,
}

impl CommitOutcome {
    pub fn appended(&self) -> Option<usize> {
        match self {
            CommitOutcome::Appended { index } => Some(*index),
            CommitOutcome::RejectedEmpty => None,
        }
    }
}

/// Change notification delivered to subscribers after the state is updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    DraftChanged { draft: String },
    GoalCommitted { index: usize, goal: String },
    CommitRejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Owns the draft text and the append-only list of committed goals.
pub struct GoalListStore {
    draft: String,
    goals: Vec<String>,
    policy: CommitPolicy,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for GoalListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GoalListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoalListStore")
            .field("draft", &self.draft)
            .field("goals", &self.goals)
            .field("policy", &self.policy)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GoalListStore {
    pub fn new() -> Self {
        Self::with_policy(CommitPolicy::default())
    }

    pub fn with_policy(policy: CommitPolicy) -> Self {
        Self {
            draft: String::new(),
            goals: Vec::new(),
            policy,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Bumped on every observable mutation. Setting the draft to its current
    /// value does not count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the draft wholesale.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.draft {
            return;
        }
        debug!(len = text.chars().count(), "draft updated");
        self.draft = text;
        self.revision += 1;
        let event = StoreEvent::DraftChanged {
            draft: self.draft.clone(),
        };
        self.notify(&event);
    }

    /// Append a snapshot of the current draft to the goal list.
    pub fn commit_draft(&mut self) -> CommitOutcome {
        if self.policy.reject_empty && self.draft.trim().is_empty() {
            warn!("rejected commit of empty draft");
            self.notify(&StoreEvent::CommitRejected);
            return CommitOutcome::RejectedEmpty;
        }

        let goal = self.draft.clone();
        let index = self.goals.len();
        self.goals.push(goal.clone());
        self.revision += 1;
        info!(index, total = self.goals.len(), "goal committed");
        self.notify(&StoreEvent::GoalCommitted { index, goal });

        if self.policy.clear_draft_on_commit {
            self.set_draft(String::new());
        }
        CommitOutcome::Appended { index }
    }

    /// Register a listener. Listeners run synchronously, in subscription
    /// order, after each change has been applied.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_empty() {
        let store = GoalListStore::new();
        assert_eq!(store.draft(), "");
        assert!(store.goals().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn commit_after_typing() {
        let mut store = GoalListStore::new();
        store.set_draft("Learn testing");
        store.commit_draft();
        assert_eq!(store.goals(), ["Learn testing"]);
    }

    #[test]
    fn commits_keep_order() {
        let mut store = GoalListStore::new();
        store.set_draft("A");
        store.commit_draft();
        store.set_draft("B");
        store.commit_draft();
        assert_eq!(store.goals(), ["A", "B"]);
    }

    #[test]
    fn empty_draft_commits_empty_entry() {
        let mut store = GoalListStore::new();
        assert_eq!(store.commit_draft(), CommitOutcome::Appended { index: 0 });
        assert_eq!(store.goals(), [""]);
    }

    #[test]
    fn same_draft_twice_is_a_no_op() {
        let mut store = GoalListStore::new();
        store.set_draft("X");
        let rev = store.revision();
        store.set_draft("X");
        assert_eq!(store.draft(), "X");
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn revision_counts_observable_changes() {
        let mut store = GoalListStore::new();
        store.set_draft("Plan trip");
        assert_eq!(store.revision(), 1);
        store.commit_draft();
        assert_eq!(store.revision(), 2);
        store.set_draft("Plan trip");
        assert_eq!(store.revision(), 2);
        store.commit_draft();
        store.set_draft("");
        assert_eq!(store.revision(), 4);
    }

    #[test]
    fn draft_survives_commit_by_default() {
        let mut store = GoalListStore::new();
        store.set_draft("Read a book");
        store.commit_draft();
        store.commit_draft();
        assert_eq!(store.draft(), "Read a book");
        assert_eq!(store.goals(), ["Read a book", "Read a book"]);
    }

    #[test]
    fn clearing_policy_empties_draft() {
        let mut store = GoalListStore::with_policy(CommitPolicy {
            clear_draft_on_commit: true,
            reject_empty: false,
        });
        store.set_draft("Run 5k");
        store.commit_draft();
        assert_eq!(store.draft(), "");
        assert_eq!(store.goals(), ["Run 5k"]);
    }

    #[test]
    fn rejecting_policy_skips_blank_drafts() {
        let mut store = GoalListStore::with_policy(CommitPolicy {
            clear_draft_on_commit: false,
            reject_empty: true,
        });
        assert_eq!(store.commit_draft(), CommitOutcome::RejectedEmpty);
        store.set_draft("   ");
        let rev = store.revision();
        assert_eq!(store.commit_draft(), CommitOutcome::RejectedEmpty);
        assert!(store.is_empty());
        assert_eq!(store.revision(), rev);

        store.set_draft(" ship it ");
        assert_eq!(store.commit_draft().appended(), Some(0));
        assert_eq!(store.goals(), [" ship it "]);
    }

    #[test]
    fn listeners_see_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = GoalListStore::with_policy(CommitPolicy {
            clear_draft_on_commit: true,
            reject_empty: true,
        });
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.commit_draft();
        store.set_draft("Walk");
        store.commit_draft();

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreEvent::CommitRejected,
                StoreEvent::DraftChanged {
                    draft: "Walk".to_string()
                },
                StoreEvent::GoalCommitted {
                    index: 0,
                    goal: "Walk".to_string()
                },
                StoreEvent::DraftChanged {
                    draft: String::new()
                },
            ]
        );
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut store = GoalListStore::new();
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.set_draft("a");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_draft("b");
        store.commit_draft();

        assert_eq!(*count.borrow(), 1);
    }

    proptest! {
        #[test]
        fn set_then_read(text in ".*") {
            let mut store = GoalListStore::new();
            store.set_draft(text.clone());
            prop_assert_eq!(store.draft(), text.as_str());
        }

        #[test]
        fn last_write_wins(texts in proptest::collection::vec(".*", 1..16)) {
            let mut store = GoalListStore::new();
            for text in &texts {
                store.set_draft(text.clone());
            }
            prop_assert_eq!(store.draft(), texts.last().unwrap().as_str());
        }

        #[test]
        fn commit_appends_snapshot(
            existing in proptest::collection::vec(".*", 0..8),
            draft in ".*",
        ) {
            let mut store = GoalListStore::new();
            for goal in &existing {
                store.set_draft(goal.clone());
                store.commit_draft();
            }
            store.set_draft(draft.clone());
            let before = store.goals().to_vec();

            let outcome = store.commit_draft();

            prop_assert_eq!(outcome, CommitOutcome::Appended { index: before.len() });
            prop_assert_eq!(store.len(), before.len() + 1);
            prop_assert_eq!(&store.goals()[..before.len()], before.as_slice());
            prop_assert_eq!(store.goals()[before.len()].as_str(), draft.as_str());
        }

        #[test]
        fn length_never_decreases(
            ops in proptest::collection::vec(proptest::option::of(".{0,8}"), 0..32),
            clear in any::<bool>(),
            reject in any::<bool>(),
        ) {
            let mut store = GoalListStore::with_policy(CommitPolicy {
                clear_draft_on_commit: clear,
                reject_empty: reject,
            });
            let mut last_len = 0;
            for op in ops {
                match op {
                    Some(text) => store.set_draft(text),
                    None => {
                        store.commit_draft();
                    }
                }
                prop_assert!(store.len() >= last_len);
                last_len = store.len();
            }
        }
    }
}
