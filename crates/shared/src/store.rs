use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::SERVICE_VERSION;

/// Session used by chat requests that do not name one.
pub const DEFAULT_SESSION_ID: &str = "default";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store lock was poisoned by a panicking request")]
    Poisoned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub timestamp: DateTime<Utc>,
    pub input: String,
    pub output: String,
    pub mode: String,
    pub session_id: String,
}

#[derive(Debug, Clone)]
pub struct NewChatEntry {
    pub input: String,
    pub output: String,
    pub mode: String,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    entries: VecDeque<ChatEntry>,
}

impl ChatSession {
    fn new(session_id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            session_id,
            created_at,
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<ChatEntry> {
        self.entries.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub active: bool,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub requests_processed: u64,
    pub total_sessions: u64,
    pub last_improvement_run: Option<DateTime<Utc>>,
    pub independent_mode: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct StoreSettings {
    pub history_limit: usize,
    pub independent_mode: bool,
}

struct StoreState {
    sessions: HashMap<String, ChatSession>,
    creation_order: Vec<String>,
    status: SystemStatus,
}

impl StoreState {
    fn ensure_session(&mut self, session_id: &str, now: DateTime<Utc>) -> &mut ChatSession {
        if !self.sessions.contains_key(session_id) {
            self.creation_order.push(session_id.to_string());
            self.status.total_sessions = self.status.total_sessions.saturating_add(1);
        }

        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| ChatSession::new(session_id.to_string(), now))
    }
}

/// Process-lifetime session log and status counters. Clones share state.
#[derive(Clone)]
pub struct Store {
    state: Arc<Mutex<StoreState>>,
    history_limit: usize,
}

impl Store {
    pub fn new(settings: StoreSettings, started_at: DateTime<Utc>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                sessions: HashMap::new(),
                creation_order: Vec::new(),
                status: SystemStatus {
                    active: true,
                    version: SERVICE_VERSION.to_string(),
                    started_at,
                    requests_processed: 0,
                    total_sessions: 0,
                    last_improvement_run: None,
                    independent_mode: settings.independent_mode,
                },
            })),
            history_limit: settings.history_limit.max(1),
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn record_request(&self) -> Result<u64, StoreError> {
        let mut state = self.lock()?;
        state.status.requests_processed = state.status.requests_processed.saturating_add(1);
        Ok(state.status.requests_processed)
    }

    /// Appends an exchange to `session_id`, creating the session on first use,
    /// and evicts the oldest entries beyond the history limit.
    pub fn append_entry(
        &self,
        session_id: &str,
        entry: NewChatEntry,
        now: DateTime<Utc>,
    ) -> Result<ChatEntry, StoreError> {
        let history_limit = self.history_limit;
        let mut state = self.lock()?;
        let session = state.ensure_session(session_id, now);

        let stored = ChatEntry {
            timestamp: now,
            input: entry.input,
            output: entry.output,
            mode: entry.mode,
            session_id: session_id.to_string(),
        };
        session.entries.push_back(stored.clone());
        while session.entries.len() > history_limit {
            session.entries.pop_front();
        }

        Ok(stored)
    }

    /// Issues a fresh identifier that no existing session uses.
    pub fn create_session(&self, now: DateTime<Utc>) -> Result<ChatSession, StoreError> {
        let mut state = self.lock()?;
        let session_id = loop {
            let candidate = Uuid::new_v4().simple().to_string();
            if !state.sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        Ok(state.ensure_session(&session_id, now).clone())
    }

    pub fn session(&self, session_id: &str) -> Result<Option<ChatSession>, StoreError> {
        Ok(self.lock()?.sessions.get(session_id).cloned())
    }

    /// Session identifiers in the order they were created.
    pub fn session_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock()?.creation_order.clone())
    }

    pub fn status(&self) -> Result<SystemStatus, StoreError> {
        Ok(self.lock()?.status.clone())
    }

    pub fn mark_improvement_run(&self, now: DateTime<Utc>) -> Result<(), StoreError> {
        let mut state = self.lock()?;
        let previous = state.status.last_improvement_run;
        state.status.last_improvement_run = Some(previous.map_or(now, |at| at.max(now)));
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, Utc};

    use super::{NewChatEntry, Store, StoreError, StoreSettings};

    fn store_with_limit(history_limit: usize) -> Store {
        Store::new(
            StoreSettings {
                history_limit,
                independent_mode: true,
            },
            Utc::now(),
        )
    }

    fn entry(input: &str) -> NewChatEntry {
        NewChatEntry {
            input: input.to_string(),
            output: format!("echo {input}"),
            mode: "chat".to_string(),
        }
    }

    #[test]
    fn evicts_oldest_entry_after_cap_is_exceeded() {
        let store = store_with_limit(100);
        let now = Utc::now();

        for index in 1..=101 {
            store
                .append_entry("s1", entry(&format!("message {index}")), now)
                .expect("append should succeed");
        }

        let session = store
            .session("s1")
            .expect("lookup should succeed")
            .expect("session should exist");
        assert_eq!(session.len(), 100);

        let inputs: Vec<&str> = session.entries().map(|entry| entry.input.as_str()).collect();
        assert_eq!(inputs.first().copied(), Some("message 2"));
        assert_eq!(inputs.last().copied(), Some("message 101"));
        assert!(!inputs.contains(&"message 1"));
    }

    #[test]
    fn keeps_entries_in_append_order() {
        let store = store_with_limit(10);
        let now = Utc::now();
        for input in ["a", "b", "c"] {
            store
                .append_entry("ordered", entry(input), now)
                .expect("append should succeed");
        }

        let entries = store
            .session("ordered")
            .expect("lookup should succeed")
            .expect("session should exist")
            .into_entries();
        let inputs: Vec<String> = entries.into_iter().map(|entry| entry.input).collect();
        assert_eq!(inputs, vec!["a", "b", "c"]);
    }

    #[test]
    fn created_session_ids_are_never_reused() {
        let store = store_with_limit(10);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let session = store
                .create_session(Utc::now())
                .expect("create should succeed");
            assert!(session.is_empty());
            assert!(seen.insert(session.session_id));
        }

        let status = store.status().expect("status should read");
        assert_eq!(status.total_sessions, 200);
    }

    #[test]
    fn implicit_sessions_are_listed_in_creation_order() {
        let store = store_with_limit(10);
        let now = Utc::now();
        store
            .append_entry("first", entry("x"), now)
            .expect("append should succeed");
        let created = store.create_session(now).expect("create should succeed");
        store
            .append_entry("first", entry("y"), now)
            .expect("append should succeed");

        assert_eq!(
            store.session_ids().expect("listing should succeed"),
            vec!["first".to_string(), created.session_id]
        );
        assert_eq!(store.status().expect("status").total_sessions, 2);
    }

    #[test]
    fn unknown_session_is_absent() {
        let store = store_with_limit(10);
        assert!(
            store
                .session("never-created")
                .expect("lookup should succeed")
                .is_none()
        );
    }

    #[test]
    fn counters_only_move_forward() {
        let store = store_with_limit(10);
        let first = store.record_request().expect("record should succeed");
        let second = store.record_request().expect("record should succeed");
        assert_eq!((first, second), (1, 2));

        let later = Utc::now();
        store
            .mark_improvement_run(later)
            .expect("mark should succeed");
        store
            .mark_improvement_run(later - Duration::hours(1))
            .expect("mark should succeed");
        assert_eq!(
            store.status().expect("status").last_improvement_run,
            Some(later)
        );
    }

    #[test]
    fn zero_history_limit_is_raised_to_one() {
        let store = store_with_limit(0);
        assert_eq!(store.history_limit(), 1);

        let now = Utc::now();
        store.append_entry("s1", entry("first"), now).expect("append");
        store.append_entry("s1", entry("second"), now).expect("append");
        let entries = store
            .session("s1")
            .expect("session lookup should succeed")
            .expect("session should exist")
            .into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].input, "second");
    }

    #[test]
    fn panicked_holder_surfaces_as_poisoned_error() {
        let store = store_with_limit(10);
        let holder = store.clone();
        let joined = std::thread::spawn(move || {
            let _guard = holder.state.lock().expect("lock should be free");
            panic!("request handler panicked while holding the store");
        })
        .join();
        assert!(joined.is_err());

        assert!(matches!(store.record_request(), Err(StoreError::Poisoned)));
        assert!(matches!(
            store.append_entry("s1", entry("hello"), Utc::now()),
            Err(StoreError::Poisoned)
        ));
        assert!(matches!(store.session_ids(), Err(StoreError::Poisoned)));
        assert!(matches!(
            store.create_session(Utc::now()),
            Err(StoreError::Poisoned)
        ));
    }
}
