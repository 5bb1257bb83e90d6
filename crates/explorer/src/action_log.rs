use std::collections::VecDeque;

use dioxus::prelude::*;

/// One change notification emitted by a story.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEntry {
    pub seq: u64,
    pub source: &'static str,
    pub detail: String,
}

/// Most recent notifications first, capped at `limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionLog {
    entries: VecDeque<ActionEntry>,
    limit: usize,
    next_seq: u64,
}

impl ActionLog {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
            next_seq: 1,
        }
    }

    pub fn record(&mut self, source: &'static str, detail: impl Into<String>) {
        if self.limit == 0 {
            return;
        }
        let entry = ActionEntry {
            seq: self.next_seq,
            source,
            detail: detail.into(),
        };
        self.next_seq += 1;
        tracing::info!(source, detail = %entry.detail, "action");
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared handle provided by the shell.
pub fn use_action_log() -> Signal<ActionLog> {
    use_context::<Signal<ActionLog>>()
}

/// Returns a recorder for one story. Calling it appends to the shared log.
pub fn use_recorder(source: &'static str) -> impl FnMut(String) + Copy {
    let mut log = use_action_log();
    move |detail: String| log.write().record(source, detail)
}

#[component]
pub fn ActionLogPanel() -> Element {
    let mut log = use_action_log();
    let entries: Vec<ActionEntry> = log.read().entries().cloned().collect();

    rsx! {
        aside { class: "action-log",
            header { class: "action-log-header",
                h2 { "Actions" }
                button {
                    r#type: "button",
                    class: "action-log-clear",
                    disabled: entries.is_empty(),
                    onclick: move |_| log.write().clear(),
                    "Clear"
                }
            }
            if entries.is_empty() {
                p { class: "action-log-empty", "Interact with a story to see its change events." }
            }
            ol { class: "action-log-list",
                for entry in entries {
                    li { key: "{entry.seq}", class: "action-log-entry",
                        span { class: "action-log-source", "{entry.source}" }
                        code { "{entry.detail}" }
                    }
                }
            }
        }
    }
}
