// veneer-core/src/audit.rs
// ============================================================================
// Module: Decoration Audit Logging
// Description: Structured audit events for decorator application.
// Purpose: Emit rebinding audit logs without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines audit event payloads and sinks for decorator
//! application. It is intentionally lightweight so embedders can route
//! events to their preferred logging pipeline without redesign. No sink is
//! attached by default; decoration stays silent unless one is provided.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Decoration audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct DecorationAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Decorator name.
    pub decorator_name: String,
    /// Source interface name.
    pub interface_name: String,
    /// Target class name.
    pub class_name: String,
    /// Member being rebound, for per-member events.
    pub member: Option<String>,
    /// Outcome label.
    pub outcome: &'static str,
}

/// Returns the current wall-clock time in milliseconds since epoch.
pub(crate) fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for decoration events.
pub trait DecorationAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &DecorationAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl DecorationAuditSink for StderrAuditSink {
    fn record(&self, event: &DecorationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that retains events in memory, for tests and demos.
#[derive(Default)]
pub struct MemoryAuditSink {
    /// Recorded events protected by a mutex.
    events: Mutex<Vec<DecorationAuditEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<DecorationAuditEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl DecorationAuditSink for MemoryAuditSink {
    fn record(&self, event: &DecorationAuditEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DecorationAuditEvent;
    use super::DecorationAuditSink;
    use super::MemoryAuditSink;
    use super::now_millis;

    #[test]
    fn memory_sink_retains_events_in_order() {
        let sink = MemoryAuditSink::new();
        for member in ["start", "stop"] {
            sink.record(&DecorationAuditEvent {
                event: "veneer_member_rebound",
                timestamp_ms: now_millis(),
                decorator_name: "trace".to_string(),
                interface_name: "ILifecycle".to_string(),
                class_name: "Worker".to_string(),
                member: Some(member.to_string()),
                outcome: "ok",
            });
        }
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].member.as_deref(), Some("start"));
        assert_eq!(events[1].member.as_deref(), Some("stop"));
    }
}
