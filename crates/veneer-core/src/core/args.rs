// veneer-core/src/core/args.rs
// ============================================================================
// Module: Factory Arguments
// Description: Extra positional and named arguments forwarded to factories.
// Purpose: Carry caller-supplied extras verbatim into every factory invocation.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Extra arguments given to [`ClassDecorator::build`] are forwarded, once per
//! interface member and unmodified, to every method decorator factory
//! invocation. The member name always travels separately as the first
//! argument; this type carries only the extras.
//!
//! [`ClassDecorator::build`]: crate::runtime::ClassDecorator::build

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Factory Arguments
// ============================================================================

/// Extra positional and named arguments forwarded to factory invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactoryArgs {
    /// Positional extras, in caller order.
    pub positional: Vec<Value>,
    /// Named extras keyed by argument name.
    pub named: BTreeMap<String, Value>,
}

impl FactoryArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a positional extra.
    #[must_use]
    pub fn with_positional(mut self, value: Value) -> Self {
        self.positional.push(value);
        self
    }

    /// Inserts a named extra, replacing any previous value for the name.
    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: Value) -> Self {
        self.named.insert(name.into(), value);
        self
    }

    /// Returns true when no extras are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}
