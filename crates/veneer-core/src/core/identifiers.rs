// veneer-core/src/core/identifiers.rs
// ============================================================================
// Module: Veneer Identifiers
// Description: Canonical opaque identifiers for interfaces, members, and decorators.
// Purpose: Provide strongly typed, serializable names with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical string-based names used throughout
//! Veneer. Names are opaque and serialize as strings. Validation is handled
//! at the decorator build boundary rather than within these simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Human-readable label for a class decorator, used in diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecoratorName(String);

impl DecoratorName {
    /// Creates a new decorator name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecoratorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DecoratorName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DecoratorName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Name of an interface description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceName(String);

impl InterfaceName {
    /// Creates a new interface name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for InterfaceName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for InterfaceName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Name of a single interface member (method or attribute).
///
/// Member names order lexicographically; decorator application walks members
/// in this order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberName(String);

impl MemberName {
    /// Creates a new member name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for MemberName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MemberName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Name of a decoration target class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    /// Creates a new class name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
