// veneer-core/src/core/interface.rs
// ============================================================================
// Module: Interface Descriptions
// Description: Named member sets with method/attribute classification.
// Purpose: Provide the in-memory interface description consumed by decorator builds.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An interface description is a named, fixed set of member names, each
//! classified as a method or a plain attribute. Members are held in a
//! `BTreeMap` so enumeration is deterministic (lexicographic). Descriptions
//! are immutable from the decorator's point of view; builders construct them
//! up front and hand them to [`ClassDecorator::build`].
//!
//! [`ClassDecorator::build`]: crate::runtime::ClassDecorator::build

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::InterfaceName;
use crate::core::identifiers::MemberName;
use crate::interfaces::InterfaceSource;

// ============================================================================
// SECTION: Member Classification
// ============================================================================

/// Classification of a single interface member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// Member is a callable method.
    Method,
    /// Member is a non-method attribute.
    Attribute,
}

// ============================================================================
// SECTION: Interface Description
// ============================================================================

/// Named, fixed set of interface members with per-member classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDescription {
    /// Interface name.
    name: InterfaceName,
    /// Members keyed by name; `BTreeMap` keeps enumeration deterministic.
    members: BTreeMap<MemberName, MemberKind>,
}

impl InterfaceDescription {
    /// Creates an empty interface description.
    #[must_use]
    pub fn new(name: impl Into<InterfaceName>) -> Self {
        Self {
            name: name.into(),
            members: BTreeMap::new(),
        }
    }

    /// Adds a method member, replacing any previous classification.
    #[must_use]
    pub fn with_method(mut self, member: impl Into<MemberName>) -> Self {
        self.members.insert(member.into(), MemberKind::Method);
        self
    }

    /// Adds a non-method attribute member, replacing any previous classification.
    #[must_use]
    pub fn with_attribute(mut self, member: impl Into<MemberName>) -> Self {
        self.members.insert(member.into(), MemberKind::Attribute);
        self
    }

    /// Returns the interface name.
    #[must_use]
    pub fn name(&self) -> &InterfaceName {
        &self.name
    }

    /// Returns the number of declared members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when the interface declares no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns member names in lexicographic order.
    #[must_use]
    pub fn member_names(&self) -> Vec<MemberName> {
        self.members.keys().cloned().collect()
    }

    /// Returns the classification for a member, if declared.
    #[must_use]
    pub fn classify(&self, member: &MemberName) -> Option<MemberKind> {
        self.members.get(member).copied()
    }

    /// Returns the names of members that do not classify as methods.
    #[must_use]
    pub fn non_method_members(&self) -> Vec<MemberName> {
        self.members
            .iter()
            .filter(|(_, kind)| **kind != MemberKind::Method)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl InterfaceSource for InterfaceDescription {
    fn interface_name(&self) -> &InterfaceName {
        self.name()
    }

    fn member_names(&self) -> Vec<MemberName> {
        Self::member_names(self)
    }

    fn classify(&self, member: &MemberName) -> Option<MemberKind> {
        Self::classify(self, member)
    }
}
