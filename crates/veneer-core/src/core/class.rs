// veneer-core/src/core/class.rs
// ============================================================================
// Module: Method Classes
// Description: Dynamic class model with named attribute slots and instances.
// Purpose: Provide the decoration target whose method slots decorators rebind.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`MethodClass`] is a named table of attribute slots, each holding either
//! a callable method or plain data. Assignment is last-write-wins per slot.
//! An [`Instance`] resolves calls through its class and passes itself to the
//! method body, which is how method-binding semantics are expressed here.
//! Classes are plain values; share a decorated class across instances with
//! `Arc` once decoration is finished.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::core::identifiers::ClassName;
use crate::core::identifiers::MemberName;

// ============================================================================
// SECTION: Methods
// ============================================================================

/// Errors raised by method bodies at call time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MethodError {
    /// Method body reported an error.
    #[error("method error: {0}")]
    Body(String),
}

/// A callable method implementation bound into a class attribute slot.
///
/// The instance is passed explicitly as the first argument; remaining call
/// arguments arrive as an untyped slice. Arity and shape of the argument
/// slice are the callable's own contract with its callers.
pub type MethodFn = Arc<dyn Fn(&mut Instance, &[Value]) -> Result<Value, MethodError> + Send + Sync>;

// ============================================================================
// SECTION: Class Attributes
// ============================================================================

/// A single class attribute slot.
#[derive(Clone)]
pub enum ClassAttribute {
    /// Callable method slot.
    Method(MethodFn),
    /// Plain data slot.
    Data(Value),
}

impl fmt::Debug for ClassAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method(_) => f.write_str("Method(..)"),
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
        }
    }
}

// ============================================================================
// SECTION: Method Class
// ============================================================================

/// Named class with dynamically assignable attribute slots.
#[derive(Debug, Clone)]
pub struct MethodClass {
    /// Class name.
    name: ClassName,
    /// Attribute slots keyed by member name.
    attributes: BTreeMap<MemberName, ClassAttribute>,
}

impl MethodClass {
    /// Creates a class with no attributes.
    #[must_use]
    pub fn new(name: impl Into<ClassName>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &ClassName {
        &self.name
    }

    /// Assigns an attribute slot, replacing any previous occupant.
    pub fn set_attribute(&mut self, member: impl Into<MemberName>, attribute: ClassAttribute) {
        self.attributes.insert(member.into(), attribute);
    }

    /// Assigns a method slot, replacing any previous occupant.
    pub fn define_method(&mut self, member: impl Into<MemberName>, method: MethodFn) {
        self.set_attribute(member, ClassAttribute::Method(method));
    }

    /// Assigns a data slot, replacing any previous occupant.
    pub fn define_data(&mut self, member: impl Into<MemberName>, value: Value) {
        self.set_attribute(member, ClassAttribute::Data(value));
    }

    /// Returns the attribute slot for a member, if assigned.
    #[must_use]
    pub fn attribute(&self, member: &MemberName) -> Option<&ClassAttribute> {
        self.attributes.get(member)
    }

    /// Returns the method in a slot, if the slot holds one.
    #[must_use]
    pub fn method(&self, member: &MemberName) -> Option<MethodFn> {
        match self.attributes.get(member) {
            Some(ClassAttribute::Method(method)) => Some(Arc::clone(method)),
            _ => None,
        }
    }

    /// Returns assigned attribute names in lexicographic order.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<MemberName> {
        self.attributes.keys().cloned().collect()
    }
}

// ============================================================================
// SECTION: Instances
// ============================================================================

/// Instance call resolution errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallError {
    /// No attribute with the requested name exists on the class.
    #[error("class has no attribute named {0}")]
    MissingAttribute(MemberName),
    /// The attribute exists but holds data rather than a callable.
    #[error("attribute {0} is not callable")]
    NotCallable(MemberName),
    /// Method body failure, propagated unmodified.
    #[error(transparent)]
    Method(#[from] MethodError),
}

/// Instance of a [`MethodClass`] with per-instance field state.
pub struct Instance {
    /// Class providing the method table.
    class: Arc<MethodClass>,
    /// Per-instance fields available to method bodies.
    fields: BTreeMap<String, Value>,
}

impl Instance {
    /// Creates an instance of the given class.
    #[must_use]
    pub fn new(class: Arc<MethodClass>) -> Self {
        Self {
            class,
            fields: BTreeMap::new(),
        }
    }

    /// Returns the instance's class.
    #[must_use]
    pub fn class(&self) -> &MethodClass {
        &self.class
    }

    /// Returns a per-instance field, if set.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets a per-instance field, replacing any previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Calls a method by name, passing this instance to the method body.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::MissingAttribute`] when the class has no such
    /// slot, [`CallError::NotCallable`] when the slot holds data, and
    /// [`CallError::Method`] when the method body fails.
    pub fn call(&mut self, member: &MemberName, args: &[Value]) -> Result<Value, CallError> {
        let method = match self.class.attribute(member) {
            None => return Err(CallError::MissingAttribute(member.clone())),
            Some(ClassAttribute::Data(_)) => return Err(CallError::NotCallable(member.clone())),
            Some(ClassAttribute::Method(method)) => Arc::clone(method),
        };
        Ok((*method)(self, args)?)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.name())
            .field("fields", &self.fields)
            .finish()
    }
}
