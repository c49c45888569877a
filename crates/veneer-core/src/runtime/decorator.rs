// veneer-core/src/runtime/decorator.rs
// ============================================================================
// Module: Class Decorator Runtime
// Description: Validated class decorators that overlay interface methods.
// Purpose: Build decorators from interface sources and apply them to classes.
// Dependencies: crate::audit, crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! [`ClassDecorator::build`] validates that every member of an interface
//! classifies as a method, then captures the member set into a reusable
//! decorator. Applying the decorator walks the captured members in
//! lexicographic order and rebinds each class attribute slot with a callable
//! freshly produced by the method decorator factory. Build never touches a
//! class; application mutates only the target class, one slot at a time,
//! with no rollback on factory failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::audit::DecorationAuditEvent;
use crate::audit::DecorationAuditSink;
use crate::audit::now_millis;
use crate::core::args::FactoryArgs;
use crate::core::class::MethodClass;
use crate::core::identifiers::DecoratorName;
use crate::core::identifiers::InterfaceName;
use crate::core::identifiers::MemberName;
use crate::core::interface::MemberKind;
use crate::interfaces::FactoryError;
use crate::interfaces::InterfaceSource;
use crate::interfaces::MethodDecoratorFactory;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Interface shape rejection raised by [`ClassDecorator::build`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "{decorator_name} does not support interfaces with non-method attributes: {interface_name} declares {}",
    join_members(.members)
)]
pub struct InterfaceShapeError {
    /// Name of the decorator whose construction failed.
    pub decorator_name: DecoratorName,
    /// Interface whose shape was rejected.
    pub interface_name: InterfaceName,
    /// Members that did not classify as methods.
    pub members: Vec<MemberName>,
}

/// Joins member names for the shape error display.
fn join_members(members: &[MemberName]) -> String {
    members
        .iter()
        .map(MemberName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// SECTION: Class Decorator
// ============================================================================

/// Reusable class decorator that overlays interface methods onto classes.
#[derive(Clone)]
pub struct ClassDecorator {
    /// Diagnostic label for this decorator.
    decorator_name: DecoratorName,
    /// Interface the member set was captured from.
    interface_name: InterfaceName,
    /// Members captured at validation time, in application order.
    members: Vec<MemberName>,
    /// Factory producing one replacement callable per member.
    factory: Arc<dyn MethodDecoratorFactory>,
    /// Extras forwarded verbatim to every factory invocation.
    args: FactoryArgs,
    /// Optional audit sink for application events.
    audit: Option<Arc<dyn DecorationAuditSink>>,
}

impl ClassDecorator {
    /// Builds a class decorator from an interface source.
    ///
    /// Validation happens here, before any decorator exists: every member of
    /// the interface must classify as a method. Members the source cannot
    /// classify count as non-methods. The member set is captured at this
    /// point; later changes to the source do not affect the decorator.
    ///
    /// # Errors
    ///
    /// Returns [`InterfaceShapeError`] naming the decorator and the
    /// offending members when the interface declares non-method members.
    pub fn build(
        decorator_name: impl Into<DecoratorName>,
        interface: &dyn InterfaceSource,
        factory: Arc<dyn MethodDecoratorFactory>,
        args: FactoryArgs,
    ) -> Result<Self, InterfaceShapeError> {
        let decorator_name = decorator_name.into();
        let mut members = interface.member_names();
        members.sort();
        members.dedup();

        let offending: Vec<MemberName> = members
            .iter()
            .filter(|member| interface.classify(member) != Some(MemberKind::Method))
            .cloned()
            .collect();
        if !offending.is_empty() {
            return Err(InterfaceShapeError {
                decorator_name,
                interface_name: interface.interface_name().clone(),
                members: offending,
            });
        }

        Ok(Self {
            decorator_name,
            interface_name: interface.interface_name().clone(),
            members,
            factory,
            args,
            audit: None,
        })
    }

    /// Attaches an audit sink receiving application events.
    #[must_use]
    pub fn with_audit_sink(mut self, sink: Arc<dyn DecorationAuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Returns the decorator's diagnostic name.
    #[must_use]
    pub fn decorator_name(&self) -> &DecoratorName {
        &self.decorator_name
    }

    /// Returns the name of the interface the member set came from.
    #[must_use]
    pub fn interface_name(&self) -> &InterfaceName {
        &self.interface_name
    }

    /// Returns the captured members in application order.
    #[must_use]
    pub fn member_names(&self) -> &[MemberName] {
        &self.members
    }

    /// Applies the decorator to a class, rebinding every captured member.
    ///
    /// For each member `m`, the factory is invoked with `m` first and the
    /// captured extras alongside, and the produced callable replaces
    /// whatever the slot held. The pass is sequential and non-transactional:
    /// a factory failure leaves earlier members rebound and later members
    /// untouched. Applying twice with a deterministic factory is equivalent
    /// to applying once.
    ///
    /// # Errors
    ///
    /// Returns the factory's [`FactoryError`] unmodified when it fails to
    /// produce a callable for some member.
    pub fn apply(&self, class: &mut MethodClass) -> Result<(), FactoryError> {
        for member in &self.members {
            match self.factory.decorate(member, &self.args) {
                Ok(method) => {
                    class.define_method(member.clone(), method);
                    self.record(class, "veneer_member_rebound", Some(member), "ok");
                }
                Err(err) => {
                    self.record(class, "veneer_decoration_failed", Some(member), "error");
                    return Err(err);
                }
            }
        }
        self.record(class, "veneer_decoration_applied", None, "ok");
        Ok(())
    }

    /// Emits an audit event when a sink is attached.
    fn record(
        &self,
        class: &MethodClass,
        event: &'static str,
        member: Option<&MemberName>,
        outcome: &'static str,
    ) {
        if let Some(sink) = &self.audit {
            sink.record(&DecorationAuditEvent {
                event,
                timestamp_ms: now_millis(),
                decorator_name: self.decorator_name.to_string(),
                interface_name: self.interface_name.to_string(),
                class_name: class.name().to_string(),
                member: member.map(MemberName::to_string),
                outcome,
            });
        }
    }
}

impl fmt::Debug for ClassDecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDecorator")
            .field("decorator_name", &self.decorator_name)
            .field("interface_name", &self.interface_name)
            .field("members", &self.members)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
