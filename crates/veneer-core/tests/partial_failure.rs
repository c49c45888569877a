// veneer-core/tests/partial_failure.rs
// ============================================================================
// Module: Partial Failure Tests
// Description: Tests for factory failures midway through an application pass.
// Purpose: Ensure failures propagate unmodified with no rollback of rebindings.
// Dependencies: veneer-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    missing_docs,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::sync::Arc;

use serde_json::Value;
use serde_json::json;
use veneer_core::ClassAttribute;
use veneer_core::ClassDecorator;
use veneer_core::FactoryArgs;
use veneer_core::FactoryError;
use veneer_core::Instance;
use veneer_core::InterfaceDescription;
use veneer_core::MemberName;
use veneer_core::MethodClass;
use veneer_core::MethodDecoratorFactory;
use veneer_core::MethodError;
use veneer_core::MethodFn;

/// Factory that fails for one member name and succeeds for the rest.
fn failing_factory(fail_on: &str) -> Arc<dyn MethodDecoratorFactory> {
    let fail_on = fail_on.to_string();
    Arc::new(
        move |method_name: &MemberName, _args: &FactoryArgs| -> Result<MethodFn, FactoryError> {
            if method_name.as_str() == fail_on {
                return Err(FactoryError::Factory(format!(
                    "refusing to decorate {method_name}"
                )));
            }
            let label = method_name.to_string();
            let method: MethodFn = Arc::new(
                move |_instance: &mut Instance, _args: &[Value]| -> Result<Value, MethodError> {
                    Ok(Value::String(label.clone()))
                },
            );
            Ok(method)
        },
    )
}

#[test]
fn factory_failure_leaves_prefix_rebound_and_suffix_untouched() {
    let iface = InterfaceDescription::new("IThreePhase")
        .with_method("commit")
        .with_method("prepare")
        .with_method("rollback");
    // Application order is lexicographic: commit, prepare, rollback.
    let decorator = ClassDecorator::build(
        "trace",
        &iface,
        failing_factory("prepare"),
        FactoryArgs::empty(),
    )
    .unwrap();

    let mut class = MethodClass::new("TxnWorker");
    class.define_data("rollback", json!("sentinel"));

    let err = decorator.apply(&mut class).unwrap_err();
    assert_eq!(
        err,
        FactoryError::Factory("refusing to decorate prepare".to_string())
    );

    // First member was rebound before the failure.
    let mut instance = Instance::new(Arc::new(class.clone()));
    let committed = instance.call(&MemberName::new("commit"), &[]).unwrap();
    assert_eq!(committed, json!("commit"));

    // Failing member was never assigned.
    assert!(class.attribute(&MemberName::new("prepare")).is_none());

    // Later member kept its pre-existing data slot.
    match class.attribute(&MemberName::new("rollback")) {
        Some(ClassAttribute::Data(value)) => assert_eq!(value, &json!("sentinel")),
        other => panic!("rollback slot was touched: {other:?}"),
    }
}

#[test]
fn factory_failure_on_first_member_rebinds_nothing() {
    let iface = InterfaceDescription::new("ILifecycle")
        .with_method("start")
        .with_method("stop");
    let decorator = ClassDecorator::build(
        "trace",
        &iface,
        failing_factory("start"),
        FactoryArgs::empty(),
    )
    .unwrap();

    let mut class = MethodClass::new("Worker");
    let err = decorator.apply(&mut class).unwrap_err();
    assert!(err.to_string().contains("start"));
    assert!(class.attribute_names().is_empty());
}
