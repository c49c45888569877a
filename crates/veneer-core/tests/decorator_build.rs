// veneer-core/tests/decorator_build.rs
// ============================================================================
// Module: Decorator Build Tests
// Description: Tests for interface shape validation at decorator build time.
// Purpose: Ensure builds fail fast on non-method members and capture member sets.
// Dependencies: veneer-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::sync::Arc;

use serde_json::Value;
use veneer_core::ClassDecorator;
use veneer_core::FactoryArgs;
use veneer_core::FactoryError;
use veneer_core::Instance;
use veneer_core::InterfaceDescription;
use veneer_core::MemberName;
use veneer_core::MethodDecoratorFactory;
use veneer_core::MethodError;
use veneer_core::MethodFn;

fn name_factory() -> Arc<dyn MethodDecoratorFactory> {
    Arc::new(
        |method_name: &MemberName, _args: &FactoryArgs| -> Result<MethodFn, FactoryError> {
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
fn build_succeeds_for_all_method_interface() {
    let iface = InterfaceDescription::new("ILifecycle")
        .with_method("start")
        .with_method("stop");
    let decorator =
        ClassDecorator::build("trace", &iface, name_factory(), FactoryArgs::empty()).unwrap();
    let names: Vec<&str> = decorator
        .member_names()
        .iter()
        .map(MemberName::as_str)
        .collect();
    assert_eq!(names, vec!["start", "stop"]);
    assert_eq!(decorator.decorator_name().as_str(), "trace");
    assert_eq!(decorator.interface_name().as_str(), "ILifecycle");
}

#[test]
fn build_rejects_interface_with_non_method_member() {
    let iface = InterfaceDescription::new("ILifecycle")
        .with_method("start")
        .with_attribute("timeout");
    let err =
        ClassDecorator::build("trace", &iface, name_factory(), FactoryArgs::empty()).unwrap_err();
    assert!(err.to_string().contains("trace"));
    assert_eq!(err.members, vec![MemberName::new("timeout")]);
    assert_eq!(err.decorator_name.as_str(), "trace");
}

#[test]
fn build_rejects_interface_with_only_attributes() {
    let iface = InterfaceDescription::new("IConfig")
        .with_attribute("retries")
        .with_attribute("timeout");
    let err =
        ClassDecorator::build("proxy", &iface, name_factory(), FactoryArgs::empty()).unwrap_err();
    assert!(err.to_string().contains("proxy"));
    assert_eq!(
        err.members,
        vec![MemberName::new("retries"), MemberName::new("timeout")]
    );
}

#[test]
fn build_succeeds_for_empty_interface() {
    let iface = InterfaceDescription::new("IEmpty");
    let decorator =
        ClassDecorator::build("trace", &iface, name_factory(), FactoryArgs::empty()).unwrap();
    assert!(decorator.member_names().is_empty());
}

#[test]
fn repeated_builds_capture_identical_member_sets() {
    let iface = InterfaceDescription::new("ILifecycle")
        .with_method("stop")
        .with_method("start")
        .with_method("restart");
    let first =
        ClassDecorator::build("trace", &iface, name_factory(), FactoryArgs::empty()).unwrap();
    let second =
        ClassDecorator::build("trace", &iface, name_factory(), FactoryArgs::empty()).unwrap();
    assert_eq!(first.member_names(), second.member_names());
}
