//! Render paths written the way the template compiler emits them.
//!
//! Each `render_*` function below mirrors the output of compiling a small
//! template: conditionals go through `is_truthy`, loops through `for_each`,
//! interpolation through `escape`, and filters through the runtime registry.

mod common;

use jinja_aot::{contains, equals, escape, for_each, is_truthy, Context, Runtime, Value};
use serde_json::json;

use common::{init_tracing, json as value, user_vars};

/// ```jinja
/// {% if items %}<ul>{% for item in items %}<li>{{ loop_key }}: {{ item | title }}</li>{% endfor %}</ul>
/// {% else %}{{ empty_message | default("Nothing here") }}{% endif %}
/// ```
fn render_list(runtime: &Runtime, context: &Context) -> jinja_aot::Result<String> {
    let mut out = String::new();
    let items = context.lookup("items");
    if is_truthy(&items) {
        out.push_str("<ul>");
        let mut failure = None;
        for_each(&items, |item, key| {
            if failure.is_some() {
                return;
            }
            match runtime.apply_filter("title", item, &[]) {
                Ok(titled) => {
                    out.push_str("<li>");
                    out.push_str(&escape(&key.to_value()));
                    out.push_str(": ");
                    out.push_str(&escape(&titled));
                    out.push_str("</li>");
                }
                Err(e) => failure = Some(e),
            }
        });
        if let Some(e) = failure {
            return Err(e);
        }
        out.push_str("</ul>");
    } else {
        let message = runtime.apply_filter(
            "default",
            &context.lookup("empty_message"),
            &[Value::from("Nothing here")],
        )?;
        out.push_str(&escape(&message));
    }
    Ok(out)
}

#[test]
fn test_list_renders_items_with_escaping() {
    init_tracing();
    let runtime = Runtime::new();
    let context = runtime.create_context(&user_vars(json!({
        "items": ["tom & jerry", "<b>bold</b>"]
    })));

    let html = render_list(&runtime, &context).unwrap();
    assert_eq!(
        html,
        "<ul><li>0: Tom &amp; Jerry</li><li>1: &lt;b&gt;bold&lt;/b&gt;</li></ul>"
    );
}

#[test]
fn test_list_over_mapping_uses_keys() {
    init_tracing();
    let runtime = Runtime::new();
    let context = runtime.create_context(&user_vars(json!({
        "items": {"first": "alpha", "second": "beta"}
    })));

    let html = render_list(&runtime, &context).unwrap();
    assert_eq!(html, "<ul><li>first: Alpha</li><li>second: Beta</li></ul>");
}

#[test]
fn test_empty_collection_takes_else_branch() {
    init_tracing();
    let runtime = Runtime::new();

    let empty_list = runtime.create_context(&user_vars(json!({"items": []})));
    assert_eq!(render_list(&runtime, &empty_list).unwrap(), "Nothing here");

    let empty_map = runtime.create_context(&user_vars(json!({"items": {}})));
    assert_eq!(render_list(&runtime, &empty_map).unwrap(), "Nothing here");

    let with_message = runtime.create_context(&user_vars(json!({
        "empty_message": "<none>"
    })));
    assert_eq!(render_list(&runtime, &with_message).unwrap(), "&lt;none&gt;");
}

#[test]
fn test_global_used_unless_shadowed() {
    init_tracing();
    let runtime = Runtime::builder()
        .global("empty_message", "Configured fallback")
        .build();

    let context = runtime.create_context(&user_vars(json!({})));
    assert_eq!(render_list(&runtime, &context).unwrap(), "Configured fallback");

    let shadowed = runtime.create_context(&user_vars(json!({"empty_message": "Mine"})));
    assert_eq!(render_list(&runtime, &shadowed).unwrap(), "Mine");
}

#[test]
fn test_overridden_filter_changes_output() {
    init_tracing();
    let runtime = Runtime::builder()
        .filter("title", |v: &Value, _: &[Value]| -> jinja_aot::Result<Value> {
            Ok(Value::from(v.to_text().to_uppercase()))
        })
        .build();
    let context = runtime.create_context(&user_vars(json!({"items": ["a b"]})));
    assert_eq!(render_list(&runtime, &context).unwrap(), "<ul><li>0: A B</li></ul>");
}

/// ```jinja
/// {% for row in products | batch(2, "-") %}{{ row | size }}:{% for p in row %}{{ p }}{% endfor %};{% endfor %}
/// ```
fn render_grid(runtime: &Runtime, context: &Context) -> jinja_aot::Result<String> {
    let rows = runtime.apply_filter(
        "batch",
        &context.lookup("products"),
        &[Value::from(2), Value::from("-")],
    )?;
    let mut out = String::new();
    for (row, _) in jinja_aot::entries(&rows) {
        let size = runtime.apply_filter("size", &row, &[])?;
        out.push_str(&escape(&size));
        out.push(':');
        for_each(&row, |product, _| out.push_str(&escape(product)));
        out.push(';');
    }
    Ok(out)
}

#[test]
fn test_batched_grid_is_padded() {
    init_tracing();
    let runtime = Runtime::new();
    let context = runtime.create_context(&user_vars(json!({"products": ["a", "b", "c"]})));
    assert_eq!(render_grid(&runtime, &context).unwrap(), "2:ab;2:c-;");
}

#[test]
fn test_filter_contract_violation_aborts_render() {
    init_tracing();
    let runtime = Runtime::new();
    let context = runtime.create_context(&user_vars(json!({"products": "abc"})));
    assert!(matches!(
        render_grid(&runtime, &context),
        Err(jinja_aot::RuntimeError::InvalidArgument { .. })
    ));
}

/// ```jinja
/// {% if role in permissions %}{% if tags == ["a", "b"] %}tagged{% endif %}{% endif %}
/// ```
#[test]
fn test_membership_and_equality_in_conditions() {
    init_tracing();
    let runtime = Runtime::new();
    let context = runtime.create_context(&user_vars(json!({
        "permissions": {"admin": false, "editor": true},
        "tags": ["a", "b"]
    })));

    let permissions = context.lookup("permissions");
    assert!(contains(&Value::from("admin"), &permissions, false));
    assert!(!contains(&Value::from("viewer"), &permissions, false));
    assert!(equals(&context.lookup("tags"), &value(json!(["a", "b"]))));
    assert!(!equals(&context.lookup("tags"), &value(json!(["b", "a"]))));
}

#[test]
fn test_interpolation_escapes_exactly_once() {
    init_tracing();
    let runtime = Runtime::new();
    let context = runtime.create_context(&user_vars(json!({"name": "R&D"})));

    let rendered = escape(&context.lookup("name"));
    assert_eq!(rendered, "R&amp;D");
    // escaping output again is observable, so render paths must not do it
    assert_ne!(escape(&Value::from(rendered.as_str())), rendered);
}

#[test]
fn test_missing_variable_renders_empty() {
    init_tracing();
    let runtime = Runtime::new();
    let context = runtime.create_context(&user_vars(json!({})));
    assert_eq!(escape(&context.lookup("nope")), "");
    assert!(!is_truthy(&context.lookup("nope")));
}
