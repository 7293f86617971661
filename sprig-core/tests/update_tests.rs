use std::cell::Cell;
use std::rc::Rc;

use sprig_core::{Component, ComponentSpec, PropDef, mount_app};
use sprig_renderer::LiveHandle;
use sprig_tpl::{Slot, Template, handler};

// A list-rendering counter: one <li> per count, plus a button wired to a
// shared click counter.
fn counter_spec(clicks: Rc<Cell<f64>>) -> Rc<ComponentSpec> {
    Rc::new(
        ComponentSpec::new("x-counter")
            .prop("count", PropDef::number(0.0))
            .render(move |c| {
                let n = c.number_prop("count");
                let items: Vec<Slot> = (0..n as usize)
                    .map(|i| Slot::from(format!("<li>item {i}</li>")))
                    .collect();
                let bump = handler({
                    let clicks = clicks.clone();
                    move || clicks.set(clicks.get() + 1.0)
                });
                Some(
                    Template::new()
                        .part("<div><span>")
                        .slot(n)
                        .part(r#"</span><ul>"#)
                        .slot(items)
                        .part(r#"</ul><button onclick=""#)
                        .slot(bump)
                        .part(r#"">+1</button></div>"#),
                )
            }),
    )
}

fn connected_counter(count_attr: &str) -> (Component, LiveHandle, Rc<Cell<f64>>) {
    let clicks = Rc::new(Cell::new(0.0));
    let spec = counter_spec(clicks.clone());
    let host = LiveHandle::element(spec.tag());
    host.set_attribute("count", count_attr);
    let mut c = Component::new(spec, host.clone());
    c.connect().unwrap();
    (c, host, clicks)
}

#[test]
fn first_mount_builds_live_root() {
    let (c, host, _) = connected_counter("2");

    let root = c.root().unwrap();
    assert!(host.child(0).unwrap().ptr_eq(root));
    assert_eq!(root.tag().unwrap(), "div");

    let span = root.child(0).unwrap();
    assert_eq!(span.child(0).unwrap().text_content().unwrap(), "2");
    assert_eq!(root.child(1).unwrap().child_count(), 2);
}

#[test]
fn set_prop_rerenders_in_place() {
    let (mut c, _, _) = connected_counter("2");
    let root_before = c.root().unwrap().clone();

    c.set_prop("count", 3.0).unwrap();

    let root = c.root().unwrap();
    assert!(root.ptr_eq(&root_before));
    let span = root.child(0).unwrap();
    assert_eq!(span.child(0).unwrap().text_content().unwrap(), "3");
    assert_eq!(root.child(1).unwrap().child_count(), 3);
}

#[test]
fn shrinking_list_removes_trailing_item_only() {
    let (mut c, _, _) = connected_counter("2");
    let list = c.root().unwrap().child(1).unwrap();
    let first = list.child(0).unwrap();

    c.set_prop("count", 1.0).unwrap();

    assert_eq!(list.child_count(), 1);
    assert!(list.child(0).unwrap().ptr_eq(&first));
}

#[test]
fn cache_is_empty_after_mount_and_after_update() {
    let (mut c, _, _) = connected_counter("1");
    assert!(c.cycle().is_empty());

    c.set_prop("count", 2.0).unwrap();
    assert!(c.cycle().is_empty());
}

#[test]
fn listener_bound_at_first_render_keeps_working() {
    let (mut c, _, clicks) = connected_counter("0");

    let button = c.root().unwrap().child(2).unwrap();
    assert!(button.emit("click"));
    assert_eq!(clicks.get(), 1.0);

    // re-render produces a fresh handler placeholder, which is skipped at
    // patch time; the originally bound listener stays live
    c.set_prop("count", clicks.get()).unwrap();
    let button = c.root().unwrap().child(2).unwrap();
    assert!(button.emit("click"));
    assert_eq!(clicks.get(), 2.0);
}

#[test]
fn root_tag_change_replaces_root_wholesale() {
    let spec = Rc::new(
        ComponentSpec::new("x-swap")
            .prop("fancy", PropDef::boolean(false))
            .render(|c| {
                let tag = if c.bool_prop("fancy") { "section" } else { "div" };
                Some(
                    Template::new()
                        .part(format!("<{tag}>body</{tag}>")),
                )
            }),
    );
    let host = LiveHandle::element(spec.tag());
    let mut c = Component::new(spec, host.clone());
    c.connect().unwrap();
    let old_root = c.root().unwrap().clone();
    assert_eq!(old_root.tag().unwrap(), "div");

    c.set_prop("fancy", true).unwrap();

    let root = c.root().unwrap();
    assert!(!root.ptr_eq(&old_root));
    assert_eq!(root.tag().unwrap(), "section");
    assert!(host.child(0).unwrap().ptr_eq(root));
}

#[test]
fn sibling_roots_get_an_implicit_wrapper() {
    let spec = Rc::new(
        ComponentSpec::new("x-pair")
            .render(|_| Some(Template::new().part("<em>a</em><em>b</em>"))),
    );
    let host = LiveHandle::element(spec.tag());
    let mut c = Component::new(spec, host);
    c.connect().unwrap();

    let root = c.root().unwrap();
    assert_eq!(root.tag().unwrap(), "div");
    assert!(root.has_attribute("data-component-wrapper"));
    assert_eq!(root.child_count(), 2);
}

#[test]
fn conditional_render_refusal_keeps_previous_tree() {
    let spec = Rc::new(
        ComponentSpec::new("x-flaky")
            .prop("show", PropDef::boolean(true))
            .render(|c| {
                if c.bool_prop("show") {
                    Some(Template::new().part("<p>here</p>"))
                } else {
                    None
                }
            }),
    );
    let host = LiveHandle::element(spec.tag());
    host.set_attribute("show", "true");
    let mut c = Component::new(spec, host);
    c.connect().unwrap();
    let root = c.root().unwrap().clone();

    c.set_prop("show", false).unwrap();

    assert!(c.root().unwrap().ptr_eq(&root));
    assert_eq!(root.tag().unwrap(), "p");
}

#[test]
fn mount_app_renders_template_over_target() {
    let body = LiveHandle::element("body");
    let outlet = LiveHandle::element("div");
    body.append_child(&outlet);

    let root = mount_app(
        &Template::new().part("<main><h1>app</h1></main>"),
        &outlet,
    )
    .unwrap();

    assert_eq!(root.tag().unwrap(), "main");
    assert!(body.child(0).unwrap().ptr_eq(&root));
}
