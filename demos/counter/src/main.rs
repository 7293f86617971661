use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use sprig_core::{Component, ComponentSpec, PropDef, PropValue};
use sprig_dom::{VNode, parse};
use sprig_renderer::{LiveHandle, render};
use sprig_tpl::{RenderCycle, Template, handler};

fn main() -> Result<()> {
    let clicks = Rc::new(Cell::new(0.0_f64));

    let spec = Rc::new(
        ComponentSpec::new("app-counter")
            .prop("label", PropDef::text("clicks"))
            .prop("count", PropDef::number(0.0))
            .render({
                let clicks = clicks.clone();
                move |c| {
                    let bump = handler({
                        let clicks = clicks.clone();
                        move || clicks.set(clicks.get() + 1.0)
                    });
                    Some(
                        Template::new()
                            .part(r#"<div class="counter"><span>"#)
                            .slot(c.text_prop("label"))
                            .part(": ")
                            .slot(c.number_prop("count"))
                            .part(r#"</span><button onclick=""#)
                            .slot(bump)
                            .part(r#"">+1</button></div>"#),
                    )
                }
            })
            .on_connected(|c| println!("connected <{}>", c.host().tag().unwrap_or_default())),
    );

    // The host element comes from the stringification contract.
    let boot = RenderCycle::new();
    let host_markup = spec.markup(&[("count", PropValue::Number(3.0))]);
    let host_vnode = parse(&host_markup).map_err(anyhow::Error::msg)?;
    let host = render(&host_vnode, &boot);

    let mut counter = Component::new(spec, host.clone());
    counter.connect().map_err(anyhow::Error::msg)?;
    clicks.set(counter.number_prop("count"));
    println!("mounted:  {}", serialize(&host.to_vnode()));

    // Drive clicks through the live tree; each one re-renders by diff.
    for _ in 0..3 {
        let root = counter.root().cloned().context("component has no root")?;
        let button = find_tag(&root, "button").context("no button in tree")?;
        button.emit("click");
        counter
            .set_prop("count", clicks.get())
            .map_err(anyhow::Error::msg)?;
    }
    println!("clicked:  {}", serialize(&host.to_vnode()));

    // A host-driven attribute write closes the attribute→property loop.
    counter
        .attribute_changed("count", Some("6"), Some("10"))
        .map_err(anyhow::Error::msg)?;
    println!("external: {}", serialize(&host.to_vnode()));

    Ok(())
}

fn find_tag(node: &LiveHandle, tag: &str) -> Option<LiveHandle> {
    if node.tag().as_deref() == Some(tag) {
        return Some(node.clone());
    }
    node.children().iter().find_map(|c| find_tag(c, tag))
}

fn serialize(vnode: &VNode) -> String {
    match vnode {
        VNode::Text(t) => t.clone(),
        VNode::Element {
            tag,
            attrs,
            children,
        } => {
            let mut pairs: Vec<_> = attrs.iter().collect();
            pairs.sort();
            let attrs: String = pairs
                .iter()
                .map(|(k, v)| format!(" {k}=\"{v}\""))
                .collect();
            let children: String = children.iter().map(serialize).collect();
            format!("<{tag}{attrs}>{children}</{tag}>")
        }
    }
}
