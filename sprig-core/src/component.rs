use std::collections::HashMap;
use std::rc::Rc;

use sprig_dom::{VNode, diff::diff, parse};
use sprig_renderer::{LiveHandle, apply, mount, render};
use sprig_tpl::{RenderCycle, Template};

use crate::props::{PropDef, PropType, PropValue, coerce_attr, to_attr_name, to_prop_name};

pub type RenderFn = Rc<dyn Fn(&Component) -> Option<Template>>;
type PropChangedFn = Rc<dyn Fn(&mut Component, &str, &PropValue)>;
type ConnectedFn = Rc<dyn Fn(&mut Component)>;

/// What the registration collaborator declares for a component class:
/// tag name, ordered reactive properties, a render function and optional
/// lifecycle hooks.
pub struct ComponentSpec {
    tag: String,
    props: Vec<(String, PropDef)>,
    render: Option<RenderFn>,
    prop_changed: Option<PropChangedFn>,
    connected: Option<ConnectedFn>,
}

impl ComponentSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: Vec::new(),
            render: None,
            prop_changed: None,
            connected: None,
        }
    }

    pub fn prop(mut self, name: impl Into<String>, def: PropDef) -> Self {
        self.props.push((name.into(), def));
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&Component) -> Option<Template> + 'static,
    {
        self.render = Some(Rc::new(f));
        self
    }

    /// Hook invoked with the property name and new value on every accepted set.
    pub fn on_prop_changed<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Component, &str, &PropValue) + 'static,
    {
        self.prop_changed = Some(Rc::new(f));
        self
    }

    /// Hook invoked once, after the first mount.
    pub fn on_connected<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Component) + 'static,
    {
        self.connected = Some(Rc::new(f));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn prop_def(&self, name: &str) -> Option<&PropDef> {
        self.props
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, def)| def)
    }

    /// The stringification contract: renders the component as host markup,
    /// `<tag-name attr="value" ...></tag-name>`. Property names are
    /// kebab-converted and booleans stringify as the literal words
    /// `true`/`false`; object-typed values have no attribute form and are
    /// skipped.
    pub fn markup(&self, props: &[(&str, PropValue)]) -> String {
        let mut attrs = String::new();
        for (name, value) in props {
            let rendered = match value {
                PropValue::Bool(b) => b.to_string(),
                PropValue::Number(n) => n.to_string(),
                PropValue::Text(s) => s.clone(),
                PropValue::Shared(_) => continue,
            };
            attrs.push(' ');
            attrs.push_str(&to_attr_name(name));
            attrs.push_str("=\"");
            attrs.push_str(&rendered);
            attrs.push('"');
        }
        format!("<{0}{1}></{0}>", self.tag, attrs)
    }
}

/// One live instance of a component: its host element, current property
/// values, the VNode tree of the last render and the mounted live root.
pub struct Component {
    spec: Rc<ComponentSpec>,
    host: LiveHandle,
    values: HashMap<String, PropValue>,
    template: Option<VNode>,
    root: Option<LiveHandle>,
    rendered: bool,
    cycle: Rc<RenderCycle>,
}

impl Component {
    pub fn new(spec: Rc<ComponentSpec>, host: LiveHandle) -> Self {
        Self {
            spec,
            host,
            values: HashMap::new(),
            template: None,
            root: None,
            rendered: false,
            cycle: Rc::new(RenderCycle::new()),
        }
    }

    pub fn host(&self) -> &LiveHandle {
        &self.host
    }

    pub fn root(&self) -> Option<&LiveHandle> {
        self.root.as_ref()
    }

    pub fn template(&self) -> Option<&VNode> {
        self.template.as_ref()
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    pub fn cycle(&self) -> &RenderCycle {
        &self.cycle
    }

    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    pub fn bool_prop(&self, name: &str) -> bool {
        self.prop(name).and_then(PropValue::as_bool).unwrap_or(false)
    }

    pub fn number_prop(&self, name: &str) -> f64 {
        self.prop(name)
            .and_then(PropValue::as_number)
            .unwrap_or(f64::NAN)
    }

    pub fn text_prop(&self, name: &str) -> String {
        self.prop(name)
            .and_then(PropValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    /// The connected-callback equivalent: initializes every declared
    /// property from its host attribute, in-memory value or default, then
    /// performs the first mount. Idempotent once rendered.
    pub fn connect(&mut self) -> Result<(), String> {
        if self.rendered {
            return Ok(());
        }

        let spec = self.spec.clone();
        for (name, def) in &spec.props {
            let attr = to_attr_name(name);
            if let Some(raw) = self.host.attribute(&attr) {
                let coerced = coerce_attr(def.ty, Some(&raw));
                self.set_prop(name.as_str(), coerced)?;
            } else if let Some(value) = self.values.get(name).filter(|v| v.truthy()).cloned() {
                self.mirror(&attr, &value);
            } else {
                self.set_prop(name.as_str(), def.default.clone())?;
            }
        }

        self.first_mount()?;
        if let Some(hook) = spec.connected.clone() {
            hook(self);
        }
        self.rendered = true;
        Ok(())
    }

    fn first_mount(&mut self) -> Result<(), String> {
        let Some(render_fn) = self.spec.render.clone() else {
            return Ok(());
        };
        let cycle = self.cycle.clone();
        let _scope = cycle.begin();
        // a render-less pass leaves the component permanently un-rendered
        let Some(template) = render_fn(self) else {
            return Ok(());
        };
        let vnode = parse(&template.compile(&cycle))?;
        let placeholder = LiveHandle::element("div");
        self.host.append_child(&placeholder);
        let root = mount(&render(&vnode, &cycle), &placeholder);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "component.mount", tag = %self.spec.tag);
        self.template = Some(vnode);
        self.root = Some(root);
        Ok(())
    }

    /// Property setter: a no-op when the value is unchanged, else stores,
    /// runs the change hook, mirrors primitives onto the host attribute and
    /// re-renders once the component has mounted.
    pub fn set_prop(&mut self, name: &str, value: impl Into<PropValue>) -> Result<(), String> {
        let value = value.into();
        if self.values.get(name) == Some(&value) {
            return Ok(());
        }
        self.values.insert(name.to_string(), value.clone());
        if self.spec.prop_def(name).is_none() {
            // undeclared properties are plain storage, never attribute-backed
            return Ok(());
        }
        if let Some(hook) = self.spec.prop_changed.clone() {
            hook(self, name, &value);
        }
        let attr = to_attr_name(name);
        self.mirror(&attr, &value);
        if self.rendered {
            self.update()?;
        }
        Ok(())
    }

    // Booleans mirror as an empty-string presence toggle, other primitives
    // as their literal value; NaN, empty text, false and object-typed
    // values mirror as attribute removal.
    fn mirror(&self, attr: &str, value: &PropValue) {
        match value {
            PropValue::Bool(true) => self.host.set_attribute(attr, ""),
            PropValue::Number(n) if !n.is_nan() => self.host.set_attribute(attr, &n.to_string()),
            PropValue::Text(s) if !s.is_empty() => self.host.set_attribute(attr, s),
            _ => self.host.remove_attribute(attr),
        }
    }

    /// Host-driven attribute mutation re-entering the binding. Maps the
    /// attribute back to its property, applies boolean presence rules and
    /// invokes the setter with the coerced value; undeclared attributes are
    /// silently ignored.
    pub fn attribute_changed(
        &mut self,
        attr: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), String> {
        if old == new {
            return Ok(());
        }
        let name = to_prop_name(attr);
        let Some(ty) = self.spec.prop_def(&name).map(|def| def.ty) else {
            return Ok(());
        };
        match ty {
            PropType::Boolean => match new {
                // the setter's own presence mirror re-entering; ignore
                Some("") => Ok(()),
                None | Some("false") => {
                    self.host.remove_attribute(attr);
                    self.set_prop(&name, false)
                }
                Some(_) => {
                    self.host.set_attribute(attr, "");
                    self.set_prop(&name, true)
                }
            },
            ty => self.set_prop(&name, coerce_attr(ty, new)),
        }
    }

    /// Re-renders, diffs against the stored tree and patches the live root
    /// in place, all inside one cycle scope. A no-op before the first mount.
    pub fn update(&mut self) -> Result<(), String> {
        let (Some(old_root), Some(old_vnode)) = (self.root.clone(), self.template.clone()) else {
            return Ok(());
        };
        let Some(render_fn) = self.spec.render.clone() else {
            return Ok(());
        };
        let cycle = self.cycle.clone();
        let _scope = cycle.begin();
        let Some(template) = render_fn(self) else {
            // mid-life render refusal keeps the previous tree
            return Ok(());
        };
        let new_vnode = parse(&template.compile(&cycle))?;
        let patches = diff(&old_vnode, &new_vnode);
        let new_root = apply(&patches, &old_root, &cycle);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "component.update",
            tag = %self.spec.tag,
            patches = patches.len()
        );
        self.root = Some(new_root);
        self.template = Some(new_vnode);
        Ok(())
    }
}

/// Compiles and renders a top-level template over `target` within one
/// self-contained cycle, returning the mounted root.
pub fn mount_app(template: &Template, target: &LiveHandle) -> Result<LiveHandle, String> {
    let cycle = RenderCycle::new();
    let _scope = cycle.begin();
    let vnode = parse(&template.compile(&cycle))?;
    Ok(mount(&render(&vnode, &cycle), target))
}
