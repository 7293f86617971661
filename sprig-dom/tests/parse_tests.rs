use sprig_dom::{VNode, parse};

#[test]
fn parse_element_with_text() {
    let node = parse("<div>hi</div>").unwrap();
    match node {
        VNode::Element { tag, children, .. } => {
            assert_eq!(tag, "div");
            assert_eq!(children, vec![VNode::Text("hi".into())]);
        }
        _ => panic!("expected element"),
    }
}

#[test]
fn parse_nested_with_attrs() {
    let node = parse(r#"<div class="app" id='main'><span>x</span></div>"#).unwrap();
    match &node {
        VNode::Element {
            attrs, children, ..
        } => {
            assert_eq!(attrs.get("class"), Some("app"));
            assert_eq!(attrs.get("id"), Some("main"));
            assert_eq!(children.len(), 1);
            assert_eq!(children[0].tag(), Some("span"));
        }
        _ => panic!("expected element"),
    }
}

#[test]
fn parse_self_closing_and_bare_attr() {
    let node = parse(r#"<p><input disabled/><b>y</b></p>"#).unwrap();
    match &node {
        VNode::Element { children, .. } => {
            assert_eq!(children.len(), 2);
            match &children[0] {
                VNode::Element { tag, attrs, .. } => {
                    assert_eq!(tag, "input");
                    assert_eq!(attrs.get("disabled"), Some(""));
                }
                _ => panic!("expected input"),
            }
        }
        _ => panic!("expected element"),
    }
}

#[test]
fn parse_wraps_multiple_roots() {
    let node = parse("<li>a</li><li>b</li>").unwrap();
    match &node {
        VNode::Element {
            tag,
            attrs,
            children,
        } => {
            assert_eq!(tag, "div");
            assert!(attrs.contains("data-component-wrapper"));
            assert_eq!(children.len(), 2);
        }
        _ => panic!("expected wrapper element"),
    }
}

#[test]
fn parse_drops_whitespace_only_text() {
    let node = parse("<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>").unwrap();
    match &node {
        VNode::Element { children, .. } => {
            assert_eq!(children.len(), 2);
            assert!(children.iter().all(|c| c.tag() == Some("li")));
        }
        _ => panic!("expected element"),
    }
}

#[test]
fn parse_keeps_text_between_elements() {
    let node = parse("<p>count: <b>3</b></p>").unwrap();
    match &node {
        VNode::Element { children, .. } => {
            assert_eq!(children[0], VNode::Text("count: ".into()));
            assert_eq!(children[1].tag(), Some("b"));
        }
        _ => panic!("expected element"),
    }
}

#[test]
fn parse_recovers_from_unclosed_tag() {
    let node = parse("<div><span>dangling</div>").unwrap();
    assert_eq!(node.tag(), Some("div"));
}

#[test]
fn parse_empty_input_is_error() {
    assert!(parse("").is_err());
    assert!(parse("   \n ").is_err());
}
