use crate::{Attrs, VNode};

/// Minimal hand-rolled markup parser with support for:
/// - nested elements and self-closing tags (`<input/>`)
/// - quoted attributes (`class="x"` or `class='x'`) and bare attributes
/// - text runs between tags (whitespace-only runs are dropped)
///
/// A component always has exactly one rendered root: when the input yields
/// more than one top-level sibling, they are wrapped in an implicit `div`
/// carrying a `data-component-wrapper` attribute.
pub fn parse(input: &str) -> Result<VNode, String> {
    let mut roots = parse_fragment(input);
    match roots.len() {
        0 => Err(format!("markup produced no nodes: {:?}", input)),
        1 => Ok(roots.remove(0)),
        _ => Ok(VNode::Element {
            tag: "div".to_string(),
            attrs: Attrs::new().set("data-component-wrapper", ""),
            children: roots,
        }),
    }
}

fn parse_fragment(input: &str) -> Vec<VNode> {
    let bytes = input.as_bytes();
    let mut i = 0usize;
    let mut stack: Vec<VNode> = Vec::new();
    let mut roots: Vec<VNode> = Vec::new();

    fn push_child(stack: &mut Vec<VNode>, roots: &mut Vec<VNode>, node: VNode) {
        if let Some(VNode::Element { children, .. }) = stack.last_mut() {
            children.push(node);
        } else {
            roots.push(node);
        }
    }

    while i < bytes.len() {
        if bytes[i] == b'<' {
            // closing tag?
            if i + 1 < bytes.len() && bytes[i + 1] == b'/' {
                i += 2;
                let tag = read_ident(bytes, &mut i);
                skip_ws(bytes, &mut i);
                if i < bytes.len() && bytes[i] == b'>' {
                    i += 1;
                }
                // pop until matching tag
                let mut popped: Option<VNode> = None;
                while let Some(n) = stack.pop() {
                    if let VNode::Element { tag: t, .. } = &n {
                        if t == &tag {
                            popped = Some(n);
                            break;
                        }
                    }
                }
                if let Some(n) = popped {
                    push_child(&mut stack, &mut roots, n);
                }
                continue;
            }

            // opening or self-closing tag
            i += 1;
            let tag = read_ident(bytes, &mut i);
            let mut attrs = Attrs::new();
            let mut self_closing = false;

            loop {
                skip_ws(bytes, &mut i);
                if i >= bytes.len() {
                    break;
                }
                match bytes[i] {
                    b'/' => {
                        // possible "/>"
                        self_closing = true;
                        i += 1;
                        skip_ws(bytes, &mut i);
                        if i < bytes.len() && bytes[i] == b'>' {
                            i += 1;
                        }
                        break;
                    }
                    b'>' => {
                        i += 1;
                        break;
                    }
                    _ => {
                        // attribute
                        if let Some((name, value)) = read_attribute(bytes, &mut i) {
                            attrs.insert(name, value);
                        } else {
                            // skip unknown token
                            i += 1;
                        }
                    }
                }
            }

            let node = VNode::Element {
                tag,
                attrs,
                children: Vec::new(),
            };
            if self_closing {
                push_child(&mut stack, &mut roots, node);
            } else {
                stack.push(node);
            }
        } else {
            // text until next '<'
            let start = i;
            while i < bytes.len() && bytes[i] != b'<' {
                i += 1;
            }
            let run = &input[start..i];
            if !run.chars().all(char::is_whitespace) {
                push_child(&mut stack, &mut roots, VNode::Text(run.to_string()));
            }
        }
    }

    // Unclosed tags: drain stack to roots (best-effort)
    while let Some(n) = stack.pop() {
        push_child(&mut stack, &mut roots, n);
    }

    roots
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
}

fn read_ident(bytes: &[u8], i: &mut usize) -> String {
    let start = *i;
    while *i < bytes.len() {
        let c = bytes[*i] as char;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            *i += 1;
        } else {
            break;
        }
    }
    String::from_utf8(bytes[start..*i].to_vec()).unwrap_or_default()
}

fn read_attribute(bytes: &[u8], i: &mut usize) -> Option<(String, String)> {
    let name = read_ident(bytes, i);
    if name.is_empty() {
        return None;
    }

    skip_ws(bytes, i);
    if *i < bytes.len() && bytes[*i] == b'=' {
        *i += 1;
        skip_ws(bytes, i);
        let value = read_quoted(bytes, i)?;
        Some((name, value))
    } else {
        // bare attribute, e.g. `disabled`
        Some((name, String::new()))
    }
}

fn read_quoted(bytes: &[u8], i: &mut usize) -> Option<String> {
    if *i >= bytes.len() {
        return None;
    }
    let quote = bytes[*i];
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    *i += 1;
    let start = *i;
    while *i < bytes.len() && bytes[*i] != quote {
        *i += 1;
    }
    let s = String::from_utf8(bytes[start..*i].to_vec()).ok()?;
    if *i < bytes.len() {
        *i += 1;
    } // consume closing quote
    Some(s)
}
