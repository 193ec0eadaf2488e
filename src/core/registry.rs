//! Tree registry: the lazily-created root and dotted-name resolution
//!
//! Resolution walks the tree one path segment at a time, holding only the
//! current node's lock while it tests or extends that node's children map.
//! No call path in this module ever holds two node locks at once.

use std::sync::{Arc, Weak};

use once_cell::sync::OnceCell;

use super::level::Level;
use super::logger::Logger;
use super::node::LoggerNode;
use super::sink::Sink;

/// Maximum number of dotted path segments a module name may carry.
pub const MAX_MODULE_SUBFIELDS: usize = 32;

// One root per process, created on first use. The cell is the only
// initialization guard and is distinct from every node lock.
static ROOT: OnceCell<Arc<LoggerNode>> = OnceCell::new();

fn root_node() -> &'static Arc<LoggerNode> {
    ROOT.get_or_init(LoggerNode::new_root)
}

/// Handle to the root logger, applying the optional level/sink updates.
pub(crate) fn root(level: Option<Level>, sink: Option<Sink>) -> Logger {
    let node = Arc::clone(root_node());
    node.apply(level, sink);
    Logger::from_node(node)
}

/// Resolve (creating as needed) the node for a dotted module name and apply
/// the optional level/sink updates to it.
///
/// A name with more than [`MAX_MODULE_SUBFIELDS`] segments stops resolving
/// there; the updates and an error-level diagnostic go to the furthest
/// resolved node, which is returned in place of the requested one. A
/// zero-length name resolves to the root and never creates a node.
pub(crate) fn resolve(name: &str, level: Option<Level>, sink: Option<Sink>) -> Logger {
    let mut node = Arc::clone(root_node());
    let mut truncated = false;

    if !name.is_empty() {
        for (index, segment) in name.split('.').enumerate() {
            if index >= MAX_MODULE_SUBFIELDS {
                truncated = true;
                break;
            }
            node = child_of(&node, segment);
        }
    }

    node.apply(level, sink);
    let logger = Logger::from_node(node);
    if truncated {
        logger.error(format!(
            "module name '{}' exceeds {} subfields",
            name, MAX_MODULE_SUBFIELDS
        ));
    }
    logger
}

/// Adopt the live child under `segment`, or create and link a fresh one.
fn child_of(node: &Arc<LoggerNode>, segment: &str) -> Arc<LoggerNode> {
    let mut state = node.state();
    if let Some(existing) = state.children.get(segment).and_then(Weak::upgrade) {
        return existing;
    }
    let child = LoggerNode::new_child(segment, Arc::clone(node));
    state
        .children
        .insert(segment.to_string(), Arc::downgrade(&child));
    child
}

/// Walk to an existing node without creating anything along the way.
///
/// Returns `None` when any segment is missing or dead, or when no logger
/// has ever been created.
pub(crate) fn lookup(name: &str) -> Option<Logger> {
    let mut node = Arc::clone(ROOT.get()?);
    if !name.is_empty() {
        for segment in name.split('.') {
            let next = node.state().children.get(segment).and_then(Weak::upgrade)?;
            node = next;
        }
    }
    Some(Logger::from_node(node))
}
