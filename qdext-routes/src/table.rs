use crate::node::{RouteNode, NAMESPACE_NODES, NAMESPACE_PREFIX};
use crate::RouteError;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Startup-time route table, the extension's view of the host router.
///
/// Built once, strictly before any request is routed. Collisions are
/// configuration errors: registration fails instead of overwriting, and the
/// host is expected to abort initialization on `Err`.
#[derive(Debug, Default)]
pub struct RouteTable {
    by_name: HashMap<&'static str, RouteNode>,
    claimed_paths: HashSet<&'static str>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single node. Fails on a duplicate name, a duplicate
    /// literal path, or a template with more than one dynamic segment.
    pub fn register(&mut self, node: RouteNode) -> Result<(), RouteError> {
        let dynamic_segments = node
            .path
            .split('/')
            .filter(|segment| segment.starts_with(':'))
            .count();
        if dynamic_segments > 1 {
            return Err(RouteError::InvalidTemplate(node.path));
        }
        if self.by_name.contains_key(node.name) {
            return Err(RouteError::DuplicateName(node.name));
        }
        if !self.claimed_paths.insert(node.path) {
            return Err(RouteError::DuplicatePath(node.path));
        }
        debug!(route = %node.name, path = %node.path, "route registered");
        self.by_name.insert(node.name, node);
        Ok(())
    }

    /// Literal path for a route name.
    pub fn path_of(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name).map(|node| node.path)
    }

    pub fn get(&self, name: &str) -> Option<&RouteNode> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All registered nodes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteNode> {
        self.by_name.values()
    }
}

/// Registers the complete `qd` namespace into `table`.
///
/// Runs exactly once at application start. Any collision with a
/// pre-existing route is fatal: the error propagates and initialization
/// must not finish.
pub fn compose(table: &mut RouteTable) -> Result<(), RouteError> {
    for node in NAMESPACE_NODES {
        table.register(*node)?;
    }
    info!(
        prefix = %NAMESPACE_PREFIX,
        routes = NAMESPACE_NODES.len(),
        "route namespace composed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicate_name_is_rejected() {
        let mut table = RouteTable::new();
        table.register(RouteNode::new("qd-board", "/qd/board")).unwrap();
        assert_eq!(
            table.register(RouteNode::new("qd-board", "/qd/board2")),
            Err(RouteError::DuplicateName("qd-board"))
        );
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let mut table = RouteTable::new();
        table.register(RouteNode::new("qd-board", "/qd/board")).unwrap();
        assert_eq!(
            table.register(RouteNode::new("qd-board2", "/qd/board")),
            Err(RouteError::DuplicatePath("/qd/board"))
        );
    }

    #[test]
    fn second_dynamic_segment_is_rejected() {
        let mut table = RouteTable::new();
        assert_eq!(
            table.register(RouteNode::new("qd-bad", "/qd/:a/:b")),
            Err(RouteError::InvalidTemplate("/qd/:a/:b"))
        );
    }

    #[test]
    fn failed_registration_leaves_no_partial_entry() {
        let mut table = RouteTable::new();
        table.register(RouteNode::new("qd-vip", "/qd/vip")).unwrap();
        let _ = table.register(RouteNode::new("qd-vip", "/qd/vip/other"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.path_of("qd-vip"), Some("/qd/vip"));
    }
}
