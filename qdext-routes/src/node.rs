/// Reserved top-level path segment for all extension routes. Route names
/// carry the same token as a prefix, keeping both namespaces clear of the
/// host's own definitions.
pub const NAMESPACE_PREFIX: &str = "qd";

/// A named, path-addressable entry in the client route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteNode {
    /// Globally unique route name within the application table.
    pub name: &'static str,
    /// Literal path template; at most one `:param` dynamic segment.
    pub path: &'static str,
}

impl RouteNode {
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// Parameter name of the dynamic segment, if the template has one.
    pub fn param(&self) -> Option<&'static str> {
        self.path.split('/').find_map(|segment| segment.strip_prefix(':'))
    }

    /// Feature-module token this node belongs to (`"board"`, `"center"`,
    /// ...); `None` for the namespace root.
    pub fn module(&self) -> Option<&'static str> {
        self.name
            .strip_prefix("qd-")
            .and_then(|rest| rest.split('-').next())
    }
}

/// Complete route namespace, declared once and immutable afterwards.
///
/// Every feature module contributes its user-facing node plus, where the
/// module has one, an administrative sibling and further sub-views. The
/// creator center's work-detail page is the only parameterized template.
/// Registration order is irrelevant; the table is conflict-checked as a
/// whole when composed into the host router.
pub const NAMESPACE_NODES: &[RouteNode] = &[
    RouteNode::new("qd", "/qd"),
    // Leaderboard
    RouteNode::new("qd-board", "/qd/board"),
    // Wagering
    RouteNode::new("qd-betting", "/qd/betting"),
    RouteNode::new("qd-betting-my", "/qd/betting/my"),
    RouteNode::new("qd-betting-history", "/qd/betting/history"),
    RouteNode::new("qd-betting-admin", "/qd/betting/admin"),
    // Shop
    RouteNode::new("qd-shop", "/qd/shop"),
    RouteNode::new("qd-shop-orders", "/qd/shop/orders"),
    RouteNode::new("qd-shop-admin-orders", "/qd/shop/admin/orders"),
    // Payments
    RouteNode::new("qd-pay", "/qd/pay"),
    RouteNode::new("qd-pay-admin", "/qd/pay/admin"),
    // Profile decoration
    RouteNode::new("qd-dress", "/qd/dress"),
    RouteNode::new("qd-dress-admin", "/qd/dress/admin"),
    // VIP tiers
    RouteNode::new("qd-vip", "/qd/vip"),
    RouteNode::new("qd-vip-admin", "/qd/vip/admin"),
    // Creator program
    RouteNode::new("qd-apply", "/qd/apply"),
    RouteNode::new("qd-center", "/qd/center"),
    RouteNode::new("qd-center-make", "/qd/center/make"),
    RouteNode::new("qd-center-admin", "/qd/center/admin"),
    RouteNode::new("qd-center-work", "/qd/center/zp/:work_id"),
];
