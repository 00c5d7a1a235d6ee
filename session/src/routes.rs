//! Screen paths shared by the guard, the sign-in flow, and the router.

pub const LOGIN: &str = "/login";
pub const PORTAL_ACCESS: &str = "/portal-access";
pub const UNAUTHORIZED: &str = "/unauthorized";

pub const ADMIN_HOME: &str = "/admin";
pub const CORPORATE_HOME: &str = "/merchant";
pub const BRANCH_HOME: &str = "/branch";
pub const PORTAL_HOME: &str = "/portal";
pub const HOME: &str = "/";

pub const REPORTS: &str = "/reports";
