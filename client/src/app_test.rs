use super::*;

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(segment(routes::LOGIN), "login");
    assert_eq!(segment(routes::PORTAL_ACCESS), "portal-access");
    assert_eq!(segment(routes::HOME), "");
}

#[test]
fn route_segments_are_distinct() {
    let all = [
        routes::LOGIN,
        routes::PORTAL_ACCESS,
        routes::UNAUTHORIZED,
        routes::ADMIN_HOME,
        routes::CORPORATE_HOME,
        routes::BRANCH_HOME,
        routes::REPORTS,
        routes::PORTAL_HOME,
        routes::HOME,
    ];
    let mut seen: Vec<&str> = all.iter().map(|p| segment(p)).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), all.len());
}
