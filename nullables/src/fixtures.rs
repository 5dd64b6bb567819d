//! Report builders for tests.

use gsadmin_types::{GeoLocation, GeoPoint, Report, ReportId, ReportStatus};

/// A bare report with the given status and no locations.
pub fn report(id: &str, status: ReportStatus) -> Report {
    Report {
        id: ReportId::new(id).unwrap(),
        title: format!("Report {id}"),
        details: String::new(),
        report_type: Some("garbage".into()),
        status,
        address: None,
        location: None,
        image: None,
        resolved_location: None,
        resolved_address: None,
        resolved_image: None,
        user: None,
        assigned_to: None,
        assigned_msg: None,
        assigned_at: None,
        distance_to_reported: None,
        permanently_resolved_at: None,
        rejection_reason: None,
        rejected_at: None,
        out_of_scope_reason: None,
        created_at: None,
        updated_at: None,
    }
}

/// A resolved report with both locations given as `(lng, lat)`.
pub fn resolved_report(id: &str, reported: (f64, f64), resolved: (f64, f64)) -> Report {
    let mut r = report(id, ReportStatus::Resolved);
    r.location = Some(location(reported));
    r.resolved_location = Some(location(resolved));
    r
}

fn location((lng, lat): (f64, f64)) -> GeoLocation {
    GeoLocation::from(GeoPoint::new(lng, lat).unwrap())
}
