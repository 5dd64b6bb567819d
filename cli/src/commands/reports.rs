use gsadmin_client::ReportQuery;
use gsadmin_types::{Report, ReportId, ReportStatus};
use gsadmin_utils::{format_meters, truncate_title};
use gsadmin_verification::{Disposition, ResolutionVerifier, ReviewOutcome, ReviewSession};
use serde::Serialize;
use std::fmt::Write;

use super::Ctx;

const TITLE_WIDTH: usize = 40;

pub async fn list(ctx: &Ctx, query: ReportQuery) -> anyhow::Result<()> {
    let page = ctx.client.reports(&query).await?;
    ctx.out.emit(&page, || {
        let mut s = String::new();
        for r in &page.reports {
            let _ = writeln!(
                s,
                "{:<26} {:<18} {}",
                r.id.as_str(),
                r.status.as_str(),
                truncate_title(&r.title, TITLE_WIDTH)
            );
        }
        let _ = write!(
            s,
            "Page {} of {} ({} reports)",
            page.current_page, page.total_pages, page.total_reports
        );
        s
    })
}

pub async fn show(ctx: &Ctx, id: &ReportId) -> anyhow::Result<()> {
    let report = ctx.client.report(id).await?;
    ctx.out.emit(&report, || render_report(&report))
}

pub async fn counts(ctx: &Ctx) -> anyhow::Result<()> {
    let counts = ctx.client.report_status_counts().await?;
    ctx.out.emit(&counts, || {
        let mut s = format!("{:<20} {}\n", "total", counts.total);
        for status in ReportStatus::ALL {
            let _ = writeln!(s, "{:<20} {}", status.as_str(), counts.get(status));
        }
        s.trim_end().to_string()
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewSummary<'a> {
    report_id: &'a ReportId,
    distance_meters: f64,
    threshold_meters: f64,
    within_threshold: bool,
    disposition: Disposition,
}

/// Verify a resolved report without changing it.
pub async fn review(ctx: &Ctx, id: &ReportId) -> anyhow::Result<()> {
    let (mut session, verifier) = open(ctx, id).await?;
    let result = session.verify()?;
    let summary = ReviewSummary {
        report_id: id,
        distance_meters: result.distance_meters,
        threshold_meters: verifier.params().threshold_meters,
        within_threshold: result.within_threshold,
        disposition: result.disposition(),
    };
    ctx.out.emit(&summary, || {
        let next = match summary.disposition {
            Disposition::PermanentResolve => format!(
                "Within the {} m threshold. Next: gsadmin reports approve {id}",
                summary.threshold_meters
            ),
            Disposition::Reject => format!(
                "Beyond the {} m threshold; it cannot be permanently resolved.\n\
                 Next: gsadmin reports reject {id} --reason \"...\"",
                summary.threshold_meters
            ),
        };
        format!(
            "Distance from reported location: {}\n{next}",
            format_meters(summary.distance_meters)
        )
    })
}

pub async fn approve(ctx: &Ctx, id: &ReportId) -> anyhow::Result<()> {
    let (mut session, _) = open(ctx, id).await?;
    session.verify()?;
    let outcome = session.approve(&ctx.client).await?;
    emit_outcome(ctx, id, &outcome)
}

pub async fn reject(ctx: &Ctx, id: &ReportId, reason: &str) -> anyhow::Result<()> {
    let (mut session, _) = open(ctx, id).await?;
    session.verify()?;
    let outcome = session.reject(&ctx.client, reason).await?;
    emit_outcome(ctx, id, &outcome)
}

async fn open(ctx: &Ctx, id: &ReportId) -> anyhow::Result<(ReviewSession, ResolutionVerifier)> {
    let report = ctx.client.report(id).await?;
    let verifier = ResolutionVerifier::default();
    let session = ReviewSession::open(&report, verifier, ctx.registry.clone())?;
    Ok((session, verifier))
}

fn emit_outcome(ctx: &Ctx, id: &ReportId, outcome: &ReviewOutcome) -> anyhow::Result<()> {
    ctx.out.emit(outcome, || match outcome {
        ReviewOutcome::PermanentlyResolved { verification, .. } => format!(
            "Report {id} permanently resolved ({} from reported location)",
            format_meters(verification.distance_meters)
        ),
        ReviewOutcome::Rejected { reason, .. } => {
            format!("Resolution of report {id} rejected: {reason}")
        }
    })
}

fn render_report(r: &Report) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{} [{}]", r.title, r.status);
    let _ = writeln!(s, "id:        {}", r.id);
    if let Some(t) = &r.report_type {
        let _ = writeln!(s, "type:      {t}");
    }
    if !r.details.is_empty() {
        let _ = writeln!(s, "details:   {}", r.details);
    }
    if let Some(a) = &r.address {
        let _ = writeln!(s, "address:   {a}");
    }
    match r.reported_point() {
        Ok(p) => {
            let _ = writeln!(s, "reported:  {p}");
        }
        Err(e) => {
            let _ = writeln!(s, "reported:  {e}");
        }
    }
    if let Ok(p) = r.resolution_point() {
        let _ = writeln!(s, "resolved:  {p}");
    }
    if let Some(u) = &r.user {
        let _ = writeln!(s, "citizen:   {}", u.username);
    }
    if let Some(u) = &r.assigned_to {
        let _ = writeln!(s, "assigned:  {}", u.username);
    }
    if let Some(d) = r.distance_to_reported {
        let _ = writeln!(s, "distance:  {}", format_meters(d));
    }
    if let Some(reason) = &r.rejection_reason {
        let _ = writeln!(s, "rejected:  {reason}");
    }
    if let Some(reason) = &r.out_of_scope_reason {
        let _ = writeln!(s, "out of scope: {reason}");
    }
    if let Some(c) = &r.created_at {
        let _ = writeln!(s, "created:   {c}");
    }
    s.trim_end().to_string()
}
