use gsadmin_client::{filter_users, filter_workers, paginate, MAX_PAGE_SIZE};
use gsadmin_types::{
    ReportId, StaffId, SupervisorDraft, SupervisorSummary, Worker, WorkerDraft,
};
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;

use super::Ctx;

// ── Supervisors ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SupervisorListing<'a> {
    summary: SupervisorSummary,
    supervisors: &'a [gsadmin_types::Supervisor],
}

pub async fn list_supervisors(ctx: &Ctx) -> anyhow::Result<()> {
    let supervisors = ctx.client.supervisors().await?;
    let listing = SupervisorListing {
        summary: SupervisorSummary::from_supervisors(&supervisors),
        supervisors: &supervisors,
    };
    ctx.out.emit(&listing, || {
        let mut s = String::new();
        for sup in listing.supervisors {
            let _ = writeln!(
                s,
                "{:<26} {:<16} {:<28} workers {:>3}  closed {:>4}  {}",
                sup.id.as_str(),
                sup.username,
                sup.email,
                sup.workers_count,
                sup.permanent_resolved_reports,
                sup.performance.as_deref().unwrap_or("-")
            );
        }
        let sum = &listing.summary;
        let _ = write!(
            s,
            "{} supervisors, avg {} permanently resolved, avg {} workers",
            sum.total, sum.avg_permanent_resolved, sum.avg_workers
        );
        s
    })
}

pub async fn create_supervisor(ctx: &Ctx, draft: SupervisorDraft) -> anyhow::Result<()> {
    let created = ctx.client.create_supervisor(&draft).await?;
    ctx.out.emit(&created, || format!("Supervisor {} created", draft.username))
}

pub async fn delete_supervisor(ctx: &Ctx, id: &StaffId) -> anyhow::Result<()> {
    let ack = ctx.client.delete_supervisor(id).await?;
    ctx.out.emit(&ack, || format!("Supervisor {id} deleted"))
}

pub async fn supervisor_performance(ctx: &Ctx, id: &StaffId) -> anyhow::Result<()> {
    let perf = ctx.client.supervisor_performance(id).await?;
    ctx.out.emit(&perf, || {
        let mut s = String::new();
        let _ = writeln!(s, "in progress         {}", perf.in_progress);
        let _ = writeln!(s, "resolved            {}", perf.resolved);
        let _ = writeln!(s, "permanent-resolved  {}", perf.permanent_resolved);
        let _ = writeln!(s, "rejected            {}", perf.rejected);
        let _ = writeln!(s, "out-of-scope        {}", perf.out_of_scope);
        let _ = writeln!(s, "workers             {}", perf.workers_count);
        if let Some(rate) = perf.success_rate {
            let _ = writeln!(s, "success rate        {rate:.1}%");
        }
        if let Some(p) = &perf.performance {
            let _ = writeln!(s, "rating              {p}");
        }
        s.trim_end().to_string()
    })
}

pub async fn assign(
    ctx: &Ctx,
    supervisor: &StaffId,
    reports: &[ReportId],
    message: &str,
) -> anyhow::Result<()> {
    let ack = ctx.client.assign_reports(supervisor, reports, message).await?;
    ctx.out.emit(&ack, || {
        ack.message
            .clone()
            .unwrap_or_else(|| format!("{} reports assigned to {supervisor}", reports.len()))
    })
}

// ── Workers ─────────────────────────────────────────────────────────────

pub async fn list_workers(ctx: &Ctx, search: &str, page: usize) -> anyhow::Result<()> {
    let all = ctx.client.workers(1, MAX_PAGE_SIZE as u32, None).await?;
    let matching: Vec<Worker> = filter_workers(&all.workers, search)
        .into_iter()
        .cloned()
        .collect();
    let page = paginate(&matching, page, ctx.config.page_size as usize);
    ctx.out.emit(&page, || {
        let mut s = String::new();
        for w in page.items {
            let _ = writeln!(
                s,
                "{:<26} {:<16} {:<12} {:<16} {}",
                w.id.as_str(),
                w.name,
                w.phone,
                w.area,
                w.supervisor.as_ref().map_or("-", |s| s.username.as_str())
            );
        }
        let _ = write!(
            s,
            "Page {} of {} ({} workers)",
            page.page, page.total_pages, page.total_items
        );
        s
    })
}

pub async fn create_worker(ctx: &Ctx, draft: WorkerDraft) -> anyhow::Result<()> {
    let created = ctx.client.create_worker(&draft).await?;
    ctx.out.emit(&created, || format!("Worker {} created", draft.name))
}

pub async fn update_worker(ctx: &Ctx, id: &StaffId, draft: WorkerDraft) -> anyhow::Result<()> {
    let updated = ctx.client.update_worker(id, &draft).await?;
    ctx.out.emit(&updated, || format!("Worker {id} updated"))
}

pub async fn delete_worker(ctx: &Ctx, id: &StaffId) -> anyhow::Result<()> {
    let ack = ctx.client.delete_worker(id).await?;
    ctx.out.emit(&ack, || format!("Worker {id} deleted"))
}

pub async fn attendance(
    ctx: &Ctx,
    id: &StaffId,
    from: Option<&str>,
    to: Option<&str>,
) -> anyhow::Result<()> {
    let att = ctx.client.worker_attendance(id, from, to).await?;
    let data = json!({
        "worker": att.worker,
        "attendance": att.attendance,
        "daysPresent": att.days_present(),
        "tasksCompleted": att.tasks_completed(),
    });
    ctx.out.emit(&data, || {
        let mut s = String::new();
        if let Some(w) = &att.worker {
            let _ = writeln!(s, "{} ({}, {})", w.name, w.phone, w.area);
        }
        for a in &att.attendance {
            let _ = writeln!(s, "{:<12} {:<8} tasks {}", a.date, a.status, a.tasks_completed);
        }
        let _ = write!(
            s,
            "{} of {} days present, {} tasks completed",
            att.days_present(),
            att.attendance.len(),
            att.tasks_completed()
        );
        s
    })
}

// ── Users ───────────────────────────────────────────────────────────────

pub async fn list_users(ctx: &Ctx, search: &str, page: usize) -> anyhow::Result<()> {
    let users = ctx.client.users().await?;
    let matching: Vec<_> = filter_users(&users, search).into_iter().cloned().collect();
    let page = paginate(&matching, page, ctx.config.page_size as usize);
    ctx.out.emit(&page, || {
        let mut s = String::new();
        for u in page.items {
            let _ = writeln!(
                s,
                "{:<26} {:<20} {:<28} {}",
                u.id.as_str(),
                u.username,
                u.email.as_deref().unwrap_or("-"),
                u.created_at.as_deref().unwrap_or("-")
            );
        }
        let _ = write!(
            s,
            "Page {} of {} ({} users)",
            page.page, page.total_pages, page.total_items
        );
        s
    })
}
