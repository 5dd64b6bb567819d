use gsadmin_types::{ChartRow, ReportStatus};
use std::fmt::Write;

use super::Ctx;

pub async fn dashboard(ctx: &Ctx) -> anyhow::Result<()> {
    let dash = ctx.client.dashboard().await?;
    ctx.out.emit(&dash, || {
        let st = &dash.stats;
        let mut s = String::new();
        let _ = writeln!(s, "Reports       {}", dash.counts.total);
        for status in ReportStatus::ALL {
            let _ = writeln!(s, "  {:<20} {}", status.as_str(), dash.counts.get(status));
        }
        let _ = writeln!(s, "Resolution    {:.1}%", st.resolution_rate);
        let _ = writeln!(s, "Users         {}", st.total_users);
        let _ = writeln!(s, "Supervisors   {}", st.total_supervisors);
        render_series(&mut s, "Reports overview", &dash.reports_overview);
        render_series(&mut s, "User activity", &dash.user_activity);
        s.trim_end().to_string()
    })
}

pub async fn analytics(ctx: &Ctx) -> anyhow::Result<()> {
    let bundle = ctx.client.analytics().await?;
    ctx.out.emit(&bundle, || {
        let mut s = String::from("Report distribution\n");
        for ((status, pct), slice) in bundle
            .distribution_percentages()
            .into_iter()
            .zip(&bundle.report_distribution)
        {
            let _ = writeln!(s, "  {status:<20} {:>5}  {pct:>3}%", slice.count);
        }
        render_series(&mut s, "Supervisor performance", &bundle.supervisor_performance);
        render_series(&mut s, "Worker attendance", &bundle.attendance_trends);
        render_series(&mut s, "Report trends", &bundle.report_trends);
        s.trim_end().to_string()
    })
}

fn render_series(s: &mut String, title: &str, rows: &[ChartRow]) {
    let _ = writeln!(s, "{title}");
    if rows.is_empty() {
        let _ = writeln!(s, "  (no data)");
    }
    for row in rows {
        let cells: Vec<String> = row.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let _ = writeln!(s, "  {}", cells.join("  "));
    }
}
