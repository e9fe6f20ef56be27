use crate::render::Chart;
use serde::Serialize;

#[derive(Serialize)]
struct ReportData<'a> {
    title: &'a str,
    charts: &'a [Chart],
}

/// Render a self-contained HTML report (chart data embedded as JSON, drawn
/// as inline SVG).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_report(title: &str, charts: &[Chart]) -> anyhow::Result<String> {
    // "</" inside a JSON string would close the script element early.
    let json = serde_json::to_string(&ReportData { title, charts })?.replace("</", "<\\/");

    const TEMPLATE: &str = r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Scaling Report</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .grid { display: flex; flex-wrap: wrap; gap: 16px; padding: 16px; }
  .card { border: 1px solid #ddd; border-radius: 8px; padding: 8px; background: #fff; }
  .card h3 { margin: 4px 8px; font-size: 15px; }
  svg text { font-size: 11px; fill: #333; }
  .axis { stroke: #888; }
  .grid-line { stroke: #eee; }
  .legend { font-size: 12px; }
</style>
</head>
<body>
<header>
  <h2 id="title"></h2>
</header>
<div class="grid" id="charts"></div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

const W = 560, H = 380, PAD = { l: 64, r: 16, t: 16, b: 48 };
const COLORS = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f"];

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function extent(values) {
  let lo = Math.min(...values), hi = Math.max(...values);
  if (!isFinite(lo)) { lo = 0; hi = 1; }
  if (lo === hi) { lo -= 1; hi += 1; }
  return [lo, hi];
}

function ticks(lo, hi, n) {
  const out = [];
  for (let i = 0; i <= n; i++) out.push(lo + (hi - lo) * i / n);
  return out;
}

function fmt(x) {
  return Math.abs(x) >= 100 ? x.toFixed(0) : (Math.round(x * 100) / 100).toString();
}

function renderChart(chart) {
  const xs = chart.series.flatMap(s => s.points.map(p => p[0]));
  const ys = chart.series.flatMap(s => s.points.map(p => p[1]));
  const [x0, x1] = extent(xs);
  const [y0raw, y1] = extent(ys);
  const y0 = Math.min(0, y0raw);

  const sx = x => PAD.l + (x - x0) / (x1 - x0) * (W - PAD.l - PAD.r);
  const sy = y => H - PAD.b - (y - y0) / (y1 - y0) * (H - PAD.t - PAD.b);

  let svg = `<svg width="${W}" height="${H}" xmlns="http://www.w3.org/2000/svg">`;

  for (const t of ticks(y0, y1, 5)) {
    svg += `<line class="grid-line" x1="${PAD.l}" x2="${W - PAD.r}" y1="${sy(t)}" y2="${sy(t)}"/>`;
    svg += `<text x="${PAD.l - 6}" y="${sy(t) + 4}" text-anchor="end">${fmt(t)}</text>`;
  }
  const xTicks = [...new Set(xs)].sort((a, b) => a - b);
  for (const t of xTicks) {
    svg += `<text x="${sx(t)}" y="${H - PAD.b + 16}" text-anchor="middle">${fmt(t)}</text>`;
  }

  svg += `<line class="axis" x1="${PAD.l}" x2="${W - PAD.r}" y1="${H - PAD.b}" y2="${H - PAD.b}"/>`;
  svg += `<line class="axis" x1="${PAD.l}" x2="${PAD.l}" y1="${PAD.t}" y2="${H - PAD.b}"/>`;
  svg += `<text x="${(PAD.l + W - PAD.r) / 2}" y="${H - 8}" text-anchor="middle">${escapeHtml(chart.x_label)}</text>`;
  svg += `<text transform="translate(14 ${(PAD.t + H - PAD.b) / 2}) rotate(-90)" text-anchor="middle">${escapeHtml(chart.y_label)}</text>`;

  chart.series.forEach((s, i) => {
    const color = s.dashed ? "#000" : COLORS[i % COLORS.length];
    const dash = s.dashed ? ` stroke-dasharray="6 4"` : "";
    const pts = s.points.map(p => `${sx(p[0])},${sy(p[1])}`).join(" ");
    svg += `<polyline fill="none" stroke="${color}" stroke-width="2"${dash} points="${pts}"/>`;
    if (!s.dashed) {
      for (const p of s.points) {
        svg += `<circle cx="${sx(p[0])}" cy="${sy(p[1])}" r="3.5" fill="${color}"><title>${escapeHtml(s.label)}: (${fmt(p[0])}, ${p[1].toFixed(3)})</title></circle>`;
      }
    }
    const ly = PAD.t + 8 + i * 16;
    svg += `<line x1="${W - PAD.r - 150}" x2="${W - PAD.r - 130}" y1="${ly}" y2="${ly}" stroke="${color}" stroke-width="2"${dash}/>`;
    svg += `<text class="legend" x="${W - PAD.r - 124}" y="${ly + 4}">${escapeHtml(s.label)}</text>`;
  });

  svg += `</svg>`;
  return `<div class="card"><h3>${escapeHtml(chart.title)}</h3>${svg}</div>`;
}

document.getElementById("title").textContent = DATA.title;
document.getElementById("charts").innerHTML = DATA.charts.map(renderChart).join("");
</script>
</body>
</html>
"##;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
