use std::fmt::Write as _;

use super::display::{mode_icon, status_color};
use super::model::DisplayModel;
use super::ring;

/// Host-relative path of the bundled logo asset. A missing asset shows the
/// host's broken-image indicator, nothing more.
pub const LOGO_PATH: &str = "/local/powerstat-card/logo.png";

const CSS: &str = r#"<style>
.powerstat-container {
  padding: 20px;
  background: linear-gradient(135deg, #1c1c1e 0%, #2c2c2e 100%);
  color: #fff;
}
.header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 24px;
}
.logo {
  width: 48px;
  height: 48px;
  border-radius: 12px;
  padding: 8px;
  background: rgba(255, 255, 255, 0.1);
}
.brand {
  font-size: 1.4rem;
  font-weight: 600;
}
.temp-ring {
  width: 200px;
  height: 200px;
  margin: 0 auto;
  position: relative;
}
.temp-ring svg {
  transform: rotate(-90deg);
}
.temp-ring circle {
  fill: none;
  stroke-width: 8;
}
.temp-ring .ring-bg {
  stroke: rgba(255, 255, 255, 0.1);
}
.temp-ring .ring-progress {
  stroke: var(--accent);
  stroke-linecap: round;
  transition: stroke-dashoffset 0.5s ease, stroke 0.3s ease;
}
.temp-value {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  text-align: center;
}
.current-temp {
  font-size: 3.5rem;
  font-weight: 300;
  line-height: 1;
}
.target-temp {
  font-size: 0.9rem;
  color: rgba(255, 255, 255, 0.6);
  margin-top: 4px;
}
.mode-indicator {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 4px 12px;
  border: 1px solid var(--accent);
  border-radius: 12px;
  font-size: 0.75rem;
  color: var(--accent);
  margin-top: 8px;
}
.stats-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 12px;
  margin-top: 24px;
}
.stat-card {
  background: rgba(255, 255, 255, 0.08);
  border-radius: 12px;
  padding: 12px;
}
.stat-label {
  font-size: 0.75rem;
  color: rgba(255, 255, 255, 0.6);
  text-transform: uppercase;
}
.stat-value {
  font-size: 1.25rem;
  font-weight: 600;
}
.reason-bar {
  margin-top: 20px;
  padding: 12px;
  background: rgba(255, 255, 255, 0.06);
  border-left: 3px solid var(--accent);
  border-radius: 6px;
  font-size: 0.85rem;
}
.confidence-bar {
  margin-top: 8px;
  height: 4px;
  background: rgba(255, 255, 255, 0.1);
  border-radius: 2px;
  overflow: hidden;
}
.confidence-fill {
  height: 100%;
  background: var(--accent);
  width: var(--confidence);
  transition: width 0.3s ease;
}
</style>
"#;

/// Renders the model into markup. Pure: the same model always produces
/// byte-identical output.
pub fn render(model: &DisplayModel, compact: bool) -> String {
    if compact {
        render_compact(model)
    } else {
        render_full(model)
    }
}

fn render_full(model: &DisplayModel) -> String {
    let accent = status_color(&model.status);
    let offset = ring::stroke_offset(ring::closeness(model.temperature, model.target));

    let mut out = String::with_capacity(4 * 1024);
    out.push_str(CSS);

    let _ = write!(
        out,
        r#"<div class="powerstat-container" style="--accent: {accent}; --confidence: {confidence:.0}%">
  <div class="header">
    <div class="brand">PowerStat</div>
    <img src="{logo}" class="logo" />
  </div>
  <div class="temp-display">
    <div class="temp-ring">
      <svg width="200" height="200" viewBox="0 0 200 200">
        <circle class="ring-bg" cx="100" cy="100" r="90"></circle>
        <circle class="ring-progress" cx="100" cy="100" r="90" stroke-dasharray="{circumference}" stroke-dashoffset="{offset:.2}"></circle>
      </svg>
      <div class="temp-value">
        <div class="current-temp">{temperature}°</div>
        <div class="target-temp">Target: {target}°C</div>
        <div class="mode-indicator"><span>{icon}</span><span>{mode}</span></div>
      </div>
    </div>
  </div>
  <div class="stats-grid">
    <div class="stat-card">
      <div class="stat-label">Status</div>
      <div class="stat-value">{status}</div>
    </div>
    <div class="stat-card">
      <div class="stat-label">Confidence</div>
      <div class="stat-value">{confidence:.0}%</div>
    </div>
  </div>
  <div class="reason-bar"><strong>Decision:</strong> {reason}</div>
  <div class="confidence-bar"><div class="confidence-fill"></div></div>
</div>
"#,
        accent = accent,
        confidence = model.confidence.0,
        logo = LOGO_PATH,
        circumference = ring::CIRCUMFERENCE,
        offset = offset,
        temperature = fmt_temperature(model),
        target = model.target.0,
        icon = mode_icon(&model.mode),
        mode = esc(&model.mode.to_uppercase()),
        status = esc(&model.status),
        reason = esc(&model.reason),
    );

    out
}

fn render_compact(model: &DisplayModel) -> String {
    let mut out = String::with_capacity(512);

    let _ = write!(
        out,
        r#"<div class="powerstat-row">
  <span>Status: {status}</span>
  <img src="{logo}" class="logo" />
</div>
<div class="powerstat-subline">Effective Temp: {temperature}°C</div>
"#,
        status = esc(&model.status),
        logo = LOGO_PATH,
        temperature = fmt_temperature(model),
    );

    out
}

fn fmt_temperature(model: &DisplayModel) -> String {
    match model.temperature {
        Some(temperature) => format!("{:.1}", temperature.0),
        None => "--".to_owned(),
    }
}

fn esc(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
