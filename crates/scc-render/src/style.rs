//! Inline stylesheet shared by both pages. Theme colors are CSS variables
//! switched by the `data-theme` attribute on `<html>`.

pub const STYLESHEET: &str = r#"
:root {
  --bg: #f8fafc;
  --panel: #ffffff;
  --border: rgba(15, 23, 42, 0.08);
  --text: #0f172a;
  --text-secondary: #475569;
  --accent: #2563eb;
  --positive: #10b981;
  --warning: #f59e0b;
  --negative: #ef4444;
  --radius: 10px;
  --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
  --font-body: "Inter", system-ui, -apple-system, sans-serif;
}

[data-theme="dark"] {
  --bg: #0b1120;
  --panel: #111827;
  --border: rgba(255, 255, 255, 0.08);
  --text: #e5e7eb;
  --text-secondary: #9ca3af;
  --accent: #60a5fa;
  --shadow: 0 14px 40px rgba(0, 0, 0, 0.4);
}

* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: var(--font-body); }
.site-header, .site-footer { display: flex; justify-content: space-between; align-items: center; padding: 16px 24px; }
main { max-width: 1200px; margin: 0 auto; padding: 24px; }

.slider-track { position: relative; }
.slider-track input { width: 100%; }
.slider-thumb { position: absolute; top: 0; width: 0; height: 0; pointer-events: none; }
.value-display { text-align: center; font-weight: 600; margin-top: 8px; }
.category-filters { display: flex; flex-wrap: wrap; gap: 12px; margin: 16px 0; }

.chart-canvas { position: relative; aspect-ratio: 1 / 1; max-height: 640px; background: var(--panel); border: 1px solid var(--border); border-radius: var(--radius); overflow: hidden; }
.seal-zone { position: absolute; left: 0; right: 0; border-top: 1px dashed; }
.seal-zone-label { position: absolute; right: 8px; top: 4px; font-size: 11px; font-weight: 600; }
.provider-point { position: absolute; border-radius: 50%; transform: translate(-50%, -50%); border: 2px solid #fff; transition: left 200ms ease, top 200ms ease; }
.provider-point.winner { box-shadow: 0 0 0 4px rgba(37, 99, 235, 0.35); }
.provider-tooltip { display: none; position: absolute; bottom: 120%; left: 50%; transform: translateX(-50%); white-space: nowrap; background: var(--text); color: var(--bg); padding: 4px 8px; border-radius: 6px; font-size: 12px; }
.provider-point:hover .provider-tooltip { display: block; }
.axis-label { position: absolute; font-size: 12px; color: var(--text-secondary); }
.axis-x { bottom: 8px; right: 12px; }
.axis-y { top: 12px; left: 8px; }

.legend-grid { display: flex; flex-wrap: wrap; gap: 16px; }
.legend-item { display: flex; align-items: center; gap: 8px; }
.legend-dot { width: 12px; height: 12px; border-radius: 50%; display: inline-block; }

.results-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
.result-card { background: var(--panel); border: 1px solid var(--border); border-radius: var(--radius); padding: 16px; cursor: pointer; box-shadow: var(--shadow); }
.result-card.winner { border-color: var(--accent); }
.result-header { display: flex; justify-content: space-between; align-items: center; }
.result-rank { font-weight: 700; }
.score-bar, .sov-item-bar, .score-bar-mini { height: 6px; background: var(--border); border-radius: 3px; overflow: hidden; }
.score-fill, .sov-item-bar-fill { height: 100%; background: var(--accent); }
.seal-badge { display: inline-block; padding: 2px 8px; border-radius: 999px; font-size: 11px; font-weight: 700; }

.sov-panel-overlay { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); }
.sov-panel { position: fixed; top: 0; right: -480px; width: 480px; height: 100%; background: var(--panel); overflow-y: auto; transition: right 200ms ease; padding: 24px; }
.sov-panel.visible { right: 0; }
.sov-panel-overlay.visible { display: block; }
.sov-item { margin: 12px 0; }
.sov-item-header { display: flex; justify-content: space-between; }
.sov-score-high .sov-item-bar-fill { background: var(--positive); }
.sov-score-medium .sov-item-bar-fill { background: var(--warning); }
.sov-score-low .sov-item-bar-fill { background: var(--negative); }

.scores-table-header, .scores-table-row { display: grid; grid-template-columns: 48px 2fr 1fr 1fr 120px; gap: 8px; padding: 8px 0; border-bottom: 1px solid var(--border); }
.scores-table-row.custom { background: rgba(37, 99, 235, 0.06); }
.provider-name-cell { display: flex; gap: 8px; align-items: center; }
.provider-color-dot { width: 10px; height: 10px; border-radius: 50%; }
.custom-badge { margin-left: 6px; font-size: 11px; color: var(--accent); }
.modal-overlay { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); align-items: center; justify-content: center; }
.modal-overlay.visible { display: flex; }
.modal { background: var(--panel); border-radius: var(--radius); padding: 24px; min-width: 360px; }
.floating-reset { position: fixed; right: 24px; bottom: 24px; }
.success-toast { position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); background: var(--positive); color: #fff; padding: 10px 16px; border-radius: var(--radius); opacity: 0; }
.success-toast.show { opacity: 1; }
"#;
