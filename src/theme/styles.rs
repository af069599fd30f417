//! Global CSS styles for the gallery shell.
//!
//! Widget styles come from `vantui_ui::STYLES`; these only lay out pages.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --page-background: #f7f8fa;
  --surface: #ffffff;
  --border: #ebedf0;
  --text-primary: #323233;
  --text-secondary: #969799;
  --brand: #1989fa;

  --font-sans: -apple-system, BlinkMacSystemFont, 'Helvetica Neue', Helvetica, Arial, sans-serif;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--page-background);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 12px 24px;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.app-title {
  font-size: 20px;
  font-weight: 600;
}

.nav-links {
  display: flex;
  gap: 16px;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link.active,
.nav-link:hover {
  color: var(--brand);
}

/* === Pages === */
.page {
  max-width: 720px;
  margin: 0 auto;
  padding: 16px 24px 48px;
}

.demo-section {
  margin-top: 24px;
}

.demo-title {
  margin-bottom: 12px;
  font-size: 14px;
  font-weight: 400;
  color: var(--text-secondary);
}

.demo-body {
  padding: 16px;
  background: var(--surface);
  border-radius: 8px;
}

.preset-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 24px;
}

.preset {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 8px;
}

.preset-label {
  font-size: 12px;
  color: var(--text-secondary);
}

.preset-controls,
.button-row {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.preset-controls .vt-button,
.button-row .vt-button {
  height: 32px;
  font-size: 14px;
  border-radius: 4px;
}

.circle-slot {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  font-size: 12px;
  color: var(--text-secondary);
}

.custom-dialog-body {
  padding: 16px 24px 24px;
  font-size: 14px;
}

.event-log {
  margin-top: 24px;
  font-size: 13px;
  color: var(--text-secondary);
}
"#;
