//! Global CSS styles for the business card.
//!
//! One stylesheet, injected by the root component. The portrait pulse
//! keyframes live here; the webview compositor drives them.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKDROP */
  --sky: #b3e5fc;

  /* TEXT */
  --ink: #1c1b1f;
  --link-blue: #0000ff;

  /* PORTRAIT */
  --portrait-disc: #6650a4;
  --portrait-glyph: #eaddff;

  /* Type Scale */
  --text-row: 1.25rem;
  --text-name: 2rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  background: var(--sky);
  color: var(--ink);
}

/* === Card Screen Layout === */
.card-screen {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  min-height: 100vh;
  padding: 16px;
  background: var(--sky);
}

.card-screen__spacer {
  height: 16px;
}

/* === Header === */
.card-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 8px;
}

.card-header__name {
  margin-top: 8px;
  font-size: var(--text-name);
  font-weight: 700;
  text-align: center;
  color: var(--ink);
}

/* === Avatar === */
.avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  overflow: hidden;
  background: var(--portrait-disc);
  color: var(--portrait-glyph);
}

.avatar__glyph {
  width: 100%;
  height: 100%;
}

/* Scale breathes between 1 and 1.05, one second out, one second back. */
.avatar--pulse {
  animation: portrait-pulse 2s linear infinite;
}

@keyframes portrait-pulse {
  0%, 100% { transform: scale(1.0); }
  50% { transform: scale(1.05); }
}

/* === Contact Rows === */
.contact-info {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 8px;
}

.contact-row {
  font-size: var(--text-row);
  line-height: 1.6;
  color: var(--ink);
}

.contact-row__value {
  color: var(--link-blue);
  text-decoration: none;
  cursor: pointer;
}
"#;

#[cfg(test)]
mod tests {
    use super::GLOBAL_STYLES;

    #[test]
    fn pulse_keyframes_use_exact_scale_bounds() {
        assert!(GLOBAL_STYLES.contains("scale(1.0)"));
        assert!(GLOBAL_STYLES.contains("scale(1.05)"));
    }

    #[test]
    fn pulse_runs_linear_and_unbounded() {
        assert!(GLOBAL_STYLES.contains("portrait-pulse 2s linear infinite"));
    }
}
