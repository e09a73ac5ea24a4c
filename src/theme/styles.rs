//! Global CSS for the admin shell and the rendered profile page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --paper: #fafaf9;
  --card: #ffffff;
  --border: #e7e5e4;

  /* Emerald (brand, actions) */
  --emerald: #16a34a;
  --emerald-dark: #15803d;
  --emerald-soft: rgba(22, 163, 74, 0.1);

  /* Text */
  --ink: #1c1917;
  --ink-secondary: #57534e;
  --ink-muted: #a8a29e;

  /* Semantic */
  --danger: #dc2626;
  --warning: #d97706;
  --accent-purple: #7c3aed;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  --radius: 10px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
}

input, select, textarea {
  font-family: inherit;
  font-size: var(--text-sm);
  padding: 0.5rem 0.7rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--card);
  color: var(--ink);
}

input:focus, select:focus, textarea:focus {
  outline: 2px solid var(--emerald-soft);
  border-color: var(--emerald);
}

input[type="color"] {
  padding: 0.1rem;
  width: 3.5rem;
  height: 2.2rem;
}

a {
  color: var(--emerald);
}

h1 {
  font-size: var(--text-xl);
  margin-bottom: 0.75rem;
}

h3 {
  font-size: var(--text-base);
  margin-bottom: 0.5rem;
}

/* === Typography Helpers === */
.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.page-subtitle {
  color: var(--ink-secondary);
  font-size: var(--text-sm);
  margin-bottom: 1.25rem;
}

.tagline {
  color: var(--ink-secondary);
  font-size: var(--text-lg);
  max-width: 36rem;
  margin: 0 auto 1.5rem;
}

.empty-note {
  color: var(--ink-muted);
  font-size: var(--text-sm);
  font-style: italic;
  margin-top: 1rem;
}

/* === Buttons === */
.btn-primary {
  background: var(--emerald);
  color: #ffffff;
  border: none;
  border-radius: 6px;
  padding: 0.55rem 1.1rem;
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast);
}

.btn-primary:hover { background: var(--emerald-dark); }
.btn-primary:disabled { opacity: 0.6; cursor: default; }

.btn-ghost {
  background: transparent;
  color: var(--ink);
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 0.55rem 1.1rem;
  font-size: var(--text-sm);
  font-weight: 600;
  text-decoration: none;
  transition: border-color var(--transition-fast);
}

.btn-ghost:hover { border-color: var(--ink-muted); }

.btn-danger {
  background: transparent;
  color: var(--danger);
  border: 1px solid var(--danger);
  border-radius: 6px;
  padding: 0.55rem 1.1rem;
  font-size: var(--text-sm);
  font-weight: 600;
}

.btn-primary.small, .btn-ghost.small, .btn-danger.small {
  padding: 0.3rem 0.7rem;
  font-size: var(--text-xs);
}

.btn-primary.large, .btn-ghost.large {
  padding: 0.75rem 1.6rem;
  font-size: var(--text-base);
}

.btn-icon {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--ink-secondary);
  width: 1.8rem;
  height: 1.8rem;
  line-height: 1;
}

.btn-icon:disabled { opacity: 0.35; cursor: default; }

/* === Landing === */
.landing {
  max-width: 60rem;
  margin: 0 auto;
  padding: 4rem 2rem;
  text-align: center;
}

.landing-header { margin-bottom: 3rem; }

.landing-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  margin-bottom: 4rem;
}

.landing-features {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.25rem;
  text-align: left;
}

.feature-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem;
}

.feature-card h3 { color: var(--emerald-dark); }
.feature-card p { color: var(--ink-secondary); font-size: var(--text-sm); }

/* === Auth === */
.auth-page {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 2rem;
}

.auth-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2rem;
  width: 100%;
  max-width: 24rem;
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
}

.auth-hint {
  font-size: var(--text-xs);
  color: var(--ink-muted);
  background: var(--emerald-soft);
  border-radius: 6px;
  padding: 0.5rem 0.7rem;
}

.auth-switch {
  font-size: var(--text-sm);
  color: var(--ink-secondary);
  text-align: center;
}

/* === Forms === */
.form-row {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  margin-bottom: 0.75rem;
}

.form-row label {
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--ink-secondary);
  text-transform: uppercase;
  letter-spacing: 0.04em;
}

.form-row.inline {
  flex-direction: row;
  align-items: center;
  gap: 0.6rem;
}

.form-row.inline label { text-transform: none; }

.form-error {
  color: var(--danger);
  font-size: var(--text-sm);
  margin-bottom: 0.5rem;
}

.form-hint {
  color: var(--ink-muted);
  font-size: var(--text-xs);
}

/* === Admin Shell === */
.admin-page { min-height: 100vh; }

.nav-header {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  background: var(--card);
  border-bottom: 1px solid var(--border);
  padding: 0.75rem 1.5rem;
}

.nav-brand {
  font-weight: 700;
  color: var(--emerald-dark);
  font-size: var(--text-lg);
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  flex: 1;
}

.nav-link {
  color: var(--ink-secondary);
  text-decoration: none;
  font-size: var(--text-sm);
  padding: 0.4rem 0.8rem;
  border-radius: 6px;
}

.nav-link:hover { background: var(--paper); }

.nav-link.active {
  color: var(--emerald-dark);
  background: var(--emerald-soft);
  font-weight: 600;
}

.admin-content {
  max-width: 72rem;
  margin: 0 auto;
  padding: 1.5rem;
}

.admin-content.split {
  display: grid;
  grid-template-columns: 1fr 22rem;
  gap: 2rem;
  align-items: start;
}

.admin-main { min-width: 0; }

/* === Stat Cards === */
.stat-cards {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1rem;
  margin: 1.25rem 0;
}

.stat-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.15rem;
}

.stat-value {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--emerald-dark);
}

.stat-label {
  font-size: var(--text-xs);
  color: var(--ink-muted);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

/* === Editor Cards === */
.editor-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem;
  margin-bottom: 1.25rem;
}

/* === Entry Lists (links, socials) === */
.entry-list {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.entry-row {
  display: flex;
  align-items: center;
  gap: 0.8rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.7rem 0.9rem;
}

.entry-row.inactive { opacity: 0.55; }

.entry-reorder {
  display: flex;
  flex-direction: column;
  gap: 0.2rem;
}

.entry-main {
  flex: 1;
  min-width: 0;
  display: flex;
  flex-direction: column;
  gap: 0.1rem;
}

.entry-title {
  font-weight: 600;
  font-size: var(--text-sm);
}

.entry-subtitle {
  font-size: var(--text-xs);
  color: var(--ink-muted);
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.entry-actions {
  display: flex;
  gap: 0.4rem;
}

.entry-edit {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

/* === Platform Icon === */
.platform-icon {
  width: 2.2rem;
  height: 2.2rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  color: #ffffff;
  font-size: var(--text-xs);
  font-weight: 700;
  flex-shrink: 0;
}

/* === Template Gallery === */
.template-gallery { min-width: 0; }

.gallery-controls {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.gallery-search { width: 100%; }

.category-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.pill {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.3rem 0.8rem;
  font-size: var(--text-xs);
  color: var(--ink-secondary);
}

.pill.active {
  background: var(--emerald-soft);
  border-color: var(--emerald);
  color: var(--emerald-dark);
  font-weight: 600;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 1rem;
}

.template-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.template-card.selected { border-color: var(--emerald); }

.template-card-header {
  display: flex;
  align-items: center;
  gap: 0.4rem;
}

.template-card-header h3 { margin: 0; flex: 1; }

.template-card-desc {
  font-size: var(--text-xs);
  color: var(--ink-secondary);
}

.template-card-features {
  list-style: none;
  font-size: var(--text-xs);
  color: var(--ink-muted);
  display: flex;
  flex-wrap: wrap;
  gap: 0.3rem 0.7rem;
}

.badge {
  font-size: 0.65rem;
  font-weight: 700;
  border-radius: 4px;
  padding: 0.1rem 0.4rem;
  text-transform: uppercase;
}

.badge.new {
  background: var(--emerald-soft);
  color: var(--emerald-dark);
}

.badge.premium {
  background: rgba(124, 58, 237, 0.1);
  color: var(--accent-purple);
}

/* === Preview Panel === */
.preview-panel {
  position: sticky;
  top: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  align-items: center;
}

.preview-panel-header {
  font-size: var(--text-xs);
  color: var(--ink-muted);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.preview-frame {
  width: 20rem;
  height: 38rem;
  border: 10px solid var(--ink);
  border-radius: 2.2rem;
  overflow: hidden;
  position: relative;
  background: var(--card);
}

.preview-frame-notch {
  position: absolute;
  top: 0;
  left: 50%;
  transform: translateX(-50%);
  width: 7rem;
  height: 1.1rem;
  background: var(--ink);
  border-radius: 0 0 0.8rem 0.8rem;
  z-index: 2;
}

.preview-frame-screen {
  width: 100%;
  height: 100%;
  overflow-y: auto;
}

.preview-open-link {
  font-size: var(--text-sm);
}

/* === Rendered Profile Page === */
.rendered-page {
  min-height: 100%;
  background-size: cover;
  background-position: center;
  padding: 2.5rem 1.25rem 1.5rem;
  display: flex;
  justify-content: center;
}

.rendered-container {
  width: 100%;
  max-width: 24rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.rendered-container.wide { max-width: 40rem; }

.rendered-avatar {
  width: 5.5rem;
  height: 5.5rem;
  border-radius: 50%;
  object-fit: cover;
  margin-bottom: 0.8rem;
}

.rendered-avatar.placeholder {
  background: rgba(128, 128, 128, 0.25);
}

.rendered-name {
  font-size: var(--text-lg);
  font-weight: 700;
  margin: 0;
}

.rendered-handle {
  font-size: var(--text-sm);
  opacity: 0.75;
}

.rendered-bio {
  font-size: var(--text-sm);
  margin-top: 0.4rem;
  max-width: 20rem;
}

.rendered-socials {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.6rem;
  margin: 1rem 0;
}

.rendered-social-icon {
  width: 2.4rem;
  height: 2.4rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-xs);
  font-weight: 700;
  text-decoration: none;
}

.rendered-links {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 0.8rem;
  margin-top: 0.75rem;
}

.rendered-link {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.85rem 1rem;
  border-radius: 999px;
  font-size: var(--text-sm);
  font-weight: 600;
  text-decoration: none;
  transition: transform var(--transition-fast);
}

.rendered-link:hover { transform: scale(1.02); }

/* Cards: squared corners, left aligned, leading glyph */
.rendered-links.cards .rendered-link {
  border-radius: var(--radius);
  justify-content: flex-start;
  padding: 1rem 1.1rem;
}

/* Grid: two columns */
.rendered-links.grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
}

.rendered-links.grid .rendered-link {
  border-radius: var(--radius);
  padding: 1.3rem 0.8rem;
}

/* Minimal: underlined text rows */
.rendered-links.minimal .rendered-link {
  border-radius: 0;
  justify-content: space-between;
  padding: 0.7rem 0.2rem;
}

/* Horizontal: wrapping chips */
.rendered-links.horizontal {
  flex-direction: row;
  flex-wrap: wrap;
  justify-content: center;
}

.rendered-links.horizontal .rendered-link {
  padding: 0.6rem 1.1rem;
}

.link-glyph { font-size: var(--text-xs); opacity: 0.9; }

.link-title {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.link-trailing { font-size: var(--text-base); }

.rendered-attribution {
  margin-top: auto;
  padding-top: 2rem;
  font-size: var(--text-xs);
  opacity: 0.6;
}

/* === Loading / Not Found === */
.loading-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.8rem;
  padding: 5rem 1rem;
  color: var(--ink-muted);
}

.loading-spinner {
  width: 1.8rem;
  height: 1.8rem;
  border: 3px solid var(--border);
  border-top-color: var(--emerald);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.not-found-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.8rem;
  min-height: 100vh;
  padding: 2rem;
  text-align: center;
}

.not-found-page p { color: var(--ink-secondary); }
"#;
