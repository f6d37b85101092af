//! Global CSS styles for the monastery experience app.
//!
//! Warm Himalayan palette: parchment backgrounds, maroon headings,
//! saffron accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PARCHMENT (Backgrounds) */
  --parchment: #faf6ee;
  --parchment-dark: #f1e9da;
  --parchment-border: #e0d6c3;

  /* MAROON (Robes, Headings, Primary Actions) */
  --maroon: #7b2d26;
  --maroon-deep: #5e211c;
  --maroon-soft: rgba(123, 45, 38, 0.12);

  /* SAFFRON (Sacred, Ratings, Ritual Affordances) */
  --saffron: #e0941b;
  --saffron-glow: rgba(224, 148, 27, 0.35);

  /* SKY (Links, Livestream, Calm Accents) */
  --sky: #3f6fa6;

  /* TEXT */
  --text-primary: #2b241c;
  --text-secondary: rgba(43, 36, 28, 0.72);
  --text-muted: rgba(43, 36, 28, 0.5);

  /* SEMANTIC */
  --positive: #3a7d44;
  --danger: #b3261e;
  --night: #171310;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', Helvetica, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
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
  background: var(--parchment);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

h1, h2, h3, h4 {
  font-family: var(--font-serif);
  color: var(--maroon);
  line-height: 1.2;
  font-weight: 600;
}

img {
  display: block;
  max-width: 100%;
}

a {
  color: var(--sky);
  text-decoration: none;
}

/* === Page Shell === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.page-title {
  font-size: var(--text-2xl);
  margin-bottom: 0.5rem;
}

.page-intro {
  color: var(--text-secondary);
  font-size: var(--text-lg);
  max-width: 46rem;
  margin-bottom: 2rem;
}

.empty-state {
  text-align: center;
  padding: 3rem 1rem;
  color: var(--text-muted);
}

.empty-state .empty-emblem {
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost, .btn-sacred {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  padding: 0.55rem 1.2rem;
  border-radius: 8px;
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast),
    box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--maroon);
  color: var(--parchment);
  border: 1px solid var(--maroon-deep);
}

.btn-primary:hover:not(:disabled) {
  background: var(--maroon-deep);
}

.btn-outline {
  background: transparent;
  color: var(--maroon);
  border: 1px solid var(--maroon);
}

.btn-outline:hover:not(:disabled) {
  background: var(--maroon-soft);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid transparent;
}

.btn-ghost:hover:not(:disabled) {
  color: var(--maroon);
  background: var(--maroon-soft);
}

.btn-sacred {
  background: var(--saffron);
  color: var(--night);
  border: 1px solid var(--saffron);
  box-shadow: 0 0 0 0 var(--saffron-glow);
}

.btn-sacred:hover:not(:disabled) {
  box-shadow: 0 0 18px 2px var(--saffron-glow);
}

.btn-primary:disabled, .btn-outline:disabled, .btn-ghost:disabled, .btn-sacred:disabled {
  opacity: 0.55;
  cursor: not-allowed;
}

.btn-block {
  width: 100%;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: var(--text-lg);
  cursor: pointer;
  padding: 0.25rem 0.5rem;
  border-radius: 6px;
}

.icon-btn:hover {
  background: var(--maroon-soft);
  color: var(--maroon);
}

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--maroon);
  color: var(--parchment);
  font-size: var(--text-xs);
  font-weight: 600;
  white-space: nowrap;
}

.badge--secondary {
  background: var(--parchment-dark);
  color: var(--text-secondary);
}

.badge--outline {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid var(--parchment-border);
}

.badge--accent {
  background: var(--saffron);
  color: var(--night);
}

.badge--positive {
  background: var(--positive);
  color: var(--parchment);
}

/* === Section Tabs === */
.section-tabs {
  display: flex;
  gap: 0.25rem;
  background: var(--parchment-dark);
  border-radius: 10px;
  padding: 0.25rem;
  margin-bottom: 1.5rem;
  overflow-x: auto;
}

.section-tab {
  flex: 1;
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 8px;
  background: transparent;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  white-space: nowrap;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.section-tab:hover {
  color: var(--maroon);
}

.section-tab.active {
  background: var(--parchment);
  color: var(--maroon);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(23, 19, 16, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  z-index: 100;
}

.modal-dialog {
  background: var(--parchment);
  border-radius: 14px;
  width: 100%;
  max-width: 520px;
  max-height: 90vh;
  overflow-y: auto;
  box-shadow: 0 18px 50px rgba(23, 19, 16, 0.35);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--parchment-border);
}

.modal-title {
  font-size: var(--text-xl);
}

.modal-body {
  padding: 1.25rem;
}

/* === Forms === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  margin-bottom: 0.9rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.9rem;
}

.form-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-secondary);
}

.form-input, .form-textarea, .form-select {
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  color: var(--text-primary);
  background: #fff;
  border: 1px solid var(--parchment-border);
  border-radius: 8px;
  padding: 0.55rem 0.7rem;
}

.form-input:focus, .form-textarea:focus, .form-select:focus {
  outline: none;
  border-color: var(--maroon);
}

.form-textarea {
  min-height: 90px;
  resize: vertical;
}

.form-error {
  background: rgba(179, 38, 30, 0.1);
  color: var(--danger);
  border-radius: 8px;
  padding: 0.6rem 0.8rem;
  font-size: var(--text-sm);
  margin-bottom: 0.9rem;
}

.form-note {
  background: rgba(63, 111, 166, 0.1);
  color: var(--text-secondary);
  border-radius: 8px;
  padding: 0.6rem 0.8rem;
  font-size: var(--text-xs);
  margin-bottom: 0.9rem;
}

/* === Nav Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(250, 246, 238, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--parchment-border);
}

.nav-header-inner {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 64px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.nav-brand-mark {
  width: 34px;
  height: 34px;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--saffron), var(--maroon));
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1rem;
}

.nav-brand-name {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--maroon);
}

.nav-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  padding: 0.45rem 0.9rem;
  border-radius: 8px;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  color: var(--maroon);
  background: var(--maroon-soft);
}

.nav-link.active {
  color: var(--parchment);
  background: var(--maroon);
}

.nav-session {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.nav-welcome {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Landing === */
.hero {
  position: relative;
  min-height: 78vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  color: var(--parchment);
  background:
    linear-gradient(rgba(23, 19, 16, 0.45), rgba(23, 19, 16, 0.55)),
    url('https://images.unsplash.com/photo-1611426663925-b6ceddb3a4d6?w=1600')
      center / cover no-repeat;
  overflow: hidden;
}

.hero-content {
  position: relative;
  z-index: 2;
  max-width: 52rem;
  padding: 2rem 1.5rem;
}

.hero-title {
  color: var(--parchment);
  font-size: clamp(2.4rem, 6vw, 4.2rem);
  margin-bottom: 1rem;
  text-shadow: 0 2px 16px rgba(0, 0, 0, 0.5);
}

.hero-tagline {
  font-size: var(--text-xl);
  color: rgba(250, 246, 238, 0.85);
  margin-bottom: 3rem;
}

.prayer-flags {
  position: absolute;
  top: 1.5rem;
  left: 2rem;
  display: flex;
  gap: 1rem;
  z-index: 1;
  animation: flags-sway 4s ease-in-out infinite;
}

.prayer-flag {
  width: 2rem;
  height: 3rem;
  opacity: 0.8;
  transform: rotate(3deg);
}

.prayer-flag--blue { background: #3b6fb5; }
.prayer-flag--white { background: #f5f1e8; }
.prayer-flag--red { background: #c03b2d; }
.prayer-flag--green { background: #3d8a4e; }
.prayer-flag--yellow { background: #e8c832; }

@keyframes flags-sway {
  0%, 100% { transform: translateX(-12px); }
  50% { transform: translateX(12px); }
}

.prayer-wheel-area {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
}

.prayer-wheel {
  width: 8rem;
  height: 8rem;
  border-radius: 50%;
  border: 4px solid #f3cf6b;
  background: radial-gradient(circle at 35% 30%, #f6c14d, #e0941b 55%, #a4531d);
  font-size: 2.6rem;
  cursor: pointer;
  box-shadow: 0 10px 34px rgba(0, 0, 0, 0.45);
  transition: transform var(--transition-fast);
}

.prayer-wheel:hover:not(:disabled) {
  transform: scale(1.05);
}

.prayer-wheel.spinning {
  animation: wheel-spin 1.5s ease-out;
}

@keyframes wheel-spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(1080deg); }
}

.blessing-bubble {
  background: rgba(250, 246, 238, 0.94);
  color: var(--text-primary);
  padding: 0.6rem 1.1rem;
  border-radius: 10px;
  box-shadow: 0 6px 20px rgba(0, 0, 0, 0.3);
  font-size: var(--text-base);
}

.prayer-wheel-hint {
  color: rgba(250, 246, 238, 0.8);
  font-size: var(--text-lg);
}

.feature-section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.feature-heading {
  text-align: center;
  font-size: var(--text-2xl);
  margin-bottom: 2.5rem;
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
}

.feature-card {
  background: #fff;
  border: 1px solid var(--parchment-border);
  border-radius: 14px;
  padding: 1.5rem;
  cursor: pointer;
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.feature-card:hover {
  box-shadow: 0 10px 28px rgba(43, 36, 28, 0.14);
  transform: translateY(-2px);
}

.feature-emblem {
  font-size: 2.2rem;
  margin-bottom: 0.8rem;
}

.feature-card h3 {
  margin-bottom: 0.4rem;
}

.feature-card p {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Cards (shared) === */
.card-grid {
  display: grid;
  gap: 1.5rem;
}

.card-grid--two { grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); }
.card-grid--three { grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); }

.catalog-card {
  background: #fff;
  border: 1px solid var(--parchment-border);
  border-radius: 14px;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  transition: box-shadow var(--transition-normal);
}

.catalog-card:hover {
  box-shadow: 0 10px 28px rgba(43, 36, 28, 0.14);
}

.card-media {
  position: relative;
  aspect-ratio: 16 / 9;
  background: var(--parchment-dark) center / cover no-repeat;
}

.card-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.card-media .badge {
  position: absolute;
  top: 0.7rem;
  right: 0.7rem;
}

.card-body {
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.55rem;
  flex: 1;
}

.card-title {
  font-size: var(--text-xl);
}

.card-meta {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.card-text {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  flex: 1;
}

.card-facts {
  display: flex;
  justify-content: space-between;
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.35rem;
}

.card-price {
  color: var(--positive);
  font-weight: 700;
  font-size: var(--text-lg);
}

.card-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
}

.card-emblem {
  font-size: 2.4rem;
  text-align: center;
}

/* === Explore === */
.explore-controls {
  display: flex;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
  flex-wrap: wrap;
}

.explore-search {
  flex: 1;
  min-width: 240px;
}

.view-toggle {
  display: flex;
  gap: 0.25rem;
  background: var(--parchment-dark);
  border-radius: 8px;
  padding: 0.2rem;
}

.map-placeholder {
  background: var(--parchment-dark);
  border: 1px dashed var(--parchment-border);
  border-radius: 14px;
  padding: 3rem 1.5rem;
  text-align: center;
  color: var(--text-secondary);
}

.map-placeholder .map-pins {
  margin-top: 1.25rem;
  display: inline-flex;
  flex-direction: column;
  gap: 0.4rem;
  text-align: left;
}

/* === Monastery Detail === */
.detail-header {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.4rem;
}

.detail-location {
  color: var(--text-secondary);
  font-size: var(--text-lg);
  margin-bottom: 1.5rem;
}

.gallery-main {
  aspect-ratio: 16 / 9;
  border-radius: 14px;
  overflow: hidden;
  margin-bottom: 0.75rem;
  background: var(--parchment-dark);
}

.gallery-main img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.gallery-thumbs {
  display: flex;
  gap: 0.5rem;
  overflow-x: auto;
  margin-bottom: 1.5rem;
}

.gallery-thumb {
  width: 5rem;
  height: 5rem;
  flex-shrink: 0;
  border-radius: 10px;
  overflow: hidden;
  border: 2px solid transparent;
  padding: 0;
  cursor: pointer;
  background: none;
}

.gallery-thumb.active {
  border-color: var(--maroon);
}

.gallery-thumb img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.detail-panel {
  background: #fff;
  border: 1px solid var(--parchment-border);
  border-radius: 14px;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

.detail-panel h3 {
  margin-bottom: 0.75rem;
}

.detail-panel h4 {
  margin: 1rem 0 0.5rem;
}

.etiquette-group {
  margin-bottom: 1.25rem;
}

.etiquette-group ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.etiquette-group li {
  display: flex;
  gap: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.etiquette-mark {
  color: var(--positive);
  font-weight: 700;
}

.etiquette-mark--warn {
  color: var(--danger);
}

.vr-placeholder {
  aspect-ratio: 16 / 9;
  background: var(--parchment-dark);
  border-radius: 12px;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  margin-bottom: 1rem;
}

.vr-placeholder .vr-emblem {
  font-size: 3.5rem;
  margin-bottom: 0.75rem;
}

.story-card {
  background: #fdf3df;
  border-radius: 12px;
  padding: 1.5rem;
  margin-bottom: 1.25rem;
}

.story-narrator {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.8rem;
}

.story-narrator-mark {
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  background: var(--saffron);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.4rem;
}

.story-chant {
  background: rgba(63, 111, 166, 0.12);
  border-radius: 10px;
  padding: 1rem;
  margin-bottom: 1.25rem;
  color: var(--sky);
  font-style: italic;
  font-size: var(--text-sm);
}

.video-embed {
  position: relative;
  aspect-ratio: 16 / 9;
  border-radius: 12px;
  overflow: hidden;
  background: var(--night);
  color: var(--parchment);
}

.video-embed iframe {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  border: 0;
}

.video-loading {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
}

.detail-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.not-found {
  text-align: center;
  padding: 5rem 1.5rem;
}

.not-found h1 {
  margin-bottom: 1.25rem;
}

/* === Markdown prose === */
.prose p {
  margin-bottom: 0.8rem;
  color: var(--text-secondary);
}

.prose strong {
  color: var(--text-primary);
}

.prose em {
  color: var(--maroon);
}

/* === Festivals === */
.calendar-layout {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

@media (max-width: 760px) {
  .calendar-layout { grid-template-columns: 1fr; }
}

.calendar-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.9rem;
}

.calendar-grid {
  display: grid;
  grid-template-columns: repeat(7, 1fr);
  gap: 0.25rem;
}

.calendar-weekday {
  text-align: center;
  font-size: var(--text-xs);
  font-weight: 700;
  color: var(--text-muted);
  padding-bottom: 0.3rem;
}

.calendar-day {
  aspect-ratio: 1;
  border: none;
  border-radius: 8px;
  background: transparent;
  color: var(--text-primary);
  font-size: var(--text-sm);
  cursor: pointer;
  position: relative;
}

.calendar-day:hover {
  background: var(--maroon-soft);
}

.calendar-day.selected {
  background: var(--maroon);
  color: var(--parchment);
}

.calendar-day.festival::after {
  content: '';
  position: absolute;
  bottom: 4px;
  left: 50%;
  transform: translateX(-50%);
  width: 5px;
  height: 5px;
  border-radius: 50%;
  background: var(--saffron);
}

.calendar-day.blank {
  visibility: hidden;
}

.festival-row {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 0.9rem;
}

.festival-identity {
  display: flex;
  gap: 0.9rem;
}

.festival-emblem {
  font-size: 2.2rem;
}

.festival-date {
  color: var(--maroon);
  font-size: var(--text-sm);
  font-weight: 600;
}

.festival-actions {
  display: flex;
  gap: 0.5rem;
  flex-wrap: wrap;
}

.stream-stage {
  aspect-ratio: 16 / 9;
  background: var(--night);
  border-radius: 12px;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  color: var(--parchment);
  margin-bottom: 1.5rem;
}

.stream-stage .stage-emblem {
  font-size: 3.5rem;
  margin-bottom: 0.75rem;
}

.stream-stage .stage-next {
  color: rgba(250, 246, 238, 0.6);
}

.lamp-area {
  text-align: center;
  padding: 1rem 0 1.5rem;
}

.lamp-emblem {
  font-size: 5rem;
  margin-bottom: 0.75rem;
}

.lamp-glow {
  display: inline-block;
  background: #fdecd7;
  color: #a4531d;
  padding: 0.3rem 0.9rem;
  border-radius: 999px;
  font-size: var(--text-sm);
  margin-bottom: 0.9rem;
}

.intention-panel {
  background: #fdf3df;
  border-radius: 12px;
  padding: 1.5rem;
  text-align: center;
}

.intention-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(110px, 1fr));
  gap: 0.5rem;
  margin-top: 0.9rem;
}

.intention-grid .intention {
  background: #fff;
  border-radius: 8px;
  padding: 0.5rem;
  font-size: var(--text-sm);
}

/* === Community === */
.guide-card {
  display: flex;
  gap: 1rem;
  padding: 1.25rem;
}

.guide-portrait {
  width: 4.5rem;
  height: 4.5rem;
  flex-shrink: 0;
  border-radius: 50%;
  background: var(--parchment-dark);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.8rem;
}

.guide-info {
  flex: 1;
  min-width: 0;
  display: flex;
  flex-direction: column;
  gap: 0.45rem;
}

.guide-top {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 0.5rem;
}

.guide-stats {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.tag-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.35rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.why-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.25rem;
  text-align: center;
}

.why-grid .why-emblem {
  font-size: 2rem;
  margin-bottom: 0.4rem;
}

.volunteer-facts {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  margin-bottom: 1rem;
}

/* === Gratitude Wall === */
.wall-compose {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-bottom: 1.75rem;
}

.wall-note {
  border: 1px solid var(--parchment-border);
  border-radius: 12px;
  padding: 1rem 1.25rem;
  margin-bottom: 0.9rem;
  background: #fff;
}

.wall-note-head {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  margin-bottom: 0.4rem;
}

.wall-note-author {
  font-weight: 700;
}

.wall-note-age {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.wall-reply {
  margin: 0.6rem 0 0 1rem;
  background: var(--parchment-dark);
  border-radius: 10px;
  padding: 0.7rem 0.9rem;
  font-size: var(--text-sm);
}

.wall-reply-head {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.25rem;
  font-weight: 600;
}

/* === Emergency Contacts === */
.contact-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  padding: 0.7rem 0;
  border-bottom: 1px solid var(--parchment-border);
}

.contact-row:last-child {
  border-bottom: none;
}

.contact-number {
  font-weight: 700;
  color: var(--maroon);
}

.contact-note {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

/* === Booking Dialog === */
.booking-summary {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  background: var(--parchment-dark);
  border-radius: 10px;
  padding: 0.9rem 1rem;
  margin-bottom: 1rem;
}

.booking-summary-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.booking-success {
  text-align: center;
  padding: 1.5rem 0.5rem;
}

.booking-success .success-emblem {
  font-size: 3rem;
  margin-bottom: 0.75rem;
}
"#;
