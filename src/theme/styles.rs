//! Global CSS styles for Neural Glass.
//!
//! Dark glassmorphism: translucent panels over a neon gradient backdrop.
//! State-driven looks (scrolled header, active links, open menu, reveal
//! transitions, submit button gradients) are applied from component state;
//! this sheet only supplies the static layer and the keyframes.

/// Icon font used by the feature hexagons and the submit button.
pub const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --neon-cyan: #00ffff;
  --neon-pink: #ff0080;
  --neon-purple: #8000ff;

  --glass-bg: rgba(255, 255, 255, 0.05);
  --glass-border: rgba(255, 255, 255, 0.12);
  --glass-blur: blur(20px);

  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: auto;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: linear-gradient(135deg, #0a0a1a 0%, #1a0a2e 50%, #0a1a2e 100%);
  min-height: 100vh;
  overflow-x: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Header === */
header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  padding: 1.5rem 0;
  transition: background var(--transition-normal), padding var(--transition-normal);
}

header.scrolled {
  padding: 0.75rem 0;
  background: rgba(10, 10, 26, 0.8);
  backdrop-filter: var(--glass-blur);
  border-bottom: 1px solid var(--glass-border);
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-weight: 700;
  font-size: 1.25rem;
}

.logo-icon {
  width: 32px;
  height: 32px;
  border-radius: 8px;
  background: linear-gradient(45deg, var(--neon-cyan), var(--neon-pink));
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-links a,
.mobile-nav a {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-links a:hover,
.nav-links a.active,
.mobile-nav a.active {
  color: var(--neon-cyan);
}

/* === Mobile Menu === */
.mobile-menu-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.mobile-menu-toggle span {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.mobile-menu-toggle.active span:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.mobile-menu-toggle.active span:nth-child(2) {
  opacity: 0;
}

.mobile-menu-toggle.active span:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

.mobile-nav {
  position: fixed;
  top: 70px;
  left: 1rem;
  right: 1rem;
  z-index: 99;
  padding: 1.5rem;
  background: rgba(10, 10, 26, 0.95);
  backdrop-filter: var(--glass-blur);
  border: 1px solid var(--glass-border);
  border-radius: 16px;
  opacity: 0;
  transform: translateY(-20px);
  pointer-events: none;
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.mobile-nav.active {
  opacity: 1;
  transform: translateY(0);
  pointer-events: auto;
}

.mobile-nav ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .mobile-menu-toggle {
    display: flex;
  }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  text-align: center;
}

.hero-content {
  position: relative;
  z-index: 2;
  padding: 0 2rem;
}

.hero-title {
  font-size: clamp(3rem, 8vw, 6rem);
  font-weight: 800;
  background: linear-gradient(45deg, var(--neon-cyan), var(--neon-pink), var(--neon-purple));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  margin-top: 1rem;
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.cta-buttons {
  margin-top: 2.5rem;
  display: flex;
  gap: 1rem;
  justify-content: center;
}

.btn {
  padding: 0.9rem 2rem;
  border-radius: 50px;
  font-weight: 600;
  border: 1px solid var(--glass-border);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:hover {
  transform: translateY(-2px);
  box-shadow: 0 10px 30px rgba(0, 255, 255, 0.25);
}

.btn-primary {
  background: linear-gradient(45deg, var(--neon-cyan), var(--neon-pink));
}

.btn-secondary {
  background: var(--glass-bg);
  backdrop-filter: var(--glass-blur);
}

/* === Ambient Layer === */
.floating-shapes {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.shape {
  position: absolute;
  border: 1px solid var(--glass-border);
  background: var(--glass-bg);
  backdrop-filter: blur(10px);
}

.shape-1 { width: 120px; height: 120px; top: 15%; left: 10%; border-radius: 30%; }
.shape-2 { width: 80px; height: 80px; top: 60%; left: 80%; border-radius: 50%; }
.shape-3 { width: 160px; height: 160px; top: 70%; left: 15%; border-radius: 20%; }
.shape-4 { width: 60px; height: 60px; top: 20%; left: 75%; transform: rotate(45deg); }

.neural-lines {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.neural-line {
  position: absolute;
  left: 10%;
  width: 80%;
  height: 1px;
  background: linear-gradient(90deg, transparent, var(--neon-cyan), transparent);
  transition: opacity 0.3s ease, transform 0.3s ease;
}

.neural-line:nth-child(1) { top: 30%; }
.neural-line:nth-child(2) { top: 50%; }
.neural-line:nth-child(3) { top: 70%; }

.particle-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: -1;
}

@keyframes particle-rise {
  from {
    transform: translateY(0) translateX(0);
    opacity: 0;
  }
  to {
    transform: translateY(-100vh) translateX(var(--drift));
    opacity: 1;
  }
}

/* === Sections === */
section {
  padding: 6rem 2rem;
}

.section-title {
  text-align: center;
  font-size: 2.5rem;
  margin-bottom: 3rem;
}

.hexagon-grid,
.showcase-grid {
  max-width: 1100px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 2rem;
}

.hexagon,
.glass-card,
.timeline-content,
.contact-glass {
  background: var(--glass-bg);
  backdrop-filter: var(--glass-blur);
  border: 1px solid var(--glass-border);
  border-radius: 20px;
}

.hexagon {
  padding: 2rem;
  text-align: center;
}

.hexagon i {
  font-size: 2rem;
  color: var(--neon-cyan);
  margin-bottom: 1rem;
}

.hexagon p,
.glass-card p,
.timeline-content p {
  color: var(--text-secondary);
  margin-top: 0.5rem;
}

.glass-card {
  padding: 2rem;
}

.showcase-more {
  display: block;
  margin-top: 2rem;
  text-align: center;
  color: var(--text-secondary);
}

/* === Timeline === */
.timeline {
  position: relative;
  max-width: 800px;
  margin: 0 auto;
}

.timeline::before {
  content: '';
  position: absolute;
  left: 50%;
  top: 0;
  bottom: 0;
  width: 2px;
  background: linear-gradient(var(--neon-cyan), var(--neon-pink));
}

.timeline-item {
  position: relative;
  width: 50%;
  padding: 1.5rem 2rem;
}

.timeline-item:nth-child(even) {
  margin-left: 50%;
}

.timeline-content {
  padding: 1.5rem;
}

.timeline-year {
  color: var(--neon-pink);
  font-weight: 700;
}

/* === Contact === */
.contact-glass {
  max-width: 700px;
  margin: 0 auto;
  padding: 2.5rem;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.contact-form input,
.contact-form textarea {
  width: 100%;
  padding: 0.9rem 1rem;
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.04);
  border: 1px solid var(--glass-border);
  border-radius: 12px;
  font: inherit;
}

.contact-form input:focus,
.contact-form textarea:focus {
  outline: none;
  border-color: var(--neon-cyan);
}

.submit-btn {
  padding: 1rem;
  border: none;
  border-radius: 50px;
  color: var(--text-primary);
  font-weight: 700;
  letter-spacing: 0.05em;
  cursor: pointer;
  transition: background var(--transition-normal), opacity var(--transition-normal);
}

.submit-btn:disabled {
  cursor: not-allowed;
  opacity: 0.85;
}

@media (max-width: 768px) {
  .form-row {
    grid-template-columns: 1fr;
  }

  .timeline::before {
    left: 1rem;
  }

  .timeline-item,
  .timeline-item:nth-child(even) {
    width: 100%;
    margin-left: 0;
    padding-left: 2.5rem;
  }
}

/* === Footer === */
footer {
  padding: 2rem;
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--glass-border);
}
"#;
