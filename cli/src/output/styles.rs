//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Stylesheet for terminal output. Every style is plain until [`Styles::colorize`].
#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Progress steps and hints
    pub info: Style,
    /// Keys in `key  value` rows
    pub label: Style,
    pub emphasis: Style,
    pub header: Style,
    /// Job ids, so they stand out for copy-paste into `check --job-id`
    pub job_id: Style,
    /// Anything that permanently removes data
    pub destructive: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.info = Style::new().blue();
        self.label = Style::new().dimmed();
        self.emphasis = Style::new().bold();
        self.header = Style::new().bold().cyan();
        self.job_id = Style::new().magenta();
        self.destructive = Style::new().bold().red();
    }
}
