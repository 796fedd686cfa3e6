use lipgloss::ColorProfileKind;

pub const APP_NAME: &str = "CPI Navigator";
pub const APP_LONG_NAME: &str = "Cloud Integration Navigator";

/// Text printed by `--version`: release plus the runtime environment.
pub fn long_version(profile: ColorProfileKind) -> String {
    let profile = match profile {
        ColorProfileKind::TrueColor => "True Color",
        ColorProfileKind::ANSI256 => "ANSI256",
        ColorProfileKind::ANSI => "ANSI",
        ColorProfileKind::NoColor => "ASCII (Uncolored)",
    };
    let platform = format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH);
    format!(
        "{}\n\n  {:<20}{}\n\nRuntime environment:\n\n  {:<20}{}\n  {:<20}{}",
        APP_NAME,
        "Version:",
        env!("CARGO_PKG_VERSION"),
        "Platform:",
        platform,
        "Color profile:",
        profile,
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleBar {
    pub title: String,
    pub version: String,
}

impl Default for TitleBar {
    fn default() -> Self {
        Self {
            title: APP_LONG_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl TitleBar {
    pub fn text(&self) -> String {
        format!("{} v{}", self.title, self.version)
    }
}

/// Tenant badge plus a free-form message line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusBar {
    pub tenant: String,
    pub message: String,
}

impl StatusBar {
    pub fn new(tenant: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tenant: tenant.into(),
            message: message.into(),
        }
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_carries_version() {
        let t = TitleBar::default();
        assert!(t.text().starts_with("Cloud Integration Navigator v"));
        assert!(t.text().ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn long_version_reports_runtime_environment() {
        let text = long_version(ColorProfileKind::NoColor);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "CPI Navigator");
        assert_eq!(
            lines[2],
            format!("  Version:            {}", env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(lines[4], "Runtime environment:");
        assert_eq!(
            lines[6],
            format!(
                "  Platform:           {}/{}",
                std::env::consts::OS,
                std::env::consts::ARCH
            )
        );
        assert_eq!(lines[7], "  Color profile:      ASCII (Uncolored)");
        assert!(long_version(ColorProfileKind::TrueColor).ends_with("True Color"));
    }
}
