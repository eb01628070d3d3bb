//! Platform-specific configuration

/// Send shortcut display for form help text
/// Ctrl+S works on all platforms, including macOS terminals where Cmd
/// combinations never reach the application
pub const SEND_SHORTCUT: &str = "Ctrl+S";
