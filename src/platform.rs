//! Platform-specific key hints

/// Send shortcut display for the contact form help text.
/// Ctrl+S on all platforms; Cmd+S never reaches the app in macOS terminals.
pub const SEND_SHORTCUT: &str = "Ctrl+S";

/// Refine shortcut display
pub const REFINE_SHORTCUT: &str = "Ctrl+R";

/// Name of the key that opens links and images outside the terminal
/// - macOS: "Cmd+click" in most terminal emulators
/// - Linux/Windows: "Ctrl+click"
#[cfg(target_os = "macos")]
pub const LINK_HINT: &str = "Cmd+click";

#[cfg(not(target_os = "macos"))]
pub const LINK_HINT: &str = "Ctrl+click";
