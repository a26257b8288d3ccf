use std::path::PathBuf;

/// File name Arc uses for its sidebar state
pub const SIDEBAR_FILE_NAME: &str = "StorableSidebar.json";

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("arcmarks");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/arcmarks");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("arcmarks");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Where Arc keeps `StorableSidebar.json` for the current user, if known
pub fn arc_sidebar_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(
        PathBuf::from(home)
            .join("Library/Application Support/Arc")
            .join(SIDEBAR_FILE_NAME),
    )
}

/// Arc's own copy when it exists, otherwise `StorableSidebar.json` in the
/// working directory
pub fn get_default_input() -> PathBuf {
    arc_sidebar_path()
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from(SIDEBAR_FILE_NAME))
}
