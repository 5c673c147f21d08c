use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolve `Auto` to a concrete mode.
    ///
    /// Uses the `COLORFGBG` convention (`fg;bg`) when the terminal exports it
    /// and falls back to dark.
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto => std::env::var("COLORFGBG")
                .ok()
                .and_then(|value| theme_from_colorfgbg(&value))
                .unwrap_or(Self::Dark),
            other => other,
        }
    }
}

fn theme_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    // ANSI 7 (white) and 9-15 (bright colors) are light backgrounds.
    if bg == 7 || (9..=15).contains(&bg) {
        Some(ThemeMode::Light)
    } else {
        Some(ThemeMode::Dark)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_mouse: bool,
    pub perf: bool,
    pub theme: Option<ThemeMode>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_mouse: self.no_mouse || other.no_mouse,
            perf: self.perf || other.perf,
            theme: other.theme.or(self.theme),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("tasklist").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("tasklist")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("tasklist").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("tasklist")
                .join("config");
        }
    }

    PathBuf::from(".tasklistrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".tasklistrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# tasklist defaults (saved with --save)".to_string());
    if flags.no_mouse {
        lines.push("--no-mouse".to_string());
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        lines.push(format!("--theme {theme_str}"));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from a token list.
///
/// Unknown tokens are skipped, so this accepts both raw argv and config file
/// contents. `--task` values are consumed but never recorded.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-mouse" {
            flags.no_mouse = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if token == "--theme" {
            if let Some(next) = tokens.get(i + 1) {
                flags.theme = parse_theme(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--theme=") {
            flags.theme = parse_theme(value);
        } else if token == "--render-debug-log" {
            if let Some(next) = tokens.get(i + 1) {
                flags.render_debug_log = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--render-debug-log=") {
            flags.render_debug_log = Some(PathBuf::from(value));
        } else if token == "--task" || token == "-t" {
            // Skip the value so task text is never mistaken for a flag.
            i += 1;
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "tasklist".to_string(),
            "--no-mouse".to_string(),
            "--theme".to_string(),
            "dark".to_string(),
            "--render-debug-log=render.log".to_string(),
            "--perf".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.no_mouse);
        assert!(flags.perf);
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
        assert_eq!(flags.render_debug_log, Some(PathBuf::from("render.log")));
    }

    #[test]
    fn test_parse_flag_tokens_skips_task_values() {
        let args = vec![
            "tasklist".to_string(),
            "--task".to_string(),
            "--perf".to_string(),
            "-t".to_string(),
            "--no-mouse".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(!flags.perf);
        assert!(!flags.no_mouse);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            no_mouse: true,
            theme: Some(ThemeMode::Light),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            perf: true,
            theme: Some(ThemeMode::Dark),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_mouse);
        assert!(merged.perf);
        assert_eq!(merged.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            no_mouse: true,
            perf: true,
            theme: Some(ThemeMode::Light),
            render_debug_log: Some(PathBuf::from("render.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let flags = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(flags, ConfigFlags::default());
    }

    #[test]
    fn test_colorfgbg_background_detection() {
        assert_eq!(theme_from_colorfgbg("0;15"), Some(ThemeMode::Light));
        assert_eq!(theme_from_colorfgbg("15;0"), Some(ThemeMode::Dark));
        assert_eq!(theme_from_colorfgbg("12;default;7"), Some(ThemeMode::Light));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
    }

    #[test]
    fn test_explicit_theme_resolves_to_itself() {
        assert_eq!(ThemeMode::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.resolve(), ThemeMode::Dark);
    }
}
