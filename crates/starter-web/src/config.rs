//! Site content and server settings.
//!
//! `SITE` is compiled in and shared by server and client. `ServerConfig` is
//! server-only and read at startup from an optional TOML file:
//!
//! ```toml
//! [server]
//! log_level = "debug"
//! compression = false
//! ```

use crate::components::Icon;

pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub docs: &'static str,
}

pub struct SiteConfig {
    pub title: &'static str,
    pub description: &'static str,
    /// Shell command offered by the copy control in the page header
    pub scaffold_command: &'static str,
    pub features: &'static [Feature],
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

pub const SITE: SiteConfig = SiteConfig {
    title: "React + TypeScript + Tailwind @ Vite template",
    description: "Front-end starter: Vite, React, TypeScript, Tailwind, PostCSS and Jest, preconfigured.",
    scaffold_command: "npx degit example/vite-react-ts-tailwind my-app",
    features: &[
        Feature {
            name: "Vite",
            description: LOREM,
            icon: Icon::CubeTransparent,
            docs: "https://vitejs.dev/",
        },
        Feature {
            name: "React",
            description: LOREM,
            icon: Icon::Pencil,
            docs: "https://reactjs.org/",
        },
        Feature {
            name: "TypeScript",
            description: LOREM,
            icon: Icon::BookmarkAlt,
            docs: "https://www.typescriptlang.org/",
        },
        Feature {
            name: "Tailwind",
            description: LOREM,
            icon: Icon::Photograph,
            docs: "https://tailwindcss.com/",
        },
        Feature {
            name: "PostCSS",
            description: LOREM,
            icon: Icon::Puzzle,
            docs: "https://postcss.org/",
        },
        Feature {
            name: "Jest",
            description: LOREM,
            icon: Icon::QuestionMarkCircle,
            docs: "https://jestjs.io/",
        },
    ],
};

/// CSS `animation-delay` for the card at `index`, staggering the fade-in.
pub fn card_animation_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * 0.1 + 0.2)
}

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use serde::Deserialize;
    use std::path::{Path, PathBuf};

    /// Env var naming the config file.
    pub const CONFIG_PATH_ENV: &str = "STARTER_CONFIG";
    /// Env var overriding `[server] log_level`.
    pub const LOG_LEVEL_ENV: &str = "STARTER_LOG_LEVEL";
    const DEFAULT_CONFIG_PATH: &str = "starter.toml";

    #[derive(Debug, Default, Deserialize)]
    struct FileConfig {
        #[serde(default)]
        server: ServerConfig,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct ServerConfig {
        /// Default tracing filter when `RUST_LOG` is unset
        pub log_level: String,
        /// Gzip responses
        pub compression: bool,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                log_level: "info".to_string(),
                compression: true,
            }
        }
    }

    impl ServerConfig {
        /// Load from a TOML file. A missing file yields the defaults.
        pub fn load(path: &Path) -> Result<Self> {
            if !path.exists() {
                return Ok(Self::default());
            }
            let content =
                std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
            let file: FileConfig =
                toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))?;
            Ok(file.server)
        }

        /// Load from `$STARTER_CONFIG` (or `starter.toml`) and apply env overrides.
        pub fn from_env() -> Result<Self> {
            let path = std::env::var_os(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
            let config = Self::load(&path)?;
            Ok(config.with_log_level(std::env::var(LOG_LEVEL_ENV).ok()))
        }

        fn with_log_level(mut self, level: Option<String>) -> Self {
            if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
                self.log_level = level;
            }
            self
        }
    }

}

#[cfg(feature = "ssr")]
pub use server::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_are_listed_in_order() {
        let names: Vec<_> = SITE.features.iter().map(|f| f.name).collect();
        assert_eq!(names, ["Vite", "React", "TypeScript", "Tailwind", "PostCSS", "Jest"]);
        assert!(SITE.features.iter().all(|f| f.docs.starts_with("https://")));
    }

    #[test]
    fn animation_delay_staggers_from_point_two() {
        assert_eq!(card_animation_delay(0), "animation-delay: 0.2s");
        assert_eq!(card_animation_delay(3), "animation-delay: 0.5s");
    }
}
