//! `restmenu show` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use restmenu_config::{CliSettings, Config};
use restmenu_tree::{MenuTreeParameters, MenuTreeProvider, YamlMenuProvider, build_menu};

use crate::error::CliError;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Menu name (e.g., "main").
    menu: String,

    /// Path to configuration file (default: auto-discover restmenu.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML menu definitions file (overrides config).
    #[arg(short, long, env = "RESTMENU_MENUS")]
    menus: Option<PathBuf>,

    /// Only show the children of the link with this id.
    #[arg(long)]
    root: Option<String>,

    /// Drop links deeper than this.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the menu cannot be loaded,
    /// or stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            menus_source: self.menus,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let provider = YamlMenuProvider::new(config.menus_resolved.source);

        let params = MenuTreeParameters {
            root: self.root,
            max_depth: self.max_depth,
        };
        let json = render_menu(&provider, &self.menu, &params, !self.compact)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
        Ok(())
    }
}

/// Resolve and serialize a menu to JSON.
fn render_menu(
    provider: &dyn MenuTreeProvider,
    menu: &str,
    params: &MenuTreeParameters,
    pretty: bool,
) -> Result<String, CliError> {
    let tree = provider.resolve_tree(menu, params)?;
    let entries = build_menu(&tree.links);
    tracing::debug!(menu = %menu, entries = entries.len(), "Rendered menu");

    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use restmenu_tree::StaticMenuProvider;

    const MENUS: &str = r"
main:
  - id: home
    title: Home
    url: /
  - id: more
    title: More
    url: /more
    weight: 1
    children:
      - title: Blog
        url: https://blog.example.com
      - title: Archive
        url: /archive
        enabled: false
";

    fn provider() -> StaticMenuProvider {
        StaticMenuProvider::from_yaml_str(MENUS).unwrap()
    }

    #[test]
    fn test_render_compact() {
        let json = render_menu(&provider(), "main", &MenuTreeParameters::default(), false).unwrap();

        assert_eq!(
            json,
            r#"[{"title":"Home","url":"/","weight":0},{"title":"More","url":"/more","weight":1,"children":[{"title":"Blog","url":"https://blog.example.com","weight":0}]}]"#
        );
    }

    #[test]
    fn test_render_pretty_is_same_value() {
        let params = MenuTreeParameters::default();
        let pretty = render_menu(&provider(), "main", &params, true).unwrap();
        let compact = render_menu(&provider(), "main", &params, false).unwrap();

        assert!(pretty.contains('\n'));
        let pretty: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let compact: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(pretty, compact);
    }

    #[test]
    fn test_render_with_root() {
        let params = MenuTreeParameters::default().with_root("more");

        let json = render_menu(&provider(), "main", &params, false).unwrap();

        assert_eq!(json, r#"[{"title":"Blog","url":"https://blog.example.com","weight":0}]"#);
    }

    #[test]
    fn test_render_unknown_menu() {
        let err = render_menu(&provider(), "footer", &MenuTreeParameters::default(), false)
            .unwrap_err();

        assert!(matches!(err, CliError::Provider(_)));
        assert_eq!(err.to_string(), "Menu not found: footer");
    }
}
