/// Name used for the configuration directory.
pub const APP_NAME: &str = "gitfograph";
/// File name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that points at a configuration file, mainly for tests.
pub const CONFIG_PATH_ENV: &str = "GITFOGRAPH_CONFIG_PATH";

/// Placeholder for `--log-file` that reads the captured log from stdin.
pub const STDIN_MARKER: &str = "-";

/// Date prefix used for labels when dates are shown.
pub const LABEL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default commit circle radius, in SVG user units.
pub const DEFAULT_COMMIT_RADIUS: f64 = 4.0;

/// Stylesheet embedded when no stylesheet file is configured.
pub const DEFAULT_STYLESHEET: &str = "
.graph circle {
  fill: white;
  stroke-width: .3mm;
}
.graph path {
  fill: none;
  stroke-width: .5mm;
}
.messages text {
  font-family: monospace;
  fill: black;
  font-size: 12pt;
}
";
