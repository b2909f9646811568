//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a chiffre command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME pointing into the temporary home
    /// - Current directory set to the test working directory
    /// - No inherited CHIFFRE_* variables, colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("chiffre").expect("failed to find chiffre binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.config_home());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("CHIFFRE_CONFIG");
        cmd.env_remove("CHIFFRE_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `chiffre encode`.
    pub fn encode(&self, method: &str, text: &str, key: Option<&str>) -> Output {
        self.run("encode", method, text, key)
    }

    /// Shortcut for `chiffre decode`.
    pub fn decode(&self, method: &str, text: &str, key: Option<&str>) -> Output {
        self.run("decode", method, text, key)
    }

    fn run(&self, direction: &str, method: &str, text: &str, key: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.args([direction, method, text]);
        if let Some(key) = key {
            cmd.args(["--key", key]);
        }
        cmd.output()
            .unwrap_or_else(|e| panic!("failed to run chiffre {}: {}", direction, e))
    }
}
