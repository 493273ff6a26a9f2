use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: bool,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: true,
            banner: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Reads the process arguments and `NO_COLOR`.
    pub fn from_env() -> Self {
        let mut config = Config::new();
        config.set_from_args(env::args().skip(1));
        if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        config
    }

    pub fn set_from_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref().to_lowercase().as_str() {
                "--no-color" => {
                    self.color = false;
                }
                "--no-banner" => {
                    self.banner = false;
                }
                other => {
                    tracing::warn!(arg = other, "ignoring unrecognised argument");
                }
            }
        }
    }
}
