//! Session state accumulated by the prompt sequence
//!
//! One value of [`SessionState`] lives for a single run of the workflow. Prompts
//! fill it in incrementally; every later step reads from it by parameter. The
//! whole struct is serde-serializable so a full set of answers can be supplied
//! non-interactively via `--answers <file>`.

use crate::strings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Relational database engine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    MySql,
    MariaDb,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Postgres, Dialect::MySql, Dialect::MariaDb];

    pub fn display_name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "PostgreSQL",
            Dialect::MySql => "MySQL",
            Dialect::MariaDb => "MariaDB",
        }
    }

    /// Identifier written into the generated config files.
    pub fn config_name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql | Dialect::MariaDb => "mysql",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Dialect::Postgres => 5432,
            Dialect::MySql | Dialect::MariaDb => 3306,
        }
    }

    pub fn default_username(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql | Dialect::MariaDb => "root",
        }
    }

    /// Postgres is the skeleton's stock dialect; anything else needs the
    /// alternate users controller/model sources.
    pub fn needs_variant_files(&self) -> bool {
        !matches!(self, Dialect::Postgres)
    }

    /// Variant files are shared across the MySQL-compatible engines.
    pub fn variant_family(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql | Dialect::MariaDb => "sql",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Relational database answers, present only when the operator opted into
/// database setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub dialect: Dialect,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Run the connectivity probe before fetching.
    #[serde(default)]
    pub check_connection: bool,
}

impl DatabaseSettings {
    pub fn defaults_for(dialect: Dialect) -> Self {
        Self {
            dialect,
            name: "seanjs-dev".to_string(),
            host: "localhost".to_string(),
            port: dialect.default_port(),
            username: dialect.default_username().to_string(),
            password: dialect.default_username().to_string(),
            check_connection: false,
        }
    }
}

/// Redis session-store answers, present only when the operator opted in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    /// Redis logical database index.
    pub database: u8,
    #[serde(default)]
    pub check_connection: bool,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            database: 0,
            check_connection: false,
        }
    }
}

/// Everything the prompt sequence collects for one generator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Skeleton ref to clone (template set key).
    pub version: String,

    /// Destination folder name, relative to the working directory.
    pub folder: String,

    pub app_name: String,
    pub app_description: String,
    pub app_keywords: String,
    pub app_author: String,

    /// Keep the article example CRUD module in the clone.
    pub add_article_example: bool,
    /// Keep the chat example module in the clone.
    pub add_chat_example: bool,

    /// Set when the operator opted into database setup.
    #[serde(default)]
    pub database: Option<DatabaseSettings>,

    /// Set when the operator opted into Redis setup.
    #[serde(default)]
    pub redis: Option<RedisSettings>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            version: "master".to_string(),
            folder: "seanjs".to_string(),
            app_name: "SEAN.JS".to_string(),
            app_description:
                "Full-Stack Javascript with SequelizeJS, ExpressJS, AngularJS, and NodeJS"
                    .to_string(),
            app_keywords: "SequelizeJS, ExpressJS, AngularJS, NodeJS".to_string(),
            app_author: String::new(),
            add_article_example: true,
            add_chat_example: true,
            database: None,
            redis: None,
        }
    }
}

impl SessionState {
    /// Destination path the skeleton is cloned into.
    pub fn destination(&self) -> PathBuf {
        PathBuf::from(&self.folder)
    }

    pub fn slugified_app_name(&self) -> String {
        strings::slugify(&self.app_name)
    }

    pub fn humanized_app_name(&self) -> String {
        strings::humanize(&self.app_name)
    }

    pub fn capitalized_app_author(&self) -> String {
        strings::capitalize(&self.app_author)
    }

    /// Database settings with dialect defaults filled in when the operator
    /// skipped database setup. Rendering always needs concrete values.
    pub fn database_or_defaults(&self) -> DatabaseSettings {
        self.database
            .clone()
            .unwrap_or_else(|| DatabaseSettings::defaults_for(Dialect::Postgres))
    }

    pub fn redis_or_defaults(&self) -> RedisSettings {
        self.redis.clone().unwrap_or_default()
    }

    /// Variable table consumed by the template renderer.
    pub fn template_vars(&self) -> Vec<(&'static str, String)> {
        let db = self.database_or_defaults();
        let redis = self.redis_or_defaults();
        vec![
            ("app_name", self.app_name.clone()),
            ("app_description", self.app_description.clone()),
            ("app_keywords", self.app_keywords.clone()),
            ("app_author", self.app_author.clone()),
            ("slugified_app_name", self.slugified_app_name()),
            ("humanized_app_name", self.humanized_app_name()),
            ("capitalized_app_author", self.capitalized_app_author()),
            ("database_name", db.name),
            ("database_host", db.host),
            ("database_port", db.port.to_string()),
            ("database_username", db.username),
            ("database_password", db.password),
            ("database_dialect", db.dialect.config_name().to_string()),
            ("redis_host", redis.host),
            ("redis_port", redis.port.to_string()),
            ("redis_database", redis.database.to_string()),
        ]
    }

    /// Load a full set of answers from a YAML file (non-interactive mode).
    pub fn from_answers_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path.display(), e))
    }
}
