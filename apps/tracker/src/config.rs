use std::fmt;
use std::str::FromStr;

/// Which persistence backend the tracker runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    File,
    Memory,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "file" | "json" => Ok(StorageKind::File),
            "memory" => Ok(StorageKind::Memory),
            other => anyhow::bail!("Invalid BB_STORAGE '{}': expected sqlite, file or memory", other),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageKind::Sqlite => "sqlite",
            StorageKind::File => "file",
            StorageKind::Memory => "memory",
        })
    }
}

pub struct Config {
    pub storage: StorageKind,
    pub db_path: String,
    pub data_file: String,
    pub seed_sample: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = lookup("BB_STORAGE")
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or(StorageKind::Sqlite);
        let db_path = lookup("BB_DB_PATH").unwrap_or_else(|| "./db/balancebook.db".into());
        let data_file = lookup("BB_DATA_FILE").unwrap_or_else(|| "./db/balancebook.json".into());
        let seed_sample = lookup("BB_SEED_SAMPLE")
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            storage,
            db_path,
            data_file,
            seed_sample,
        })
    }
}
