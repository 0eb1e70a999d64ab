use std::{
    collections::{hash_map::Iter, HashMap},
    io,
    path::PathBuf,
};

/// `key=value` per line, `#` starts a comment line.
pub struct KVConfig {
    mp: HashMap<String, String>,
}

impl KVConfig {
    pub fn new() -> Self {
        Self { mp: HashMap::new() }
    }
    pub fn from_file<P: Into<PathBuf>>(pth: P) -> io::Result<Self> {
        let pth = pth.into();
        let bts = std::fs::read(&pth)
            .map_err(|e| crate::ioerr(format!("kv read {} err:{}", pth.display(), e), Some(e.kind())))?;
        Ok(Self::from_bytes(&bts))
    }
    pub fn from_bytes(bts: &[u8]) -> Self {
        let mut kvc = Self::new();
        kvc.parses(&String::from_utf8_lossy(bts));
        kvc
    }

    fn parses(&mut self, conts: &str) {
        for line in conts.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((k, v)) = line.split_once('=') {
                let k = k.trim();
                if !k.is_empty() {
                    self.mp.insert(k.to_string(), v.trim().to_string());
                }
            }
        }
    }

    pub fn get<T: AsRef<str>>(&self, key: T) -> Option<&String> {
        self.mp.get(key.as_ref())
    }
    pub fn geti<T: AsRef<str>>(&self, key: T) -> Option<i64> {
        self.get(key).and_then(|v| v.parse::<i64>().ok())
    }
    pub fn set<T: Into<String>>(&mut self, key: T, val: T) {
        self.mp.insert(key.into(), val.into());
    }
    pub fn iter(&self) -> Iter<String, String> {
        self.mp.iter()
    }
    pub fn to_string(&self) -> String {
        let mut cont = String::new();
        for (k, v) in &self.mp {
            cont.push_str(format!("{}={}\n", k, v).as_str());
        }
        cont
    }
}

pub const KEY_MAX: &str = "list.max";
pub const KEY_LEVEL: &str = "log.level";

/// Settings for building a [`crate::ListDequeMax`] and its logger.
#[derive(Clone, Debug, PartialEq)]
pub struct ListConf {
    pub max: i64,
    pub level: log::LevelFilter,
}

impl ListConf {
    pub fn from_kv(kv: &KVConfig) -> io::Result<Self> {
        let max = match kv.get(KEY_MAX) {
            None => {
                return Err(crate::ioerr(
                    format!("{} not found", KEY_MAX),
                    Some(io::ErrorKind::InvalidInput),
                ))
            }
            Some(v) => v.parse::<i64>().map_err(|e| {
                crate::ioerr(
                    format!("{}={} err:{}", KEY_MAX, v, e),
                    Some(io::ErrorKind::InvalidInput),
                )
            })?,
        };
        let level = match kv.get(KEY_LEVEL) {
            None => log::LevelFilter::Info,
            Some(v) => v.parse::<log::LevelFilter>().map_err(|e| {
                crate::ioerr(
                    format!("{}={} err:{}", KEY_LEVEL, v, e),
                    Some(io::ErrorKind::InvalidInput),
                )
            })?,
        };
        Ok(Self { max, level })
    }

    /// `LIST_MAX` and `LOG_LEVEL` in the environment take precedence.
    pub fn with_env(mut self) -> Self {
        self.max = crate::envi("LIST_MAX", self.max);
        if let Ok(v) = crate::envs("LOG_LEVEL", "").parse::<log::LevelFilter>() {
            self.level = v;
        }
        self
    }
}
