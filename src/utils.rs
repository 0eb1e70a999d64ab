use std::{error, io};

pub fn ioerr<E>(s: E, kd: Option<io::ErrorKind>) -> io::Error
where
    E: Into<Box<dyn error::Error + Send + Sync>>,
{
    io::Error::new(kd.unwrap_or(io::ErrorKind::Other), s)
}

pub fn env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
pub fn envs(key: &str, defs: &str) -> String {
    match env(key) {
        Some(vs) if !vs.is_empty() => vs,
        _ => String::from(defs),
    }
}
pub fn envi(key: &str, defs: i64) -> i64 {
    env(key)
        .and_then(|vs| vs.trim().parse::<i64>().ok())
        .unwrap_or(defs)
}

#[cfg(feature = "chrono")]
pub fn strftime<T>(dt: T, s: &str) -> String
where
    T: Into<chrono::DateTime<chrono::Local>>,
{
    format!("{}", dt.into().format(s))
}
#[cfg(feature = "chrono")]
pub fn strftime_off<T>(dt: T, s: &str, hour: i32) -> String
where
    T: Into<chrono::DateTime<chrono::Utc>>,
{
    match chrono::FixedOffset::east_opt(hour * 3600) {
        Some(v) => format!("{}", dt.into().with_timezone(&v).format(s)),
        None => "ErrHour".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    #[test]
    fn ioerrs() {
        let e = crate::ioerr("boom", None);
        assert_eq!(e.kind(), io::ErrorKind::Other);
        assert_eq!(e.to_string(), "boom");
        let e = crate::ioerr(format!("bad:{}", 1), Some(io::ErrorKind::InvalidInput));
        assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn envis() {
        assert_eq!(crate::envi("RUISLIST_TEST_UNSET_KEY", 7), 7);
        assert_eq!(crate::envs("RUISLIST_TEST_UNSET_KEY", "def"), "def");
        assert_eq!(crate::env("RUISLIST_TEST_UNSET_KEY"), None);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn tms() {
        let tm = std::time::UNIX_EPOCH;
        assert_eq!(crate::strftime_off(tm, "%Y-%m-%d %H:%M:%S", 8), "1970-01-01 08:00:00");
        assert_eq!(crate::strftime_off(tm, "%H", 100), "ErrHour");
        assert!(!crate::strftime(std::time::SystemTime::now(), "%+").is_empty());
    }
}
