use std::{
    io::{self, Write},
    time::SystemTime,
};

pub struct Logger {
    lev: log::LevelFilter,
    showstd: bool,
    showtm: bool,
    showfl: bool,
    showmod: bool,
    zone: Option<i32>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            lev: log::LevelFilter::Info,
            showstd: true,
            showtm: true,
            showfl: false,
            showmod: false,
            zone: None,
        }
    }
    pub fn from_conf(cfg: &crate::conf::ListConf) -> Self {
        let mut lg = Self::new();
        lg.level(cfg.level);
        lg
    }

    pub fn start(self) -> io::Result<()> {
        let lev = self.lev;
        log::set_boxed_logger(Box::new(self))
            .map_err(|e| crate::ioerr(format!("log::set_boxed_logger err:{}", e), None))?;
        log::set_max_level(lev);
        Ok(())
    }

    pub fn level(&mut self, lev: log::LevelFilter) -> &mut Self {
        self.lev = lev;
        self
    }
    pub fn timezone(&mut self, o: i32) -> &mut Self {
        self.zone = Some(o);
        self
    }
    pub fn hide_stdio(&mut self) -> &mut Self {
        self.showstd = false;
        self
    }
    pub fn hide_time(&mut self) -> &mut Self {
        self.showtm = false;
        self
    }
    pub fn show_file_info(&mut self) -> &mut Self {
        self.showfl = true;
        self
    }
    pub fn show_module(&mut self) -> &mut Self {
        self.showmod = true;
        self
    }

    pub fn format(&self, record: &log::Record) -> String {
        let mut msg = format!("{}\t", record.level());
        if self.showtm {
            msg.push_str(&format!(
                " [{}]",
                match self.zone {
                    Some(v) => crate::strftime_off(SystemTime::now(), "%Y-%m-%d %H:%M:%S", v),
                    None => crate::strftime(SystemTime::now(), "%Y-%m-%d %H:%M:%S"),
                }
            ));
        }
        if self.showfl {
            if let Some(flp) = record.file() {
                msg.push_str(&format!(" [{}]", flp));
            }
        }
        if self.showmod {
            if let Some(md) = record.module_path() {
                msg.push_str(&format!(" [{}]", md));
            }
        }
        msg.push_str(&format!(": {} \n", record.args()));
        msg
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.lev
    }

    fn log(&self, record: &log::Record) {
        if !self.showstd || !self.enabled(record.metadata()) {
            return;
        }
        let msg = self.format(record);
        let mut out = io::stdout().lock();
        let _ = out.write_all(msg.as_bytes());
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}
