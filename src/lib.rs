pub use conf::{KVConfig, ListConf};
pub use list::ListDequeMax;
pub use utils::*;

pub mod conf;
mod list;
#[cfg(feature = "logs")]
pub mod log;
mod utils;

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        thread,
    };

    use crate::{KVConfig, ListConf, ListDequeMax};

    #[test]
    fn it_works() {
        let kv = KVConfig::from_bytes(b"list.max=3");
        let cfg = ListConf::from_kv(&kv).unwrap().with_env();
        let mut ls = ListDequeMax::from_conf(&cfg).unwrap();
        for i in 0..cfg.max {
            assert!(ls.push_back(i));
        }
        println!("ls:{}", ls);
    }

    #[test]
    fn mutexs() {
        let ls = Arc::new(Mutex::new(ListDequeMax::with_max(100)));
        let mut hds = Vec::new();
        for n in 0..4 {
            let lsc = ls.clone();
            hds.push(thread::spawn(move || {
                for i in 0..30 {
                    if let Ok(mut l) = lsc.lock() {
                        l.push_back(n * 100 + i);
                    }
                }
            }));
        }
        for hd in hds {
            hd.join().unwrap();
        }
        let l = ls.lock().unwrap();
        assert_eq!(l.len(), 100);
        assert!(l.is_full());
    }
}
