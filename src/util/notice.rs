use tracing::{error, info};

pub const SUCCESS: &str = "Giveaways updated successfully.";
pub const FAILURE: &str = "Failed to fetch or update giveaways.";

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

pub struct Console;

impl Notifier for Console {
    fn success(&self, message: &str) {
        println!("{}", message);
    }

    fn failure(&self, message: &str) {
        eprintln!("{}", message);
    }
}

pub struct Log;

impl Notifier for Log {
    fn success(&self, message: &str) {
        info!(notice = true, "{}", message);
    }

    fn failure(&self, message: &str) {
        error!(notice = true, "{}", message);
    }
}

#[cfg(test)]
pub mod recording {
    use std::sync::Mutex;

    use super::Notifier;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Notice {
        Success(String),
        Failure(String),
    }

    #[derive(Default)]
    pub struct Recording {
        pub notices: Mutex<Vec<Notice>>,
    }

    impl Recording {
        pub fn taken(&self) -> Vec<Notice> {
            std::mem::take(&mut *self.notices.lock().unwrap())
        }
    }

    impl Notifier for Recording {
        fn success(&self, message: &str) {
            self.notices
                .lock()
                .unwrap()
                .push(Notice::Success(message.to_string()));
        }

        fn failure(&self, message: &str) {
            self.notices
                .lock()
                .unwrap()
                .push(Notice::Failure(message.to_string()));
        }
    }
}
