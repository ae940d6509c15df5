pub mod refresh;
pub mod run;
pub mod settings;
