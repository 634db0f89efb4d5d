pub mod environment;
pub mod launch_stages;
pub mod mission;
