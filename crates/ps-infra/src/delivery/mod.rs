pub mod log_channel;

pub use log_channel::LogOtpChannel;
