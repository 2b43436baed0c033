pub mod remote_am;

pub use remote_am::HttpRemoteAmClient;
