pub mod cancel;
pub mod network;
pub mod prober;
pub mod scanner;
pub mod vuln;
