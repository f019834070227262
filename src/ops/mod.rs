pub mod dropout;

pub use dropout::{find_dropouts, find_dropouts_with, DropoutReport, ScanStrategy};
