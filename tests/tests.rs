mod controller;
mod util;

pub use util::TestSetupExt;
