mod category;
mod customer;
mod mock;
mod product;
mod supplier;

pub use category::*;
pub use customer::*;
pub use mock::*;
pub use product::*;
pub use supplier::*;

use log::LevelFilter;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}
