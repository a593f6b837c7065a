// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// cargo run --example myprog -- SET_LEVEL=5 SET_OPTIONS=0x3801 SET_FILE=/tmp/myprog.log

#[macro_use]
extern crate kinglet;
use kinglet as kl;

use std::env;
use std::process;

fn main() {
    if let Err(err) = kl_init!(env::args().skip(1)) {
        eprintln!("myprog: {}", err);
        process::exit(1);
    }

    console!("I'm console");
    error!("I'm error");
    warning!("I'm warning");
    info!("I'm info");
    debug!("I'm debug");
    verbose!("I'm verbose");

    kl::flush();
}
