// Copyright 2017 Dmytro Milinevskyi <dmilinevskyi@gmail.com>

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Initializes the process wide logger.
///
/// Without arguments takes into account the `KINGLET_LOG` environment variable
/// which must conform to the [spec](spec/index.html).
///
/// Otherwise the passed `KEY=VALUE` arguments are applied,
/// normally those are the program arguments.
///
/// Returns the result of the configuration.
///
/// # Example
///
/// ```rust
/// #[macro_use]
/// extern crate kinglet;
/// use kinglet as kl;
///
/// use std::env;
///
/// fn main() {
///     kl_init!().unwrap();
///     kl_init!(env::args()).unwrap();
///     kl_init!(&["SET_LEVEL=4"]).unwrap();
///
///     assert_eq!(kl::level(), kl::LogLevel::DEBUG);
///     console!("Coucou!");
/// }
///
/// ```
#[macro_export]
macro_rules! kl_init {
    () => {{
        $crate::init()
    }};
    ($args:expr) => {{
        $crate::configure_from_arguments($args)
    }};
}
