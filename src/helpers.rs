// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::any;

/// Type name of the passed value.
pub fn type_name_of<T>(_: T) -> &'static str {
    any::type_name::<T>()
}

/// Reduces the type name of the marker item to the name of the enclosing function.
pub fn function_name(marker: &'static str) -> &'static str {
    let path = marker.trim_end_matches("::__marker")
        .trim_end_matches("::{{closure}}");
    match path.rfind("::") {
        Some(pos) => &path[pos + 2..],
        None => path,
    }
}

/// Name of the enclosing function, closures resolve to their parent.
#[macro_export]
macro_rules! this_function {
    () => {{
        fn __marker() {}
        $crate::helpers::function_name($crate::helpers::type_name_of(__marker))
    }};
}

/// Path of the current source file.
#[macro_export]
macro_rules! this_file {
    () => (file!())
}

/// Path of the current module.
#[macro_export]
macro_rules! this_module {
    () => (module_path!())
}
